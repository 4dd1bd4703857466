use dioxus::prelude::*;
use pulldown_cmark::{Options, Parser, html};

const STUDY_MD: &str = include_str!("../../../docs/study.md");

#[component]
pub fn HomeView() -> Element {
    let html_content = use_memo(move || {
        let mut opts = Options::empty();
        opts.insert(Options::ENABLE_TABLES);
        opts.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(STUDY_MD, opts);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    });

    rsx! {
        section { class: "page-card study-view",
            h1 { "#AMETHST5K" }
            div {
                class: "page-content",
                dangerous_inner_html: "{html_content}"
            }
        }
    }
}
