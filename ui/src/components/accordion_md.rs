use dioxus::prelude::*;
use pulldown_cmark::{Options, Parser, html};

use amethst_common::accordion::Accordion;

/// One disclosure section: a question heading plus its rendered answer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Section {
    pub(crate) question: String,
    pub(crate) answer_html: String,
}

fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    let mut html_out = String::new();
    html::push_html(&mut html_out, Parser::new_ext(source, opts));
    html_out
}

/// Split a markdown document on `## ` headings.
///
/// Everything before the first heading is the preamble; each heading opens a
/// section whose body runs to the next heading. Both the preamble and the
/// section bodies come back rendered to HTML.
pub(crate) fn split_sections(source: &str) -> (String, Vec<Section>) {
    let mut preamble = String::new();
    let mut raw: Vec<(String, String)> = Vec::new();

    for line in source.lines() {
        if let Some(question) = line.strip_prefix("## ") {
            raw.push((question.trim().to_string(), String::new()));
        } else if let Some((_, body)) = raw.last_mut() {
            body.push_str(line);
            body.push('\n');
        } else {
            preamble.push_str(line);
            preamble.push('\n');
        }
    }

    let sections = raw
        .into_iter()
        .map(|(question, body)| Section {
            question,
            answer_html: render_markdown(&body),
        })
        .collect();

    (render_markdown(&preamble), sections)
}

#[component]
pub fn AccordionMarkdown(source: &'static str) -> Element {
    let parsed = use_hook(|| split_sections(source));
    let mut accordion = use_signal(Accordion::new);

    let (preamble_html, sections) = &parsed;

    rsx! {
        div { class: "accordion",
            div {
                class: "page-content",
                dangerous_inner_html: "{preamble_html}"
            }
            for (i, section) in sections.iter().enumerate() {
                div { class: "accordion-section",
                    button {
                        class: "accordion-header",
                        onclick: move |_| accordion.write().toggle(i),
                        span { class: "accordion-question", "{section.question}" }
                        span { class: "accordion-chevron",
                            if accordion.read().is_open(i) { "\u{25be}" } else { "\u{25b8}" }
                        }
                    }
                    if accordion.read().is_open(i) {
                        div {
                            class: "accordion-body page-content",
                            dangerous_inner_html: "{section.answer_html}"
                        }
                    }
                }
            }
        }
    }
}
