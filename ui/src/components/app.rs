use dioxus::prelude::*;

use amethst_common::nav::{self, NavEntry, ViewId, NAV_ENTRIES};
use chrono::Datelike;

use super::faq_view::FaqView;
use super::home_view::HomeView;
use super::resources_view::ResourcesView;
use super::video_view::{RectalVideoView, StudyVideoView};

static MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/resources")]
    Resources {},
    #[route("/faq")]
    Faq {},
    #[route("/video")]
    Video {},
    #[route("/rectalvideo")]
    RectalVideo {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! { Router::<Route> {} }
}

#[component]
fn SiteLayout() -> Element {
    let nav_handle = use_navigator();
    let current_path = use_route::<Route>().to_string();
    let year = chrono::Utc::now().year();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "AMETHST 5000" }
        div { class: "amethst-app",
            header { class: "app-header",
                button {
                    class: "site-title",
                    onclick: move |_| { nav_handle.push(Route::Home {}); },
                    "AMETHST5K"
                }
                nav { class: "site-nav",
                    for entry in NAV_ENTRIES {
                        NavButton { entry, current_path: current_path.clone() }
                    }
                }
            }
            main { class: "site-main",
                Outlet::<Route> {}
            }
            footer { class: "site-footer",
                p { "\u{a9} {year} AMETHST5K." }
                p {
                    "AMETHST 5000 is a research study with the CUNY School of Public Health and Florida International University."
                }
                p { "Email us at: amethst5000@sph.cuny.edu" }
                p { "Or text us at: (833) 416-4716" }
            }
        }
    }
}

/// A single nav link, highlighted when its path matches the current path
/// exactly.
#[component]
fn NavButton(entry: NavEntry, current_path: String) -> Element {
    let nav_handle = use_navigator();
    let class = if nav::is_active(&current_path, &entry) {
        "nav-link active"
    } else {
        "nav-link"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| { nav_handle.push(route_for(entry.view)); },
            "{entry.label}"
        }
    }
}

fn route_for(view: ViewId) -> Route {
    match view {
        ViewId::Home => Route::Home {},
        ViewId::Resources => Route::Resources {},
        ViewId::Faq => Route::Faq {},
        ViewId::Video => Route::Video {},
        ViewId::RectalVideo => Route::RectalVideo {},
    }
}

fn render_view(view: ViewId) -> Element {
    match view {
        ViewId::Home => rsx! { HomeView {} },
        ViewId::Resources => rsx! { ResourcesView {} },
        ViewId::Faq => rsx! { FaqView {} },
        ViewId::Video => rsx! { StudyVideoView {} },
        ViewId::RectalVideo => rsx! { RectalVideoView {} },
    }
}

/// Route component: renders the study description.
#[component]
fn Home() -> Element {
    render_view(ViewId::Home)
}

/// Route component: renders the participant resources.
#[component]
fn Resources() -> Element {
    render_view(ViewId::Resources)
}

/// Route component: renders the FAQ accordion.
#[component]
fn Faq() -> Element {
    render_view(ViewId::Faq)
}

/// Route component: renders the main study video.
#[component]
fn Video() -> Element {
    render_view(ViewId::Video)
}

/// Route component: renders the rectal sample collection video.
#[component]
fn RectalVideo() -> Element {
    render_view(ViewId::RectalVideo)
}

/// Catch-all route: any path outside the table resolves to the home view,
/// rendered in place with the requested URL left as-is. There is no
/// not-found page.
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("no route for {path:?}, rendering home");
    render_view(nav::resolve(&path))
}
