use dioxus::prelude::*;

use amethst_common::resources::RESOURCES;

#[component]
pub fn ResourcesView() -> Element {
    rsx! {
        section { class: "page-card resources-view",
            h1 { "Participant Resources" }
            p { class: "page-intro",
                "Here you will find a collection of helpful resources to guide you through your participation in AMETHST."
            }
            div { class: "resource-grid",
                {RESOURCES.iter().map(|resource| {
                    rsx! {
                        div { class: "resource-card",
                            key: "{resource.title}",
                            h2 { "{resource.title}" }
                            p { "{resource.description}" }
                            a {
                                class: "resource-link",
                                href: "{resource.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Access Resource"
                            }
                        }
                    }
                })}
            }
        }
    }
}
