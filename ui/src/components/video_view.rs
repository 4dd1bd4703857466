use dioxus::prelude::*;

use amethst_common::video::{VideoContent, RECTAL_VIDEO, STUDY_VIDEO};

/// Shared layout for a single-video page: heading, blurb, 16:9 embed.
///
/// The embed URL goes straight into the player iframe; loading failures are
/// the player's to handle.
#[component]
fn VideoEmbed(content: VideoContent) -> Element {
    rsx! {
        section { class: "page-card video-view",
            h1 { "{content.title}" }
            p { class: "page-intro", "{content.description}" }
            div { class: "video-frame",
                iframe {
                    src: "{content.embed_url}",
                    title: "{content.title}",
                    allow: "autoplay; fullscreen; picture-in-picture",
                    allowfullscreen: true,
                }
            }
        }
    }
}

#[component]
pub fn StudyVideoView() -> Element {
    rsx! { VideoEmbed { content: STUDY_VIDEO } }
}

#[component]
pub fn RectalVideoView() -> Element {
    rsx! { VideoEmbed { content: RECTAL_VIDEO } }
}
