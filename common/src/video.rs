/// A video page: display copy plus an externally hosted embed.
///
/// The embed URL is an opaque reference handed to the third-party player;
/// nothing here parses or validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoContent {
    pub title: &'static str,
    pub description: &'static str,
    pub embed_url: &'static str,
}

/// The main study walkthrough video.
pub const STUDY_VIDEO: VideoContent = VideoContent {
    title: "HIV and Rectal Sample Collection",
    description: "This video provides a comprehensive overview of the study procedures and what participants can expect.",
    embed_url: "https://player.vimeo.com/video/843216767",
};

/// The rectal sample collection walkthrough.
pub const RECTAL_VIDEO: VideoContent = VideoContent {
    title: "Rectal Sample Collection",
    description: "A step-by-step demonstration of collecting a rectal sample at home.",
    embed_url: "https://player.vimeo.com/video/843245895",
};
