/// An outbound participant resource: rendered as a card with a link that
/// opens as an independent navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

/// Participant resources, in display order.
///
/// Links are placeholders until the study documents are published.
pub const RESOURCES: [ResourceLink; 4] = [
    ResourceLink {
        title: "Study Protocol Document",
        description: "Detailed information about the study design, methodology, and objectives.",
        url: "#",
    },
    ResourceLink {
        title: "Participant Handbook",
        description: "A comprehensive guide for participants, covering what to expect and how to prepare.",
        url: "#",
    },
    ResourceLink {
        title: "Data Security & Privacy",
        description: "Information on how your data is collected, stored, and protected.",
        url: "#",
    },
    ResourceLink {
        title: "Contact Information",
        description: "Ways to get in touch with the study team for questions or support.",
        url: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_resources_in_order() {
        let titles: Vec<_> = RESOURCES.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            [
                "Study Protocol Document",
                "Participant Handbook",
                "Data Security & Privacy",
                "Contact Information",
            ]
        );
    }

    #[test]
    fn test_every_resource_has_copy_and_link() {
        for resource in RESOURCES {
            assert!(!resource.description.is_empty());
            assert!(!resource.url.is_empty());
        }
    }
}
