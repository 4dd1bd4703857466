/// A renderable page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Home,
    Resources,
    Faq,
    Video,
    RectalVideo,
}

/// One entry in the header navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub view: ViewId,
}

/// Header navigation, in display order.
pub const NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry {
        label: "Home",
        path: "/",
        view: ViewId::Home,
    },
    NavEntry {
        label: "Resources",
        path: "/resources",
        view: ViewId::Resources,
    },
    NavEntry {
        label: "FAQ",
        path: "/faq",
        view: ViewId::Faq,
    },
    NavEntry {
        label: "Study Video",
        path: "/video",
        view: ViewId::Video,
    },
    NavEntry {
        label: "Rectal Video",
        path: "/rectalvideo",
        view: ViewId::RectalVideo,
    },
];

/// Resolve a request path to the view that renders for it.
///
/// Matching is exact string equality, case-sensitive. Any path outside the
/// route table falls back to the home view; there is no not-found page.
pub fn resolve(path: &str) -> ViewId {
    match path {
        "/" => ViewId::Home,
        "/resources" => ViewId::Resources,
        "/faq" => ViewId::Faq,
        "/video" => ViewId::Video,
        "/rectalvideo" => ViewId::RectalVideo,
        _ => ViewId::Home,
    }
}

/// Whether a nav entry is highlighted for the given path.
///
/// Exact equality only: no prefix matching, no trailing-slash normalization,
/// so "/resources/" does not activate the "/resources" entry.
pub fn is_active(path: &str, entry: &NavEntry) -> bool {
    path == entry.path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_route_table() {
        assert_eq!(resolve("/"), ViewId::Home);
        assert_eq!(resolve("/resources"), ViewId::Resources);
        assert_eq!(resolve("/faq"), ViewId::Faq);
        assert_eq!(resolve("/video"), ViewId::Video);
        assert_eq!(resolve("/rectalvideo"), ViewId::RectalVideo);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_home() {
        assert_eq!(resolve("/unknown-page"), ViewId::Home);
        assert_eq!(resolve("/faq/extra"), ViewId::Home);
        assert_eq!(resolve(""), ViewId::Home);
        assert_eq!(resolve("resources"), ViewId::Home);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve("/FAQ"), ViewId::Home);
        assert_eq!(resolve("/Resources"), ViewId::Home);
    }

    #[test]
    fn test_resolve_no_trailing_slash_normalization() {
        assert_eq!(resolve("/resources/"), ViewId::Home);
        assert_eq!(resolve("/video/"), ViewId::Home);
    }

    #[test]
    fn test_is_active_exact_match() {
        let entry = NAV_ENTRIES[1];
        assert_eq!(entry.path, "/resources");
        assert!(is_active("/resources", &entry));
        assert!(!is_active("/resources/", &entry));
        assert!(!is_active("/resource", &entry));
        assert!(!is_active("/", &entry));
    }

    #[test]
    fn test_unknown_path_activates_nothing() {
        assert!(NAV_ENTRIES.iter().all(|e| !is_active("/unknown-page", e)));
    }

    #[test]
    fn test_nav_order_is_fixed() {
        let labels: Vec<_> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["Home", "Resources", "FAQ", "Study Video", "Rectal Video"]
        );
    }

    #[test]
    fn test_nav_paths_resolve_to_their_own_view() {
        for entry in NAV_ENTRIES {
            assert_eq!(resolve(entry.path), entry.view);
        }
    }
}
