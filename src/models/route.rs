/// Pages reachable through the hash router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Collections,
    /// Alias of the collections page kept for the navigation bar and legacy links
    Bestsellers,
    Gallery,
    NewArrivals,
    About,
    Qr,
    NotFound,
}

/// Paths that used to be served without a hash prefix.
pub const LEGACY_PATHS: [&str; 6] = [
    "/collection",
    "/bestsellers",
    "/gallery",
    "/new-arrivals",
    "/about",
    "/qr",
];

impl Route {
    /// Map a router path (`/gallery`, `/`) onto a route. Unknown paths map to `NotFound`.
    pub fn resolve(path: &str) -> Self {
        match normalize_path(path).as_str() {
            "/" | "/collection" => Self::Collections,
            "/bestsellers" => Self::Bestsellers,
            "/gallery" => Self::Gallery,
            "/new-arrivals" => Self::NewArrivals,
            "/about" => Self::About,
            "/qr" => Self::Qr,
            _ => Self::NotFound,
        }
    }

    /// Canonical router path for this route
    pub const fn path(self) -> &'static str {
        match self {
            Self::Collections | Self::NotFound => "/",
            Self::Bestsellers => "/bestsellers",
            Self::Gallery => "/gallery",
            Self::NewArrivals => "/new-arrivals",
            Self::About => "/about",
            Self::Qr => "/qr",
        }
    }

    /// `href` value for an anchor pointing at this route
    pub fn href(self) -> String {
        format!("#{}", self.path())
    }
}

/// Entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "COLLECTIONS",
        route: Route::Collections,
    },
    NavItem {
        label: "NEW ARRIVALS",
        route: Route::NewArrivals,
    },
    NavItem {
        label: "GALLERY",
        route: Route::Gallery,
    },
    NavItem {
        label: "BESTSELLERS",
        route: Route::Bestsellers,
    },
    NavItem {
        label: "ABOUT",
        route: Route::About,
    },
];

/// Strip a query string and trailing slashes; the empty path becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let without_query = path.split('?').next().unwrap_or_default();
    let trimmed = without_query.trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Extract the router path from a `location.hash` value (`#/gallery` -> `/gallery`).
pub fn path_from_hash(hash: &str) -> String {
    normalize_path(hash.strip_prefix('#').unwrap_or(hash))
}

/// Compute the hash-routed URL a legacy path should be replaced with.
///
/// Returns `None` when the location already carries a hash route or the pathname
/// is not a legacy path. The returned URL has pathname `/`, which is never legacy,
/// so applying it cannot trigger a second redirect.
pub fn legacy_redirect(pathname: &str, hash: &str) -> Option<String> {
    if !matches!(hash, "" | "#") {
        return None;
    }

    let candidate = pathname.trim_end_matches('/');
    LEGACY_PATHS
        .iter()
        .find(|legacy| **legacy == candidate)
        .map(|legacy| format!("/#{legacy}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(Route::resolve("/"), Route::Collections);
        assert_eq!(Route::resolve("/gallery"), Route::Gallery);
        assert_eq!(Route::resolve("/about"), Route::About);
        assert_eq!(Route::resolve("/new-arrivals"), Route::NewArrivals);
        assert_eq!(Route::resolve("/qr"), Route::Qr);
        assert_eq!(Route::resolve("/collection"), Route::Collections);
        assert_eq!(Route::resolve("/bestsellers"), Route::Bestsellers);
    }

    #[test]
    fn test_unknown_path_is_not_found_with_way_home() {
        let route = Route::resolve("/unknown");
        assert_eq!(route, Route::NotFound);
        assert_eq!(Route::resolve(route.path()), Route::Collections);
        assert_eq!(Route::Collections.href(), "#/");
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/gallery/"), "/gallery");
        assert_eq!(normalize_path("/gallery?ref=qr"), "/gallery");
        assert_eq!(normalize_path("about"), "/about");
    }

    #[test]
    fn test_path_from_hash() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/"), "/");
        assert_eq!(path_from_hash("#/qr"), "/qr");
        assert_eq!(path_from_hash("#/new-arrivals?utm=1"), "/new-arrivals");
    }

    #[test]
    fn test_every_path_round_trips_through_resolve() {
        for route in [
            Route::Collections,
            Route::Bestsellers,
            Route::Gallery,
            Route::NewArrivals,
            Route::About,
            Route::Qr,
        ] {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }

    #[test]
    fn test_legacy_gallery_redirects_exactly_once() {
        let target = legacy_redirect("/gallery", "").expect("legacy path should redirect");
        assert_eq!(target, "/#/gallery");

        // Simulate the browser applying the replacement
        let (pathname, hash) = target.split_at(1);
        assert_eq!(pathname, "/");
        assert_eq!(legacy_redirect(pathname, hash), None);
        assert_eq!(Route::resolve(&path_from_hash(hash)), Route::Gallery);
    }

    #[test]
    fn test_all_legacy_paths_redirect_to_hash_equivalent() {
        for legacy in LEGACY_PATHS {
            assert_eq!(legacy_redirect(legacy, ""), Some(format!("/#{legacy}")));
        }
        assert_eq!(legacy_redirect("/qr/", "#"), Some("/#/qr".to_string()));
    }

    #[test]
    fn test_no_redirect_for_hash_or_unknown_paths() {
        assert_eq!(legacy_redirect("/gallery", "#/about"), None);
        assert_eq!(legacy_redirect("/", ""), None);
        assert_eq!(legacy_redirect("/shop", ""), None);
    }

    #[test]
    fn test_nav_items_point_at_distinct_paths() {
        let mut paths: Vec<_> = NAV_ITEMS.iter().map(|item| item.route.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), NAV_ITEMS.len());
    }
}
