use crate::models::route::{legacy_redirect, path_from_hash};

/// Router path of the current `location.hash`
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map_or_else(|| "/".to_string(), |hash| path_from_hash(&hash))
}

/// Point the hash router at `path`, scrolling back to the top of the page
pub fn set_hash_path(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(e) = window.location().set_hash(path) {
        tracing::warn!("failed to navigate to {path}: {e:?}");
        return;
    }
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Rewrite a pre-hash-routing URL (`/gallery`) to its hash equivalent (`/#/gallery`).
///
/// Returns true when a redirect was issued; the page is about to reload and
/// mounting should be skipped.
pub fn redirect_legacy_path() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let location = window.location();

    let (Ok(pathname), Ok(hash)) = (location.pathname(), location.hash()) else {
        return false;
    };

    let Some(target) = legacy_redirect(&pathname, &hash) else {
        return false;
    };

    tracing::info!("redirecting legacy path {pathname} to {target}");
    match location.replace(&target) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("legacy redirect failed: {e:?}");
            false
        }
    }
}
