use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::config::SiteConfig;
use crate::models::route::{path_from_hash, Route};
use crate::models::theme::{ThemeMode, ThemeStore};
use crate::platform::location;
use crate::platform::storage::open_preference_storage;

/// Theme store plus a signal mirror so views can react to it.
/// Shared with all components via `use_context()`.
#[derive(Clone)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
    store: SendWrapper<Rc<ThemeStore>>,
}

impl ThemeContext {
    /// Restore the stored preference and keep the document root's `dark` class in sync
    pub fn install(config: &SiteConfig) -> Self {
        let store = Rc::new(ThemeStore::load(
            open_preference_storage(),
            config.theme_storage_key.clone(),
        ));
        let mode = RwSignal::new(store.current());

        apply_document_theme(store.current());
        store.subscribe(apply_document_theme);
        store.subscribe(move |next| mode.set(next));

        Self {
            mode,
            store: SendWrapper::new(store),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn toggle(&self) {
        let mode = self.store.toggle();
        tracing::debug!(%mode, "theme toggled");
    }
}

fn apply_document_theme(mode: ThemeMode) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    if let Err(e) = root
        .class_list()
        .toggle_with_force("dark", mode == ThemeMode::Dark)
    {
        tracing::warn!("failed to apply theme class: {e:?}");
    }
}

/// Current hash-router path. Shared with all components via `use_context()`.
#[derive(Clone, Copy)]
pub struct Navigator {
    path: RwSignal<String>,
}

impl Navigator {
    /// Start tracking `location.hash`
    pub fn install() -> Self {
        let path = RwSignal::new(location::current_path());

        // Lives as long as the page
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            let next = location::current_path();
            if path.with_untracked(|current| *current != next) {
                location::scroll_to_top();
                path.set(next);
            }
        });
        std::mem::forget(handle);

        Self { path }
    }

    pub fn path(&self) -> String {
        self.path.get()
    }

    pub fn route(&self) -> Route {
        self.path.with(|path| Route::resolve(path))
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.path.with(|path| path == route.path())
    }

    pub fn navigate(&self, route: Route) {
        let target = route.path();
        tracing::debug!("navigating to {target}");
        location::set_hash_path(target);
        self.path.set(path_from_hash(target));
    }
}
