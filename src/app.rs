use leptos::prelude::*;

use crate::components::{CustomCursor, NavBar, SearchOverlay};
use crate::config::SiteConfig;
use crate::models::{Navigator, Route, ThemeContext};
use crate::pages::{
    AboutPage, CollectionsPage, GalleryPage, NewArrivalsPage, NotFoundPage, QrLandingPage,
};

/// Root application component that provides global context and renders the current route.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let theme = ThemeContext::install(&config);
    let navigator = Navigator::install();
    let search_open = RwSignal::new(false);
    let route = Memo::new(move |_| navigator.route());

    // Provide context to all child components
    provide_context(config);
    provide_context(theme);
    provide_context(navigator);

    view! {
        <div class="min-h-screen bg-gradient-to-br from-rose-50 to-slate-50 dark:from-slate-900 dark:to-slate-800 dark:text-white transition-colors duration-300">
            <CustomCursor />
            <NavBar search_open=search_open />
            <SearchOverlay open=search_open />
            <main>{move || route_view(route.get())}</main>
        </div>
    }
}

fn route_view(route: Route) -> AnyView {
    match route {
        Route::Collections | Route::Bestsellers => view! { <CollectionsPage /> }.into_any(),
        Route::Gallery => view! { <GalleryPage /> }.into_any(),
        Route::NewArrivals => view! { <NewArrivalsPage /> }.into_any(),
        Route::About => view! { <AboutPage /> }.into_any(),
        Route::Qr => view! { <QrLandingPage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}
