use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::components::icons::{self, Icon};
use crate::components::ThemeToggle;
use crate::config::SiteConfig;
use crate::models::app_state::Navigator;
use crate::models::route::{NavItem, Route, NAV_ITEMS};

/// Vertical scroll offset past which the bar gets its frosted background
const SCROLLED_OFFSET: f64 = 50.0;

/// Fixed top navigation: brand, route links, search and theme buttons.
#[component]
pub fn NavBar(search_open: RwSignal<bool>) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let navigator = use_context::<Navigator>().expect("Navigator context missing");

    let scrolled = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
        let offset = web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or_default();
        scrolled.set(offset > SCROLLED_OFFSET);
    });
    let scroll_listener = SendWrapper::new(scroll_listener);
    on_cleanup(move || scroll_listener.take().remove());

    let nav_class = move || {
        if scrolled.get() {
            "fixed w-full z-50 transition-all duration-300 bg-white/80 dark:bg-slate-900/80 backdrop-blur-md shadow-sm"
        } else {
            "fixed w-full z-50 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    <div class="flex-shrink-0">
                        <a
                            href=Route::Collections.href()
                            class="text-2xl font-serif text-slate-800 dark:text-white"
                        >
                            {config.brand_name.clone()}
                        </a>
                    </div>

                    <div class="hidden md:flex space-x-8">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| desktop_link(item, navigator))
                            .collect_view()}
                    </div>

                    <div class="flex items-center space-x-4">
                        <button
                            on:click=move |_| search_open.set(true)
                            class="flex items-center focus:outline-none focus:ring-2 focus:ring-slate-400 dark:focus:ring-slate-600 focus:ring-offset-2 rounded-full p-1"
                            aria-label="Open search"
                        >
                            <Icon
                                paths=icons::SEARCH
                                class="w-6 h-6 text-slate-600 dark:text-slate-400 hover:text-slate-900 dark:hover:text-white transition-colors duration-200"
                            />
                        </button>
                        <ThemeToggle />
                        <button
                            class="md:hidden"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                            aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        >
                            {move || {
                                let paths = if menu_open.get() { icons::CLOSE } else { icons::MENU };
                                view! { <Icon paths=paths class="w-6 h-6 text-slate-600 dark:text-slate-400" /> }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white/95 dark:bg-slate-900/95 backdrop-blur-md border-b border-slate-100 dark:border-slate-800">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| mobile_link(item, navigator, menu_open))
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

fn desktop_link(item: NavItem, navigator: Navigator) -> impl IntoView {
    let class = move || {
        let base = "text-slate-600 dark:text-slate-300 hover:text-slate-900 dark:hover:text-white tracking-widest text-sm font-light transition-colors duration-200";
        if navigator.is_active(item.route) {
            format!("{base} text-slate-900 dark:text-white font-medium")
        } else {
            base.to_string()
        }
    };

    view! {
        <a href=item.route.href() class=class>
            {item.label}
        </a>
    }
}

fn mobile_link(item: NavItem, navigator: Navigator, menu_open: RwSignal<bool>) -> impl IntoView {
    let class = move || {
        let base = "block px-3 py-2 text-base font-light text-slate-600 dark:text-slate-300 hover:text-slate-900 dark:hover:text-white tracking-widest";
        if navigator.is_active(item.route) {
            format!("{base} text-slate-900 dark:text-white font-medium bg-slate-50 dark:bg-slate-800")
        } else {
            base.to_string()
        }
    };

    view! {
        <a href=item.route.href() class=class on:click=move |_| menu_open.set(false)>
            {item.label}
        </a>
    }
}
