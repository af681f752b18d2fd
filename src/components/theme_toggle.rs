use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::models::app_state::ThemeContext;
use crate::models::theme::ThemeMode;

/// Sun/moon button flipping the site theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_context::<ThemeContext>().expect("ThemeContext context missing");

    let is_light = {
        let theme = theme.clone();
        move || theme.mode() == ThemeMode::Light
    };

    let icon_class = move |visible: bool, hidden_rotation: &str| {
        if visible {
            "absolute inset-0 transition-all duration-300 transform opacity-100 rotate-0".to_string()
        } else {
            format!("absolute inset-0 transition-all duration-300 transform opacity-0 {hidden_rotation}")
        }
    };

    view! {
        <button
            on:click=move |_| theme.toggle()
            class="relative p-2 rounded-full hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-slate-400 dark:focus:ring-slate-600"
            aria-label={
                let is_light = is_light.clone();
                move || if is_light() { "Switch to dark theme" } else { "Switch to light theme" }
            }
        >
            <div class="relative w-6 h-6 text-slate-600 hover:text-slate-900 dark:text-slate-400 dark:hover:text-white">
                <span class={
                    let is_light = is_light.clone();
                    move || icon_class(is_light(), "rotate-90")
                }>
                    <Icon paths=icons::SUN class="w-6 h-6" />
                </span>
                <span class={
                    let is_light = is_light.clone();
                    move || icon_class(!is_light(), "-rotate-90")
                }>
                    <Icon paths=icons::MOON class="w-6 h-6" />
                </span>
            </div>
        </button>
    }
}
