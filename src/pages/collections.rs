use leptos::prelude::*;

use crate::models::route::Route;

const HERO_BACKDROP: &str = "https://images.unsplash.com/photo-1596462502278-27bfdc403348?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80";
const HERO_IMAGE: &str =
    "https://i.ibb.co/cKgSGZXH/Hero.png?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80";

/// Landing hero. Also served for `/collection` and `/bestsellers`.
#[component]
pub fn CollectionsPage() -> impl IntoView {
    view! {
        <div class="relative min-h-screen flex items-center">
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute inset-0 bg-[radial-gradient(circle_at_top_right,_var(--tw-gradient-stops))] from-rose-50 via-slate-50 to-rose-100 dark:from-slate-900 dark:via-slate-800 dark:to-slate-900 opacity-70"></div>
                <div
                    class="absolute inset-0 bg-cover bg-center mix-blend-overlay opacity-30"
                    style=format!("background-image: url('{HERO_BACKDROP}')")
                ></div>
            </div>

            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-32">
                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <div class="text-center md:text-left animate-fade-up">
                        <h2 class="text-4xl md:text-6xl font-serif text-slate-800 dark:text-white mb-6 leading-tight">
                            "Discover Your Signature Scent"
                        </h2>
                        <p class="text-lg md:text-xl text-slate-600 dark:text-slate-300 mb-8 font-light">
                            "Curated fragrances for the modern individual"
                        </p>
                        <a
                            href=Route::Gallery.href()
                            class="inline-block bg-slate-900 dark:bg-white text-white dark:text-slate-900 px-8 py-3 rounded-full text-lg tracking-wider hover:bg-slate-800 dark:hover:bg-slate-100 transition-all duration-300 shadow-sm hover:shadow-md"
                        >
                            "EXPLORE"
                        </a>
                    </div>

                    <div class="hidden md:block">
                        <img
                            src=HERO_IMAGE
                            alt="Luxury Perfume"
                            class="rounded-[40px] shadow-xl hover:scale-[1.02] transition-transform duration-500"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
