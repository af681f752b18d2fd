use leptos::prelude::*;

use crate::models::route::Route;

const ARTWORK: &str = "https://i.ibb.co/W4FPPWRJ/404.png";

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="fixed inset-0 w-full h-full bg-gradient-to-br from-rose-50 to-slate-50 dark:from-slate-900 dark:to-slate-800 flex items-center justify-center">
            <div class="w-full h-full max-w-[1920px] mx-auto relative flex items-center justify-center">
                <div
                    class="w-full h-full absolute inset-0 flex items-center justify-center bg-center bg-no-repeat bg-contain"
                    style=format!("background-image: url('{ARTWORK}')")
                ></div>
                <div class="absolute bottom-8 md:bottom-12 w-full text-center z-10">
                    <a
                        href=Route::Collections.href()
                        class="inline-flex items-center px-8 py-4 bg-slate-900 dark:bg-white text-white dark:text-slate-900 rounded-full text-lg tracking-wider hover:bg-slate-800 dark:hover:bg-slate-100 transition-all duration-300 shadow-lg hover:shadow-xl transform hover:scale-105"
                    >
                        "Return Home"
                    </a>
                </div>
            </div>
        </div>
    }
}
