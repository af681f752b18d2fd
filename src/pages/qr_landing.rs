use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::config::SiteConfig;
use crate::models::route::Route;
use crate::platform::dom::current_year;

struct SocialLink {
    icon: &'static [&'static str],
    title: &'static str,
    handle: &'static str,
    url: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: icons::INSTAGRAM,
        title: "Instagram",
        handle: "@Talwarperfume",
        url: "https://instagram.com/talwarperfume",
    },
    SocialLink {
        icon: icons::FACEBOOK,
        title: "Facebook",
        handle: "Talwar Perfume",
        url: "https://facebook.com/talwarperfume",
    },
    SocialLink {
        icon: icons::MESSAGE_CIRCLE,
        title: "WhatsApp",
        handle: "+91 99091 66990",
        url: "https://wa.me/919909166990",
    },
];

/// Standalone page printed QR codes point at.
#[component]
pub fn QrLandingPage() -> impl IntoView {
    let brand = use_context::<SiteConfig>()
        .expect("SiteConfig context missing")
        .brand_name;

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#f8f9fa] to-[#e9ecef] dark:from-slate-900 dark:to-slate-800 flex items-center justify-center p-6">
            <div class="max-w-md w-full">
                <div class="text-center mb-12 animate-fade-up">
                    <Icon paths=icons::SPARKLES class="w-12 h-12 mx-auto mb-6 text-[#937666] dark:text-[#b39c8f]" />
                    <h1 class="text-4xl font-light mb-3 text-[#2d3436] dark:text-white tracking-wide">
                        {brand.clone()}
                    </h1>
                    <p class="text-sm text-[#636e72] dark:text-slate-300 tracking-widest uppercase">
                        "Premium Fragrances"
                    </p>
                </div>

                <div class="space-y-4">
                    {SOCIAL_LINKS.iter().map(social_card).collect_view()}
                </div>

                <div class="mt-12 text-center">
                    <a
                        href=Route::Collections.href()
                        class="inline-flex items-center justify-center px-6 py-3 border border-[#937666] dark:border-[#b39c8f] text-[#937666] dark:text-[#b39c8f] rounded-full hover:bg-[#937666] dark:hover:bg-[#b39c8f] hover:text-white transition-all duration-300 text-sm tracking-wide group"
                    >
                        "Discover Our Collection"
                        <Icon
                            paths=icons::EXTERNAL_LINK
                            class="w-4 h-4 ml-2 group-hover:translate-x-1 transition-transform"
                        />
                    </a>
                </div>

                <p class="text-center text-xs text-[#636e72] dark:text-slate-400 mt-12">
                    {format!("© {} {brand}. All rights reserved.", current_year())}
                </p>
            </div>
        </div>
    }
}

fn social_card(link: &SocialLink) -> impl IntoView {
    view! {
        <a
            href=link.url
            target="_blank"
            rel="noopener noreferrer"
            class="block bg-white dark:bg-slate-800 rounded-xl p-4 shadow-sm hover:shadow-md transition-all duration-300 transform hover:-translate-y-1"
        >
            <div class="flex items-center">
                <div class="flex-shrink-0 w-10 h-10 bg-[#f8f9fa] dark:bg-slate-700 rounded-full flex items-center justify-center text-[#937666] dark:text-[#b39c8f]">
                    <Icon paths=link.icon class="w-5 h-5" />
                </div>
                <div class="ml-4 flex-1">
                    <h2 class="text-sm font-medium text-[#2d3436] dark:text-white">{link.title}</h2>
                    <p class="text-sm text-[#636e72] dark:text-slate-300">{link.handle}</p>
                </div>
                <Icon paths=icons::EXTERNAL_LINK class="w-4 h-4 text-[#937666] dark:text-[#b39c8f]" />
            </div>
        </a>
    }
}
