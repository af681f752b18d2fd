use leptos::prelude::*;

use crate::components::icons::{self, Icon};
use crate::config::SiteConfig;

struct Contact {
    icon: &'static [&'static str],
    label: &'static str,
    value: &'static str,
    href: &'static str,
    external: bool,
}

const CONTACTS: [Contact; 4] = [
    Contact {
        icon: icons::PHONE,
        label: "Mobile",
        value: "+91 9909166990",
        href: "tel:+919909166990",
        external: false,
    },
    Contact {
        icon: icons::MAIL,
        label: "Email",
        value: "talwarperfume@gmail.com",
        href: "mailto:talwarperfume@gmail.com",
        external: false,
    },
    Contact {
        icon: icons::GLOBE,
        label: "Website",
        value: "talwarperfume.com",
        href: "https://talwarperfume.com",
        external: true,
    },
    Contact {
        icon: icons::MAP_PIN,
        label: "Address",
        value: "F-16, Balaji Centre, Gurukul Road, Nilmani Society, Memnagar, Ahmedabad, Gujarat 380052",
        href: "https://maps.google.com/?q=F-16,+Balaji+Centre,+Gurukul+Road,+Nilmani+Society,+Memnagar,+Ahmedabad,+Gujarat+380052",
        external: true,
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let brand = use_context::<SiteConfig>()
        .expect("SiteConfig context missing")
        .brand_name;

    view! {
        <div class="pt-20 min-h-screen bg-gradient-to-br from-rose-50 to-slate-50 dark:from-slate-900 dark:to-slate-800">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="text-center mb-16">
                    <h1 class="text-4xl font-serif text-slate-800 dark:text-white mb-4">"About Us"</h1>
                    <p class="text-lg text-slate-600 dark:text-slate-300 max-w-2xl mx-auto">
                        {format!(
                            "At {brand}, we craft exceptional fragrances that capture the essence of luxury and sophistication. \
                             Our commitment to quality and artistry has made us a trusted name in the world of perfumery."
                        )}
                    </p>
                </div>

                <div class="bg-white dark:bg-slate-800 rounded-2xl shadow-lg overflow-hidden">
                    <div class="grid md:grid-cols-2 divide-y md:divide-y-0 md:divide-x divide-slate-100 dark:divide-slate-700">
                        <div class="p-8">
                            <h2 class="text-2xl font-serif text-slate-800 dark:text-white mb-6">"Our Story"</h2>
                            <p class="text-slate-600 dark:text-slate-300 mb-4">
                                {format!(
                                    "Founded with a passion for creating unique and memorable fragrances, {brand} has evolved into \
                                     a distinguished name in the perfume industry. Our journey is marked by an unwavering dedication \
                                     to craftsmanship and innovation."
                                )}
                            </p>
                            <p class="text-slate-600 dark:text-slate-300">
                                "Each fragrance in our collection is carefully curated, combining traditional expertise with "
                                "contemporary sophistication to create scents that resonate with the modern individual."
                            </p>
                        </div>

                        <div class="p-8">
                            <h2 class="text-2xl font-serif text-slate-800 dark:text-white mb-6">"Contact Us"</h2>
                            <div class="space-y-6">
                                {CONTACTS.iter().map(contact_row).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn contact_row(contact: &Contact) -> impl IntoView {
    // Website and map links leave the site
    let target = contact.external.then_some("_blank");
    let rel = contact.external.then_some("noopener noreferrer");

    view! {
        <a
            href=contact.href
            target=target
            rel=rel
            class="flex items-start gap-4 group hover:bg-slate-50 dark:hover:bg-slate-700 p-2 rounded-lg transition-colors duration-200"
        >
            <div class="text-slate-400 group-hover:text-slate-600 dark:group-hover:text-slate-200 transition-colors duration-200 mt-1">
                <Icon paths=contact.icon class="w-5 h-5" />
            </div>
            <div>
                <p class="text-sm font-medium text-slate-400">{contact.label}</p>
                <p class="text-slate-700 dark:text-slate-300 group-hover:text-slate-900 dark:group-hover:text-white transition-colors duration-200">
                    {contact.value}
                </p>
            </div>
        </a>
    }
}
