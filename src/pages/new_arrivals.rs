use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::MouseEvent;

use crate::components::icons::{self, Icon};
use crate::platform::dom::{current_year, is_backdrop_event, lock_body_scroll};

const THUMBNAIL_WIDTH: u32 = 400;
const MODAL_WIDTH: u32 = 1200;
const SRCSET_WIDTHS: [u32; 3] = [300, 600, 900];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrivalKind {
    Perfume,
    Freshener,
}

impl ArrivalKind {
    const fn caption(self) -> &'static str {
        match self {
            Self::Perfume => "Luxury Fragrance",
            Self::Freshener => "Premium Car Freshener",
        }
    }

    const fn blurb(self) -> &'static str {
        match self {
            Self::Perfume => "Experience the essence of luxury with our newest fragrance addition.",
            Self::Freshener => {
                "Transform your vehicle's atmosphere with our premium car freshener collection."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Arrival {
    url: &'static str,
    title: &'static str,
    kind: ArrivalKind,
}

const ARRIVALS: [Arrival; 9] = [
    Arrival {
        url: "https://i.ibb.co/39d2d3xc/Fresh-Fresh.webp",
        title: "Fresh & Fresh",
        kind: ArrivalKind::Perfume,
    },
    Arrival {
        url: "https://i.ibb.co/ch562vNF/Green-Wood.webp",
        title: "Green Wood",
        kind: ArrivalKind::Perfume,
    },
    Arrival {
        url: "https://i.ibb.co/Fk8Zj11Y/Kapur.webp",
        title: "Kapur",
        kind: ArrivalKind::Freshener,
    },
    Arrival {
        url: "https://i.ibb.co/FqN0Zfq0/Lemon.webp",
        title: "Lemon",
        kind: ArrivalKind::Perfume,
    },
    Arrival {
        url: "https://i.ibb.co/qMCqRDVX/White-oud.webp",
        title: "White Oud",
        kind: ArrivalKind::Perfume,
    },
    Arrival {
        url: "https://i.ibb.co/NdWnpj4G/1742006302428-1.webp",
        title: "Velvet Rose",
        kind: ArrivalKind::Perfume,
    },
    Arrival {
        url: "https://i.ibb.co/ymHWPq2V/1742006303512-1.webp",
        title: "Fresh Linen",
        kind: ArrivalKind::Freshener,
    },
    Arrival {
        url: "https://godofessence.com/cdn/shop/files/mystic-amber-for-unisex-203601.png",
        title: "Mystic Amber",
        kind: ArrivalKind::Perfume,
    },
    Arrival {
        url: "https://perfumeshark.com/cdn/shop/files/CitrusBurst-min_2395x.jpg",
        title: "Citrus Burst",
        kind: ArrivalKind::Freshener,
    },
];

/// Image CDN URL resized to `width` pixels
pub fn optimize_image_url(url: &str, width: u32) -> String {
    format!("{url}?w={width}&q=75&auto=format,compress")
}

/// `srcset` value offering the thumbnail at each responsive width
pub fn responsive_srcset(url: &str) -> String {
    SRCSET_WIDTHS
        .iter()
        .map(|width| format!("{} {width}w", optimize_image_url(url, *width)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Grid of the latest arrivals with an enlarged preview modal.
#[component]
pub fn NewArrivalsPage() -> impl IntoView {
    let selected = RwSignal::new(None::<Arrival>);
    let image_loaded = RwSignal::new(false);

    let open = move |arrival: Arrival| {
        image_loaded.set(false);
        selected.set(Some(arrival));
    };
    let close = move || {
        selected.set(None);
        image_loaded.set(false);
    };

    Effect::new(move |_| lock_body_scroll(selected.with(Option::is_some)));

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.with_untracked(Option::is_some) {
            close();
        }
    });
    let escape = SendWrapper::new(escape);
    on_cleanup(move || {
        escape.take().remove();
        lock_body_scroll(false);
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-rose-50 to-slate-50 dark:from-slate-900 dark:to-slate-800 pt-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-serif text-slate-800 dark:text-white mb-4">"New Arrivals"</h1>
                    <p class="text-lg text-slate-600 dark:text-slate-300 max-w-2xl mx-auto">
                        "Discover our latest collection of exquisite fragrances and premium car fresheners. "
                        "Each piece is carefully curated to elevate your sensory experience."
                    </p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-3 gap-4 md:gap-6 lg:gap-8">
                    {ARRIVALS
                        .into_iter()
                        .map(|arrival| arrival_tile(arrival, move || open(arrival)))
                        .collect_view()}
                </div>

                {move || {
                    selected
                        .get()
                        .map(|arrival| arrival_modal(arrival, image_loaded, close))
                }}
            </div>
        </div>
    }
}

fn arrival_tile(arrival: Arrival, on_open: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div
            on:click=move |_| on_open()
            class="group relative aspect-square overflow-hidden rounded-xl shadow-lg hover:scale-[1.02] transition-all duration-300 cursor-pointer"
        >
            <img
                src=optimize_image_url(arrival.url, THUMBNAIL_WIDTH)
                srcset=responsive_srcset(arrival.url)
                sizes="(max-width: 768px) 50vw, 33vw"
                alt=arrival.title
                loading="lazy"
                decoding="async"
                class="w-full h-full object-cover transition-all duration-500 group-hover:scale-110"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/70 via-black/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                <div class="absolute bottom-0 left-0 right-0 p-6 text-white">
                    <h3 class="text-xl font-serif mb-2">{arrival.title}</h3>
                    <p class="text-sm font-light">{arrival.kind.caption()}</p>
                    <span class="inline-block mt-2 text-xs tracking-wider bg-white/20 px-3 py-1 rounded-full">
                        "AVAILABLE IN-STORE ONLY"
                    </span>
                </div>
            </div>
        </div>
    }
}

fn arrival_modal(
    arrival: Arrival,
    image_loaded: RwSignal<bool>,
    close: impl Fn() + Copy + Send + 'static,
) -> impl IntoView {
    let image_class = move || {
        if image_loaded.get() {
            "w-full h-auto max-h-[70vh] object-contain transition-all duration-700 opacity-100 scale-100"
        } else {
            "w-full h-auto max-h-[70vh] object-contain transition-all duration-700 opacity-0 scale-95"
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/90 backdrop-blur-sm"
            on:click=move |ev: MouseEvent| {
                if is_backdrop_event(&ev) {
                    close();
                }
            }
        >
            <div class="relative w-full max-w-5xl mx-auto animate-fade-up">
                <button
                    on:click=move |_| close()
                    class="absolute -top-2 right-0 md:-right-2 text-white hover:text-rose-300 transition-colors z-10 bg-black/50 rounded-full p-1"
                    aria-label="Close modal"
                >
                    <Icon paths=icons::CLOSE class="w-6 h-6" />
                </button>

                <div class="bg-white dark:bg-slate-800 rounded-xl overflow-hidden shadow-2xl">
                    <div class="relative py-8">
                        <img
                            src=optimize_image_url(arrival.url, MODAL_WIDTH)
                            alt=arrival.title
                            loading="eager"
                            class=image_class
                            on:load=move |_| image_loaded.set(true)
                        />
                    </div>
                    <div class="p-6">
                        <h3 class="text-2xl font-serif text-slate-800 dark:text-white mb-2">
                            {arrival.title}
                        </h3>
                        <p class="text-slate-600 dark:text-slate-300 mb-3">{arrival.kind.blurb()}</p>
                        <div class="flex items-center justify-between">
                            <span class="text-sm font-medium text-rose-600 dark:text-rose-400">
                                "AVAILABLE IN-STORE ONLY"
                            </span>
                            <span class="text-sm text-slate-500 dark:text-slate-400">
                                {format!("New Arrival {}", current_year())}
                            </span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_image_url_appends_cdn_parameters() {
        assert_eq!(
            optimize_image_url("https://i.ibb.co/FqN0Zfq0/Lemon.webp", 600),
            "https://i.ibb.co/FqN0Zfq0/Lemon.webp?w=600&q=75&auto=format,compress"
        );
    }

    #[test]
    fn test_responsive_srcset_lists_each_width() {
        let srcset = responsive_srcset("https://cdn.test/a.webp");
        assert_eq!(
            srcset,
            "https://cdn.test/a.webp?w=300&q=75&auto=format,compress 300w, \
             https://cdn.test/a.webp?w=600&q=75&auto=format,compress 600w, \
             https://cdn.test/a.webp?w=900&q=75&auto=format,compress 900w"
        );
    }

    #[test]
    fn test_arrivals_mix_perfumes_and_fresheners() {
        assert_eq!(ARRIVALS.len(), 9);
        let fresheners = ARRIVALS
            .iter()
            .filter(|arrival| arrival.kind == ArrivalKind::Freshener)
            .count();
        assert_eq!(fresheners, 3);
    }

    #[test]
    fn test_captions_depend_on_kind() {
        assert_eq!(ArrivalKind::Perfume.caption(), "Luxury Fragrance");
        assert_eq!(ArrivalKind::Freshener.caption(), "Premium Car Freshener");
        assert!(ArrivalKind::Freshener.blurb().contains("vehicle"));
    }
}
