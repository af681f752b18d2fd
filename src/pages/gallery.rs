use leptos::prelude::*;

/// Picture with a title and blurb, shared by both gallery sections
#[derive(Debug, Clone, Copy)]
struct Showpiece {
    image: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURED: [Showpiece; 3] = [
    Showpiece {
        image: "https://images.unsplash.com/photo-1563170351-be82bc888aa4?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
        title: "Luxury Collection",
        description: "Our signature fragrance line",
    },
    Showpiece {
        image: "https://images.unsplash.com/photo-1596462502278-27bfdc403348?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
        title: "Premium Series",
        description: "Exclusive scents for the discerning",
    },
    Showpiece {
        image: "https://i.ibb.co/VpzWXpgb/Hero.webp?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
        title: "Classic Collection",
        description: "Timeless fragrances",
    },
];

const SHOWCASE: [Showpiece; 3] = [
    Showpiece {
        image: "https://images.unsplash.com/photo-1541643600914-78b084683601?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        title: "Signature Collection",
        description: "Experience the essence of luxury with our signature collection.",
    },
    Showpiece {
        image: "https://images.unsplash.com/photo-1596462502278-27bfdc403348?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        title: "Limited Edition",
        description: "Discover our exclusive limited edition fragrances.",
    },
    Showpiece {
        image: "https://i.ibb.co/VpzWXpgb/Hero.webp?ixlib=rb-4.0.3&auto=format&fit=crop&w=2340&q=80",
        title: "Premium Series",
        description: "Indulge in our premium selection of fragrances.",
    },
];

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div class="pt-20 min-h-screen bg-gradient-to-br from-rose-50 to-slate-50 dark:from-slate-900 dark:to-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <h1 class="text-4xl font-serif text-slate-800 dark:text-white mb-8 text-center">
                    "Our Gallery"
                </h1>

                <section class="mb-16">
                    <h2 class="text-2xl font-serif text-slate-700 dark:text-slate-200 mb-6">
                        "Featured Collections"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                        {FEATURED.into_iter().map(featured_card).collect_view()}
                    </div>
                </section>

                <section>
                    <h2 class="text-2xl font-serif text-slate-700 dark:text-slate-200 mb-6">
                        "Product Showcase"
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {SHOWCASE.into_iter().map(showcase_card).collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}

fn featured_card(piece: Showpiece) -> impl IntoView {
    view! {
        <div class="group relative overflow-hidden rounded-lg shadow-lg">
            <img
                src=piece.image
                alt=piece.title
                class="w-full h-64 object-cover transform group-hover:scale-110 transition-transform duration-500"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                <div class="absolute bottom-0 left-0 right-0 p-4 text-white">
                    <h3 class="text-xl font-serif mb-1">{piece.title}</h3>
                    <p class="text-sm opacity-90">{piece.description}</p>
                </div>
            </div>
        </div>
    }
}

fn showcase_card(piece: Showpiece) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-slate-800 p-6 rounded-lg shadow-md hover:shadow-xl transition-shadow duration-300">
            <img src=piece.image alt=piece.title class="w-full h-48 object-cover rounded-md mb-4" />
            <h3 class="text-lg font-serif text-slate-800 dark:text-white mb-2">{piece.title}</h3>
            <p class="text-slate-600 dark:text-slate-300">{piece.description}</p>
        </div>
    }
}
