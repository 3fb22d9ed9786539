// Products page - live products, roadmap, philosophy
use crate::content::{
    Availability, CURRENT_PRODUCTS, Highlight, PRODUCT_PHILOSOPHY, Product, UPCOMING_PRODUCTS,
};
use crate::sections::{CallToAction, PageHeader, SectionHeading};
use crate::styles::{HIGHLIGHT_PANEL, PAGE_BACKGROUND, PAGE_CONTAINER};
use leptos::prelude::*;

const PRODUCT_GRID: &str = "grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto";

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class=PAGE_BACKGROUND>
            <div class=PAGE_CONTAINER>
                <PageHeader
                    title="Our Products"
                    lead="Innovative software solutions designed to push the boundaries of what's possible 🚀"
                />

                <section class="mb-20" data-section="live-products">
                    <SectionHeading
                        title="Live Products ✨"
                        subtitle="Currently available and actively maintained"
                    />
                    <div class=PRODUCT_GRID>
                        {CURRENT_PRODUCTS
                            .iter()
                            .map(|product| view! { <ProductCard product=*product /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="mb-20" data-section="upcoming-products">
                    <SectionHeading
                        title="Coming Soon 🔮"
                        subtitle="Exciting products currently in development"
                    />
                    <div class=PRODUCT_GRID>
                        {UPCOMING_PRODUCTS
                            .iter()
                            .map(|product| view! { <ProductCard product=*product /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="mb-20" data-section="philosophy">
                    <div class=format!("{HIGHLIGHT_PANEL} max-w-4xl mx-auto")>
                        <h2 class="text-2xl sm:text-3xl font-bold text-white mb-6 text-center">
                            "Our Product Philosophy 🎯"
                        </h2>
                        <div class="grid md:grid-cols-2 gap-8">
                            {PRODUCT_PHILOSOPHY
                                .iter()
                                .map(|principle| view! { <Principle principle=*principle /> })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                <CallToAction
                    title="Have an Idea? Let's Build It Together! 💡"
                    body="We're always excited to collaborate on innovative projects. Reach out to discuss your next big idea!"
                    href="/contact"
                    label="Get In Touch 📧"
                />
            </div>
        </div>
    }
}

/// One product card. Released products get demo/source links; upcoming ones
/// show their ETA and a "Stay Tuned" footer.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let released = matches!(product.availability, Availability::Released { .. });
    let (card_class, icon_class, tag_class, marker) = if released {
        (
            "bg-gray-800/50 p-6 rounded-xl border border-gray-700 hover:border-gray-600 transition-all duration-300 hover:transform hover:scale-105",
            "text-4xl",
            "px-2 py-1 bg-blue-500/20 text-blue-400 text-xs rounded border border-blue-500/30",
            "live-product",
        )
    } else {
        (
            "bg-gray-800/30 p-6 rounded-xl border border-gray-700 hover:border-gray-600 transition-all duration-300",
            "text-4xl opacity-70",
            "px-2 py-1 bg-purple-500/20 text-purple-400 text-xs rounded border border-purple-500/30",
            "upcoming-product",
        )
    };

    let badge = match product.availability {
        Availability::Released { .. } => view! {
            <span class=product.status.badge_class()>{product.status.label()}</span>
        }
        .into_any(),
        Availability::Upcoming { eta } => view! {
            <div class="text-right">
                <span class=product.status.badge_class()>{product.status.label()}</span>
                <span class="text-xs text-gray-500">{format!("ETA: {eta}")}</span>
            </div>
        }
        .into_any(),
    };

    let actions = match product.availability {
        Availability::Released { demo, source } => view! {
            <div class="flex gap-3">
                <a
                    href=demo
                    class="flex-1 text-center px-4 py-2 bg-gradient-to-r from-blue-500 to-purple-600 text-white text-sm font-medium rounded-lg hover:from-blue-600 hover:to-purple-700 transition-colors duration-200"
                >
                    "View Demo"
                </a>
                <a
                    href=source
                    class="flex-1 text-center px-4 py-2 border border-gray-600 text-gray-300 text-sm font-medium rounded-lg hover:border-gray-500 hover:text-white transition-colors duration-200"
                >
                    "GitHub"
                </a>
            </div>
        }
        .into_any(),
        Availability::Upcoming { .. } => view! {
            <div class="text-center">
                <span class="px-4 py-2 bg-gray-700/50 text-gray-400 text-sm rounded-lg">
                    "Stay Tuned! 👀"
                </span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=card_class data-card=marker>
            <div class="flex items-start justify-between mb-4">
                <div class=icon_class>{product.icon}</div>
                {badge}
            </div>

            <h3 class="text-xl font-semibold text-white mb-3">{product.name}</h3>
            <p class="text-gray-400 mb-4 leading-relaxed">{product.description}</p>

            <div class="mb-4">
                <div class="flex flex-wrap gap-2">
                    {product
                        .tech
                        .iter()
                        .map(|tech| view! { <span class=tag_class>{*tech}</span> })
                        .collect_view()}
                </div>
            </div>

            {actions}
        </div>
    }
}

#[component]
fn Principle(principle: Highlight) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-semibold text-white mb-3">
                {format!("{} {}", principle.title, principle.icon)}
            </h3>
            <p class="text-gray-400 text-sm">{principle.description}</p>
        </div>
    }
}
