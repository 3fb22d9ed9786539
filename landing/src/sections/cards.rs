// Building blocks shared by the content pages

use leptos::prelude::*;

use crate::content::Highlight;
use crate::styles::{BRAND_GRADIENT, CARD, HIGHLIGHT_PANEL, PANEL, PRIMARY_BUTTON, SECTION_TITLE};

/// Gradient page title with a lead paragraph.
#[component]
pub fn PageHeader(title: &'static str, lead: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold mb-6">
                <span class=BRAND_GRADIENT>{title}</span>
            </h1>
            <p class="text-xl text-gray-400 max-w-3xl mx-auto">{lead}</p>
        </div>
    }
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class=SECTION_TITLE>{title}</h2>
            {subtitle.map(|text| view! { <p class="text-lg text-gray-400">{text}</p> })}
        </div>
    }
}

#[component]
pub fn HighlightCard(highlight: Highlight) -> impl IntoView {
    view! {
        <div class=CARD data-card="highlight">
            <div class="text-4xl mb-4">{highlight.icon}</div>
            <h3 class="text-xl font-semibold text-white mb-3">{highlight.title}</h3>
            <p class="text-gray-400">{highlight.description}</p>
        </div>
    }
}

/// Closing panel with a single primary link.
#[component]
pub fn CallToAction(
    title: &'static str,
    body: &'static str,
    href: &'static str,
    label: &'static str,
    /// Use the blue/purple gradient panel instead of the plain one.
    #[prop(default = false)]
    highlighted: bool,
) -> impl IntoView {
    let panel = if highlighted { HIGHLIGHT_PANEL } else { PANEL };

    view! {
        <section class="text-center" data-role="call-to-action">
            <div class=panel>
                <h2 class="text-2xl sm:text-3xl font-bold text-white mb-4">{title}</h2>
                <p class="text-gray-400 mb-6 max-w-2xl mx-auto">{body}</p>
                <a href=href class=PRIMARY_BUTTON>{label}</a>
            </div>
        </section>
    }
}
