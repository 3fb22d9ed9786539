// About page - mission, values, technology stack
use crate::content::{CORE_VALUES, TECH_STACK, TechColumn};
use crate::sections::{CallToAction, HighlightCard, PageHeader, SectionHeading};
use crate::styles::{PAGE_BACKGROUND, PAGE_CONTAINER, PANEL};
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class=PAGE_BACKGROUND>
            <div class=PAGE_CONTAINER>
                <PageHeader
                    title="About BitLabQ"
                    lead="We are passionate software engineers committed to pushing the boundaries of what's possible in technology 🚀"
                />

                <section class="mb-20" data-section="mission">
                    <div class="max-w-4xl mx-auto">
                        <div class=PANEL>
                            <h2 class="text-3xl font-bold text-white mb-6 text-center">"Our Mission 🎯"</h2>
                            <p class="text-lg text-gray-300 leading-relaxed text-center">
                                "To create exceptional open-source software products that embody excellence in engineering, foster innovation, and contribute to the global developer community. We believe in the power of clean code, thoughtful architecture, and user-centric design to shape the future of software development."
                            </p>
                        </div>
                    </div>
                </section>

                <section class="mb-20" data-section="values">
                    <SectionHeading title="Our Core Values 💎" />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto">
                        {CORE_VALUES
                            .iter()
                            .map(|value| view! { <HighlightCard highlight=*value /> })
                            .collect_view()}
                    </div>
                </section>

                <section class="mb-20" data-section="tech-stack">
                    <SectionHeading
                        title="Our Technology Stack 🛠️"
                        subtitle="We leverage modern technologies to build exceptional products"
                    />
                    <div class=format!("{PANEL} max-w-4xl mx-auto")>
                        <div class="grid md:grid-cols-2 gap-8">
                            {TECH_STACK
                                .iter()
                                .map(|column| view! { <TechList column=*column /> })
                                .collect_view()}
                        </div>
                    </div>
                </section>

                <CallToAction
                    title="Ready to Explore Our Work? 🌟"
                    body="Check out our innovative products and see how we're pushing the frontiers of software engineering."
                    href="/products"
                    label="View Our Products 🚀"
                    highlighted=true
                />
            </div>
        </div>
    }
}

#[component]
fn TechList(column: TechColumn) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold text-white mb-4">{column.title}</h3>
            <ul class="space-y-2 text-gray-400">
                {column
                    .items
                    .iter()
                    .map(|item| view! { <li>{format!("• {item}")}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
