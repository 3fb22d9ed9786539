// Home page - hero + "what makes us different"
use crate::content::HOME_FEATURES;
use crate::sections::{HighlightCard, SectionHeading};
use crate::styles::{BRAND_GRADIENT, CONTAINER, PAGE_BACKGROUND};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class=PAGE_BACKGROUND>
            <Hero />
            <section class="py-20 bg-gray-900/50">
                <div class=CONTAINER>
                    <SectionHeading
                        title="What Makes Us Different 🌟"
                        subtitle="Our commitment to excellence drives every line of code we write"
                    />
                    <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                        {HOME_FEATURES
                            .iter()
                            .map(|feature| view! { <HighlightCard highlight=*feature /> })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-r from-blue-600/10 via-purple-600/10 to-cyan-600/10"></div>
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_50%_50%,rgba(59,130,246,0.1),transparent_70%)]"></div>

            <div class=format!("{CONTAINER} pt-20 pb-32 relative z-10")>
                <div class="text-center max-w-4xl mx-auto">
                    <h1 class="text-6xl sm:text-7xl md:text-8xl lg:text-9xl font-bold mb-8 tracking-tight">
                        <span class=format!("{BRAND_GRADIENT} animate-pulse")>"BitLabQ"</span>
                    </h1>

                    <div class="text-xl sm:text-2xl md:text-3xl text-gray-300 mb-8 font-light">
                        <span class="inline-block">"Excellence in Software Engineering"</span>
                        <span class="text-3xl ml-2">"⚡"</span>
                    </div>

                    <p class="text-lg sm:text-xl text-gray-400 mb-12 max-w-2xl mx-auto leading-relaxed">
                        "Pushing the frontiers of software engineering with high-quality, open-source products that embody innovation and futuristic design 🚀✨"
                    </p>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center items-center">
                        <a
                            href="/products"
                            class="group relative px-8 py-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white font-semibold rounded-lg hover:from-blue-600 hover:to-purple-700 transition-all duration-300 transform hover:scale-105 shadow-lg hover:shadow-xl"
                        >
                            <span class="flex items-center space-x-2">
                                <span>"Explore Products"</span>
                                <span class="text-xl">"🚀"</span>
                            </span>
                        </a>
                        <a
                            href="/about"
                            class="group px-8 py-4 border-2 border-gray-600 text-gray-300 font-semibold rounded-lg hover:border-gray-500 hover:text-white transition-all duration-300 hover:bg-gray-800/50"
                        >
                            <span class="flex items-center space-x-2">
                                <span>"Learn More"</span>
                                <span class="text-xl">"👨‍💻"</span>
                            </span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
