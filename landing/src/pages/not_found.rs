// Router fallback, also exported as 404.html
use crate::styles::{BRAND_GRADIENT, PAGE_BACKGROUND, PAGE_CONTAINER, PRIMARY_BUTTON};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class=PAGE_BACKGROUND>
            <div class=format!("{PAGE_CONTAINER} text-center")>
                <h1 class="text-6xl sm:text-7xl font-bold mb-6">
                    <span class=BRAND_GRADIENT>"404"</span>
                </h1>
                <h2 class="text-3xl font-bold text-white mb-4">"Page Not Found 🛸"</h2>
                <p class="text-xl text-gray-400 max-w-2xl mx-auto mb-10">
                    "The page you are looking for drifted out of orbit."
                </p>
                <a href="/" class=PRIMARY_BUTTON>"Back to Home 🏠"</a>
            </div>
        </div>
    }
}
