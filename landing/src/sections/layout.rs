use leptos::prelude::*;

use super::{Footer, Header};

/// Persistent header and footer around the active page.
#[component]
pub fn Layout(
    /// Pinned copyright year, forwarded to the footer.
    #[prop(optional_no_strip)]
    year: Option<i32>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-950 text-white">
            <Header />
            <main class="flex-1">{children()}</main>
            <Footer year=year />
        </div>
    }
}
