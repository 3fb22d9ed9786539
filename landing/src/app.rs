use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{AboutPage, ContactPage, HomePage, NotFoundPage, ProductsPage};
use crate::sections::Layout;

/// Client-side application: layout shell around the routed page.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Layout>
        </Router>
    }
}
