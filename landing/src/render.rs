//! Server-side rendering to complete HTML documents.
//!
//! Uses Leptos 0.8's `RenderHtml` trait. Every render runs inside a fresh
//! reactive [`Owner`], so component-local signals (the header's menu state)
//! are created for the render and dropped with it.
//!
//! ```rust
//! use bitlabq_landing::{render_page, DocumentOptions, SiteRoute};
//!
//! let options = DocumentOptions { year: Some(2031), ..Default::default() };
//! let html = render_page(SiteRoute::Contact, &options);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2031 BitLabQ"));
//! ```

use leptos::prelude::*;

use crate::pages::NotFoundPage;
use crate::route::SiteRoute;
use crate::sections::Layout;

/// Knobs for the generated `<head>` and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// `href` of the compiled Tailwind stylesheet.
    pub stylesheet: String,
    /// Pinned copyright year. `None` reads the clock at render time.
    pub year: Option<i32>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            stylesheet: "/assets/site.css".into(),
            year: None,
        }
    }
}

/// Render `route` wrapped in the layout shell as a standalone document.
pub fn render_page(route: SiteRoute, options: &DocumentOptions) -> String {
    tracing::debug!(%route, "rendering page");
    render_document(
        route.title(),
        route.description(),
        options,
        move || route.view(),
    )
}

/// Render the fallback page as a standalone document.
pub fn render_not_found(options: &DocumentOptions) -> String {
    tracing::debug!("rendering not-found page");
    render_document(
        "Page Not Found | BitLabQ",
        "The requested page does not exist.",
        options,
        || view! { <NotFoundPage /> }.into_any(),
    )
}

/// Render any view to an HTML fragment inside a throwaway reactive owner.
pub fn render_view<V, F>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

fn render_document(
    title: &'static str,
    description: &'static str,
    options: &DocumentOptions,
    page: impl FnOnce() -> AnyView + Send + 'static,
) -> String {
    let stylesheet = options.stylesheet.clone();
    let year = options.year;

    let html = render_view(move || {
        view! {
            <SiteDocument title=title description=description stylesheet=stylesheet year=year>
                {page()}
            </SiteDocument>
        }
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[component]
fn SiteDocument(
    title: &'static str,
    description: &'static str,
    stylesheet: String,
    #[prop(optional_no_strip)] year: Option<i32>,
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <link rel="stylesheet" href=stylesheet />
            </head>
            <body class="bg-gray-950 text-white">
                <Layout year=year>{children()}</Layout>
            </body>
        </html>
    }
}
