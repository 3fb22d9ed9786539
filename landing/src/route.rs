//! Route table shared by the client router and the static renderer.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use crate::pages::{AboutPage, ContactPage, HomePage, ProductsPage};

/// Every page the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    About,
    Products,
    Contact,
}

/// Returned when a path does not name a [`SiteRoute`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route '{0}' (expected one of: /, /about, /products, /contact)")]
pub struct UnknownRoute(pub String);

impl SiteRoute {
    /// All routes, in navigation order.
    pub const ALL: [SiteRoute; 4] = [
        SiteRoute::Home,
        SiteRoute::About,
        SiteRoute::Products,
        SiteRoute::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::About => "/about",
            SiteRoute::Products => "/products",
            SiteRoute::Contact => "/contact",
        }
    }

    /// Document `<title>` for the route.
    pub fn title(self) -> &'static str {
        match self {
            SiteRoute::Home => "BitLabQ - Excellence in Software Engineering",
            SiteRoute::About => "About | BitLabQ",
            SiteRoute::Products => "Products | BitLabQ",
            SiteRoute::Contact => "Contact | BitLabQ",
        }
    }

    /// Meta description for the route.
    pub fn description(self) -> &'static str {
        match self {
            SiteRoute::Home => {
                "Pushing the frontiers of software engineering with high-quality, open-source products."
            }
            SiteRoute::About => "Our mission, values and technology stack.",
            SiteRoute::Products => "Live products and the BitLabQ roadmap.",
            SiteRoute::Contact => "Reach BitLabQ by email, GitHub, LinkedIn or Twitter.",
        }
    }

    /// The page view bound to this route.
    pub fn view(self) -> AnyView {
        match self {
            SiteRoute::Home => view! { <HomePage /> }.into_any(),
            SiteRoute::About => view! { <AboutPage /> }.into_any(),
            SiteRoute::Products => view! { <ProductsPage /> }.into_any(),
            SiteRoute::Contact => view! { <ContactPage /> }.into_any(),
        }
    }
}

impl fmt::Display for SiteRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for SiteRoute {
    type Err = UnknownRoute;

    /// Accepts `/about` as well as `about`. Trailing slashes are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segment = s.trim().trim_matches('/');
        match segment {
            "" => Ok(SiteRoute::Home),
            "about" => Ok(SiteRoute::About),
            "products" => Ok(SiteRoute::Products),
            "contact" => Ok(SiteRoute::Contact),
            _ => Err(UnknownRoute(s.to_string())),
        }
    }
}
