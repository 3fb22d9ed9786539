//! # bitlabq-landing
//!
//! The BitLabQ marketing site as Leptos 0.8 components.
//!
//! The same component tree serves two targets:
//!
//! - **csr** - compiled to WASM by Trunk and mounted in the browser, with
//!   `leptos_router` handling navigation between pages.
//! - **ssr** (default) - rendered to standalone HTML documents by
//!   [`render_page`], which the `bitlabq-prerender` CLI writes to disk.
//!
//! ## Modules
//!
//! - [`content`] - literal records (navigation, products, contact methods)
//! - [`pages`] - one view per route
//! - [`sections`] - layout shell (header, footer) and shared cards
//! - [`state`] - mobile menu state machine
//! - [`route`] - route table
//! - [`styles`] - repeated utility-class strings

pub mod app;
pub mod content;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod render;
pub mod route;
pub mod sections;
pub mod state;
pub mod styles;

pub use app::App;
#[cfg(feature = "ssr")]
pub use render::{DocumentOptions, render_not_found, render_page, render_view};
pub use route::{SiteRoute, UnknownRoute};
pub use state::MenuState;

/// Browser entry point: install the panic hook and mount [`App`].
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
