// Page views, one per route (plus the router fallback)

mod about;
mod contact;
mod home;
mod not_found;
mod products;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use products::ProductsPage;
