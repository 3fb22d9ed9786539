// Layout shell and shared page sections

mod cards;
mod footer;
mod header;
mod layout;

pub use cards::{CallToAction, HighlightCard, PageHeader, SectionHeading};
pub use footer::{Footer, copyright_notice, copyright_year, current_year};
pub use header::Header;
pub use layout::Layout;
