//! Shared utility-class strings.
//!
//! The stylesheet itself is generated by the Tailwind CLI (see `tailwind.css`
//! and `tailwind.config.js`). These constants only hold the class lists that
//! repeat across pages, so the scanner still finds every class in `src/`.

/// Full-height page background.
pub const PAGE_BACKGROUND: &str =
    "min-h-screen bg-gradient-to-br from-gray-950 via-gray-900 to-gray-950";

/// Horizontal padding and centering.
pub const CONTAINER: &str = "container mx-auto px-4 sm:px-6 lg:px-8";

/// Content pages: container plus vertical rhythm.
pub const PAGE_CONTAINER: &str = "container mx-auto px-4 sm:px-6 lg:px-8 py-20";

/// Blue/purple/cyan gradient text used by the brand mark and page titles.
pub const BRAND_GRADIENT: &str =
    "bg-gradient-to-r from-blue-400 via-purple-500 to-cyan-400 bg-clip-text text-transparent";

/// Heading of a section within a page.
pub const SECTION_TITLE: &str = "text-3xl sm:text-4xl font-bold text-white mb-4";

/// Standard translucent card.
pub const CARD: &str = "bg-gray-800/50 p-6 rounded-xl border border-gray-700 hover:border-gray-600 transition-colors duration-300";

/// Plain card panel without hover effect.
pub const PANEL: &str = "bg-gray-800/50 p-8 rounded-xl border border-gray-700";

/// Blue-to-purple highlighted panel.
pub const HIGHLIGHT_PANEL: &str =
    "bg-gradient-to-r from-blue-600/20 to-purple-600/20 p-8 rounded-xl border border-gray-700";

/// Primary call-to-action button.
pub const PRIMARY_BUTTON: &str = "inline-block px-8 py-4 bg-gradient-to-r from-blue-500 to-purple-600 text-white font-semibold rounded-lg hover:from-blue-600 hover:to-purple-700 transition-all duration-300 transform hover:scale-105 shadow-lg hover:shadow-xl";
