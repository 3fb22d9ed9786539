//! Literal site content.
//!
//! Every record here is `'static` and rendered as-is. Order in each slice is
//! display order.

use crate::route::SiteRoute;

/// Single source of truth for the public contact address.
pub const CONTACT_EMAIL: &str = "hello@bitlabq.com";
pub const CONTACT_MAILTO: &str = "mailto:hello@bitlabq.com";

// ============================================
// Types
// ============================================

/// Header navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: SiteRoute,
    pub label: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

/// A way to reach the team, shown on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    /// Gradient stops for the value pill (`from-* to-*`).
    pub color: &'static str,
}

/// "How we can help" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectType {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Icon + title + blurb card (features, values, philosophy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechColumn {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseChannel {
    pub icon: &'static str,
    pub channel: &'static str,
    pub turnaround: &'static str,
}

/// How available the team is during an [`OfficeHours`] slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursTone {
    Open,
    Limited,
    Closed,
}

impl HoursTone {
    pub fn text_class(self) -> &'static str {
        match self {
            HoursTone::Open => "text-green-400",
            HoursTone::Limited => "text-yellow-400",
            HoursTone::Closed => "text-red-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficeHours {
    pub days: &'static str,
    pub hours: &'static str,
    pub tone: HoursTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    Live,
    InDevelopment,
    Planning,
    Research,
}

impl ProductStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::Live => "Live",
            ProductStatus::InDevelopment => "In Development",
            ProductStatus::Planning => "Planning",
            ProductStatus::Research => "Research",
        }
    }

    /// Badge colors: green for shipped products, orange for everything else.
    pub fn badge_class(self) -> &'static str {
        match self {
            ProductStatus::Live => {
                "px-3 py-1 bg-green-500/20 text-green-400 text-sm rounded-full border border-green-500/30"
            }
            _ => {
                "block px-3 py-1 bg-orange-500/20 text-orange-400 text-sm rounded-full border border-orange-500/30 mb-1"
            }
        }
    }
}

/// Where a product stands: shipped with links, or expected later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Released {
        demo: &'static str,
        source: &'static str,
    },
    Upcoming {
        eta: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub status: ProductStatus,
    pub tech: &'static [&'static str],
    pub icon: &'static str,
    pub availability: Availability,
}

// ============================================
// Navigation
// ============================================

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        route: SiteRoute::Home,
        label: "Home",
        icon: "🏠",
    },
    NavItem {
        route: SiteRoute::About,
        label: "About",
        icon: "👨‍💻",
    },
    NavItem {
        route: SiteRoute::Products,
        label: "Products",
        icon: "🚀",
    },
    NavItem {
        route: SiteRoute::Contact,
        label: "Contact",
        icon: "📧",
    },
];

// ============================================
// Home
// ============================================

pub const HOME_FEATURES: [Highlight; 3] = [
    Highlight {
        icon: "🎯",
        title: "Precision Engineering",
        description: "Every product is crafted with meticulous attention to detail and architectural excellence",
    },
    Highlight {
        icon: "🔮",
        title: "Future-Ready",
        description: "Built with cutting-edge technologies and forward-thinking design principles",
    },
    Highlight {
        icon: "🌍",
        title: "Open Source",
        description: "Committed to transparency and community-driven development",
    },
];

// ============================================
// About
// ============================================

pub const CORE_VALUES: [Highlight; 6] = [
    Highlight {
        icon: "⚡",
        title: "Excellence",
        description: "We strive for perfection in every line of code, following SOLID principles and best practices to deliver exceptional software.",
    },
    Highlight {
        icon: "🔮",
        title: "Innovation",
        description: "We embrace cutting-edge technologies and forward-thinking approaches to solve complex problems with elegant solutions.",
    },
    Highlight {
        icon: "🌍",
        title: "Open Source",
        description: "We believe in transparency, collaboration, and giving back to the community that has given us so much.",
    },
    Highlight {
        icon: "🎨",
        title: "Clean Design",
        description: "Beautiful, intuitive interfaces that prioritize user experience and accessibility in every interaction.",
    },
    Highlight {
        icon: "🧪",
        title: "Test-Driven",
        description: "Comprehensive testing ensures reliability, maintainability, and confidence in our software products.",
    },
    Highlight {
        icon: "🚀",
        title: "Performance",
        description: "Optimized, efficient code that scales beautifully and provides exceptional user experiences across all devices.",
    },
];

pub const TECH_STACK: [TechColumn; 2] = [
    TechColumn {
        title: "Frontend 🎨",
        items: &[
            "Rust & Leptos",
            "WebAssembly",
            "Tailwind CSS",
            "Modern CSS & Animations",
        ],
    },
    TechColumn {
        title: "Principles 📐",
        items: &[
            "SOLID Design Principles",
            "Test-Driven Development",
            "Clean Architecture",
            "DRY & KISS Principles",
        ],
    },
];

// ============================================
// Products
// ============================================

pub const CURRENT_PRODUCTS: [Product; 1] = [Product {
    id: 1,
    name: "BitLabQ Website",
    description: "This very website - a showcase of modern web development with Rust, Leptos, and Tailwind CSS",
    status: ProductStatus::Live,
    tech: &["Rust", "Leptos", "Tailwind CSS"],
    icon: "🌐",
    availability: Availability::Released {
        demo: "/",
        source: "https://github.com/bitlabq",
    },
}];

pub const UPCOMING_PRODUCTS: [Product; 3] = [
    Product {
        id: 1,
        name: "CodeFlow IDE",
        description: "Next-generation IDE with AI-powered code completion and intelligent debugging capabilities",
        status: ProductStatus::InDevelopment,
        tech: &["Electron", "TypeScript", "AI/ML"],
        icon: "💻",
        availability: Availability::Upcoming { eta: "Q2 2025" },
    },
    Product {
        id: 2,
        name: "DevMetrics Dashboard",
        description: "Comprehensive analytics platform for tracking development team productivity and code quality",
        status: ProductStatus::Planning,
        tech: &["React", "Node.js", "PostgreSQL"],
        icon: "📊",
        availability: Availability::Upcoming { eta: "Q3 2025" },
    },
    Product {
        id: 3,
        name: "CloudSync CLI",
        description: "Universal command-line tool for seamless multi-cloud deployment and management",
        status: ProductStatus::Research,
        tech: &["Go", "Docker", "Kubernetes"],
        icon: "☁️",
        availability: Availability::Upcoming { eta: "Q4 2025" },
    },
];

pub const PRODUCT_PHILOSOPHY: [Highlight; 4] = [
    Highlight {
        icon: "💎",
        title: "Quality First",
        description: "Every product is built with meticulous attention to code quality, following SOLID principles and best practices.",
    },
    Highlight {
        icon: "👥",
        title: "User-Centric",
        description: "We design with the end-user in mind, prioritizing intuitive interfaces and exceptional user experiences.",
    },
    Highlight {
        icon: "🌍",
        title: "Open Source",
        description: "Transparency and community collaboration drive our development process and product evolution.",
    },
    Highlight {
        icon: "🚀",
        title: "Future-Ready",
        description: "Built with modern technologies and architectures that scale and adapt to tomorrow's challenges.",
    },
];

// ============================================
// Contact
// ============================================

pub const CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        title: "Email",
        description: "Reach out for collaborations, questions, or just to say hello!",
        value: CONTACT_EMAIL,
        href: CONTACT_MAILTO,
        icon: "📧",
        color: "from-blue-500 to-cyan-500",
    },
    ContactMethod {
        title: "GitHub",
        description: "Follow our open-source projects and contributions",
        value: "@bitlabq",
        href: "https://github.com/bitlabq",
        icon: "🐙",
        color: "from-gray-600 to-gray-800",
    },
    ContactMethod {
        title: "LinkedIn",
        description: "Connect with us professionally and stay updated",
        value: "BitLabQ",
        href: "https://linkedin.com/company/bitlabq",
        icon: "💼",
        color: "from-blue-600 to-blue-800",
    },
    ContactMethod {
        title: "Twitter",
        description: "Follow us for tech insights and product updates",
        value: "@bitlabq",
        href: "https://twitter.com/bitlabq",
        icon: "🐦",
        color: "from-sky-500 to-blue-600",
    },
];

pub const PROJECT_TYPES: [ProjectType; 4] = [
    ProjectType {
        title: "Open Source Collaboration",
        description: "Join us in building amazing open-source tools",
        icon: "🤝",
    },
    ProjectType {
        title: "Technical Consulting",
        description: "Architecture reviews and technical guidance",
        icon: "🏗️",
    },
    ProjectType {
        title: "Product Development",
        description: "Custom software solutions and product development",
        icon: "🚀",
    },
    ProjectType {
        title: "Code Reviews",
        description: "Expert code reviews and quality assessments",
        icon: "🔍",
    },
];

pub const RESPONSE_CHANNELS: [ResponseChannel; 3] = [
    ResponseChannel {
        icon: "📧",
        channel: "Email",
        turnaround: "24 hours",
    },
    ResponseChannel {
        icon: "💼",
        channel: "LinkedIn",
        turnaround: "48 hours",
    },
    ResponseChannel {
        icon: "🐦",
        channel: "Twitter",
        turnaround: "Same day",
    },
];

pub const OFFICE_HOURS: [OfficeHours; 3] = [
    OfficeHours {
        days: "Monday - Friday",
        hours: "9:00 AM - 6:00 PM PST",
        tone: HoursTone::Open,
    },
    OfficeHours {
        days: "Saturday",
        hours: "10:00 AM - 2:00 PM PST",
        tone: HoursTone::Limited,
    },
    OfficeHours {
        days: "Sunday",
        hours: "Closed",
        tone: HoursTone::Closed,
    },
];
