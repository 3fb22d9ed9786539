//! Rendering tests for every page of the site.
//!
//! Pages are rendered through the same document renderer the prerender CLI
//! uses, with a pinned copyright year so output is deterministic.

use bitlabq_landing::content::{
    CONTACT_METHODS, CORE_VALUES, CURRENT_PRODUCTS, HOME_FEATURES, NAV_ITEMS, OFFICE_HOURS,
    PROJECT_TYPES, UPCOMING_PRODUCTS,
};
use bitlabq_landing::{DocumentOptions, SiteRoute, render_page};

fn options() -> DocumentOptions {
    DocumentOptions {
        year: Some(2031),
        ..Default::default()
    }
}

fn render(route: SiteRoute) -> String {
    render_page(route, &options())
}

/// Assert that `needles` appear in `haystack` in the given order.
fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut cursor = 0;
    for needle in needles {
        match haystack[cursor..].find(needle) {
            Some(pos) => cursor += pos + needle.len(),
            None => panic!("'{needle}' missing or out of order"),
        }
    }
}

mod layout {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_page_has_header_links_and_footer() {
        for route in SiteRoute::ALL {
            let html = render(route);
            for item in NAV_ITEMS {
                assert!(
                    html.contains(&format!("href=\"{}\"", item.path())),
                    "{route}: missing nav link {}",
                    item.label
                );
            }
            assert!(html.contains("© 2031 BitLabQ. All rights reserved. 🚀"), "{route}");
            assert!(html.contains(&format!("<title>{}</title>", route.title())));
        }
    }

    #[test]
    fn mobile_menu_starts_closed_on_every_page() {
        for route in SiteRoute::ALL {
            let html = render(route);
            assert!(!html.contains("data-role=\"mobile-nav\""), "{route}");
            assert!(html.contains("aria-expanded=\"false\""), "{route}");
        }
    }

    #[test]
    fn rerendering_is_idempotent() {
        for route in SiteRoute::ALL {
            assert_eq!(render(route), render(route), "{route}");
        }
    }
}

mod home {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_hero_and_calls_to_action() {
        let html = render(SiteRoute::Home);

        assert!(html.contains("Excellence in Software Engineering"));
        assert!(html.contains("Explore Products"));
        assert!(html.contains("Learn More"));
        assert!(html.contains("What Makes Us Different 🌟"));
    }

    #[test]
    fn renders_feature_cards_in_order() {
        let html = render(SiteRoute::Home);

        assert_eq!(html.matches("data-card=\"highlight\"").count(), 3);
        let titles: Vec<&str> = HOME_FEATURES.iter().map(|f| f.title).collect();
        assert_in_order(&html, &titles);
    }
}

mod about {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_mission_values_and_stack() {
        let html = render(SiteRoute::About);

        assert!(html.contains("About BitLabQ"));
        assert!(html.contains("Our Mission 🎯"));
        assert!(html.contains("Our Core Values 💎"));
        assert!(html.contains("Our Technology Stack 🛠️"));
        assert!(html.contains("• Test-Driven Development"));
        assert!(html.contains("View Our Products 🚀"));
    }

    #[test]
    fn renders_six_values_in_order() {
        let html = render(SiteRoute::About);

        assert_eq!(html.matches("data-card=\"highlight\"").count(), CORE_VALUES.len());
        let titles: Vec<&str> = CORE_VALUES.iter().map(|v| v.title).collect();
        assert_in_order(&html, &titles);
    }
}

mod products {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exactly_one_live_card() {
        let html = render(SiteRoute::Products);

        assert_eq!(html.matches("data-card=\"live-product\"").count(), 1);
        assert_eq!(html.matches(">Live</span>").count(), 1);
        assert!(html.contains(CURRENT_PRODUCTS[0].name));
        assert!(html.contains("View Demo"));
    }

    #[test]
    fn three_upcoming_cards_with_statuses_in_order() {
        let html = render(SiteRoute::Products);

        assert_eq!(html.matches("data-card=\"upcoming-product\"").count(), 3);
        assert_in_order(
            &html,
            &[
                ">In Development</span>",
                "ETA: Q2 2025",
                ">Planning</span>",
                "ETA: Q3 2025",
                ">Research</span>",
                "ETA: Q4 2025",
            ],
        );
        assert_eq!(html.matches("Stay Tuned! 👀").count(), UPCOMING_PRODUCTS.len());
    }

    #[test]
    fn tech_tags_keep_their_order() {
        let html = render(SiteRoute::Products);
        for product in CURRENT_PRODUCTS.iter().chain(UPCOMING_PRODUCTS.iter()) {
            assert_in_order(&html, &[product.name]);
            let tags: Vec<String> = product.tech.iter().map(|t| format!(">{t}</span>")).collect();
            let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
            assert_in_order(&html[html.find(product.name).unwrap()..], &tags);
        }
    }

    #[test]
    fn links_to_contact() {
        let html = render(SiteRoute::Products);
        assert!(html.contains("Our Product Philosophy 🎯"));
        assert!(html.contains("Get In Touch 📧"));
    }
}

mod contact {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn four_contact_methods_and_four_project_types_in_order() {
        let html = render(SiteRoute::Contact);

        assert_eq!(html.matches("data-card=\"contact-method\"").count(), 4);
        assert_eq!(html.matches("data-card=\"project-type\"").count(), 4);

        let methods: Vec<&str> = CONTACT_METHODS.iter().map(|m| m.description).collect();
        assert_in_order(&html, &methods);
        let projects: Vec<&str> = PROJECT_TYPES.iter().map(|p| p.title).collect();
        assert_in_order(&html, &projects);
    }

    #[test]
    fn contact_cards_open_outside_the_site() {
        let html = render(SiteRoute::Contact);

        for method in CONTACT_METHODS {
            assert!(html.contains(&format!("href=\"{}\"", method.href)), "{}", method.title);
        }
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 4);
    }

    #[test]
    fn renders_response_times_and_hours() {
        let html = render(SiteRoute::Contact);

        assert_in_order(&html, &["24 hours", "48 hours", "Same day"]);
        assert_in_order(
            &html,
            &["Monday - Friday", "Saturday", "Sunday", "Closed"],
        );
        assert!(html.contains("Send us an Email 📧"));
    }

    #[test]
    fn every_office_hours_row_carries_its_tone() {
        let html = render(SiteRoute::Contact);

        assert!(html.contains("data-section=\"working-hours\""));
        for entry in OFFICE_HOURS {
            let row = format!("<span class=\"{}\">{}</span>", entry.tone.text_class(), entry.hours);
            assert_eq!(html.matches(&row).count(), 1, "{}", entry.days);
        }
    }
}
