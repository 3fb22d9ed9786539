use chrono::{Datelike, Local};
use leptos::prelude::*;

use crate::styles::{BRAND_GRADIENT, CONTAINER};

/// Year shown in the copyright line for the instant `now`.
pub fn copyright_year(now: &impl Datelike) -> i32 {
    now.year()
}

/// Copyright year according to the local clock.
pub fn current_year() -> i32 {
    copyright_year(&Local::now())
}

pub fn copyright_notice(year: i32) -> String {
    format!("© {year} BitLabQ. All rights reserved. 🚀")
}

/// Site footer. `year` pins the copyright year; otherwise the clock is read
/// on every render.
#[component]
pub fn Footer(#[prop(optional_no_strip)] year: Option<i32>) -> impl IntoView {
    let notice = copyright_notice(year.unwrap_or_else(current_year));

    view! {
        <footer class="bg-gray-900 border-t border-gray-800 mt-auto">
            <div class=CONTAINER>
                <div class="py-8">
                    <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                        <div class="flex items-center space-x-2">
                            <div class=format!("text-xl font-bold {BRAND_GRADIENT}")>"BitLabQ"</div>
                            <span class="text-lg">"⚡"</span>
                        </div>

                        <div class="text-gray-400 text-sm text-center md:text-right">
                            <p data-role="copyright">{notice}</p>
                            <p class="mt-1">"Pushing the frontiers of software engineering ✨"</p>
                        </div>
                    </div>

                    <div class="mt-6 pt-6 border-t border-gray-800 text-center">
                        <p class="text-gray-500 text-xs">"Built with ❤️ using Rust, Leptos & Tailwind CSS"</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn year_matches_the_render_instant() {
        let instants = [
            Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2031, 12, 31, 23, 59, 59).unwrap(),
        ];
        for now in instants {
            assert_eq!(copyright_year(&now), now.year());
        }
    }

    #[test]
    fn year_works_for_plain_dates() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(copyright_year(&date), 1999);
    }

    #[test]
    fn current_year_follows_the_clock() {
        assert_eq!(current_year(), Local::now().year());
    }

    #[test]
    fn notice_format() {
        assert_eq!(
            copyright_notice(2031),
            "© 2031 BitLabQ. All rights reserved. 🚀"
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_pinned_year() {
        let html = crate::render::render_view(|| view! { <Footer year=Some(2031) /> });
        assert!(html.contains("© 2031 BitLabQ. All rights reserved. 🚀"));
        assert!(html.contains("Pushing the frontiers of software engineering ✨"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_current_year_by_default() {
        let html = crate::render::render_view(|| view! { <Footer /> });
        assert!(html.contains(&copyright_notice(current_year())));
    }
}
