use leptos::prelude::*;

use crate::content::{NAV_ITEMS, NavItem};
use crate::state::MenuState;
use crate::styles::{BRAND_GRADIENT, CONTAINER};

const DESKTOP_LINK: &str = "flex items-center space-x-1 text-gray-300 hover:text-white transition-colors duration-200 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-800";
const MOBILE_LINK: &str = "flex items-center space-x-2 text-gray-300 hover:text-white block px-3 py-2 rounded-md text-base font-medium hover:bg-gray-700 transition-colors duration-200";

// Heroicons outline paths
const ICON_BARS: &str = "M4 6h16M4 12h16M4 18h16";
const ICON_CROSS: &str = "M6 18L18 6M6 6l12 12";

/// Sticky site header: brand mark, desktop links and the collapsible
/// mobile menu. The menu state lives and dies with this component.
#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <header class="bg-gray-900 border-b border-gray-800 sticky top-0 z-50 backdrop-blur-sm bg-opacity-95">
            <div class=CONTAINER>
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <a href="/" class="flex items-center space-x-2">
                            <div class=format!("text-2xl font-bold {BRAND_GRADIENT}")>"BitLabQ"</div>
                            <span class="text-xl">"⚡"</span>
                        </a>
                    </div>

                    <nav class="hidden md:block" data-role="desktop-nav">
                        <div class="flex items-center space-x-8">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| view! { <NavLink item=*item link_class=DESKTOP_LINK /> })
                                .collect_view()}
                        </div>
                    </nav>

                    <div class="md:hidden">
                        <MenuButton menu=menu />
                    </div>
                </div>

                <MobileMenu menu=menu />
            </div>
        </header>
    }
}

#[component]
fn NavLink(item: NavItem, link_class: &'static str) -> impl IntoView {
    view! {
        <a href=item.path() class=link_class>
            <span>{item.icon}</span>
            <span>{item.label}</span>
        </a>
    }
}

fn toggle_menu(menu: RwSignal<MenuState>) {
    menu.update(MenuState::toggle);
    tracing::debug!(state = ?menu.get_untracked(), "mobile menu toggled");
}

fn follow_mobile_link(menu: RwSignal<MenuState>) {
    menu.update(MenuState::close);
}

#[component]
fn MenuButton(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <button
            class="text-gray-300 hover:text-white focus:outline-none focus:ring-2 focus:ring-inset focus:ring-blue-500 p-2"
            aria-expanded=move || menu.get().aria_expanded()
            data-role="menu-toggle"
            on:click=move |_| toggle_menu(menu)
        >
            <span class="sr-only">{move || menu.get().button_label()}</span>
            <svg class="block h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d=move || if menu.get().is_open() { ICON_CROSS } else { ICON_BARS }
                />
            </svg>
        </button>
    }
}

/// Expanded link list for narrow viewports. Only rendered while open;
/// following any link collapses it again.
#[component]
pub(crate) fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <Show when=move || menu.get().is_open()>
            <div class="md:hidden" data-role="mobile-nav">
                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 bg-gray-800 rounded-lg mt-2">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.path()
                                    class=MOBILE_LINK
                                    on:click=move |_| follow_mobile_link(menu)
                                >
                                    <span>{item.icon}</span>
                                    <span>{item.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
