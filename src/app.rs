//! Root component: header, active page, footer.

use dioxus::prelude::*;

use crate::nav::{resolve, use_after_navigate, use_navigation, Navigator, REGISTRY, View};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

/// Owns the navigation state and wires the post-navigation scroll reset.
pub fn App() -> Element {
    let nav = use_navigation();

    // After every committed navigation the viewport jumps back to the top.
    // Without a scroll surface (tests, prerendering) the eval is a no-op.
    use_after_navigate(nav, |_| {
        _ = document::eval("window.scrollTo(0, 0)");
    });

    rsx! {
        Chrome { nav }
    }
}

/// Everything below the navigation state: the page shell plus the dispatched
/// view. Split from [`App`] so tests can drive it with their own navigator.
#[component]
pub fn Chrome(nav: Navigator) -> Element {
    let page = resolve(nav.current());

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        div { class: "min-h-screen flex flex-col bg-gray-100 font-sans",
            Header { nav }
            main { class: "max-w-7xl mx-auto p-4 sm:p-6 lg:p-8 flex-grow w-full",
                {(page.render)(nav)}
            }
            Footer {}
        }
    }
}

#[component]
fn Header(nav: Navigator) -> Element {
    rsx! {
        header { class: "bg-llhs-maroon shadow-xl sticky top-0 z-10",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex flex-col sm:flex-row justify-between items-center",
                // The brand doubles as a home button.
                button {
                    class: "text-3xl font-extrabold tracking-tight text-llhs-gold mb-3 sm:mb-0 hover:text-llhs-gold/80 transition-colors",
                    onclick: move |_| nav.go(View::Home),
                    "LLHS Finance Club"
                }
                nav { class: "flex space-x-3 sm:space-x-6",
                    for entry in REGISTRY.iter() {
                        NavButton { nav, view: entry.view, label: entry.view.label() }
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(nav: Navigator, view: View, label: &'static str) -> Element {
    let class = if nav.current() == view {
        "text-lg font-medium py-1 px-3 rounded-md transition-colors duration-200 text-llhs-gold border-b-2 border-llhs-gold"
    } else {
        "text-lg font-medium py-1 px-3 rounded-md transition-colors duration-200 text-white hover:text-llhs-gold/70"
    };

    rsx! {
        button { class, onclick: move |_| nav.go(view), {label} }
    }
}

#[component]
fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "bg-llhs-maroon text-white p-6 mt-12",
            div { class: "max-w-7xl mx-auto",
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 text-sm text-center md:text-left",
                    div { class: "flex justify-center md:justify-start",
                        p { class: "text-llhs-gold", "© {year} LLHS Finance Club. Go Knights!" }
                    }
                    div { class: "flex justify-center",
                        a {
                            href: "https://www.instagram.com/las_lomas_finance_club/",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "inline-flex items-center text-llhs-gold hover:text-white transition-colors duration-200",
                            i { class: "fa-brands fa-instagram text-2xl mr-2" }
                            span { class: "font-medium", "@las_lomas_finance_club" }
                        }
                    }
                    div { class: "flex justify-center md:justify-end",
                        a {
                            href: "https://github.com/nicolasalessi/llhsfinance",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "inline-flex items-center text-llhs-gold hover:text-white transition-colors duration-200",
                            i { class: "fa-brands fa-github text-2xl mr-2" }
                            span { class: "font-medium", "Fork our code" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Non-wasm builds only exist for the headless test harness; they still get
/// the real year so rendered snapshots never go stale.
#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    year_of_unix_day(secs / 86_400)
}

/// Gregorian year containing the given day number since 1970-01-01.
#[cfg(not(target_arch = "wasm32"))]
fn year_of_unix_day(day: u64) -> u32 {
    let z = day as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let month = match (5 * doy + 2) / 153 {
        mp if mp < 10 => mp + 3,
        mp => mp - 9,
    };
    let year = yoe + era * 400 + i64::from(month <= 2);
    year as u32
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn unix_days_map_to_years() {
        assert_eq!(year_of_unix_day(0), 1970);
        assert_eq!(year_of_unix_day(364), 1970);
        assert_eq!(year_of_unix_day(365), 1971);
        assert_eq!(year_of_unix_day(10_956), 1999);
        assert_eq!(year_of_unix_day(10_957), 2000);
        assert_eq!(year_of_unix_day(18_262), 2020);
    }

    #[test]
    fn footer_year_is_not_stale() {
        assert!(current_year() >= 2025);
    }
}
