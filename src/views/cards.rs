//! Small presentational pieces shared by the pages.

use dioxus::prelude::*;

/// Card for a key value proposition on the home page.
#[component]
pub fn StatCard(title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "p-6 bg-white rounded-xl shadow-lg border-b-4 border-llhs-maroon transition-transform hover:shadow-xl hover:scale-[1.02]",
            h4 { class: "text-xl font-bold text-llhs-maroon mb-2", {title} }
            p { class: "text-gray-600", {description} }
        }
    }
}

/// One of the club's four pillars on the about page.
#[component]
pub fn PillarCard(title: &'static str, blurb: &'static str) -> Element {
    rsx! {
        div { class: "p-4 rounded-lg shadow-md bg-llhs-maroon border border-llhs-gold",
            p { class: "font-bold text-lg text-llhs-gold mb-1", {title} }
            p { class: "text-gray-200 text-sm", {blurb} }
        }
    }
}

/// Guest speaker entry on the home page.
#[component]
pub fn SpeakerCard(
    name: &'static str,
    linkedin: &'static str,
    title: &'static str,
    firm: &'static str,
    topic: &'static str,
    date: &'static str,
) -> Element {
    rsx! {
        div { class: "bg-gray-50 p-5 rounded-lg border border-gray-200",
            div { class: "flex items-center gap-2",
                h4 { class: "font-semibold text-llhs-maroon text-lg", {name} }
                a {
                    href: linkedin,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "text-llhs-maroon hover:text-llhs-gold transition-colors",
                    aria_label: "LinkedIn Profile",
                    i { class: "fa-brands fa-linkedin w-5 h-5" }
                }
            }
            p { class: "text-gray-700 mt-1",
                span { class: "font-medium", {title} }
                span { class: "text-gray-500", " at " }
                span { class: "font-medium", {firm} }
            }
            p { class: "text-sm text-gray-600 mt-2 italic",
                "Topic: "
                span { class: "not-italic font-medium", {topic} }
            }
            p { class: "text-sm text-gray-600",
                "Date: "
                span { class: "font-medium", {date} }
            }
        }
    }
}

/// Leadership team member on the about page. `focus` is the short
/// investment-focus blurb, passed as markup so call sites can highlight terms.
#[component]
pub fn LeaderProfile(
    name: &'static str,
    linkedin: &'static str,
    photo: &'static str,
    role: &'static str,
    focus: Element,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center text-center",
            div { class: "w-32 h-32 rounded-full overflow-hidden border-4 border-llhs-gold mb-3",
                img { src: photo, alt: name, class: "w-full h-full object-cover" }
            }
            div { class: "flex items-center justify-center gap-1",
                p { class: "font-bold text-lg text-llhs-maroon", {name} }
                a {
                    href: linkedin,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    i { class: "fa-brands fa-linkedin text-llhs-maroon text-xl" }
                }
            }
            p { class: "text-gray-600 text-sm", {role} }
            div { class: "mt-3 p-3 bg-white rounded-lg border border-llhs-gold/30 shadow-sm w-full max-w-xs",
                p { class: "text-xs italic text-gray-700 leading-relaxed", {focus} }
            }
        }
    }
}
