//! Join page: meeting details and contact info. Static text, no form logic.

use dioxus::prelude::*;

#[component]
pub fn Join() -> Element {
    rsx! {
        div { class: "space-y-8 p-6 bg-white rounded-2xl shadow-xl",
            h2 { class: "text-4xl font-bold text-llhs-maroon border-b pb-3 border-llhs-gold",
                "Ready to Join?"
            }
            p { class: "text-xl text-gray-700",
                "Membership is open to all LLHS students. No prior knowledge is required. Just bring your intellectual curiosity."
            }

            div { class: "bg-gray-100 p-6 rounded-xl shadow-md",
                h3 { class: "text-2xl font-semibold text-llhs-maroon mb-2", "Meeting Information" }
                ul { class: "space-y-2 text-gray-700",
                    li {
                        strong { "Monthly Meetings" }
                        " — These are held in classroom 503 (but are subject to change)."
                    }
                    li {
                        strong { "Next Orientation" }
                        " — Will be announced before the end of 2025"
                    }
                }
                p { class: "text-sm text-gray-600 mt-4 italic",
                    "* Follow the LLHS Finance club Instagram to ensure you stay updated on meeting places, times and speakers."
                }
            }

            div { class: "space-y-2 pt-4 border-t",
                h3 { class: "text-2xl font-semibold text-llhs-maroon", "Contact Us" }
                p { class: "text-gray-700",
                    "For questions, send an email to "
                    a {
                        href: "mailto:mason.grant26@auhsdschools.org",
                        class: "text-llhs-maroon font-medium underline hover:text-llhs-gold transition-colors",
                        "mason.grant26@auhsdschools.org"
                    }
                    " or call/text Mason Grant at 925-542-5480."
                }
            }
        }
    }
}
