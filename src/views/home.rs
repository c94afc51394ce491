//! Landing page: hero, mission, philosophy, guest speakers, community.

use dioxus::prelude::*;

use super::cards::{SpeakerCard, StatCard};
use crate::nav::{Navigator, View};

/// The home page takes the navigator so its calls to action can change the
/// active page themselves.
#[component]
pub fn Home(nav: Navigator) -> Element {
    rsx! {
        div { class: "space-y-12",
            div { class: "bg-white p-6 rounded-2xl shadow-xl max-w-7xl mx-auto",
                div { class: "flex justify-center mb-2",
                    div { class: "w-16 h-16 rounded-full overflow-hidden border-2 border-llhs-gold animate-circle-pulse shadow-md p-1",
                        img {
                            src: "/assets/logo/knights.png",
                            alt: "Las Lomas Knights",
                            class: "w-full h-full object-contain",
                        }
                    }
                }
                h2 { class: "text-4xl font-bold text-llhs-maroon mb-4 text-center",
                    "Welcome to LLHS Finance Club"
                }
                p { class: "text-lg text-gray-700 mb-6 text-center",
                    "Learn investing, personal finance, and real-world money skills — no experience needed."
                }
                div { class: "text-center space-y-4 md:space-y-0 md:space-x-6 flex flex-col md:flex-row justify-center",
                    button {
                        class: "bg-llhs-maroon text-white font-bold py-3 px-8 rounded-lg shadow-md hover:shadow-lg transition-all duration-300 w-full md:w-auto",
                        onclick: move |_| nav.go(View::Join),
                        "Get Started"
                    }
                    button {
                        class: "bg-llhs-gold text-llhs-maroon font-bold py-3 px-8 rounded-lg shadow-md hover:shadow-lg transition-all duration-300 w-full md:w-auto",
                        onclick: move |_| nav.go(View::Portfolio),
                        "Check our Portfolio"
                    }
                }
            }

            div { class: "p-8 bg-white shadow-xl rounded-2xl border-t-4 border-llhs-gold",
                h3 { class: "text-3xl font-bold text-llhs-maroon mb-4", "Our Mission: Cultivating Capital" }
                p { class: "text-gray-700 text-lg italic",
                    "Our high school finance club is a vibrant and engaging space for students interested in learning about finance and investing. We host competitive stock fantasy games where members can test their skills and strategies in a simulated environment, gaining real-world insights without any risk."
                }
                p { class: "text-gray-700 text-lg italic mt-4",
                    "We bring in guest speakers, professionals from the finance community, to share their knowledge and experiences, providing a unique opportunity for students to learn directly from experts."
                }
                p { class: "text-gray-700 text-lg italic mt-4",
                    "LLHS Finance emphasizes building a supportive and strong community, where students work together to deepen their understanding of finance and prepare for future challenges in the field."
                }
            }

            div { class: "p-8 bg-white shadow-xl rounded-2xl border-t-4 border-llhs-gold",
                h3 { class: "text-3xl font-bold text-llhs-maroon mb-6", "Our Philosophy" }
                p { class: "text-gray-700 text-lg mb-8 text-center max-w-3xl mx-auto",
                    "We teach "
                    span { class: "font-bold text-llhs-maroon", "financial literacy" }
                    " and "
                    span { class: "font-bold text-llhs-maroon", "ethical investing" }
                    " through hands-on practice, real-world tools, and leadership opportunities — empowering students to build wealth responsibly and lead with confidence."
                }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-6 text-center",
                    StatCard {
                        title: "Financial Literacy",
                        description: "Hands-on learning with real-world financial tools.",
                    }
                    StatCard {
                        title: "Ethical Investing",
                        description: "Developing a responsible, long-term approach to wealth.",
                    }
                    StatCard {
                        title: "Leadership Development",
                        description: "Opportunities to lead discussions and manage projects.",
                    }
                }
            }

            div { class: "p-8 bg-white shadow-xl rounded-2xl border-t-4 border-llhs-gold",
                h3 { class: "text-3xl font-bold text-llhs-maroon mb-6", "Guest Speakers" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    SpeakerCard {
                        name: "Jeff Ahrens",
                        linkedin: "https://www.linkedin.com/in/jeff-ahrens-94b306/",
                        title: "Executive Director - Investments",
                        firm: "Oppenheimer & Co. Inc.",
                        topic: "Investing basics, portfolio management, balanced portfolios",
                        date: "February 11, 2025",
                    }
                    SpeakerCard {
                        name: "Mike Frazier",
                        linkedin: "https://www.linkedin.com/in/mikefraziercaliforniainvest/",
                        title: "Chairman",
                        firm: "Bedell Frazier Investment Counseling",
                        topic: "Financial literacy and the benefits of investing early.",
                        date: "September 22, 2025",
                    }
                    SpeakerCard {
                        name: "Matt Macomber",
                        linkedin: "https://www.linkedin.com/in/macomber/",
                        title: "SVP & Head of Digital Wealth - Americas",
                        firm: "Franklin Templeton",
                        topic: "Asset Management and the differences between stocks, ETFs, mutual funds and bonds.",
                        date: "October 17, 2025",
                    }
                    SpeakerCard {
                        name: "David Stern",
                        linkedin: "https://www.linkedin.com/in/dsternsf/",
                        title: "Managing Member",
                        firm: "Motion Technology Partners",
                        topic: "All about venture capital.",
                        date: "November 17, 2025",
                    }
                    SpeakerCard {
                        name: "Matt Peletier",
                        linkedin: "https://www.linkedin.com/in/matthew-pelletier-1304a113/",
                        title: "Managing Director",
                        firm: "REX Financial",
                        topic: "Investing in cryptocurrency.",
                        date: "To be announced soon",
                    }
                }
                p { class: "text-center text-sm text-gray-500 mt-6 italic",
                    "More speakers announced regularly — follow us on Instagram!"
                }
            }

            div { class: "p-8 bg-white shadow-xl rounded-2xl border-t-4 border-llhs-gold",
                h3 { class: "text-3xl font-bold text-llhs-maroon mb-6 text-center md:text-left",
                    "Las Lomas Finance Club Community"
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-8 items-start",
                    div { class: "space-y-3",
                        p { class: "text-center md:text-left text-sm text-gray-600 italic",
                            "What’s it like to attend a LLHS Finance Club meeting? Check out a recent meeting with one of our guest speakers."
                        }
                        div { class: "relative overflow-hidden rounded-lg shadow-lg bg-black aspect-video",
                            video {
                                class: "w-full h-full object-cover",
                                controls: true,
                                poster: "/assets/logo/knights.png",
                                source { src: "/assets/videos/club-meeting.mp4", r#type: "video/mp4" }
                                "Your browser does not support the video tag."
                            }
                        }
                    }
                    div { class: "space-y-3",
                        p { class: "text-center md:text-left text-sm text-gray-600 italic",
                            "We have nearly 50 members with many showing up consistently to our meetings and guest speaker events."
                        }
                        div { class: "relative overflow-hidden rounded-lg shadow-lg bg-gray-100 aspect-video",
                            img {
                                src: "/assets/team/llhsfinance-team.jpeg",
                                alt: "LLHS Finance Club Team",
                                class: "w-full h-full object-cover object-center",
                            }
                        }
                    }
                }
            }
        }
    }
}
