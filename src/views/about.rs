//! About page: founding story, pillars, leadership team, faculty sponsor.

use dioxus::prelude::*;

use super::cards::{LeaderProfile, PillarCard};

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "space-y-8 p-6 bg-white rounded-2xl shadow-xl",
            h2 { class: "text-4xl font-bold text-llhs-maroon border-b pb-3 border-llhs-gold",
                "About the Club"
            }
            p { class: "text-lg text-gray-700",
                "Founded in 2024, the LLHS Finance Club was created by students who saw a gap in traditional education regarding personal finance and investment strategy. We operate as a practical, project-based learning environment where members actively participate in mock portfolio management, economic forecasting, and guest speaker sessions."
            }

            div { class: "space-y-4",
                h3 { class: "text-2xl font-semibold text-llhs-maroon mb-4", "Our Pillars" }
                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    PillarCard {
                        title: "Market Analysis",
                        blurb: "Weekly deep dives into current events and stock movements, analyzing company performance and economic trends.",
                    }
                    PillarCard {
                        title: "Personal Finance",
                        blurb: "Workshops covering essential life skills like budgeting, understanding credit, and long-term retirement planning.",
                    }
                    PillarCard {
                        title: "Investment Portfolio",
                        blurb: "Managing a simulated fund, competing in challenges, and practicing real-world asset allocation.",
                    }
                    PillarCard {
                        title: "Community Outreach",
                        blurb: "Teaching foundational financial basics to high school students to foster financial literacy.",
                    }
                }
            }

            p { class: "text-lg text-gray-700 pt-4 border-t mt-8",
                "We strive to create a sophisticated, yet accessible, environment for all students. We welcome everyone, from beginners who can't tell a stock from a bond, to seasoned investors looking for peer challenge."
            }

            div { class: "mt-8 p-6 bg-gray-50 rounded-2xl shadow-md border border-llhs-gold",
                h3 { class: "text-2xl font-semibold text-llhs-maroon mb-4", "Leadership Team" }
                p { class: "text-lg text-gray-700 mb-6",
                    "Our leaders are passionate about personal finance and investing. Each has been actively managing their own portfolios for years, building real-world experience in market analysis, risk management, and long-term wealth strategy."
                }
                div { class: "space-y-8",
                    div { class: "grid grid-cols-1 sm:grid-cols-3 gap-6",
                        LeaderProfile {
                            name: "Mason Grant",
                            linkedin: "https://www.linkedin.com/in/mason-grant-916970321/",
                            photo: "/assets/headshots/headshot-mason.jpeg",
                            role: "President, Investment Lead",
                            focus: rsx! {
                                "Leading research into "
                                span { class: "font-semibold text-llhs-maroon",
                                    "data center infrastructure and AI compute demand"
                                }
                                "."
                            },
                        }
                        LeaderProfile {
                            name: "Nico Alessi",
                            linkedin: "https://www.linkedin.com/in/nicolas-alessi-05111b21/",
                            photo: "/assets/headshots/headshot-nico.png",
                            role: "Head of Development",
                            focus: rsx! {
                                "Exploring "
                                span { class: "font-semibold text-llhs-maroon", "next-gen power" }
                                " like advanced batteries, solar tech, and nuclear energy."
                            },
                        }
                        LeaderProfile {
                            name: "Alex Alessi",
                            linkedin: "https://www.linkedin.com/in/alex-alessi-ab511a21/",
                            photo: "/assets/headshots/headshot-alex.png",
                            role: "Head of Recruiting",
                            focus: rsx! {
                                "Interested in "
                                span { class: "font-semibold text-llhs-maroon", "real estate ETFs and REITs" }
                                " to own pieces of apartments, malls, and warehouses without buying a whole building."
                            },
                        }
                    }
                    div { class: "grid grid-cols-1 sm:grid-cols-2 gap-6 max-w-3xl mx-auto",
                        LeaderProfile {
                            name: "Stephen Cordano",
                            linkedin: "https://www.linkedin.com/in/stephen-cordano-372bb0394/",
                            photo: "/assets/headshots/headshot-stephen.jpg",
                            role: "Head of Research",
                            focus: rsx! {
                                "Studying "
                                span { class: "font-semibold text-llhs-maroon", "cybersecurity companies" }
                                " that keep computers and data safe from hackers."
                            },
                        }
                        LeaderProfile {
                            name: "Sameer Raj",
                            linkedin: "https://www.linkedin.com/in/sameer-raj-94a983336/",
                            photo: "/assets/headshots/headshot-sameer.jpeg",
                            role: "VP, Marketing",
                            focus: rsx! {
                                "Focused on "
                                span { class: "font-semibold text-llhs-maroon",
                                    "AI tools that help businesses work smarter"
                                }
                                ", like chatbots and smart software."
                            },
                        }
                    }
                }
            }

            div { class: "mt-8 p-6 bg-gray-50 rounded-2xl shadow-md border border-llhs-gold",
                h3 { class: "text-2xl font-semibold text-llhs-maroon mb-4", "Our Sponsor" }
                p { class: "text-lg text-gray-700 mb-6",
                    "We’re grateful for the support of our faculty sponsor who makes our club possible."
                }
                div { class: "flex flex-col items-center text-center max-w-md mx-auto",
                    div { class: "w-32 h-32 rounded-full overflow-hidden border-4 border-llhs-gold mb-3",
                        img {
                            src: "/assets/headshots/headshot-mr-bremer.jpg",
                            alt: "Mr. Bremmer",
                            class: "w-full h-full object-cover",
                        }
                    }
                    p { class: "font-bold text-lg text-llhs-maroon", "Mr. Bremer" }
                    p { class: "text-gray-600 text-sm", "Economics Teacher & Faculty Sponsor" }
                    p { class: "mt-3 text-sm text-gray-700 leading-relaxed",
                        "Mr. Bremer generously allows us to use his classroom for meetings and events. As our economics teacher, he helps break down complex financial concepts into clear, actionable insights that inspire our members."
                    }
                }
            }
        }
    }
}
