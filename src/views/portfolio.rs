//! Portfolio page: growth banner and the holdings table.
//!
//! Gain columns and the banner figures are computed from [`HOLDINGS`] rather
//! than pasted in, so updating a row updates everything derived from it.

use dioxus::prelude::*;

use crate::holdings::{dollars, percent, shares, PortfolioSummary, HOLDINGS};

#[component]
pub fn Portfolio() -> Element {
    let summary = PortfolioSummary::compute(&HOLDINGS);
    let current_value = dollars(summary.current_value);
    let overall_gain = format!(
        "{}{}",
        if summary.gain_percent >= 0.0 { "+" } else { "" },
        percent(summary.gain_percent)
    );

    rsx! {
        div { class: "space-y-8 p-6 bg-white rounded-2xl shadow-xl",
            h2 { class: "text-4xl font-bold text-llhs-maroon border-b pb-3 border-llhs-gold",
                "Our Investment Portfolio"
            }
            p { class: "text-lg text-gray-700",
                "A real investment portfolio — seeded with $4,000 from club members — is actively tracked and analyzed by the LLHS Finance Club. Follow live performance and holdings below."
            }

            div { class: "bg-gradient-to-r from-llhs-maroon to-llhs-gold p-1 rounded-full max-w-2xl mx-auto mb-6",
                div { class: "bg-white py-4 px-8 rounded-full flex items-center justify-between relative overflow-hidden h-20",
                    div { class: "flex flex-col items-center z-10",
                        p { class: "text-xs font-medium text-gray-600 mb-1", "Started" }
                        p { class: "text-2xl font-bold text-llhs-maroon leading-none", "$4,000" }
                    }
                    div { class: "absolute left-0 top-0 h-full bg-llhs-gold/25 rounded-full animate-grow-to-end" }
                    div { class: "flex flex-col items-end z-10",
                        p { class: "text-xs font-medium text-gray-600 mb-1",
                            "Current "
                            span { class: "font-semibold text-green-600", "({overall_gain})" }
                        }
                        p { class: "text-2xl font-bold text-llhs-maroon leading-none",
                            "{current_value}"
                        }
                    }
                }
            }

            p { class: "text-center text-sm text-gray-500 italic", "Last updated: October 2025" }

            div { class: "overflow-x-auto",
                table { class: "min-w-full bg-white border border-gray-200 rounded-lg",
                    thead { class: "bg-gray-50",
                        tr {
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-700 uppercase tracking-wider", "Symbol" }
                            th { class: "px-4 py-3 text-left text-xs font-medium text-gray-700 uppercase tracking-wider", "Name" }
                            th { class: "px-4 py-3 text-right text-xs font-medium text-gray-700 uppercase tracking-wider", "Quantity" }
                            th { class: "px-4 py-3 text-right text-xs font-medium text-gray-700 uppercase tracking-wider", "Market Value" }
                            th { class: "px-4 py-3 text-right text-xs font-medium text-gray-700 uppercase tracking-wider", "Cost Basis" }
                            th { class: "px-4 py-3 text-right text-xs font-medium text-gray-700 uppercase tracking-wider", "Unrealized Gain ($)" }
                            th { class: "px-4 py-3 text-right text-xs font-medium text-gray-700 uppercase tracking-wider", "Unrealized Gain (%)" }
                        }
                    }
                    tbody { class: "divide-y divide-gray-200",
                        for holding in HOLDINGS.iter() {
                            HoldingRow {
                                key: "{holding.symbol}",
                                symbol: holding.symbol,
                                name: holding.name,
                                quantity: holding.quantity,
                                market_value: holding.market_value,
                                cost_basis: holding.cost_basis,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HoldingRow(
    symbol: &'static str,
    name: &'static str,
    quantity: f64,
    market_value: f64,
    cost_basis: f64,
) -> Element {
    let gain = market_value - cost_basis;
    let gain_percent = gain / cost_basis * 100.0;
    let gain_class = if gain >= 0.0 {
        "px-4 py-3 text-sm text-right text-green-600"
    } else {
        "px-4 py-3 text-sm text-right text-red-600"
    };

    rsx! {
        tr { class: "hover:bg-gray-50",
            td { class: "px-4 py-3 text-sm font-medium text-llhs-maroon", {symbol} }
            td { class: "px-4 py-3 text-sm text-gray-700", {name} }
            td { class: "px-4 py-3 text-sm text-right text-gray-700", {shares(quantity)} }
            td { class: "px-4 py-3 text-sm text-right text-gray-700", {dollars(market_value)} }
            td { class: "px-4 py-3 text-sm text-right text-gray-700", {dollars(cost_basis)} }
            td { class: gain_class, {dollars(gain)} }
            td { class: gain_class, {percent(gain_percent)} }
        }
    }
}
