//! The club's investment portfolio table.
//!
//! The site originally shipped the gain columns and the headline totals as
//! hand-pasted strings. Here they are derived from the quantity, cost-basis
//! and market-value figures instead, so the whole table stays consistent when
//! a row is updated. The derived output reproduces the original display
//! strings exactly for the shipped data set.

/// One position in the portfolio. Money fields are display-precision dollars.
pub struct Holding {
    pub symbol: &'static str,
    pub name: &'static str,
    pub quantity: f64,
    pub market_value: f64,
    pub cost_basis: f64,
}

impl Holding {
    /// Unrealized gain in dollars.
    pub fn gain(&self) -> f64 {
        self.market_value - self.cost_basis
    }

    /// Unrealized gain as a percentage of cost basis.
    pub fn gain_percent(&self) -> f64 {
        self.gain() / self.cost_basis * 100.0
    }
}

/// Current holdings, as of the last manual update.
pub static HOLDINGS: [Holding; 4] = [
    Holding {
        symbol: "APLD",
        name: "APPLIED DIGITAL CORP",
        quantity: 46.0,
        market_value: 1684.75,
        cost_basis: 372.95,
    },
    Holding {
        symbol: "BITF",
        name: "BITFARMS LTD F",
        quantity: 401.0,
        market_value: 2199.73,
        cost_basis: 1419.28,
    },
    Holding {
        symbol: "CIFR",
        name: "CIPHER MNG INC",
        quantity: 41.0,
        market_value: 836.22,
        cost_basis: 496.51,
    },
    Holding {
        symbol: "IREN",
        name: "IREN LTD F",
        quantity: 119.0,
        market_value: 7832.72,
        cost_basis: 2671.39,
    },
];

/// Portfolio-level figures for the growth banner.
pub struct PortfolioSummary {
    pub current_value: f64,
    pub gain_percent: f64,
}

impl PortfolioSummary {
    pub fn compute(holdings: &[Holding]) -> Self {
        let current_value: f64 = holdings.iter().map(|h| h.market_value).sum();
        let cost_basis: f64 = holdings.iter().map(|h| h.cost_basis).sum();
        PortfolioSummary {
            current_value,
            gain_percent: (current_value - cost_basis) / cost_basis * 100.0,
        }
    }
}

/// Formats a dollar amount with thousands separators, e.g. `$12,553.42`.
pub fn dollars(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Formats a percentage to two decimals, e.g. `351.74%`.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Formats a share count the way the brokerage statement prints it.
pub fn shares(value: f64) -> String {
    format!("{value:.5}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn row_gains_match_the_statement() {
        let expected = [
            ("APLD", "$1,311.80", "351.74%"),
            ("BITF", "$780.45", "54.99%"),
            ("CIFR", "$339.71", "68.42%"),
            ("IREN", "$5,161.33", "193.21%"),
        ];
        for (holding, (symbol, gain, pct)) in HOLDINGS.iter().zip(expected) {
            assert_eq!(holding.symbol, symbol);
            assert_eq!(dollars(holding.gain()), gain);
            assert_eq!(percent(holding.gain_percent()), pct);
        }
    }

    #[test]
    fn summary_matches_the_banner() {
        let summary = PortfolioSummary::compute(&HOLDINGS);
        assert_eq!(dollars(summary.current_value), "$12,553.42");
        assert_eq!(percent(summary.gain_percent), "153.09%");
    }

    #[test]
    fn dollar_formatting() {
        assert_eq!(dollars(0.0), "$0.00");
        assert_eq!(dollars(4.5), "$4.50");
        assert_eq!(dollars(999.99), "$999.99");
        assert_eq!(dollars(1000.0), "$1,000.00");
        assert_eq!(dollars(1234567.891), "$1,234,567.89");
        assert_eq!(dollars(-42.0), "-$42.00");
    }

    #[test]
    fn share_formatting() {
        assert_eq!(shares(46.0), "46.00000");
        assert_eq!(shares(401.0), "401.00000");
    }
}
