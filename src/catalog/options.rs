//! Investment options offered by the simulator, grouped by category

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tabs of the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentCategory {
    FixedIncome,
    Stocks,
    Crypto,
    Funds,
}

impl InvestmentCategory {
    pub const ALL: [InvestmentCategory; 4] = [
        InvestmentCategory::FixedIncome,
        InvestmentCategory::Stocks,
        InvestmentCategory::Crypto,
        InvestmentCategory::Funds,
    ];

    /// Parse a CLI/config name such as "fixed-income" or "crypto"
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "fixed-income" | "renda-fixa" => Some(InvestmentCategory::FixedIncome),
            "stocks" | "acoes" => Some(InvestmentCategory::Stocks),
            "crypto" | "cripto" => Some(InvestmentCategory::Crypto),
            "funds" | "fundos" => Some(InvestmentCategory::Funds),
            _ => None,
        }
    }
}

impl fmt::Display for InvestmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvestmentCategory::FixedIncome => "Fixed income",
            InvestmentCategory::Stocks => "Stocks",
            InvestmentCategory::Crypto => "Crypto",
            InvestmentCategory::Funds => "Funds",
        };
        f.write_str(name)
    }
}

/// Risk grade shown on each rate card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Coarse grouping used for colour coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Conservative,
    Moderate,
    Aggressive,
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskBand::Conservative => "Conservative",
            RiskBand::Moderate => "Moderate",
            RiskBand::Aggressive => "Aggressive",
        };
        f.write_str(name)
    }
}

impl RiskLevel {
    pub fn band(self) -> RiskBand {
        match self {
            RiskLevel::VeryLow | RiskLevel::Low => RiskBand::Conservative,
            RiskLevel::Medium => RiskBand::Moderate,
            RiskLevel::High | RiskLevel::VeryHigh => RiskBand::Aggressive,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::VeryLow => "Very low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very high",
        };
        f.write_str(name)
    }
}

/// Holding period of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    Months(u32),
    Flexible,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Months(m) => write!(f, "{m} months"),
            Term::Flexible => f.write_str("Flexible"),
        }
    }
}

/// A single rate card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentOption {
    pub id: u32,
    pub name: String,
    pub category: InvestmentCategory,
    /// Annual rate in percent (12.5 = 12.5% a.a.)
    pub annual_rate_pct: f64,
    pub risk: RiskLevel,
    /// Smallest amount accepted for a simulation
    pub min_amount: f64,
    pub term: Term,
}

impl InvestmentOption {
    fn new(
        id: u32,
        name: &str,
        category: InvestmentCategory,
        annual_rate_pct: f64,
        risk: RiskLevel,
        min_amount: f64,
        term: Term,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
            annual_rate_pct,
            risk,
            min_amount,
            term,
        }
    }

    pub fn accepts(&self, amount: f64) -> bool {
        amount.is_finite() && amount >= self.min_amount
    }
}

/// The full set of rate cards
#[derive(Debug, Clone)]
pub struct InvestmentCatalog {
    options: Vec<InvestmentOption>,
}

impl Default for InvestmentCatalog {
    fn default() -> Self {
        use InvestmentCategory::*;
        use RiskLevel::*;
        use Term::*;
        let opt = InvestmentOption::new;

        Self {
            options: vec![
                opt(1, "CDB Premium 100% CDI", FixedIncome, 12.5, Low, 500.0, Months(12)),
                opt(2, "LCI Isento IR", FixedIncome, 10.8, Low, 1_000.0, Months(24)),
                opt(3, "Tesouro Selic 2027", FixedIncome, 11.2, VeryLow, 100.0, Months(36)),
                opt(4, "Portfolio Dividendos", Stocks, 18.5, Medium, 500.0, Flexible),
                opt(5, "Tech Growth Brasil", Stocks, 25.3, High, 1_000.0, Flexible),
                opt(6, "Blue Chips Estáveis", Stocks, 15.7, Medium, 500.0, Flexible),
                opt(7, "Bitcoin (BTC)", Crypto, 45.2, VeryHigh, 100.0, Flexible),
                opt(8, "Ethereum (ETH)", Crypto, 38.5, VeryHigh, 100.0, Flexible),
                opt(9, "Crypto Index Fund", Crypto, 32.8, High, 250.0, Flexible),
                opt(10, "Fundo Multimercado Premium", Funds, 14.2, Medium, 1_000.0, Months(12)),
                opt(11, "Fundo Imobiliário FII", Funds, 9.8, Low, 500.0, Flexible),
                opt(12, "Fundo de Ações Agressivo", Funds, 22.5, High, 2_000.0, Months(24)),
            ],
        }
    }
}

impl InvestmentCatalog {
    pub fn iter(&self) -> impl Iterator<Item = &InvestmentOption> {
        self.options.iter()
    }

    pub fn find(&self, id: u32) -> Option<&InvestmentOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn options_in(&self, category: InvestmentCategory) -> Vec<&InvestmentOption> {
        self.options.iter().filter(|o| o.category == category).collect()
    }

    /// Categories present in the catalog, in tab order
    pub fn categories(&self) -> Vec<InvestmentCategory> {
        InvestmentCategory::ALL
            .into_iter()
            .filter(|c| self.options.iter().any(|o| o.category == *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog() {
        let catalog = InvestmentCatalog::default();
        assert_eq!(catalog.iter().count(), 12);

        let ids: HashSet<u32> = catalog.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), 12);

        for category in InvestmentCategory::ALL {
            assert_eq!(catalog.options_in(category).len(), 3);
        }
        assert_eq!(catalog.categories(), InvestmentCategory::ALL.to_vec());
    }

    #[test]
    fn test_find_option() {
        let catalog = InvestmentCatalog::default();
        let cdb = catalog.find(1).unwrap();
        assert_eq!(cdb.name, "CDB Premium 100% CDI");
        assert_eq!(cdb.annual_rate_pct, 12.5);
        assert_eq!(cdb.min_amount, 500.0);
        assert_eq!(cdb.term, Term::Months(12));
        assert!(catalog.find(99).is_none());
    }

    #[test]
    fn test_risk_bands() {
        assert_eq!(RiskLevel::VeryLow.band(), RiskBand::Conservative);
        assert_eq!(RiskLevel::Low.band(), RiskBand::Conservative);
        assert_eq!(RiskLevel::Medium.band(), RiskBand::Moderate);
        assert_eq!(RiskLevel::High.band(), RiskBand::Aggressive);
        assert_eq!(RiskLevel::VeryHigh.band(), RiskBand::Aggressive);
        assert!(RiskLevel::Low < RiskLevel::VeryHigh);
    }

    #[test]
    fn test_category_names() {
        let parse = InvestmentCategory::from_name;
        assert_eq!(parse("fixed-income"), Some(InvestmentCategory::FixedIncome));
        assert_eq!(parse("Fixed_Income"), Some(InvestmentCategory::FixedIncome));
        assert_eq!(parse("renda-fixa"), Some(InvestmentCategory::FixedIncome));
        assert_eq!(parse("cripto"), Some(InvestmentCategory::Crypto));
        assert_eq!(parse("bonds"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(InvestmentCategory::FixedIncome.to_string(), "Fixed income");
        assert_eq!(RiskLevel::VeryHigh.to_string(), "Very high");
        assert_eq!(RiskBand::Moderate.to_string(), "Moderate");
        assert_eq!(Term::Months(24).to_string(), "24 months");
        assert_eq!(Term::Flexible.to_string(), "Flexible");
    }

    #[test]
    fn test_accepts_minimum() {
        let catalog = InvestmentCatalog::default();
        let lci = catalog.find(2).unwrap();
        assert!(!lci.accepts(999.99));
        assert!(lci.accepts(1_000.0));
        assert!(!lci.accepts(f64::NAN));
    }
}
