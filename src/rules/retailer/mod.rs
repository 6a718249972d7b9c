//! Generic (non-Tesco) retailer profiles.
//!
//! A sibling compliance checker over the same document shape: each retailer
//! gets a small parameter table (logo share, edge margins, font minima, ...)
//! from which `rules.rs` builds a rule list for the shared engine.

pub mod rules;


/// Retailers with a built-in guideline profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retailer {
    Amazon,
    Flipkart,
    Dmart,
    /// Baseline advertising guidelines, retailer-agnostic.
    General,
}

impl Retailer {
    pub const ALL: [Retailer; 4] =
        [Retailer::Amazon, Retailer::Flipkart, Retailer::Dmart, Retailer::General];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Retailer::Amazon => "amazon",
            Retailer::Flipkart => "flipkart",
            Retailer::Dmart => "dmart",
            Retailer::General => "general",
        }
    }
}

impl std::fmt::Display for Retailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Retailer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "amazon" => Ok(Retailer::Amazon),
            "flipkart" => Ok(Retailer::Flipkart),
            "dmart" => Ok(Retailer::Dmart),
            "general" => Ok(Retailer::General),
            other => Err(format!("unknown retailer '{other}' (expected amazon, flipkart, dmart or general)")),
        }
    }
}
