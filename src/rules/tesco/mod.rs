//! The Tesco "Appendix B" profile.
//!
//! Thirteen hard-fail rules plus one advisory rule covering copy
//! restrictions, mandatory fixtures, legibility, and spatial placement.
//! Rule-by-rule
//! semantics live in `rules.rs`; the fixed pattern tables in `helpers.rs`.

pub(crate) mod helpers;
pub(crate) mod predicates;
pub mod rules;

#[cfg(test)]
mod tests;

/// Tunable configuration for the Tesco profile.
///
/// Constructed once and moved into the rule closures; never mutated after.
/// Hosts that need a wider tag allow-list build a [`crate::Ruleset`] via
/// `Ruleset::tesco_with` instead of editing the evaluator.
#[derive(Debug, Clone)]
pub struct TescoConfig {
    /// Exact strings a `Tag` fixture may carry. Matching is byte-exact: no
    /// trimming, no case folding.
    pub approved_tags: Vec<String>,
    /// Minimum drinkaware logo height in pixels.
    pub drinkaware_min_height: f32,
    /// 9:16 format: content must start below this top margin.
    pub safe_zone_top: f32,
    /// 9:16 format: content must end above this bottom margin.
    pub safe_zone_bottom: f32,
}

impl Default for TescoConfig {
    fn default() -> Self {
        TescoConfig {
            approved_tags: vec![
                "Only at Tesco".to_string(),
                "Available at Tesco".to_string(),
                "Selected stores. While stocks last".to_string(),
            ],
            drinkaware_min_height: 20.0,
            safe_zone_top: 200.0,
            safe_zone_bottom: 250.0,
        }
    }
}
