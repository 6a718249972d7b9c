//! Fixed pattern tables and text-scanning helpers for the Tesco profile.
//!
//! Every table is compiled once at first use and never mutated; concurrent
//! evaluations share them freely.

use once_cell::sync::Lazy;
use regex::Regex;

use super::predicates::carries_copy;
use crate::document::{Document, Element};

/// Restricted legal/promotional phrasing: T&C references and asterisked claims.
pub(crate) static LEGAL_COPY: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)terms\s+and\s+conditions",
        r"(?i)t&c[s]?",
        r"(?i)terms\s+apply",
        r"(?i)conditions\s+apply",
        r"\*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Contest/giveaway vocabulary, matched as case-insensitive substrings.
pub(crate) const COMPETITION_TERMS: &[&str] =
    &["competition", "win ", "prize", "enter to win", "giveaway", "contest"];

/// Environmental-claim vocabulary, matched as case-insensitive substrings.
pub(crate) const SUSTAINABILITY_TERMS: &[&str] = &[
    "eco-friendly",
    "sustainable",
    "carbon neutral",
    "green",
    "environmentally friendly",
    "carbon footprint",
    "planet-friendly",
    "climate",
];

/// Charity and fundraising phrasing.
pub(crate) static CHARITY_COPY: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)charity",
        r"(?i)donation",
        r"(?i)proceeds\s+go\s+to",
        r"(?i)supporting",
        r"(?i)fundraising",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Money-back and refund promises.
pub(crate) static GUARANTEE_COPY: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"(?i)money[\s-]*back", r"(?i)refund", r"(?i)guaranteed?"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Unsubstantiated superiority and efficacy claims. Asterisked claims are
/// already caught by [`LEGAL_COPY`].
pub(crate) static CLAIM_COPY: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)survey\s+says",
        r"(?i)proven",
        r"(?i)clinical",
        r"(?i)scientific",
        r"(?i)tested",
        r"(?i)award-winning",
        r"(?i)\bbest\b",
        r"(?i)number\s+1",
        r"#1",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Price-like copy: currency+digits, percent-off, commerce vocabulary.
pub(crate) static PRICE_CALLOUTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"[£$€]\s*\d", r"(?i)\d+\s*%\s*off", r"(?i)\b(save|discount|deal|offer|was|now)\b"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// The DD/MM numeric end date Clubcard tags must carry.
pub(crate) fn clubcard_date() -> &'static Regex {
    regex!(r"\d{2}/\d{2}")
}

/// Colors a drinkaware logo may use: black/white, named or 3/6-digit hex,
/// any case.
pub(crate) fn is_black_or_white(color: &str) -> bool {
    matches!(
        color.trim().trim_start_matches('#').to_ascii_lowercase().as_str(),
        "black" | "white" | "000" | "fff" | "000000" | "ffffff"
    )
}

/// First regex hit over copy-bearing elements, in document order.
///
/// Returns the offending element and the matched literal so messages can echo
/// exactly what tripped the rule.
pub(crate) fn first_pattern_match<'d>(
    doc: &'d Document,
    patterns: &[Regex],
) -> Option<(&'d Element, String)> {
    for el in doc.elements.iter().filter(|e| carries_copy(e)) {
        let Some(text) = el.text.as_deref() else { continue };
        for re in patterns {
            if let Some(m) = re.find(text) {
                return Some((el, m.as_str().to_string()));
            }
        }
    }
    None
}

/// First case-insensitive substring hit over copy-bearing elements, in
/// document order.
pub(crate) fn first_term_match<'d>(
    doc: &'d Document,
    terms: &'static [&'static str],
) -> Option<(&'d Element, &'static str)> {
    for el in doc.elements.iter().filter(|e| carries_copy(e)) {
        let Some(text) = el.text.as_deref() else { continue };
        let lowered = text.to_lowercase();
        for term in terms {
            if lowered.contains(term) {
                return Some((el, term));
            }
        }
    }
    None
}
