use once_cell::sync::Lazy;
use serde::Serialize;

use crate::document::{Document, ElementId};
use crate::engine::{self, Ruleset};
use crate::{RuleOutcome, Severity};

static TESCO_RULES: Lazy<Ruleset> = Lazy::new(Ruleset::tesco);

/// Per-call evaluation parameters.
///
/// The context carries everything some rules need beyond the document itself.
/// Today that is the display surface, which selects the minimum legible font
/// size; rules that don't care ignore it.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// The surface the creative will be displayed on. `None` applies the
    /// strictest font-size minimum.
    pub surface: Option<Surface>,
}

/// A display surface the creative targets.
///
/// Surface names follow the retailer's format taxonomy; each carries its own
/// minimum legible font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Surface {
    /// Brand-store placements.
    Brand,
    /// Checkout screens, two tiles per row.
    CheckoutDoubleDensity,
    /// Checkout screens, one tile per row.
    CheckoutSingleDensity,
    /// Vertical social formats.
    Social,
}

impl Surface {
    /// Minimum legible font size for this surface, in pixels.
    #[must_use]
    pub fn min_font_size(self) -> f32 {
        match self {
            Surface::Social => 24.0,
            Surface::Brand => 16.0,
            Surface::CheckoutDoubleDensity => 14.0,
            Surface::CheckoutSingleDensity => 12.0,
        }
    }

    /// The strictest minimum across all surfaces; applied when the caller
    /// does not name a surface.
    #[must_use]
    pub fn strictest_min_font_size() -> f32 {
        Surface::Social.min_font_size()
    }
}

impl std::str::FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand" => Ok(Surface::Brand),
            "checkout-double-density" | "checkoutDoubleDensity" => Ok(Surface::CheckoutDoubleDensity),
            "checkout-single-density" | "checkoutSingleDensity" => Ok(Surface::CheckoutSingleDensity),
            "social" => Ok(Surface::Social),
            other => Err(format!(
                "unknown surface '{other}' (expected brand, checkout-double-density, checkout-single-density or social)"
            )),
        }
    }
}

/// The outcome of one rule for one evaluation pass.
///
/// Created fresh on every [`validate`] call and never persisted by the
/// engine; how long to retain or display it is the caller's business.
#[derive(Debug, Clone, Serialize)]
pub struct RuleResult {
    /// Stable rule name.
    pub rule: &'static str,
    pub passed: bool,
    /// Human-readable pass note or violation message.
    pub message: String,
    pub severity: Severity,
    /// Offending element, where the violation is attributable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementId>,
    /// Acceptable alternatives, for allow-list rules.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestion: Vec<String>,
    /// The UI must surface this result for explicit user acknowledgment and
    /// cannot silently dismiss it.
    #[serde(skip_serializing_if = "is_false")]
    pub requires_confirmation: bool,
}

fn is_false(b: &bool) -> bool {
    !b
}

impl RuleResult {
    pub(crate) fn new(rule: &'static str, severity: Severity, outcome: RuleOutcome) -> Self {
        RuleResult {
            rule,
            passed: outcome.passed,
            message: outcome.message,
            severity,
            element: outcome.element,
            suggestion: outcome.suggestion,
            requires_confirmation: outcome.requires_confirmation,
        }
    }
}

/// Aggregate counts derived from one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Results that passed outright.
    pub passed: usize,
    /// Hard failures (error severity, not passed).
    pub failed: usize,
    /// Advisory results: failed warnings plus anything awaiting confirmation.
    pub warnings: usize,
    /// Share of outright passes, 0–100.
    pub score: f64,
}

/// The full, ordered result of one evaluation pass. Immutable once built.
///
/// An empty report means nothing could be verified — callers must not read it
/// as "everything passed".
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    results: Vec<RuleResult>,
    summary: Summary,
}

impl Report {
    pub(crate) fn new(results: Vec<RuleResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed && !r.requires_confirmation).count();
        let failed =
            results.iter().filter(|r| !r.passed && r.severity == Severity::Error).count();
        let warnings = results
            .iter()
            .filter(|r| r.requires_confirmation || (!r.passed && r.severity == Severity::Warning))
            .count();
        let score = if results.is_empty() {
            0.0
        } else {
            100.0 * passed as f64 / results.len() as f64
        };

        Report { results, summary: Summary { passed, failed, warnings, score } }
    }

    /// All rule results, in report order (errors first, then warnings).
    #[must_use]
    pub fn results(&self) -> &[RuleResult] {
        &self.results
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Share of outright passes, 0–100.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.summary.score
    }

    /// True when no hard-fail rule was violated *and* at least one rule ran.
    ///
    /// Warnings and pending confirmations do not affect compliance; blocking
    /// publish is the caller's decision either way.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        !self.results.is_empty() && self.summary.failed == 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Hard failures only, in report order.
    pub fn failures(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.passed && r.severity == Severity::Error)
    }

    /// Results the UI must put in front of the user for acknowledgment.
    pub fn confirmations(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| r.requires_confirmation)
    }
}

/// Validate `document` against the Tesco profile with a default [`Context`].
///
/// # Example
/// ```
/// use adlint::{validate, Dimensions, Document, Element, ElementKind};
///
/// let doc = Document::new(Dimensions::new(1200.0, 628.0))
///     .with(Element::new("bg", ElementKind::Background));
/// let report = validate(&doc);
/// assert!(report.is_compliant());
/// ```
pub fn validate(document: &Document) -> Report {
    validate_with(document, &Context::default())
}

/// Validate `document` against the Tesco profile with the provided context.
pub fn validate_with(document: &Document, context: &Context) -> Report {
    engine::evaluator::run(&TESCO_RULES, document, context)
}

/// Evaluate an explicit ruleset — a custom profile, a retailer profile, or a
/// host-extended Tesco set.
pub fn evaluate(ruleset: &Ruleset, document: &Document, context: &Context) -> Report {
    engine::evaluator::run(ruleset, document, context)
}
