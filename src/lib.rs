extern crate self as adlint;

#[macro_use]
mod macros;
mod api;
mod color;
mod document;
mod engine;
mod geometry;
mod rules;

pub use api::{
    Context, Report, RuleResult, Summary, Surface, evaluate, validate, validate_with,
};
pub use color::{ColorParseError, contrast_ratio, meets_aa, relative_luminance};
pub use document::{
    ComplianceTag, Dimensions, Document, Element, ElementId, ElementKind, FixtureKind, Metadata,
};
pub use engine::Ruleset;
pub use rules::retailer::Retailer;
pub use rules::tesco::TescoConfig;

use serde::Serialize;

// --- Core rule types ---------------------------------------------------------

/// Severity class of a rule.
///
/// `Error` rules are hard-fail: a violation must block publishing of the
/// creative. `Warning` rules are advisory and may require explicit user
/// acknowledgment, but never block on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What a rule predicate produced for one evaluation pass.
///
/// `passed: false` is the expected, primary output of the engine and is *not*
/// an error. [`RuleError`] is reserved for "this rule could not be evaluated
/// at all" cases; the evaluator logs and skips those (see `engine::evaluator`).
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub passed: bool,
    pub message: String,
    /// Offending element, when the violation is attributable to one.
    pub element: Option<ElementId>,
    /// Acceptable alternatives, for allow-list style rules.
    pub suggestion: Vec<String>,
    /// The result must be explicitly acknowledged by a user before publish.
    pub requires_confirmation: bool,
}

impl RuleOutcome {
    /// A passing outcome with a short human-readable note.
    pub fn pass(message: impl Into<String>) -> Self {
        RuleOutcome {
            passed: true,
            message: message.into(),
            element: None,
            suggestion: Vec::new(),
            requires_confirmation: false,
        }
    }

    /// A failing outcome with a human-readable violation message.
    pub fn fail(message: impl Into<String>) -> Self {
        RuleOutcome { passed: false, ..RuleOutcome::pass(message) }
    }

    /// Attribute this outcome to a specific element.
    #[must_use]
    pub fn for_element(mut self, id: ElementId) -> Self {
        self.element = Some(id);
        self
    }

    /// Attach acceptable alternatives (e.g. an allow-list) to this outcome.
    #[must_use]
    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestion = suggestions.into_iter().map(Into::into).collect();
        self
    }

    /// Mark this outcome as requiring explicit user confirmation.
    #[must_use]
    pub fn needs_confirmation(mut self) -> Self {
        self.requires_confirmation = true;
        self
    }
}

/// Why a rule could not be evaluated.
///
/// These never represent rule *failures* — those are `RuleOutcome { passed:
/// false }`. An evaluation error means the document violated an assumption the
/// rule cannot recover from; the evaluator swallows it so one broken rule (or
/// one malformed element) never blocks reporting on the rest.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuleError {
    /// An element was missing a field the rule cannot work without.
    #[error("element '{id}' is missing required field '{field}'")]
    MissingField { id: ElementId, field: &'static str },

    /// A color string could not be interpreted.
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

pub(crate) type Check = Box<dyn Fn(&Document, &Context) -> Result<RuleOutcome, RuleError> + Send + Sync>;

/// A compliance rule: a stable name, a severity class, and a pure predicate
/// over a document snapshot plus per-call [`Context`].
///
/// Rules are stateless and side-effect-free. They must not depend on the
/// outcome of other rules (no chaining); the only thing declaration order
/// buys is deterministic report ordering.
pub struct Rule {
    pub name: &'static str,
    pub severity: Severity,
    pub(crate) check: Check,
}

impl Rule {
    /// Create a rule from a predicate function.
    pub fn new<F>(name: &'static str, severity: Severity, check: F) -> Self
    where
        F: Fn(&Document, &Context) -> Result<RuleOutcome, RuleError> + Send + Sync + 'static,
    {
        Rule { name, severity, check: Box::new(check) }
    }

    /// Evaluate this rule in isolation.
    pub fn evaluate(&self, document: &Document, context: &Context) -> Result<RuleOutcome, RuleError> {
        (self.check)(document, context)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("severity", &self.severity)
            .field("check", &"<function>")
            .finish()
    }
}
