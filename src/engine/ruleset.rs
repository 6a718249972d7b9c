//! Rule registry: profile constructors and deterministic report ordering.
//!
//! A [`Ruleset`] is plain data — an ordered list of [`Rule`]s. The evaluator
//! walks it in *report order*: every error-severity rule first, in declaration
//! order, then every warning rule, in declaration order. That ordering exists
//! purely so reports are deterministic; rules must not depend on it.

use crate::rules::retailer::{self, Retailer};
use crate::rules::tesco::{self, TescoConfig};
use crate::{Rule, Severity};

/// An ordered, immutable-after-construction collection of compliance rules.
///
/// Hosts can extend a profile with their own rules via [`Ruleset::push`]
/// before handing it to [`crate::evaluate`]; nothing in the evaluator needs
/// to change.
#[derive(Debug, Default)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

impl Ruleset {
    /// An empty ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The Tesco "Appendix B" profile with its default configuration.
    #[must_use]
    pub fn tesco() -> Self {
        Self::tesco_with(TescoConfig::default())
    }

    /// The Tesco profile with a custom configuration (e.g. an extended tag
    /// allow-list).
    #[must_use]
    pub fn tesco_with(config: TescoConfig) -> Self {
        Self { rules: tesco::rules::with_config(config) }
    }

    /// The generic profile for the given retailer.
    #[must_use]
    pub fn retailer(retailer: Retailer) -> Self {
        Self { rules: retailer::rules::get(retailer) }
    }

    /// Register an additional rule. Appended after existing rules of the same
    /// severity in report order.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Names of all registered rules, in declaration order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in report order: errors first, then warnings, each group in
    /// declaration order.
    pub(crate) fn in_report_order(&self) -> impl Iterator<Item = &Rule> {
        let errors = self.rules.iter().filter(|r| r.severity == Severity::Error);
        let warnings = self.rules.iter().filter(|r| r.severity == Severity::Warning);
        errors.chain(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, Document, RuleOutcome};

    fn noop(name: &'static str, severity: Severity) -> Rule {
        Rule::new(name, severity, |_doc: &Document, _ctx: &Context| Ok(RuleOutcome::pass("ok")))
    }

    #[test]
    fn report_order_puts_errors_before_warnings() {
        let mut set = Ruleset::new();
        set.push(noop("warn-a", Severity::Warning));
        set.push(noop("err-a", Severity::Error));
        set.push(noop("warn-b", Severity::Warning));
        set.push(noop("err-b", Severity::Error));

        let ordered: Vec<&str> = set.in_report_order().map(|r| r.name).collect();
        assert_eq!(ordered, vec!["err-a", "err-b", "warn-a", "warn-b"]);
    }

    #[test]
    fn tesco_profile_declares_hard_fail_rules_before_warnings() {
        let set = Ruleset::tesco();
        assert!(set.len() >= 10);
        assert!(set.rule_names().contains(&"alcohol requires drinkaware"));
    }
}
