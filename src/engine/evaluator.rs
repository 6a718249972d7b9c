//! The evaluation loop.
//!
//! One call runs every registered rule to completion against a read-only
//! document snapshot. The loop owns the crate's single robustness boundary:
//! a rule returning [`RuleError`] is logged via `tracing` and *omitted* from
//! the report instead of aborting the pass. The UI always gets back whatever
//! results could be produced; an empty or partial report means "nothing could
//! be verified", never "everything passed".

use crate::engine::Ruleset;
use crate::{Context, Document, Report, RuleResult};

pub(crate) fn run(ruleset: &Ruleset, document: &Document, context: &Context) -> Report {
    let mut results = Vec::with_capacity(ruleset.len());

    for rule in ruleset.in_report_order() {
        match rule.evaluate(document, context) {
            Ok(outcome) => results.push(RuleResult::new(rule.name, rule.severity, outcome)),
            Err(err) => {
                tracing::warn!(rule = rule.name, error = %err, "rule could not be evaluated; skipped");
            }
        }
    }

    Report::new(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Dimensions, ElementId};
    use crate::{Rule, RuleError, RuleOutcome, Severity};

    fn doc() -> Document {
        Document::new(Dimensions::new(1200.0, 628.0))
    }

    #[test]
    fn a_broken_rule_does_not_block_the_rest() {
        let mut set = Ruleset::new();
        set.push(Rule::new("healthy", Severity::Error, |_d: &Document, _c: &Context| {
            Ok(RuleOutcome::pass("fine"))
        }));
        set.push(Rule::new("broken", Severity::Error, |_d: &Document, _c: &Context| {
            Err(RuleError::MissingField { id: ElementId::new("e1"), field: "text" })
        }));
        set.push(Rule::new("also healthy", Severity::Warning, |_d: &Document, _c: &Context| {
            Ok(RuleOutcome::pass("fine too"))
        }));

        let report = run(&set, &doc(), &Context::default());
        let names: Vec<&str> = report.results().iter().map(|r| r.rule).collect();
        assert_eq!(names, vec!["healthy", "also healthy"]);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let set = Ruleset::tesco();
        let document = doc();
        let ctx = Context::default();

        let a = run(&set, &document, &ctx);
        let b = run(&set, &document, &ctx);

        assert_eq!(a.results().len(), b.results().len());
        for (ra, rb) in a.results().iter().zip(b.results()) {
            assert_eq!(ra.rule, rb.rule);
            assert_eq!(ra.passed, rb.passed);
            assert_eq!(ra.message, rb.message);
        }
        assert_eq!(a.score(), b.score());
    }
}
