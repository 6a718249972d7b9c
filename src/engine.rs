//! Rule evaluation engine.
//!
//! This module is the operational core of the crate. Evaluating a document is
//! a short, synchronous pipeline:
//!
//! ```text
//! rules (profile)  ──┐
//!                    │  Ruleset::tesco / ::retailer   (ruleset.rs)
//!                    └──────────────┬────────────────
//!                                   │
//! document + context ── evaluator::run (evaluator.rs)
//!                         - error-severity rules first, declaration order
//!                         - then warning rules, declaration order
//!                         - per-rule isolation: Err => warn + skip
//!                                   │
//!                                   v
//!                                 Report
//! ```
//!
//! ## Responsibilities by module
//!
//! - `ruleset.rs`: the rule registry — profile constructors, severity
//!   partitioning, and the fixed report order. Rule tables are data the host
//!   can inspect and extend without touching the evaluator.
//! - `evaluator.rs`: the evaluation loop itself, including the per-rule error
//!   isolation boundary (one broken rule must never block the rest of the
//!   report).
//!
//! ## Invariants
//!
//! - Evaluation is pure and idempotent: the same document, context, and
//!   ruleset produce an identical [`crate::Report`] every time.
//! - Rules never see each other's results and never mutate the document.
//! - The engine only reports; blocking publish on a hard failure is the
//!   caller's decision.

#[path = "engine/evaluator.rs"]
pub(crate) mod evaluator;
#[path = "engine/ruleset.rs"]
mod ruleset;

pub use ruleset::Ruleset;
