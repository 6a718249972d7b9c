//! The Tesco rule table, in declaration order.
//!
//! Hard-fail rules come first, the advisory rule last; the engine preserves
//! this order in every report. Each rule is a standalone predicate over the
//! document snapshot — no rule reads another rule's outcome.

use super::TescoConfig;
use super::helpers::{
    CHARITY_COPY, CLAIM_COPY, COMPETITION_TERMS, GUARANTEE_COPY, LEGAL_COPY, PRICE_CALLOUTS,
    SUSTAINABILITY_TERMS, clubcard_date, first_pattern_match, first_term_match, is_black_or_white,
};
use super::predicates::{
    carries_copy, is_alcohol, is_drinkaware, is_tag, is_value_tile, safe_zone_checked,
    spatially_checked,
};
use crate::document::Document;
use crate::geometry::{element_rect, is_portrait_9_16};
use crate::{Context, Rule, RuleError, RuleOutcome, Severity, Surface};

/// The Tesco profile with its default configuration.
pub fn get() -> Vec<Rule> {
    with_config(TescoConfig::default())
}

/// The Tesco profile with a custom configuration.
pub fn with_config(config: TescoConfig) -> Vec<Rule> {
    vec![
        rule_drinkaware(config.clone()),
        rule_legal_copy(),
        rule_competition_copy(),
        rule_sustainability_copy(),
        rule_charity_copy(),
        rule_guarantee_copy(),
        rule_claim_copy(),
        rule_price_callouts(),
        rule_approved_tags(config.clone()),
        rule_value_tile_height(),
        rule_min_font_size(),
        rule_safe_zone(config),
        rule_fixture_overlap(),
        rule_people_confirmation(),
    ]
}

/// Alcohol-category creatives must carry a drinkaware logo at least the
/// configured height, in black or white. Sub-conditions short-circuit:
/// presence, then height, then color.
fn rule_drinkaware(cfg: TescoConfig) -> Rule {
    rule! {
        name: "alcohol requires drinkaware",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            if !doc.elements.iter().any(is_alcohol) {
                return Ok(RuleOutcome::pass("no alcohol-category elements"));
            }

            let Some(logo) = doc.elements.iter().find(|el| is_drinkaware(el)) else {
                return Ok(RuleOutcome::fail("alcohol creatives require a drinkaware logo"));
            };

            if logo.height.unwrap_or(0.0) < cfg.drinkaware_min_height {
                return Ok(RuleOutcome::fail(format!(
                    "drinkaware logo must be at least {}px tall",
                    cfg.drinkaware_min_height
                ))
                .for_element(logo.id.clone()));
            }

            match logo.color.as_deref() {
                Some(color) if is_black_or_white(color) => {
                    Ok(RuleOutcome::pass("drinkaware logo present and conformant"))
                }
                _ => Ok(RuleOutcome::fail("drinkaware logo must be black or white")
                    .for_element(logo.id.clone())),
            }
        }
    }
}

fn rule_legal_copy() -> Rule {
    rule! {
        name: "restricted legal copy",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            match first_pattern_match(doc, &LEGAL_COPY) {
                Some((el, matched)) => Ok(RuleOutcome::fail(format!(
                    "restricted legal copy {matched:?} is not allowed"
                ))
                .for_element(el.id.clone())),
                None => Ok(RuleOutcome::pass("no restricted legal copy")),
            }
        }
    }
}

fn rule_competition_copy() -> Rule {
    rule! {
        name: "restricted competition copy",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            match first_term_match(doc, COMPETITION_TERMS) {
                Some((el, term)) => Ok(RuleOutcome::fail(format!(
                    "competition copy {term:?} is not allowed"
                ))
                .for_element(el.id.clone())),
                None => Ok(RuleOutcome::pass("no competition copy")),
            }
        }
    }
}

fn rule_sustainability_copy() -> Rule {
    rule! {
        name: "restricted sustainability copy",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            match first_term_match(doc, SUSTAINABILITY_TERMS) {
                Some((el, term)) => Ok(RuleOutcome::fail(format!(
                    "sustainability claim {term:?} is not allowed"
                ))
                .for_element(el.id.clone())),
                None => Ok(RuleOutcome::pass("no sustainability claims")),
            }
        }
    }
}

fn rule_charity_copy() -> Rule {
    rule! {
        name: "restricted charity copy",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            match first_pattern_match(doc, &CHARITY_COPY) {
                Some((el, matched)) => Ok(RuleOutcome::fail(format!(
                    "charity copy {matched:?} is not allowed"
                ))
                .for_element(el.id.clone())),
                None => Ok(RuleOutcome::pass("no charity copy")),
            }
        }
    }
}

fn rule_guarantee_copy() -> Rule {
    rule! {
        name: "restricted guarantee copy",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            match first_pattern_match(doc, &GUARANTEE_COPY) {
                Some((el, matched)) => Ok(RuleOutcome::fail(format!(
                    "guarantee copy {matched:?} is not allowed"
                ))
                .for_element(el.id.clone())),
                None => Ok(RuleOutcome::pass("no guarantee copy")),
            }
        }
    }
}

fn rule_claim_copy() -> Rule {
    rule! {
        name: "restricted claim copy",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            match first_pattern_match(doc, &CLAIM_COPY) {
                Some((el, matched)) => Ok(RuleOutcome::fail(format!(
                    "unsubstantiated claim {matched:?} is not allowed"
                ))
                .for_element(el.id.clone())),
                None => Ok(RuleOutcome::pass("no unsubstantiated claims")),
            }
        }
    }
}

/// Price-like copy may only live inside an approved compliance fixture.
fn rule_price_callouts() -> Rule {
    rule! {
        name: "price copy outside value tile",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            for el in doc.elements.iter().filter(|e| carries_copy(e) && !e.is_fixture()) {
                let Some(text) = el.text.as_deref() else { continue };
                for re in PRICE_CALLOUTS.iter() {
                    if let Some(m) = re.find(text) {
                        return Ok(RuleOutcome::fail(format!(
                            "price callout {:?} is only allowed inside an approved value tile",
                            m.as_str()
                        ))
                        .for_element(el.id.clone()));
                    }
                }
            }
            Ok(RuleOutcome::pass("no price copy outside value tiles"))
        }
    }
}

/// Tag fixtures must use allow-listed copy exactly, except Clubcard tags,
/// which must instead carry a DD/MM end date.
fn rule_approved_tags(cfg: TescoConfig) -> Rule {
    rule! {
        name: "unapproved tag text",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            for el in doc.elements.iter().filter(|e| is_tag(e)) {
                let text = el.text.as_deref().ok_or_else(|| RuleError::MissingField {
                    id: el.id.clone(),
                    field: "text",
                })?;

                if text.contains("Clubcard") {
                    if !clubcard_date().is_match(text) {
                        return Ok(RuleOutcome::fail(
                            "Clubcard tags must carry a DD/MM end date",
                        )
                        .for_element(el.id.clone())
                        .with_suggestions(cfg.approved_tags.iter().cloned()));
                    }
                } else if !cfg.approved_tags.iter().any(|t| t == text) {
                    return Ok(RuleOutcome::fail(format!("{text:?} is not an approved tag"))
                        .for_element(el.id.clone())
                        .with_suggestions(cfg.approved_tags.iter().cloned()));
                }
            }
            Ok(RuleOutcome::pass("all tags use approved copy"))
        }
    }
}

/// Value tiles must stay legible; the minimum height depends on the tile
/// style (`clubcard` tiles carry the most copy).
fn rule_value_tile_height() -> Rule {
    rule! {
        name: "value tile below minimum height",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            for el in doc.elements.iter().filter(|e| is_value_tile(e)) {
                let subtype =
                    el.metadata.compliance.as_ref().and_then(|c| c.subtype.as_deref());
                let min = match subtype {
                    Some("clubcard") => 60.0,
                    Some("white") => 45.0,
                    _ => 40.0,
                };
                if el.height.unwrap_or(0.0) < min {
                    return Ok(RuleOutcome::fail(format!(
                        "value tile must be at least {min}px tall"
                    ))
                    .for_element(el.id.clone()));
                }
            }
            Ok(RuleOutcome::pass("all value tiles meet their minimum height"))
        }
    }
}

fn rule_min_font_size() -> Rule {
    rule! {
        name: "font size below minimum",
        severity: Severity::Error,
        check: |doc: &Document, ctx: &Context| {
            let min = ctx
                .surface
                .map_or_else(Surface::strictest_min_font_size, Surface::min_font_size);

            for el in doc.elements.iter().filter(|e| carries_copy(e)) {
                let Some(size) = el.font_size else { continue };
                if size < min {
                    return Ok(RuleOutcome::fail(format!(
                        "font size {size}px is below the {min}px minimum"
                    ))
                    .for_element(el.id.clone()));
                }
            }
            Ok(RuleOutcome::pass("all copy meets the minimum font size"))
        }
    }
}

/// On 9:16 canvases, copy and fixtures must stay clear of the platform
/// chrome bands at the top and bottom. A no-op for every other format.
fn rule_safe_zone(cfg: TescoConfig) -> Rule {
    rule! {
        name: "9:16 safe zone",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            if !is_portrait_9_16(&doc.dimensions) {
                return Ok(RuleOutcome::pass("safe zone applies to 9:16 creatives only"));
            }

            // Top band first, then bottom band: independent sub-conditions.
            if let Some(el) =
                doc.elements.iter().filter(|e| safe_zone_checked(e)).find(|el| el.y < cfg.safe_zone_top)
            {
                return Ok(RuleOutcome::fail(format!(
                    "content must start at least {}px from the top edge",
                    cfg.safe_zone_top
                ))
                .for_element(el.id.clone()));
            }

            let bottom_limit = doc.dimensions.height - cfg.safe_zone_bottom;
            if let Some(el) = doc
                .elements
                .iter()
                .filter(|e| safe_zone_checked(e))
                .find(|el| el.y + el.height.unwrap_or(0.0) > bottom_limit)
            {
                return Ok(RuleOutcome::fail(format!(
                    "content must end at least {}px from the bottom edge",
                    cfg.safe_zone_bottom
                ))
                .for_element(el.id.clone()));
            }

            Ok(RuleOutcome::pass("all content clear of the 9:16 safe zones"))
        }
    }
}

/// Nothing may overlap a compliance fixture's bounding box. Attribution goes
/// to the overlapping non-fixture element regardless of document order.
fn rule_fixture_overlap() -> Rule {
    rule! {
        name: "element overlaps fixture",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            for fixture in doc.elements.iter().filter(|e| e.is_fixture() && spatially_checked(e)) {
                let Some(frect) = element_rect(fixture) else { continue };

                for other in doc
                    .elements
                    .iter()
                    .filter(|e| spatially_checked(e) && !e.is_fixture() && e.id != fixture.id)
                {
                    let Some(orect) = element_rect(other) else { continue };
                    if frect.intersects(&orect) {
                        return Ok(RuleOutcome::fail(format!(
                            "element '{}' overlaps the '{}' fixture",
                            other.id, fixture.id
                        ))
                        .for_element(other.id.clone()));
                    }
                }
            }
            Ok(RuleOutcome::pass("no elements overlap compliance fixtures"))
        }
    }
}

/// The engine cannot inspect pixels, so photography of people is an advisory
/// that always passes and always demands explicit user confirmation.
fn rule_people_confirmation() -> Rule {
    rule! {
        name: "people photography confirmation",
        severity: Severity::Warning,
        check: |_doc: &Document, _ctx: &Context| {
            Ok(RuleOutcome::pass(
                "if the creative shows people, confirm they are integral to the campaign",
            )
            .needs_confirmation())
        }
    }
}
