//! Parameter tables and rule builders for the generic retailer profiles.
//!
//! Unlike the Tesco profile, these rules are thresholds on layout and color
//! rather than copy vocabularies, so the whole profile reduces to a
//! [`Profile`] struct of optional parameters; `get` turns present parameters
//! into rules, in declaration order.

use super::Retailer;
use crate::color::contrast_ratio;
use crate::document::{Document, Element, ElementKind};
use crate::geometry::{Rect, element_rect};
use crate::{Context, Rule, RuleError, RuleOutcome, Severity};

/// Thresholds for one retailer. `None` skips the corresponding rule.
struct Profile {
    /// Minimum canvas width/height in pixels.
    min_canvas: Option<(f32, f32)>,
    /// Minimum font size for copy, with its severity.
    min_font: Option<(f32, Severity)>,
    /// Allowed logo area as a share of the canvas, in percent.
    logo_share: Option<(f32, f32)>,
    /// Required clearance from every canvas edge, as a percent of the canvas.
    edge_margin_pct: Option<f32>,
    /// Minimum product-image area as a share of the canvas, in percent.
    min_product_share: Option<f32>,
    /// Minimum font size for offer/price copy (advisory).
    min_offer_font: Option<f32>,
    /// Logo must sit in the top-left or top-right corner.
    logo_corner: bool,
    /// Background must not be pure white (advisory).
    forbid_white_background: bool,
    /// Copy must meet a 4.5:1 contrast ratio when colors are known.
    min_contrast: bool,
}

fn profile(retailer: Retailer) -> Profile {
    match retailer {
        Retailer::Amazon => Profile {
            min_canvas: None,
            min_font: Some((16.0, Severity::Error)),
            logo_share: Some((5.0, 25.0)),
            edge_margin_pct: Some(5.0),
            min_product_share: None,
            min_offer_font: None,
            logo_corner: false,
            forbid_white_background: false,
            min_contrast: true,
        },
        Retailer::Flipkart => Profile {
            min_canvas: None,
            min_font: None,
            logo_share: Some((8.0, 20.0)),
            edge_margin_pct: Some(3.0),
            min_product_share: Some(25.0),
            min_offer_font: None,
            logo_corner: true,
            forbid_white_background: false,
            min_contrast: false,
        },
        Retailer::Dmart => Profile {
            min_canvas: None,
            min_font: None,
            logo_share: Some((10.0, 30.0)),
            edge_margin_pct: Some(4.0),
            min_product_share: None,
            min_offer_font: Some(20.0),
            logo_corner: false,
            forbid_white_background: true,
            min_contrast: false,
        },
        Retailer::General => Profile {
            min_canvas: Some((800.0, 400.0)),
            min_font: Some((12.0, Severity::Warning)),
            logo_share: None,
            edge_margin_pct: None,
            min_product_share: None,
            min_offer_font: None,
            logo_corner: false,
            forbid_white_background: false,
            min_contrast: false,
        },
    }
}

/// Build the rule list for one retailer.
pub fn get(retailer: Retailer) -> Vec<Rule> {
    let p = profile(retailer);
    let mut rules = Vec::new();

    if let Some((width, height)) = p.min_canvas {
        rules.push(rule_min_canvas(width, height));
    }
    if let Some((lo, hi)) = p.logo_share {
        rules.push(rule_logo_share(lo, hi));
    }
    if p.logo_corner {
        rules.push(rule_logo_corner());
    }
    if let Some(pct) = p.min_product_share {
        rules.push(rule_product_share(pct));
    }
    if let Some((min, severity)) = p.min_font {
        rules.push(rule_min_font(min, severity));
    }
    if let Some(pct) = p.edge_margin_pct {
        rules.push(rule_edge_margin(pct));
    }
    if let Some(min) = p.min_offer_font {
        rules.push(rule_offer_font(min));
    }
    if p.min_contrast {
        rules.push(rule_text_contrast());
    }
    if p.forbid_white_background {
        rules.push(rule_background_not_white());
    }

    rules
}

/// The brand logo of a creative: an image in the `logo` category.
fn find_logo(doc: &Document) -> Option<&Element> {
    doc.elements
        .iter()
        .find(|el| el.kind == ElementKind::Image && el.metadata.category.as_deref() == Some("logo"))
}

/// The hero product shot: an image in the `product` category.
fn find_product(doc: &Document) -> Option<&Element> {
    doc.elements.iter().find(|el| {
        el.kind == ElementKind::Image && el.metadata.category.as_deref() == Some("product")
    })
}

fn extent_of(el: &Element) -> Result<Rect, RuleError> {
    element_rect(el).ok_or_else(|| RuleError::MissingField { id: el.id.clone(), field: "width" })
}

fn area_share(rect: &Rect, doc: &Document) -> f32 {
    100.0 * (rect.width * rect.height) / (doc.dimensions.width * doc.dimensions.height)
}

fn rule_min_canvas(min_width: f32, min_height: f32) -> Rule {
    rule! {
        name: "minimum canvas size",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            let dims = doc.dimensions;
            if dims.width < min_width || dims.height < min_height {
                return Ok(RuleOutcome::fail(format!(
                    "canvas {}x{} is below the {}x{} minimum",
                    dims.width, dims.height, min_width, min_height
                )));
            }
            Ok(RuleOutcome::pass("canvas meets the minimum size"))
        }
    }
}

fn rule_logo_share(min_pct: f32, max_pct: f32) -> Rule {
    rule! {
        name: "logo share of canvas",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            let Some(logo) = find_logo(doc) else {
                return Ok(RuleOutcome::fail("no logo found in creative"));
            };
            let rect = extent_of(logo)?;

            let share = area_share(&rect, doc);
            if share < min_pct || share > max_pct {
                return Ok(RuleOutcome::fail(format!(
                    "logo is {share:.1}% of the creative area (should be {min_pct}-{max_pct}%)"
                ))
                .for_element(logo.id.clone()));
            }
            Ok(RuleOutcome::pass(format!("logo is {share:.1}% of the creative area")))
        }
    }
}

/// Logo must hug the top-left or top-right corner: inside the top quarter of
/// the canvas and within 10% of the left or right edge.
fn rule_logo_corner() -> Rule {
    rule! {
        name: "logo corner position",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            let Some(logo) = find_logo(doc) else {
                return Ok(RuleOutcome::fail("no logo found in creative"));
            };
            let rect = extent_of(logo)?;

            let in_top_band = rect.y <= doc.dimensions.height * 0.25;
            let hugs_left = rect.x <= doc.dimensions.width * 0.10;
            let hugs_right = rect.x + rect.width >= doc.dimensions.width * 0.90;

            if in_top_band && (hugs_left || hugs_right) {
                Ok(RuleOutcome::pass("logo sits in an approved corner"))
            } else {
                Ok(RuleOutcome::fail("logo must sit in the top-left or top-right corner")
                    .for_element(logo.id.clone()))
            }
        }
    }
}

/// The product must stay prominent: its image area as a share of the canvas.
fn rule_product_share(min_pct: f32) -> Rule {
    rule! {
        name: "product visibility",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            let Some(product) = find_product(doc) else {
                return Ok(RuleOutcome::fail("no product image found in creative"));
            };
            let rect = extent_of(product)?;

            let share = area_share(&rect, doc);
            if share < min_pct {
                return Ok(RuleOutcome::fail(format!(
                    "product is {share:.1}% of the creative area (should be at least {min_pct}%)"
                ))
                .for_element(product.id.clone()));
            }
            Ok(RuleOutcome::pass(format!("product is {share:.1}% of the creative area")))
        }
    }
}

fn rule_min_font(min: f32, severity: Severity) -> Rule {
    rule! {
        name: "minimum font size",
        severity: severity,
        check: |doc: &Document, _ctx: &Context| {
            for el in doc
                .elements
                .iter()
                .filter(|e| matches!(e.kind, ElementKind::Text | ElementKind::Button))
            {
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

fn rule_edge_margin(margin_pct: f32) -> Rule {
    rule! {
        name: "edge safe margin",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            let margin_x = doc.dimensions.width * margin_pct / 100.0;
            let margin_y = doc.dimensions.height * margin_pct / 100.0;

            for el in doc
                .elements
                .iter()
                .filter(|e| e.visible && e.kind != ElementKind::Background)
            {
                let Some(rect) = element_rect(el) else { continue };

                let edge = if rect.x < margin_x {
                    Some("left")
                } else if rect.y < margin_y {
                    Some("top")
                } else if rect.x + rect.width > doc.dimensions.width - margin_x {
                    Some("right")
                } else if rect.bottom() > doc.dimensions.height - margin_y {
                    Some("bottom")
                } else {
                    None
                };

                if let Some(edge) = edge {
                    return Ok(RuleOutcome::fail(format!(
                        "element '{}' is too close to the {edge} edge (keep a {margin_pct}% margin)",
                        el.id
                    ))
                    .for_element(el.id.clone()));
                }
            }
            Ok(RuleOutcome::pass("all elements clear of the edge margins"))
        }
    }
}

/// Offer and price copy must stay clearly readable. Advisory: copy outside
/// the `offer`/`price` categories is not inspected.
fn rule_offer_font(min: f32) -> Rule {
    rule! {
        name: "offer text legibility",
        severity: Severity::Warning,
        check: |doc: &Document, _ctx: &Context| {
            for el in doc.elements.iter().filter(|e| {
                matches!(e.kind, ElementKind::Text | ElementKind::Button)
                    && matches!(e.metadata.category.as_deref(), Some("offer") | Some("price"))
            }) {
                let Some(size) = el.font_size else { continue };
                if size < min {
                    return Ok(RuleOutcome::fail(format!(
                        "offer text at {size}px may be hard to read (aim for {min}px or more)"
                    ))
                    .for_element(el.id.clone()));
                }
            }
            Ok(RuleOutcome::pass("offer copy is clearly readable"))
        }
    }
}

/// Contrast is only checkable when the editor supplies both colors; copy with
/// unknown colors is left for manual review rather than guessed at.
fn rule_text_contrast() -> Rule {
    rule! {
        name: "text contrast",
        severity: Severity::Error,
        check: |doc: &Document, _ctx: &Context| {
            let mut checked = 0usize;
            for el in doc
                .elements
                .iter()
                .filter(|e| matches!(e.kind, ElementKind::Text | ElementKind::Button))
            {
                let (Some(fg), Some(bg)) = (el.color.as_deref(), el.background_color.as_deref())
                else {
                    continue;
                };

                let ratio = contrast_ratio(fg, bg)?;
                checked += 1;
                if ratio < 4.5 {
                    return Ok(RuleOutcome::fail(format!(
                        "contrast ratio {ratio:.2}:1 is below the 4.5:1 minimum"
                    ))
                    .for_element(el.id.clone()));
                }
            }

            if checked == 0 {
                Ok(RuleOutcome::pass("contrast requires manual verification when colors are unknown"))
            } else {
                Ok(RuleOutcome::pass("all copy meets the 4.5:1 contrast minimum"))
            }
        }
    }
}

fn rule_background_not_white() -> Rule {
    rule! {
        name: "background not pure white",
        severity: Severity::Warning,
        check: |doc: &Document, _ctx: &Context| {
            let white = |c: &str| {
                matches!(
                    c.trim().trim_start_matches('#').to_ascii_lowercase().as_str(),
                    "white" | "fff" | "ffffff"
                )
            };

            let offending = doc.elements.iter().find(|el| {
                el.kind == ElementKind::Background
                    && el
                        .background_color
                        .as_deref()
                        .or(el.color.as_deref())
                        .is_some_and(white)
            });

            match offending {
                Some(bg) => Ok(RuleOutcome::fail("background should not be pure white")
                    .for_element(bg.id.clone())),
                None => Ok(RuleOutcome::pass("background is not pure white")),
            }
        }
    }
}
