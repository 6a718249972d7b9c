use crate::document::{Dimensions, Document, Element, ElementId, ElementKind, FixtureKind};
use crate::{Context, Report, Ruleset, Surface, TescoConfig, evaluate, validate, validate_with};

fn landscape() -> Document {
    Document::new(Dimensions::new(1200.0, 628.0))
        .with(Element::new("bg", ElementKind::Background))
}

fn portrait() -> Document {
    Document::new(Dimensions::new(1080.0, 1920.0))
        .with(Element::new("bg", ElementKind::Background))
}

fn result<'r>(report: &'r Report, rule: &str) -> &'r crate::RuleResult {
    report
        .results()
        .iter()
        .find(|r| r.rule == rule)
        .unwrap_or_else(|| panic!("rule '{rule}' missing from report"))
}

// --- Copy rules --------------------------------------------------------------

#[test]
fn price_copy_outside_value_tile_is_attributed() {
    let doc = landscape().with(
        Element::new("headline", ElementKind::Text)
            .with_text("Save 20% now!")
            .with_frame(100.0, 300.0, 400.0, 60.0)
            .with_font_size(32.0),
    );

    let report = validate(&doc);
    assert!(!report.is_compliant());

    let r = result(&report, "price copy outside value tile");
    assert!(!r.passed);
    assert_eq!(r.element, Some(ElementId::new("headline")));
    assert!(r.message.contains("Save"), "message echoes the matched phrase: {}", r.message);
}

#[test]
fn value_tiles_may_carry_price_copy() {
    let doc = landscape().with(
        Element::new("tile", ElementKind::Text)
            .with_text("£5 Clubcard Price")
            .with_frame(60.0, 300.0, 180.0, 80.0)
            .with_font_size(28.0)
            .with_fixture(FixtureKind::ValueTile),
    );

    let report = validate(&doc);
    assert!(result(&report, "price copy outside value tile").passed);
}

#[test]
fn value_tile_minimum_height_depends_on_subtype() {
    // (subtype, height, should pass): clubcard 60 / white 45 / default 40
    let cases: Vec<(Option<&str>, f32, bool)> = vec![
        (Some("clubcard"), 60.0, true),
        (Some("clubcard"), 50.0, false),
        (Some("white"), 45.0, true),
        (Some("white"), 44.0, false),
        (Some("new"), 40.0, true),
        (None, 40.0, true),
        (None, 39.0, false),
    ];

    for (subtype, height, should_pass) in cases {
        let mut tile = Element::new("tile", ElementKind::Shape)
            .with_frame(60.0, 40.0, 180.0, height)
            .with_fixture(FixtureKind::ValueTile);
        if let Some(subtype) = subtype {
            tile = tile.with_subtype(subtype);
        }

        let doc = landscape().with(tile);
        let report = validate(&doc);
        let r = result(&report, "value tile below minimum height");
        assert_eq!(r.passed, should_pass, "subtype {subtype:?}, height {height}");
        if !should_pass {
            assert_eq!(r.element, Some(ElementId::new("tile")));
        }
    }
}

#[test]
fn restricted_copy_tables_catch_first_violation_in_document_order() {
    // (input text, failing rule, echoed fragment)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("T&Cs apply to this promotion", "restricted legal copy", "T&C"),
        ("See terms and conditions in store", "restricted legal copy", "terms and conditions"),
        ("Best brand ever*", "restricted legal copy", "*"),
        ("Win a prize this summer", "restricted competition copy", "win "),
        ("Enter our giveaway", "restricted competition copy", "giveaway"),
        ("Eco-friendly packaging", "restricted sustainability copy", "eco-friendly"),
        ("Good for the climate", "restricted sustainability copy", "climate"),
        ("All proceeds go to charity", "restricted charity copy", "charity"),
        ("Money back guarantee", "restricted guarantee copy", "money back"),
        ("Clinically proven formula", "restricted claim copy", "proven"),
        ("Voted #1 by shoppers", "restricted claim copy", "#1"),
    ];

    for (text, rule, fragment) in cases {
        let doc = landscape().with(
            Element::new("copy", ElementKind::Text).with_text(text).with_font_size(32.0),
        );
        let report = validate(&doc);
        let r = result(&report, rule);
        assert!(!r.passed, "{text:?} should fail {rule}");
        assert_eq!(r.element, Some(ElementId::new("copy")));
        assert!(
            r.message.to_lowercase().contains(&fragment.to_lowercase()),
            "{text:?}: message {:?} should echo {fragment:?}",
            r.message
        );
    }
}

#[test]
fn clean_copy_passes_every_copy_rule() {
    let doc = landscape().with(
        Element::new("headline", ElementKind::Text)
            .with_text("Fresh bakery bread every morning")
            .with_font_size(32.0),
    );

    let report = validate(&doc);
    for rule in [
        "restricted legal copy",
        "restricted competition copy",
        "restricted sustainability copy",
        "restricted charity copy",
        "restricted guarantee copy",
        "restricted claim copy",
        "price copy outside value tile",
    ] {
        assert!(result(&report, rule).passed, "{rule} should pass");
    }
}

#[test]
fn charity_and_guarantee_copy_block_compliance() {
    for (text, rule) in [
        ("All proceeds go to charity", "restricted charity copy"),
        ("Money back guarantee", "restricted guarantee copy"),
    ] {
        let doc = landscape().with(
            Element::new("copy", ElementKind::Text).with_text(text).with_font_size(32.0),
        );
        let report = validate(&doc);
        assert!(!report.is_compliant(), "{text:?} must block publishing");
        assert!(!result(&report, rule).passed);
    }
}

#[test]
fn hidden_elements_still_face_copy_rules() {
    let doc = landscape().with(
        Element::new("ghost", ElementKind::Text)
            .with_text("Win a prize")
            .with_font_size(32.0)
            .hidden(),
    );

    let report = validate(&doc);
    assert!(!result(&report, "restricted competition copy").passed);
}

// --- Drinkaware --------------------------------------------------------------

#[test]
fn drinkaware_sub_conditions_short_circuit_in_order() {
    let beer = Element::new("beer", ElementKind::Image)
        .with_frame(200.0, 300.0, 300.0, 200.0)
        .with_category("alcohol");

    // Presence first.
    let doc = landscape().with(beer.clone());
    let r = validate(&doc);
    let missing = result(&r, "alcohol requires drinkaware");
    assert!(!missing.passed);
    assert!(missing.message.contains("require"), "{}", missing.message);

    // Then minimum height.
    let short_logo = Element::new("da", ElementKind::Image)
        .with_frame(900.0, 560.0, 120.0, 10.0)
        .with_color("#000000")
        .with_fixture(FixtureKind::Drinkaware);
    let doc = landscape().with(beer.clone()).with(short_logo);
    let r = validate(&doc);
    let too_short = result(&r, "alcohol requires drinkaware");
    assert!(!too_short.passed);
    assert!(too_short.message.contains("20"), "{}", too_short.message);
    assert_eq!(too_short.element, Some(ElementId::new("da")));

    // Then color.
    let red_logo = Element::new("da", ElementKind::Image)
        .with_frame(900.0, 560.0, 120.0, 20.0)
        .with_color("#EE1C2E")
        .with_fixture(FixtureKind::Drinkaware);
    let doc = landscape().with(beer.clone()).with(red_logo);
    let r = validate(&doc);
    let wrong_color = result(&r, "alcohol requires drinkaware");
    assert!(!wrong_color.passed);
    assert!(wrong_color.message.contains("black or white"), "{}", wrong_color.message);

    // Conformant logo passes; hex case and short form both count.
    for color in ["#000000", "#FFF", "black", "WHITE", "#ffffff"] {
        let logo = Element::new("da", ElementKind::Image)
            .with_frame(900.0, 560.0, 120.0, 20.0)
            .with_color(color)
            .with_fixture(FixtureKind::Drinkaware);
        let doc = landscape().with(beer.clone()).with(logo);
        let r = validate(&doc);
        assert!(result(&r, "alcohol requires drinkaware").passed, "color {color:?}");
    }
}

#[test]
fn drinkaware_not_demanded_without_alcohol() {
    let report = validate(&landscape());
    assert!(result(&report, "alcohol requires drinkaware").passed);
}

// --- Tags --------------------------------------------------------------------

#[test]
fn tag_allow_list_is_byte_exact() {
    // (tag text, should pass)
    let cases: Vec<(&str, bool)> = vec![
        ("Only at Tesco", true),
        ("Available at Tesco", true),
        ("Selected stores. While stocks last", true),
        ("Only at Tesco ", false), // trailing space: no trimming
        ("only at tesco", false),  // no case folding
        ("Exclusive to Tesco", false),
    ];

    for (text, should_pass) in cases {
        let doc = landscape().with(
            Element::new("tag", ElementKind::Text)
                .with_text(text)
                .with_font_size(28.0)
                .with_fixture(FixtureKind::Tag),
        );
        let report = validate(&doc);
        let r = result(&report, "unapproved tag text");
        assert_eq!(r.passed, should_pass, "tag {text:?}");
        if !should_pass {
            assert_eq!(r.element, Some(ElementId::new("tag")));
            assert!(
                r.suggestion.iter().any(|s| s == "Only at Tesco"),
                "failure carries the allow-list as a suggestion"
            );
        }
    }
}

#[test]
fn clubcard_tags_need_a_numeric_date_instead() {
    let with_date = "Available in selected stores. Clubcard/app required. Ends 31/12";
    let without_date = "Available in selected stores. Clubcard/app required.";

    let doc = landscape().with(
        Element::new("tag", ElementKind::Text)
            .with_text(with_date)
            .with_font_size(28.0)
            .with_fixture(FixtureKind::Tag),
    );
    assert!(result(&validate(&doc), "unapproved tag text").passed);

    let doc = landscape().with(
        Element::new("tag", ElementKind::Text)
            .with_text(without_date)
            .with_font_size(28.0)
            .with_fixture(FixtureKind::Tag),
    );
    let report = validate(&doc);
    let r = result(&report, "unapproved tag text");
    assert!(!r.passed);
    assert!(r.message.contains("DD/MM"), "{}", r.message);
}

#[test]
fn extended_allow_list_via_config() {
    let mut config = TescoConfig::default();
    config.approved_tags.push("Fresh from Tesco".to_string());
    let ruleset = Ruleset::tesco_with(config);

    let doc = landscape().with(
        Element::new("tag", ElementKind::Text)
            .with_text("Fresh from Tesco")
            .with_font_size(28.0)
            .with_fixture(FixtureKind::Tag),
    );
    let report = evaluate(&ruleset, &doc, &Context::default());
    assert!(result(&report, "unapproved tag text").passed);
}

// --- Font size ---------------------------------------------------------------

#[test]
fn font_minimum_depends_on_surface() {
    let doc = landscape().with(
        Element::new("copy", ElementKind::Text).with_text("Fresh every day").with_font_size(14.0),
    );

    // 14px passes the double-density checkout tile…
    let ctx = Context { surface: Some(Surface::CheckoutDoubleDensity) };
    assert!(result(&validate_with(&doc, &ctx), "font size below minimum").passed);

    // …fails brand placements…
    let ctx = Context { surface: Some(Surface::Brand) };
    let r = validate_with(&doc, &ctx);
    let brand = result(&r, "font size below minimum");
    assert!(!brand.passed);
    assert!(brand.message.contains("16"), "{}", brand.message);

    // …and an unspecified surface applies the strictest minimum.
    let r = validate(&doc);
    let strict = result(&r, "font size below minimum");
    assert!(!strict.passed);
    assert!(strict.message.contains("24"), "{}", strict.message);
}

#[test]
fn elements_without_font_size_are_not_checked() {
    let doc = landscape()
        .with(Element::new("copy", ElementKind::Text).with_text("Fresh every day"));
    assert!(result(&validate(&doc), "font size below minimum").passed);
}

// --- 9:16 safe zone ----------------------------------------------------------

#[test]
fn safe_zone_never_fires_off_format() {
    // Landscape canvas, text hard against the top edge: not a violation.
    let doc = landscape().with(
        Element::new("copy", ElementKind::Text)
            .with_text("Fresh every day")
            .with_frame(0.0, 0.0, 300.0, 50.0)
            .with_font_size(32.0),
    );
    let report = validate(&doc);
    let r = result(&report, "9:16 safe zone");
    assert!(r.passed);
    assert!(r.message.contains("9:16"));
}

#[test]
fn safe_zone_top_band_is_checked_before_bottom() {
    let doc = portrait()
        .with(
            Element::new("top", ElementKind::Text)
                .with_text("Too high")
                .with_frame(100.0, 50.0, 300.0, 60.0)
                .with_font_size(32.0),
        )
        .with(
            Element::new("low", ElementKind::Text)
                .with_text("Too low")
                .with_frame(100.0, 1700.0, 300.0, 60.0)
                .with_font_size(32.0),
        );

    let report = validate(&doc);
    let r = result(&report, "9:16 safe zone");
    assert!(!r.passed);
    assert_eq!(r.element, Some(ElementId::new("top")));
    assert!(r.message.contains("top"), "{}", r.message);
}

#[test]
fn safe_zone_bottom_band() {
    let doc = portrait().with(
        Element::new("low", ElementKind::Text)
            .with_text("Too low")
            .with_frame(100.0, 1600.0, 300.0, 200.0)
            .with_font_size(32.0),
    );

    let report = validate(&doc);
    let r = result(&report, "9:16 safe zone");
    assert!(!r.passed);
    assert_eq!(r.element, Some(ElementId::new("low")));
    assert!(r.message.contains("bottom"), "{}", r.message);
}

#[test]
fn hidden_elements_are_exempt_from_the_safe_zone() {
    let doc = portrait().with(
        Element::new("ghost", ElementKind::Text)
            .with_text("Fresh every day")
            .with_frame(100.0, 0.0, 300.0, 60.0)
            .with_font_size(32.0)
            .hidden(),
    );
    assert!(result(&validate(&doc), "9:16 safe zone").passed);
}

// --- Fixture overlap ---------------------------------------------------------

#[test]
fn fixture_overlap_fails_regardless_of_document_order() {
    let tile = Element::new("tile", ElementKind::Shape)
        .with_frame(100.0, 100.0, 200.0, 100.0)
        .with_fixture(FixtureKind::ValueTile);
    let packshot =
        Element::new("packshot", ElementKind::Image).with_frame(150.0, 150.0, 300.0, 200.0);

    for doc in [
        landscape().with(tile.clone()).with(packshot.clone()),
        landscape().with(packshot.clone()).with(tile.clone()),
    ] {
        let report = validate(&doc);
        let r = result(&report, "element overlaps fixture");
        assert!(!r.passed);
        assert_eq!(
            r.element,
            Some(ElementId::new("packshot")),
            "attribution goes to the non-fixture element"
        );
    }
}

#[test]
fn disjoint_and_hidden_elements_do_not_overlap_fixtures() {
    let tile = Element::new("tile", ElementKind::Shape)
        .with_frame(100.0, 100.0, 200.0, 100.0)
        .with_fixture(FixtureKind::ValueTile);

    let clear = Element::new("packshot", ElementKind::Image).with_frame(400.0, 300.0, 300.0, 200.0);
    let doc = landscape().with(tile.clone()).with(clear);
    assert!(result(&validate(&doc), "element overlaps fixture").passed);

    let ghost = Element::new("packshot", ElementKind::Image)
        .with_frame(150.0, 150.0, 300.0, 200.0)
        .hidden();
    let doc = landscape().with(tile).with(ghost);
    assert!(result(&validate(&doc), "element overlaps fixture").passed);
}

// --- Isolation ---------------------------------------------------------------

#[test]
fn a_malformed_element_only_silences_the_rule_that_reads_it() {
    // A tag fixture with no text at all: the tag rule cannot be evaluated.
    let doc = landscape()
        .with(Element::new("broken-tag", ElementKind::Text).with_fixture(FixtureKind::Tag))
        .with(
            Element::new("headline", ElementKind::Text)
                .with_text("Save £5 today")
                .with_font_size(32.0),
        );

    let report = validate(&doc);
    assert!(report.results().iter().all(|r| r.rule != "unapproved tag text"));

    // Everything else still reported, including the price violation.
    assert_eq!(report.results().len(), Ruleset::tesco().len() - 1);
    assert!(!result(&report, "price copy outside value tile").passed);
}
