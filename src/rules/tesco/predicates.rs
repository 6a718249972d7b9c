use crate::document::{Element, ElementKind, FixtureKind};

/// Copy-bearing elements: text and buttons. The background never carries copy.
pub(crate) fn carries_copy(el: &Element) -> bool {
    matches!(el.kind, ElementKind::Text | ElementKind::Button)
}

/// Returns true when the element is an approved-tag fixture.
pub(crate) fn is_tag(el: &Element) -> bool {
    el.fixture_kind() == Some(FixtureKind::Tag)
}

/// Returns true when the element is a price/value tile fixture.
pub(crate) fn is_value_tile(el: &Element) -> bool {
    el.fixture_kind() == Some(FixtureKind::ValueTile)
}

/// Returns true when the element is the drinkaware disclosure logo.
pub(crate) fn is_drinkaware(el: &Element) -> bool {
    el.fixture_kind() == Some(FixtureKind::Drinkaware)
}

/// Returns true when the element sits in the alcohol category.
pub(crate) fn is_alcohol(el: &Element) -> bool {
    el.metadata.category.as_deref() == Some("alcohol")
}

/// Elements that participate in spatial rules: visible and not the
/// background. Hidden elements are exempt so invisible content cannot
/// produce spatial failures the user can't see.
pub(crate) fn spatially_checked(el: &Element) -> bool {
    el.visible && el.kind != ElementKind::Background
}

/// Elements the 9:16 safe zone protects: copy and compliance fixtures.
pub(crate) fn safe_zone_checked(el: &Element) -> bool {
    spatially_checked(el) && (carries_copy(el) || el.is_fixture())
}
