//! The document model: a canvas snapshot as supplied by the editor.
//!
//! A [`Document`] is an ordered list of positioned [`Element`]s plus the
//! target canvas [`Dimensions`]. Order is rendering z-order (later = on top);
//! validation ignores it except for deterministic first-violation attribution.
//!
//! The editor serializes snapshots as camelCase JSON (`fontSize`,
//! `backgroundColor`, ...); the serde renames here match that wire shape
//! exactly, so a live snapshot deserializes without adaptation.

use serde::{Deserialize, Serialize};

/// Unique identifier for an element, stable across the document's lifetime.
///
/// Ids are supplied by the editor and are opaque to the engine; the only
/// invariant is uniqueness within one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The kind of content an element holds. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Full-canvas backdrop. Always excluded from spatial and copy rules.
    Background,
    Text,
    Button,
    Shape,
    Image,
}

/// The kind of pre-approved compliance fixture an element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FixtureKind {
    /// A retailer tag whose text must come from a fixed allow-list.
    Tag,
    /// A price/value tile; the only element kind permitted to carry price copy.
    ValueTile,
    /// The mandatory drinkaware disclosure logo for alcohol creatives.
    Drinkaware,
}

/// Marks an element as a pre-approved compliance building block, exempting it
/// from certain generic content rules and subjecting it to fixture-specific
/// ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceTag {
    #[serde(rename = "type")]
    pub kind: FixtureKind,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

impl ComplianceTag {
    #[must_use]
    pub fn new(kind: FixtureKind) -> Self {
        Self { kind, approved: true, subtype: None }
    }
}

/// Free-form tag bag attached to every element.
///
/// `category` drives category-specific rules (e.g. `"alcohol"`); `compliance`
/// is the profile-specific fixture annotation. Anything else the editor
/// attaches is round-tripped through `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceTag>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single positioned visual object on the canvas.
///
/// `width`/`height` are often unset for text elements (the editor derives them
/// from font metrics before validation when it can); a missing extent means
/// the element needs no area-based check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub metadata: Metadata,
}

fn default_visible() -> bool {
    true
}

impl Element {
    /// Create an element with the given id and kind at the canvas origin.
    #[must_use]
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            text: None,
            x: 0.0,
            y: 0.0,
            width: None,
            height: None,
            font_size: None,
            color: None,
            background_color: None,
            visible: true,
            metadata: Metadata::default(),
        }
    }

    /// Set the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set position and extent in one go.
    #[must_use]
    pub fn with_frame(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.x = x;
        self.y = y;
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the font size in pixels.
    #[must_use]
    pub fn with_font_size(mut self, px: f32) -> Self {
        self.font_size = Some(px);
        self
    }

    /// Set the fill color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the metadata category (e.g. `"alcohol"`, `"logo"`).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.metadata.category = Some(category.into());
        self
    }

    /// Mark this element as a compliance fixture of the given kind.
    #[must_use]
    pub fn with_fixture(mut self, kind: FixtureKind) -> Self {
        self.metadata.compliance = Some(ComplianceTag::new(kind));
        self
    }

    /// Set the fixture subtype (e.g. a value-tile style). No-op on
    /// non-fixture elements.
    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        if let Some(tag) = self.metadata.compliance.as_mut() {
            tag.subtype = Some(subtype.into());
        }
        self
    }

    /// Hide this element.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// The fixture kind, if this element is a compliance fixture.
    #[must_use]
    pub fn fixture_kind(&self) -> Option<FixtureKind> {
        self.metadata.compliance.as_ref().map(|c| c.kind)
    }

    /// Whether this element is a compliance fixture of any kind.
    #[must_use]
    pub fn is_fixture(&self) -> bool {
        self.metadata.compliance.is_some()
    }
}

/// Target canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width-over-height ratio; drives format-specific rules.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// A full canvas snapshot: ordered elements plus canvas dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<Element>,
    pub dimensions: Dimensions,
}

impl Document {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self { elements: Vec::new(), dimensions }
    }

    /// Append an element (kept fluent for snapshot construction in tests).
    #[must_use]
    pub fn with(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_json_round_trips_camel_case() {
        let json = r##"{
            "elements": [
                {
                    "id": "headline-1",
                    "type": "text",
                    "text": "Fresh every day",
                    "x": 40.0,
                    "y": 220.0,
                    "fontSize": 28.0,
                    "color": "#00539F",
                    "metadata": {
                        "category": "grocery",
                        "compliance": {"type": "tag", "approved": true}
                    }
                },
                {"id": "bg", "type": "background"}
            ],
            "dimensions": {"width": 1080.0, "height": 1920.0}
        }"##;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.elements.len(), 2);

        let headline = &doc.elements[0];
        assert_eq!(headline.kind, ElementKind::Text);
        assert_eq!(headline.font_size, Some(28.0));
        assert_eq!(headline.fixture_kind(), Some(FixtureKind::Tag));
        assert_eq!(headline.metadata.category.as_deref(), Some("grocery"));
        assert!(headline.visible, "visible defaults to true");

        let bg = &doc.elements[1];
        assert_eq!(bg.kind, ElementKind::Background);
        assert_eq!(bg.width, None);

        let back = serde_json::to_string(&doc).unwrap();
        let again: Document = serde_json::from_str(&back).unwrap();
        assert_eq!(again.elements[0].id, ElementId::new("headline-1"));
    }

    #[test]
    fn fixture_kind_names_match_editor_annotations() {
        let json = r#"{"type": "valueTile", "approved": true, "subtype": "clubcard"}"#;
        let tag: ComplianceTag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.kind, FixtureKind::ValueTile);
        assert_eq!(tag.subtype.as_deref(), Some("clubcard"));

        let json = r#"{"type": "drinkaware"}"#;
        let tag: ComplianceTag = serde_json::from_str(json).unwrap();
        assert_eq!(tag.kind, FixtureKind::Drinkaware);
        assert!(!tag.approved, "approved defaults to false on the wire");
    }

    #[test]
    fn unknown_metadata_keys_are_preserved() {
        let json = r#"{"id": "e1", "type": "shape", "metadata": {"locked": true}}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.metadata.extra.get("locked"), Some(&serde_json::Value::Bool(true)));
    }
}
