use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Category marker shown next to a slide title.
/// Purely presentational: the UI maps each variant to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum SlideIcon {
    Table,
    Truck,
    Alert,
    Wrench,
    Check,
    Shield,
}

/// How a decorated bullet should be emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Problem,
    Positive,
    Preventive,
}

/// One bullet of slide content.
///
/// In JSON a plain bullet is a bare string and a decorated one is
/// `{ "kind": "problem", "text": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    PlainText(String),
    Decorated { kind: Emphasis, text: String },
}

impl ContentItem {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText(text.into())
    }

    pub fn decorated(kind: Emphasis, text: impl Into<String>) -> Self {
        Self::Decorated {
            kind,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ContentItem::PlainText(text) => text,
            ContentItem::Decorated { text, .. } => text,
        }
    }

    pub fn emphasis(&self) -> Option<Emphasis> {
        match self {
            ContentItem::PlainText(_) => None,
            ContentItem::Decorated { kind, .. } => Some(*kind),
        }
    }
}

/// One screen of the presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub title: String,
    /// `None` when the content file omits the icon; reported by validation.
    #[serde(default)]
    pub icon: Option<SlideIcon>,
    #[serde(default)]
    pub content: Vec<ContentItem>,
    /// Show the call-to-action button under the bullets
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cta: bool,
}

impl Slide {
    pub fn new(title: impl Into<String>, icon: SlideIcon, content: Vec<ContentItem>) -> Self {
        Self {
            title: title.into(),
            icon: Some(icon),
            content,
            cta: false,
        }
    }

    pub fn with_cta(mut self) -> Self {
        self.cta = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_decorated_items_parse_from_json() {
        let json = r#"["Refacciones.", { "kind": "preventive", "text": "Backup en CEDIS" }]"#;
        let items: Vec<ContentItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items[0], ContentItem::plain("Refacciones."));
        assert_eq!(items[0].emphasis(), None);
        assert_eq!(items[1].emphasis(), Some(Emphasis::Preventive));
        assert_eq!(items[1].text(), "Backup en CEDIS");
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let slide: Slide = serde_json::from_str(r#"{ "title": "Atentamente" }"#).unwrap();

        assert_eq!(slide.icon, None);
        assert!(slide.content.is_empty());
        assert!(!slide.cta);
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let result: Result<Slide, _> =
            serde_json::from_str(r#"{ "title": "x", "icon": "rocket", "content": ["a"] }"#);
        assert!(result.is_err());
    }
}
