//! Lenient serde mirror of the raw Scryfall print record.
//!
//! Only the fields the toolkit consumes are modeled. Everything is defaulted
//! so a structurally unexpected record deserializes to empty fields instead
//! of failing at the boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageUris {
    #[serde(default)]
    pub normal: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFace {
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

/// One raw print as returned by the search collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPrint {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub oracle_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub printed_name: Option<String>,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub collector_number: String,
    #[serde(default)]
    pub released_at: String,
    #[serde(default)]
    pub scryfall_uri: String,
    #[serde(default)]
    pub cmc: Option<f64>,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub printed_type_line: Option<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub card_faces: Option<Vec<RawFace>>,
}

impl RawPrint {
    /// Printed (localized) name if the printing carries one, else the
    /// canonical name.
    pub fn display_name(&self) -> &str {
        match self.printed_name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => &self.name,
        }
    }

    /// Printed type line if present, else the canonical type line.
    pub fn display_type(&self) -> &str {
        match self.printed_type_line.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => &self.type_line,
        }
    }

    /// First usable image URI: the print's own `image_uris.normal`, else the
    /// first card face that has one.
    pub fn image(&self) -> Option<&str> {
        if let Some(uri) = self.image_uris.as_ref().and_then(|u| u.normal.as_deref()) {
            return Some(uri);
        }
        self.card_faces
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .find_map(|f| f.image_uris.as_ref().and_then(|u| u.normal.as_deref()))
    }
}
