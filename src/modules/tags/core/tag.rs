// Tag catalogue of one user.
//
// Catalogue
// - Six built-in tags are offered to everyone and cannot be edited.
// - Users add their own tags on top; names are unique across both sets.
// - Records copy name, icon and color at save time, so editing a catalogue entry never
//   rewrites history.

use crate::modules::activity_records::core::record::Tag;
use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};

pub static DEFAULT_TAGS: [(&str, &str, &str); 6] = [
    ("工作", "💼", "#FF5733"),
    ("学习", "📖", "#3498DB"),
    ("休息", "☕", "#2ECC71"),
    ("通勤", "🚇", "#9B59B6"),
    ("家庭", "🏠", "#E74C3C"),
    ("运动", "🏃", "#F39C12"),
];

pub fn is_default_tag_name(name: &str) -> bool {
    DEFAULT_TAGS.iter().any(|(default, _, _)| *default == name)
}

/// A user-defined catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    pub tag_id: String,
    pub owner_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TagDefinition {
    pub fn to_record_tag(&self) -> Tag {
        Tag::new(self.name.clone(), self.icon.clone(), self.color.clone())
    }
}

/// One row of the catalogue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    /// `None` for built-in tags.
    pub tag_id: Option<String>,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub is_default: bool,
    pub usage_count: usize,
}
