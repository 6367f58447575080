use crate::shared::core::primitives::Timestamp;

/// Creates a tag when `tag_id` is `None`, otherwise edits the existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTag {
    pub tag_id: Option<String>,
    pub owner_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub now: Timestamp,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TagRejection {
    #[error("tag name must not be empty")]
    EmptyName,

    #[error("tag name {0:?} is already taken")]
    DuplicateName(String),
}
