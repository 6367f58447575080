use crate::modules::templates::core::template::TemplateCategory;
use crate::shared::core::primitives::Timestamp;

/// Creates a template when `template_id` is `None`, otherwise edits the existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTemplate {
    pub template_id: Option<String>,
    pub owner_id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub content: String,
    pub now: Timestamp,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateRejection {
    #[error("template name must not be empty")]
    EmptyName,

    #[error("template content must not be empty")]
    EmptyContent,

    #[error("template name {0:?} is already taken")]
    DuplicateName(String),
}
