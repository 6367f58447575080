// Reusable note templates for record content.
//
// Catalogue
// - Three built-in templates are offered to everyone and cannot be edited.
// - Users add their own; names are unique across both sets.

use crate::shared::core::primitives::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Work,
    Life,
    Study,
    Sport,
    Other,
}

impl TemplateCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "工作",
            Self::Life => "生活",
            Self::Study => "学习",
            Self::Sport => "运动",
            Self::Other => "其他",
        }
    }
}

pub struct DefaultTemplate {
    pub name: &'static str,
    pub category: TemplateCategory,
    pub content: &'static str,
}

pub static DEFAULT_TEMPLATES: [DefaultTemplate; 3] = [
    DefaultTemplate {
        name: "工作日志",
        category: TemplateCategory::Work,
        content: "今天完成了以下工作：\n1. \n2. \n3. \n\n明天计划：\n1. \n2. ",
    },
    DefaultTemplate {
        name: "会议记录",
        category: TemplateCategory::Work,
        content: "会议主题：\n参与人员：\n会议时间：\n\n会议内容：\n\n待办事项：",
    },
    DefaultTemplate {
        name: "学习笔记",
        category: TemplateCategory::Study,
        content: "学习内容：\n学习时长：\n\n重点笔记：\n\n心得体会：",
    },
];

pub fn is_default_template_name(name: &str) -> bool {
    DEFAULT_TEMPLATES.iter().any(|template| template.name == name)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteTemplate {
    pub template_id: String,
    pub owner_id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub content: String,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One row of the template listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    /// `None` for built-in templates.
    pub template_id: Option<String>,
    pub name: String,
    pub category: TemplateCategory,
    pub content: String,
    pub is_default: bool,
}

impl From<&DefaultTemplate> for TemplateSummary {
    fn from(template: &DefaultTemplate) -> Self {
        Self {
            template_id: None,
            name: template.name.to_string(),
            category: template.category,
            content: template.content.to_string(),
            is_default: true,
        }
    }
}

impl From<NoteTemplate> for TemplateSummary {
    fn from(template: NoteTemplate) -> Self {
        Self {
            template_id: Some(template.template_id),
            name: template.name,
            category: template.category,
            content: template.content,
            is_default: false,
        }
    }
}
