use crate::modules::templates::core::template::{NoteTemplate, TemplateCategory};
use crate::shared::core::primitives::Timestamp;

pub struct NoteTemplateBuilder {
    inner: NoteTemplate,
}

#[allow(dead_code)]
impl NoteTemplateBuilder {
    pub fn new(template_id: impl Into<String>) -> Self {
        Self {
            inner: NoteTemplate {
                template_id: template_id.into(),
                owner_id: "owner-0001".to_string(),
                name: "周报".to_string(),
                category: TemplateCategory::Work,
                content: "本周完成：\n下周计划：".to_string(),
                is_deleted: false,
                created_at: 1_700_000_000_000,
                updated_at: 1_700_000_000_000,
            },
        }
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn category(mut self, v: TemplateCategory) -> Self {
        self.inner.category = v;
        self
    }

    pub fn created_at(mut self, v: Timestamp) -> Self {
        self.inner.created_at = v;
        self.inner.updated_at = v;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.inner.is_deleted = true;
        self
    }

    pub fn build(self) -> NoteTemplate {
        self.inner
    }
}
