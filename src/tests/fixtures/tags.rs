use crate::modules::tags::core::tag::TagDefinition;
use crate::shared::core::primitives::Timestamp;

pub struct TagDefinitionBuilder {
    inner: TagDefinition,
}

#[allow(dead_code)]
impl TagDefinitionBuilder {
    pub fn new(tag_id: impl Into<String>) -> Self {
        Self {
            inner: TagDefinition {
                tag_id: tag_id.into(),
                owner_id: "owner-0001".to_string(),
                name: "阅读".to_string(),
                icon: "📚".to_string(),
                color: "#1ABC9C".to_string(),
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

    pub fn created_at(mut self, v: Timestamp) -> Self {
        self.inner.created_at = v;
        self.inner.updated_at = v;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.inner.is_deleted = true;
        self
    }

    pub fn build(self) -> TagDefinition {
        self.inner
    }
}
