use crate::modules::templates::core::ports::TemplateStore;
use crate::modules::templates::core::template::{
    DEFAULT_TEMPLATES, TemplateCategory, TemplateSummary,
};
use crate::shared::core::application_error::ApplicationError;
use std::sync::Arc;

/// Built-in templates followed by the owner's (newest first). `None` lists every category.
pub struct ListTemplatesHandler<TTemplateStore>
where
    TTemplateStore: TemplateStore + Send + Sync + 'static,
{
    store: Arc<TTemplateStore>,
}

impl<TTemplateStore> ListTemplatesHandler<TTemplateStore>
where
    TTemplateStore: TemplateStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TTemplateStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        owner_id: &str,
        category: Option<TemplateCategory>,
    ) -> Result<Vec<TemplateSummary>, ApplicationError> {
        let custom = self.store.list(owner_id).await?;
        Ok(DEFAULT_TEMPLATES
            .iter()
            .map(TemplateSummary::from)
            .chain(custom.into_iter().map(TemplateSummary::from))
            .filter(|template| category.is_none_or(|wanted| template.category == wanted))
            .collect())
    }
}
