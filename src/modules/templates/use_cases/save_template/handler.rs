use crate::modules::templates::core::ports::TemplateStore;
use crate::modules::templates::core::template::{NoteTemplate, is_default_template_name};
use crate::modules::templates::use_cases::save_template::command::{
    SaveTemplate, TemplateRejection,
};
use crate::shared::core::application_error::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct SaveTemplateHandler<TTemplateStore>
where
    TTemplateStore: TemplateStore + Send + Sync + 'static,
{
    store: Arc<TTemplateStore>,
}

impl<TTemplateStore> SaveTemplateHandler<TTemplateStore>
where
    TTemplateStore: TemplateStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TTemplateStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SaveTemplate) -> Result<NoteTemplate, ApplicationError> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(ApplicationError::Domain(TemplateRejection::EmptyName.to_string()));
        }
        let content = command.content.trim().to_string();
        if content.is_empty() {
            return Err(ApplicationError::Domain(TemplateRejection::EmptyContent.to_string()));
        }
        let taken = is_default_template_name(&name)
            || self
                .store
                .list(&command.owner_id)
                .await?
                .iter()
                .any(|other| {
                    other.name == name && Some(&other.template_id) != command.template_id.as_ref()
                });
        if taken {
            return Err(ApplicationError::Domain(
                TemplateRejection::DuplicateName(name).to_string(),
            ));
        }

        let template = match command.template_id {
            Some(template_id) => {
                let mut template = self
                    .store
                    .get(&template_id)
                    .await?
                    .filter(|template| template.owner_id == command.owner_id)
                    .ok_or(ApplicationError::NotFound(template_id))?;
                template.name = name;
                template.category = command.category;
                template.content = content;
                template.updated_at = command.now;
                template
            }
            None => NoteTemplate {
                template_id: Uuid::now_v7().to_string(),
                owner_id: command.owner_id,
                name,
                category: command.category,
                content,
                is_deleted: false,
                created_at: command.now,
                updated_at: command.now,
            },
        };
        self.store.save(template.clone()).await?;
        Ok(template)
    }
}
