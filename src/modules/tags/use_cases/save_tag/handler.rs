use crate::modules::tags::core::ports::TagStore;
use crate::modules::tags::core::tag::{TagDefinition, is_default_tag_name};
use crate::modules::tags::use_cases::save_tag::command::{SaveTag, TagRejection};
use crate::shared::core::application_error::ApplicationError;
use std::sync::Arc;
use uuid::Uuid;

pub struct SaveTagHandler<TTagStore>
where
    TTagStore: TagStore + Send + Sync + 'static,
{
    store: Arc<TTagStore>,
}

impl<TTagStore> SaveTagHandler<TTagStore>
where
    TTagStore: TagStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TTagStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SaveTag) -> Result<TagDefinition, ApplicationError> {
        let name = command.name.trim().to_string();
        if name.is_empty() {
            return Err(ApplicationError::Domain(TagRejection::EmptyName.to_string()));
        }
        let taken = is_default_tag_name(&name)
            || self
                .store
                .list(&command.owner_id)
                .await?
                .iter()
                .any(|tag| tag.name == name && Some(&tag.tag_id) != command.tag_id.as_ref());
        if taken {
            return Err(ApplicationError::Domain(TagRejection::DuplicateName(name).to_string()));
        }

        let tag = match command.tag_id {
            Some(tag_id) => {
                let mut tag = self
                    .store
                    .get(&tag_id)
                    .await?
                    .filter(|tag| tag.owner_id == command.owner_id)
                    .ok_or(ApplicationError::NotFound(tag_id))?;
                tag.name = name;
                tag.icon = command.icon;
                tag.color = command.color;
                tag.updated_at = command.now;
                tag
            }
            None => TagDefinition {
                tag_id: Uuid::now_v7().to_string(),
                owner_id: command.owner_id,
                name,
                icon: command.icon,
                color: command.color,
                is_deleted: false,
                created_at: command.now,
                updated_at: command.now,
            },
        };
        self.store.save(tag.clone()).await?;
        Ok(tag)
    }
}
