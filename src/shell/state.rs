use crate::modules::activity_records::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use crate::modules::activity_records::use_cases::auto_fill_sleep::handler::AutoFillSleepHandler;
use crate::modules::activity_records::use_cases::delete_record::handler::DeleteRecordHandler;
use crate::modules::activity_records::use_cases::edit_record::handler::EditRecordHandler;
use crate::modules::activity_records::use_cases::list_records_by_day::handler::ListRecordsByDayHandler;
use crate::modules::activity_records::use_cases::save_record::handler::SaveRecordHandler;
use crate::modules::memos::adapters::outbound::memo_store_in_memory::InMemoryMemoStore;
use crate::modules::memos::use_cases::delete_memo::handler::DeleteMemoHandler;
use crate::modules::memos::use_cases::list_todays_memos::handler::ListTodaysMemosHandler;
use crate::modules::memos::use_cases::save_memo::handler::SaveMemoHandler;
use crate::modules::memos::use_cases::toggle_memo::handler::ToggleMemoHandler;
use crate::modules::tags::adapters::outbound::tag_store_in_memory::InMemoryTagStore;
use crate::modules::tags::use_cases::delete_tag::handler::DeleteTagHandler;
use crate::modules::tags::use_cases::list_tags::handler::ListTagsHandler;
use crate::modules::tags::use_cases::save_tag::handler::SaveTagHandler;
use crate::modules::templates::adapters::outbound::template_store_in_memory::InMemoryTemplateStore;
use crate::modules::templates::use_cases::delete_template::handler::DeleteTemplateHandler;
use crate::modules::templates::use_cases::list_templates::handler::ListTemplatesHandler;
use crate::modules::templates::use_cases::save_template::handler::SaveTemplateHandler;
use crate::shared::core::primitives::LocalCalendar;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub calendar: LocalCalendar,
    pub records: Arc<InMemoryRecordStore>,
    pub tags: Arc<InMemoryTagStore>,
    pub templates: Arc<InMemoryTemplateStore>,
    pub save_record_handler: Arc<SaveRecordHandler<InMemoryRecordStore>>,
    pub edit_record_handler: Arc<EditRecordHandler<InMemoryRecordStore>>,
    pub delete_record_handler: Arc<DeleteRecordHandler<InMemoryRecordStore>>,
    pub list_records_handler: Arc<ListRecordsByDayHandler<InMemoryRecordStore>>,
    pub auto_fill_handler: Arc<AutoFillSleepHandler<InMemoryRecordStore>>,
    pub save_memo_handler: Arc<SaveMemoHandler<InMemoryMemoStore>>,
    pub toggle_memo_handler: Arc<ToggleMemoHandler<InMemoryMemoStore>>,
    pub delete_memo_handler: Arc<DeleteMemoHandler<InMemoryMemoStore>>,
    pub list_memos_handler: Arc<ListTodaysMemosHandler<InMemoryMemoStore>>,
    pub save_tag_handler: Arc<SaveTagHandler<InMemoryTagStore>>,
    pub delete_tag_handler: Arc<DeleteTagHandler<InMemoryTagStore>>,
    pub list_tags_handler: Arc<ListTagsHandler<InMemoryTagStore, InMemoryRecordStore>>,
    pub save_template_handler: Arc<SaveTemplateHandler<InMemoryTemplateStore>>,
    pub delete_template_handler: Arc<DeleteTemplateHandler<InMemoryTemplateStore>>,
    pub list_templates_handler: Arc<ListTemplatesHandler<InMemoryTemplateStore>>,
}

impl AppState {
    pub fn new(
        records: Arc<InMemoryRecordStore>,
        memos: Arc<InMemoryMemoStore>,
        calendar: LocalCalendar,
    ) -> Self {
        Self::with_save_handler(
            SaveRecordHandler::new(records.clone(), calendar),
            records,
            memos,
            calendar,
        )
    }

    pub fn from_config(
        config: &AppConfig,
        records: Arc<InMemoryRecordStore>,
        memos: Arc<InMemoryMemoStore>,
    ) -> Self {
        let save = SaveRecordHandler::new(records.clone(), config.calendar)
            .with_transcription_timeout(config.transcription_timeout);
        Self::with_save_handler(save, records, memos, config.calendar)
    }

    /// Wires a pre-configured save handler, e.g. one with a speech transcriber.
    pub fn with_save_handler(
        save_record_handler: SaveRecordHandler<InMemoryRecordStore>,
        records: Arc<InMemoryRecordStore>,
        memos: Arc<InMemoryMemoStore>,
        calendar: LocalCalendar,
    ) -> Self {
        let tags = Arc::new(InMemoryTagStore::new());
        let templates = Arc::new(InMemoryTemplateStore::new());
        Self {
            calendar,
            save_record_handler: Arc::new(save_record_handler),
            edit_record_handler: Arc::new(EditRecordHandler::new(records.clone())),
            delete_record_handler: Arc::new(DeleteRecordHandler::new(records.clone())),
            list_records_handler: Arc::new(ListRecordsByDayHandler::new(records.clone(), calendar)),
            auto_fill_handler: Arc::new(AutoFillSleepHandler::new(records.clone(), calendar)),
            save_memo_handler: Arc::new(SaveMemoHandler::new(memos.clone())),
            toggle_memo_handler: Arc::new(ToggleMemoHandler::new(memos.clone())),
            delete_memo_handler: Arc::new(DeleteMemoHandler::new(memos.clone())),
            list_memos_handler: Arc::new(ListTodaysMemosHandler::new(memos, calendar)),
            save_tag_handler: Arc::new(SaveTagHandler::new(tags.clone())),
            delete_tag_handler: Arc::new(DeleteTagHandler::new(tags.clone())),
            list_tags_handler: Arc::new(ListTagsHandler::new(tags.clone(), records.clone())),
            save_template_handler: Arc::new(SaveTemplateHandler::new(templates.clone())),
            delete_template_handler: Arc::new(DeleteTemplateHandler::new(templates.clone())),
            list_templates_handler: Arc::new(ListTemplatesHandler::new(templates.clone())),
            records,
            tags,
            templates,
        }
    }
}
