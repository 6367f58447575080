pub mod commands {
    pub mod save_record;
}
pub mod memos;
pub mod records;
pub mod tags;
pub mod templates;
