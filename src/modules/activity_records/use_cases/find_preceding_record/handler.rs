use crate::modules::activity_records::core::ports::{RecordQuery, RecordStore, RecordStoreError};
use crate::modules::activity_records::core::record::ActivityRecord;
use crate::shared::core::primitives::{LocalCalendar, Timestamp};

/// Latest live record of `owner_id` starting in `[prior day 22:00, cutoff)`.
pub async fn find_preceding_record<TRecordStore>(
    store: &TRecordStore,
    calendar: &LocalCalendar,
    owner_id: &str,
    cutoff: Timestamp,
) -> Result<Option<ActivityRecord>, RecordStoreError>
where
    TRecordStore: RecordStore + ?Sized,
{
    let query = RecordQuery::for_owner(owner_id)
        .starting_within(calendar.lookback_start(cutoff), cutoff)
        .newest_first()
        .limit(1);
    Ok(store.query(&query).await?.into_iter().next())
}
