use crate::modules::activity_records::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use crate::modules::activity_records::core::record::{ActivityRecord, RecordSource, Tag};
use crate::modules::activity_records::core::stitch::AUTO_FILL_CONTENT;
use crate::modules::activity_records::use_cases::save_record::handler::SaveRecordHandler;
use crate::modules::activity_records::use_cases::stitch_timeline::handler::StitchTimelineHandler;
use crate::shared::core::primitives::LocalCalendar;
use crate::tests::fixtures::commands::save_record::SaveRecordBuilder;
use crate::tests::fixtures::records::{ActivityRecordBuilder, at};
use std::sync::Arc;

async fn store_with(records: Vec<ActivityRecord>) -> Arc<InMemoryRecordStore> {
    let store = InMemoryRecordStore::new();
    for record in records {
        store.seed(record).await;
    }
    Arc::new(store)
}

#[tokio::test]
async fn closes_an_evening_sleep_at_midnight_and_fills_the_night() {
    let sleep_tags = vec![Tag::new("Rest", "🛌", "#3355FF")];
    let store = store_with(vec![
        ActivityRecordBuilder::new("r-sleep")
            .content("准备睡觉")
            .start_time(at(1, 23, 30))
            .tags(sleep_tags.clone())
            .build(),
    ])
    .await;
    let handler = SaveRecordHandler::new(store.clone(), LocalCalendar::utc());

    let outcome = handler
        .handle(
            SaveRecordBuilder::new()
                .content("起床")
                .start_time(at(2, 8, 0))
                .build(),
        )
        .await
        .unwrap();

    assert!(outcome.stitch.updated);
    assert!(outcome.stitch.created);

    let all = store.snapshot().await;
    assert_eq!(all.len(), 3);

    let sleep = all.iter().find(|r| r.record_id == "r-sleep").unwrap();
    assert_eq!(sleep.end_time, Some(at(2, 0, 0)));

    let filler = all.iter().find(|r| r.source == RecordSource::Auto).unwrap();
    assert_eq!(filler.content, AUTO_FILL_CONTENT);
    assert_eq!(filler.start_time, at(2, 0, 0));
    assert_eq!(filler.end_time, Some(at(2, 8, 0)));
    assert_eq!(filler.tags, sleep_tags);

    let saved = all.iter().find(|r| r.record_id == outcome.record_id).unwrap();
    assert_eq!(saved.start_time, at(2, 8, 0));
    assert_eq!(saved.end_time, None);
}

#[tokio::test]
async fn stitching_the_same_cutoff_twice_changes_nothing_the_second_time() {
    let store = store_with(vec![
        ActivityRecordBuilder::new("r-sleep")
            .content("睡觉")
            .start_time(at(1, 23, 30))
            .build(),
    ])
    .await;
    let stitcher = StitchTimelineHandler::new(store.clone(), LocalCalendar::utc());

    let first = stitcher
        .handle("owner-0001", at(2, 8, 0), at(2, 8, 0))
        .await
        .unwrap();
    let after_first = store.snapshot().await;
    let second = stitcher
        .handle("owner-0001", at(2, 8, 0), at(2, 8, 5))
        .await
        .unwrap();

    assert!(first.updated && first.created);
    assert!(second.is_noop());
    assert_eq!(store.snapshot().await, after_first);
}

#[tokio::test]
async fn closes_a_non_sleep_record_at_the_new_start_even_across_midnight() {
    let store = store_with(vec![
        ActivityRecordBuilder::new("r-late")
            .content("加班写代码")
            .start_time(at(1, 23, 0))
            .build(),
    ])
    .await;
    let handler = SaveRecordHandler::new(store.clone(), LocalCalendar::utc());

    let outcome = handler
        .handle(SaveRecordBuilder::new().start_time(at(2, 1, 0)).build())
        .await
        .unwrap();

    assert!(outcome.stitch.updated);
    assert!(!outcome.stitch.created);
    let all = store.snapshot().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].end_time, Some(at(2, 1, 0)));
}

#[tokio::test]
async fn closes_a_same_day_nap_without_filling() {
    let store = store_with(vec![
        ActivityRecordBuilder::new("r-nap")
            .content("午睡")
            .start_time(at(1, 13, 0))
            .build(),
    ])
    .await;
    let handler = SaveRecordHandler::new(store.clone(), LocalCalendar::utc());

    handler
        .handle(SaveRecordBuilder::new().start_time(at(1, 14, 0)).build())
        .await
        .unwrap();

    let all = store.snapshot().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].end_time, Some(at(1, 14, 0)));
    assert!(all.iter().all(|r| r.source != RecordSource::Auto));
}

#[tokio::test]
async fn saves_the_first_record_of_an_empty_journal_open_ended() {
    let store = store_with(Vec::new()).await;
    let handler = SaveRecordHandler::new(store.clone(), LocalCalendar::utc());

    let outcome = handler.handle(SaveRecordBuilder::new().build()).await.unwrap();

    assert!(outcome.stitch.is_noop());
    let all = store.snapshot().await;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].end_time, None);
}

#[tokio::test]
async fn ignores_deleted_and_too_old_records_when_stitching() {
    let store = store_with(vec![
        ActivityRecordBuilder::new("r-early")
            .content("睡觉")
            .start_time(at(1, 21, 0))
            .build(),
        ActivityRecordBuilder::new("r-gone")
            .content("睡觉")
            .start_time(at(1, 23, 0))
            .deleted()
            .build(),
    ])
    .await;
    let handler = SaveRecordHandler::new(store.clone(), LocalCalendar::utc());

    let outcome = handler
        .handle(SaveRecordBuilder::new().start_time(at(2, 8, 0)).build())
        .await
        .unwrap();

    assert!(outcome.stitch.is_noop());
    let all = store.snapshot().await;
    assert_eq!(all.len(), 3);
    assert!(all.iter().filter(|r| r.record_id != outcome.record_id).all(|r| r.end_time.is_none()));
}

#[tokio::test]
async fn keeps_days_apart_in_a_local_calendar() {
    // 23:30 in Shanghai is 15:30 UTC the same day.
    let calendar = LocalCalendar::new(chrono_tz::Asia::Shanghai);
    let store = store_with(vec![
        ActivityRecordBuilder::new("r-sleep")
            .content("睡觉")
            .start_time(at(1, 15, 30))
            .build(),
    ])
    .await;
    let handler = SaveRecordHandler::new(store.clone(), calendar);

    handler
        .handle(SaveRecordBuilder::new().start_time(at(2, 0, 0)).build())
        .await
        .unwrap();

    let all = store.snapshot().await;
    let filler = all.iter().find(|r| r.source == RecordSource::Auto).unwrap();
    assert_eq!(filler.start_time, at(1, 16, 0));
    assert_eq!(filler.end_time, Some(at(2, 0, 0)));
}

#[tokio::test]
async fn closes_the_sleep_at_the_local_midnight_of_a_dst_night() {
    // Berlin springs forward on 2024-03-31; that midnight is still winter time, 23:00 UTC.
    let calendar = LocalCalendar::new(chrono_tz::Europe::Berlin);
    let store = store_with(vec![
        ActivityRecordBuilder::new("r-sleep")
            .content("睡觉")
            .start_time(at(30, 22, 30))
            .build(),
    ])
    .await;
    let handler = SaveRecordHandler::new(store.clone(), calendar);

    handler
        .handle(SaveRecordBuilder::new().start_time(at(31, 6, 0)).build())
        .await
        .unwrap();

    let all = store.snapshot().await;
    let sleep = all.iter().find(|r| r.record_id == "r-sleep").unwrap();
    assert_eq!(sleep.end_time, Some(at(30, 23, 0)));
    let filler = all.iter().find(|r| r.source == RecordSource::Auto).unwrap();
    assert_eq!(filler.start_time, at(30, 23, 0));
    assert_eq!(filler.end_time, Some(at(31, 6, 0)));
}
