use crate::modules::activity_records::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use crate::modules::activity_records::core::record::{ActivityRecord, RecordSource};
use crate::modules::activity_records::use_cases::auto_fill_sleep::command::{
    AutoFillSleep, Debounce,
};
use crate::modules::activity_records::use_cases::auto_fill_sleep::handler::AutoFillSleepHandler;
use crate::modules::activity_records::use_cases::auto_fill_sleep::report::AutoFillOutcome;
use crate::modules::activity_records::use_cases::save_record::handler::SaveRecordHandler;
use crate::shared::core::primitives::{LocalCalendar, Timestamp};
use crate::tests::fixtures::commands::save_record::SaveRecordBuilder;
use crate::tests::fixtures::records::{ActivityRecordBuilder, at};
use std::sync::Arc;

fn run_at(as_of: Timestamp) -> AutoFillSleep {
    AutoFillSleep {
        owner_id: "owner-0001".to_string(),
        as_of,
        debounce: None,
    }
}

async fn store_with_evening_sleep() -> Arc<InMemoryRecordStore> {
    let store = InMemoryRecordStore::new();
    store
        .seed(
            ActivityRecordBuilder::new("r-sleep")
                .content("准备睡觉")
                .start_time(at(1, 23, 30))
                .build(),
        )
        .await;
    Arc::new(store)
}

async fn fillers(store: &InMemoryRecordStore) -> Vec<ActivityRecord> {
    store
        .snapshot()
        .await
        .into_iter()
        .filter(|r| r.source == RecordSource::Auto)
        .collect()
}

#[tokio::test]
async fn opens_an_ongoing_filler_and_the_first_save_closes_it() {
    let store = store_with_evening_sleep().await;
    let calendar = LocalCalendar::utc();
    let auto_fill = AutoFillSleepHandler::new(store.clone(), calendar);
    let save = SaveRecordHandler::new(store.clone(), calendar);

    let outcome = auto_fill.handle(run_at(at(2, 6, 0))).await.unwrap();
    assert_eq!(
        outcome,
        AutoFillOutcome::Processed {
            updated: true,
            created: true
        }
    );
    let open = fillers(&store).await;
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].start_time, at(2, 0, 0));
    assert_eq!(open[0].end_time, None);

    save.handle(
        SaveRecordBuilder::new()
            .content("起床")
            .start_time(at(2, 8, 0))
            .build(),
    )
    .await
    .unwrap();

    let closed = fillers(&store).await;
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].end_time, Some(at(2, 8, 0)));
}

#[tokio::test]
async fn running_again_never_duplicates_the_filler() {
    let store = store_with_evening_sleep().await;
    let auto_fill = AutoFillSleepHandler::new(store.clone(), LocalCalendar::utc());

    auto_fill.handle(run_at(at(2, 6, 0))).await.unwrap();
    let second = auto_fill.handle(run_at(at(2, 7, 0))).await.unwrap();

    assert_eq!(
        second,
        AutoFillOutcome::Processed {
            updated: false,
            created: false
        }
    );
    assert_eq!(fillers(&store).await.len(), 1);
}

#[tokio::test]
async fn concurrent_runs_insert_one_filler() {
    let store = store_with_evening_sleep().await;
    let first = AutoFillSleepHandler::new(store.clone(), LocalCalendar::utc());
    let second = AutoFillSleepHandler::new(store.clone(), LocalCalendar::utc());

    let (a, b) = tokio::join!(
        first.handle(run_at(at(2, 6, 0))),
        second.handle(run_at(at(2, 6, 0)))
    );

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(fillers(&store).await.len(), 1);
}

#[tokio::test]
async fn does_not_refill_a_night_already_stitched_by_a_save() {
    let store = store_with_evening_sleep().await;
    let calendar = LocalCalendar::utc();
    SaveRecordHandler::new(store.clone(), calendar)
        .handle(SaveRecordBuilder::new().start_time(at(2, 8, 0)).build())
        .await
        .unwrap();

    let outcome = AutoFillSleepHandler::new(store.clone(), calendar)
        .handle(run_at(at(2, 9, 0)))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        AutoFillOutcome::Processed {
            updated: false,
            created: false
        }
    );
    assert_eq!(fillers(&store).await.len(), 1);
}

#[tokio::test]
async fn fills_up_to_a_record_logged_before_the_run() {
    let store = store_with_evening_sleep().await;
    store
        .seed(
            ActivityRecordBuilder::new("r-run")
                .content("晨跑")
                .start_time(at(2, 7, 30))
                .build(),
        )
        .await;

    AutoFillSleepHandler::new(store.clone(), LocalCalendar::utc())
        .handle(run_at(at(2, 9, 0)))
        .await
        .unwrap();

    let filled = fillers(&store).await;
    assert_eq!(filled.len(), 1);
    assert_eq!(filled[0].start_time, at(2, 0, 0));
    assert_eq!(filled[0].end_time, Some(at(2, 7, 30)));
}

#[tokio::test]
async fn a_recent_run_suppresses_the_next_one() {
    let store = store_with_evening_sleep().await;
    let auto_fill = AutoFillSleepHandler::new(store.clone(), LocalCalendar::utc());

    let outcome = auto_fill
        .handle(AutoFillSleep {
            debounce: Some(Debounce {
                last_run_at: at(2, 5, 58),
                min_interval_ms: 5 * 60_000,
            }),
            ..run_at(at(2, 6, 0))
        })
        .await
        .unwrap();

    assert_eq!(outcome, AutoFillOutcome::Debounced);
    assert!(fillers(&store).await.is_empty());
}

#[tokio::test]
async fn leaves_a_non_sleep_evening_alone() {
    let store = InMemoryRecordStore::new();
    store
        .seed(
            ActivityRecordBuilder::new("r-game")
                .content("打游戏")
                .start_time(at(1, 23, 0))
                .build(),
        )
        .await;
    let store = Arc::new(store);

    let outcome = AutoFillSleepHandler::new(store.clone(), LocalCalendar::utc())
        .handle(run_at(at(2, 6, 0)))
        .await
        .unwrap();

    assert!(matches!(outcome, AutoFillOutcome::NotSleep { .. }));
    assert_eq!(store.snapshot().await[0].end_time, None);
    assert!(fillers(&store).await.is_empty());
}
