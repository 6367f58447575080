// Saves a user-authored record and keeps the timeline in front of it contiguous.
//
// Flow
// - Voice records without text are sent to the transcriber, bounded by a timeout.
// - The command is validated before anything is written.
// - The preceding record is stitched up to the new start time. Stitching never blocks
//   the save: a failed lookup is logged and the save proceeds without it.
// - The new record is inserted open-ended.

use crate::modules::activity_records::core::ports::RecordStore;
use crate::modules::activity_records::use_cases::save_record::command::SaveRecord;
use crate::modules::activity_records::use_cases::save_record::decide::decide_save;
use crate::modules::activity_records::use_cases::save_record::decision::Decision;
use crate::modules::activity_records::use_cases::stitch_timeline::handler::StitchTimelineHandler;
use crate::modules::activity_records::use_cases::stitch_timeline::report::StitchReport;
use crate::shared::core::application_error::ApplicationError;
use crate::shared::core::primitives::LocalCalendar;
use crate::shared::infrastructure::speech::{SpeechTranscriber, transcribe_with_timeout};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_TRANSCRIPTION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveRecordOutcome {
    pub record_id: String,
    pub stitch: StitchReport,
}

pub struct SaveRecordHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TRecordStore>,
    stitcher: StitchTimelineHandler<TRecordStore>,
    transcriber: Option<Arc<dyn SpeechTranscriber>>,
    transcription_timeout: Duration,
}

impl<TRecordStore> SaveRecordHandler<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TRecordStore>, calendar: LocalCalendar) -> Self {
        Self {
            stitcher: StitchTimelineHandler::new(store.clone(), calendar),
            store,
            transcriber: None,
            transcription_timeout: DEFAULT_TRANSCRIPTION_TIMEOUT,
        }
    }

    pub fn with_transcriber(mut self, transcriber: Arc<dyn SpeechTranscriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    pub fn with_transcription_timeout(mut self, transcription_timeout: Duration) -> Self {
        self.transcription_timeout = transcription_timeout;
        self
    }

    pub fn transcription_timeout(&self) -> Duration {
        self.transcription_timeout
    }

    pub async fn handle(
        &self,
        mut command: SaveRecord,
    ) -> Result<SaveRecordOutcome, ApplicationError> {
        if command.content.trim().is_empty() {
            if let (Some(transcriber), Some(audio_path)) =
                (self.transcriber.as_deref(), command.audio_path.as_deref())
            {
                if let Some(text) =
                    transcribe_with_timeout(transcriber, audio_path, self.transcription_timeout)
                        .await
                {
                    command.content = text;
                }
            }
        }

        let record = match decide_save(command) {
            Decision::Accepted { record } => record,
            Decision::Rejected { reason } => {
                return Err(ApplicationError::Domain(reason.to_string()));
            }
        };

        let stitch = match self
            .stitcher
            .handle(&record.owner_id, record.start_time, record.created_at)
            .await
        {
            Ok(report) => report,
            Err(error) => {
                tracing::warn!(owner_id = %record.owner_id, %error, "timeline lookup failed; saving without stitching");
                StitchReport::default()
            }
        };

        let record_id = self.store.insert(record).await?;
        tracing::info!(%record_id, updated = stitch.updated, created = stitch.created, "record saved");
        Ok(SaveRecordOutcome { record_id, stitch })
    }
}
