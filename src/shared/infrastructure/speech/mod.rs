// Speech-to-text port used when a voice record arrives without text.
//
// Boundaries
// - The remote recognizer is slow and unreliable; every call is wrapped in a fixed
//   timeout and a failure only means "no transcribed text".

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;

#[async_trait]
pub trait SpeechTranscriber: Send + Sync {
    async fn transcribe(&self, audio_path: &str) -> anyhow::Result<String>;
}

pub async fn transcribe_with_timeout(
    transcriber: &dyn SpeechTranscriber,
    audio_path: &str,
    limit: Duration,
) -> Option<String> {
    match timeout(limit, transcriber.transcribe(audio_path)).await {
        Ok(Ok(text)) => {
            let text = text.trim().to_string();
            (!text.is_empty()).then_some(text)
        }
        Ok(Err(error)) => {
            tracing::warn!(audio_path, %error, "speech recognition failed");
            None
        }
        Err(_) => {
            tracing::warn!(audio_path, timeout_ms = limit.as_millis() as u64, "speech recognition timed out");
            None
        }
    }
}
