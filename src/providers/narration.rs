//! NarrationSink trait definition

use async_trait::async_trait;

/// Voice output sink with queued and interrupting channels
///
/// `queue` appends to an ordered playback queue and never interrupts speech in
/// progress. `force_speak` interrupts immediately for urgent notices; whether
/// the queue resumes or is cleared afterwards is the sink's own policy.
#[async_trait]
pub trait NarrationSink: Send + Sync {
    /// Append text to the ordered playback queue
    async fn queue(&self, text: &str);

    /// Interrupt current playback and speak immediately
    async fn force_speak(&self, text: &str);
}
