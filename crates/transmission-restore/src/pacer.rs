//! Fixed spacing between backend submissions.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

/// Keeps consecutive submissions at least `delay` apart.
///
/// The delay is served before a submission rather than after it, so the run does not sleep
/// after its last submission. A single pacer is shared by all mappings of a run.
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
    submitted: bool,
}

impl Pacer {
    /// Creates a pacer; a zero delay disables pausing.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            submitted: false,
        }
    }

    /// Waits until the next submission may go out.
    pub async fn ready(&mut self) {
        if self.submitted && !self.delay.is_zero() {
            debug!("waiting {:?} before the next submission", self.delay);
            sleep(self.delay).await;
        }
        self.submitted = true;
    }
}
