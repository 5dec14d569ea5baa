//! Character-paced typing simulation over a composed reply.

use super::AssistError;
use futures::Stream;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// Per-character delay range for the typing simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingPacing {
    min_ms: u64,
    max_ms: u64,
}

impl TypingPacing {
    /// Creates a pacing range in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::InvalidPacing`] when `min_ms > max_ms`.
    pub const fn new(min_ms: u64, max_ms: u64) -> Result<Self, AssistError> {
        if min_ms > max_ms {
            return Err(AssistError::InvalidPacing { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    /// Draws one delay from the range.
    fn delay(self) -> Duration {
        let millis = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(millis)
    }
}

impl Default for TypingPacing {
    /// Pacing that reads as unhurried typing.
    fn default() -> Self {
        Self {
            min_ms: 15,
            max_ms: 45,
        }
    }
}

/// Streams a reply one character at a time with randomized pacing.
///
/// The stream owns the whole simulation: dropping it cancels any pending
/// delay and nothing else holds the reply, so an unmounted panel leaves no
/// work behind.
pub fn typing_stream(reply: String, pacing: TypingPacing) -> impl Stream<Item = String> {
    async_stream::stream! {
        for ch in reply.chars() {
            sleep(pacing.delay()).await;
            yield ch.to_string();
        }
    }
}
