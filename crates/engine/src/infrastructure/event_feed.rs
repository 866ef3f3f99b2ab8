//! JSON-lines live event feed.
//!
//! Reads one [`LiveEvent`] per line (e.g. piped from a platform bridge on
//! stdin) and dispatches it. Blank and malformed lines are skipped.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

use crate::api::live_events::{dispatch, LiveEvent, LiveEventHandler};

/// Feed events to `handler` until EOF or cancellation.
///
/// Returns the number of events dispatched.
pub async fn run_json_lines<R>(
    reader: R,
    handler: &dyn LiveEventHandler,
    cancel: CancellationToken,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut dispatched = 0;

    loop {
        let line = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            tracing::info!("Live event feed closed");
            break;
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<LiveEvent>(line) {
            Ok(event) => {
                dispatch(handler, event).await;
                dispatched += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, line = %line, "Skipping malformed live event");
            }
        }
    }

    Ok(dispatched)
}
