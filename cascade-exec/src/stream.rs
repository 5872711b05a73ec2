// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::pin::pin;

use cascade_core::{Chain, Result};
use futures::{Stream, StreamExt};

use crate::debug;
use crate::options::DriveReport;

/// Push every item of `stream` into `chain` as it arrives, then finalize the
/// chain once the stream ends.
///
/// Each push runs the whole cascade before the next item is awaited. On error
/// the rest of the stream is not polled and the chain is not finalized.
///
/// ```
/// use cascade_core::ChainBuilder;
/// use cascade_exec::feed_stream;
/// use cascade_stages::{Enumerator, Sink, Splitter};
/// use futures::stream;
///
/// # #[tokio::main]
/// # async fn main() -> cascade_core::Result<()> {
/// let mut head = ChainBuilder::<String>::new()
///     .stage(Splitter::new)
///     .stage(Enumerator::new)
///     .stage(Sink::stdout)
///     .build()?;
///
/// let chunks = stream::iter(vec!["first\nsec".to_string(), "ond\n".to_string()]);
/// let report = feed_stream(chunks, &mut head).await?;
///
/// assert_eq!(report.chunks, 2);
/// assert!(head.is_finished());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// The first error returned by a push or by the final flush.
pub async fn feed_stream<T, S>(stream: S, chain: &mut Chain<T>) -> Result<DriveReport>
where
    S: Stream<Item = T>,
{
    let mut stream = pin!(stream);
    let mut report = DriveReport::default();

    while let Some(unit) = stream.next().await {
        chain.push(unit)?;
        report.chunks += 1;
    }

    chain.finalize()?;
    debug!("stream ended after {} units", report.chunks);
    Ok(report)
}
