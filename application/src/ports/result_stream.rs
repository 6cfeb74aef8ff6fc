//! Port for the result side channel.
//!
//! Defines the [`ResultStreamWriter`] trait: an append-only sink that
//! receives [`StreamEvent`]s as invocations are resolved, typically bridged
//! to a long-lived HTTP response by the transport layer.

use toolgate_domain::StreamEvent;

/// Append-only sink for result events.
///
/// Each `write` is a single atomic event. Writes from concurrently resolved
/// parts may interleave in time; consumers reassemble them by
/// `toolCallId`, never by arrival order. The method is synchronous and
/// non-fallible so that a slow or broken consumer can't disturb
/// reconciliation; adapters swallow and log their own I/O failures.
pub trait ResultStreamWriter: Send + Sync {
    /// Append one event.
    fn write(&self, event: StreamEvent);
}

/// No-op implementation for tests and when no stream is attached.
pub struct NoResultStream;

impl ResultStreamWriter for NoResultStream {
    fn write(&self, _event: StreamEvent) {}
}
