//! In-process result stream backed by a tokio channel.

use tokio::sync::mpsc;
use toolgate_application::ResultStreamWriter;
use toolgate_domain::StreamEvent;
use tracing::debug;

/// Forwards every event to an unbounded mpsc channel.
///
/// The receiving half is typically drained into a long-lived response body.
/// Once the receiver is gone, further events are dropped.
pub struct ChannelStreamWriter {
    tx: mpsc::UnboundedSender<StreamEvent>,
}

impl ChannelStreamWriter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<StreamEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ResultStreamWriter for ChannelStreamWriter {
    fn write(&self, event: StreamEvent) {
        if let Err(e) = self.tx.send(event) {
            debug!(event = ?e.0, "Result stream receiver dropped, discarding event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolgate_domain::ToolOutput;

    #[tokio::test]
    async fn test_events_arrive_in_write_order() {
        let (writer, mut rx) = ChannelStreamWriter::new();
        writer.write(StreamEvent::tool_result("a", ToolOutput::text("1")));
        writer.write(StreamEvent::tool_result("b", ToolOutput::text("2")));
        drop(writer);

        assert_eq!(rx.recv().await.unwrap().tool_call_id(), Some("a"));
        assert_eq!(rx.recv().await.unwrap().tool_call_id(), Some("b"));
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn test_write_after_receiver_dropped_is_ignored() {
        let (writer, rx) = ChannelStreamWriter::new();
        drop(rx);
        writer.write(StreamEvent::error("late"));
    }
}
