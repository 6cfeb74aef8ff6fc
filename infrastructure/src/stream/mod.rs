//! Result stream adapters.
//!
//! Implementations of the [`ResultStreamWriter`](toolgate_application::ResultStreamWriter)
//! port: a JSONL file sink for the CLI and an in-process channel for
//! embedding the reconciler behind a streaming transport.

mod channel;
mod jsonl;

pub use channel::ChannelStreamWriter;
pub use jsonl::JsonlStreamWriter;
