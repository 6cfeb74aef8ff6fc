//! Request session domain.
//!
//! - [`entities::SessionId`]: identifies the conversation a request belongs to
//! - [`entities::RequestContext`]: per-request context built by the entry point
//! - [`stream::StreamEvent`]: events written to the result side channel

pub mod entities;
pub mod stream;
