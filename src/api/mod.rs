//! Remote collaborators.
//!
//! Two thin HTTP clients: the hosted CRUD backend (activity sync, feedback,
//! chat history, leaderboard) and the assistant proxy (chat completion).
//! Both convert failures into [`UpstreamError`](crate::libs::error::UpstreamError)
//! at the boundary - the timer core never sees an upstream failure as an
//! exception: the assistant degrades to a fixed fallback message and
//! backend writes are logged and swallowed.

pub mod assistant;
pub mod backend;

pub use assistant::AssistantClient;
pub use backend::BackendClient;
