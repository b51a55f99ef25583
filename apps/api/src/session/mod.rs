//! Server-side chat sessions: transcript + profile, persisted as one JSON
//! document per session.

pub mod handlers;
pub mod models;
pub mod store;
