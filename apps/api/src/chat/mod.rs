//! Chat API and the pluggable responder backends behind it.
//!
//! All Gemini traffic goes through [`crate::llm_client`]; this module only
//! decides what to send and what to answer when the model is unavailable.

pub mod handlers;
pub mod replies;
pub mod responder;
