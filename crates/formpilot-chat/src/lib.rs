//! Conversational intake chat.
//!
//! A session is seeded from a form's JSON Schema and a role-specific system
//! prompt; every assistant reply carries a trailing status marker reporting
//! which schema fields are collected and which are still missing.

mod prompts;
mod service;
mod session;
mod status;

pub use prompts::{system_prompt, IntakeRole, SUMMARY_PROMPT};
pub use service::ChatService;
pub use session::{Session, SessionStore};
pub use status::{parse_status, FieldStatus};
