//! # Formpilot API
//!
//! HTTP surface of the formpilot service: click-and-type submission, batch
//! and stored-form fills, schema and template generation, multimodal
//! context extraction, speech, and the conversational intake chat.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{ApiConfig, ApiServer};
pub use state::{AppState, SharedDriver};
