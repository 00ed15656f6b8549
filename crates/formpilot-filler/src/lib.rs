//! Field dispatch and form execution.
//!
//! One ad hoc field or a whole stored form is turned into a scripted
//! sequence of clicks, keystrokes, and waits against an [`InputDriver`],
//! producing per-field [`FieldReport`]s and an aggregate [`BatchReport`].
//!
//! [`InputDriver`]: formpilot_input::InputDriver
//! [`FieldReport`]: formpilot_protocols::report::FieldReport
//! [`BatchReport`]: formpilot_protocols::report::BatchReport

pub mod dispatch;
pub mod executor;
pub mod handlers;
pub mod schema;
pub mod store;

pub use dispatch::{dispatch_field, process_field};
pub use executor::{fill_fields, fill_form, DELAY_BETWEEN_FIELDS};
pub use schema::{empty_form_data, generate_schema};
pub use store::FormStore;
