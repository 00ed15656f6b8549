//! Mouse and keyboard input simulation.
//!
//! The field handlers drive input through the [`InputDriver`] trait;
//! [`EnigoDriver`] is the production backend and [`ScriptedDriver`] records
//! events for tests.

mod driver;
mod scripted;

pub use driver::{EnigoDriver, InputDriver, InputError};
pub use scripted::{ScriptedDriver, SimEvent};
