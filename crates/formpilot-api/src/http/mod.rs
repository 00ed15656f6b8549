//! HTTP handlers and routing.

pub mod chat;
pub mod extract;
pub mod fill;
pub mod forms;
pub mod monitoring;
pub mod routes;
pub mod speech;

#[cfg(test)]
mod testing;

#[cfg(test)]
pub(crate) use testing::test_state;
