//! Chat completions client for OpenRouter-compatible gateways.

mod api;
mod openrouter;

pub use openrouter::OpenRouterProvider;
