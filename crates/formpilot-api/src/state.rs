//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use formpilot_chat::ChatService;
use formpilot_extract::ContextParser;
use formpilot_filler::FormStore;
use formpilot_input::InputDriver;
use formpilot_speech::SpeechProvider;

/// Shared input device handle.
///
/// The device is a process-wide exclusive resource; a fill holds the lock
/// for its whole scripted sequence so concurrent requests cannot interleave
/// clicks and keystrokes.
pub type SharedDriver = Arc<Mutex<Box<dyn InputDriver>>>;

/// Application state shared across handlers.
pub struct AppState {
    pub forms: FormStore,
    pub driver: SharedDriver,
    pub parser: Arc<ContextParser>,
    pub chat: Arc<ChatService>,
    pub speech: Arc<dyn SpeechProvider>,
    /// Default pause between consecutive fields of a batch.
    pub delay_between_fields: Duration,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(
        forms: FormStore,
        driver: SharedDriver,
        parser: Arc<ContextParser>,
        chat: Arc<ChatService>,
        speech: Arc<dyn SpeechProvider>,
        delay_between_fields: Duration,
    ) -> Self {
        Self {
            forms,
            driver,
            parser,
            chat,
            speech,
            delay_between_fields,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Get uptime.
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get request count.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Increment request count.
    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }
}
