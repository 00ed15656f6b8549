//! Input simulation handlers.
//!
//! All three handlers funnel through [`with_driver`], which moves the
//! scripted sequence onto a blocking thread and holds the device lock for
//! its whole duration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use formpilot_filler::{fill_fields as run_fill_fields, fill_form as run_fill_form};
use formpilot_input::InputDriver;
use formpilot_protocols::form::{FormData, Point};
use formpilot_protocols::report::BatchReport;

use crate::error::ApiError;
use crate::state::AppState;

/// Pause after the click target is reached, before clicking.
const DELAY_BEFORE_CLICK: Duration = Duration::from_millis(500);

/// Pause between the click and the first keystroke.
const DELAY_BEFORE_TYPE: Duration = Duration::from_millis(100);

/// Inter-key interval while typing.
const TYPE_INTERVAL: Duration = Duration::from_millis(20);

/// Request to click at a ratio position and type text.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// Horizontal position as a fraction of the screen width.
    pub x: f64,

    /// Vertical position as a fraction of the screen height.
    pub y: f64,

    /// Text typed after the click.
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub screen_size: ScreenSize,
    pub click_position: Point,
}

/// Request to fill a batch of ad hoc fields.
#[derive(Debug, Deserialize)]
pub struct FillFieldsRequest {
    pub fields: Vec<Value>,

    /// Pause between consecutive fields, in seconds. Defaults to the
    /// configured delay.
    pub delay_between_fields: Option<f64>,
}

/// Request to fill a stored form.
#[derive(Debug, Deserialize)]
pub struct FillFormRequest {
    /// Values keyed by field label.
    pub data: FormData,

    /// Pause between consecutive fields, in seconds.
    pub delay_between_fields: Option<f64>,
}

/// Run a closure against the exclusive input device on a blocking thread.
async fn with_driver<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&mut dyn InputDriver) -> Result<T, ApiError> + Send + 'static,
{
    let driver = Arc::clone(&state.driver);
    tokio::task::spawn_blocking(move || {
        let mut guard = driver
            .lock()
            .map_err(|_| ApiError::Internal("input device lock poisoned".to_string()))?;
        f(guard.as_mut())
    })
    .await
    .map_err(|e| ApiError::Internal(format!("input task failed: {e}")))?
}

/// POST /submit
///
/// Click at a position given as screen-size ratios and type the text.
/// Ratios outside `[0, 1]` are clamped to the screen edge.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    state.increment_requests();

    let response = with_driver(&state, move |driver| {
        let (width, height) = driver.screen_size()?;

        let x = (request.x.clamp(0.0, 1.0) * f64::from(width)) as i32;
        let y = (request.y.clamp(0.0, 1.0) * f64::from(height)) as i32;
        let position = Point::new(x, y);

        driver.sleep(DELAY_BEFORE_CLICK);
        driver.click(position)?;
        driver.sleep(DELAY_BEFORE_TYPE);
        driver.type_text(&request.text, TYPE_INTERVAL)?;

        info!(x, y, chars = request.text.chars().count(), "submit completed");

        Ok(SubmitResponse {
            success: true,
            message: format!("Clicked at ({x}, {y}) and typed text"),
            screen_size: ScreenSize { width, height },
            click_position: position,
        })
    })
    .await?;

    Ok(Json(response))
}

/// POST /fill-fields
///
/// Fill a batch of ad hoc field payloads. Partial failures come back as
/// per-field reports in a 200 response; an empty batch is a 400.
pub async fn fill_fields(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FillFieldsRequest>,
) -> Result<Json<BatchReport>, ApiError> {
    state.increment_requests();

    let delay = field_delay(&state, request.delay_between_fields)?;

    let report = with_driver(&state, move |driver| {
        run_fill_fields(driver, &request.fields, delay).map_err(ApiError::from)
    })
    .await?;

    Ok(Json(report))
}

/// POST /forms/{name}/fill
///
/// Fill a stored form from data keyed by field label.
pub async fn fill_form(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(request): Json<FillFormRequest>,
) -> Result<Json<BatchReport>, ApiError> {
    state.increment_requests();

    let definition = state.forms.load(&name)?;
    let delay = field_delay(&state, request.delay_between_fields)?;

    let report = with_driver(&state, move |driver| {
        run_fill_form(driver, &definition, &request.data, delay).map_err(ApiError::from)
    })
    .await?;

    Ok(Json(report))
}

fn field_delay(state: &AppState, seconds: Option<f64>) -> Result<Duration, ApiError> {
    match seconds {
        None => Ok(state.delay_between_fields),
        // Rejects negative, NaN, infinite, and over-range values.
        Some(s) => Duration::try_from_secs_f64(s).map_err(|_| {
            ApiError::BadRequest(format!("Invalid delay_between_fields: {s}"))
        }),
    }
}

#[cfg(test)]
#[path = "fill_tests.rs"]
mod tests;
