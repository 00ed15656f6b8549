//! Batch and whole-form fill execution.

use std::time::Duration;

use serde_json::Value;
use tracing::info;

use formpilot_input::InputDriver;
use formpilot_protocols::error::FillError;
use formpilot_protocols::form::{FormData, FormDefinition};
use formpilot_protocols::report::{BatchReport, FieldReport};

use crate::dispatch::{dispatch_field, process_field};

/// Default pause between consecutive fields of a batch.
pub const DELAY_BETWEEN_FIELDS: Duration = Duration::from_millis(300);

/// Pause after switching to the form workspace, waiting for it to settle.
pub const DELAY_AFTER_FORM_SWITCH: Duration = Duration::from_secs(2);

fn sim(e: formpilot_input::InputError) -> FillError {
    FillError::Simulation(e.to_string())
}

/// Fill a batch of ad hoc field payloads in order.
///
/// Each field gets its own report; a failed field never aborts the rest of
/// the batch. The inter-field delay runs between fields, not after the last.
pub fn fill_fields(
    driver: &mut dyn InputDriver,
    fields: &[Value],
    delay_between_fields: Duration,
) -> Result<BatchReport, FillError> {
    if fields.is_empty() {
        return Err(FillError::NoFields);
    }

    info!(fields = fields.len(), "filling field batch");

    let mut results = Vec::with_capacity(fields.len());
    for (index, field) in fields.iter().enumerate() {
        let report = process_field(driver, field).with_index(index);
        results.push(report);

        if index < fields.len() - 1 {
            driver.sleep(delay_between_fields);
        }
    }

    Ok(BatchReport::from_results(results))
}

/// Fill a stored form from user-supplied data, keyed by field label.
///
/// Switches to the form workspace first, then walks the fields in their
/// declared order. A field with no value in `data` is reported as a failure
/// and skipped without the inter-field delay.
pub fn fill_form(
    driver: &mut dyn InputDriver,
    definition: &FormDefinition,
    data: &FormData,
    delay_between_fields: Duration,
) -> Result<BatchReport, FillError> {
    info!(
        fields = definition.form_fields.len(),
        "filling stored form"
    );

    driver.hotkey(&["win", "ctrl", "right"]).map_err(sim)?;
    driver.sleep(DELAY_AFTER_FORM_SWITCH);

    let total = definition.form_fields.len();
    let mut results = Vec::with_capacity(total);

    for (index, field) in definition.form_fields.iter().enumerate() {
        let label = field.label();

        let Some(value) = data.get(label) else {
            results.push(
                FieldReport::failure(format!("No value provided for field '{label}'"))
                    .with_label(label),
            );
            continue;
        };

        let report = match dispatch_field(driver, field, value) {
            Ok(report) => report,
            Err(err) => FieldReport::failure(err.to_string()),
        };
        results.push(report.with_label(label).with_index(index));

        if index < total - 1 {
            driver.sleep(delay_between_fields);
        }
    }

    Ok(BatchReport::from_results(results))
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
