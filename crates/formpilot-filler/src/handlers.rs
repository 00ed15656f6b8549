//! Per-field-type input scripts.
//!
//! Each handler runs a fixed click/type/wait choreography against the
//! driver and reports what it did. Timings are part of the protocol: the
//! target UI needs them to register focus changes and render dropdowns.

use std::time::Duration;

use serde_json::json;
use tracing::{debug, warn};

use formpilot_input::InputDriver;
use formpilot_protocols::error::FillError;
use formpilot_protocols::form::{CheckboxOption, FieldKind, Point, SelectCoordinates};
use formpilot_protocols::report::{ClickedOption, FieldReport};

/// Pause after clicking a text input before typing into it.
pub const DELAY_BEFORE_TYPE: Duration = Duration::from_millis(100);
/// Inter-keystroke interval while typing.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(20);
/// Pause after the workspace-switch hotkey before touching the select.
pub const DELAY_AFTER_SWITCH: Duration = Duration::from_millis(500);
/// Pause after opening a dropdown, waiting for it to render.
pub const DELAY_AFTER_OPEN: Duration = Duration::from_millis(300);
/// Pause after typing a search term, waiting for results to filter.
pub const DELAY_AFTER_SEARCH: Duration = Duration::from_millis(500);
/// Pause between consecutive checkbox clicks.
pub const DELAY_BETWEEN_CHECKBOXES: Duration = Duration::from_millis(200);

fn sim(e: formpilot_input::InputError) -> FillError {
    FillError::Simulation(e.to_string())
}

/// Click a text input and type the value into it.
pub fn handle_form_input(
    driver: &mut dyn InputDriver,
    position: Point,
    value: &str,
) -> Result<FieldReport, FillError> {
    debug!(x = position.x, y = position.y, "filling text input");

    driver.click(position).map_err(sim)?;
    driver.sleep(DELAY_BEFORE_TYPE);
    if !value.is_empty() {
        driver.type_text(value, TYPE_INTERVAL).map_err(sim)?;
    }

    Ok(FieldReport {
        success: true,
        field_type: Some(FieldKind::FormInput),
        action: Some("click_and_type".to_string()),
        coordinates: Some(json!({ "x": position.x, "y": position.y })),
        value_entered: Some(value.to_string()),
        ..Default::default()
    })
}

/// Open a searchable select, type the search term, and pick the first result.
///
/// The leading hotkey switches to the workspace holding the form before the
/// dropdown is touched.
pub fn handle_searchable_select(
    driver: &mut dyn InputDriver,
    coordinates: &SelectCoordinates,
    value: &str,
) -> Result<FieldReport, FillError> {
    debug!(search = value, "filling searchable select");

    driver.hotkey(&["win", "ctrl", "left"]).map_err(sim)?;
    driver.sleep(DELAY_AFTER_SWITCH);

    driver.click(coordinates.dropdown).map_err(sim)?;
    driver.sleep(DELAY_AFTER_OPEN);

    driver.click(coordinates.input).map_err(sim)?;
    driver.sleep(DELAY_BEFORE_TYPE);
    if !value.is_empty() {
        driver.type_text(value, TYPE_INTERVAL).map_err(sim)?;
    }
    driver.sleep(DELAY_AFTER_SEARCH);

    driver.click(coordinates.result).map_err(sim)?;

    Ok(FieldReport {
        success: true,
        field_type: Some(FieldKind::SearchableSelect),
        action: Some("open_search_select".to_string()),
        coordinates: serde_json::to_value(coordinates).ok(),
        search_value: Some(value.to_string()),
        ..Default::default()
    })
}

/// Click the checkboxes whose labels match the requested values.
///
/// Matching is a linear scan over the declared options; the first option
/// whose label equals the requested value wins. Values that match nothing
/// are skipped without failing the field.
pub fn handle_checkbox_group(
    driver: &mut dyn InputDriver,
    options: &[CheckboxOption],
    values: &[String],
) -> Result<FieldReport, FillError> {
    let mut clicked = Vec::new();

    for value in values {
        let Some(option) = options.iter().find(|o| o.option_label == *value) else {
            warn!(value, "no checkbox option matches requested value");
            continue;
        };

        driver.click(Point::new(option.x, option.y)).map_err(sim)?;
        clicked.push(ClickedOption {
            option_label: option.option_label.clone(),
            x: option.x,
            y: option.y,
        });
        driver.sleep(DELAY_BETWEEN_CHECKBOXES);
    }

    Ok(FieldReport {
        success: true,
        field_type: Some(FieldKind::CheckboxGroup),
        action: Some("click_checkboxes".to_string()),
        clicked: Some(clicked),
        values_requested: Some(values.to_vec()),
        ..Default::default()
    })
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
