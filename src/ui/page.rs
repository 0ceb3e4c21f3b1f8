//! HTML rendering for the single form page.

use std::collections::HashMap;
use std::sync::LazyLock;

use minijinja::{context, Environment};
use serde::Serialize;

use crate::display::Panel;
use crate::encoding::FeatureRecord;
use crate::form::{CHOICES, SLIDERS};
use crate::reference::ReferenceData;

const TEMPLATE_NAME: &str = "index.html";
const TEMPLATE: &str = include_str!("templates/index.html");

/// Compiled once on first render
static ENVIRONMENT: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    if let Err(e) = env.add_template(TEMPLATE_NAME, TEMPLATE) {
        log::error!("Failed to compile page template: {:#}", e);
    }
    env
});

#[derive(Serialize)]
struct ChoiceView<'a> {
    field: &'static str,
    label: &'static str,
    options: &'a [String],
    selected: &'a str,
}

#[derive(Serialize)]
struct SliderView {
    field: &'static str,
    label: &'static str,
    min: i64,
    max: i64,
    step: i64,
    value: i64,
}

#[derive(Serialize)]
struct EchoCell {
    column: &'static str,
    value: i64,
}

/// Render the page. `submitted` holds the raw fields of the last POST, if
/// any, so the controls keep what the user picked.
pub fn render_page(
    reference: &ReferenceData,
    submitted: Option<&HashMap<String, String>>,
    panel: &Panel,
) -> Result<String, minijinja::Error> {
    let submitted_value = |field: &str| submitted.and_then(|s| s.get(field));

    let choices: Vec<ChoiceView> = CHOICES
        .iter()
        .map(|choice| {
            let options = (choice.options)(reference);
            // Unknown values fall back to the first option so the select
            // still shows something valid.
            let selected = submitted_value(choice.field)
                .filter(|v| options.contains(*v))
                .or_else(|| options.first())
                .map(String::as_str)
                .unwrap_or_default();
            ChoiceView {
                field: choice.field,
                label: choice.label,
                options,
                selected,
            }
        })
        .collect();

    let sliders: Vec<SliderView> = SLIDERS
        .iter()
        .map(|slider| {
            let value = submitted_value(slider.field)
                .and_then(|v| v.trim().parse::<i64>().ok())
                .filter(|v| slider.contains(*v))
                .unwrap_or(slider.min);
            SliderView {
                field: slider.field,
                label: slider.label,
                min: slider.min,
                max: slider.max,
                step: slider.step,
                value,
            }
        })
        .collect();

    let echo: Vec<EchoCell> = match panel {
        Panel::ResultShown { prediction } => FeatureRecord::COLUMNS
            .into_iter()
            .zip(prediction.record.cells())
            .map(|(column, value)| EchoCell { column, value })
            .collect(),
        _ => Vec::new(),
    };

    ENVIRONMENT.get_template(TEMPLATE_NAME)?.render(context! {
        choices => choices,
        sliders => sliders,
        panel => panel,
        echo => echo,
    })
}
