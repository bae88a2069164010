use bmi_model::{BmiResult, Category, StyleTag};
use colored::{Color, Colorize};
use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::calculator::CalculationError;

fn color(tag: StyleTag) -> Color {
    match tag {
        StyleTag::Blue => Color::Blue,
        StyleTag::Green => Color::Green,
        StyleTag::Yellow => Color::Yellow,
        StyleTag::Red => Color::Red,
    }
}

pub fn result(result: &BmiResult) -> String {
    let color = color(result.style_tag());
    format!(
        "Your BMI Result\n{}\n{}",
        format!("{:.2}", result.value()).color(color).bold(),
        result.category().label().color(color),
    )
}

/// One line per result, for batch output.
pub fn summary(result: &BmiResult) -> String {
    format!("{:.2} {}", result.value(), result.category())
        .color(color(result.style_tag()))
        .to_string()
}

pub fn legend() -> String {
    let lines = Category::iter()
        .map(|category| {
            format!("• {}: {}", category.label(), category.range())
                .color(color(category.style_tag()))
                .to_string()
        })
        .join("\n");
    format!("BMI Categories:\n{}", lines)
}

/// A blank form gets a single prompt; otherwise every field message is shown.
pub fn error(error: &CalculationError) -> String {
    match error {
        CalculationError::Incomplete(_) => error.to_string().red().bold().to_string(),
        _ => error
            .messages()
            .iter()
            .map(|message| message.red().to_string())
            .join("\n"),
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<&'a BmiResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<'a> JsonReport<'a> {
    pub fn new(index: Option<usize>, outcome: &'a Result<BmiResult, CalculationError>) -> Self {
        match outcome {
            Ok(result) => Self {
                index,
                result: Some(result),
                errors: Vec::new(),
            },
            Err(e) => Self {
                index,
                result: None,
                errors: e.messages(),
            },
        }
    }
}
