use crate::application::configurator::Configurator;
use crate::domain::catalog::{Item, Price};
use crate::domain::step::StepStatus;
use rust_decimal::RoundingStrategy;
use std::fmt;

const NONE: &str = "–";

/// Formats a price the way German invoices do, e.g. `1.234,50 €`.
pub fn format_eur(price: Price) -> String {
    let rounded = price
        .value()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{frac_part} €")
}

/// Label/value rows describing the current configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub rows: Vec<(&'static str, String)>,
}

impl Summary {
    pub fn of(configurator: &Configurator) -> Self {
        let catalog = configurator.catalog();
        let selection = configurator.selection();

        let vehicle = selection
            .vehicle_id
            .as_deref()
            .and_then(|id| catalog.vehicle(id))
            .map(|v| v.name.clone());
        let color = selection
            .color_code
            .as_deref()
            .and_then(|c| catalog.color(c))
            .map(|c| c.name.clone());
        let upholstery = selection
            .upholstery_code
            .as_deref()
            .and_then(|c| catalog.upholstery(c))
            .map(|u| u.name.clone());

        let rows = vec![
            ("Vehicle", vehicle.unwrap_or_else(|| NONE.to_string())),
            ("Color", color.unwrap_or_else(|| NONE.to_string())),
            ("Upholstery", upholstery.unwrap_or_else(|| NONE.to_string())),
            (
                "Factory options",
                names(&catalog.factory_options, &selection.factory_options),
            ),
            (
                "Accessories",
                names(&catalog.accessories, &selection.accessories),
            ),
            ("Total price", format_eur(configurator.total_price())),
        ];
        Self { rows }
    }
}

fn names(items: &[Item], codes: &[String]) -> String {
    let selected: Vec<&str> = items
        .iter()
        .filter(|item| codes.contains(&item.code))
        .map(|item| item.name.as_str())
        .collect();
    if selected.is_empty() {
        NONE.to_string()
    } else {
        selected.join(", ")
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in &self.rows {
            writeln!(f, "{label:<width$}  {value}")?;
        }
        Ok(())
    }
}

/// One-line step indicator: finished steps are ticked, the current one is bracketed.
pub fn progress_line(configurator: &Configurator) -> String {
    configurator
        .progress()
        .map(|(step, status)| match status {
            StepStatus::Done => format!("✓ {}", step.label()),
            StepStatus::Active => format!("[{} {}]", step.index() + 1, step.label()),
            StepStatus::Pending => format!("{} {}", step.index() + 1, step.label()),
        })
        .collect::<Vec<_>>()
        .join(" > ")
}
