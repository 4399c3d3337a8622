use crate::predict::Prediction;
use serde::Serialize;
use tabled::{Table, Tabled};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Default width of progress bars and chart bars, in cells.
pub const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub style: Style,
    pub text: String,
}

pub fn headline(prediction: &Prediction) -> Headline {
    if prediction.result.label.survived() {
        Headline {
            style: Style::Success,
            text: format!("✅ {} would likely SURVIVE", prediction.name()),
        }
    } else {
        Headline {
            style: Style::Error,
            text: format!("❌ {} would likely NOT survive", prediction.name()),
        }
    }
}

pub fn percentage(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

pub fn fare_line(fare: f64) -> String {
    format!("🎟️ Randomized Fare: £{fare:.2}")
}

pub fn probability_line(probability: f64) -> String {
    format!("📊 Survival Probability: {}", percentage(probability))
}

fn filled_cells(probability: f64, width: usize) -> usize {
    ((probability.clamp(0.0, 1.0) * width as f64).round() as usize).min(width)
}

/// Text meter, e.g. `██████████░░░░░░░░░░` for 0.5 at width 20.
pub fn progress_bar(probability: f64, width: usize) -> String {
    let filled = filled_cells(probability, width);
    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, width - filled));
    bar
}

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct BatchRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Class")]
    pub class: u8,
    #[tabled(rename = "Sex")]
    pub sex: String,
    #[tabled(rename = "Age")]
    pub age: u8,
    #[tabled(rename = "Fare")]
    pub fare: String,
    #[tabled(rename = "Probability")]
    pub probability: String,
    #[tabled(rename = "Outcome")]
    pub outcome: String,
}

pub fn batch_rows(predictions: &[Prediction]) -> Vec<BatchRow> {
    predictions
        .iter()
        .enumerate()
        .map(|(i, prediction)| BatchRow {
            index: i + 1,
            name: prediction.name().to_string(),
            class: prediction.passenger.class.number(),
            sex: prediction.passenger.sex.to_string(),
            age: prediction.passenger.age,
            fare: format!("£{:.2}", prediction.fare),
            probability: percentage(prediction.result.probability),
            outcome: prediction.result.label.to_string(),
        })
        .collect()
}

pub fn batch_table(predictions: &[Prediction]) -> String {
    Table::new(batch_rows(predictions)).to_string()
}

/// One horizontal bar per passenger, labels padded to a common width.
pub fn bar_chart(predictions: &[Prediction], width: usize) -> String {
    let labels: Vec<String> = predictions
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}", i + 1, p.name()))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    predictions
        .iter()
        .zip(&labels)
        .map(|(prediction, label)| {
            let pad = label_width - label.chars().count();
            format!(
                "{}{} │{} {}",
                label,
                " ".repeat(pad),
                progress_bar(prediction.result.probability, width),
                percentage(prediction.result.probability)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_single(prediction: &Prediction) -> String {
    let probability = prediction.result.probability;
    [
        fare_line(prediction.fare),
        headline(prediction).text,
        probability_line(probability),
        format!("{} {}", progress_bar(probability, BAR_WIDTH), percentage(probability)),
    ]
    .join("\n")
}

pub fn render_batch(predictions: &[Prediction]) -> String {
    let survivors = predictions
        .iter()
        .filter(|p| p.result.label.survived())
        .count();
    format!(
        "{}\n\n{}\n\n{} of {} passengers would likely survive",
        batch_table(predictions),
        bar_chart(predictions, BAR_WIDTH),
        survivors,
        predictions.len()
    )
}
