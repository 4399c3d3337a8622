//! Minimal HTML surface: the form page with its single and batch actions, and result pages.

use super::text::{
    BAR_WIDTH, Style, bar_chart, batch_table, fare_line, headline, percentage, probability_line,
};
use crate::passenger::{MAX_AGE, MIN_AGE};
use crate::predict::{Prediction, PredictionPolicy};

const TITLE: &str = "🚢 Titanic Survival Prediction App";

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Titanic Survival Predictor</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
.success {{ background: #e6f4ea; color: #137333; padding: .75rem; }}
.error {{ background: #fce8e6; color: #a50e0e; padding: .75rem; }}
.info {{ background: #e8f0fe; color: #174ea6; padding: .75rem; }}
progress {{ width: 100%; }}
</style>
</head>
<body>
<h1>{TITLE}</h1>
<p>Predict survival based on passenger details</p>
{body}
</body>
</html>
"#
    )
}

pub fn render_form_page() -> String {
    let max_batch = PredictionPolicy::default().max_batch;
    page(&format!(
        r#"<form method="post" action="/">
<p><label>Name <input type="text" name="name"></label></p>
<p><label>Passenger Class
<select name="pclass"><option>1</option><option>2</option><option>3</option></select></label></p>
<p>Sex
<label><input type="radio" name="sex" value="male" checked> Male</label>
<label><input type="radio" name="sex" value="female"> Female</label></p>
<p><label>Age <input type="range" name="age" min="{MIN_AGE}" max="{MAX_AGE}" value="25"
oninput="this.nextElementSibling.value = this.value"><output>25</output></label></p>
<p><button type="submit">Predict Survival</button></p>
</form>
<h2>Batch prediction</h2>
<form method="post" action="/batch">
<p><label>Number of passengers <input type="number" name="count" min="1" max="{max_batch}" value="5"></label></p>
<p><button type="submit">Predict Batch</button></p>
</form>"#
    ))
}

pub fn render_result_page(prediction: &Prediction) -> String {
    let headline = headline(prediction);
    let class = match headline.style {
        Style::Success => "success",
        Style::Error => "error",
    };
    let probability = prediction.result.probability;

    page(&format!(
        r#"<div class="info">{fare}</div>
<div class="{class}">{text}</div>
<p>{probability_text}</p>
<progress max="1" value="{probability:.4}">{percent}</progress>
<p><a href="/">Predict another passenger</a></p>"#,
        fare = escape(&fare_line(prediction.fare)),
        text = escape(&headline.text),
        probability_text = escape(&probability_line(probability)),
        percent = percentage(probability),
    ))
}

pub fn render_batch_page(predictions: &[Prediction]) -> String {
    let survivors = predictions
        .iter()
        .filter(|p| p.result.label.survived())
        .count();

    page(&format!(
        r#"<h2>Batch results</h2>
<pre>{table}</pre>
<pre>{chart}</pre>
<div class="info">{survivors} of {total} passengers would likely survive</div>
<p><a href="/">Back</a></p>"#,
        table = escape(&batch_table(predictions)),
        chart = escape(&bar_chart(predictions, BAR_WIDTH)),
        total = predictions.len(),
    ))
}

pub fn render_error_page(message: &str) -> String {
    page(&format!(
        r#"<div class="error">{}</div>
<p><a href="/">Back</a></p>"#,
        escape(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn form_page_has_every_field() {
        let html = render_form_page();
        for field in [r#"name="name""#, r#"name="pclass""#, r#"name="sex""#, r#"name="age""#] {
            assert!(html.contains(field), "missing {field}");
        }
        assert!(html.contains(r#"min="1""#));
        assert!(html.contains(r#"max="80""#));
    }

    #[test]
    fn form_page_offers_batch_action() {
        let html = render_form_page();
        assert!(html.contains(r#"action="/batch""#));
        assert!(html.contains(r#"name="count" min="1" max="10""#));
        assert!(html.contains("Predict Batch"));
    }

    #[test]
    fn batch_page_lists_rows_in_order() {
        use crate::model::PredictionResult;
        use crate::passenger::{PassengerClass, PassengerInput, Sex};

        let predictions: Vec<Prediction> = [("Ann & Co", 0.8), ("Bob", 0.2)]
            .into_iter()
            .map(|(name, p)| {
                let passenger = PassengerInput::new(name, PassengerClass::Second, Sex::Female, 30);
                let features = passenger.features(40.0);
                Prediction {
                    passenger,
                    fare: 40.0,
                    features,
                    raw_probability: p,
                    result: PredictionResult::new(p, 0.5),
                }
            })
            .collect();

        let html = render_batch_page(&predictions);
        let ann = html.find("Ann &amp; Co").unwrap();
        let bob = html.find("Bob").unwrap();
        assert!(ann < bob);
        assert!(html.contains("<pre>"));
        assert!(html.contains("1 of 2 passengers would likely survive"));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = render_error_page("<script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
