//! Rendering of predictions for people: text reports and HTML pages.
//!
//! Everything here is a pure function of a [`Prediction`](crate::predict::Prediction).

mod html;
mod text;

pub use html::{render_batch_page, render_error_page, render_form_page, render_result_page};
pub use text::*;
