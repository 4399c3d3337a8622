use super::types::{
    BatchForm, BatchRequest, BatchResponse, ErrorResponse, HealthResponse, PredictResponse,
    PredictionView,
};
use crate::{Error, model::ModelInfo, passenger::PassengerInput, predict::PredictionService, present};
use axum::{
    Form,
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    http::StatusCode,
    response::{Html, Json},
};
use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PredictionService>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn status_for(e: &Error) -> StatusCode {
    if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn api_error(e: Error) -> ApiError {
    let status = status_for(&e);
    if status.is_server_error() {
        error!("Prediction failed: {}", e);
    } else {
        warn!("Rejected request: {}", e);
    }
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// Body extraction failures are client errors. A wrong content type keeps its 415.
fn rejection_error(status: StatusCode, reason: String) -> ApiError {
    let status = if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
        status
    } else {
        StatusCode::BAD_REQUEST
    };
    warn!("Rejected request body: {}", reason);
    (status, Json(ErrorResponse { error: reason }))
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    rejection_error(rejection.status(), rejection.body_text())
}

fn form_rejection(rejection: FormRejection) -> (StatusCode, Html<String>) {
    let (status, Json(body)) = rejection_error(rejection.status(), rejection.body_text());
    (status, Html(present::render_error_page(&body.error)))
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.service.model_info())
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PassengerInput>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(passenger) = payload.map_err(json_rejection)?;
    let request_id = Uuid::new_v4();
    info!("Received prediction request {} for {}", request_id, passenger.display_name());

    let mut rng = StdRng::from_entropy();
    let prediction = state
        .service
        .predict_one(&passenger, &mut rng)
        .map_err(api_error)?;

    Ok(Json(PredictResponse {
        request_id,
        timestamp: timestamp(),
        prediction: PredictionView::from(&prediction),
        report: present::render_single(&prediction),
    }))
}

pub async fn predict_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>, ApiError> {
    let Json(request) = payload.map_err(json_rejection)?;
    let request_id = Uuid::new_v4();
    info!(
        "Received batch request {} with {} passengers",
        request_id,
        request.passengers.len()
    );

    let mut rng = StdRng::from_entropy();
    let predictions = state
        .service
        .predict_batch(&request.passengers, &mut rng)
        .map_err(api_error)?;

    Ok(Json(BatchResponse {
        request_id,
        timestamp: timestamp(),
        count: predictions.len(),
        predictions: predictions.iter().map(PredictionView::from).collect(),
        rows: present::batch_rows(&predictions),
        table: present::batch_table(&predictions),
        chart: present::bar_chart(&predictions, present::BAR_WIDTH),
        report: present::render_batch(&predictions),
    }))
}

pub async fn form_page() -> Html<String> {
    Html(present::render_form_page())
}

pub async fn form_submit(
    State(state): State<AppState>,
    payload: Result<Form<PassengerInput>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let Form(passenger) = match payload {
        Ok(form) => form,
        Err(rejection) => return form_rejection(rejection),
    };

    let mut rng = StdRng::from_entropy();
    match state.service.predict_one(&passenger, &mut rng) {
        Ok(prediction) => (StatusCode::OK, Html(present::render_result_page(&prediction))),
        Err(e) => {
            let (status, Json(body)) = api_error(e);
            (status, Html(present::render_error_page(&body.error)))
        }
    }
}

pub async fn batch_form_submit(
    State(state): State<AppState>,
    payload: Result<Form<BatchForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let Form(form) = match payload {
        Ok(form) => form,
        Err(rejection) => return form_rejection(rejection),
    };
    info!("Received batch form request for {} passengers", form.count);

    let mut rng = StdRng::from_entropy();
    match state.service.predict_random_batch(form.count, &mut rng) {
        Ok(predictions) => (StatusCode::OK, Html(present::render_batch_page(&predictions))),
        Err(e) => {
            let (status, Json(body)) = api_error(e);
            (status, Html(present::render_error_page(&body.error)))
        }
    }
}
