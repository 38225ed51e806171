use axum::{
    Router,
    extract::{Json, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::core::{MAX_PERIOD_YEARS, MIN_PERIOD_YEARS, ProjectionParams, project};
use crate::error::ProjectionError;

const MAX_RETURN_PERCENT: f64 = 100.0;

/// Raw request body for `/api/investment_projection`. Every field is
/// optional at the serde level so that missing fields surface as named
/// validation errors instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectionPayload {
    initial_investment: Option<f64>,
    monthly_contribution: Option<f64>,
    investment_period: Option<f64>,
    annual_return: Option<f64>,
    what_if_monthly_contribution: Option<f64>,
    what_if_annual_return: Option<f64>,
}

/// A validated request: the baseline scenario plus the what-if scenario
/// derived from it by substituting the two override fields.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProjectionRequest {
    baseline: ProjectionParams,
    what_if: ProjectionParams,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ProjectionResponse {
    baseline: Vec<f64>,
    what_if: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

fn require_amount(errors: &mut Vec<String>, field: &str, value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Some(v),
        Some(_) => {
            errors.push(format!("{field} must be a finite number >= 0"));
            None
        }
        None => {
            errors.push(format!("{field} is required"));
            None
        }
    }
}

fn require_return_percent(
    errors: &mut Vec<String>,
    field: &str,
    value: Option<f64>,
) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() && (0.0..=MAX_RETURN_PERCENT).contains(&v) => Some(v),
        Some(_) => {
            errors.push(format!("{field} must be between 0 and {MAX_RETURN_PERCENT}"));
            None
        }
        None => {
            errors.push(format!("{field} is required"));
            None
        }
    }
}

fn require_period_years(errors: &mut Vec<String>, field: &str, value: Option<f64>) -> Option<u32> {
    match value {
        Some(v)
            if v.is_finite()
                && v.fract() == 0.0
                && (MIN_PERIOD_YEARS as f64..=MAX_PERIOD_YEARS as f64).contains(&v) =>
        {
            Some(v as u32)
        }
        Some(_) => {
            errors.push(format!(
                "{field} must be an integer between {MIN_PERIOD_YEARS} and {MAX_PERIOD_YEARS}"
            ));
            None
        }
        None => {
            errors.push(format!("{field} is required"));
            None
        }
    }
}

fn build_request(payload: ProjectionPayload) -> Result<ProjectionRequest, ProjectionError> {
    let mut errors = Vec::new();

    let initial_investment =
        require_amount(&mut errors, "initialInvestment", payload.initial_investment);
    let monthly_contribution = require_amount(
        &mut errors,
        "monthlyContribution",
        payload.monthly_contribution,
    );
    let investment_period_years =
        require_period_years(&mut errors, "investmentPeriod", payload.investment_period);
    let annual_return_percent =
        require_return_percent(&mut errors, "annualReturn", payload.annual_return);
    let what_if_monthly_contribution = require_amount(
        &mut errors,
        "whatIfMonthlyContribution",
        payload.what_if_monthly_contribution,
    );
    let what_if_annual_return = require_return_percent(
        &mut errors,
        "whatIfAnnualReturn",
        payload.what_if_annual_return,
    );

    let (
        Some(initial_investment),
        Some(monthly_contribution),
        Some(investment_period_years),
        Some(annual_return_percent),
        Some(what_if_monthly_contribution),
        Some(what_if_annual_return),
    ) = (
        initial_investment,
        monthly_contribution,
        investment_period_years,
        annual_return_percent,
        what_if_monthly_contribution,
        what_if_annual_return,
    )
    else {
        return Err(ProjectionError::Validation(errors));
    };

    let baseline = ProjectionParams {
        initial_investment,
        monthly_contribution,
        investment_period_years,
        annual_return_percent,
    };
    let what_if = ProjectionParams {
        monthly_contribution: what_if_monthly_contribution,
        annual_return_percent: what_if_annual_return,
        ..baseline
    };

    Ok(ProjectionRequest { baseline, what_if })
}

// Monetary wire format. The engine keeps full precision internally.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn run_projection(payload: ProjectionPayload) -> Result<ProjectionResponse, ProjectionError> {
    let request = build_request(payload)?;

    let baseline = project(&request.baseline);
    let what_if = project(&request.what_if);
    if !baseline.iter().chain(what_if.iter()).all(|v| v.is_finite()) {
        return Err(ProjectionError::NonFinite);
    }

    Ok(ProjectionResponse {
        baseline: baseline.into_iter().map(round_to_cents).collect(),
        what_if: what_if.into_iter().map(round_to_cents).collect(),
    })
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/investment_projection", post(projection_handler))
        .route("/api/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(addr).await?;
    info!("what-if projection API listening on http://{addr}");

    axum::serve(listener, app).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn projection_handler(payload: Result<Json<ProjectionPayload>, JsonRejection>) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            warn!("rejected projection request: {rejection}");
            return error_response(
                StatusCode::BAD_REQUEST,
                &format!("invalid JSON payload: {rejection}"),
            );
        }
    };

    match run_projection(payload) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => {
            warn!("rejected projection request: {err}");
            let status = if err.is_validation() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            error_response(status, &err.to_string())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
