use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    self, Inputs, ValidationError, ValidationErrors, WithdrawalPlan, check_girl_age,
    check_investment, check_withdrawal_age, check_withdrawal_amount,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

/// The calculator form as the browser submits it. Every field is optional;
/// missing fields fall back to the form's initial values.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    monthly_investment: Option<f64>,
    girl_age: Option<f64>,
    is_withdrawal_enabled: Option<bool>,
    withdrawal_age: Option<f64>,
    withdrawal_amount: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct Form {
    monthly_investment: f64,
    girl_age: f64,
    is_withdrawal_enabled: bool,
    withdrawal_age: f64,
    withdrawal_amount: f64,
}

fn default_form() -> Form {
    Form {
        monthly_investment: 4_000.0,
        girl_age: 1.0,
        is_withdrawal_enabled: false,
        withdrawal_age: 18.0,
        withdrawal_amount: 100_000.0,
    }
}

fn form_from_payload(payload: ProjectPayload) -> Form {
    let mut form = default_form();
    if let Some(v) = payload.monthly_investment {
        form.monthly_investment = v;
    }
    if let Some(v) = payload.girl_age {
        form.girl_age = v;
    }
    if let Some(v) = payload.is_withdrawal_enabled {
        form.is_withdrawal_enabled = v;
    }
    if let Some(v) = payload.withdrawal_age {
        form.withdrawal_age = v;
    }
    if let Some(v) = payload.withdrawal_amount {
        form.withdrawal_amount = v;
    }
    form
}

fn inputs_from_form(form: Form) -> Inputs {
    Inputs {
        monthly_investment: form.monthly_investment,
        girl_age: form.girl_age,
        withdrawal: form.is_withdrawal_enabled.then_some(WithdrawalPlan {
            age: form.withdrawal_age,
            amount: form.withdrawal_amount,
        }),
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiField {
    #[serde(alias = "monthlyInvestment", alias = "monthly_investment")]
    Investment,
    #[serde(alias = "girlAge", alias = "girl_age")]
    Age,
    #[serde(alias = "withdrawalAge", alias = "withdrawal_age")]
    WithdrawalAge,
    #[serde(alias = "withdrawalAmount", alias = "withdrawal_amount")]
    WithdrawalAmount,
}

#[derive(Debug, Deserialize)]
struct ValidatePayload {
    field: ApiField,
    value: String,
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldErrorsBody {
    investment: Option<String>,
    age: Option<String>,
    withdrawal_age: Option<String>,
    withdrawal_amount: Option<String>,
}

impl From<&ValidationErrors> for FieldErrorsBody {
    fn from(errors: &ValidationErrors) -> Self {
        let render = |slot: &Option<ValidationError>| slot.as_ref().map(ToString::to_string);
        FieldErrorsBody {
            investment: render(&errors.investment),
            age: render(&errors.age),
            withdrawal_age: render(&errors.withdrawal_age),
            withdrawal_amount: render(&errors.withdrawal_amount),
        }
    }
}

#[derive(Debug, Serialize)]
struct FieldErrorsResponse {
    errors: FieldErrorsBody,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .route("/api/validate", get(validate_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    log::info!("SSY calculator listening on http://{addr}");
    log::info!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    json_response(
        StatusCode::NOT_FOUND,
        ErrorResponse {
            error: "Not found".to_string(),
        },
    )
}

async fn project_get_handler(Query(payload): Query<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_post_handler(Json(payload): Json<ProjectPayload>) -> Response {
    project_handler_impl(payload).await
}

async fn project_handler_impl(payload: ProjectPayload) -> Response {
    let inputs = inputs_from_form(form_from_payload(payload));
    match core::run_projection(&inputs) {
        Ok(result) => json_response(StatusCode::OK, result),
        Err(errors) => {
            for (field, error) in errors.iter() {
                log::debug!("projection rejected: {field}: {error}");
            }
            json_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                FieldErrorsResponse {
                    errors: (&errors).into(),
                },
            )
        }
    }
}

async fn validate_handler(Query(payload): Query<ValidatePayload>) -> Response {
    let error = field_error(payload.field, &payload.value);
    json_response(
        StatusCode::OK,
        ValidateResponse {
            error: error.map(|e| e.to_string()),
        },
    )
}

/// Single-field check backing the form's immediate feedback. Non-numeric raw
/// text maps to `InvalidNumber` before any range rule runs.
fn field_error(field: ApiField, raw: &str) -> Option<ValidationError> {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return Some(ValidationError::InvalidNumber);
    };
    match field {
        ApiField::Investment => check_investment(value).err(),
        ApiField::Age => check_girl_age(value).err(),
        ApiField::WithdrawalAge => check_withdrawal_age(value).err(),
        ApiField::WithdrawalAmount => check_withdrawal_amount(value).err(),
    }
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn payload_from_json(json: &str) -> ProjectPayload {
        serde_json::from_str(json).expect("payload should parse")
    }

    #[test]
    fn empty_payload_uses_form_defaults() {
        let form = form_from_payload(payload_from_json("{}"));
        assert_approx(form.monthly_investment, 4_000.0);
        assert_approx(form.girl_age, 1.0);
        assert!(!form.is_withdrawal_enabled);
        assert_approx(form.withdrawal_age, 18.0);
        assert_approx(form.withdrawal_amount, 100_000.0);
    }

    #[test]
    fn payload_parses_web_keys() {
        let form = form_from_payload(payload_from_json(
            r#"{
              "monthlyInvestment": 2500,
              "girlAge": 5,
              "isWithdrawalEnabled": true,
              "withdrawalAge": 19,
              "withdrawalAmount": 50000
            }"#,
        ));
        assert_approx(form.monthly_investment, 2_500.0);
        assert_approx(form.girl_age, 5.0);
        assert!(form.is_withdrawal_enabled);
        assert_approx(form.withdrawal_age, 19.0);
        assert_approx(form.withdrawal_amount, 50_000.0);
    }

    #[test]
    fn disabled_withdrawal_fields_are_ignored() {
        let inputs = inputs_from_form(form_from_payload(payload_from_json(
            r#"{"withdrawalAge": 19, "withdrawalAmount": 1}"#,
        )));
        assert!(inputs.withdrawal.is_none());
    }

    #[test]
    fn projection_response_serializes_original_field_names() {
        let inputs = inputs_from_form(form_from_payload(payload_from_json("{}")));
        let result = core::run_projection(&inputs).expect("defaults are valid");
        let json = serde_json::to_string(&result).expect("result should serialize");

        assert!(json.contains("\"yearlyData\""));
        assert!(json.contains("\"monthlyInvestment\""));
        assert!(json.contains("\"closingBalance\""));
        assert!(json.contains("\"totalInvestment\""));
        assert!(json.contains("\"totalInterest\""));
        assert!(json.contains("\"maturityValue\""));
        assert!(json.contains("\"totalWithdrawal\""));
        assert_approx(result.maturity_value, 2_298_278.134376022);
    }

    #[test]
    fn validation_failure_fills_the_matching_error_slots() {
        let inputs = inputs_from_form(form_from_payload(payload_from_json(
            r#"{"monthlyInvestment": 10, "girlAge": 14}"#,
        )));
        let errors = core::run_projection(&inputs).expect_err("out-of-range inputs");
        let body = FieldErrorsBody::from(&errors);

        assert!(body.investment.expect("slot set").contains("at least"));
        assert!(body.age.is_some());
        assert!(body.withdrawal_age.is_none());
        assert!(body.withdrawal_amount.is_none());

        let json = serde_json::to_string(&FieldErrorsResponse {
            errors: FieldErrorsBody::from(&errors),
        })
        .expect("errors should serialize");
        assert!(json.contains("\"withdrawalAge\":null"));
    }

    #[test]
    fn field_error_reports_non_numeric_before_range() {
        assert_eq!(
            field_error(ApiField::Investment, "four thousand"),
            Some(ValidationError::InvalidNumber)
        );
        assert_eq!(field_error(ApiField::Investment, "4000"), None);
        assert!(matches!(
            field_error(ApiField::Investment, "10"),
            Some(ValidationError::InvestmentOutOfRange { .. })
        ));
        assert!(matches!(
            field_error(ApiField::WithdrawalAge, "25"),
            Some(ValidationError::WithdrawalAgeOutOfRange { .. })
        ));
        assert_eq!(field_error(ApiField::Age, "3"), None);
        assert!(matches!(
            field_error(ApiField::WithdrawalAmount, "-1"),
            Some(ValidationError::WithdrawalAmountNotPositive)
        ));
    }
}
