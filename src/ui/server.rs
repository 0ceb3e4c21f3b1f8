use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use super::page::render_page;
use crate::app::{submit, AppState};
use crate::display::{Panel, Prediction};
use crate::error::SubmitError;
use crate::form::{parse_submission, CarInput};

/// Build the router for the form page and its JSON twin
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_json))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    serve_on(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_on<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("failed to read listener address")?;
    log::info!("Car price form available at http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
    }
    log::info!("Shutting down");
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    render(&state, None, &Panel::Idle, StatusCode::OK)
}

async fn predict_form(
    State(state): State<Arc<AppState>>,
    payload: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let fields = match payload {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            log::warn!("Rejected submission body: {}", rejection.body_text());
            let panel = Panel::Failed {
                message: format!("invalid input: {}", rejection.body_text()),
            };
            return render(&state, None, &panel, StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    let outcome = parse_submission(&fields)
        .map_err(SubmitError::from)
        .and_then(|input| submit(&state, &input));

    let (status, panel) = match outcome {
        Ok(prediction) => {
            log::info!("Predicted {}", prediction.formatted);
            (StatusCode::OK, Panel::ResultShown { prediction })
        }
        Err(e) => {
            log_failure(&e);
            (
                status_for(&e),
                Panel::Failed {
                    message: e.to_string(),
                },
            )
        }
    };

    render(&state, Some(&fields), &panel, status)
}

async fn predict_json(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CarInput>, JsonRejection>,
) -> Result<Json<Prediction>, (StatusCode, Json<Value>)> {
    let Json(input) = payload.map_err(|rejection| {
        log::warn!("Rejected JSON body: {}", rejection.body_text());
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": rejection.body_text() })),
        )
    })?;

    submit(&state, &input).map(Json).map_err(|e| {
        log_failure(&e);
        (status_for(&e), Json(json!({ "error": e.to_string() })))
    })
}

fn status_for(err: &SubmitError) -> StatusCode {
    if err.is_input_error() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn log_failure(err: &SubmitError) {
    if err.is_input_error() {
        log::warn!("Rejected submission: {}", err);
    } else {
        log::error!("Prediction failed: {}", err);
    }
}

fn render(
    state: &AppState,
    submitted: Option<&HashMap<String, String>>,
    panel: &Panel,
    status: StatusCode,
) -> Response {
    match render_page(&state.reference, submitted, panel) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            log::error!("Failed to render page: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    const FORM: &str = "brand=Land&year=2025&km_driven=1001&fuel=Diesel&seller_type=Individual\
                        &transmission=Automatic&owner=Test+Drive+Car&mileage=15&engine=2200\
                        &max_power=150&seats=7";

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = router(Arc::new(test_state())).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/predict")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_is_idle() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, html) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Predict Price"));
        assert!(!html.contains("Estimated Car showroom Price"));
    }

    #[tokio::test]
    async fn test_form_submission_shows_result() {
        let (status, html) = send(post_form(FORM)).await;
        assert_eq!(status, StatusCode::OK);
        // 1000 * 2025 + 20 (Land)
        assert!(html.contains("₹ 2,025,020.00"));
        assert!(html.contains("<td>20</td>"));
        assert!(html.contains(r#"<option value="Land" selected>"#));
    }

    #[tokio::test]
    async fn test_unknown_brand_is_a_visible_error() {
        let body = FORM.replace("brand=Land", "brand=Tesla");
        let (status, html) = send(post_form(&body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains("encoding failed"));
        assert!(html.contains("Tesla"));
        assert!(!html.contains("Estimated Car showroom Price"));
    }

    #[tokio::test]
    async fn test_out_of_range_is_a_visible_error() {
        let body = FORM.replace("year=2025", "year=2030");
        let (status, html) = send(post_form(&body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains("invalid input"));
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["status"], "ok");
    }

    #[tokio::test]
    async fn test_json_api() {
        let input = json!({
            "brand": "Maruti", "year": 1994, "km_driven": 1, "fuel": "Petrol",
            "seller_type": "Dealer", "transmission": "Manual", "owner": "Second Owner",
            "mileage": 10, "engine": 700, "max_power": 0, "seats": 5
        });
        let (status, body) = send(post_json(input.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let out: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(out["price"], 1_994_001.0);
        assert_eq!(out["formatted"], "₹ 1,994,001.00");
        assert_eq!(out["record"]["seller_type"], 2);
        assert_eq!(out["record"]["owner"], 2);

        let mut bad = input;
        bad["owner"] = json!("Fifth Owner");
        let (status, body) = send(post_json(bad)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let out: Value = serde_json::from_str(&body).unwrap();
        assert!(out["error"].as_str().unwrap().contains("Fifth Owner"));
    }

    #[tokio::test]
    async fn test_json_api_rejects_bad_bodies_as_json() {
        let (status, body) = send(post_json(json!({ "brand": "Maruti", "year": "2015" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let out: Value = serde_json::from_str(&body).unwrap();
        assert!(out["error"].is_string());

        let request = Request::builder()
            .method("POST")
            .uri("/api/predict")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let out: Value = serde_json::from_str(&body).unwrap();
        assert!(out["error"].is_string());
    }

    #[tokio::test]
    async fn test_form_with_wrong_content_type_shows_failed_panel() {
        let request = Request::builder()
            .method("POST")
            .uri("/predict")
            .header("content-type", "text/plain")
            .body(Body::from(FORM))
            .unwrap();
        let (status, html) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains(r#"<p class="error">invalid input"#));
        assert!(html.contains("Predict Price"));
        assert!(!html.contains("Estimated Car showroom Price"));
    }

    #[test]
    fn test_end_to_end_over_tcp() {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                serve_on(listener, Arc::new(test_state()), std::future::pending())
                    .await
                    .unwrap();
            });
        });
        let addr = rx.recv().unwrap();

        let page = ureq::get(&format!("http://{}/", addr))
            .call()
            .unwrap()
            .into_string()
            .unwrap();
        assert!(page.contains("Enter car details below"));

        let result = ureq::post(&format!("http://{}/predict", addr))
            .send_form(&[
                ("brand", "Tata"),
                ("year", "2000"),
                ("km_driven", "1"),
                ("fuel", "CNG"),
                ("seller_type", "Trustmark Dealer"),
                ("transmission", "Manual"),
                ("owner", "Fourth & Above Owner"),
                ("mileage", "40"),
                ("engine", "5000"),
                ("max_power", "200"),
                ("seats", "10"),
            ])
            .unwrap()
            .into_string()
            .unwrap();
        // 1000 * 2000 + 9 (Tata)
        assert!(result.contains("₹ 2,000,009.00"));

        match ureq::post(&format!("http://{}/predict", addr)).send_form(&[("brand", "Tata")]) {
            Err(ureq::Error::Status(code, _)) => assert_eq!(code, 422),
            other => panic!("expected 422, got {:?}", other.map(|r| r.status())),
        }
    }
}
