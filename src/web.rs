//! Local web front end for the alerts form
//!
//! Endpoints:
//!   GET  /        - Form page with the current results and error regions
//!   POST /        - Submit the form (field `state`), returns the updated page
//!   GET  /health  - Health check
//!
//! The page is a single shared instance, like one open browser tab.

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::fmt::Write;
use std::sync::{Arc, Mutex, PoisonError};
use tower_http::trace::TraceLayer;

use crate::client::AlertsSource;
use crate::controller::AlertsFormController;
use crate::view::Page;

pub type SharedController = Arc<AlertsFormController<Box<dyn AlertsSource>>>;

#[derive(Clone)]
pub struct AppState {
    pub controller: SharedController,
    pub page: Arc<Mutex<Page>>,
}

impl AppState {
    pub fn new(controller: AlertsFormController<Box<dyn AlertsSource>>) -> Self {
        Self {
            controller: Arc::new(controller),
            page: Arc::new(Mutex::new(Page::new())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub state: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_page).post(submit))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn show_page(State(state): State<AppState>) -> Html<String> {
    let page = state.page.lock().unwrap_or_else(PoisonError::into_inner);
    Html(page.to_html())
}

async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Html<String> {
    state
        .page
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .input = form.state.clone();

    state.controller.submit(&form.state, &*state.page).await;

    let page = state.page.lock().unwrap_or_else(PoisonError::into_inner);
    Html(page.to_html())
}

impl Page {
    /// Full HTML document for the form page
    pub fn to_html(&self) -> String {
        let mut results = String::new();
        for element in self.results().children() {
            let _ = write!(
                results,
                "\n      <{tag} class=\"{class}\">{text}</{tag}>",
                tag = element.tag(),
                class = element.class_name(),
                text = escape_html(&element.text),
            );
        }

        let error_class = if self.error().is_visible() {
            "error"
        } else {
            "error hidden"
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Weather Alerts</title>
  <style>
    .hidden {{ display: none; }}
    .error {{ color: #b00020; }}
    .alert-card {{ border: 1px solid #ccc; border-radius: 4px; margin: 6px 0; padding: 8px; }}
  </style>
</head>
<body>
  <h1>Active Weather Alerts</h1>
  <form method="post" action="/">
    <input id="state-input" name="state" type="text" placeholder="State name or code" value="{input}">
    <button id="submit-button" type="submit">Get Alerts</button>
  </form>
  <div id="error-message" class="{error_class}">{error}</div>
  <div id="alerts-display">{results}
  </div>
</body>
</html>
"#,
            input = escape_html(&self.input),
            error = escape_html(self.error().text()),
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlertsError;
    use crate::models::{AlertsResponse, Feature};
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    struct FixedSource;

    #[async_trait]
    impl AlertsSource for FixedSource {
        async fn fetch_alerts(&self, code: &str) -> Result<AlertsResponse, AlertsError> {
            match code {
                "TX" => Ok(AlertsResponse {
                    title: "Alerts".into(),
                    features: vec![Feature::with_headline("Flash Flood Warning <Travis & Hays>")],
                }),
                _ => Err(AlertsError::Transport {
                    status: 404,
                    reason: "Not Found".into(),
                }),
            }
        }
    }

    fn app() -> Router {
        let controller = AlertsFormController::new(Box::new(FixedSource) as Box<dyn AlertsSource>);
        router(AppState::new(controller))
    }

    async fn post_state(app: Router, state: &str) -> String {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("state={state}")))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_initial_page_hides_error() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(html.contains(r#"<div id="error-message" class="error hidden"></div>"#));
        assert!(html.contains(r#"id="alerts-display""#));
        assert!(!html.contains("alert-card\">"));
    }

    #[tokio::test]
    async fn test_submit_renders_escaped_cards() {
        let html = post_state(app(), "texas").await;

        assert!(html.contains(r#"<h3 class="summary-title">Alerts: 1</h3>"#));
        assert!(html.contains(
            r#"<div class="alert-card">Flash Flood Warning &lt;Travis &amp; Hays&gt;</div>"#
        ));
        assert!(html.contains(r#"value="""#));
    }

    #[tokio::test]
    async fn test_error_keeps_previous_results() {
        let app = app();
        post_state(app.clone(), "TX").await;
        let html = post_state(app, "NM").await;

        assert!(html.contains(r#"<div id="error-message" class="error">API Error: Not Found</div>"#));
        assert!(html.contains(r#"<h3 class="summary-title">Alerts: 1</h3>"#));
        assert!(html.contains(r#"value="NM""#));
    }

    #[tokio::test]
    async fn test_validation_message() {
        let html = post_state(app(), "X").await;
        assert!(html.contains("Please enter a valid US state name or 2-letter code."));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
