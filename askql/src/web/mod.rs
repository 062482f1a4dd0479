// askql/src/web/mod.rs
//
// Browser front-end: one page, one form, plus a JSON endpoint.
//
// ## Endpoints
//
// - `GET /` - Question page
// - `POST /` - Ask (form field `question`) and render the answer
// - `POST /api/ask` - Ask with a JSON body `{"question": "..."}`
// - `GET /health` - Liveness

use askql_core::AskqlError;
use askql_core::application::{Answer, AskPipeline};
use askql_core::domain::{DomainError, QueryOutcome};
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use miette::{IntoDiagnostic, Result as MietteResult};
use minijinja::Environment;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

mod templates;

/// Shared state for all handlers.
pub struct WebState {
    pipeline: AskPipeline,
    templates: Environment<'static>,
    subtitle: String,
}

impl WebState {
    pub fn new(pipeline: AskPipeline, subtitle: String) -> Result<Self, minijinja::Error> {
        let mut templates = Environment::new();
        // The .html name turns on HTML auto-escaping for SQL, rows and errors.
        templates.add_template("index.html", templates::INDEX_TEMPLATE)?;

        Ok(Self {
            pipeline,
            templates,
            subtitle,
        })
    }

    fn render(&self, view: PageView) -> Result<Html<String>, WebError> {
        let html = self
            .templates
            .get_template("index.html")
            .and_then(|tmpl| tmpl.render(&view))
            .map_err(|e| WebError::internal(e.to_string()))?;
        Ok(Html(html))
    }
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

/// What the page shows below the form.
#[derive(Debug, Default, Serialize)]
struct PageView {
    subtitle: String,
    question: String,
    sql: Option<String>,
    rows: Vec<String>,
    no_records: bool,
    success: Option<String>,
    error: Option<String>,
}

impl PageView {
    fn from_answer(subtitle: String, answer: &Answer) -> Self {
        let mut view = Self {
            subtitle,
            question: answer.question.clone(),
            sql: Some(answer.sql.clone()),
            error: answer.error.clone(),
            ..Default::default()
        };

        match &answer.outcome {
            Some(outcome @ QueryOutcome::Rows { .. }) => {
                view.rows = outcome.row_lines();
                view.no_records = view.rows.is_empty();
            }
            Some(QueryOutcome::Executed { message }) => view.success = Some(message.clone()),
            None => {}
        }
        view
    }
}

/// Error response for the JSON API and page failures.
#[derive(Debug, Serialize)]
pub struct WebError {
    #[serde(skip)]
    status: StatusCode,
    error: String,
}

impl WebError {
    fn internal(message: String) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: message,
        }
    }
}

impl From<AskqlError> for WebError {
    fn from(err: AskqlError) -> Self {
        let status = match &err {
            AskqlError::Domain(DomainError::EmptyQuestion) => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            error: err.to_string(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

pub fn router(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(index_page).post(ask_page))
        .route("/api/ask", axum::routing::post(api_ask))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(bind: &str, state: Arc<WebState>) -> MietteResult<()> {
    let listener = tokio::net::TcpListener::bind(bind).await.into_diagnostic()?;
    info!(addr = %listener.local_addr().into_diagnostic()?, "Web UI ready");
    axum::serve(listener, router(state)).await.into_diagnostic()?;
    Ok(())
}

async fn index_page(State(state): State<Arc<WebState>>) -> Result<Html<String>, WebError> {
    state.render(PageView {
        subtitle: state.subtitle.clone(),
        ..Default::default()
    })
}

async fn ask_page(
    State(state): State<Arc<WebState>>,
    Form(request): Form<AskRequest>,
) -> Result<Html<String>, WebError> {
    // Nothing to do until there is a question.
    if request.question.trim().is_empty() {
        return index_page(State(state)).await;
    }

    let view = match state.pipeline.ask(&request.question).await {
        Ok(answer) => PageView::from_answer(state.subtitle.clone(), &answer),
        Err(e) => {
            error!("Question failed before execution: {}", e);
            PageView {
                subtitle: state.subtitle.clone(),
                question: request.question,
                error: Some(e.to_string()),
                ..Default::default()
            }
        }
    };
    state.render(view)
}

async fn api_ask(
    State(state): State<Arc<WebState>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<Answer>, WebError> {
    let answer = state.pipeline.ask(&request.question).await?;
    Ok(Json(answer))
}

async fn health() -> &'static str {
    "ok"
}
