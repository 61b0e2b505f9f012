//! Web front end
//!
//! Exposes the quote collection over HTTP: an HTML page and a JSON endpoint
//! for each read operation, plus a form route and a JSON route for adding a
//! quote. The collection lives in shared state constructed by the binary and
//! injected into every handler; there is no global singleton.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::pages::{self, AddNotice};
use crate::quotes::QuoteCollection;
use crate::render;

/// Default bind address; all interfaces, same port as the original app.
pub const DEFAULT_ADDR: &str = "0.0.0.0:5001";

/// Shared per-process state handed to each request handler.
///
/// Handlers run concurrently on the tokio runtime, so the collection sits
/// behind a mutex. Every operation is a short synchronous touch of the
/// in-memory list; the lock is never held across an await point.
#[derive(Clone)]
pub struct AppState {
    quotes: Arc<Mutex<QuoteCollection>>,
}

impl AppState {
    /// Create state holding a freshly seeded collection.
    pub fn new() -> Self {
        Self {
            quotes: Arc::new(Mutex::new(QuoteCollection::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON body of `GET /random`.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: String,
    pub timestamp: String,
}

/// JSON body of `GET /api/daily`.
#[derive(Debug, Serialize)]
pub struct DailyQuoteResponse {
    pub quote: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// JSON body of `GET /api/all`.
#[derive(Debug, Serialize)]
pub struct AllQuotesResponse {
    pub quotes: Vec<String>,
}

/// JSON body of `POST /api/add`. `total_quotes` is only present on success.
#[derive(Debug, Serialize)]
pub struct AddQuoteResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_quotes: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct AddQuoteBody {
    #[serde(default)]
    quote: String,
}

/// Build the application router with all routes bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/random", get(random_quote))
        .route("/daily", get(daily_quote_page))
        .route("/api/daily", get(api_daily_quote))
        .route("/all", get(all_quotes_page))
        .route("/api/all", get(api_all_quotes))
        .route("/add", get(add_quote_page).post(add_quote_form))
        .route("/api/add", post(api_add_quote))
        .with_state(state)
}

/// Bind `addr` and serve the app until the process exits.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "quote web app listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let quotes = state.quotes.lock().unwrap();
    Html(pages::random_page(
        quotes.pick_random(),
        &render::timestamp_now(),
    ))
}

async fn random_quote(State(state): State<AppState>) -> Json<QuoteResponse> {
    let quotes = state.quotes.lock().unwrap();
    Json(QuoteResponse {
        quote: quotes.pick_random().to_string(),
        timestamp: render::timestamp_now(),
    })
}

async fn daily_quote_page(State(state): State<AppState>) -> Html<String> {
    let quotes = state.quotes.lock().unwrap();
    Html(pages::daily_page(
        quotes.pick_of_day(Local::now().date_naive()),
        &render::timestamp_now(),
    ))
}

async fn api_daily_quote(State(state): State<AppState>) -> Json<DailyQuoteResponse> {
    let quotes = state.quotes.lock().unwrap();
    Json(DailyQuoteResponse {
        quote: quotes.pick_of_day(Local::now().date_naive()).to_string(),
        timestamp: render::timestamp_now(),
        kind: "daily",
    })
}

async fn all_quotes_page(State(state): State<AppState>) -> Html<String> {
    let quotes = state.quotes.lock().unwrap();
    Html(pages::all_page(quotes.list_all()))
}

async fn api_all_quotes(State(state): State<AppState>) -> Json<AllQuotesResponse> {
    let quotes = state.quotes.lock().unwrap();
    Json(AllQuotesResponse {
        quotes: quotes.list_all().to_vec(),
    })
}

async fn add_quote_page() -> Html<String> {
    Html(pages::add_page(None))
}

async fn add_quote_form(
    State(state): State<AppState>,
    Form(body): Form<AddQuoteBody>,
) -> Html<String> {
    let mut quotes = state.quotes.lock().unwrap();
    let notice = if quotes.add(&body.quote) {
        tracing::debug!(total = quotes.len(), "quote added via form");
        AddNotice::Added(body.quote.trim().to_string())
    } else {
        AddNotice::Invalid
    };
    Html(pages::add_page(Some(&notice)))
}

async fn api_add_quote(State(state): State<AppState>, body: String) -> Json<AddQuoteResponse> {
    // A missing or malformed JSON body counts as an empty candidate.
    let candidate = serde_json::from_str::<AddQuoteBody>(&body)
        .map(|b| b.quote)
        .unwrap_or_default();

    let mut quotes = state.quotes.lock().unwrap();
    if quotes.add(&candidate) {
        tracing::debug!(total = quotes.len(), "quote added via api");
        Json(AddQuoteResponse {
            success: true,
            message: "Quote added successfully!".to_string(),
            total_quotes: Some(quotes.len()),
        })
    } else {
        Json(AddQuoteResponse {
            success: false,
            message: "Please enter a valid quote.".to_string(),
            total_quotes: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::DEFAULT_QUOTES;

    #[tokio::test]
    async fn test_random_quote_returns_member() {
        let state = AppState::new();
        let Json(body) = random_quote(State(state)).await;
        assert!(DEFAULT_QUOTES.contains(&body.quote.as_str()));
        assert_eq!(body.timestamp.len(), 19);
    }

    #[tokio::test]
    async fn test_api_daily_is_stable_within_a_day() {
        let state = AppState::new();
        let Json(first) = api_daily_quote(State(state.clone())).await;
        let Json(second) = api_daily_quote(State(state)).await;
        assert_eq!(first.quote, second.quote);
        assert_eq!(first.kind, "daily");
    }

    #[tokio::test]
    async fn test_api_all_lists_defaults_in_order() {
        let state = AppState::new();
        let Json(body) = api_all_quotes(State(state)).await;
        assert_eq!(body.quotes, DEFAULT_QUOTES);
    }

    #[tokio::test]
    async fn test_api_add_success_reports_total() {
        let state = AppState::new();
        let body = r#"{"quote": "  Fresh insight.  "}"#.to_string();
        let Json(response) = api_add_quote(State(state.clone()), body).await;
        assert!(response.success);
        assert_eq!(response.message, "Quote added successfully!");
        assert_eq!(response.total_quotes, Some(11));

        let Json(all) = api_all_quotes(State(state)).await;
        assert_eq!(all.quotes.last().unwrap(), "Fresh insight.");
    }

    #[tokio::test]
    async fn test_api_add_rejects_blank_quote() {
        let state = AppState::new();
        let body = r#"{"quote": "   "}"#.to_string();
        let Json(response) = api_add_quote(State(state.clone()), body).await;
        assert!(!response.success);
        assert_eq!(response.message, "Please enter a valid quote.");
        assert_eq!(response.total_quotes, None);

        let Json(all) = api_all_quotes(State(state)).await;
        assert_eq!(all.quotes.len(), 10);
    }

    #[tokio::test]
    async fn test_api_add_tolerates_malformed_body() {
        let state = AppState::new();
        let Json(response) = api_add_quote(State(state.clone()), "not json".to_string()).await;
        assert!(!response.success);

        let Json(missing_field) = api_add_quote(State(state), "{}".to_string()).await;
        assert!(!missing_field.success);
    }

    #[tokio::test]
    async fn test_add_quote_form_success_notice() {
        let state = AppState::new();
        let Html(page) = add_quote_form(
            State(state.clone()),
            Form(AddQuoteBody {
                quote: " form quote ".to_string(),
            }),
        )
        .await;
        assert!(page.contains("Quote added successfully"));
        assert!(page.contains("form quote"));

        let Json(all) = api_all_quotes(State(state)).await;
        assert_eq!(all.quotes.last().unwrap(), "form quote");
    }

    #[tokio::test]
    async fn test_add_quote_form_invalid_notice() {
        let state = AppState::new();
        let Html(page) = add_quote_form(
            State(state),
            Form(AddQuoteBody {
                quote: "   ".to_string(),
            }),
        )
        .await;
        assert!(page.contains("Please enter a valid quote."));
    }

    #[tokio::test]
    async fn test_add_quote_serialization_shapes() {
        let success = AddQuoteResponse {
            success: true,
            message: "ok".to_string(),
            total_quotes: Some(11),
        };
        let json = serde_json::to_value(&success).unwrap();
        assert_eq!(json["total_quotes"], 11);

        let failure = AddQuoteResponse {
            success: false,
            message: "no".to_string(),
            total_quotes: None,
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert!(json.get("total_quotes").is_none());

        let daily = DailyQuoteResponse {
            quote: "q".to_string(),
            timestamp: "t".to_string(),
            kind: "daily",
        };
        let json = serde_json::to_value(&daily).unwrap();
        assert_eq!(json["type"], "daily");
    }
}
