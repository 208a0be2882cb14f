//! HTTP handlers and the routing table

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Form, Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::{error::AppError, models::BookForm, views, AppState};

/// Extractor for a submitted book form.
///
/// Unreadable bodies (wrong content type, malformed encoding) are reported
/// through `AppError` so they get the HTML error page.
pub struct BookFormBody(pub BookForm);

#[async_trait]
impl<S> FromRequest<S> for BookFormBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<BookForm>::from_request(req, state).await?;
        Ok(BookFormBody(form))
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    let catalog = Router::new()
        .route("/", get(books::root))
        .route("/books", get(books::list_books))
        .route("/books/new", get(books::new_book_form).post(books::create_book))
        .route("/books/:id", get(books::edit_book_form).post(books::update_book))
        .route("/books/:id/delete", post(books::delete_book))
        // JSON inspection
        .route("/all", get(books::list_books_json))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state);

    Router::new()
        .merge(catalog)
        .merge(openapi::create_openapi_router())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(fallback)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, views::not_found())
}
