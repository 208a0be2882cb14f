//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

use super::BookFormBody;
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDraft, BookForm},
    views, AppState,
};

/// Redirect with 302 Found, the status browsers expect after a form post
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

fn page_not_found() -> Response {
    (StatusCode::NOT_FOUND, views::not_found()).into_response()
}

/// Ids that are not integers cannot match a record
fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

pub async fn root() -> Response {
    found("/books")
}

pub async fn list_books(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.books.list().await?;
    Ok(views::index(&books))
}

pub async fn new_book_form() -> Html<String> {
    views::new_book(&BookDraft::default(), &[])
}

pub async fn create_book(
    State(state): State<AppState>,
    BookFormBody(form): BookFormBody,
) -> AppResult<Response> {
    match state.services.books.create(&form).await {
        Ok(_) => Ok(found("/")),
        Err(AppError::Validation(errors)) => {
            let draft = BookDraft::from(form);
            Ok(views::new_book(&draft, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn edit_book_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&id) else {
        return Ok(page_not_found());
    };
    match state.services.books.get(id).await {
        Ok(book) => Ok(views::update_book(id, &BookDraft::from(&book), &[]).into_response()),
        Err(AppError::NotFound(_)) => Ok(page_not_found()),
        Err(e) => Err(e),
    }
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<BookFormBody, AppError>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&id) else {
        return Ok(page_not_found());
    };
    // A missing record takes precedence over an unreadable body
    let form: BookForm = match body {
        Ok(BookFormBody(form)) => form,
        Err(rejection) => {
            return match state.services.books.get(id).await {
                Ok(_) => Err(rejection),
                Err(AppError::NotFound(_)) => Ok(page_not_found()),
                Err(e) => Err(e),
            };
        }
    };
    match state.services.books.update(id, &form).await {
        Ok(_) => Ok(found("/")),
        Err(AppError::NotFound(_)) => Ok(page_not_found()),
        Err(AppError::Validation(errors)) => {
            let draft = BookDraft::from(form).with_id(id);
            Ok(views::update_book(id, &draft, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let deleted = match parse_id(&id) {
        Some(id) => state.services.books.delete(id).await,
        None => Err(AppError::NotFound(format!("Book {} not found", id))),
    };
    match deleted {
        Ok(()) => Ok(found("/")),
        Err(AppError::NotFound(_)) => Ok((
            StatusCode::NOT_FOUND,
            views::error_page(StatusCode::NOT_FOUND, "Book not found"),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

/// List all books as JSON, newest first
#[utoipa::path(
    get,
    path = "/all",
    tag = "books",
    responses(
        (status = 200, description = "All books, newest first", body = Vec<Book>)
    )
)]
pub async fn list_books_json(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}
