//! Book model and form types

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Form fields in display order, used to sort validation messages
const FIELD_ORDER: [&str; 4] = ["title", "author", "genre", "year"];

/// Persisted book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    /// Publication year
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw fields submitted by the new-book and update-book forms.
///
/// Browsers send every input as text, empty inputs included, so nothing is
/// typed until [`BookForm::to_changes`] succeeds.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BookForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "\"Title\" is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "\"Author\" is required"))]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    #[validate(custom(function = "validate_year"))]
    pub year: String,
}

/// Validated field set written by create and update (full replace)
#[derive(Debug, Clone, PartialEq)]
pub struct BookChanges {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

/// Unpersisted book used to fill a form.
///
/// Field values are kept as the user typed them so a rejected submission
/// is redisplayed unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDraft {
    pub id: Option<i32>,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: String,
}

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl BookForm {
    /// Copy of the form with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: self.genre.trim().to_string(),
            year: self.year.trim().to_string(),
        }
    }

    /// Validate the submission against the book schema
    pub fn to_changes(&self) -> Result<BookChanges, Vec<FieldError>> {
        let form = self.trimmed();
        form.validate().map_err(|e| FieldError::from_validation(&e))?;

        Ok(BookChanges {
            year: parse_year(&form.year).ok().flatten(),
            genre: Some(form.genre).filter(|g| !g.is_empty()),
            title: form.title,
            author: form.author,
        })
    }
}

impl BookDraft {
    /// Pin the draft to an existing record
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

impl From<BookForm> for BookDraft {
    fn from(form: BookForm) -> Self {
        Self {
            id: None,
            title: form.title,
            author: form.author,
            genre: form.genre,
            year: form.year,
        }
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            id: Some(book.id),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            year: book.year.map(|y| y.to_string()).unwrap_or_default(),
        }
    }
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flatten validator output into messages ordered like the form
    pub fn from_validation(errors: &ValidationErrors) -> Vec<FieldError> {
        let mut out: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    FieldError::new(field.clone(), message)
                })
            })
            .collect();

        out.sort_by_key(|e| {
            FIELD_ORDER
                .iter()
                .position(|f| *f == e.field)
                .unwrap_or(FIELD_ORDER.len())
        });
        out
    }
}

/// Empty means "no year"; anything else must be a whole number
fn parse_year(year: &str) -> Result<Option<i32>, ValidationError> {
    if year.is_empty() {
        return Ok(None);
    }
    year.parse::<i32>().map(Some).map_err(|_| {
        let mut err = ValidationError::new("integer");
        err.message = Some(Cow::from("\"Year\" must be a whole number"));
        err
    })
}

fn validate_year(year: &str) -> Result<(), ValidationError> {
    parse_year(year).map(|_| ())
}
