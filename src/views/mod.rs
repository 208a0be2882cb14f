//! Server-side HTML pages
//!
//! Every value that comes from a user or the database goes through
//! [`text`] or [`attr`] before it is written into markup.

pub mod books;

use axum::{http::StatusCode, response::Html};
use html_escape::{encode_double_quoted_attribute, encode_text};

pub use books::{index, new_book, update_book};

/// Escape for element content
pub(crate) fn text(value: &str) -> String {
    encode_text(value).into_owned()
}

/// Escape for a double-quoted attribute value
pub(crate) fn attr(value: &str) -> String {
    encode_double_quoted_attribute(value).into_owned()
}

/// Wrap a page body in the shared document shell
pub(crate) fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/stylesheets/style.css">
  </head>
  <body>
    <div id="wrapper">
{body}
    </div>
  </body>
</html>
"#,
        title = text(title),
        body = body,
    ))
}

pub fn not_found() -> Html<String> {
    layout(
        "Page Not Found",
        r#"      <h2>Page Not Found</h2>
      <p>Sorry! We couldn't find the page you were looking for.</p>
      <p><a class="button" href="/books">Home</a></p>"#,
    )
}

/// Generic error page. `message` is shown to the user as-is (escaped).
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!(
        r#"      <h2>Error</h2>
      <p class="error">{message}</p>
      <p class="status">{status}</p>
      <p><a class="button" href="/books">Home</a></p>"#,
        message = text(message),
        status = text(&status.to_string()),
    );
    layout("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_escapes_title() {
        let Html(page) = layout("<script>", "");
        assert!(page.contains("<title>&lt;script&gt;</title>"));
    }

    #[test]
    fn test_error_page_message() {
        let Html(page) = error_page(StatusCode::NOT_FOUND, "Book not found");
        assert!(page.contains("Book not found"));
        assert!(page.contains("404 Not Found"));
    }

    #[test]
    fn test_attr_escapes_quotes() {
        assert_eq!(attr(r#"a "b""#), "a &quot;b&quot;");
    }
}
