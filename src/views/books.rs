//! Book list and form pages

use axum::response::Html;

use super::{attr, layout, text};
use crate::models::{Book, BookDraft, FieldError};

/// Book list, in the order given
pub fn index(books: &[Book]) -> Html<String> {
    let rows: String = books
        .iter()
        .map(|book| {
            format!(
                r#"          <tr>
            <td><a href="/books/{id}">{title}</a></td>
            <td>{author}</td>
            <td>{genre}</td>
            <td>{year}</td>
          </tr>
"#,
                id = book.id,
                title = text(&book.title),
                author = text(&book.author),
                genre = text(book.genre.as_deref().unwrap_or("")),
                year = book.year.map(|y| y.to_string()).unwrap_or_default(),
            )
        })
        .collect();

    let body = format!(
        r#"      <h1>Books</h1>
      <p><a class="button" href="/books/new">Create New Book</a></p>
      <table>
        <thead>
          <tr>
            <th>Title</th>
            <th>Author</th>
            <th>Genre</th>
            <th>Year</th>
          </tr>
        </thead>
        <tbody>
{rows}        </tbody>
      </table>"#
    );
    layout("Books", &body)
}

pub fn new_book(draft: &BookDraft, errors: &[FieldError]) -> Html<String> {
    let body = format!(
        "      <h1>New Book</h1>\n{}",
        book_form("/books/new", draft, errors, "Create New Book")
    );
    layout("New Book", &body)
}

/// Edit form for an existing record.
///
/// The form posts back to the draft's id, which callers pin to the path id
/// when redisplaying a rejected update.
pub fn update_book(id: i32, draft: &BookDraft, errors: &[FieldError]) -> Html<String> {
    let title = if draft.title.trim().is_empty() {
        "Update Book"
    } else {
        draft.title.as_str()
    };
    let body = format!(
        r#"      <h1>Update Book</h1>
{form}
      <form method="post" action="/books/{id}/delete" onsubmit="return confirm('Do you really want to delete this book?');">
        <p><input class="button" type="submit" value="Delete Book"></p>
      </form>"#,
        form = book_form(&format!("/books/{}", id), draft, errors, "Update Book"),
    );
    layout(title, &body)
}

fn book_form(action: &str, draft: &BookDraft, errors: &[FieldError], submit: &str) -> String {
    let mut html = String::new();

    if !errors.is_empty() {
        html.push_str("      <div class=\"error\">\n        <h2>Oooops!</h2>\n        <ul>\n");
        for error in errors {
            html.push_str(&format!("          <li>{}</li>\n", text(&error.message)));
        }
        html.push_str("        </ul>\n      </div>\n");
    }

    html.push_str(&format!(
        "      <form method=\"post\" action=\"{}\">\n",
        attr(action)
    ));
    for (name, label, value) in [
        ("title", "Title", &draft.title),
        ("author", "Author", &draft.author),
        ("genre", "Genre", &draft.genre),
        ("year", "Year", &draft.year),
    ] {
        html.push_str(&format!(
            r#"        <p>
          <label for="{name}">{label}</label>
          <input name="{name}" type="text" id="{name}" value="{value}">
        </p>
"#,
            value = attr(value),
        ));
    }
    html.push_str(&format!(
        r#"        <p>
          <input class="button" type="submit" value="{submit}">
          <a class="button" href="/books">Cancel</a>
        </p>
      </form>"#,
        submit = attr(submit),
    ));
    html
}
