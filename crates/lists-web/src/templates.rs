//! HTML pages.
//!
//! Every page shares one layout: a `To-Do` title, a heading, and the new-item
//! form (`id_new_item`). All dynamic text goes through [`escape_html`].

use std::fmt::Write;

use lists_core::entities::{Item, List};

pub const PAGE_TITLE: &str = "To-Do lists";
pub const INPUT_ID: &str = "id_new_item";
pub const INPUT_NAME: &str = "item_text";
pub const INPUT_PLACEHOLDER: &str = "Enter a to-do item";
pub const LIST_TABLE_ID: &str = "id_list_table";

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(heading: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n\
         <div class=\"row\">\n\
         <div class=\"col-md-6 col-md-offset-3 jumbotron\">\n\
         <div class=\"text-center\">\n\
         <h1>{heading}</h1>\n\
         {body}\
         </div>\n\
         </div>\n\
         </div>\n\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}

fn new_item_form(action: &str, error: Option<&str>) -> String {
    let mut form = format!(
        "<form method=\"POST\" action=\"{}\">\n\
         <input name=\"{INPUT_NAME}\" id=\"{INPUT_ID}\" class=\"form-control input-lg\" \
         placeholder=\"{INPUT_PLACEHOLDER}\" autofocus />\n",
        escape_html(action)
    );
    if let Some(error) = error {
        let _ = write!(
            form,
            "<div class=\"form-group has-error\">\n\
             <span class=\"help-block\">{}</span>\n\
             </div>\n",
            escape_html(error)
        );
    }
    form.push_str("</form>\n");
    form
}

/// Home page: start a new list. `error` is shown under the input.
#[must_use]
pub fn home_page(error: Option<&str>) -> String {
    layout("Start a new To-Do list", &new_item_form("/lists/new", error))
}

/// Detail page of one list: its items as `"<position>: <text>"` rows, 1-indexed.
#[must_use]
pub fn list_page(list: &List, items: &[Item], error: Option<&str>) -> String {
    let mut body = new_item_form(&list.add_item_url(), error);
    let _ = writeln!(body, "<table id=\"{LIST_TABLE_ID}\" class=\"table\">");
    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(
            body,
            "<tr><td>{}: {}</td></tr>",
            index + 1,
            escape_html(&item.text)
        );
    }
    body.push_str("</table>\n");
    layout("Your To-Do list", &body)
}

#[must_use]
pub fn not_found_page() -> String {
    layout(
        "Not found",
        "<p>That to-do list does not exist.</p>\n<p><a href=\"/\">Start a new list</a></p>\n",
    )
}

#[must_use]
pub fn server_error_page() -> String {
    layout(
        "Something went wrong",
        "<p>Your to-do list could not be saved. Please try again.</p>\n",
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn list() -> List {
        List {
            id: "lst-a3f8b2c1".into(),
            created_at: Utc::now(),
        }
    }

    fn item(text: &str) -> Item {
        Item {
            id: "itm-00000001".into(),
            list_id: "lst-a3f8b2c1".into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn home_page_has_title_heading_and_empty_input() {
        let html = home_page(None);
        assert!(html.contains("<title>To-Do lists</title>"));
        assert!(html.contains("<h1>Start a new To-Do list</h1>"));
        assert!(html.contains("id=\"id_new_item\""));
        assert!(html.contains("placeholder=\"Enter a to-do item\""));
        assert!(html.contains("action=\"/lists/new\""));
        assert!(!html.contains("value="));
        assert!(!html.contains("has-error"));
    }

    #[test]
    fn home_page_shows_error() {
        let html = home_page(Some("You can't have an empty list item"));
        assert!(html.contains("You can&#x27;t have an empty list item"));
    }

    #[test]
    fn list_page_numbers_items_from_one() {
        let html = list_page(&list(), &[item("Buy peacock feathers"), item("Buy milk")], None);
        assert!(html.contains("<tr><td>1: Buy peacock feathers</td></tr>"));
        assert!(html.contains("<tr><td>2: Buy milk</td></tr>"));
        assert!(html.contains("action=\"/lists/lst-a3f8b2c1/add_item\""));
        assert!(html.contains("id=\"id_list_table\""));
    }

    #[test]
    fn list_page_escapes_item_text() {
        let html = list_page(&list(), &[item("<script>alert(1)</script>")], None);
        assert!(html.contains("1: &lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
