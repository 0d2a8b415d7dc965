//! A page fetched by the HTTP driver and the handful of element queries the
//! functional tests need.
//!
//! The queries work on the markup superlists renders: double-quoted
//! attributes and no nested tables. The WebDriver driver asks the browser
//! instead.

use reqwest::{StatusCode, Url};

#[derive(Debug, Clone)]
pub struct Page {
    url: Url,
    status: StatusCode,
    html: String,
}

impl Page {
    #[must_use]
    pub const fn new(url: Url, status: StatusCode, html: String) -> Self {
        Self { url, status, html }
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Text of `<title>`.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let (start, end) = inner_range(&self.html, "<title>", "</title>")?;
        Some(text_content(&self.html[start..end]))
    }

    /// Text of the first `<h1>`.
    #[must_use]
    pub fn heading(&self) -> Option<String> {
        let (start, end) = inner_range(&self.html, "<h1", "</h1>")?;
        let open_end = self.html[start..end].find('>')? + start + 1;
        Some(text_content(&self.html[open_end..end]))
    }

    /// Visible text of `<body>`, whitespace-collapsed.
    #[must_use]
    pub fn body_text(&self) -> String {
        inner_range(&self.html, "<body", "</body>")
            .and_then(|(start, end)| {
                let open_end = self.html[start..end].find('>')? + start + 1;
                Some(text_content(&self.html[open_end..end]))
            })
            .unwrap_or_default()
    }

    /// Value of `attr` on the element with `id`.
    #[must_use]
    pub fn attribute(&self, id: &str, attr: &str) -> Option<String> {
        let (tag_start, tag_end) = self.tag_range_by_id(id)?;
        attribute_in_tag(&self.html[tag_start..tag_end], attr)
    }

    #[must_use]
    pub fn has_element(&self, id: &str) -> bool {
        self.tag_range_by_id(id).is_some()
    }

    /// `action` of the `<form>` that contains the element with `id`.
    #[must_use]
    pub fn form_action_for(&self, id: &str) -> Option<String> {
        let (tag_start, _) = self.tag_range_by_id(id)?;
        let form_start = self.html[..tag_start].rfind("<form")?;
        let form_end = self.html[form_start..].find('>')? + form_start + 1;
        attribute_in_tag(&self.html[form_start..form_end], "action")
    }

    /// Text of every `<tr>` in the table with `id`.
    #[must_use]
    pub fn table_rows(&self, id: &str) -> Option<Vec<String>> {
        let (tag_start, tag_end) = self.tag_range_by_id(id)?;
        let close = self.html[tag_end..].find("</table>")? + tag_end;
        let rows = self.html[tag_start..close]
            .split("<tr")
            .skip(1)
            .map(|chunk| {
                let inner = chunk.find('>').map_or("", |i| &chunk[i + 1..]);
                let inner = inner.find("</tr>").map_or(inner, |i| &inner[..i]);
                text_content(inner)
            })
            .collect();
        Some(rows)
    }

    /// Byte range of the start tag carrying `id="<id>"`.
    fn tag_range_by_id(&self, id: &str) -> Option<(usize, usize)> {
        let needle = format!("id=\"{id}\"");
        let at = self.html.find(&needle)?;
        let start = self.html[..at].rfind('<')?;
        let end = self.html[at..].find('>')? + at + 1;
        Some((start, end))
    }
}

fn inner_range(html: &str, open: &str, close: &str) -> Option<(usize, usize)> {
    let start = html.find(open)?;
    let end = html[start..].find(close)? + start;
    Some((start + if open.ends_with('>') { open.len() } else { 0 }, end))
}

fn attribute_in_tag(tag: &str, attr: &str) -> Option<String> {
    let needle = format!(" {attr}=\"");
    let start = tag.find(&needle)? + needle.len();
    let end = tag[start..].find('"')? + start;
    Some(unescape(&tag[start..end]))
}

/// Strip tags, decode entities, and collapse whitespace the way a browser's
/// `innerText` roughly does for simple markup.
fn text_content(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    unescape(&text).split_whitespace().collect::<Vec<_>>().join(" ")
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const HTML: &str = r#"<!DOCTYPE html>
<html><head><title>To-Do lists</title></head>
<body>
<h1>Your To-Do list</h1>
<form method="POST" action="/lists/lst-a3f8b2c1/add_item">
<input name="item_text" id="id_new_item" placeholder="Enter a to-do item" />
</form>
<table id="id_list_table" class="table">
<tr><td>1: Buy peacock feathers</td></tr>
<tr><td>2: Tom &amp; Jerry&#x27;s &lt;fly&gt;</td></tr>
</table>
</body></html>"#;

    fn page() -> Page {
        Page::new(
            Url::parse("http://127.0.0.1:8000/lists/lst-a3f8b2c1/").unwrap(),
            StatusCode::OK,
            HTML.to_string(),
        )
    }

    #[test]
    fn reads_title_and_heading() {
        let page = page();
        assert_eq!(page.title().as_deref(), Some("To-Do lists"));
        assert_eq!(page.heading().as_deref(), Some("Your To-Do list"));
    }

    #[test]
    fn reads_input_attributes_and_form() {
        let page = page();
        assert_eq!(
            page.attribute("id_new_item", "placeholder").as_deref(),
            Some("Enter a to-do item")
        );
        assert_eq!(page.attribute("id_new_item", "name").as_deref(), Some("item_text"));
        assert_eq!(
            page.form_action_for("id_new_item").as_deref(),
            Some("/lists/lst-a3f8b2c1/add_item")
        );
        assert!(!page.has_element("id_missing"));
    }

    #[test]
    fn reads_table_rows_with_entities_decoded() {
        assert_eq!(
            page().table_rows("id_list_table").unwrap(),
            vec!["1: Buy peacock feathers", "2: Tom & Jerry's <fly>"]
        );
    }

    #[test]
    fn body_text_is_collapsed() {
        let text = page().body_text();
        assert!(text.starts_with("Your To-Do list"));
        assert!(text.contains("1: Buy peacock feathers 2: Tom & Jerry's <fly>"));
    }
}
