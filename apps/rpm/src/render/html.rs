use askama::Template;

use super::DocumentView;

/// Printable document markup. Inline styles only, so the layout survives
/// being pasted into a document editor.
#[derive(Template)]
#[template(path = "document.html")]
struct DocumentTemplate<'a> {
    doc: &'a DocumentView,
}

impl DocumentView {
    /// HTML fragment of the whole document. Every generated or user-typed
    /// value is escaped.
    pub fn to_html(&self) -> Result<String, askama::Error> {
        DocumentTemplate { doc: self }.render()
    }
}
