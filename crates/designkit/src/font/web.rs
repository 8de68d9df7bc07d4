//! Browser adapter: stylesheet links in the live document head.

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlLinkElement};

use super::StylesheetLoader;

/// The current window's `document.head`.
///
/// Every call looks the document up again, so the value is free to create
/// and hold. Outside a browser window both methods are no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentHead;

impl DocumentHead {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }
}

impl StylesheetLoader for DocumentHead {
    fn has_stylesheet_containing(&self, needle: &str) -> bool {
        let Some(document) = Self::document() else {
            return false;
        };
        let selector = format!(r#"link[href*="{}"]"#, needle.replace('"', "\\\""));
        matches!(document.query_selector(&selector), Ok(Some(_)))
    }

    fn append_stylesheet(&mut self, href: &str) {
        let Some(document) = Self::document() else {
            warn!(href, "no document available, font stylesheet not added");
            return;
        };
        let Some(head) = document.head() else {
            warn!(href, "document has no head, font stylesheet not added");
            return;
        };

        let link = match document
            .create_element("link")
            .map(|el| el.dyn_into::<HtmlLinkElement>())
        {
            Ok(Ok(link)) => link,
            _ => {
                warn!(href, "could not create link element");
                return;
            }
        };
        link.set_rel("stylesheet");
        link.set_href(href);

        if head.append_child(&link).is_err() {
            warn!(href, "could not append font stylesheet to head");
        }
    }
}
