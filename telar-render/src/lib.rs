//! Static rendering over `telar-dom` element trees.

use telar_dom::VNode;

pub mod html;

pub use html::{HtmlRenderer, render_html};

/// Minimal renderer seam. Backends turn a finished element tree into
/// their output representation; HTML text is the one backend today.
pub trait Renderer {
    fn backend_name(&self) -> &'static str;
    fn render_to_string(&self, root: &VNode) -> String;
}
