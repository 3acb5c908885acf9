use telar_dom::{VNode, h};

use crate::error::TemplateError;
use crate::template_ast::Node;
use crate::template_parse::TemplateParser;
use crate::template_transform::transform;

/// Tag of the container element every compiled render is wrapped in.
/// Hosts that want the bare top-level nodes use
/// [`CompiledTemplate::render_nodes`] instead.
pub const SYNTHETIC_ROOT_TAG: &str = "div";

/// A template parsed once, renderable many times. Owns its syntax tree
/// and shares nothing with other compiles.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTemplate {
    roots: Vec<Node>,
}

impl TemplateParser<'_> {
    /// Parse `source` eagerly and keep the tree. A grammar mismatch
    /// surfaces here, never at render time.
    pub fn compile(&self, source: &str) -> Result<CompiledTemplate, TemplateError> {
        Ok(CompiledTemplate {
            roots: self.parse(source)?,
        })
    }
}

impl CompiledTemplate {
    /// Re-run the transform over the stored tree and wrap the results
    /// under one synthetic [`SYNTHETIC_ROOT_TAG`] container.
    ///
    /// `context` is accepted for forward compatibility but currently has
    /// no effect on the output: renders with different contexts produce
    /// structurally equal trees. Each call builds a fresh tree.
    pub fn render<C>(&self, context: &C) -> VNode {
        h(SYNTHETIC_ROOT_TAG, (), self.render_nodes(context))
    }

    /// Same as [`render`](Self::render) without the synthetic root.
    pub fn render_nodes<C>(&self, _context: &C) -> Vec<VNode> {
        self.roots.iter().map(transform).collect()
    }
}
