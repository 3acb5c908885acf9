use telar_dom::{Props, VNode, h, text};

use crate::template_ast::{Node, TemplateAttr};

/// Project one syntax node onto the element model.
///
/// Structure preserving: sibling order, attribute order and nesting depth
/// survive unchanged; text passes through verbatim. Recursion is bounded
/// only by the depth of the input tree.
pub fn transform(node: &Node) -> VNode {
    match node {
        Node::Text(t) => text(t.clone()),
        Node::Element {
            tag,
            attrs,
            children,
            ..
        } => h(
            tag.clone(),
            fold_props(attrs),
            children.iter().map(transform).collect(),
        ),
    }
}

/// Fold the ordered attribute list into props. A duplicate name keeps its
/// first position and takes the last value; a valueless attribute becomes
/// the empty string.
fn fold_props(attrs: &[TemplateAttr]) -> Props {
    let mut props = Props::new();
    for attr in attrs {
        props
            .attrs
            .insert(attr.name.clone(), attr.value.clone().unwrap_or_default());
    }
    props
}
