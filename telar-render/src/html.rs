use telar_dom::VNode;

/// HTML string backend. Output depends only on the tree: structurally
/// equal trees serialize to byte-identical markup.
pub struct HtmlRenderer;

impl crate::Renderer for HtmlRenderer {
    fn backend_name(&self) -> &'static str {
        "html"
    }
    fn render_to_string(&self, root: &VNode) -> String {
        render_html(root)
    }
}

/// Serialize one element tree to markup text. Text content and attribute
/// values are escaped so the output is well-formed; elements without
/// children serialize self-closed.
pub fn render_html(root: &VNode) -> String {
    let mut out = String::new();
    write_node(&mut out, root);
    out
}

fn write_node(out: &mut String, node: &VNode) {
    match node {
        VNode::Text(t) => out.push_str(&escape_html(t)),
        VNode::Element {
            tag,
            props,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in &props.attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }
            if children.is_empty() {
                out.push_str("/>");
                return;
            }
            out.push('>');
            for child in children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
