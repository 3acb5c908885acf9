use pest::iterators::Pair;

use crate::error::TemplateError;
use crate::grammar::Grammar;
use crate::template_ast::{Node, TemplateAttr};

/// Grammar-driven template parser. Borrows a loaded [`Grammar`]; several
/// parsers may share one grammar instance.
pub struct TemplateParser<'g> {
    grammar: &'g Grammar,
}

impl<'g> TemplateParser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Parse a template into its sequence of top-level sibling nodes.
    ///
    /// Pure: the same grammar and input always yield a structurally
    /// identical tree. On failure no partial tree is returned; whitespace
    /// between elements comes back verbatim as text nodes.
    pub fn parse(&self, input: &str) -> Result<Vec<Node>, TemplateError> {
        let mut pairs = self
            .grammar
            .parse_rule("template", input)
            .map_err(TemplateError::from_pest)?;
        let template = match pairs.next() {
            Some(pair) => pair,
            None => return Ok(Vec::new()),
        };

        let mut roots = Vec::new();
        for pair in template.into_inner() {
            if pair.as_rule() == "EOI" {
                continue;
            }
            roots.push(lower_node(pair)?);
        }
        Ok(roots)
    }
}

fn lower_node(pair: Pair<&str>) -> Result<Node, TemplateError> {
    match pair.as_rule() {
        "text" => Ok(Node::Text(pair.as_str().to_string())),
        "element" => lower_element(pair, false),
        "void_element" => lower_element(pair, true),
        rule => Err(TemplateError::unexpected_rule(rule)),
    }
}

fn lower_element(pair: Pair<&str>, self_closing: bool) -> Result<Node, TemplateError> {
    let mut tag = String::new();
    let mut attrs: Vec<TemplateAttr> = Vec::new();
    let mut children: Vec<Node> = Vec::new();

    for part in pair.into_inner() {
        match part.as_rule() {
            "tag_name" => tag = part.as_str().to_string(),
            "attribute" => attrs.push(lower_attr(part)?),
            _ => children.push(lower_node(part)?),
        }
    }

    Ok(Node::Element {
        tag,
        attrs,
        children,
        self_closing,
    })
}

fn lower_attr(pair: Pair<&str>) -> Result<TemplateAttr, TemplateError> {
    let mut name = String::new();
    let mut value: Option<String> = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            "attr_name" => name = part.as_str().to_string(),
            "attr_value" => value = Some(strip_quotes(part.as_str())),
            rule => return Err(TemplateError::unexpected_rule(rule)),
        }
    }

    Ok(TemplateAttr { name, value })
}

fn strip_quotes(s: &str) -> String {
    let b = s.as_bytes();
    if b.len() >= 2
        && ((b[0] == b'"' && b[b.len() - 1] == b'"') || (b[0] == b'\'' && b[b.len() - 1] == b'\''))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}
