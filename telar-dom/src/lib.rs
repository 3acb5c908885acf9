use indexmap::IndexMap;

/// A node of the element model: the declarative description a renderer
/// consumes. Structurally mirrors the template syntax tree it was built
/// from.
#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    Element {
        tag: String,
        props: Props,
        children: Vec<VNode>,
    },
    Text(String),
}

/// Element properties. Insertion order is part of the contract: it is the
/// attribute order of the source template and the serialization order of
/// the output, so rendering stays deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Props {
    pub attrs: IndexMap<String, String>,
}

impl Props {
    pub fn new() -> Self {
        Self {
            attrs: IndexMap::new(),
        }
    }
    pub fn set(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.attrs.insert(k.into(), v.into());
        self
    }
}

// Allow concise props creation
impl From<()> for Props {
    fn from(_: ()) -> Self {
        Props::default()
    }
}
impl From<Vec<(&str, &str)>> for Props {
    fn from(v: Vec<(&str, &str)>) -> Self {
        let mut p = Props::new();
        for (k, v) in v {
            p.attrs.insert(k.to_string(), v.to_string());
        }
        p
    }
}

pub fn h(tag: impl Into<String>, props: impl Into<Props>, children: Vec<VNode>) -> VNode {
    VNode::Element {
        tag: tag.into(),
        props: props.into(),
        children,
    }
}
pub fn text(t: impl Into<String>) -> VNode {
    VNode::Text(t.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tree() {
        let node = h(
            "div",
            vec![("class", "app")],
            vec![text("hello"), h("span", (), vec![text("world")])],
        );
        if let VNode::Element {
            tag,
            props,
            children,
        } = node
        {
            assert_eq!(tag, "div");
            assert_eq!(props.attrs.get("class").unwrap(), "app");
            assert_eq!(children.len(), 2);
        } else {
            panic!("expected element");
        }
    }

    #[test]
    fn props_keep_insertion_order() {
        let props = Props::new().set("b", "2").set("a", "1").set("c", "3");
        let keys: Vec<&str> = props.attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn duplicate_key_takes_last_value() {
        let props = Props::new().set("a", "1").set("b", "2").set("a", "3");
        assert_eq!(props.attrs.len(), 2);
        assert_eq!(props.attrs.get("a").unwrap(), "3");
        let keys: Vec<&str> = props.attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
