/// One attribute as written in the source, quotes already stripped. A
/// valueless attribute (`<input disabled>`) carries `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateAttr {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<TemplateAttr>,
        children: Vec<Node>,
        self_closing: bool,
    },
    Text(String),
}
