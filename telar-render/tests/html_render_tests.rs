use telar_dom::{h, text};
use telar_render::{HtmlRenderer, Renderer, render_html};

#[test]
fn renders_nested_markup() {
    let tree = h(
        "div",
        vec![("class", "a")],
        vec![h("span", (), vec![text("hi")]), text(" there")],
    );
    assert_eq!(render_html(&tree), r#"<div class="a"><span>hi</span> there</div>"#);
}

#[test]
fn escapes_text_content() {
    let tree = h("p", (), vec![text("1 < 2 && 3 > 2")]);
    assert_eq!(render_html(&tree), "<p>1 &lt; 2 &amp;&amp; 3 &gt; 2</p>");
}

#[test]
fn escapes_attribute_values() {
    let tree = h("p", vec![("title", r#"say "hi" & 'bye'"#)], vec![text("x")]);
    assert_eq!(
        render_html(&tree),
        r#"<p title="say &quot;hi&quot; &amp; &#39;bye&#39;">x</p>"#
    );
}

#[test]
fn childless_element_self_closes() {
    assert_eq!(render_html(&h("br", (), vec![])), "<br/>");
}

#[test]
fn attribute_order_follows_insertion() {
    let tree = h("p", vec![("b", "2"), ("a", "1")], vec![text("x")]);
    assert_eq!(render_html(&tree), r#"<p b="2" a="1">x</p>"#);
}

#[test]
fn equal_trees_render_byte_identical() {
    let tree = h(
        "ul",
        (),
        vec![h("li", (), vec![text("a")]), h("li", (), vec![text("b")])],
    );
    assert_eq!(render_html(&tree), render_html(&tree.clone()));
}

#[test]
fn backend_renders_through_trait() {
    let renderer = HtmlRenderer;
    assert_eq!(renderer.backend_name(), "html");
    assert_eq!(
        renderer.render_to_string(&h("p", (), vec![text("x")])),
        "<p>x</p>"
    );
}

mod pipeline {
    use super::*;
    use telar_template::{DEFAULT_GRAMMAR, Grammar, TemplateParser};

    #[test]
    fn compiled_template_renders_back_to_equivalent_markup() {
        let grammar = Grammar::load(DEFAULT_GRAMMAR).unwrap();
        let parser = TemplateParser::new(&grammar);
        let compiled = parser
            .compile(r#"<div class="a"><span>hi</span> there</div>"#)
            .unwrap();

        let html = render_html(&compiled.render(&()));
        assert_eq!(
            html,
            r#"<div><div class="a"><span>hi</span> there</div></div>"#
        );
    }

    #[test]
    fn escaped_output_reparses_cleanly() {
        let tree = h("p", (), vec![text("1 < 2 && 3 > 2")]);
        let html = render_html(&tree);

        let grammar = Grammar::load(DEFAULT_GRAMMAR).unwrap();
        let parser = TemplateParser::new(&grammar);
        let reparsed = parser.parse(&html).expect("rendered output is well-formed");
        assert_eq!(reparsed.len(), 1);
    }

    #[test]
    fn render_of_compiled_template_is_deterministic() {
        let grammar = Grammar::load(DEFAULT_GRAMMAR).unwrap();
        let parser = TemplateParser::new(&grammar);
        let compiled = parser.compile("<ul><li>a</li> <li>b</li></ul>").unwrap();

        let first = render_html(&compiled.render(&()));
        let second = render_html(&compiled.render(&()));
        assert_eq!(first, second);
    }
}
