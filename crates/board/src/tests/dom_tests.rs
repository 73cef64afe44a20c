use super::*;

#[test]
fn escapes_all_markup_characters() {
    assert_eq!(
        escape_html(r#"<b class="x">Tom & Jerry's</b>"#),
        "&lt;b class=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/b&gt;"
    );
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn text_children_are_escaped_on_serialization() {
    let element = Element::new("p").with_text("<script>alert(1)</script>");
    assert_eq!(
        element.to_html(),
        "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>"
    );
    assert_eq!(element.text_content(), "<script>alert(1)</script>");
    assert_eq!(element.child_elements().count(), 0);
}

#[test]
fn attribute_values_cannot_break_out_of_quotes() {
    let element = Element::new("button").with_data("email", r#"x" onclick="evil()"#);
    assert_eq!(
        element.to_html(),
        r#"<button data-email="x&quot; onclick=&quot;evil()"></button>"#
    );
    assert_eq!(element.data("email"), Some(r#"x" onclick="evil()"#));
}

#[test]
fn void_elements_have_no_closing_tag() {
    let input = Element::new("input")
        .with_attr("type", "email")
        .with_attr("value", "a@example.com");
    assert_eq!(
        input.to_html(),
        r#"<input type="email" value="a@example.com">"#
    );
}

#[test]
fn classes_accumulate_without_duplicates() {
    let mut element = Element::new("div").with_class("message");
    element.add_class("success");
    element.add_class("message");
    assert_eq!(element.attr("class"), Some("message success"));
    assert!(element.has_class("success"));
    assert!(!element.has_class("mess"));
}

#[test]
fn set_attr_replaces_existing_value() {
    let element = Element::new("option")
        .with_attr("value", "a")
        .with_attr("value", "b");
    assert_eq!(element.to_html(), r#"<option value="b"></option>"#);
}

#[test]
fn finds_descendants_in_document_order() {
    let tree = Element::new("ul")
        .with_id("list")
        .with_child(Element::new("li").with_class("row").with_text("one"))
        .with_child(
            Element::new("li")
                .with_class("row")
                .with_child(Element::new("span").with_id("inner").with_text("two")),
        );

    let rows: Vec<String> = tree
        .find_by_class("row")
        .into_iter()
        .map(Element::text_content)
        .collect();
    assert_eq!(rows, ["one", "two"]);
    assert_eq!(tree.find_by_id("inner").map(Element::tag), Some("span"));
    assert_eq!(tree.find_by_id("list").map(Element::tag), Some("ul"));
    assert!(tree.find_by_id("missing").is_none());

    let inner = tree.find_by_id("inner").expect("inner").clone();
    assert!(tree.contains(&inner));
    assert!(!tree.contains(&Element::new("span").with_text("three")));
}

#[test]
fn clear_children_empties_element() {
    let mut list = Element::new("div")
        .with_child(Element::new("p").with_text("stale"))
        .with_text("more");
    list.clear_children();
    assert_eq!(list.to_html(), "<div></div>");
}
