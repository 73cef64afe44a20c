use super::*;
use crate::{render::render_board, settings::BoardSettings, status::StatusKind};
use shared::domain::{Activity, ActivityCollection};

fn sample_render() -> RenderedBoard {
    let activities: ActivityCollection = [
        Activity::new("Chess Club", "Strategy", "Fridays", 12)
            .with_participants(["michael@mergington.edu"]),
        Activity::new("Art Club", "Painting", "Thursdays", 15)
            .with_participants(["b@example.com", "c@example.com"]),
    ]
    .into_iter()
    .collect();
    render_board(&activities, &BoardSettings::default())
}

#[test]
fn starts_in_loading_state() {
    let page = Page::new();
    assert!(!page.is_loaded());
    assert!(page.cards().is_empty());
    assert_eq!(page.activities_list().text_content(), LOADING_TEXT);
    let select = page.activity_select();
    assert_eq!(select.child_elements().count(), 1);
    assert_eq!(select.text_content(), ACTIVITY_PLACEHOLDER_TEXT);
}

#[test]
fn render_replaces_previous_list_and_selector() {
    let mut page = Page::new();
    page.apply_render(sample_render());
    page.apply_render(sample_render());

    assert_eq!(page.cards().len(), 2);
    assert_eq!(page.option_values(), ["Chess Club", "Art Club"]);
    // placeholder plus one option per activity
    assert_eq!(page.activity_select().child_elements().count(), 3);
}

#[test]
fn load_failure_keeps_selector() {
    let mut page = Page::new();
    page.apply_render(sample_render());
    page.apply_load_failure();

    assert!(page.load_failed());
    assert!(page.cards().is_empty());
    assert_eq!(
        page.activities_list().text_content(),
        "Failed to load activities. Please try again later."
    );
    assert_eq!(page.option_values(), ["Chess Club", "Art Club"]);
}

#[test]
fn selected_activity_is_marked_in_selector() {
    let mut page = Page::new();
    page.apply_render(sample_render());
    page.form.activity = "Art Club".into();

    let select = page.activity_select();
    let selected: Vec<&str> = select
        .child_elements()
        .filter(|option| option.attr("selected").is_some())
        .filter_map(|option| option.attr("value"))
        .collect();
    assert_eq!(selected, ["Art Club"]);
}

#[test]
fn form_reset_clears_both_controls() {
    let mut form = SignupForm {
        email: "a@example.com".into(),
        activity: "Chess Club".into(),
    };
    form.reset();
    assert_eq!(form, SignupForm::default());
}

#[test]
fn finds_removal_control_by_tags() {
    let mut page = Page::new();
    page.apply_render(sample_render());

    assert_eq!(page.removal_controls().len(), 3);
    let control = page
        .find_removal_control("Art Club", "c@example.com")
        .expect("control");
    assert_eq!(control.attr("title"), Some("Remove c@example.com"));
    assert!(page
        .find_removal_control("Chess Club", "c@example.com")
        .is_none());
}

#[test]
fn delegated_click_resolves_removal_target() {
    let mut page = Page::new();
    page.apply_render(sample_render());
    let control = page
        .find_removal_control("Art Club", "b@example.com")
        .expect("control")
        .clone();

    assert_eq!(
        page.delegate_click(&control),
        Some(RemovalTarget {
            activity: "Art Club".into(),
            email: "b@example.com".into(),
        })
    );
}

#[test]
fn delegated_click_ignores_non_controls_and_foreign_elements() {
    let mut page = Page::new();
    page.apply_render(sample_render());

    let email_span = page.cards()[1].find_by_class("participant-email")[0].clone();
    assert_eq!(page.delegate_click(&email_span), None);

    // a well-formed control that is not part of any rendered card
    let foreign = Element::new("button")
        .with_class(REMOVE_CONTROL_CLASS)
        .with_data("activity", "Art Club")
        .with_data("email", "ghost@example.com");
    assert_eq!(page.delegate_click(&foreign), None);
}

#[test]
fn removal_target_requires_both_tags() {
    let missing_email = Element::new("button")
        .with_class(REMOVE_CONTROL_CLASS)
        .with_data("activity", "Art Club");
    assert_eq!(RemovalTarget::from_control(&missing_email), None);

    let empty_activity = Element::new("button")
        .with_class(REMOVE_CONTROL_CLASS)
        .with_data("activity", "")
        .with_data("email", "b@example.com");
    assert_eq!(RemovalTarget::from_control(&empty_activity), None);
}

#[test]
fn page_html_escapes_form_values_and_status() {
    let mut page = Page::new();
    page.form.email = r#""><script>x</script>"#.into();
    page.status.show(StatusKind::Error, "<b>nope</b>");

    let html = page.to_html();
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;x&lt;/script&gt;""#));
    assert!(html.contains(r#"<div id="message" class="message error">&lt;b&gt;nope&lt;/b&gt;</div>"#));
}

#[test]
fn text_summary_lists_cards_and_visible_status() {
    let mut page = Page::new();
    page.apply_render(sample_render());
    page.status.show(StatusKind::Success, "Signed up");

    let summary = page.text_summary();
    assert!(summary.contains("Chess Club\nStrategy\nSchedule: Fridays\nAvailability: 11 spots left\n"));
    assert!(summary.contains("  - b@example.com\n  - c@example.com\n"));
    assert!(summary.ends_with("[success] Signed up\n"));
}
