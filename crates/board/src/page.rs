//! Page model: the activity list, the sign-up form and the status slot.

use crate::{
    dom::Element,
    render::{render_load_failure, RenderedBoard, LOAD_FAILURE_TEXT, REMOVE_CONTROL_CLASS},
    status::StatusBanner,
};

pub const ACTIVITIES_LIST_ID: &str = "activities-list";
pub const ACTIVITY_SELECT_ID: &str = "activity";
pub const EMAIL_INPUT_ID: &str = "email";
pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const LOADING_TEXT: &str = "Loading activities...";
pub const ACTIVITY_PLACEHOLDER_TEXT: &str = "-- Select an activity --";

/// Values of the sign-up form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity name; empty while the placeholder is selected.
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListState {
    Loading,
    Loaded(Vec<Element>),
    Failed,
}

/// A removal request read from a clicked control's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

impl RemovalTarget {
    /// `None` unless `control` is a removal control carrying both a non-empty
    /// `data-activity` and `data-email`.
    pub fn from_control(control: &Element) -> Option<Self> {
        if !control.has_class(REMOVE_CONTROL_CLASS) {
            return None;
        }
        let activity = control.data("activity").filter(|v| !v.is_empty())?;
        let email = control.data("email").filter(|v| !v.is_empty())?;
        Some(Self {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    list: ListState,
    options: Vec<Element>,
    pub form: SignupForm,
    pub status: StatusBanner,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            list: ListState::Loading,
            options: Vec::new(),
            form: SignupForm::default(),
            status: StatusBanner::default(),
        }
    }

    /// Swaps in a freshly rendered list and selector, discarding the old ones.
    pub fn apply_render(&mut self, rendered: RenderedBoard) {
        self.list = ListState::Loaded(rendered.cards);
        self.options = rendered.options;
    }

    /// Replaces the list with the failure message. The selector keeps
    /// whatever the last successful render put there.
    pub fn apply_load_failure(&mut self) {
        self.list = ListState::Failed;
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.list, ListState::Loaded(_))
    }

    pub fn load_failed(&self) -> bool {
        matches!(self.list, ListState::Failed)
    }

    pub fn cards(&self) -> &[Element] {
        match &self.list {
            ListState::Loaded(cards) => cards,
            ListState::Loading | ListState::Failed => &[],
        }
    }

    /// Activity names offered by the selector, placeholder excluded.
    pub fn option_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter_map(|option| option.attr("value"))
            .collect()
    }

    /// Every removal control on the page, in document order.
    pub fn removal_controls(&self) -> Vec<&Element> {
        self.cards()
            .iter()
            .flat_map(|card| card.find_by_class(REMOVE_CONTROL_CLASS))
            .collect()
    }

    pub fn find_removal_control(&self, activity: &str, email: &str) -> Option<&Element> {
        self.removal_controls().into_iter().find(|control| {
            control.data("activity") == Some(activity) && control.data("email") == Some(email)
        })
    }

    /// Delegated click handling: the card that contains `target` inspects its
    /// tags. Clicks outside any card, or on anything but a removal control,
    /// resolve to `None`.
    pub fn delegate_click(&self, target: &Element) -> Option<RemovalTarget> {
        self.cards().iter().find(|card| card.contains(target))?;
        RemovalTarget::from_control(target)
    }

    pub fn activities_list(&self) -> Element {
        let list = Element::new("div").with_id(ACTIVITIES_LIST_ID);
        match &self.list {
            ListState::Loading => list.with_child(Element::new("p").with_text(LOADING_TEXT)),
            ListState::Loaded(cards) => list.with_children(cards.iter().cloned()),
            ListState::Failed => list.with_child(render_load_failure()),
        }
    }

    pub fn activity_select(&self) -> Element {
        let placeholder = Element::new("option")
            .with_attr("value", "")
            .with_text(ACTIVITY_PLACEHOLDER_TEXT);
        let options = std::iter::once(placeholder)
            .chain(self.options.iter().cloned())
            .map(|option| {
                if option.attr("value") == Some(self.form.activity.as_str()) {
                    option.with_attr("selected", "")
                } else {
                    option
                }
            });
        Element::new("select")
            .with_id(ACTIVITY_SELECT_ID)
            .with_attr("required", "")
            .with_children(options)
    }

    pub fn signup_form(&self) -> Element {
        Element::new("form")
            .with_id(SIGNUP_FORM_ID)
            .with_child(
                Element::new("div")
                    .with_class("form-group")
                    .with_child(
                        Element::new("label")
                            .with_attr("for", EMAIL_INPUT_ID)
                            .with_text("Student Email:"),
                    )
                    .with_child(
                        Element::new("input")
                            .with_id(EMAIL_INPUT_ID)
                            .with_attr("type", "email")
                            .with_attr("required", "")
                            .with_attr("value", &self.form.email),
                    ),
            )
            .with_child(
                Element::new("div")
                    .with_class("form-group")
                    .with_child(
                        Element::new("label")
                            .with_attr("for", ACTIVITY_SELECT_ID)
                            .with_text("Activity:"),
                    )
                    .with_child(self.activity_select()),
            )
            .with_child(
                Element::new("button")
                    .with_attr("type", "submit")
                    .with_text("Sign Up"),
            )
    }

    /// The whole dynamic part of the page as one tree.
    pub fn render(&self) -> Element {
        Element::new("main")
            .with_child(
                Element::new("section")
                    .with_id("activities-container")
                    .with_child(Element::new("h3").with_text("Available Activities"))
                    .with_child(self.activities_list()),
            )
            .with_child(
                Element::new("section")
                    .with_id("signup-container")
                    .with_child(Element::new("h3").with_text("Sign Up for an Activity"))
                    .with_child(self.signup_form())
                    .with_child(self.status.render()),
            )
    }

    pub fn to_html(&self) -> String {
        self.render().to_html()
    }

    /// Plain-text rendering for terminals.
    pub fn text_summary(&self) -> String {
        let mut out = String::new();
        match &self.list {
            ListState::Loading => out.push_str(LOADING_TEXT),
            ListState::Failed => out.push_str(LOAD_FAILURE_TEXT),
            ListState::Loaded(cards) => {
                for card in cards {
                    summarize_card(card, &mut out);
                }
            }
        }
        if let Some(message) = self.status.visible_message() {
            out.push_str(&format!(
                "\n[{}] {}\n",
                message.kind.class_name(),
                message.text
            ));
        }
        out
    }
}

fn summarize_card(card: &Element, out: &mut String) {
    let mut elements = card.child_elements();
    let mut line = |element: Option<&Element>| {
        if let Some(element) = element {
            out.push_str(element.text_content().trim());
            out.push('\n');
        }
    };
    // name, description, schedule, availability
    for _ in 0..4 {
        line(elements.next());
    }
    for row in card.find_all(|e| e.tag() == "li" || e.has_class("no-participants")) {
        let text = row
            .find_by_class("participant-email")
            .first()
            .map(|email| email.text_content())
            .unwrap_or_else(|| row.text_content());
        out.push_str("  - ");
        out.push_str(&text);
        out.push('\n');
    }
    out.push('\n');
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
