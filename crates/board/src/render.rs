//! Pure rendering of an activity collection into card and option elements.

use shared::domain::{Activity, ActivityCollection};

use crate::{dom::Element, settings::BoardSettings};

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet.";
pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";
pub const CARD_CLASS: &str = "activity-card";
pub const PARTICIPANT_ROW_CLASS: &str = "participant-item";
pub const MORE_INDICATOR_CLASS: &str = "more-indicator";
pub const REMOVE_CONTROL_CLASS: &str = "delete-btn";

/// Everything one refresh draws: one card and one selector option per
/// activity, both in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBoard {
    pub cards: Vec<Element>,
    pub options: Vec<Element>,
}

pub fn render_board(activities: &ActivityCollection, settings: &BoardSettings) -> RenderedBoard {
    RenderedBoard {
        cards: activities
            .iter()
            .map(|activity| render_card(activity, settings.max_visible_participants))
            .collect(),
        options: activities.names().map(render_option).collect(),
    }
}

pub fn render_card(activity: &Activity, max_visible: usize) -> Element {
    Element::new("div")
        .with_class(CARD_CLASS)
        .with_child(Element::new("h4").with_text(&activity.name))
        .with_child(Element::new("p").with_text(&activity.description))
        .with_child(
            Element::new("p")
                .with_child(Element::new("strong").with_text("Schedule:"))
                .with_text(format!(" {}", activity.schedule)),
        )
        .with_child(
            Element::new("p")
                .with_child(Element::new("strong").with_text("Availability:"))
                .with_text(format!(" {} spots left", activity.spots_left())),
        )
        .with_child(
            Element::new("div")
                .with_class("participants-section")
                .with_child(
                    Element::new("h5")
                        .with_text(format!("Participants ({})", activity.participants.len())),
                )
                .with_child(
                    Element::new("div")
                        .with_class("participants-container")
                        .with_child(render_participants(activity, max_visible)),
                ),
        )
}

fn render_participants(activity: &Activity, max_visible: usize) -> Element {
    if activity.participants.is_empty() {
        return Element::new("p")
            .with_class("no-participants")
            .with_text(NO_PARTICIPANTS_TEXT);
    }

    let mut list = Element::new("ul")
        .with_class("participants-list")
        .with_children(
            activity
                .participants
                .iter()
                .take(max_visible)
                .map(|email| render_participant_row(&activity.name, email)),
        );

    let hidden = activity.participants.len().saturating_sub(max_visible);
    if hidden > 0 {
        list.push_child(
            Element::new("li")
                .with_class(MORE_INDICATOR_CLASS)
                .with_text(format!("+{hidden} more")),
        );
    }
    list
}

fn render_participant_row(activity: &str, email: &str) -> Element {
    Element::new("li")
        .with_class(PARTICIPANT_ROW_CLASS)
        .with_child(
            Element::new("span")
                .with_class("participant-email")
                .with_text(email),
        )
        .with_child(
            Element::new("button")
                .with_class(REMOVE_CONTROL_CLASS)
                .with_attr("type", "button")
                .with_attr("title", format!("Remove {email}"))
                .with_attr("aria-label", format!("Remove {email}"))
                .with_data("activity", activity)
                .with_data("email", email)
                .with_text("\u{d7}"),
        )
}

pub fn render_option(name: &str) -> Element {
    Element::new("option").with_attr("value", name).with_text(name)
}

pub fn render_load_failure() -> Element {
    Element::new("p").with_text(LOAD_FAILURE_TEXT)
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
