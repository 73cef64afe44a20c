use crate::dom::Element;

pub const STATUS_ELEMENT_ID: &str = "message";
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// The single status slot on the page.
///
/// Each `show` bumps a generation counter; a dismissal only applies to the
/// generation it was scheduled for, so an older timer never hides a newer
/// message.
#[derive(Debug, Clone, Default)]
pub struct StatusBanner {
    current: Option<StatusMessage>,
    visible: bool,
    generation: u64,
}

impl StatusBanner {
    /// Replaces any current message and returns the generation to dismiss.
    pub fn show(&mut self, kind: StatusKind, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.current = Some(StatusMessage {
            kind,
            text: text.into(),
        });
        self.visible = true;
        self.generation
    }

    /// Hides the message if it is still the one shown at `generation`.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn visible_message(&self) -> Option<&StatusMessage> {
        self.current.as_ref().filter(|_| self.visible)
    }

    /// Last message shown, whether or not it has been dismissed.
    pub fn last_message(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn render(&self) -> Element {
        let mut element = Element::new("div").with_id(STATUS_ELEMENT_ID);
        if let Some(message) = &self.current {
            element.add_class("message");
            element.add_class(message.kind.class_name());
            element.push_text(&message.text);
        }
        if !self.visible {
            element.add_class(HIDDEN_CLASS);
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_empty() {
        let banner = StatusBanner::default();
        assert!(!banner.is_visible());
        assert_eq!(banner.render().to_html(), r#"<div id="message" class="hidden"></div>"#);
    }

    #[test]
    fn shows_with_kind_class() {
        let mut banner = StatusBanner::default();
        banner.show(StatusKind::Error, "Activity is full");

        let element = banner.render();
        assert!(element.has_class("message"));
        assert!(element.has_class("error"));
        assert!(!element.has_class(HIDDEN_CLASS));
        assert_eq!(element.text_content(), "Activity is full");
    }

    #[test]
    fn stale_dismissal_keeps_newer_message() {
        let mut banner = StatusBanner::default();
        let first = banner.show(StatusKind::Error, "first");
        let second = banner.show(StatusKind::Success, "second");

        assert!(!banner.dismiss(first));
        assert_eq!(
            banner.visible_message().map(|m| m.text.as_str()),
            Some("second")
        );

        assert!(banner.dismiss(second));
        assert!(banner.visible_message().is_none());
        assert!(banner.render().has_class(HIDDEN_CLASS));
        assert_eq!(banner.last_message().map(|m| m.kind), Some(StatusKind::Success));
    }
}
