use crate::document::{Document, ids};
use tracing::{debug, info};

pub const DROPDOWN_VISIBLE_CLASS: &str = "show";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// `target` is the id of the clicked element, if it has one.
    Click { target: Option<String> },
    Scroll { target: String },
}

impl UiEvent {
    pub fn click(target: &str) -> Self {
        Self::Click {
            target: Some(target.to_string()),
        }
    }

    pub fn click_elsewhere() -> Self {
        Self::Click { target: None }
    }

    pub fn scroll(target: &str) -> Self {
        Self::Scroll {
            target: target.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    DropdownToggled { visible: bool },
    DropdownHidden,
    LoadMoreRequested,
    Ignored,
}

/// Listeners attached at page-ready. Elements missing at that moment stay
/// unbound for the life of the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBinder {
    notification_toggle: bool,
    dropdown_dismiss: bool,
    chat_scroll: bool,
}

impl EventBinder {
    pub fn attach<D: Document + ?Sized>(document: &D) -> Self {
        let has_button = document.has_element(ids::NOTIFICATION_BUTTON);
        let has_dropdown = document.has_element(ids::NOTIFICATION_DROPDOWN);
        let has_chat = document.has_element(ids::CHAT_MESSAGES);

        if !has_button || !has_dropdown {
            debug!("notification dropdown not present, toggle unbound");
        }
        if !has_chat {
            debug!("chat message list not present, scroll unbound");
        }

        Self {
            notification_toggle: has_button && has_dropdown,
            dropdown_dismiss: has_dropdown,
            chat_scroll: has_chat,
        }
    }

    pub fn handle<D: Document + ?Sized>(&self, document: &mut D, event: &UiEvent) -> EventOutcome {
        match event {
            UiEvent::Click { target } => {
                // The button handler stops propagation, so the document-level
                // dismiss never sees that click.
                if self.notification_toggle && target.as_deref() == Some(ids::NOTIFICATION_BUTTON) {
                    return match document.toggle_class(ids::NOTIFICATION_DROPDOWN, DROPDOWN_VISIBLE_CLASS) {
                        Some(visible) => EventOutcome::DropdownToggled { visible },
                        None => EventOutcome::Ignored,
                    };
                }
                if self.dropdown_dismiss
                    && document.remove_class(ids::NOTIFICATION_DROPDOWN, DROPDOWN_VISIBLE_CLASS)
                {
                    return EventOutcome::DropdownHidden;
                }
                EventOutcome::Ignored
            }
            UiEvent::Scroll { target } => {
                if !self.chat_scroll || target.as_str() != ids::CHAT_MESSAGES {
                    return EventOutcome::Ignored;
                }
                match document.scroll_top(ids::CHAT_MESSAGES) {
                    Some(offset) if offset == 0.0 => {
                        load_more_messages();
                        EventOutcome::LoadMoreRequested
                    }
                    _ => EventOutcome::Ignored,
                }
            }
        }
    }
}

/// Placeholder for history pagination; only logs.
pub fn load_more_messages() {
    info!("Loading more messages...");
}
