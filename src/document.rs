use crate::charts::ChartSpec;
use std::collections::{BTreeMap, BTreeSet};

pub mod ids {
    pub const NOTIFICATION_BUTTON: &str = "notificationButton";
    pub const NOTIFICATION_DROPDOWN: &str = "notificationDropdown";
    pub const CHAT_MESSAGES: &str = "chatMessages";
    pub const SEARCH_INPUT: &str = "searchInput";
    pub const SEARCH_RESULTS: &str = "searchResults";
    pub const USER_COUNT: &str = "userCount";
    pub const MESSAGE_COUNT: &str = "messageCount";
    pub const FLAGGED_COUNT: &str = "flaggedCount";
    pub const MESSAGES_CHART: &str = "messagesChart";
    pub const FLAGS_CHART: &str = "flagsChart";

    pub const ALL: [&str; 10] = [
        NOTIFICATION_BUTTON,
        NOTIFICATION_DROPDOWN,
        CHAT_MESSAGES,
        SEARCH_INPUT,
        SEARCH_RESULTS,
        USER_COUNT,
        MESSAGE_COUNT,
        FLAGGED_COUNT,
        MESSAGES_CHART,
        FLAGS_CHART,
    ];
}

/// Mutating methods return `false` (or `None`) when the element is absent.
pub trait Document {
    fn has_element(&self, id: &str) -> bool;

    fn value(&self, id: &str) -> Option<String>;

    fn set_text(&mut self, id: &str, text: &str) -> bool;

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;

    /// Returns whether the class is present after toggling.
    fn toggle_class(&mut self, id: &str, class: &str) -> Option<bool>;

    fn remove_class(&mut self, id: &str, class: &str) -> bool;

    fn scroll_top(&self, id: &str) -> Option<f64>;

    fn form_field(&self, form: &str, field: &str) -> Option<String>;

    fn render_chart(&mut self, id: &str, chart: &ChartSpec) -> bool;

    fn reload(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub text: String,
    pub inner_html: String,
    pub value: String,
    pub classes: BTreeSet<String>,
    pub scroll_top: f64,
    pub chart: Option<ChartSpec>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    elements: BTreeMap<String, Element>,
    forms: BTreeMap<String, BTreeMap<String, String>>,
    reloads: u32,
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page carrying every element id and form the handlers expect.
    pub fn host_page() -> Self {
        let mut document = Self::new();
        for id in ids::ALL {
            document.insert_element(id);
        }
        for form in [&crate::forms::REGISTER_FORM, &crate::forms::FORGOT_PASSWORD_FORM] {
            for field in form.fields {
                document.set_form_field(form.name, field, "");
            }
        }
        document
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.insert_element(id);
        self
    }

    pub fn insert_element(&mut self, id: &str) -> &mut Element {
        self.elements.entry(id.to_string()).or_default()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_scroll_top(&mut self, id: &str, offset: f64) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.scroll_top = offset;
                true
            }
            None => false,
        }
    }

    pub fn set_form_field(&mut self, form: &str, field: &str, value: &str) {
        self.forms
            .entry(form.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
    }

    pub fn reload_count(&self) -> u32 {
        self.reloads
    }
}

impl Document for PageDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|element| element.value.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.inner_html = html.to_string();
                true
            }
            None => false,
        }
    }

    fn toggle_class(&mut self, id: &str, class: &str) -> Option<bool> {
        let element = self.elements.get_mut(id)?;
        if element.classes.remove(class) {
            Some(false)
        } else {
            element.classes.insert(class.to_string());
            Some(true)
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.classes.remove(class);
                true
            }
            None => false,
        }
    }

    fn scroll_top(&self, id: &str) -> Option<f64> {
        self.elements.get(id).map(|element| element.scroll_top)
    }

    fn form_field(&self, form: &str, field: &str) -> Option<String> {
        self.forms.get(form)?.get(field).cloned()
    }

    fn render_chart(&mut self, id: &str, chart: &ChartSpec) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.chart = Some(chart.clone());
                true
            }
            None => false,
        }
    }

    fn reload(&mut self) {
        self.reloads = self.reloads.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_elements_report_false() {
        let mut document = PageDocument::new();
        assert!(!document.set_text(ids::USER_COUNT, "1"));
        assert!(document.toggle_class(ids::NOTIFICATION_DROPDOWN, "show").is_none());
        assert!(document.value(ids::SEARCH_INPUT).is_none());
    }

    #[test]
    fn toggle_class_flips_presence() {
        let mut document = PageDocument::new().with_element(ids::NOTIFICATION_DROPDOWN);
        assert_eq!(document.toggle_class(ids::NOTIFICATION_DROPDOWN, "show"), Some(true));
        assert_eq!(document.toggle_class(ids::NOTIFICATION_DROPDOWN, "show"), Some(false));
    }

    #[test]
    fn host_page_has_every_contract_id_and_form() {
        let document = PageDocument::host_page();
        for id in ids::ALL {
            assert!(document.has_element(id), "missing {id}");
        }
        assert_eq!(document.form_field("registerForm", "email").as_deref(), Some(""));
        assert_eq!(
            document.form_field("forgotPasswordForm", "third_letter").as_deref(),
            Some("")
        );
    }
}
