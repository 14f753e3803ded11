//! Result and error display regions
//!
//! Both regions are plain in-memory models. Front ends (terminal, HTML)
//! turn them into output; nothing here knows about either.

use crate::models::AlertsResponse;

pub const NO_ALERTS_NOTICE: &str = "No active alerts in this area.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading,
    Notice,
    Card,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
}

impl Element {
    pub fn class_name(&self) -> &'static str {
        match self.kind {
            ElementKind::Heading => "summary-title",
            ElementKind::Notice => "no-alerts-msg",
            ElementKind::Card => "alert-card",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self.kind {
            ElementKind::Heading => "h3",
            ElementKind::Notice => "p",
            ElementKind::Card => "div",
        }
    }
}

/// Container the renderer writes into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPanel {
    children: Vec<Element>,
}

impl ResultsPanel {
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn cards(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(|e| e.kind == ElementKind::Card)
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, kind: ElementKind, text: impl Into<String>) {
        self.children.push(Element {
            kind,
            text: text.into(),
        });
    }
}

/// Replace the container's contents with a heading plus one card per
/// feature, or the no-alerts notice when there are none.
pub fn render(container: &mut ResultsPanel, response: &AlertsResponse) {
    container.clear();
    container.append(ElementKind::Heading, response.summary());

    if response.features.is_empty() {
        container.append(ElementKind::Notice, NO_ALERTS_NOTICE);
        return;
    }

    for feature in &response.features {
        container.append(ElementKind::Card, feature.headline());
    }
}

/// Error message area; hidden whenever its text is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    text: String,
    hidden: bool,
}

impl Default for ErrorPanel {
    fn default() -> Self {
        Self {
            text: String::new(),
            hidden: true,
        }
    }
}

impl ErrorPanel {
    pub fn show(&mut self, message: &str) {
        self.text = message.to_string();
        self.hidden = false;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.hidden = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}
