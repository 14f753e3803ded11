//! UI capability interface
//!
//! The controller only ever talks to an `AlertsView`. `Page` is the
//! in-memory implementation both front ends render from.

use crate::models::AlertsResponse;
use crate::render::{render, ErrorPanel, ResultsPanel};

pub trait AlertsView {
    fn set_results(&mut self, response: &AlertsResponse);
    fn set_error(&mut self, message: &str);
    fn clear_error(&mut self);
    fn clear_input(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Idle,
    ShowingResults(AlertsResponse),
    ShowingError(String),
}

/// Form page: input box, results container, error message
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub input: String,
    results: ResultsPanel,
    error: ErrorPanel,
    last_response: Option<AlertsResponse>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &ResultsPanel {
        &self.results
    }

    pub fn error(&self) -> &ErrorPanel {
        &self.error
    }

    pub fn ui_state(&self) -> UiState {
        if self.error.is_visible() {
            return UiState::ShowingError(self.error.text().to_string());
        }
        match &self.last_response {
            Some(response) => UiState::ShowingResults(response.clone()),
            None => UiState::Idle,
        }
    }
}

impl AlertsView for Page {
    fn set_results(&mut self, response: &AlertsResponse) {
        render(&mut self.results, response);
        self.last_response = Some(response.clone());
    }

    fn set_error(&mut self, message: &str) {
        self.error.show(message);
    }

    fn clear_error(&mut self) {
        self.error.clear();
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}
