pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod render;
pub mod state_names;
pub mod view;
pub mod web;

pub use client::{AlertsClient, AlertsSource};
pub use controller::{AlertsFormController, SubmissionOrdering, SubmissionOutcome};
pub use error::AlertsError;
pub use view::{AlertsView, Page};
