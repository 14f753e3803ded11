//! Form submission workflow
//!
//! normalize -> validate -> fetch -> render results or show error.
//! Each submission is independent; nothing is cancelled when a newer one
//! starts. What happens to a late response is decided by `SubmissionOrdering`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::client::AlertsSource;
use crate::config::Settings;
use crate::error::AlertsError;
use crate::state_names::{is_known_code, is_valid, normalize};
use crate::view::AlertsView;

/// How overlapping submissions are applied to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionOrdering {
    /// Every response is applied as it arrives; the last to arrive wins
    #[default]
    ArrivalOrder,
    /// Responses to anything but the newest fetching submission are dropped
    LatestSubmission,
}

#[derive(Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// Input failed validation; no request was made
    Rejected,
    Succeeded { code: String, alerts: usize },
    Failed(AlertsError),
    /// A newer submission started while this one was in flight
    Superseded,
}

pub struct AlertsFormController<S> {
    source: S,
    strict_codes: bool,
    ordering: SubmissionOrdering,
    generation: AtomicU64,
}

impl<S: AlertsSource> AlertsFormController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            strict_codes: false,
            ordering: SubmissionOrdering::ArrivalOrder,
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_settings(source: S, settings: &Settings) -> Self {
        Self::new(source)
            .strict_codes(settings.strict_codes)
            .ordering(settings.ordering)
    }

    pub fn strict_codes(mut self, strict: bool) -> Self {
        self.strict_codes = strict;
        self
    }

    pub fn ordering(mut self, ordering: SubmissionOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    fn accepts(&self, code: &str) -> bool {
        is_valid(code) && (!self.strict_codes || is_known_code(code))
    }

    /// Run one submission of `raw` against `view`.
    ///
    /// The view lock is only taken after the fetch completes, so several
    /// submissions may be in flight against the same view.
    pub async fn submit<V: AlertsView>(&self, raw: &str, view: &Mutex<V>) -> SubmissionOutcome {
        let code = normalize(raw);

        if !self.accepts(&code) {
            warn!(input = %raw.trim(), "rejected state input");
            lock(view).set_error(&AlertsError::Validation.to_string());
            return SubmissionOutcome::Rejected;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(%code, generation, "fetching active alerts");

        let result = self.source.fetch_alerts(&code).await;

        if self.ordering == SubmissionOrdering::LatestSubmission
            && self.generation.load(Ordering::SeqCst) != generation
        {
            debug!(%code, generation, "dropping response to superseded submission");
            return SubmissionOutcome::Superseded;
        }

        let mut view = lock(view);
        match result {
            Ok(response) => {
                let alerts = response.features.len();
                info!(%code, alerts, "alerts received");
                view.clear_input();
                view.clear_error();
                view.set_results(&response);
                SubmissionOutcome::Succeeded { code, alerts }
            }
            Err(err) => {
                warn!(%code, error = %err, "alerts request failed");
                view.set_error(&err.to_string());
                SubmissionOutcome::Failed(err)
            }
        }
    }
}

fn lock<V>(view: &Mutex<V>) -> MutexGuard<'_, V> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}
