use chrono::{Local, NaiveDate, Utc};

use crate::domain::entities::event::{apply_event, ReportEvent};
use crate::domain::entities::report::{ReportState, Section};
use crate::domain::services::recalc::{recalculate_all, ReportView};
use crate::usecase::services::persistence_service::PersistenceService;

/// The one report being edited in a window, with its derived figures.
pub struct ReportSession {
    state: ReportState,
    view: ReportView,
    persistence: PersistenceService,
}

impl ReportSession {
    /// Restores the saved snapshot (or starts blank) and computes every
    /// figure. Nothing is written back until the first accepted edit.
    pub fn open(persistence: PersistenceService) -> Self {
        Self::open_on(persistence, today())
    }

    pub fn open_on(persistence: PersistenceService, today: NaiveDate) -> Self {
        let state = persistence.load().unwrap_or_default();
        let view = recalculate_all(&state, today);
        Self {
            state,
            view,
            persistence,
        }
    }

    pub fn state(&self) -> &ReportState {
        &self.state
    }

    pub fn view(&self) -> &ReportView {
        &self.view
    }

    /// Applies one user input, refreshes the affected figures and persists.
    /// Returns the section that changed, `None` if the event was stale.
    pub fn dispatch(&mut self, event: ReportEvent) -> Option<Section> {
        tracing::trace!(?event, "dispatching report event");
        let section = apply_event(&mut self.state, event)?;
        self.view.refresh(&self.state, section);
        self.persist();
        Some(section)
    }

    /// Drops the stored snapshot and starts over from a blank report.
    pub fn reset(&mut self) {
        if let Err(err) = self.persistence.clear() {
            tracing::warn!(error = %err, "failed to clear report snapshot");
        }
        self.state = ReportState::new();
        self.view = recalculate_all(&self.state, today());
    }

    fn persist(&mut self) {
        if let Err(err) = self.persistence.save(&mut self.state, Utc::now()) {
            tracing::warn!(key = %self.persistence.key(), error = %err, "failed to save report snapshot");
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
