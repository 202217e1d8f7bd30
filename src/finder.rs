//! One query/render cycle per blood-group change.
//!
//! The display is cleared first, then the eligible donors for the new
//! selection are rendered. Errors are logged here and handed back to the
//! caller as a [`CycleOutcome`]; nothing is retried.

use chrono::NaiveDate;
use tracing::{debug, error, info};

use crate::{
    donor::BloodGroupSelection,
    eligibility::EligibilityEngine,
    error::{DonorError, Result},
    presenter::{DisplaySurface, ResultPresenter},
    registry::DonorRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderState {
    Idle,
    Querying,
}

#[derive(Debug)]
pub enum CycleOutcome {
    /// The display now shows this many donors.
    Rendered(usize),
    /// No group selected; the display was emptied.
    Cleared,
    /// The cycle failed. The display is either unchanged (invalid code) or
    /// empty (query or render failure).
    Failed(DonorError),
}

pub struct DonorFinder<R, S> {
    engine: EligibilityEngine<R>,
    presenter: ResultPresenter<S>,
    state: FinderState,
    selection: BloodGroupSelection,
}

impl<R: DonorRegistry, S: DisplaySurface> DonorFinder<R, S> {
    pub fn new(engine: EligibilityEngine<R>, surface: S) -> Self {
        Self {
            engine,
            presenter: ResultPresenter::new(surface),
            state: FinderState::Idle,
            selection: BloodGroupSelection::Unselected,
        }
    }

    pub fn state(&self) -> FinderState {
        self.state
    }

    /// The selection behind the rows currently displayed.
    pub fn selection(&self) -> BloodGroupSelection {
        self.selection
    }

    pub fn engine(&self) -> &EligibilityEngine<R> {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        self.presenter.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.presenter.surface_mut()
    }

    /// Run a cycle and report errors to the caller.
    pub fn run_cycle(&mut self, blood_group_code: u8, today: NaiveDate) -> Result<usize> {
        let selection = BloodGroupSelection::try_from(blood_group_code)?;

        self.state = FinderState::Querying;
        debug!("Finder querying for {}", selection);
        let result = self.query_and_render(selection, today);
        self.state = FinderState::Idle;

        result
    }

    fn query_and_render(&mut self, selection: BloodGroupSelection, today: NaiveDate) -> Result<usize> {
        self.presenter.clear()?;
        self.selection = selection;

        let donors = self.engine.find_for_selection(selection, today)?;
        self.presenter.render(&donors)?;
        Ok(donors.len())
    }

    /// Handle a blood-group change event. Never propagates an error.
    pub fn on_blood_group_changed(&mut self, blood_group_code: u8, today: NaiveDate) -> CycleOutcome {
        match self.run_cycle(blood_group_code, today) {
            Ok(_) if self.selection == BloodGroupSelection::Unselected => CycleOutcome::Cleared,
            Ok(count) => {
                info!(
                    "Rendered {} eligible donors for blood group {} as of {}",
                    count, self.selection, today
                );
                CycleOutcome::Rendered(count)
            }
            Err(e) => {
                error!(
                    "Donor search failed: blood_group_code={} reference_date={} error={}",
                    blood_group_code, today, e
                );
                CycleOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        donor::{BloodGroup, DonorRecord},
        eligibility::ResultOrder,
        presenter::TableSurface,
        registry::InMemoryRegistry,
    };
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 31).unwrap()
    }

    fn finder() -> DonorFinder<InMemoryRegistry, TableSurface> {
        let registry = InMemoryRegistry::new(vec![DonorRecord {
            id: 1,
            first_name: "Meera".to_string(),
            last_name: "Pillai".to_string(),
            phone_number: "555-0142".to_string(),
            blood_group: BloodGroup::APositive,
            last_donation_date: today() - Duration::days(60),
        }]);
        let engine = EligibilityEngine::new(registry, Duration::days(30), ResultOrder::Registry);
        DonorFinder::new(engine, TableSurface::new())
    }

    #[test]
    fn invalid_code_leaves_display_unchanged() {
        let mut finder = finder();
        finder.on_blood_group_changed(1, today());
        assert_eq!(finder.surface().len(), 1);

        let outcome = finder.on_blood_group_changed(42, today());
        assert!(matches!(
            outcome,
            CycleOutcome::Failed(DonorError::InvalidArgument(_))
        ));
        assert_eq!(finder.surface().len(), 1);
        assert_eq!(finder.selection(), BloodGroupSelection::Group(BloodGroup::APositive));
        assert_eq!(finder.state(), FinderState::Idle);
    }

    #[test]
    fn unselected_clears_display() {
        let mut finder = finder();
        finder.on_blood_group_changed(1, today());

        let outcome = finder.on_blood_group_changed(0, today());
        assert!(matches!(outcome, CycleOutcome::Cleared));
        assert!(finder.surface().is_empty());
    }

    #[test]
    fn detached_surface_reports_render_failure() {
        let mut finder = finder();
        finder.surface_mut().detach();

        let outcome = finder.on_blood_group_changed(1, today());
        assert!(matches!(
            outcome,
            CycleOutcome::Failed(DonorError::RenderFailure(_))
        ));
        assert_eq!(finder.state(), FinderState::Idle);
    }
}
