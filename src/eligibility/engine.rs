use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::EligibilityConfig,
    donor::{BloodGroupSelection, DonorProjection},
    eligibility::EligibilityPredicate,
    error::Result,
    registry::DonorRegistry,
};

/// Cooldown used when nothing else is configured.
pub const DEFAULT_COOLDOWN_DAYS: i64 = 30;

/// Largest cooldown accepted from configuration or the command line.
pub const MAX_COOLDOWN_DAYS: i64 = 36_500;

/// How eligible donors are ordered before they are shown.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultOrder {
    /// Whatever order the registry returns (insertion order for SQLite).
    #[default]
    Registry,
    /// Last name, then first name, then phone number.
    Name,
}

/// Find every donor of the selected group whose last donation is more than
/// `cooldown` before `today`.
///
/// Code 0 means "no group selected" and returns an empty list without
/// touching the registry. Codes above 8 are rejected.
pub fn find_eligible_donors<R: DonorRegistry + ?Sized>(
    registry: &R,
    blood_group_code: u8,
    today: NaiveDate,
    cooldown: Duration,
) -> Result<Vec<DonorProjection>> {
    let selection = BloodGroupSelection::try_from(blood_group_code)?;
    find_for_selection(registry, selection, today, cooldown)
}

pub fn find_for_selection<R: DonorRegistry + ?Sized>(
    registry: &R,
    selection: BloodGroupSelection,
    today: NaiveDate,
    cooldown: Duration,
) -> Result<Vec<DonorProjection>> {
    let group = match selection {
        BloodGroupSelection::Unselected => {
            debug!("No blood group selected, skipping registry query");
            return Ok(Vec::new());
        }
        BloodGroupSelection::Group(group) => group,
    };

    let predicate = EligibilityPredicate::builder()
        .blood_group(group)
        .last_donation_more_than(cooldown, today)
        .build()?;

    let donors = registry.find(&predicate)?;
    debug!("Found {} eligible {} donors as of {}", donors.len(), group, today);
    Ok(donors)
}

/// Eligibility query bound to a registry and its settings.
pub struct EligibilityEngine<R> {
    registry: R,
    cooldown: Duration,
    order: ResultOrder,
}

impl<R: DonorRegistry> EligibilityEngine<R> {
    pub fn new(registry: R, cooldown: Duration, order: ResultOrder) -> Self {
        Self {
            registry,
            cooldown,
            order,
        }
    }

    pub fn from_config(registry: R, config: &EligibilityConfig) -> Self {
        Self::new(registry, config.cooldown(), config.order)
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn order(&self) -> ResultOrder {
        self.order
    }

    pub fn find_eligible_donors(
        &self,
        blood_group_code: u8,
        today: NaiveDate,
    ) -> Result<Vec<DonorProjection>> {
        let selection = BloodGroupSelection::try_from(blood_group_code)?;
        self.find_for_selection(selection, today)
    }

    pub fn find_for_selection(
        &self,
        selection: BloodGroupSelection,
        today: NaiveDate,
    ) -> Result<Vec<DonorProjection>> {
        let mut donors = find_for_selection(&self.registry, selection, today, self.cooldown)?;
        if self.order == ResultOrder::Name {
            sort_by_name(&mut donors);
        }
        Ok(donors)
    }
}

fn sort_by_name(donors: &mut [DonorProjection]) {
    donors.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
            .then_with(|| a.phone_number.cmp(&b.phone_number))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        donor::{BloodGroup, DonorRecord},
        error::{DonorError, RegistryError},
        registry::{InMemoryRegistry, MockDonorRegistry},
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 31).unwrap()
    }

    fn donor(id: i64, first: &str, last: &str, group: BloodGroup, days_ago: i64) -> DonorRecord {
        DonorRecord {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone_number: format!("555-01{:02}", id),
            blood_group: group,
            last_donation_date: today() - Duration::days(days_ago),
        }
    }

    #[test]
    fn unselected_group_skips_registry() {
        let mut registry = MockDonorRegistry::new();
        registry.expect_find().times(0);

        let donors =
            find_eligible_donors(&registry, 0, today(), Duration::days(DEFAULT_COOLDOWN_DAYS))
                .unwrap();
        assert!(donors.is_empty());
    }

    #[test]
    fn invalid_code_is_rejected_without_query() {
        let mut registry = MockDonorRegistry::new();
        registry.expect_find().times(0);

        let err = find_eligible_donors(&registry, 9, today(), Duration::days(30)).unwrap_err();
        assert!(matches!(err, DonorError::InvalidArgument(_)));
    }

    #[test]
    fn registry_failure_becomes_query_failure() {
        let mut registry = MockDonorRegistry::new();
        registry
            .expect_find()
            .times(1)
            .returning(|_| Err(RegistryError::Unavailable("connection refused".to_string())));

        let err = find_eligible_donors(&registry, 7, today(), Duration::days(30)).unwrap_err();
        match err {
            DonorError::QueryFailure(RegistryError::Unavailable(cause)) => {
                assert_eq!(cause, "connection refused")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn predicate_carries_query_arguments() {
        let mut registry = MockDonorRegistry::new();
        registry
            .expect_find()
            .withf(|predicate| {
                predicate.blood_group() == BloodGroup::AbNegative
                    && predicate.min_gap() == Duration::days(45)
            })
            .returning(|_| Ok(Vec::new()));

        find_eligible_donors(&registry, 6, today(), Duration::days(45)).unwrap();
    }

    #[test]
    fn name_order_sorts_by_last_then_first() {
        let registry = InMemoryRegistry::new(vec![
            donor(1, "Zoe", "Brown", BloodGroup::BPositive, 90),
            donor(2, "Adam", "Brown", BloodGroup::BPositive, 90),
            donor(3, "Eve", "Adams", BloodGroup::BPositive, 90),
        ]);

        let native = EligibilityEngine::new(&registry, Duration::days(30), ResultOrder::Registry)
            .find_eligible_donors(3, today())
            .unwrap();
        let native: Vec<_> = native.iter().map(|d| d.first_name.as_str()).collect();
        assert_eq!(native, vec!["Zoe", "Adam", "Eve"]);

        let sorted = EligibilityEngine::new(&registry, Duration::days(30), ResultOrder::Name)
            .find_eligible_donors(3, today())
            .unwrap();
        let sorted: Vec<_> = sorted.iter().map(|d| d.first_name.as_str()).collect();
        assert_eq!(sorted, vec!["Eve", "Adam", "Zoe"]);
    }
}
