use chrono::{Duration, NaiveDate};

use crate::{
    donor::{BloodGroup, DonorRecord},
    error::{DonorError, Result},
};

/// Filter handed to a donor registry.
///
/// A record matches when its blood group equals `blood_group` and the time
/// elapsed between its last donation and `reference_date` is strictly
/// greater than `min_gap`. Registry adapters translate this into their own
/// query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityPredicate {
    blood_group: BloodGroup,
    reference_date: NaiveDate,
    min_gap: Duration,
}

impl EligibilityPredicate {
    pub fn builder() -> PredicateBuilder {
        PredicateBuilder::default()
    }

    pub fn blood_group(&self) -> BloodGroup {
        self.blood_group
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn min_gap(&self) -> Duration {
        self.min_gap
    }

    /// Time between the record's last donation and the reference date.
    pub fn elapsed(&self, record: &DonorRecord) -> Duration {
        self.reference_date - record.last_donation_date
    }

    pub fn matches(&self, record: &DonorRecord) -> bool {
        record.blood_group == self.blood_group && self.elapsed(record) > self.min_gap
    }
}

#[derive(Debug, Default)]
pub struct PredicateBuilder {
    blood_group: Option<BloodGroup>,
    gap: Option<(NaiveDate, Duration)>,
}

impl PredicateBuilder {
    pub fn blood_group(mut self, group: BloodGroup) -> Self {
        self.blood_group = Some(group);
        self
    }

    /// Require `reference_date - last_donation_date > min_gap`.
    pub fn last_donation_more_than(mut self, min_gap: Duration, reference_date: NaiveDate) -> Self {
        self.gap = Some((reference_date, min_gap));
        self
    }

    pub fn build(self) -> Result<EligibilityPredicate> {
        let blood_group = self.blood_group.ok_or_else(|| {
            DonorError::InvalidArgument("predicate requires a blood group".to_string())
        })?;
        let (reference_date, min_gap) = self.gap.ok_or_else(|| {
            DonorError::InvalidArgument("predicate requires a donation gap".to_string())
        })?;

        if min_gap < Duration::zero() {
            return Err(DonorError::InvalidArgument(format!(
                "cooldown must not be negative, got {} days",
                min_gap.num_days()
            )));
        }

        Ok(EligibilityPredicate {
            blood_group,
            reference_date,
            min_gap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(group: BloodGroup, last_donation: &str) -> DonorRecord {
        DonorRecord {
            id: 1,
            first_name: "Asha".to_string(),
            last_name: "Menon".to_string(),
            phone_number: "555-0101".to_string(),
            blood_group: group,
            last_donation_date: date(last_donation),
        }
    }

    fn o_positive(today: &str) -> EligibilityPredicate {
        EligibilityPredicate::builder()
            .blood_group(BloodGroup::OPositive)
            .last_donation_more_than(Duration::days(30), date(today))
            .build()
            .unwrap()
    }

    #[test]
    fn gap_is_strictly_greater() {
        let predicate = o_positive("2024-10-31");
        assert!(!predicate.matches(&record(BloodGroup::OPositive, "2024-10-01")));
        assert!(predicate.matches(&record(BloodGroup::OPositive, "2024-09-30")));
    }

    #[test]
    fn other_groups_never_match() {
        let predicate = o_positive("2024-10-31");
        assert!(!predicate.matches(&record(BloodGroup::ONegative, "2020-01-01")));
    }

    #[test]
    fn donation_after_reference_date_does_not_match() {
        let predicate = o_positive("2024-10-31");
        assert!(!predicate.matches(&record(BloodGroup::OPositive, "2024-11-15")));
    }

    #[test]
    fn builder_requires_both_parts() {
        assert!(EligibilityPredicate::builder()
            .blood_group(BloodGroup::APositive)
            .build()
            .is_err());
        assert!(EligibilityPredicate::builder()
            .last_donation_more_than(Duration::days(30), date("2024-10-31"))
            .build()
            .is_err());
    }

    #[test]
    fn builder_rejects_negative_gap() {
        let err = EligibilityPredicate::builder()
            .blood_group(BloodGroup::APositive)
            .last_donation_more_than(Duration::days(-1), date("2024-10-31"))
            .build()
            .unwrap_err();
        assert!(matches!(err, DonorError::InvalidArgument(_)));
    }
}
