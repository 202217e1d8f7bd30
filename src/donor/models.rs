use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DonorError;

/// Registry code reserved for "no blood group selected".
pub const UNSELECTED_CODE: u8 = 0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BloodGroup {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodGroup {
    /// All groups in registry code order.
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    /// Registry encoding, 1..=8.
    pub fn code(self) -> u8 {
        match self {
            BloodGroup::APositive => 1,
            BloodGroup::ANegative => 2,
            BloodGroup::BPositive => 3,
            BloodGroup::BNegative => 4,
            BloodGroup::AbPositive => 5,
            BloodGroup::AbNegative => 6,
            BloodGroup::OPositive => 7,
            BloodGroup::ONegative => 8,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|group| group.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BloodGroup {
    type Err = DonorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| {
                DonorError::InvalidArgument(format!("unknown blood group code {}", code))
            });
        }

        Self::ALL
            .iter()
            .copied()
            .find(|group| group.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DonorError::InvalidArgument(format!("unknown blood group `{}`", trimmed)))
    }
}

/// The value of the blood-group selector: either nothing or one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BloodGroupSelection {
    #[default]
    Unselected,
    Group(BloodGroup),
}

impl BloodGroupSelection {
    pub fn code(self) -> u8 {
        match self {
            BloodGroupSelection::Unselected => UNSELECTED_CODE,
            BloodGroupSelection::Group(group) => group.code(),
        }
    }

    pub fn group(self) -> Option<BloodGroup> {
        match self {
            BloodGroupSelection::Unselected => None,
            BloodGroupSelection::Group(group) => Some(group),
        }
    }
}

impl TryFrom<u8> for BloodGroupSelection {
    type Error = DonorError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if code == UNSELECTED_CODE {
            return Ok(BloodGroupSelection::Unselected);
        }
        BloodGroup::from_code(code)
            .map(BloodGroupSelection::Group)
            .ok_or_else(|| {
                DonorError::InvalidArgument(format!(
                    "blood group code {} is outside 0..=8",
                    code
                ))
            })
    }
}

impl fmt::Display for BloodGroupSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloodGroupSelection::Unselected => f.write_str("(none)"),
            BloodGroupSelection::Group(group) => f.write_str(group.label()),
        }
    }
}

/// A donor row as the registry stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonorRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub blood_group: BloodGroup,
    pub last_donation_date: NaiveDate,
}

impl DonorRecord {
    pub fn projection(&self) -> DonorProjection {
        DonorProjection {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

/// The part of a donor record that is shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DonorProjection {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for group in BloodGroup::ALL {
            assert_eq!(BloodGroup::from_code(group.code()), Some(group));
        }
        assert_eq!(BloodGroup::from_code(0), None);
        assert_eq!(BloodGroup::from_code(9), None);
    }

    #[test]
    fn parses_labels_and_codes() {
        assert_eq!("O+".parse::<BloodGroup>().unwrap(), BloodGroup::OPositive);
        assert_eq!(" ab- ".parse::<BloodGroup>().unwrap(), BloodGroup::AbNegative);
        assert_eq!("3".parse::<BloodGroup>().unwrap(), BloodGroup::BPositive);
        assert!("C+".parse::<BloodGroup>().is_err());
        assert!("12".parse::<BloodGroup>().is_err());
    }

    #[test]
    fn selection_from_code() {
        assert_eq!(
            BloodGroupSelection::try_from(0).unwrap(),
            BloodGroupSelection::Unselected
        );
        assert_eq!(
            BloodGroupSelection::try_from(8).unwrap(),
            BloodGroupSelection::Group(BloodGroup::ONegative)
        );
        assert!(matches!(
            BloodGroupSelection::try_from(9),
            Err(DonorError::InvalidArgument(_))
        ));
    }
}
