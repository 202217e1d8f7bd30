pub mod models;

pub use models::{BloodGroup, BloodGroupSelection, DonorProjection, DonorRecord, UNSELECTED_CODE};
