pub mod memory;
pub mod sqlite;

pub use memory::InMemoryRegistry;
pub use sqlite::SqliteRegistry;

use crate::{
    donor::DonorProjection,
    eligibility::EligibilityPredicate,
    error::RegistryError,
};

/// Read-only access to a store of donor records.
///
/// Implementations return the projected rows of every record matching the
/// predicate, in the store's native order.
#[cfg_attr(test, mockall::automock)]
pub trait DonorRegistry {
    fn find(
        &self,
        predicate: &EligibilityPredicate,
    ) -> std::result::Result<Vec<DonorProjection>, RegistryError>;
}

impl<R: DonorRegistry + ?Sized> DonorRegistry for &R {
    fn find(
        &self,
        predicate: &EligibilityPredicate,
    ) -> std::result::Result<Vec<DonorProjection>, RegistryError> {
        (**self).find(predicate)
    }
}

impl<R: DonorRegistry + ?Sized> DonorRegistry for Box<R> {
    fn find(
        &self,
        predicate: &EligibilityPredicate,
    ) -> std::result::Result<Vec<DonorProjection>, RegistryError> {
        (**self).find(predicate)
    }
}
