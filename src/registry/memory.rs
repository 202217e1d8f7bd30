use crate::{
    donor::{DonorProjection, DonorRecord},
    eligibility::EligibilityPredicate,
    error::RegistryError,
    registry::DonorRegistry,
};

/// Registry backed by a vector; native order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    records: Vec<DonorRecord>,
}

impl InMemoryRegistry {
    pub fn new(records: Vec<DonorRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: DonorRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DonorRecord] {
        &self.records
    }
}

impl DonorRegistry for InMemoryRegistry {
    fn find(
        &self,
        predicate: &EligibilityPredicate,
    ) -> std::result::Result<Vec<DonorProjection>, RegistryError> {
        Ok(self
            .records
            .iter()
            .filter(|record| predicate.matches(record))
            .map(DonorRecord::projection)
            .collect())
    }
}
