pub mod engine;
pub mod predicate;

pub use engine::{
    find_eligible_donors, find_for_selection, EligibilityEngine, ResultOrder,
    DEFAULT_COOLDOWN_DAYS, MAX_COOLDOWN_DAYS,
};
pub use predicate::{EligibilityPredicate, PredicateBuilder};
