pub mod config;
pub mod donor;
pub mod eligibility;
pub mod error;
pub mod finder;
pub mod logging;
pub mod presenter;
pub mod registry;
pub mod utils;

#[cfg(feature = "tui")]
pub mod tui;

pub use config::Config;
pub use donor::{BloodGroup, BloodGroupSelection, DonorProjection, DonorRecord};
pub use eligibility::{find_eligible_donors, EligibilityEngine, EligibilityPredicate, ResultOrder};
pub use error::{DonorError, RegistryError, RenderError, Result};
pub use finder::{CycleOutcome, DonorFinder, FinderState};
pub use presenter::{DisplaySurface, DonorRow, ResultPresenter, TableSurface};
pub use registry::{DonorRegistry, InMemoryRegistry, SqliteRegistry};
