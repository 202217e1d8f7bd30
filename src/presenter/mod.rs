pub mod surface;

pub use surface::TableSurface;

use serde::Serialize;
use tracing::warn;

use crate::{
    donor::DonorProjection,
    error::{RenderError, Result},
};

/// Column headers of the donor table, in display order.
pub const COLUMNS: [&str; 3] = ["First Name", "Last Name", "Phone Number"];

/// One displayed row; cells follow [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonorRow {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl DonorRow {
    pub fn cells(&self) -> [&str; 3] {
        [&self.first_name, &self.last_name, &self.phone_number]
    }
}

impl From<&DonorProjection> for DonorRow {
    fn from(donor: &DonorProjection) -> Self {
        Self {
            first_name: donor.first_name.clone(),
            last_name: donor.last_name.clone(),
            phone_number: donor.phone_number.clone(),
        }
    }
}

/// Something rows can be drawn onto.
pub trait DisplaySurface {
    fn clear(&mut self) -> std::result::Result<(), RenderError>;

    fn append_row(&mut self, row: DonorRow) -> std::result::Result<(), RenderError>;
}

/// Writes donor projections onto a display surface it owns.
pub struct ResultPresenter<S> {
    surface: S,
}

impl<S: DisplaySurface> ResultPresenter<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clear(&mut self) -> Result<()> {
        self.surface.clear()?;
        Ok(())
    }

    /// Append one row per donor, keeping their order.
    ///
    /// If the surface rejects a row, the rows already appended are removed
    /// again so a partial result is never left on screen.
    pub fn render(&mut self, donors: &[DonorProjection]) -> Result<()> {
        for donor in donors {
            if let Err(e) = self.surface.append_row(DonorRow::from(donor)) {
                if let Err(clear_err) = self.surface.clear() {
                    warn!("Failed to clear partial results: {}", clear_err);
                }
                return Err(e.into());
            }
        }
        Ok(())
    }
}
