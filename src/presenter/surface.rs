use crate::{
    error::RenderError,
    presenter::{DisplaySurface, DonorRow},
};

/// In-memory donor table shared by the CLI printer and the TUI widget.
#[derive(Debug, Clone)]
pub struct TableSurface {
    rows: Vec<DonorRow>,
    attached: bool,
}

impl TableSurface {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            attached: true,
        }
    }

    pub fn rows(&self) -> &[DonorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Mark the table as gone; later writes fail with `RenderError::Detached`.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

impl Default for TableSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for TableSurface {
    fn clear(&mut self) -> Result<(), RenderError> {
        if !self.attached {
            return Err(RenderError::Detached);
        }
        self.rows.clear();
        Ok(())
    }

    fn append_row(&mut self, row: DonorRow) -> Result<(), RenderError> {
        if !self.attached {
            return Err(RenderError::Detached);
        }
        self.rows.push(row);
        Ok(())
    }
}
