use rusqlite::{params, Connection};
use tracing::debug;

use crate::{
    donor::{BloodGroup, DonorProjection},
    eligibility::EligibilityPredicate,
    error::RegistryError,
    registry::DonorRegistry,
};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Donor registry stored in a SQLite `donors` table.
///
/// Dates are stored as `YYYY-MM-DD` text and compared with `julianday`, so
/// the day difference is exact for whole-day dates.
pub struct SqliteRegistry {
    conn: Connection,
}

impl SqliteRegistry {
    pub fn open(path: &str) -> Result<Self, RegistryError> {
        let conn = Connection::open(path)?;
        let registry = Self { conn };
        registry.init_schema()?;
        Ok(registry)
    }

    pub fn open_in_memory() -> Result<Self, RegistryError> {
        let conn = Connection::open_in_memory()?;
        let registry = Self { conn };
        registry.init_schema()?;
        Ok(registry)
    }

    fn init_schema(&self) -> Result<(), RegistryError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS donors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                phone_number TEXT NOT NULL,
                blood_group INTEGER NOT NULL,
                last_donation_date TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_donors_blood_group ON donors(blood_group)",
            [],
        )?;

        Ok(())
    }

    pub fn total_donors(&self) -> Result<usize, RegistryError> {
        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM donors", [], |row| row.get(0))?;
        Ok(total as usize)
    }

    /// Number of registered donors per blood group, in code order.
    pub fn count_by_group(&self) -> Result<Vec<(BloodGroup, usize)>, RegistryError> {
        let mut stmt = self.conn.prepare(
            "SELECT blood_group, COUNT(*) FROM donors
             GROUP BY blood_group
             ORDER BY blood_group",
        )?;

        let raw = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(|(code, count)| {
                let group = u8::try_from(code)
                    .ok()
                    .and_then(BloodGroup::from_code)
                    .ok_or_else(|| {
                        RegistryError::MalformedRow(format!("unknown blood group code {}", code))
                    })?;
                Ok((group, count as usize))
            })
            .collect()
    }
}

impl DonorRegistry for SqliteRegistry {
    fn find(
        &self,
        predicate: &EligibilityPredicate,
    ) -> std::result::Result<Vec<DonorProjection>, RegistryError> {
        let min_gap_days = predicate.min_gap().num_seconds() as f64 / SECONDS_PER_DAY;
        let reference_date = predicate.reference_date().format("%Y-%m-%d").to_string();

        debug!(
            "Querying donors: group={} reference_date={} min_gap_days={}",
            predicate.blood_group(),
            reference_date,
            min_gap_days
        );

        let mut stmt = self.conn.prepare(
            "SELECT first_name, last_name, phone_number
             FROM donors
             WHERE blood_group = ?1
               AND julianday(?2) - julianday(last_donation_date) > ?3
             ORDER BY id",
        )?;

        let donors = stmt
            .query_map(
                params![predicate.blood_group().code(), reference_date, min_gap_days],
                |row| {
                    Ok(DonorProjection {
                        first_name: row.get(0)?,
                        last_name: row.get(1)?,
                        phone_number: row.get(2)?,
                    })
                },
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(donors)
    }
}
