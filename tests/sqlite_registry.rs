use chrono::{Duration, NaiveDate};
use donor_finder::{
    BloodGroup, DonorRecord, DonorRegistry, EligibilityEngine, EligibilityPredicate,
    InMemoryRegistry, ResultOrder, SqliteRegistry,
};
use rusqlite::{params, Connection};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// Registry file with the schema created by `SqliteRegistry::open` and the
/// given rows written through a separate connection.
fn seeded_registry(dir: &TempDir, records: &[DonorRecord]) -> SqliteRegistry {
    let path = dir.path().join("donors.db");
    let path = path.to_str().unwrap();

    let registry = SqliteRegistry::open(path).unwrap();

    let conn = Connection::open(path).unwrap();
    for record in records {
        conn.execute(
            "INSERT INTO donors (id, first_name, last_name, phone_number, blood_group, last_donation_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id,
                record.first_name,
                record.last_name,
                record.phone_number,
                record.blood_group.code(),
                record.last_donation_date.format("%Y-%m-%d").to_string(),
            ],
        )
        .unwrap();
    }

    registry
}

fn records() -> Vec<DonorRecord> {
    let mut records = Vec::new();
    let mut id = 0;
    for group in [BloodGroup::OPositive, BloodGroup::ONegative, BloodGroup::AbPositive] {
        for gap in [0, 15, 29, 30, 31, 45, 60, 400] {
            id += 1;
            records.push(DonorRecord {
                id,
                first_name: format!("Donor{}", id),
                last_name: format!("{}-{}", group, gap),
                phone_number: format!("555-{:04}", id),
                blood_group: group,
                last_donation_date: today() - Duration::days(gap),
            });
        }
    }
    records
}

#[test]
fn sql_filter_agrees_with_predicate() {
    let dir = TempDir::new().unwrap();
    let records = records();
    let sqlite = seeded_registry(&dir, &records);
    let memory = InMemoryRegistry::new(records);

    for group in BloodGroup::ALL {
        for cooldown in [0, 29, 30, 31, 90] {
            let predicate = EligibilityPredicate::builder()
                .blood_group(group)
                .last_donation_more_than(Duration::days(cooldown), today())
                .build()
                .unwrap();

            assert_eq!(
                sqlite.find(&predicate).unwrap(),
                memory.find(&predicate).unwrap(),
                "group {} cooldown {}",
                group,
                cooldown
            );
        }
    }
}

#[test]
fn leap_day_gap_is_counted() {
    // 2024-01-31 to 2024-03-01 spans February 29th: 30 days.
    let dir = TempDir::new().unwrap();
    let registry = seeded_registry(
        &dir,
        &[DonorRecord {
            id: 1,
            first_name: "Leap".to_string(),
            last_name: "Year".to_string(),
            phone_number: "555-0229".to_string(),
            blood_group: BloodGroup::BPositive,
            last_donation_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }],
    );
    let engine = EligibilityEngine::new(registry, Duration::days(30), ResultOrder::Registry);

    let code = BloodGroup::BPositive.code();
    assert!(engine.find_eligible_donors(code, today()).unwrap().is_empty());
    assert_eq!(
        engine
            .find_eligible_donors(code, today() + Duration::days(1))
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn name_order_applies_to_sqlite_results() {
    let dir = TempDir::new().unwrap();
    let donor = |id: i64, first: &str, last: &str| DonorRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone_number: format!("555-{:04}", id),
        blood_group: BloodGroup::AbNegative,
        last_donation_date: today() - Duration::days(120),
    };
    let registry = seeded_registry(
        &dir,
        &[
            donor(1, "Sara", "Kurian"),
            donor(2, "Arun", "George"),
            donor(3, "Anu", "Kurian"),
        ],
    );
    let engine = EligibilityEngine::new(registry, Duration::days(30), ResultOrder::Name);

    let found = engine
        .find_eligible_donors(BloodGroup::AbNegative.code(), today())
        .unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|d| format!("{} {}", d.first_name, d.last_name))
        .collect();
    assert_eq!(names, vec!["Arun George", "Anu Kurian", "Sara Kurian"]);
}

#[test]
fn reopening_keeps_existing_rows() {
    let dir = TempDir::new().unwrap();
    let registry = seeded_registry(&dir, &records());
    let total = registry.total_donors().unwrap();
    drop(registry);

    let path = dir.path().join("donors.db");
    let reopened = SqliteRegistry::open(path.to_str().unwrap()).unwrap();
    assert_eq!(reopened.total_donors().unwrap(), total);
}
