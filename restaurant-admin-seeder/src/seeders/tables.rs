use crate::fixtures::TABLES;
use crate::models::{DiningTable, NewDiningTable};
use crate::seeders::SeedOutcome;
use crate::store::SeedStore;
use crate::SeedError;

/// Inserts the dining tables by number. Capacity is written on creation only; an existing row
/// keeps whatever capacity it already has.
pub fn seed_tables(store: &mut dyn SeedStore) -> Result<SeedOutcome<DiningTable>, SeedError> {
    println!("Creating restaurant tables...");

    let mut outcome = SeedOutcome::default();
    for fixture in TABLES {
        let result = store.get_or_create_table(&NewDiningTable {
            number: fixture.number,
            capacity: fixture.capacity,
        })?;
        if result.created {
            println!("  ✓ Created table {}", result.record.number);
        } else {
            println!("  - Table {} already exists", result.record.number);
        }
        outcome.push(result);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_creates_twelve_numbered_tables() {
        let mut store = MemoryStore::new();
        let outcome = seed_tables(&mut store).unwrap();

        let mut numbers: Vec<_> = outcome.created.iter().map(|t| t.number).collect();
        numbers.sort();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
        assert!(outcome.existing.is_empty());
    }

    #[test]
    fn test_capacity_is_persisted() {
        let mut store = MemoryStore::new();
        seed_tables(&mut store).unwrap();

        let table = store.tables.iter().find(|t| t.number == 12).unwrap();
        assert_eq!(table.capacity, 10);
    }

    #[test]
    fn test_rerun_reports_existing() {
        let mut store = MemoryStore::new();
        seed_tables(&mut store).unwrap();
        let outcome = seed_tables(&mut store).unwrap();

        assert!(outcome.created.is_empty());
        assert_eq!(outcome.existing.len(), 12);
        assert_eq!(store.tables.len(), 12);
    }

    #[test]
    fn test_existing_capacity_is_not_corrected() {
        let mut store = MemoryStore::new();
        store
            .get_or_create_table(&NewDiningTable {
                number: 1,
                capacity: 20,
            })
            .unwrap();

        seed_tables(&mut store).unwrap();

        let table = store.tables.iter().find(|t| t.number == 1).unwrap();
        assert_eq!(table.capacity, 20);
    }
}
