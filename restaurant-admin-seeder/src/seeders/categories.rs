use crate::fixtures::CATEGORIES;
use crate::models::{Category, NewCategory};
use crate::seeders::SeedOutcome;
use crate::store::SeedStore;
use crate::SeedError;

pub fn seed_categories(store: &mut dyn SeedStore) -> Result<SeedOutcome<Category>, SeedError> {
    println!("\nCreating menu categories...");

    let mut outcome = SeedOutcome::default();
    for fixture in CATEGORIES {
        let result = store.get_or_create_category(&NewCategory {
            name: fixture.name.to_string(),
            description: fixture.description.to_string(),
        })?;
        if result.created {
            println!("  ✓ Created category: {}", result.record.name);
        } else {
            println!("  - Category '{}' already exists", result.record.name);
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
    fn test_seed_categories() {
        let mut store = MemoryStore::new();

        let first = seed_categories(&mut store).unwrap();
        let second = seed_categories(&mut store).unwrap();

        assert_eq!(first.created.len(), 8);
        assert_eq!(second.created.len(), 0);
        assert_eq!(second.existing.len(), 8);
        let pasta = store.categories.iter().find(|c| c.name == "Pasta").unwrap();
        assert_eq!(pasta.description, "Italian-inspired pasta dishes");
    }
}
