use std::collections::HashMap;

use bigdecimal::BigDecimal;
use tracing::warn;

use crate::fixtures::{MenuItemFixture, MENU_ITEMS};
use crate::models::{Category, MenuItem, NewMenuItem};
use crate::seeders::SeedOutcome;
use crate::store::SeedStore;
use crate::SeedError;

/// Inserts the menu, resolving each item's category by name among `categories`.
///
/// Items whose category is not in `categories` are skipped without a progress line.
pub fn seed_menu_items(
    store: &mut dyn SeedStore,
    categories: &[Category],
) -> Result<SeedOutcome<MenuItem>, SeedError> {
    seed_menu_items_from(store, categories, MENU_ITEMS)
}

fn seed_menu_items_from(
    store: &mut dyn SeedStore,
    categories: &[Category],
    fixtures: &[MenuItemFixture],
) -> Result<SeedOutcome<MenuItem>, SeedError> {
    println!("\nCreating menu items...");

    let by_name: HashMap<&str, &Category> =
        categories.iter().map(|c| (c.name.as_str(), c)).collect();

    let mut outcome = SeedOutcome::default();
    for fixture in fixtures {
        let Some(category) = by_name.get(fixture.category) else {
            warn!(
                item = fixture.name,
                category = fixture.category,
                "skipping menu item with unknown category"
            );
            continue;
        };
        let result = store.get_or_create_menu_item(&NewMenuItem {
            name: fixture.name.to_string(),
            description: fixture.description.to_string(),
            price: BigDecimal::from(fixture.price),
            category_id: category.id,
            available: true,
        })?;
        if result.created {
            println!("  ✓ Created menu item: {}", result.record.name);
        } else {
            println!("  - Menu item '{}' already exists", result.record.name);
        }
        outcome.push(result);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeders::seed_categories;
    use crate::store::MemoryStore;

    #[test]
    fn test_item_is_linked_to_named_category() {
        let mut store = MemoryStore::new();
        let categories = seed_categories(&mut store).unwrap();
        let outcome = seed_menu_items(&mut store, &categories.created).unwrap();

        assert_eq!(outcome.created.len(), 22);
        let wings = outcome
            .created
            .iter()
            .find(|i| i.name == "Buffalo Wings")
            .unwrap();
        let category = store
            .categories
            .iter()
            .find(|c| c.id == wings.category_id)
            .unwrap();
        assert_eq!(category.name, "Appetizers");
        let price = BigDecimal::parse_bytes(b"25000.00", 10).unwrap();
        assert_eq!(wings.price, price);
    }

    #[test]
    fn test_every_item_references_a_seeded_category() {
        let mut store = MemoryStore::new();
        let categories = seed_categories(&mut store).unwrap();
        seed_menu_items(&mut store, &categories.created).unwrap();

        assert!(store
            .menu_items
            .iter()
            .all(|i| categories.created.iter().any(|c| c.id == i.category_id)));
    }

    #[test]
    fn test_no_categories_creates_nothing() {
        let mut store = MemoryStore::new();
        let outcome = seed_menu_items(&mut store, &[]).unwrap();

        assert!(outcome.created.is_empty());
        assert!(outcome.existing.is_empty());
        assert!(store.menu_items.is_empty());
    }

    #[test]
    fn test_unknown_category_is_skipped() {
        let mut store = MemoryStore::new();
        let categories = seed_categories(&mut store).unwrap();
        let fixtures = [
            MenuItemFixture {
                name: "Coffee",
                description: "Freshly brewed coffee",
                price: 3000,
                category: "Beverages",
            },
            MenuItemFixture {
                name: "Samosa",
                description: "Fried pastry with spiced filling",
                price: 2000,
                category: "Snacks",
            },
        ];

        let outcome = seed_menu_items_from(&mut store, &categories.created, &fixtures).unwrap();

        assert_eq!(outcome.created.len(), 1);
        assert_eq!(outcome.created[0].name, "Coffee");
        assert!(outcome.existing.is_empty());
    }

    #[test]
    fn test_rerun_with_existing_categories() {
        let mut store = MemoryStore::new();
        let categories = seed_categories(&mut store).unwrap();
        seed_menu_items(&mut store, &categories.created).unwrap();

        let again = seed_categories(&mut store).unwrap();
        let outcome = seed_menu_items(&mut store, &again.existing).unwrap();

        assert!(outcome.created.is_empty());
        assert_eq!(outcome.existing.len(), 22);
        assert_eq!(store.menu_items.len(), 22);
    }
}
