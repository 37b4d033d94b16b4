use bigdecimal::BigDecimal;
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::warn;

use crate::fixtures::{
    ORDERS, PAYMENT_METHODS, SPECIAL_REQUESTS, TABLE_ORDER_COUNT, TABLE_ORDER_STATUSES,
};
use crate::models::{
    DiningTable, MenuItem, NewOrder, NewTableOrder, NewTableOrderLine, Order, TableOrder,
    TableOrderLine,
};
use crate::seeders::{SeedContext, SeedOutcome};
use crate::store::{GetOrCreate, SeedStore};
use crate::SeedError;

#[derive(Debug, Clone, PartialEq)]
pub struct TableOrderSeed {
    pub order: TableOrder,
    /// Lines inserted by this run; empty when the order already existed.
    pub lines: Vec<TableOrderLine>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderSeed {
    pub orders: SeedOutcome<Order>,
    pub table_orders: SeedOutcome<TableOrderSeed>,
}

impl OrderSeed {
    pub fn line_count(&self) -> usize {
        self.table_orders
            .created
            .iter()
            .map(|seed| seed.lines.len())
            .sum()
    }
}

/// A line chosen for a table order before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedLine<'a> {
    pub item: &'a MenuItem,
    pub quantity: i32,
    pub special_request: &'static str,
}

impl PlannedLine<'_> {
    pub fn subtotal(&self) -> BigDecimal {
        self.item.price.clone() * BigDecimal::from(self.quantity)
    }
}

/// Share of lines that carry a special request.
pub const SPECIAL_REQUEST_RATE: f64 = 0.7;

/// Picks 2 to 4 distinct items (fewer if the menu is smaller), each with a quantity in 1..=3.
/// Seven lines in ten get a special request from the fixed vocabulary; the rest get "".
pub fn plan_lines<'a, R: Rng + ?Sized>(rng: &mut R, menu: &'a [MenuItem]) -> Vec<PlannedLine<'a>> {
    let count = rng.random_range(2..=4usize).min(menu.len());
    let selected: Vec<&MenuItem> = menu.choose_multiple(rng, count).collect();

    selected
        .into_iter()
        .map(|item| {
            let quantity = rng.random_range(1..=3);
            let special_request = if rng.random_bool(SPECIAL_REQUEST_RATE) {
                SPECIAL_REQUESTS.choose(rng).copied().unwrap_or_default()
            } else {
                ""
            };
            PlannedLine {
                item,
                quantity,
                special_request,
            }
        })
        .collect()
}

/// Inserts the flat customer orders, then one table order with line items for each of the
/// lowest-numbered tables.
///
/// Both kinds are keyed by day, so a run on a later day adds a fresh set. Lines are only
/// written for a table order this run created; an existing order is left as it is. Without
/// menu items no table order is written.
pub fn seed_orders(
    store: &mut dyn SeedStore,
    ctx: &mut SeedContext,
    tables: &[DiningTable],
    menu_items: &[MenuItem],
) -> Result<OrderSeed, SeedError> {
    println!("\nCreating sample orders...");

    let mut seed = OrderSeed::default();
    for fixture in ORDERS {
        let result = store.get_or_create_order(&NewOrder {
            customer_name: fixture.customer_name.to_string(),
            customer_email: fixture.customer_email.to_string(),
            customer_phone: fixture.customer_phone.to_string(),
            total: BigDecimal::from(fixture.total),
            status: fixture.status,
            payment_method: fixture.payment_method,
            notes: fixture.notes.to_string(),
            created_at: ctx.now,
        })?;
        if result.created {
            println!("  ✓ Created order for: {}", result.record.customer_name);
        } else {
            println!("  - Order for '{}' already exists", fixture.customer_email);
        }
        seed.orders.push(result);
    }

    println!("\nCreating table-based orders...");
    if menu_items.is_empty() {
        warn!("no menu items, skipping table orders");
        return Ok(seed);
    }

    let mut by_number: Vec<&DiningTable> = tables.iter().collect();
    by_number.sort_by_key(|t| t.number);

    for table in by_number.into_iter().take(TABLE_ORDER_COUNT) {
        let planned = plan_lines(&mut ctx.rng, menu_items);
        let total_price = planned
            .iter()
            .fold(BigDecimal::from(0), |acc, line| acc + line.subtotal());
        let status = TABLE_ORDER_STATUSES[ctx.rng.random_range(0..TABLE_ORDER_STATUSES.len())];
        let payment_method = PAYMENT_METHODS[ctx.rng.random_range(0..PAYMENT_METHODS.len())];

        let result = store.get_or_create_table_order(&NewTableOrder {
            table_id: table.id,
            status,
            total_price,
            payment_method,
            created_at: ctx.now,
        })?;
        if !result.created {
            println!("  - Table order for table {} already exists", table.number);
            seed.table_orders.push(GetOrCreate::existing(TableOrderSeed {
                order: result.record,
                lines: Vec::new(),
            }));
            continue;
        }
        println!("  ✓ Created table order for {}", table.number);

        let mut lines = Vec::new();
        for line in planned {
            let line_result = store.get_or_create_table_order_line(&NewTableOrderLine {
                table_order_id: result.record.id,
                menu_item_id: line.item.id,
                quantity: line.quantity,
                price: line.item.price.clone(),
                special_request: line.special_request.to_string(),
            })?;
            if line_result.created {
                println!("    - Added {} x{}", line.item.name, line.quantity);
                lines.push(line_result.record);
            }
        }
        seed.table_orders.push(GetOrCreate::created(TableOrderSeed {
            order: result.record,
            lines,
        }));
    }
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::seeders::tests::test_context;
    use crate::seeders::{seed_categories, seed_menu_items, seed_tables};
    use crate::store::MemoryStore;

    fn seeded_store() -> (MemoryStore, Vec<DiningTable>, Vec<MenuItem>) {
        let mut store = MemoryStore::new();
        let tables = seed_tables(&mut store).unwrap().created;
        let categories = seed_categories(&mut store).unwrap().created;
        let menu_items = seed_menu_items(&mut store, &categories).unwrap().created;
        (store, tables, menu_items)
    }

    #[test]
    fn test_plan_lines_bounds() {
        let (_, _, menu) = seeded_store();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let lines = plan_lines(&mut rng, &menu);

            assert!((2..=4).contains(&lines.len()));
            assert!(lines.iter().all(|l| (1..=3).contains(&l.quantity)));
            for line in &lines {
                let request = line.special_request;
                assert!(request.is_empty() || SPECIAL_REQUESTS.contains(&request));
            }
            let ids: HashSet<_> = lines.iter().map(|l| l.item.id).collect();
            assert_eq!(ids.len(), lines.len());
        }
    }

    #[test]
    fn test_plan_lines_special_request_rate() {
        let (_, _, menu) = seeded_store();

        let (mut lines, mut with_request) = (0, 0);
        for seed in 0..2000 {
            let mut rng = StdRng::seed_from_u64(seed);
            for line in plan_lines(&mut rng, &menu) {
                lines += 1;
                if !line.special_request.is_empty() {
                    with_request += 1;
                }
            }
        }

        let rate = with_request as f64 / lines as f64;
        assert!((0.65..0.75).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn test_plan_lines_small_menu() {
        let (_, _, menu) = seeded_store();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(plan_lines(&mut rng, &menu[..1]).len(), 1);
        assert!(plan_lines(&mut rng, &[]).is_empty());
    }

    #[test]
    fn test_creates_orders_for_first_three_tables() {
        let (mut store, tables, menu) = seeded_store();
        let mut ctx = test_context(11);

        let seed = seed_orders(&mut store, &mut ctx, &tables, &menu).unwrap();

        assert_eq!(seed.orders.created.len(), 3);
        assert_eq!(seed.table_orders.created.len(), 3);

        let mut numbers: Vec<_> = seed
            .table_orders
            .created
            .iter()
            .map(|s| {
                tables
                    .iter()
                    .find(|t| t.id == s.order.table_id)
                    .unwrap()
                    .number
            })
            .collect();
        numbers.sort();
        assert_eq!(numbers, vec![1, 2, 3]);

        for s in &seed.table_orders.created {
            assert!((2..=4).contains(&s.lines.len()));
            let total = s.lines.iter().fold(BigDecimal::from(0), |acc, l| {
                acc + l.price.clone() * BigDecimal::from(l.quantity)
            });
            assert_eq!(s.order.total_price, total);
            assert!(TABLE_ORDER_STATUSES.contains(&s.order.status));
        }
        assert_eq!(store.table_order_lines.len(), seed.line_count());
    }

    #[test]
    fn test_line_price_is_snapshot_of_menu_price() {
        let (mut store, tables, menu) = seeded_store();
        let seed = seed_orders(&mut store, &mut test_context(2), &tables, &menu).unwrap();

        for line in seed.table_orders.created.iter().flat_map(|s| &s.lines) {
            let item = menu.iter().find(|i| i.id == line.menu_item_id).unwrap();
            assert_eq!(line.price, item.price);
        }
    }

    #[test]
    fn test_rerun_same_day_leaves_table_orders_untouched() {
        let (mut store, tables, menu) = seeded_store();
        seed_orders(&mut store, &mut test_context(11), &tables, &menu).unwrap();
        let lines_before = store.table_order_lines.clone();

        let seed = seed_orders(&mut store, &mut test_context(12), &tables, &menu).unwrap();

        assert!(seed.orders.created.is_empty());
        assert_eq!(seed.orders.existing.len(), 3);
        assert!(seed.table_orders.created.is_empty());
        assert_eq!(seed.table_orders.existing.len(), 3);
        assert_eq!(seed.line_count(), 0);
        assert_eq!(store.table_order_lines, lines_before);
    }

    #[test]
    fn test_same_seed_produces_same_orders() {
        let (mut first, tables, menu) = seeded_store();
        let (mut second, _, _) = seeded_store();

        seed_orders(&mut first, &mut test_context(5), &tables, &menu).unwrap();
        seed_orders(&mut second, &mut test_context(5), &tables, &menu).unwrap();

        assert_eq!(first.table_orders, second.table_orders);
        assert_eq!(first.table_order_lines, second.table_order_lines);
    }

    #[test]
    fn test_empty_menu_skips_table_orders() {
        let (mut store, tables, _) = seeded_store();

        let seed = seed_orders(&mut store, &mut test_context(4), &tables, &[]).unwrap();

        assert_eq!(seed.orders.created.len(), 3);
        assert!(seed.table_orders.created.is_empty());
        assert!(seed.table_orders.existing.is_empty());
        assert!(store.table_orders.is_empty());
    }

    #[test]
    fn test_unknown_table_is_a_storage_error() {
        let (mut store, _, menu) = seeded_store();
        let stray = DiningTable {
            id: 9999,
            number: 99,
            capacity: 2,
        };

        let result = seed_orders(&mut store, &mut test_context(1), &[stray], &menu);

        assert!(matches!(
            result,
            Err(SeedError::Database(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _
            )))
        ));
    }
}
