use argon2::Argon2;
use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::report::SeedReport;
use crate::store::{GetOrCreate, SeedStore};
use crate::SeedError;

pub mod bookings;
pub mod categories;
pub mod contacts;
pub mod menu_items;
pub mod orders;
pub mod staff;
pub mod tables;
pub mod waiter_requests;

pub use bookings::seed_bookings;
pub use categories::seed_categories;
pub use contacts::seed_contact_messages;
pub use menu_items::seed_menu_items;
pub use orders::{seed_orders, OrderSeed, TableOrderSeed};
pub use staff::{seed_staff, StaffAccount};
pub use tables::seed_tables;
pub use waiter_requests::seed_waiter_requests;

/// Clock, random source and password hasher shared by one seeding run.
pub struct SeedContext {
    pub now: DateTime<Utc>,
    pub rng: StdRng,
    pub argon2: Argon2<'static>,
}

impl SeedContext {
    pub fn new(now: DateTime<Utc>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            now,
            rng,
            argon2: Argon2::default(),
        }
    }

    pub fn with_argon2(mut self, argon2: Argon2<'static>) -> Self {
        self.argon2 = argon2;
        self
    }

    /// Calendar day used by the day-scoped natural keys.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}

/// Rows a seeder touched, split by whether this run inserted them.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedOutcome<T> {
    pub created: Vec<T>,
    pub existing: Vec<T>,
}

impl<T> Default for SeedOutcome<T> {
    fn default() -> Self {
        Self {
            created: Vec::new(),
            existing: Vec::new(),
        }
    }
}

impl<T> SeedOutcome<T> {
    pub fn push(&mut self, result: GetOrCreate<T>) {
        if result.created {
            self.created.push(result.record);
        } else {
            self.existing.push(result.record);
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &T> {
        self.created.iter().chain(self.existing.iter())
    }
}

/// Runs every seeder in dependency order. The first error aborts the remaining seeders; rows
/// written before it stay committed.
pub fn run_all(
    store: &mut dyn SeedStore,
    ctx: &mut SeedContext,
) -> Result<SeedReport, SeedError> {
    info!(today = %ctx.today(), "seeding started");

    let tables = seed_tables(store)?;
    let categories = seed_categories(store)?;
    let all_categories: Vec<_> = categories.all().cloned().collect();
    let menu_items = seed_menu_items(store, &all_categories)?;
    let staff = seed_staff(store, ctx)?;

    let all_tables: Vec<_> = tables.all().cloned().collect();
    let all_menu_items: Vec<_> = menu_items.all().cloned().collect();
    let orders = seed_orders(store, ctx, &all_tables, &all_menu_items)?;

    let bookings = seed_bookings(store, ctx)?;
    let contacts = seed_contact_messages(store, ctx)?;
    let waiter_requests = seed_waiter_requests(store, ctx)?;

    let report = SeedReport {
        tables: tables.created.len(),
        categories: categories.created.len(),
        menu_items: menu_items.created.len(),
        staff: staff.created.len(),
        orders: orders.orders.created.len(),
        table_orders: orders.table_orders.created.len(),
        order_lines: orders.line_count(),
        bookings: bookings.created.len(),
        contact_messages: contacts.created.len(),
        waiter_requests: waiter_requests.created.len(),
    };
    info!(created = report.total(), "seeding finished");
    Ok(report)
}

#[cfg(test)]
pub(crate) mod tests {
    use argon2::{Algorithm, Params, Version};
    use chrono::{TimeDelta, TimeZone};
    use diesel::result::Error as DieselError;

    use super::*;
    use crate::models::*;
    use crate::store::MemoryStore;

    /// Fixed clock, fixed RNG seed, and argon2 parameters cheap enough for tests.
    pub(crate) fn test_context(seed: u64) -> SeedContext {
        let params = Params::new(Params::MIN_M_COST, 1, 1, None).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        SeedContext::new(now, Some(seed))
            .with_argon2(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Delegates to a [`MemoryStore`] but fails every insert into the `fail_on` table.
    pub(crate) struct FailingStore {
        pub(crate) inner: MemoryStore,
        pub(crate) fail_on: &'static str,
    }

    impl FailingStore {
        pub(crate) fn new(inner: MemoryStore, fail_on: &'static str) -> Self {
            Self { inner, fail_on }
        }

        fn check(&self, table: &str) -> Result<(), SeedError> {
            if self.fail_on == table {
                return Err(SeedError::Database(DieselError::BrokenTransactionManager));
            }
            Ok(())
        }
    }

    impl SeedStore for FailingStore {
        fn get_or_create_table(
            &mut self,
            new: &NewDiningTable,
        ) -> Result<GetOrCreate<DiningTable>, SeedError> {
            self.check("dining_tables")?;
            self.inner.get_or_create_table(new)
        }

        fn get_or_create_category(
            &mut self,
            new: &NewCategory,
        ) -> Result<GetOrCreate<Category>, SeedError> {
            self.check("categories")?;
            self.inner.get_or_create_category(new)
        }

        fn get_or_create_menu_item(
            &mut self,
            new: &NewMenuItem,
        ) -> Result<GetOrCreate<MenuItem>, SeedError> {
            self.check("menu_items")?;
            self.inner.get_or_create_menu_item(new)
        }

        fn find_user(&mut self, username: &str) -> Result<Option<User>, SeedError> {
            self.inner.find_user(username)
        }

        fn get_or_create_user(&mut self, new: &NewUser) -> Result<GetOrCreate<User>, SeedError> {
            self.check("users")?;
            self.inner.get_or_create_user(new)
        }

        fn get_or_create_staff_profile(
            &mut self,
            new: &NewStaffProfile,
        ) -> Result<GetOrCreate<StaffProfile>, SeedError> {
            self.check("staff_profiles")?;
            self.inner.get_or_create_staff_profile(new)
        }

        fn get_or_create_order(
            &mut self,
            new: &NewOrder,
        ) -> Result<GetOrCreate<Order>, SeedError> {
            self.check("orders")?;
            self.inner.get_or_create_order(new)
        }

        fn get_or_create_table_order(
            &mut self,
            new: &NewTableOrder,
        ) -> Result<GetOrCreate<TableOrder>, SeedError> {
            self.check("table_orders")?;
            self.inner.get_or_create_table_order(new)
        }

        fn get_or_create_table_order_line(
            &mut self,
            new: &NewTableOrderLine,
        ) -> Result<GetOrCreate<TableOrderLine>, SeedError> {
            self.check("table_order_lines")?;
            self.inner.get_or_create_table_order_line(new)
        }

        fn get_or_create_booking(
            &mut self,
            new: &NewBooking,
        ) -> Result<GetOrCreate<Booking>, SeedError> {
            self.check("bookings")?;
            self.inner.get_or_create_booking(new)
        }

        fn get_or_create_contact_message(
            &mut self,
            new: &NewContactMessage,
        ) -> Result<GetOrCreate<ContactMessage>, SeedError> {
            self.check("contact_messages")?;
            self.inner.get_or_create_contact_message(new)
        }

        fn get_or_create_waiter_request(
            &mut self,
            new: &NewWaiterRequest,
        ) -> Result<GetOrCreate<WaiterRequest>, SeedError> {
            self.check("waiter_requests")?;
            self.inner.get_or_create_waiter_request(new)
        }
    }

    #[test]
    fn test_run_all_on_empty_store() {
        let mut store = MemoryStore::new();
        let report = run_all(&mut store, &mut test_context(7)).unwrap();

        assert_eq!(report.tables, 12);
        assert_eq!(report.categories, 8);
        assert_eq!(report.menu_items, 22);
        assert_eq!(report.staff, 5);
        assert_eq!(report.orders, 3);
        assert_eq!(report.table_orders, 3);
        assert!((6..=12).contains(&report.order_lines));
        assert_eq!(report.bookings, 3);
        assert_eq!(report.contact_messages, 3);
        assert_eq!(report.waiter_requests, 3);
        assert_eq!(store.table_order_lines.len(), report.order_lines);
    }

    #[test]
    fn test_second_run_on_same_day_creates_nothing() {
        let mut store = MemoryStore::new();
        run_all(&mut store, &mut test_context(7)).unwrap();
        let counts = |s: &MemoryStore| {
            (
                s.tables.len(),
                s.categories.len(),
                s.menu_items.len(),
                s.users.len(),
                s.staff_profiles.len(),
                s.orders.len(),
                s.table_orders.len(),
                s.table_order_lines.len(),
                s.bookings.len(),
                s.contact_messages.len(),
                s.waiter_requests.len(),
            )
        };
        let before = counts(&store);

        let mut later = test_context(8);
        later.now += TimeDelta::hours(6);
        let report = run_all(&mut store, &mut later).unwrap();

        assert_eq!(report.total(), 0);
        assert_eq!(counts(&store), before);
    }

    #[test]
    fn test_next_day_adds_day_scoped_rows_only() {
        let mut store = MemoryStore::new();
        run_all(&mut store, &mut test_context(7)).unwrap();

        let mut tomorrow = test_context(9);
        tomorrow.now += TimeDelta::days(1);
        let report = run_all(&mut store, &mut tomorrow).unwrap();

        assert_eq!(report.tables, 0);
        assert_eq!(report.categories, 0);
        assert_eq!(report.menu_items, 0);
        assert_eq!(report.staff, 0);
        assert_eq!(report.orders, 3);
        assert_eq!(report.table_orders, 3);
        assert_eq!(report.contact_messages, 3);
        assert_eq!(report.waiter_requests, 3);
        // Booking dates move with the clock.
        assert_eq!(report.bookings, 3);
        assert_eq!(store.bookings.len(), 6);
    }

    #[test]
    fn test_error_aborts_remaining_seeders() {
        let mut store = FailingStore::new(MemoryStore::new(), "bookings");
        let result = run_all(&mut store, &mut test_context(7));

        assert!(matches!(result, Err(SeedError::Database(_))));
        assert_eq!(store.inner.tables.len(), 12);
        assert_eq!(store.inner.orders.len(), 3);
        assert!(store.inner.contact_messages.is_empty());
        assert!(store.inner.waiter_requests.is_empty());
    }

    #[test]
    fn test_outcome_all_lists_created_then_existing() {
        let mut outcome = SeedOutcome::default();
        outcome.push(GetOrCreate::existing(1));
        outcome.push(GetOrCreate::created(2));

        assert_eq!(outcome.all().copied().collect::<Vec<_>>(), vec![2, 1]);
    }
}
