use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::models::{
    Booking, Category, ContactMessage, DiningTable, MenuItem, NewBooking, NewCategory,
    NewContactMessage, NewDiningTable, NewMenuItem, NewOrder, NewStaffProfile, NewTableOrder,
    NewTableOrderLine, NewUser, NewWaiterRequest, Order, StaffProfile, TableOrder,
    TableOrderLine, User, WaiterRequest,
};
use crate::SeedError;

pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Result of a get-or-create call: the stored row and whether this call inserted it.
#[derive(Debug, Clone, PartialEq)]
pub struct GetOrCreate<T> {
    pub record: T,
    pub created: bool,
}

impl<T> GetOrCreate<T> {
    pub fn created(record: T) -> Self {
        Self {
            record,
            created: true,
        }
    }

    pub fn existing(record: T) -> Self {
        Self {
            record,
            created: false,
        }
    }
}

/// Conditional inserts keyed by each entity's natural key.
///
/// Every call performs at most one insert and never updates an existing row. Day-scoped keys
/// compare the UTC calendar day of `created_at`.
pub trait SeedStore {
    /// Keyed by `number`.
    fn get_or_create_table(
        &mut self,
        new: &NewDiningTable,
    ) -> Result<GetOrCreate<DiningTable>, SeedError>;

    /// Keyed by `name`.
    fn get_or_create_category(
        &mut self,
        new: &NewCategory,
    ) -> Result<GetOrCreate<Category>, SeedError>;

    /// Keyed by `name`.
    fn get_or_create_menu_item(
        &mut self,
        new: &NewMenuItem,
    ) -> Result<GetOrCreate<MenuItem>, SeedError>;

    fn find_user(&mut self, username: &str) -> Result<Option<User>, SeedError>;

    /// Keyed by `username`.
    fn get_or_create_user(&mut self, new: &NewUser) -> Result<GetOrCreate<User>, SeedError>;

    /// Keyed by `user_id`.
    fn get_or_create_staff_profile(
        &mut self,
        new: &NewStaffProfile,
    ) -> Result<GetOrCreate<StaffProfile>, SeedError>;

    /// Keyed by `customer_email` and the day of `created_at`.
    fn get_or_create_order(&mut self, new: &NewOrder) -> Result<GetOrCreate<Order>, SeedError>;

    /// Keyed by `table_id` and the day of `created_at`.
    fn get_or_create_table_order(
        &mut self,
        new: &NewTableOrder,
    ) -> Result<GetOrCreate<TableOrder>, SeedError>;

    /// Keyed by `(table_order_id, menu_item_id)`.
    fn get_or_create_table_order_line(
        &mut self,
        new: &NewTableOrderLine,
    ) -> Result<GetOrCreate<TableOrderLine>, SeedError>;

    /// Keyed by `(email, date, time)`.
    fn get_or_create_booking(&mut self, new: &NewBooking)
        -> Result<GetOrCreate<Booking>, SeedError>;

    /// Keyed by `email` and the day of `created_at`.
    fn get_or_create_contact_message(
        &mut self,
        new: &NewContactMessage,
    ) -> Result<GetOrCreate<ContactMessage>, SeedError>;

    /// Keyed by `table_number` and the day of `created_at`.
    fn get_or_create_waiter_request(
        &mut self,
        new: &NewWaiterRequest,
    ) -> Result<GetOrCreate<WaiterRequest>, SeedError>;
}

/// Half-open UTC range `[day 00:00, next day 00:00)`.
pub fn day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    (start, start + TimeDelta::days(1))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_day_bounds() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let (start, end) = day_bounds(day);

        assert_eq!(start, Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap());
        let last_second = Utc.with_ymd_and_hms(2026, 10, 18, 23, 59, 59).unwrap();
        assert!(last_second < end);
    }
}
