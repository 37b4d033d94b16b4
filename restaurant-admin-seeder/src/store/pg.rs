use diesel::{insert_into, prelude::*, PgConnection};
use tracing::debug;

use crate::models::{
    Booking, Category, ContactMessage, DiningTable, MenuItem, NewBooking, NewCategory,
    NewContactMessage, NewDiningTable, NewMenuItem, NewOrder, NewStaffProfile, NewTableOrder,
    NewTableOrderLine, NewUser, NewWaiterRequest, Order, StaffProfile, TableOrder,
    TableOrderLine, User, WaiterRequest,
};
use crate::schema::{
    bookings, categories, contact_messages, dining_tables, menu_items, orders, staff_profiles,
    table_order_lines, table_orders, users, waiter_requests,
};
use crate::store::{day_bounds, GetOrCreate, SeedStore};
use crate::SeedError;

/// Postgres-backed store.
///
/// Keys backed by a unique constraint use `INSERT .. ON CONFLICT DO NOTHING RETURNING` and fall
/// back to a lookup when nothing was inserted. Day-scoped keys have no constraint to conflict
/// on, so their lookup and insert share one transaction.
pub struct PgStore<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> PgStore<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }
}

fn resolve<T>(
    inserted: Option<T>,
    lookup: impl FnOnce() -> QueryResult<T>,
) -> Result<GetOrCreate<T>, SeedError> {
    match inserted {
        Some(record) => Ok(GetOrCreate::created(record)),
        None => Ok(GetOrCreate::existing(lookup()?)),
    }
}

impl SeedStore for PgStore<'_> {
    fn get_or_create_table(
        &mut self,
        new: &NewDiningTable,
    ) -> Result<GetOrCreate<DiningTable>, SeedError> {
        debug!(number = new.number, "get or create dining table");
        let inserted = insert_into(dining_tables::table)
            .values(new)
            .on_conflict(dining_tables::number)
            .do_nothing()
            .returning(DiningTable::as_returning())
            .get_result(self.conn)
            .optional()?;
        resolve(inserted, || {
            dining_tables::table
                .filter(dining_tables::number.eq(new.number))
                .select(DiningTable::as_select())
                .first(self.conn)
        })
    }

    fn get_or_create_category(
        &mut self,
        new: &NewCategory,
    ) -> Result<GetOrCreate<Category>, SeedError> {
        debug!(name = %new.name, "get or create category");
        let inserted = insert_into(categories::table)
            .values(new)
            .on_conflict(categories::name)
            .do_nothing()
            .returning(Category::as_returning())
            .get_result(self.conn)
            .optional()?;
        resolve(inserted, || {
            categories::table
                .filter(categories::name.eq(&new.name))
                .select(Category::as_select())
                .first(self.conn)
        })
    }

    fn get_or_create_menu_item(
        &mut self,
        new: &NewMenuItem,
    ) -> Result<GetOrCreate<MenuItem>, SeedError> {
        debug!(name = %new.name, "get or create menu item");
        let inserted = insert_into(menu_items::table)
            .values(new)
            .on_conflict(menu_items::name)
            .do_nothing()
            .returning(MenuItem::as_returning())
            .get_result(self.conn)
            .optional()?;
        resolve(inserted, || {
            menu_items::table
                .filter(menu_items::name.eq(&new.name))
                .select(MenuItem::as_select())
                .first(self.conn)
        })
    }

    fn find_user(&mut self, username: &str) -> Result<Option<User>, SeedError> {
        Ok(users::table
            .filter(users::username.eq(username))
            .select(User::as_select())
            .first(self.conn)
            .optional()?)
    }

    fn get_or_create_user(&mut self, new: &NewUser) -> Result<GetOrCreate<User>, SeedError> {
        debug!(username = %new.username, "get or create user");
        let inserted = insert_into(users::table)
            .values(new)
            .on_conflict(users::username)
            .do_nothing()
            .returning(User::as_returning())
            .get_result(self.conn)
            .optional()?;
        resolve(inserted, || {
            users::table
                .filter(users::username.eq(&new.username))
                .select(User::as_select())
                .first(self.conn)
        })
    }

    fn get_or_create_staff_profile(
        &mut self,
        new: &NewStaffProfile,
    ) -> Result<GetOrCreate<StaffProfile>, SeedError> {
        debug!(user_id = new.user_id, "get or create staff profile");
        let inserted = insert_into(staff_profiles::table)
            .values(new)
            .on_conflict(staff_profiles::user_id)
            .do_nothing()
            .returning(StaffProfile::as_returning())
            .get_result(self.conn)
            .optional()?;
        resolve(inserted, || {
            staff_profiles::table
                .filter(staff_profiles::user_id.eq(new.user_id))
                .select(StaffProfile::as_select())
                .first(self.conn)
        })
    }

    fn get_or_create_order(&mut self, new: &NewOrder) -> Result<GetOrCreate<Order>, SeedError> {
        debug!(customer_email = %new.customer_email, "get or create order");
        let (start, end) = day_bounds(new.created_at.date_naive());
        self.conn.transaction::<_, SeedError, _>(|conn| {
            let existing = orders::table
                .filter(orders::customer_email.eq(&new.customer_email))
                .filter(orders::created_at.ge(start))
                .filter(orders::created_at.lt(end))
                .select(Order::as_select())
                .first(conn)
                .optional()?;
            if let Some(record) = existing {
                return Ok(GetOrCreate::existing(record));
            }
            let record = insert_into(orders::table)
                .values(new)
                .returning(Order::as_returning())
                .get_result(conn)?;
            Ok(GetOrCreate::created(record))
        })
    }

    fn get_or_create_table_order(
        &mut self,
        new: &NewTableOrder,
    ) -> Result<GetOrCreate<TableOrder>, SeedError> {
        debug!(table_id = new.table_id, "get or create table order");
        let (start, end) = day_bounds(new.created_at.date_naive());
        self.conn.transaction::<_, SeedError, _>(|conn| {
            let existing = table_orders::table
                .filter(table_orders::table_id.eq(new.table_id))
                .filter(table_orders::created_at.ge(start))
                .filter(table_orders::created_at.lt(end))
                .select(TableOrder::as_select())
                .first(conn)
                .optional()?;
            if let Some(record) = existing {
                return Ok(GetOrCreate::existing(record));
            }
            let record = insert_into(table_orders::table)
                .values(new)
                .returning(TableOrder::as_returning())
                .get_result(conn)?;
            Ok(GetOrCreate::created(record))
        })
    }

    fn get_or_create_table_order_line(
        &mut self,
        new: &NewTableOrderLine,
    ) -> Result<GetOrCreate<TableOrderLine>, SeedError> {
        debug!(
            table_order_id = new.table_order_id,
            menu_item_id = new.menu_item_id,
            "get or create table order line"
        );
        let inserted = insert_into(table_order_lines::table)
            .values(new)
            .on_conflict((
                table_order_lines::table_order_id,
                table_order_lines::menu_item_id,
            ))
            .do_nothing()
            .returning(TableOrderLine::as_returning())
            .get_result(self.conn)
            .optional()?;
        resolve(inserted, || {
            table_order_lines::table
                .filter(table_order_lines::table_order_id.eq(new.table_order_id))
                .filter(table_order_lines::menu_item_id.eq(new.menu_item_id))
                .select(TableOrderLine::as_select())
                .first(self.conn)
        })
    }

    fn get_or_create_booking(
        &mut self,
        new: &NewBooking,
    ) -> Result<GetOrCreate<Booking>, SeedError> {
        debug!(email = %new.email, date = %new.date, "get or create booking");
        let inserted = insert_into(bookings::table)
            .values(new)
            .on_conflict((bookings::email, bookings::date, bookings::time))
            .do_nothing()
            .returning(Booking::as_returning())
            .get_result(self.conn)
            .optional()?;
        resolve(inserted, || {
            bookings::table
                .filter(bookings::email.eq(&new.email))
                .filter(bookings::date.eq(new.date))
                .filter(bookings::time.eq(new.time))
                .select(Booking::as_select())
                .first(self.conn)
        })
    }

    fn get_or_create_contact_message(
        &mut self,
        new: &NewContactMessage,
    ) -> Result<GetOrCreate<ContactMessage>, SeedError> {
        debug!(email = %new.email, "get or create contact message");
        let (start, end) = day_bounds(new.created_at.date_naive());
        self.conn.transaction::<_, SeedError, _>(|conn| {
            let existing = contact_messages::table
                .filter(contact_messages::email.eq(&new.email))
                .filter(contact_messages::created_at.ge(start))
                .filter(contact_messages::created_at.lt(end))
                .select(ContactMessage::as_select())
                .first(conn)
                .optional()?;
            if let Some(record) = existing {
                return Ok(GetOrCreate::existing(record));
            }
            let record = insert_into(contact_messages::table)
                .values(new)
                .returning(ContactMessage::as_returning())
                .get_result(conn)?;
            Ok(GetOrCreate::created(record))
        })
    }

    fn get_or_create_waiter_request(
        &mut self,
        new: &NewWaiterRequest,
    ) -> Result<GetOrCreate<WaiterRequest>, SeedError> {
        debug!(table_number = %new.table_number, "get or create waiter request");
        let (start, end) = day_bounds(new.created_at.date_naive());
        self.conn.transaction::<_, SeedError, _>(|conn| {
            let existing = waiter_requests::table
                .filter(waiter_requests::table_number.eq(&new.table_number))
                .filter(waiter_requests::created_at.ge(start))
                .filter(waiter_requests::created_at.lt(end))
                .select(WaiterRequest::as_select())
                .first(conn)
                .optional()?;
            if let Some(record) = existing {
                return Ok(GetOrCreate::existing(record));
            }
            let record = insert_into(waiter_requests::table)
                .values(new)
                .returning(WaiterRequest::as_returning())
                .get_result(conn)?;
            Ok(GetOrCreate::created(record))
        })
    }
}
