use chrono::{DateTime, Utc};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::models::{
    Booking, Category, ContactMessage, DiningTable, MenuItem, NewBooking, NewCategory,
    NewContactMessage, NewDiningTable, NewMenuItem, NewOrder, NewStaffProfile, NewTableOrder,
    NewTableOrderLine, NewUser, NewWaiterRequest, Order, StaffProfile, TableOrder,
    TableOrderLine, User, WaiterRequest,
};
use crate::store::{GetOrCreate, SeedStore};
use crate::SeedError;

/// In-process store with the same key semantics as [`super::PgStore`].
///
/// Foreign keys are checked on insert and reported as diesel foreign key violations.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: i32,
    pub tables: Vec<DiningTable>,
    pub categories: Vec<Category>,
    pub menu_items: Vec<MenuItem>,
    pub users: Vec<User>,
    pub staff_profiles: Vec<StaffProfile>,
    pub orders: Vec<Order>,
    pub table_orders: Vec<TableOrder>,
    pub table_order_lines: Vec<TableOrderLine>,
    pub bookings: Vec<Booking>,
    pub contact_messages: Vec<ContactMessage>,
    pub waiter_requests: Vec<WaiterRequest>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

fn same_day(a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

fn foreign_key_violation(constraint: &str, id: i32) -> SeedError {
    SeedError::Database(DieselError::DatabaseError(
        DatabaseErrorKind::ForeignKeyViolation,
        Box::new(format!("{constraint}: no row with id {id}")),
    ))
}

fn insert<T: Clone>(rows: &mut Vec<T>, record: T) -> GetOrCreate<T> {
    rows.push(record.clone());
    GetOrCreate::created(record)
}

impl SeedStore for MemoryStore {
    fn get_or_create_table(
        &mut self,
        new: &NewDiningTable,
    ) -> Result<GetOrCreate<DiningTable>, SeedError> {
        if let Some(record) = self.tables.iter().find(|t| t.number == new.number) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        let id = self.allocate_id();
        let record = DiningTable {
            id,
            number: new.number,
            capacity: new.capacity,
        };
        Ok(insert(&mut self.tables, record))
    }

    fn get_or_create_category(
        &mut self,
        new: &NewCategory,
    ) -> Result<GetOrCreate<Category>, SeedError> {
        if let Some(record) = self.categories.iter().find(|c| c.name == new.name) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        let id = self.allocate_id();
        let record = Category {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
        };
        Ok(insert(&mut self.categories, record))
    }

    fn get_or_create_menu_item(
        &mut self,
        new: &NewMenuItem,
    ) -> Result<GetOrCreate<MenuItem>, SeedError> {
        if let Some(record) = self.menu_items.iter().find(|i| i.name == new.name) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        if !self.categories.iter().any(|c| c.id == new.category_id) {
            return Err(foreign_key_violation(
                "menu_items_category_id_fkey",
                new.category_id,
            ));
        }
        let id = self.allocate_id();
        let record = MenuItem {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            price: new.price.clone(),
            category_id: new.category_id,
            available: new.available,
        };
        Ok(insert(&mut self.menu_items, record))
    }

    fn find_user(&mut self, username: &str) -> Result<Option<User>, SeedError> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    fn get_or_create_user(&mut self, new: &NewUser) -> Result<GetOrCreate<User>, SeedError> {
        if let Some(record) = self.users.iter().find(|u| u.username == new.username) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        let id = self.allocate_id();
        let record = User {
            id,
            username: new.username.clone(),
            email: new.email.clone(),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            password_hash: new.password_hash.clone(),
            is_active: new.is_active,
            created_at: new.created_at,
        };
        Ok(insert(&mut self.users, record))
    }

    fn get_or_create_staff_profile(
        &mut self,
        new: &NewStaffProfile,
    ) -> Result<GetOrCreate<StaffProfile>, SeedError> {
        if let Some(record) = self.staff_profiles.iter().find(|p| p.user_id == new.user_id) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        if !self.users.iter().any(|u| u.id == new.user_id) {
            return Err(foreign_key_violation(
                "staff_profiles_user_id_fkey",
                new.user_id,
            ));
        }
        let id = self.allocate_id();
        let record = StaffProfile {
            id,
            user_id: new.user_id,
            role: new.role,
            phone: new.phone.clone(),
        };
        Ok(insert(&mut self.staff_profiles, record))
    }

    fn get_or_create_order(&mut self, new: &NewOrder) -> Result<GetOrCreate<Order>, SeedError> {
        if let Some(record) = self.orders.iter().find(|o| {
            o.customer_email == new.customer_email && same_day(&o.created_at, &new.created_at)
        }) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        let id = self.allocate_id();
        let record = Order {
            id,
            customer_name: new.customer_name.clone(),
            customer_email: new.customer_email.clone(),
            customer_phone: new.customer_phone.clone(),
            total: new.total.clone(),
            status: new.status,
            payment_method: new.payment_method,
            notes: new.notes.clone(),
            created_at: new.created_at,
        };
        Ok(insert(&mut self.orders, record))
    }

    fn get_or_create_table_order(
        &mut self,
        new: &NewTableOrder,
    ) -> Result<GetOrCreate<TableOrder>, SeedError> {
        if let Some(record) = self.table_orders.iter().find(|o| {
            o.table_id == new.table_id && same_day(&o.created_at, &new.created_at)
        }) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        if !self.tables.iter().any(|t| t.id == new.table_id) {
            return Err(foreign_key_violation(
                "table_orders_table_id_fkey",
                new.table_id,
            ));
        }
        let id = self.allocate_id();
        let record = TableOrder {
            id,
            table_id: new.table_id,
            status: new.status,
            total_price: new.total_price.clone(),
            payment_method: new.payment_method,
            created_at: new.created_at,
        };
        Ok(insert(&mut self.table_orders, record))
    }

    fn get_or_create_table_order_line(
        &mut self,
        new: &NewTableOrderLine,
    ) -> Result<GetOrCreate<TableOrderLine>, SeedError> {
        if let Some(record) = self.table_order_lines.iter().find(|l| {
            l.table_order_id == new.table_order_id && l.menu_item_id == new.menu_item_id
        }) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        if !self.table_orders.iter().any(|o| o.id == new.table_order_id) {
            return Err(foreign_key_violation(
                "table_order_lines_table_order_id_fkey",
                new.table_order_id,
            ));
        }
        if !self.menu_items.iter().any(|i| i.id == new.menu_item_id) {
            return Err(foreign_key_violation(
                "table_order_lines_menu_item_id_fkey",
                new.menu_item_id,
            ));
        }
        let id = self.allocate_id();
        let record = TableOrderLine {
            id,
            table_order_id: new.table_order_id,
            menu_item_id: new.menu_item_id,
            quantity: new.quantity,
            price: new.price.clone(),
            special_request: new.special_request.clone(),
        };
        Ok(insert(&mut self.table_order_lines, record))
    }

    fn get_or_create_booking(
        &mut self,
        new: &NewBooking,
    ) -> Result<GetOrCreate<Booking>, SeedError> {
        if let Some(record) = self.bookings.iter().find(|b| {
            b.email == new.email && b.date == new.date && b.time == new.time
        }) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        let id = self.allocate_id();
        let record = Booking {
            id,
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            date: new.date,
            time: new.time,
            guests: new.guests,
            status: new.status,
            notes: new.notes.clone(),
            created_at: new.created_at,
        };
        Ok(insert(&mut self.bookings, record))
    }

    fn get_or_create_contact_message(
        &mut self,
        new: &NewContactMessage,
    ) -> Result<GetOrCreate<ContactMessage>, SeedError> {
        if let Some(record) = self.contact_messages.iter().find(|m| {
            m.email == new.email && same_day(&m.created_at, &new.created_at)
        }) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        let id = self.allocate_id();
        let record = ContactMessage {
            id,
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            message: new.message.clone(),
            status: new.status,
            created_at: new.created_at,
        };
        Ok(insert(&mut self.contact_messages, record))
    }

    fn get_or_create_waiter_request(
        &mut self,
        new: &NewWaiterRequest,
    ) -> Result<GetOrCreate<WaiterRequest>, SeedError> {
        if let Some(record) = self.waiter_requests.iter().find(|r| {
            r.table_number == new.table_number && same_day(&r.created_at, &new.created_at)
        }) {
            return Ok(GetOrCreate::existing(record.clone()));
        }
        let id = self.allocate_id();
        let record = WaiterRequest {
            id,
            table_number: new.table_number.clone(),
            message: new.message.clone(),
            status: new.status,
            created_at: new.created_at,
        };
        Ok(insert(&mut self.waiter_requests, record))
    }
}
