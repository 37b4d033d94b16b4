use std::fmt;
use std::io::Write;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::{
    deserialize::{self, FromSql, FromSqlRow},
    expression::AsExpression,
    pg::{Pg, PgValue},
    prelude::*,
    serialize::{self, IsNull, Output, ToSql},
};

use crate::schema::{
    bookings, categories, contact_messages, dining_tables, menu_items, orders, staff_profiles,
    table_order_lines, table_orders, users, waiter_requests,
};

#[derive(FromSqlRow, AsExpression, PartialEq, Eq, Hash, Copy, Clone, Debug)]
#[diesel(sql_type = crate::schema::sql_types::StaffRole)]
pub enum StaffRole {
    Admin,
    Manager,
    Waiter,
    KitchenStaff,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::Manager => "manager",
            StaffRole::Waiter => "waiter",
            StaffRole::KitchenStaff => "kitchen_staff",
        }
    }
}

impl ToSql<crate::schema::sql_types::StaffRole, Pg> for StaffRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<crate::schema::sql_types::StaffRole, Pg> for StaffRole {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"admin" => Ok(StaffRole::Admin),
            b"manager" => Ok(StaffRole::Manager),
            b"waiter" => Ok(StaffRole::Waiter),
            b"kitchen_staff" => Ok(StaffRole::KitchenStaff),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared by legacy orders and table orders.
#[derive(FromSqlRow, AsExpression, PartialEq, Eq, Hash, Copy, Clone, Debug)]
#[diesel(sql_type = crate::schema::sql_types::OrderStatus)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl ToSql<crate::schema::sql_types::OrderStatus, Pg> for OrderStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<crate::schema::sql_types::OrderStatus, Pg> for OrderStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"pending" => Ok(OrderStatus::Pending),
            b"confirmed" => Ok(OrderStatus::Confirmed),
            b"preparing" => Ok(OrderStatus::Preparing),
            b"ready" => Ok(OrderStatus::Ready),
            b"delivered" => Ok(OrderStatus::Delivered),
            b"cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

#[derive(FromSqlRow, AsExpression, PartialEq, Eq, Hash, Copy, Clone, Debug)]
#[diesel(sql_type = crate::schema::sql_types::PaymentMethod)]
pub enum PaymentMethod {
    Cash,
    AirtelMoney,
    MtnMomo,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::AirtelMoney => "airtel_money",
            PaymentMethod::MtnMomo => "mtn_momo",
        }
    }
}

impl ToSql<crate::schema::sql_types::PaymentMethod, Pg> for PaymentMethod {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<crate::schema::sql_types::PaymentMethod, Pg> for PaymentMethod {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"cash" => Ok(PaymentMethod::Cash),
            b"airtel_money" => Ok(PaymentMethod::AirtelMoney),
            b"mtn_momo" => Ok(PaymentMethod::MtnMomo),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

#[derive(FromSqlRow, AsExpression, PartialEq, Eq, Hash, Copy, Clone, Debug)]
#[diesel(sql_type = crate::schema::sql_types::BookingStatus)]
pub enum BookingStatus {
    New,
    Confirmed,
    Cancelled,
}

impl ToSql<crate::schema::sql_types::BookingStatus, Pg> for BookingStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            BookingStatus::New => out.write_all(b"new")?,
            BookingStatus::Confirmed => out.write_all(b"confirmed")?,
            BookingStatus::Cancelled => out.write_all(b"cancelled")?,
        }
        Ok(IsNull::No)
    }
}

impl FromSql<crate::schema::sql_types::BookingStatus, Pg> for BookingStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"new" => Ok(BookingStatus::New),
            b"confirmed" => Ok(BookingStatus::Confirmed),
            b"cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

#[derive(FromSqlRow, AsExpression, PartialEq, Eq, Hash, Copy, Clone, Debug)]
#[diesel(sql_type = crate::schema::sql_types::ContactStatus)]
pub enum ContactStatus {
    New,
    Handled,
}

impl ToSql<crate::schema::sql_types::ContactStatus, Pg> for ContactStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            ContactStatus::New => out.write_all(b"new")?,
            ContactStatus::Handled => out.write_all(b"handled")?,
        }
        Ok(IsNull::No)
    }
}

impl FromSql<crate::schema::sql_types::ContactStatus, Pg> for ContactStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"new" => Ok(ContactStatus::New),
            b"handled" => Ok(ContactStatus::Handled),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

#[derive(FromSqlRow, AsExpression, PartialEq, Eq, Hash, Copy, Clone, Debug)]
#[diesel(sql_type = crate::schema::sql_types::WaiterRequestStatus)]
pub enum WaiterRequestStatus {
    Pending,
    Acknowledged,
    Completed,
}

impl ToSql<crate::schema::sql_types::WaiterRequestStatus, Pg> for WaiterRequestStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            WaiterRequestStatus::Pending => out.write_all(b"pending")?,
            WaiterRequestStatus::Acknowledged => out.write_all(b"acknowledged")?,
            WaiterRequestStatus::Completed => out.write_all(b"completed")?,
        }
        Ok(IsNull::No)
    }
}

impl FromSql<crate::schema::sql_types::WaiterRequestStatus, Pg> for WaiterRequestStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"pending" => Ok(WaiterRequestStatus::Pending),
            b"acknowledged" => Ok(WaiterRequestStatus::Acknowledged),
            b"completed" => Ok(WaiterRequestStatus::Completed),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = dining_tables)]
pub struct DiningTable {
    pub id: i32,
    pub number: i32,
    pub capacity: i32,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = dining_tables)]
pub struct NewDiningTable {
    pub number: i32,
    pub capacity: i32,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = categories)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(Category))]
#[diesel(table_name = menu_items)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category_id: i32,
    pub available: bool,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category_id: i32,
    pub available: bool,
}

/// Login identity. Role and phone live on [`StaffProfile`].
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(User))]
#[diesel(table_name = staff_profiles)]
pub struct StaffProfile {
    pub id: i32,
    pub user_id: i32,
    pub role: StaffRole,
    pub phone: String,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = staff_profiles)]
pub struct NewStaffProfile {
    pub user_id: i32,
    pub role: StaffRole,
    pub phone: String,
}

/// Flat customer order without line items.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(DiningTable, foreign_key = table_id))]
#[diesel(table_name = table_orders)]
pub struct TableOrder {
    pub id: i32,
    pub table_id: i32,
    pub status: OrderStatus,
    pub total_price: BigDecimal,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = table_orders)]
pub struct NewTableOrder {
    pub table_id: i32,
    pub status: OrderStatus,
    pub total_price: BigDecimal,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(TableOrder))]
#[diesel(belongs_to(MenuItem))]
#[diesel(table_name = table_order_lines)]
pub struct TableOrderLine {
    pub id: i32,
    pub table_order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price: BigDecimal,
    pub special_request: String,
}

/// `price` is a snapshot of the menu price at the time the line is written.
#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = table_order_lines)]
pub struct NewTableOrderLine {
    pub table_order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32,
    pub price: BigDecimal,
    pub special_request: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = bookings)]
pub struct Booking {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: i32,
    pub status: BookingStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: i32,
    pub status: BookingStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = contact_messages)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// `table_number` is matched against [`DiningTable::number`] by string only.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = waiter_requests)]
pub struct WaiterRequest {
    pub id: i32,
    pub table_number: String,
    pub message: String,
    pub status: WaiterRequestStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = waiter_requests)]
pub struct NewWaiterRequest {
    pub table_number: String,
    pub message: String,
    pub status: WaiterRequestStatus,
    pub created_at: DateTime<Utc>,
}
