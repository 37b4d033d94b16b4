//! Sample rows written by the seeders. Prices are whole shillings.

use crate::models::{
    BookingStatus, ContactStatus, OrderStatus, PaymentMethod, StaffRole, WaiterRequestStatus,
};

pub const DEFAULT_PASSWORD: &str = "password123";

pub struct TableFixture {
    pub number: i32,
    pub capacity: i32,
}

pub struct CategoryFixture {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct MenuItemFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub price: i64,
    pub category: &'static str,
}

pub struct StaffFixture {
    pub username: &'static str,
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: StaffRole,
    pub phone: &'static str,
}

pub struct OrderFixture {
    pub customer_name: &'static str,
    pub customer_email: &'static str,
    pub customer_phone: &'static str,
    pub total: i64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub notes: &'static str,
}

pub struct BookingFixture {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub days_ahead: i64,
    pub hour: u32,
    pub minute: u32,
    pub guests: i32,
    pub status: BookingStatus,
    pub notes: &'static str,
}

pub struct ContactFixture {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
    pub status: ContactStatus,
}

pub struct WaiterRequestFixture {
    pub table_number: &'static str,
    pub message: &'static str,
    pub status: WaiterRequestStatus,
}

pub const TABLES: &[TableFixture] = &[
    TableFixture {
        number: 1,
        capacity: 2,
    },
    TableFixture {
        number: 2,
        capacity: 2,
    },
    TableFixture {
        number: 3,
        capacity: 4,
    },
    TableFixture {
        number: 4,
        capacity: 4,
    },
    TableFixture {
        number: 5,
        capacity: 6,
    },
    TableFixture {
        number: 6,
        capacity: 6,
    },
    TableFixture {
        number: 7,
        capacity: 8,
    },
    TableFixture {
        number: 8,
        capacity: 2,
    },
    TableFixture {
        number: 9,
        capacity: 4,
    },
    TableFixture {
        number: 10,
        capacity: 6,
    },
    TableFixture {
        number: 11,
        capacity: 8,
    },
    TableFixture {
        number: 12,
        capacity: 10,
    },
];

pub const CATEGORIES: &[CategoryFixture] = &[
    CategoryFixture {
        name: "Appetizers",
        description: "Start your meal with our delicious appetizers",
    },
    CategoryFixture {
        name: "Main Course",
        description: "Hearty main dishes to satisfy your hunger",
    },
    CategoryFixture {
        name: "Seafood",
        description: "Fresh seafood dishes from the ocean",
    },
    CategoryFixture {
        name: "Vegetarian",
        description: "Healthy and delicious vegetarian options",
    },
    CategoryFixture {
        name: "Desserts",
        description: "Sweet treats to end your meal perfectly",
    },
    CategoryFixture {
        name: "Beverages",
        description: "Refreshing drinks and beverages",
    },
    CategoryFixture {
        name: "Grilled",
        description: "Perfectly grilled meats and vegetables",
    },
    CategoryFixture {
        name: "Pasta",
        description: "Italian-inspired pasta dishes",
    },
];

pub const MENU_ITEMS: &[MenuItemFixture] = &[
    MenuItemFixture {
        name: "Buffalo Wings",
        description: "Spicy chicken wings served with ranch dip",
        price: 25000,
        category: "Appetizers",
    },
    MenuItemFixture {
        name: "Mozzarella Sticks",
        description: "Crispy mozzarella sticks with marinara sauce",
        price: 18000,
        category: "Appetizers",
    },
    MenuItemFixture {
        name: "Caesar Salad",
        description: "Fresh romaine lettuce with caesar dressing and croutons",
        price: 15000,
        category: "Appetizers",
    },
    MenuItemFixture {
        name: "Grilled Chicken Breast",
        description: "Tender grilled chicken breast with herbs and spices",
        price: 35000,
        category: "Main Course",
    },
    MenuItemFixture {
        name: "Beef Steak",
        description: "Juicy beef steak cooked to perfection",
        price: 45000,
        category: "Main Course",
    },
    MenuItemFixture {
        name: "BBQ Ribs",
        description: "Slow-cooked BBQ ribs with our signature sauce",
        price: 40000,
        category: "Main Course",
    },
    MenuItemFixture {
        name: "Grilled Salmon",
        description: "Fresh Atlantic salmon grilled with lemon butter",
        price: 55000,
        category: "Seafood",
    },
    MenuItemFixture {
        name: "Fish and Chips",
        description: "Beer-battered fish with crispy fries",
        price: 28000,
        category: "Seafood",
    },
    MenuItemFixture {
        name: "Shrimp Scampi",
        description: "Large shrimp in garlic butter sauce over pasta",
        price: 42000,
        category: "Seafood",
    },
    MenuItemFixture {
        name: "Veggie Burger",
        description: "Plant-based burger with fresh vegetables",
        price: 20000,
        category: "Vegetarian",
    },
    MenuItemFixture {
        name: "Quinoa Bowl",
        description: "Healthy quinoa bowl with roasted vegetables",
        price: 22000,
        category: "Vegetarian",
    },
    MenuItemFixture {
        name: "Mushroom Risotto",
        description: "Creamy risotto with wild mushrooms",
        price: 30000,
        category: "Vegetarian",
    },
    MenuItemFixture {
        name: "Chocolate Cake",
        description: "Rich chocolate cake with chocolate ganache",
        price: 12000,
        category: "Desserts",
    },
    MenuItemFixture {
        name: "Tiramisu",
        description: "Classic Italian dessert with coffee and mascarpone",
        price: 15000,
        category: "Desserts",
    },
    MenuItemFixture {
        name: "Ice Cream Sundae",
        description: "Vanilla ice cream with chocolate sauce and nuts",
        price: 8000,
        category: "Desserts",
    },
    MenuItemFixture {
        name: "Fresh Orange Juice",
        description: "Freshly squeezed orange juice",
        price: 5000,
        category: "Beverages",
    },
    MenuItemFixture {
        name: "Coffee",
        description: "Freshly brewed coffee",
        price: 3000,
        category: "Beverages",
    },
    MenuItemFixture {
        name: "Soft Drinks",
        description: "Assorted soft drinks (Coke, Pepsi, Sprite)",
        price: 4000,
        category: "Beverages",
    },
    MenuItemFixture {
        name: "Grilled Vegetables",
        description: "Seasonal vegetables grilled to perfection",
        price: 18000,
        category: "Grilled",
    },
    MenuItemFixture {
        name: "Grilled Pork Chops",
        description: "Thick-cut pork chops with apple glaze",
        price: 38000,
        category: "Grilled",
    },
    MenuItemFixture {
        name: "Spaghetti Carbonara",
        description: "Classic Italian pasta with eggs, cheese, and bacon",
        price: 25000,
        category: "Pasta",
    },
    MenuItemFixture {
        name: "Fettuccine Alfredo",
        description: "Creamy fettuccine with parmesan cheese sauce",
        price: 23000,
        category: "Pasta",
    },
];

pub const STAFF: &[StaffFixture] = &[
    StaffFixture {
        username: "admin",
        email: "admin@restaurant.com",
        first_name: "Restaurant",
        last_name: "Admin",
        role: StaffRole::Admin,
        phone: "256701234567",
    },
    StaffFixture {
        username: "manager",
        email: "manager@restaurant.com",
        first_name: "James",
        last_name: "Mukasa",
        role: StaffRole::Manager,
        phone: "256702345678",
    },
    StaffFixture {
        username: "waiter1",
        email: "waiter1@restaurant.com",
        first_name: "Grace",
        last_name: "Nakato",
        role: StaffRole::Waiter,
        phone: "256703456789",
    },
    StaffFixture {
        username: "waiter2",
        email: "waiter2@restaurant.com",
        first_name: "Peter",
        last_name: "Ochieng",
        role: StaffRole::Waiter,
        phone: "256704567890",
    },
    StaffFixture {
        username: "kitchen",
        email: "kitchen@restaurant.com",
        first_name: "Chef",
        last_name: "Musoke",
        role: StaffRole::KitchenStaff,
        phone: "256705678901",
    },
];

pub const ORDERS: &[OrderFixture] = &[
    OrderFixture {
        customer_name: "Aisha Nalubega",
        customer_email: "aisha@email.com",
        customer_phone: "256706123456",
        total: 85000,
        status: OrderStatus::Confirmed,
        payment_method: PaymentMethod::Cash,
        notes: "Table 3, extra spicy",
    },
    OrderFixture {
        customer_name: "David Kato",
        customer_email: "david@email.com",
        customer_phone: "256707234567",
        total: 62000,
        status: OrderStatus::Preparing,
        payment_method: PaymentMethod::AirtelMoney,
        notes: "Allergic to nuts",
    },
    OrderFixture {
        customer_name: "Catherine Namukasa",
        customer_email: "catherine@email.com",
        customer_phone: "256708345678",
        total: 54000,
        status: OrderStatus::Delivered,
        payment_method: PaymentMethod::MtnMomo,
        notes: "",
    },
];

/// Number of tables, lowest numbers first, that receive a table order.
pub const TABLE_ORDER_COUNT: usize = 3;

pub const TABLE_ORDER_STATUSES: &[OrderStatus] = &[
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
];

pub const PAYMENT_METHODS: &[PaymentMethod] = &[
    PaymentMethod::Cash,
    PaymentMethod::AirtelMoney,
    PaymentMethod::MtnMomo,
];

pub const SPECIAL_REQUESTS: &[&str] = &["Extra spicy", "No onions", "Well done"];

pub const BOOKINGS: &[BookingFixture] = &[
    BookingFixture {
        name: "John Muwanga",
        email: "john@email.com",
        phone: "256709456789",
        days_ahead: 1,
        hour: 19,
        minute: 0,
        guests: 4,
        status: BookingStatus::Confirmed,
        notes: "Anniversary dinner",
    },
    BookingFixture {
        name: "Jane Nakamya",
        email: "jane@email.com",
        phone: "256710567890",
        days_ahead: 2,
        hour: 18,
        minute: 30,
        guests: 2,
        status: BookingStatus::New,
        notes: "Window seat preferred",
    },
    BookingFixture {
        name: "Michael Kiggundu",
        email: "michael@email.com",
        phone: "256711678901",
        days_ahead: 3,
        hour: 20,
        minute: 0,
        guests: 6,
        status: BookingStatus::Confirmed,
        notes: "Business dinner",
    },
];

pub const CONTACT_MESSAGES: &[ContactFixture] = &[
    ContactFixture {
        name: "David Ssemwogerere",
        email: "david@email.com",
        phone: "256712789012",
        message: "Do you have vegetarian options?",
        status: ContactStatus::Handled,
    },
    ContactFixture {
        name: "Lisa Namukasa",
        email: "lisa@email.com",
        phone: "256713890123",
        message: "What are your opening hours on weekends?",
        status: ContactStatus::New,
    },
    ContactFixture {
        name: "Thomas Kiggundu",
        email: "thomas@email.com",
        phone: "256714901234",
        message: "Can I make a reservation for a large group?",
        status: ContactStatus::Handled,
    },
];

pub const WAITER_REQUESTS: &[WaiterRequestFixture] = &[
    WaiterRequestFixture {
        table_number: "3",
        message: "Need more napkins",
        status: WaiterRequestStatus::Completed,
    },
    WaiterRequestFixture {
        table_number: "5",
        message: "Ready to order",
        status: WaiterRequestStatus::Acknowledged,
    },
    WaiterRequestFixture {
        table_number: "7",
        message: "Check please",
        status: WaiterRequestStatus::Pending,
    },
];
