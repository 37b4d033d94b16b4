use std::fmt;

use crate::fixtures::DEFAULT_PASSWORD;
use crate::SeedError;

const RULE_WIDTH: usize = 60;

/// Number of rows each seeder inserted during one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub tables: usize,
    pub categories: usize,
    pub menu_items: usize,
    pub staff: usize,
    pub orders: usize,
    pub table_orders: usize,
    pub order_lines: usize,
    pub bookings: usize,
    pub contact_messages: usize,
    pub waiter_requests: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.tables
            + self.categories
            + self.menu_items
            + self.staff
            + self.orders
            + self.table_orders
            + self.order_lines
            + self.bookings
            + self.contact_messages
            + self.waiter_requests
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "SUMMARY")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "✓ Tables created: {}", self.tables)?;
        writeln!(f, "✓ Categories created: {}", self.categories)?;
        writeln!(f, "✓ Menu items created: {}", self.menu_items)?;
        writeln!(f, "✓ Admin users created: {}", self.staff)?;
        writeln!(f, "✓ Orders created: {}", self.orders)?;
        writeln!(f, "✓ Table orders created: {}", self.table_orders)?;
        writeln!(f, "✓ Order lines created: {}", self.order_lines)?;
        writeln!(f, "✓ Bookings created: {}", self.bookings)?;
        writeln!(f, "✓ Contact messages created: {}", self.contact_messages)?;
        write!(f, "✓ Waiter requests created: {}", self.waiter_requests)
    }
}

pub fn banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\nRESTAURANT ADMIN - SAMPLE DATA\n{rule}")
}

pub fn next_steps(dry_run: bool) -> String {
    if dry_run {
        return "\nDry run finished; nothing was written to the database.".to_string();
    }
    format!(
        "\n🎉 All sample data created successfully!\n\
         \nNext steps:\n\
         1. Start the restaurant admin web application\n\
         2. Open the admin panel in a browser\n\
         3. Log in with one of the created staff accounts\n\
         \nDefault admin credentials:\n\
         Username: admin\n\
         Password: {DEFAULT_PASSWORD}"
    )
}

pub fn troubleshooting(err: &SeedError) -> String {
    format!(
        "\n❌ Error creating sample data: {err}\n\
         \nTroubleshooting:\n\
         1. Make sure PostgreSQL is running\n\
         2. Check your DATABASE_URL in .env file\n\
         3. Apply migrations: diesel migration run (or pass --migrate)"
    )
}
