use crate::fixtures::WAITER_REQUESTS;
use crate::models::{NewWaiterRequest, WaiterRequest};
use crate::seeders::{SeedContext, SeedOutcome};
use crate::store::SeedStore;
use crate::SeedError;

/// Inserts service calls. They name a table by its number as text, not by row id, so they do
/// not depend on the tables having been seeded.
pub fn seed_waiter_requests(
    store: &mut dyn SeedStore,
    ctx: &SeedContext,
) -> Result<SeedOutcome<WaiterRequest>, SeedError> {
    println!("\nCreating sample waiter requests...");

    let mut outcome = SeedOutcome::default();
    for fixture in WAITER_REQUESTS {
        let result = store.get_or_create_waiter_request(&NewWaiterRequest {
            table_number: fixture.table_number.to_string(),
            message: fixture.message.to_string(),
            status: fixture.status,
            created_at: ctx.now,
        })?;
        if result.created {
            println!(
                "  ✓ Created waiter request for: {}",
                result.record.table_number
            );
        } else {
            println!(
                "  - Waiter request for '{}' already exists",
                fixture.table_number
            );
        }
        outcome.push(result);
    }
    Ok(outcome)
}
