use crate::fixtures::CONTACT_MESSAGES;
use crate::models::{ContactMessage, NewContactMessage};
use crate::seeders::{SeedContext, SeedOutcome};
use crate::store::SeedStore;
use crate::SeedError;

pub fn seed_contact_messages(
    store: &mut dyn SeedStore,
    ctx: &SeedContext,
) -> Result<SeedOutcome<ContactMessage>, SeedError> {
    println!("\nCreating sample contact messages...");

    let mut outcome = SeedOutcome::default();
    for fixture in CONTACT_MESSAGES {
        let result = store.get_or_create_contact_message(&NewContactMessage {
            name: fixture.name.to_string(),
            email: fixture.email.to_string(),
            phone: fixture.phone.to_string(),
            message: fixture.message.to_string(),
            status: fixture.status,
            created_at: ctx.now,
        })?;
        if result.created {
            println!("  ✓ Created contact message from: {}", result.record.name);
        } else {
            println!(
                "  - Contact message from '{}' already exists",
                fixture.email
            );
        }
        outcome.push(result);
    }
    Ok(outcome)
}
