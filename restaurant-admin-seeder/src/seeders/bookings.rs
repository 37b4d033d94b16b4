use chrono::{NaiveTime, TimeDelta};

use crate::fixtures::BOOKINGS;
use crate::models::{Booking, NewBooking};
use crate::seeders::{SeedContext, SeedOutcome};
use crate::store::SeedStore;
use crate::SeedError;

/// Inserts reservations one to three days ahead of `ctx.today()`, keyed by email, date and time.
pub fn seed_bookings(
    store: &mut dyn SeedStore,
    ctx: &SeedContext,
) -> Result<SeedOutcome<Booking>, SeedError> {
    println!("\nCreating sample bookings...");

    let mut outcome = SeedOutcome::default();
    for fixture in BOOKINGS {
        let time = NaiveTime::from_hms_opt(fixture.hour, fixture.minute, 0).ok_or_else(|| {
            SeedError::InvalidFixture(format!(
                "booking time {:02}:{:02} for {}",
                fixture.hour, fixture.minute, fixture.email
            ))
        })?;
        let result = store.get_or_create_booking(&NewBooking {
            name: fixture.name.to_string(),
            email: fixture.email.to_string(),
            phone: fixture.phone.to_string(),
            date: ctx.today() + TimeDelta::days(fixture.days_ahead),
            time,
            guests: fixture.guests,
            status: fixture.status,
            notes: fixture.notes.to_string(),
            created_at: ctx.now,
        })?;
        if result.created {
            println!("  ✓ Created booking for: {}", result.record.name);
        } else {
            println!("  - Booking for '{}' already exists", fixture.email);
        }
        outcome.push(result);
    }
    Ok(outcome)
}
