use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;

use crate::fixtures::{DEFAULT_PASSWORD, STAFF};
use crate::models::{NewStaffProfile, NewUser, StaffProfile, User};
use crate::seeders::{SeedContext, SeedOutcome};
use crate::store::{GetOrCreate, SeedStore};
use crate::SeedError;

#[derive(Debug, Clone, PartialEq)]
pub struct StaffAccount {
    pub user: User,
    pub profile: StaffProfile,
}

fn hash_password(argon2: &Argon2<'_>, password: &str) -> Result<String, SeedError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Inserts each staff identity, then its profile.
///
/// The two steps are independent get-or-creates, so an identity left without a profile by an
/// earlier run gets its profile here. An account counts as created when its profile is. The
/// password is only hashed for identities that are not stored yet.
pub fn seed_staff(
    store: &mut dyn SeedStore,
    ctx: &SeedContext,
) -> Result<SeedOutcome<StaffAccount>, SeedError> {
    println!("\nCreating admin users...");

    let mut outcome = SeedOutcome::default();
    for fixture in STAFF {
        let user = match store.find_user(fixture.username)? {
            Some(user) => GetOrCreate::existing(user),
            None => {
                let password_hash = hash_password(&ctx.argon2, DEFAULT_PASSWORD)?;
                store.get_or_create_user(&NewUser {
                    username: fixture.username.to_string(),
                    email: fixture.email.to_string(),
                    first_name: fixture.first_name.to_string(),
                    last_name: fixture.last_name.to_string(),
                    password_hash,
                    is_active: true,
                    created_at: ctx.now,
                })?
            }
        };
        if !user.created {
            println!("  - User '{}' already exists", user.record.username);
        }

        let profile = store.get_or_create_staff_profile(&NewStaffProfile {
            user_id: user.record.id,
            role: fixture.role,
            phone: fixture.phone.to_string(),
        })?;
        if profile.created {
            println!(
                "  ✓ Created user: {} ({})",
                user.record.username, profile.record.role
            );
        } else {
            println!(
                "  - Admin user for '{}' already exists",
                user.record.username
            );
        }

        outcome.push(GetOrCreate {
            created: profile.created,
            record: StaffAccount {
                user: user.record,
                profile: profile.record,
            },
        });
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    use super::*;
    use crate::models::StaffRole;
    use crate::seeders::tests::{test_context, FailingStore};
    use crate::store::MemoryStore;

    #[test]
    fn test_creates_five_accounts() {
        let mut store = MemoryStore::new();
        let outcome = seed_staff(&mut store, &test_context(1)).unwrap();

        assert_eq!(outcome.created.len(), 5);
        assert_eq!(store.users.len(), 5);
        assert_eq!(store.staff_profiles.len(), 5);

        let admin = outcome
            .created
            .iter()
            .find(|a| a.user.username == "admin")
            .unwrap();
        assert_eq!(admin.profile.role, StaffRole::Admin);
        assert_eq!(admin.profile.user_id, admin.user.id);
    }

    #[test]
    fn test_default_password_verifies() {
        let ctx = test_context(1);
        let mut store = MemoryStore::new();
        seed_staff(&mut store, &ctx).unwrap();

        let user = store.users.iter().find(|u| u.username == "kitchen").unwrap();
        let hash = PasswordHash::new(&user.password_hash).unwrap();
        assert!(ctx
            .argon2
            .verify_password(DEFAULT_PASSWORD.as_bytes(), &hash)
            .is_ok());
    }

    #[test]
    fn test_rerun_keeps_original_password_hash() {
        let ctx = test_context(1);
        let mut store = MemoryStore::new();
        seed_staff(&mut store, &ctx).unwrap();
        let hashes: Vec<_> = store.users.iter().map(|u| u.password_hash.clone()).collect();

        let outcome = seed_staff(&mut store, &ctx).unwrap();

        assert!(outcome.created.is_empty());
        assert_eq!(outcome.existing.len(), 5);
        assert_eq!(
            store.users.iter().map(|u| u.password_hash.clone()).collect::<Vec<_>>(),
            hashes
        );
    }

    #[test]
    fn test_rerun_skips_identity_insert() {
        let ctx = test_context(1);
        let mut store = MemoryStore::new();
        seed_staff(&mut store, &ctx).unwrap();

        let mut store = FailingStore::new(store, "users");
        let outcome = seed_staff(&mut store, &ctx).unwrap();

        assert_eq!(outcome.existing.len(), 5);
        assert_eq!(store.inner.users.len(), 5);
    }

    #[test]
    fn test_new_identity_goes_through_insert() {
        let mut store = FailingStore::new(MemoryStore::new(), "users");
        let result = seed_staff(&mut store, &test_context(1));

        assert!(matches!(result, Err(SeedError::Database(_))));
        assert!(store.inner.users.is_empty());
    }

    #[test]
    fn test_missing_profile_is_healed() {
        let ctx = test_context(1);
        let mut store = MemoryStore::new();
        seed_staff(&mut store, &ctx).unwrap();
        let manager_id = store
            .users
            .iter()
            .find(|u| u.username == "manager")
            .unwrap()
            .id;
        store.staff_profiles.retain(|p| p.user_id != manager_id);

        let outcome = seed_staff(&mut store, &ctx).unwrap();

        assert_eq!(outcome.created.len(), 1);
        assert_eq!(outcome.created[0].user.username, "manager");
        assert_eq!(outcome.created[0].profile.role, StaffRole::Manager);
        assert_eq!(store.users.len(), 5);
        assert_eq!(store.staff_profiles.len(), 5);
    }
}
