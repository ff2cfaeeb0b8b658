//! Repository for the `profiles` table.
//!
//! Every read and mutation is constrained to the owning user in the WHERE
//! clause; a client-supplied id alone is never trusted.

use rentledger_core::types::DbId;

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, tenant_name, contact_number, room_label, rent, \
                        security_deposit, move_in_date, description, created_at, updated_at";

/// Owner-scoped CRUD operations for tenant profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile owned by `user_id`, returning the created row.
    ///
    /// A missing room label defaults to `'Unknown'`.
    pub async fn create(
        pool: &DbPool,
        user_id: DbId,
        input: &CreateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles
                (user_id, tenant_name, contact_number, room_label, rent,
                 security_deposit, move_in_date, description)
             VALUES ($1, $2, $3, COALESCE($4, 'Unknown'), $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.tenant_name)
            .bind(&input.contact_number)
            .bind(&input.room_label)
            .bind(input.rent)
            .bind(input.security_deposit)
            .bind(input.move_in_date)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by id, scoped to its owner.
    ///
    /// Returns `None` both when the id does not exist and when the row is
    /// owned by a different user.
    pub async fn find_owned(
        pool: &DbPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all profiles owned by `user_id`, most recently created first.
    pub async fn list_by_user(pool: &DbPool, user_id: DbId) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the editable fields of an owned profile.
    ///
    /// Full-field replace: optional fields are written as given, so omitted
    /// ones clear the stored value. Returns `None` when the profile does not
    /// exist or is owned by a different user.
    pub async fn update_owned(
        pool: &DbPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                tenant_name = $3,
                contact_number = $4,
                rent = $5,
                security_deposit = $6,
                move_in_date = $7,
                description = $8,
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.tenant_name)
            .bind(&input.contact_number)
            .bind(input.rent)
            .bind(input.security_deposit)
            .bind(input.move_in_date)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an owned profile. Dependent bills are removed by the
    /// `ON DELETE CASCADE` foreign key. Returns `true` if a row was removed.
    pub async fn delete_owned(pool: &DbPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
