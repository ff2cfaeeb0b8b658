//! Repository for the `bills` table.
//!
//! A bill's owning user is never stored on the row; every owner-scoped query
//! joins through `profiles` to re-derive the Bill -> Profile -> User chain.
//! Skipping that join would leak bills across landlords.

use sqlx::types::Json;

use rentledger_core::types::DbId;

use crate::models::bill::{Bill, BillStatus, CreateBill};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, profile_id, issued_on, rent, electric, gas, water, \
                        custom_fields, total, contact_number, description, status, created_at";

/// Column list qualified with the `b` alias for owner-joined queries.
const JOINED_COLUMNS: &str =
    "b.id, b.profile_id, b.issued_on, b.rent, b.electric, b.gas, b.water, \
     b.custom_fields, b.total, b.contact_number, b.description, b.status, b.created_at";

/// Owner-scoped operations for bills.
pub struct BillRepo;

impl BillRepo {
    /// Insert a new bill, returning the created row (status starts pending).
    ///
    /// The caller has already verified that the profile belongs to the
    /// authenticated user and computed the total from the validated charges.
    pub async fn create(pool: &DbPool, input: &CreateBill) -> Result<Bill, sqlx::Error> {
        let query = format!(
            "INSERT INTO bills
                (profile_id, rent, electric, gas, water, custom_fields,
                 total, contact_number, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bill>(&query)
            .bind(input.profile_id)
            .bind(input.rent)
            .bind(input.electric)
            .bind(input.gas)
            .bind(input.water)
            .bind(input.custom_fields.clone().map(Json))
            .bind(input.total)
            .bind(&input.contact_number)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a bill by id, scoped to the owning user via the profile join.
    ///
    /// Returns `None` both when the id does not exist and when the bill's
    /// profile is owned by a different user.
    pub async fn find_owned(
        pool: &DbPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Bill>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM bills b
             JOIN profiles p ON p.id = b.profile_id
             WHERE b.id = $1 AND p.user_id = $2"
        );
        sqlx::query_as::<_, Bill>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recent bills of one owned profile, newest first.
    ///
    /// A profile id that does not exist or is owned by someone else yields an
    /// empty list.
    pub async fn list_recent(
        pool: &DbPool,
        profile_id: DbId,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Bill>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM bills b
             JOIN profiles p ON p.id = b.profile_id
             WHERE b.profile_id = $1 AND p.user_id = $2
             ORDER BY b.issued_on DESC, b.id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, Bill>(&query)
            .bind(profile_id)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Fetch the single latest bill for each of the given profiles.
    ///
    /// Used for the latest-bill preview embedded in the profile list. The
    /// caller passes ids it already resolved as owned, so no join is needed.
    pub async fn latest_per_profile(
        pool: &DbPool,
        profile_ids: &[DbId],
    ) -> Result<Vec<Bill>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT ON (profile_id) {COLUMNS} FROM bills
             WHERE profile_id = ANY($1)
             ORDER BY profile_id, issued_on DESC, id DESC"
        );
        sqlx::query_as::<_, Bill>(&query)
            .bind(profile_ids)
            .fetch_all(pool)
            .await
    }

    /// Set the payment status of a bill, returning the updated row.
    ///
    /// Ownership must have been verified via [`BillRepo::find_owned`] first;
    /// the status flip is the only post-creation mutation a bill supports.
    pub async fn set_status(
        pool: &DbPool,
        id: DbId,
        status: BillStatus,
    ) -> Result<Bill, sqlx::Error> {
        let query = format!("UPDATE bills SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Bill>(&query)
            .bind(id)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a bill by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all bills referencing one profile, regardless of owner.
    pub async fn count_by_profile(pool: &DbPool, profile_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM bills WHERE profile_id = $1")
                .bind(profile_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
