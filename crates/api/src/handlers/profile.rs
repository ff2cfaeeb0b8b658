//! Handlers for the `/profiles` resource.
//!
//! Every operation authenticates first (via the [`AuthUser`] extractor),
//! validates its input, and then touches persistence through owner-scoped
//! repository queries only.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use rentledger_core::error::CoreError;
use rentledger_core::types::{Amount, DbId};
use rentledger_db::models::bill::Bill;
use rentledger_db::models::profile::{CreateProfile, Profile, ProfileWithBills, UpdateProfile};
use rentledger_db::repositories::{BillRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// How many bills the profile detail view embeds.
const DETAIL_BILLS_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for profile creation and update.
///
/// Required fields are optional here so their absence surfaces as a 400
/// validation error rather than a body-deserialization rejection; the
/// explicit validation step below produces the typed repository input.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub tenant_name: Option<String>,
    pub contact_number: Option<String>,
    pub room_label: Option<String>,
    pub rent: Option<Amount>,
    pub security_deposit: Option<Amount>,
    pub move_in_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl ProfileRequest {
    /// Validate the shared required fields, returning (tenant_name,
    /// contact_number) on success.
    fn validated_required(&self) -> Result<(String, String), CoreError> {
        let tenant_name = self
            .tenant_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let contact_number = self
            .contact_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        match (tenant_name, contact_number) {
            (Some(name), Some(contact)) => Ok((name.to_string(), contact.to_string())),
            _ => Err(CoreError::Validation(
                "Tenant name and contact number are required".into(),
            )),
        }
    }

    /// Reject negative monetary fields.
    fn validated_amounts(&self) -> Result<(), CoreError> {
        if self.rent.is_some_and(|v| v < 0) {
            return Err(CoreError::Validation("Rent must not be negative".into()));
        }
        if self.security_deposit.is_some_and(|v| v < 0) {
            return Err(CoreError::Validation(
                "Security deposit must not be negative".into(),
            ));
        }
        Ok(())
    }

    fn into_create(self) -> Result<CreateProfile, CoreError> {
        let (tenant_name, contact_number) = self.validated_required()?;
        self.validated_amounts()?;
        Ok(CreateProfile {
            tenant_name,
            contact_number,
            room_label: self.room_label.filter(|s| !s.trim().is_empty()),
            rent: self.rent,
            security_deposit: self.security_deposit,
            move_in_date: self.move_in_date,
            description: self.description.filter(|s| !s.is_empty()),
        })
    }

    fn into_update(self) -> Result<UpdateProfile, CoreError> {
        let (tenant_name, contact_number) = self.validated_required()?;
        self.validated_amounts()?;
        Ok(UpdateProfile {
            tenant_name,
            contact_number,
            rent: self.rent,
            security_deposit: self.security_deposit,
            move_in_date: self.move_in_date,
            description: self.description.filter(|s| !s.is_empty()),
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/profiles
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<ProfileRequest>,
) -> AppResult<(StatusCode, Json<Profile>)> {
    let input = request.into_create().map_err(AppError::Core)?;
    let profile = ProfileRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/profiles
///
/// Lists the caller's profiles, newest first, each carrying a latest-bill
/// preview of at most one bill.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<ProfileWithBills>>> {
    let profiles = ProfileRepo::list_by_user(&state.pool, user.user_id).await?;

    let ids: Vec<DbId> = profiles.iter().map(|p| p.id).collect();
    let mut latest: HashMap<DbId, Bill> = BillRepo::latest_per_profile(&state.pool, &ids)
        .await?
        .into_iter()
        .map(|b| (b.profile_id, b))
        .collect();

    let result = profiles
        .into_iter()
        .map(|p| ProfileWithBills {
            bills: latest.remove(&p.id).into_iter().collect(),
            profile: p,
        })
        .collect();
    Ok(Json(result))
}

/// GET /api/v1/profiles/{id}
///
/// Returns the profile with its five most recent bills, newest first.
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProfileWithBills>> {
    let profile = ProfileRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    let bills =
        BillRepo::list_recent(&state.pool, id, user.user_id, DETAIL_BILLS_LIMIT).await?;
    Ok(Json(ProfileWithBills { profile, bills }))
}

/// PUT /api/v1/profiles/{id}
///
/// Full-field replace of the editable set.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(request): Json<ProfileRequest>,
) -> AppResult<Json<Profile>> {
    let input = request.into_update().map_err(AppError::Core)?;
    let profile = ProfileRepo::update_owned(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(profile))
}

/// DELETE /api/v1/profiles/{id}
///
/// Removes the profile and, by cascade, every bill referencing it.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = ProfileRepo::delete_owned(&state.pool, id, user.user_id).await?;
    if deleted {
        Ok(Json(json!({ "message": "Profile deleted successfully" })))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))
    }
}
