//! Handlers for the `/bills` resource.
//!
//! Bill creation verifies the target profile's ownership chain before any
//! write; bill reads and mutations re-derive Bill -> Profile -> User through
//! the repository join. Totals are computed once here, at creation, and
//! persisted as the historical record.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use rentledger_core::billing::{self, BillCharges, CustomField};
use rentledger_core::error::CoreError;
use rentledger_core::types::{Amount, DbId};
use rentledger_core::whatsapp::{self, BillSummary};
use rentledger_db::models::bill::{Bill, CreateBill};
use rentledger_db::repositories::{BillRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// How many bills the list endpoint returns per profile.
const RECENT_BILLS_LIMIT: i64 = 5;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /bills`.
///
/// Required fields are optional here so their absence surfaces as a 400
/// validation error; the explicit validation step produces the typed charge
/// set before any persistence call.
#[derive(Debug, Deserialize)]
pub struct CreateBillRequest {
    pub profile_id: Option<DbId>,
    pub rent: Option<Amount>,
    pub electric: Option<Amount>,
    pub gas: Option<Amount>,
    pub water: Option<Amount>,
    pub custom_fields: Option<Vec<CustomField>>,
    pub contact_number: Option<String>,
    pub description: Option<String>,
}

/// Query parameters for `GET /bills`.
#[derive(Debug, Deserialize)]
pub struct ListBillsQuery {
    pub profile_id: Option<DbId>,
}

/// Response body for `GET /bills/{id}/whatsapp-link`.
#[derive(Debug, Serialize)]
pub struct WhatsAppLinkResponse {
    pub url: String,
}

/// Validated output of a bill-creation request.
struct ValidatedBill {
    profile_id: DbId,
    charges: BillCharges,
    contact_number: String,
    description: Option<String>,
}

impl CreateBillRequest {
    /// Explicit validation step: required fields present, contact number
    /// non-empty, no negative amounts. Runs before any persistence access.
    fn validated(self) -> Result<ValidatedBill, CoreError> {
        let (Some(profile_id), Some(rent), Some(contact_number)) =
            (self.profile_id, self.rent, self.contact_number)
        else {
            return Err(CoreError::Validation(
                "Profile id, rent, and contact number are required".into(),
            ));
        };
        billing::validate_contact_number(&contact_number)?;

        let charges = BillCharges {
            rent,
            electric: self.electric,
            gas: self.gas,
            water: self.water,
            custom_fields: self.custom_fields.unwrap_or_default(),
        };
        billing::validate_charges(&charges)?;

        Ok(ValidatedBill {
            profile_id,
            charges,
            contact_number,
            description: self.description.filter(|s| !s.is_empty()),
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/bills
///
/// Creates a billing-period snapshot for one of the caller's profiles. The
/// total is computed from the validated charges and never recomputed later.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateBillRequest>,
) -> AppResult<(StatusCode, Json<Bill>)> {
    let validated = request.validated().map_err(AppError::Core)?;

    // The target profile must resolve through the caller's ownership chain.
    let profile = ProfileRepo::find_owned(&state.pool, validated.profile_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: validated.profile_id,
        }))?;

    let total = validated.charges.total();
    let input = CreateBill {
        profile_id: profile.id,
        rent: validated.charges.rent,
        electric: validated.charges.electric,
        gas: validated.charges.gas,
        water: validated.charges.water,
        custom_fields: (!validated.charges.custom_fields.is_empty())
            .then_some(validated.charges.custom_fields),
        total,
        contact_number: validated.contact_number,
        description: validated.description,
    };
    let bill = BillRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(bill)))
}

/// GET /api/v1/bills?profile_id={id}
///
/// Lists the five most recent bills of one owned profile, newest first. A
/// profile that does not exist or belongs to someone else yields an empty
/// list.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListBillsQuery>,
) -> AppResult<Json<Vec<Bill>>> {
    let profile_id = query.profile_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Profile id is required".into()))
    })?;
    let bills =
        BillRepo::list_recent(&state.pool, profile_id, user.user_id, RECENT_BILLS_LIMIT).await?;
    Ok(Json(bills))
}

/// PATCH /api/v1/bills/{id}
///
/// Toggles the payment status between pending and paid. The only mutation a
/// bill supports after creation.
pub async fn toggle_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Bill>> {
    let bill = BillRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bill", id }))?;
    let updated = BillRepo::set_status(&state.pool, bill.id, bill.status.toggled()).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/bills/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let bill = BillRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bill", id }))?;
    BillRepo::delete(&state.pool, bill.id).await?;
    Ok(Json(json!({ "message": "Bill deleted successfully" })))
}

/// GET /api/v1/bills/{id}/whatsapp-link
///
/// Derives the WhatsApp send URL containing the bill summary for the
/// tenant's contact number. Pure derivation over the stored snapshot.
pub async fn whatsapp_link(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<WhatsAppLinkResponse>> {
    let bill = BillRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bill", id }))?;
    let profile = ProfileRepo::find_owned(&state.pool, bill.profile_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bill", id }))?;

    let url = whatsapp::deep_link(&BillSummary {
        tenant_name: &profile.tenant_name,
        contact_number: &bill.contact_number,
        rent: bill.rent,
        electric: bill.electric,
        gas: bill.gas,
        water: bill.water,
        custom_fields: bill.custom_fields(),
        total: bill.total,
        status_label: bill.status.label(),
        description: bill.description.as_deref(),
    });
    Ok(Json(WhatsAppLinkResponse { url }))
}
