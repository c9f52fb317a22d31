//! Member API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use shared::models::{
    Ack, Member, MemberCreate, MemberCreated, MemberDashboard, MemberReceipt, MemberRenew,
    MemberRenewed, MemberUpdate, MemberWithStatus,
};

use crate::core::{Config, ServerState};
use crate::db::repository::member;
use crate::membership::{self, MembershipError, NewMember, ProfileEdit};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text, validate_trainer,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/members - all members, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Member>>> {
    let members = member::find_all(&state.pool).await?;
    Ok(Json(members))
}

/// GET /api/members/dashboard?q= - filtered roster with status and stats
pub async fn dashboard(
    State(state): State<ServerState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<MemberDashboard>> {
    let members = member::find_all(&state.pool).await?;
    Ok(Json(membership::dashboard(members, &query.q, Utc::now())))
}

/// GET /api/members/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MemberWithStatus>> {
    let found = load(&state, id).await?;
    Ok(Json(membership::with_status(found, Utc::now())))
}

/// POST /api/members - sign up a member
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<MemberCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MemberCreated>)> {
    let Json(payload) = payload?;
    let data = NewMember::parse(payload)?;
    validate_new_member(&state.config, &data)?;

    let created = member::create(&state.pool, data).await?;
    tracing::info!(
        member_id = created.id,
        duration_months = created.duration_months,
        "Member created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MemberCreated {
            success: true,
            id: created.id,
        }),
    ))
}

/// PUT /api/members/{id} - edit name, phone and trainer
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Result<Json<MemberUpdate>, JsonRejection>,
) -> AppResult<Json<Ack>> {
    let Json(payload) = payload?;
    let edit = ProfileEdit::parse(payload)?;
    validate_required_text(&edit.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&edit.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_trainer(&state.config, edit.trainer.as_deref())?;

    let existing = load(&state, id).await?;
    let updated = membership::edit_profile(existing, &edit);
    member::update_profile(&state.pool, &updated).await?;
    tracing::info!(member_id = id, "Member profile updated");

    Ok(Json(Ack::OK))
}

/// PUT /api/members/{id}/renew - add months to the subscription
pub async fn renew(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Result<Json<MemberRenew>, JsonRejection>,
) -> AppResult<Json<MemberRenewed>> {
    let Json(payload) = payload?;
    let added = membership::validate_duration(
        payload
            .duration_months
            .ok_or(MembershipError::MissingField("durationMonths"))?,
    )?;

    let existing = load(&state, id).await?;
    let outcome = membership::renew(&existing, added, Utc::now())?;
    member::update_billing(&state.pool, id, &outcome).await?;
    tracing::info!(
        member_id = id,
        added_months = added,
        restarted = outcome.restarted,
        expires_on = %outcome.expires_on,
        "Membership renewed"
    );

    Ok(Json(MemberRenewed {
        success: true,
        outcome,
    }))
}

/// DELETE /api/members/{id} - hard delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Ack>> {
    if !member::delete(&state.pool, id).await? {
        return Err(AppError::member_not_found(id));
    }
    tracing::info!(member_id = id, "Member deleted");
    Ok(Json(Ack::OK))
}

/// GET /api/members/{id}/receipt - confirmation text and WhatsApp link
pub async fn receipt(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MemberReceipt>> {
    let found = load(&state, id).await?;
    let message = membership::receipt_message(&found, &state.config.gym_name);
    let link = membership::whatsapp_link(
        &found.phone,
        &message,
        &state.config.whatsapp_country_code,
    );
    Ok(Json(MemberReceipt { message, link }))
}

async fn load(state: &ServerState, id: i64) -> AppResult<Member> {
    member::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::member_not_found(id))
}

fn validate_new_member(config: &Config, data: &NewMember) -> AppResult<()> {
    validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(data.image_url.as_deref(), "imageUrl", MAX_URL_LEN)?;
    validate_trainer(config, data.trainer.as_deref())
}
