//! Member Repository
//!
//! Each write is a single statement; there is no optimistic concurrency, so
//! two simultaneous renewals of the same member resolve as last-write-wins.

use super::{RepoError, RepoResult};
use crate::membership::NewMember;
use shared::models::{Member, RenewalOutcome};
use sqlx::SqlitePool;

const MEMBER_SELECT: &str = "SELECT id, name, phone, payment_date, duration_months, trainer, image_url, created_at FROM member";

/// All members, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Member>> {
    let sql = format!("{MEMBER_SELECT} ORDER BY created_at DESC, id DESC");
    let rows = sqlx::query_as::<_, Member>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: NewMember) -> RepoResult<Member> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO member (id, name, phone, payment_date, duration_months, trainer, image_url, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.phone)
    .bind(data.payment_date)
    .bind(data.duration_months)
    .bind(&data.trainer)
    .bind(&data.image_url)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create member".into()))
}

/// Overwrite name, phone and trainer
pub async fn update_profile(pool: &SqlitePool, member: &Member) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE member SET name = ?1, phone = ?2, trainer = ?3 WHERE id = ?4")
        .bind(&member.name)
        .bind(&member.phone)
        .bind(&member.trainer)
        .bind(member.id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Member {}", member.id)));
    }
    Ok(())
}

/// Replace the billing fields with a renewal outcome
pub async fn update_billing(
    pool: &SqlitePool,
    id: i64,
    outcome: &RenewalOutcome,
) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE member SET payment_date = ?1, duration_months = ?2 WHERE id = ?3")
        .bind(outcome.payment_date)
        .bind(outcome.duration_months)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Member {id}")));
    }
    Ok(())
}

/// Hard delete. Returns `false` when no such member exists.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM member WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
