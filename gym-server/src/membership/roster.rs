//! Roster search and aggregate stats

use chrono::{DateTime, Utc};
use shared::models::{Member, MemberDashboard, MemberStatus, MemberWithStatus, RosterStats};

use super::status::classify;

/// Annotate a single member with its status at `now`.
pub fn with_status(member: Member, now: DateTime<Utc>) -> MemberWithStatus {
    let status = classify(member.payment_date, member.duration_months, now);
    MemberWithStatus { member, status }
}

/// Whether `member` matches a search query.
///
/// Name matches case-insensitively, phone matches the query as typed,
/// whitespace included. An empty query matches everyone.
pub fn matches_query(member: &Member, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    member.name.to_lowercase().contains(&query.to_lowercase()) || member.phone.contains(query)
}

/// Keep the members matching `query`, in their original order, annotated with status.
pub fn filter_roster(
    members: impl IntoIterator<Item = Member>,
    query: &str,
    now: DateTime<Utc>,
) -> Vec<MemberWithStatus> {
    members
        .into_iter()
        .filter(|m| matches_query(m, query))
        .map(|m| with_status(m, now))
        .collect()
}

/// Partition counts over an annotated roster.
pub fn roster_stats(members: &[MemberWithStatus]) -> RosterStats {
    members
        .iter()
        .fold(RosterStats::default(), |mut stats, m| {
            stats.total += 1;
            match m.status.status {
                MemberStatus::Active => stats.active += 1,
                MemberStatus::ExpiringSoon => stats.expiring_soon += 1,
                MemberStatus::Expired => stats.expired += 1,
            }
            stats
        })
}

/// Filtered roster plus stats computed over the filtered set.
pub fn dashboard(
    members: impl IntoIterator<Item = Member>,
    query: &str,
    now: DateTime<Utc>,
) -> MemberDashboard {
    let members = filter_roster(members, query, now);
    let stats = roster_stats(&members);
    MemberDashboard { members, stats }
}
