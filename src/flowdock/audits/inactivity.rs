//! Inactivity filtering over audit records

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

use crate::config::defaults;
use crate::error::{FlowdockError, Result};
use crate::flowdock::users::User;

/// What counts as "inactive"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityCriteria {
    /// Days since last access after which a user is inactive
    pub days: u32,
    /// Select users with no recorded access instead of stale ones
    pub include_unknown: bool,
}

impl Default for InactivityCriteria {
    fn default() -> Self {
        Self {
            days: defaults::INACTIVE_DAYS,
            include_unknown: false,
        }
    }
}

impl InactivityCriteria {
    pub fn new(days: u32, include_unknown: bool) -> Self {
        Self {
            days,
            include_unknown,
        }
    }

    /// Access times strictly before this instant are inactive
    ///
    /// `None` when `now - days` falls outside the representable range, in
    /// which case nothing can be older than the cutoff.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        TimeDelta::try_days(i64::from(self.days)).and_then(|d| now.checked_sub_signed(d))
    }
}

/// Parse an `accessed_at` value such as `2020-01-01T00:00:00.000Z`
pub fn parse_accessed_at(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| FlowdockError::MalformedTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Select the inactive users from a set of audit records
///
/// With `include_unknown` the result is exactly the users without an
/// `accessed_at`. Otherwise it is the users whose `accessed_at` parses to a
/// time strictly before `now - days`. A malformed timestamp fails the whole
/// call; it is never parsed when `include_unknown` is set.
pub fn filter_inactive(
    users: Vec<User>,
    criteria: &InactivityCriteria,
    now: DateTime<Utc>,
) -> Result<Vec<User>> {
    if criteria.include_unknown {
        return Ok(users
            .into_iter()
            .filter(|u| u.accessed_at.is_none())
            .collect());
    }

    let Some(cutoff) = criteria.cutoff(now) else {
        debug!(
            "Cutoff of {} days before {} is out of range, nothing is inactive",
            criteria.days, now
        );
        return Ok(Vec::new());
    };

    let mut inactive = Vec::new();
    for user in users {
        let Some(accessed_at) = user.accessed_at.as_deref() else {
            continue;
        };
        if parse_accessed_at(accessed_at)? < cutoff {
            inactive.push(user);
        }
    }
    Ok(inactive)
}
