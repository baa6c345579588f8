//! Member directory port.
//!
//! Hands out immutable snapshots of the member directory. A snapshot never
//! changes after it is handed out; callers that need fresher data ask for
//! it explicitly with `refetch`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::payroll::Member;

use super::PayrollError;

/// Port for reading the member directory.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Current snapshot, loading one if none has been fetched yet.
    async fn snapshot(&self) -> Result<Arc<MemberSnapshot>, PayrollError>;

    /// Discards the current snapshot and loads a new one.
    async fn refetch(&self) -> Result<Arc<MemberSnapshot>, PayrollError>;
}

/// Immutable copy of the member directory at a point in time.
#[derive(Debug, Clone)]
pub struct MemberSnapshot {
    members: Vec<Member>,
    fetched_at: DateTime<Utc>,
}

impl MemberSnapshot {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            fetched_at: Utc::now(),
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
