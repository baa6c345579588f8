//! RefetchMemberDirectoryHandler - Replaces the cached member snapshot.
//!
//! Reports already being calculated keep the snapshot they started with.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::ports::{MemberDirectory, PayrollError};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefetchMemberDirectoryResult {
    pub member_count: usize,
    pub fetched_at: DateTime<Utc>,
}

pub struct RefetchMemberDirectoryHandler {
    directory: Arc<dyn MemberDirectory>,
}

impl RefetchMemberDirectoryHandler {
    pub fn new(directory: Arc<dyn MemberDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self) -> Result<RefetchMemberDirectoryResult, PayrollError> {
        let snapshot = self.directory.refetch().await?;

        tracing::info!(members = snapshot.len(), "Member directory refreshed");

        Ok(RefetchMemberDirectoryResult {
            member_count: snapshot.len(),
            fetched_at: snapshot.fetched_at(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::payroll::test_fixtures::Studio;

    #[tokio::test]
    async fn test_refetch_picks_up_new_members() {
        let studio = Studio::new().await;
        studio.contract("Lee Dahye", "2024-03-01", 10, 70_000.0).await;
        let directory = studio.directory();
        assert_eq!(directory.snapshot().await.unwrap().len(), 1);

        studio.contract("Jung Hoon", "2024-03-02", 10, 70_000.0).await;
        assert_eq!(directory.snapshot().await.unwrap().len(), 1);

        let handler = RefetchMemberDirectoryHandler::new(Arc::clone(&directory));
        let result = handler.handle().await.unwrap();

        assert_eq!(result.member_count, 2);
        assert_eq!(directory.snapshot().await.unwrap().len(), 2);
    }
}
