//! Snapshot-caching MemberDirectory.
//!
//! Loads the directory from a `PayrollReader` on first use and keeps serving
//! that snapshot until `refetch` replaces it.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{MemberDirectory, MemberSnapshot, PayrollError, PayrollReader};

pub struct CachedMemberDirectory {
    reader: Arc<dyn PayrollReader>,
    current: RwLock<Option<Arc<MemberSnapshot>>>,
}

impl CachedMemberDirectory {
    pub fn new(reader: Arc<dyn PayrollReader>) -> Self {
        Self {
            reader,
            current: RwLock::new(None),
        }
    }
}

#[async_trait]
impl MemberDirectory for CachedMemberDirectory {
    async fn snapshot(&self) -> Result<Arc<MemberSnapshot>, PayrollError> {
        if let Some(snapshot) = self.current.read().await.as_ref() {
            return Ok(Arc::clone(snapshot));
        }
        self.refetch().await
    }

    async fn refetch(&self) -> Result<Arc<MemberSnapshot>, PayrollError> {
        let members = self.reader.members().await?;
        let snapshot = Arc::new(MemberSnapshot::new(members));
        *self.current.write().await = Some(Arc::clone(&snapshot));
        tracing::debug!(count = snapshot.len(), "Member directory refetched");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPayrollReader;
    use crate::domain::foundation::MemberId;
    use crate::domain::payroll::Member;

    /// Test-only lookup by id over a snapshot's members.
    trait SnapshotLookup {
        fn find(&self, id: &MemberId) -> Option<&Member>;
    }

    impl SnapshotLookup for MemberSnapshot {
        fn find(&self, id: &MemberId) -> Option<&Member> {
            self.members().iter().find(|m| &m.id == id)
        }
    }

    #[tokio::test]
    async fn snapshot_is_stable_until_refetch() {
        let reader = InMemoryPayrollReader::new();
        let member = Member {
            id: MemberId::new(),
            name: "Park Jisoo".to_string(),
        };
        reader.add_member(member.clone()).await;
        let directory = CachedMemberDirectory::new(Arc::new(reader.clone()));

        let first = directory.snapshot().await.unwrap();
        reader
            .rename_member(&Member {
                id: member.id,
                name: "Park Ji-soo".to_string(),
            })
            .await;

        let second = directory.snapshot().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.find(&member.id).unwrap().name, "Park Jisoo");

        let refreshed = directory.refetch().await.unwrap();
        assert_eq!(refreshed.find(&member.id).unwrap().name, "Park Ji-soo");
        // Snapshots handed out earlier keep their contents.
        assert_eq!(first.find(&member.id).unwrap().name, "Park Jisoo");
    }

    #[tokio::test]
    async fn snapshot_picks_up_new_members_only_after_refetch() {
        let reader = InMemoryPayrollReader::new();
        let directory = CachedMemberDirectory::new(Arc::new(reader.clone()));

        assert!(directory.snapshot().await.unwrap().is_empty());
        reader
            .add_member(Member {
                id: MemberId::new(),
                name: "Lee Hana".to_string(),
            })
            .await;
        assert!(directory.snapshot().await.unwrap().is_empty());
        assert_eq!(directory.refetch().await.unwrap().len(), 1);
    }
}
