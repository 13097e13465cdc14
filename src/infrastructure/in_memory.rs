use crate::domain::member::Member;
use crate::domain::ports::MemberStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for members.
///
/// Uses `Arc<RwLock<HashMap<u64, Member>>>` to allow shared concurrent access.
/// Suitable for tests and small assemblies where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryMemberStore {
    members: Arc<RwLock<HashMap<u64, Member>>>,
}

impl InMemoryMemberStore {
    /// Creates a new, empty in-memory member store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn save(&self, member: Member) -> Result<()> {
        let mut members = self.members.write().await;
        members.insert(member.id, member);
        Ok(())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Member>> {
        let members = self.members.read().await;
        Ok(members.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::Grade;

    #[tokio::test]
    async fn test_in_memory_member_store() {
        let store = InMemoryMemberStore::new();
        let member = Member::new(1, "memberA", Grade::Vip);

        store.save(member.clone()).await.unwrap();
        let retrieved = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(retrieved, member);

        assert!(store.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_id() {
        let store = InMemoryMemberStore::new();
        store
            .save(Member::new(1, "before", Grade::Basic))
            .await
            .unwrap();
        store.save(Member::new(1, "after", Grade::Vip)).await.unwrap();

        let retrieved = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(retrieved.name, "after");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryMemberStore::new();
        let clone = store.clone();

        clone.save(Member::new(7, "shared", Grade::Basic)).await.unwrap();
        assert!(store.find_by_id(7).await.unwrap().is_some());
    }
}
