use crate::domain::member::Member;
use crate::domain::ports::MemberStoreBox;
use crate::error::{OrderError, Result};

/// Member registration and lookup use cases.
pub struct MemberService {
    member_store: MemberStoreBox,
}

impl MemberService {
    pub fn new(member_store: MemberStoreBox) -> Self {
        Self { member_store }
    }

    /// Registers a member. Saving an already-used id overwrites the record.
    pub async fn join(&self, member: Member) -> Result<()> {
        self.member_store.save(member).await
    }

    /// Resolves a member or fails with [`OrderError::MemberNotFound`].
    pub async fn find_member(&self, id: u64) -> Result<Member> {
        self.member_store
            .find_by_id(id)
            .await?
            .ok_or(OrderError::MemberNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::Grade;
    use crate::infrastructure::in_memory::InMemoryMemberStore;

    #[tokio::test]
    async fn test_join_and_find_member() {
        let service = MemberService::new(Box::new(InMemoryMemberStore::new()));

        let member = Member::new(1, "memberA", Grade::Vip);
        service.join(member.clone()).await.unwrap();

        let found = service.find_member(1).await.unwrap();
        assert_eq!(found, member);
    }

    #[tokio::test]
    async fn test_find_missing_member() {
        let service = MemberService::new(Box::new(InMemoryMemberStore::new()));

        let result = service.find_member(42).await;
        assert!(matches!(result, Err(OrderError::MemberNotFound(42))));
    }

    #[tokio::test]
    async fn test_join_overwrites_duplicate_id() {
        let service = MemberService::new(Box::new(InMemoryMemberStore::new()));

        service
            .join(Member::new(1, "before", Grade::Basic))
            .await
            .unwrap();
        service
            .join(Member::new(1, "after", Grade::Vip))
            .await
            .unwrap();

        let found = service.find_member(1).await.unwrap();
        assert_eq!(found.name, "after");
        assert_eq!(found.grade, Grade::Vip);
    }
}
