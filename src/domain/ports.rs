use super::member::Member;
use crate::error::Result;
use async_trait::async_trait;

pub type MemberStoreBox = Box<dyn MemberStore>;
pub type DiscountPolicyBox = Box<dyn DiscountPolicy>;

/// Member lookup port.
///
/// The order service only ever sees this trait; which backend resolves the
/// member is decided by whoever assembles the service.
#[async_trait]
pub trait MemberStore: Send + Sync {
    async fn save(&self, member: Member) -> Result<()>;
    async fn find_by_id(&self, id: u64) -> Result<Option<Member>>;
}

/// Pluggable discount computation.
///
/// Given a member and an item price, returns the discount amount. Pure and
/// synchronous; implementations must not mutate shared state.
pub trait DiscountPolicy: Send + Sync {
    fn discount(&self, member: &Member, item_price: u64) -> u64;
}
