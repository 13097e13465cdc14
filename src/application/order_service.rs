use crate::domain::order::Order;
use crate::domain::ports::{DiscountPolicyBox, MemberStoreBox};
use crate::error::{OrderError, Result};

/// Creates orders for registered members.
///
/// `OrderService` resolves the member through the injected store, asks the
/// injected policy for the discount, and assembles the `Order`. It never
/// computes a discount itself and holds no state of its own, so a single
/// instance is safe to share across tasks.
pub struct OrderService {
    member_store: MemberStoreBox,
    discount_policy: DiscountPolicyBox,
}

impl OrderService {
    /// Creates a new `OrderService` instance.
    ///
    /// # Arguments
    ///
    /// * `member_store` - Resolves member ids to member records.
    /// * `discount_policy` - Computes the discount for `(member, price)`.
    pub fn new(member_store: MemberStoreBox, discount_policy: DiscountPolicyBox) -> Self {
        Self {
            member_store,
            discount_policy,
        }
    }

    /// Builds an order for `member_id` buying `item_name` at `item_price`.
    ///
    /// Fails with [`OrderError::MemberNotFound`] when the id does not
    /// resolve; no partial order is returned. `item_price` is trusted to be
    /// meaningful for the caller's currency, no validation is applied.
    pub async fn create_order(
        &self,
        member_id: u64,
        item_name: impl Into<String>,
        item_price: u64,
    ) -> Result<Order> {
        let member = self
            .member_store
            .find_by_id(member_id)
            .await?
            .ok_or(OrderError::MemberNotFound(member_id))?;

        let discount_price = self.discount_policy.discount(&member, item_price);

        Ok(Order::new(member_id, item_name, item_price, discount_price))
    }
}
