use serde::{Deserialize, Serialize};

/// The immutable result of a purchase request.
///
/// Carries the original item price and the discount granted by whichever
/// policy was injected into the order service. `discount_price` is always
/// the raw policy output; it is never recomputed after construction.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Order {
    pub member_id: u64,
    pub item_name: String,
    pub item_price: u64,
    pub discount_price: u64,
}

impl Order {
    pub fn new(
        member_id: u64,
        item_name: impl Into<String>,
        item_price: u64,
        discount_price: u64,
    ) -> Self {
        Self {
            member_id,
            item_name: item_name.into(),
            item_price,
            discount_price,
        }
    }

    /// Price after discount. Saturates at zero so a policy granting more
    /// than the item price cannot underflow.
    pub fn total_price(&self) -> u64 {
        self.item_price.saturating_sub(self.discount_price)
    }
}
