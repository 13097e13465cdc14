use super::member::Member;
use super::ports::DiscountPolicy;

/// Grants a fixed amount to VIP members, nothing to anyone else.
#[derive(Debug, Clone, Copy)]
pub struct FixDiscountPolicy {
    amount: u64,
}

impl FixDiscountPolicy {
    pub fn new(amount: u64) -> Self {
        Self { amount }
    }
}

impl Default for FixDiscountPolicy {
    fn default() -> Self {
        Self { amount: 1000 }
    }
}

impl DiscountPolicy for FixDiscountPolicy {
    fn discount(&self, member: &Member, _item_price: u64) -> u64 {
        if member.is_vip() { self.amount } else { 0 }
    }
}

/// Grants a percentage of the item price to VIP members.
///
/// Integer arithmetic; fractional remainders are truncated.
#[derive(Debug, Clone, Copy)]
pub struct RateDiscountPolicy {
    rate_percent: u64,
}

impl RateDiscountPolicy {
    pub fn new(rate_percent: u64) -> Self {
        Self { rate_percent }
    }
}

impl Default for RateDiscountPolicy {
    fn default() -> Self {
        Self { rate_percent: 10 }
    }
}

impl DiscountPolicy for RateDiscountPolicy {
    fn discount(&self, member: &Member, item_price: u64) -> u64 {
        if member.is_vip() {
            item_price * self.rate_percent / 100
        } else {
            0
        }
    }
}
