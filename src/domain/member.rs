use serde::{Deserialize, Serialize};

/// Membership grade used by discount policies to decide eligibility.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Basic,
    Vip,
}

/// A registered customer.
///
/// Immutable once created; owned by whichever `MemberStore` adapter holds it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Member {
    /// The unique identifier for the member.
    pub id: u64,
    pub name: String,
    /// Grade that discount policies key off.
    pub grade: Grade,
}

impl Member {
    pub fn new(id: u64, name: impl Into<String>, grade: Grade) -> Self {
        Self {
            id,
            name: name.into(),
            grade,
        }
    }

    pub fn is_vip(&self) -> bool {
        self.grade == Grade::Vip
    }
}
