use serde::{Deserialize, Serialize};

/// Expense Order (OG) status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseOrderStatus {
    Draft,
    Approved,
    Paid,
    Cancelled,
}

impl ExpenseOrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseOrderStatus::Draft => "draft",
            ExpenseOrderStatus::Approved => "approved",
            ExpenseOrderStatus::Paid => "paid",
            ExpenseOrderStatus::Cancelled => "cancelled",
        }
    }
}

impl core::fmt::Display for ExpenseOrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
