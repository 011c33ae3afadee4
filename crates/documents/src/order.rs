use serde::{Deserialize, Serialize};

use pressroom_core::{DomainError, DomainResult};

/// Order (OP) status lifecycle.
///
/// Mostly linear production flow with one payment branch at `Ready` and a
/// warranty loop that returns to `Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Confirmed,
    InProduction,
    Ready,
    Paid,
    Delivered,
    DeliveredOnCredit,
    Warranty,
}

impl OrderStatus {
    /// The full transition table, keyed by current status.
    ///
    /// Kept as a single match so the whole state machine is auditable in one
    /// place; adding a state or edge is additive. Anything not listed here is
    /// rejected, never coerced.
    pub fn valid_next(self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            Draft => &[Confirmed],
            Confirmed => &[InProduction],
            InProduction => &[Ready],
            Ready => &[Paid, DeliveredOnCredit],
            Paid => &[Delivered],
            Delivered => &[Warranty],
            DeliveredOnCredit => &[Warranty],
            Warranty => &[Delivered],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.valid_next().contains(&next)
    }

    /// Transition check for writing callers; errors name both statuses so a
    /// rejection is self-explanatory.
    pub fn check_transition(self, next: OrderStatus) -> DomainResult<()> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(DomainError::invariant(format!(
                "order status cannot change from {} to {}",
                self.as_str(),
                next.as_str(),
            )))
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProduction => "in_production",
            OrderStatus::Ready => "ready",
            OrderStatus::Paid => "paid",
            OrderStatus::Delivered => "delivered",
            OrderStatus::DeliveredOnCredit => "delivered_on_credit",
            OrderStatus::Warranty => "warranty",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
