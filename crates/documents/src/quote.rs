use serde::{Deserialize, Serialize};

use pressroom_core::{DomainError, DomainResult};

/// Quote (COT) status lifecycle.
///
/// `NoResponse` and `Converted` are terminal (empty allowed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    Draft,
    Sent,
    Accepted,
    NoResponse,
    Converted,
}

impl QuoteStatus {
    /// The full transition table, keyed by current status (see
    /// [`crate::OrderStatus::valid_next`] for the table rationale).
    pub fn valid_next(self) -> &'static [QuoteStatus] {
        use QuoteStatus::*;
        match self {
            Draft => &[Sent],
            Sent => &[Accepted, NoResponse],
            Accepted => &[Converted],
            NoResponse => &[],
            Converted => &[],
        }
    }

    pub fn can_transition_to(self, next: QuoteStatus) -> bool {
        self.valid_next().contains(&next)
    }

    pub fn check_transition(self, next: QuoteStatus) -> DomainResult<()> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(DomainError::invariant(format!(
                "quote status cannot change from {} to {}",
                self.as_str(),
                next.as_str(),
            )))
        }
    }

    pub fn is_terminal(self) -> bool {
        self.valid_next().is_empty()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Accepted => "accepted",
            QuoteStatus::NoResponse => "no_response",
            QuoteStatus::Converted => "converted",
        }
    }
}

impl core::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
