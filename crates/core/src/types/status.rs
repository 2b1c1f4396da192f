//! Order status classification.
//!
//! The orders API reports status as a free-form string; the shell never
//! enforces a state machine over it. `OrderStatus` is a lenient, display-only
//! classification of the vocabulary the order service is known to emit.
//! Unknown values are carried through verbatim as [`OrderStatus::Other`].

use serde::{Deserialize, Serialize};

/// Known order lifecycle statuses, as emitted by the order service.
///
/// Parsing never fails: strings outside the known vocabulary land in
/// `Other` and render unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
    #[serde(untagged)]
    Other(String),
}

impl OrderStatus {
    /// Classify a wire status string.
    #[must_use]
    pub fn parse(status: &str) -> Self {
        match status {
            "PENDING" => Self::Pending,
            "CONFIRMED" => Self::Confirmed,
            "PROCESSING" => Self::Processing,
            "SHIPPED" => Self::Shipped,
            "DELIVERED" => Self::Delivered,
            "CANCELLED" => Self::Cancelled,
            "REFUNDED" => Self::Refunded,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether the status is part of the known vocabulary.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// CSS badge class for the status, `badge-unknown` for anything
    /// outside the known vocabulary.
    #[must_use]
    pub const fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "badge-pending",
            Self::Confirmed => "badge-confirmed",
            Self::Processing => "badge-processing",
            Self::Shipped => "badge-shipped",
            Self::Delivered => "badge-delivered",
            Self::Cancelled => "badge-cancelled",
            Self::Refunded => "badge-refunded",
            Self::Other(_) => "badge-unknown",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Processing => write!(f, "PROCESSING"),
            Self::Shipped => write!(f, "SHIPPED"),
            Self::Delivered => write!(f, "DELIVERED"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::Refunded => write!(f, "REFUNDED"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(OrderStatus::parse("PENDING"), OrderStatus::Pending);
        assert_eq!(OrderStatus::parse("SHIPPED"), OrderStatus::Shipped);
        assert_eq!(OrderStatus::parse("REFUNDED"), OrderStatus::Refunded);
        assert!(OrderStatus::parse("DELIVERED").is_known());
    }

    #[test]
    fn test_unknown_status_passes_through_verbatim() {
        let status = OrderStatus::parse("PAID");
        assert_eq!(status, OrderStatus::Other("PAID".to_string()));
        assert_eq!(status.to_string(), "PAID");
        assert!(!status.is_known());
        assert_eq!(status.badge_class(), "badge-unknown");
    }

    #[test]
    fn test_case_is_not_folded() {
        // The wire contract is free-form; "pending" is not "PENDING".
        assert!(!OrderStatus::parse("pending").is_known());
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["PENDING", "CONFIRMED", "PROCESSING", "SHIPPED", "PAID"] {
            assert_eq!(OrderStatus::parse(raw).to_string(), raw);
        }
    }
}
