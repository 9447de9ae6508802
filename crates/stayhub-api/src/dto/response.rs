//! Response DTOs.

use serde::{Deserialize, Serialize};

use stayhub_booking::RefundQuote;
use stayhub_entity::reservation::Reservation;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Refund quote presented to the guest before and after cancelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundQuoteResponse {
    /// Nights whose cost is returned.
    pub refundable_nights: i64,
    /// The stay has fully elapsed; no refund applies.
    pub delayed: bool,
    /// Refund amount in integer currency units.
    pub amount: i64,
    /// Rendered message for display.
    pub message: String,
}

impl RefundQuoteResponse {
    /// Render a quote for the given reservation.
    pub fn from_quote(quote: RefundQuote, reservation: &Reservation) -> Self {
        let message = if quote.delayed {
            "The stay has already ended; no refund applies.".to_string()
        } else {
            format!(
                "You will be refunded for {} night(s) of the stay {} - {}, totalling {}.",
                quote.refundable_nights,
                reservation.check_in,
                reservation.check_out,
                quote.amount
            )
        };

        Self {
            refundable_nights: quote.refundable_nights,
            delayed: quote.delayed,
            amount: quote.amount,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use stayhub_core::types::{GuestId, ReservationId, RoomId};

    fn reservation() -> Reservation {
        Reservation {
            id: ReservationId::new(),
            room_id: RoomId::new(),
            client_id: GuestId::new(),
            check_in: NaiveDate::from_ymd_opt(2022, 9, 17).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2022, 9, 27).unwrap(),
            guest_count: 2,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_delayed_quote_renders_no_refund_message() {
        let quote = RefundQuote {
            refundable_nights: 0,
            delayed: true,
            amount: 0,
        };
        let resp = RefundQuoteResponse::from_quote(quote, &reservation());
        assert!(resp.message.contains("no refund"));
    }

    #[test]
    fn test_active_quote_renders_amount() {
        let quote = RefundQuote {
            refundable_nights: 7,
            delayed: false,
            amount: 4900,
        };
        let resp = RefundQuoteResponse::from_quote(quote, &reservation());
        assert!(resp.message.contains("7 night(s)"));
        assert!(resp.message.contains("4900"));
    }
}
