//! Booking mail composition.

use stayhub_entity::reservation::StayRange;

/// A composed message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingMail {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Compose the booking confirmation sent after a reservation commits.
pub fn confirmation(
    guest_name: &str,
    room_number: i32,
    range: &StayRange,
    guest_count: i32,
    sender_name: &str,
) -> BookingMail {
    let body = format!(
        "Hello {guest_name}, your booking request has been approved.\n\
         ------ Booking details ------\n\
         Room: {room_number}\n\
         Arrival: {}\n\
         Departure: {}\n\
         Guests: {guest_count}\n\
         We wish you a pleasant stay.\n\
         --\n\
         Kind regards, {sender_name}.",
        range.check_in, range.check_out,
    );
    BookingMail {
        subject: "Your booking is confirmed".to_string(),
        body,
    }
}

/// Compose the notice sent after a reservation is cancelled.
pub fn cancellation(sender_name: &str) -> BookingMail {
    let body = format!(
        "Hello. Your cancellation request has been approved.\n\
         --\n\
         Kind regards, {sender_name}.",
    );
    BookingMail {
        subject: "Your booking has been cancelled".to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_confirmation_contains_details() {
        let range = StayRange::new(
            NaiveDate::from_ymd_opt(2022, 9, 17).unwrap(),
            NaiveDate::from_ymd_opt(2022, 9, 27).unwrap(),
        )
        .unwrap();
        let mail = confirmation("Anna", 12, &range, 2, "Hotel Administration");
        assert!(mail.body.contains("Anna"));
        assert!(mail.body.contains("Room: 12"));
        assert!(mail.body.contains("2022-09-17"));
        assert!(mail.body.contains("2022-09-27"));
        assert!(mail.body.contains("Guests: 2"));
    }

    #[test]
    fn test_cancellation_signed_by_sender() {
        let mail = cancellation("Hotel Administration");
        assert!(mail.body.contains("Hotel Administration"));
        assert!(mail.subject.contains("cancelled"));
    }
}
