//! Reservation lifecycle orchestration.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use tracing::{info, warn};

use stayhub_core::config::booking::BookingConfig;
use stayhub_core::config::mail::MailConfig;
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::traits::MailSender;
use stayhub_core::types::{ReservationId, RoomId};
use stayhub_database::repositories::{ReservationRepository, RoomRepository};
use stayhub_entity::reservation::{CreateReservation, Reservation, StayRange};
use stayhub_entity::room::Room;
use stayhub_mailer::messages;

use crate::availability::{has_conflict, is_available};
use crate::context::RequestContext;
use crate::refund::{self, RefundQuote};

/// Validate the request-level booking guards.
///
/// The range itself is already well-formed (a [`StayRange`] cannot be
/// inverted or empty); what remains is that the stay must start strictly
/// after `today` and the party must not be empty.
pub fn validate_booking_request(
    today: NaiveDate,
    range: &StayRange,
    guest_count: i32,
) -> AppResult<()> {
    if guest_count <= 0 {
        return Err(AppError::invalid_guest_count(
            "At least one guest must stay",
        ));
    }
    if range.check_in <= today {
        return Err(AppError::invalid_range(format!(
            "Check-in {} must be after {today}",
            range.check_in
        )));
    }
    Ok(())
}

/// Sequences availability and conflict checks, persistence, and booking
/// mail for reservation creation, cancellation, and expiry.
#[derive(Clone)]
pub struct ReservationService {
    /// Reservation repository.
    reservation_repo: Arc<ReservationRepository>,
    /// Room repository.
    room_repo: Arc<RoomRepository>,
    /// Outbound mail collaborator.
    mailer: Arc<dyn MailSender>,
    /// Mail settings (sender identity).
    mail_config: MailConfig,
    /// Booking policy settings.
    booking_config: BookingConfig,
}

impl std::fmt::Debug for ReservationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationService").finish()
    }
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(
        reservation_repo: Arc<ReservationRepository>,
        room_repo: Arc<RoomRepository>,
        mailer: Arc<dyn MailSender>,
        mail_config: MailConfig,
        booking_config: BookingConfig,
    ) -> Self {
        Self {
            reservation_repo,
            room_repo,
            mailer,
            mail_config,
            booking_config,
        }
    }

    /// Create a reservation for the authenticated guest.
    ///
    /// Checks run against a snapshot first so that the common failure cases
    /// produce a typed outcome without opening a transaction; the repository
    /// then re-validates inside the locked transaction, closing the
    /// check-then-act window.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        room_id: RoomId,
        range: StayRange,
        guest_count: i32,
        today: NaiveDate,
    ) -> AppResult<Reservation> {
        validate_booking_request(today, &range, guest_count)?;

        let room = self.find_room(room_id).await?;
        if !room.fits(guest_count) {
            return Err(AppError::invalid_guest_count(format!(
                "Room {} hosts at most {} guests",
                room.number, room.capacity
            )));
        }

        let room_ranges = self.reservation_repo.ranges_for_room(room_id).await?;
        if !is_available(&range, &room_ranges) {
            return Err(AppError::room_unavailable(format!(
                "Room {} is not available for {range}",
                room.number
            )));
        }

        let guest_ranges = self.reservation_repo.ranges_for_user(ctx.guest_id).await?;
        if has_conflict(&range, &guest_ranges) {
            return Err(AppError::user_conflict(format!(
                "You already hold a reservation within {range}"
            )));
        }

        let reservation = self
            .reservation_repo
            .create(&CreateReservation {
                room_id,
                client_id: ctx.guest_id,
                range,
                guest_count,
            })
            .await?;

        info!(
            reservation_id = %reservation.id,
            room = room.number,
            guest = %ctx.guest_id,
            %range,
            "Reservation confirmed"
        );

        let mail = messages::confirmation(
            ctx.salutation_name(),
            room.number,
            &range,
            guest_count,
            &self.mail_config.sender_name,
        );
        self.send_mail(ctx, &mail.subject, &mail.body).await;

        Ok(reservation)
    }

    /// List the authenticated guest's reservations, newest first.
    pub async fn list_for_guest(&self, ctx: &RequestContext) -> AppResult<Vec<Reservation>> {
        self.reservation_repo.find_by_client(ctx.guest_id).await
    }

    /// Quote the refund for cancelling a reservation, without cancelling.
    pub async fn cancel_quote(
        &self,
        ctx: &RequestContext,
        id: ReservationId,
        today: NaiveDate,
    ) -> AppResult<(Reservation, RefundQuote)> {
        let reservation = self.find_owned(ctx, id).await?;
        let room = self.find_room(reservation.room_id).await?;
        let quote = refund::quote(today, &reservation.range(), room.nightly_price);
        Ok((reservation, quote))
    }

    /// Cancel a reservation, returning the removed record and the refund
    /// owed.
    ///
    /// The cancellation mail is only sent while the stay has not already
    /// fully elapsed; a delayed cancellation silently removes the record.
    pub async fn cancel(
        &self,
        ctx: &RequestContext,
        id: ReservationId,
        today: NaiveDate,
    ) -> AppResult<(Reservation, RefundQuote)> {
        let (reservation, quote) = self.cancel_quote(ctx, id, today).await?;

        if !self.reservation_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Reservation {id} not found")));
        }

        info!(
            reservation_id = %id,
            guest = %ctx.guest_id,
            refundable_nights = quote.refundable_nights,
            delayed = quote.delayed,
            "Reservation cancelled"
        );

        if today <= reservation.check_out {
            let mail = messages::cancellation(&self.mail_config.sender_name);
            self.send_mail(ctx, &mail.subject, &mail.body).await;
        }

        Ok((reservation, quote))
    }

    /// Remove reservations whose stay ended longer ago than the configured
    /// retention window. Idempotent; returns the number of rows removed.
    pub async fn purge_expired(&self, today: NaiveDate) -> AppResult<u64> {
        let cutoff = today
            .checked_sub_days(Days::new(self.booking_config.purge_after_days as u64))
            .ok_or_else(|| AppError::internal("Purge cutoff out of range"))?;

        let removed = self
            .reservation_repo
            .purge_checked_out_before(cutoff)
            .await?;

        if removed > 0 {
            info!(removed, %cutoff, "Purged old reservations");
        }
        Ok(removed)
    }

    /// Fetch a reservation and verify the requester owns it.
    async fn find_owned(
        &self,
        ctx: &RequestContext,
        id: ReservationId,
    ) -> AppResult<Reservation> {
        let reservation = self
            .reservation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;

        if !reservation.is_owned_by(ctx.guest_id) {
            return Err(AppError::forbidden(
                "Reservation belongs to a different guest",
            ));
        }
        Ok(reservation)
    }

    async fn find_room(&self, room_id: RoomId) -> AppResult<Room> {
        self.room_repo
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {room_id} not found")))
    }

    /// Fire-and-forget mail: a committed lifecycle transition never rolls
    /// back because delivery failed.
    async fn send_mail(&self, ctx: &RequestContext, subject: &str, body: &str) {
        if let Err(e) = self.mailer.send(&ctx.email, subject, body).await {
            warn!(recipient = %ctx.email, subject, error = %e, "Booking mail failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_guest_count() {
        let range = StayRange::new(date(2022, 10, 1), date(2022, 10, 5)).unwrap();
        let err = validate_booking_request(date(2022, 9, 20), &range, 0).unwrap_err();
        assert_eq!(err.kind, stayhub_core::error::ErrorKind::InvalidGuestCount);
    }

    #[test]
    fn test_rejects_same_day_booking() {
        let range = StayRange::new(date(2022, 9, 20), date(2022, 9, 25)).unwrap();
        let err = validate_booking_request(date(2022, 9, 20), &range, 2).unwrap_err();
        assert_eq!(err.kind, stayhub_core::error::ErrorKind::InvalidRange);
    }

    #[test]
    fn test_rejects_past_booking() {
        let range = StayRange::new(date(2022, 9, 10), date(2022, 9, 12)).unwrap();
        let err = validate_booking_request(date(2022, 9, 20), &range, 2).unwrap_err();
        assert_eq!(err.kind, stayhub_core::error::ErrorKind::InvalidRange);
    }

    #[test]
    fn test_accepts_future_booking() {
        let range = StayRange::new(date(2022, 9, 21), date(2022, 9, 25)).unwrap();
        assert!(validate_booking_request(date(2022, 9, 20), &range, 2).is_ok());
    }
}
