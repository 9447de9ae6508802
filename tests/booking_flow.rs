//! Database-backed booking flow tests.
//!
//! These tests need a PostgreSQL instance; point
//! `STAYHUB_TEST_DATABASE_URL` at an empty database and run with
//! `cargo test -- --ignored`. Every test uses its own rooms and guests so
//! the suite can run concurrently against one database.

use std::sync::Arc;

use chrono::{Days, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use stayhub_booking::{RequestContext, ReservationService};
use stayhub_core::config::booking::BookingConfig;
use stayhub_core::config::mail::MailConfig;
use stayhub_core::error::ErrorKind;
use stayhub_core::traits::MailSender;
use stayhub_core::types::GuestId;
use stayhub_database::repositories::{ReservationRepository, RoomRepository};
use stayhub_entity::reservation::{CreateReservation, StayRange};
use stayhub_entity::room::{CreateRoom, Room};

async fn test_pool() -> PgPool {
    let url = std::env::var("STAYHUB_TEST_DATABASE_URL")
        .expect("STAYHUB_TEST_DATABASE_URL must point at a test database");
    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    stayhub_database::migration::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

fn service(pool: &PgPool) -> ReservationService {
    let reservation_repo = Arc::new(ReservationRepository::new(pool.clone()));
    let room_repo = Arc::new(RoomRepository::new(pool.clone()));
    let mailer: Arc<dyn MailSender> = Arc::new(stayhub_mailer::LogMailer::new(MailConfig::default()));
    ReservationService::new(
        reservation_repo,
        room_repo,
        mailer,
        MailConfig::default(),
        BookingConfig::default(),
    )
}

fn guest_ctx() -> RequestContext {
    let id = GuestId::new();
    RequestContext::new(id, format!("{id}@example.com"), Some("Test Guest".into()))
}

async fn create_room(pool: &PgPool) -> Room {
    let number = (Uuid::new_v4().as_u128() % 1_000_000_000) as i32;
    RoomRepository::new(pool.clone())
        .create(&CreateRoom {
            number,
            type_code: None,
            nightly_price: 700,
            capacity: 2,
        })
        .await
        .expect("Failed to create room")
}

fn future_range(start_offset: u64, nights: u64) -> StayRange {
    let check_in = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(start_offset))
        .unwrap();
    let check_out = check_in.checked_add_days(Days::new(nights)).unwrap();
    StayRange::new(check_in, check_out).unwrap()
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn create_then_fetch_returns_exact_range() {
    let pool = test_pool().await;
    let svc = service(&pool);
    let room = create_room(&pool).await;
    let ctx = guest_ctx();
    let range = future_range(10, 5);
    let today = Utc::now().date_naive();

    let created = svc
        .create(&ctx, room.id, range, 2, today)
        .await
        .expect("Booking should succeed");

    let fetched = ReservationRepository::new(pool.clone())
        .find_by_id(created.id)
        .await
        .expect("Fetch should succeed")
        .expect("Reservation should exist");

    assert_eq!(fetched.range(), range);
    assert_eq!(fetched.guest_count, 2);
    assert_eq!(fetched.client_id, ctx.guest_id);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn concurrent_overlapping_bookings_allow_at_most_one() {
    let pool = test_pool().await;
    let room = create_room(&pool).await;
    let today = Utc::now().date_naive();

    // Two different guests race for the same room and overlapping ranges.
    let a = {
        let svc = service(&pool);
        let ctx = guest_ctx();
        let range = future_range(20, 5);
        tokio::spawn(async move { svc.create(&ctx, room.id, range, 2, today).await })
    };
    let b = {
        let svc = service(&pool);
        let ctx = guest_ctx();
        let range = future_range(22, 5);
        tokio::spawn(async move { svc.create(&ctx, room.id, range, 2, today).await })
    };

    let results = [a.await.unwrap(), b.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one racing booking must win");

    let loser = results.iter().find(|r| r.is_err()).unwrap();
    assert_eq!(
        loser.as_ref().unwrap_err().kind,
        ErrorKind::RoomUnavailable
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn guest_cannot_hold_two_overlapping_reservations() {
    let pool = test_pool().await;
    let svc = service(&pool);
    let room_a = create_room(&pool).await;
    let room_b = create_room(&pool).await;
    let ctx = guest_ctx();
    let today = Utc::now().date_naive();

    svc.create(&ctx, room_a.id, future_range(30, 5), 1, today)
        .await
        .expect("First booking should succeed");

    let err = svc
        .create(&ctx, room_b.id, future_range(32, 5), 1, today)
        .await
        .expect_err("Overlapping booking in another room must fail");
    assert_eq!(err.kind, ErrorKind::UserConflict);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn back_to_back_stays_share_a_turnover_day() {
    let pool = test_pool().await;
    let svc = service(&pool);
    let room = create_room(&pool).await;
    let today = Utc::now().date_naive();

    let first = future_range(40, 5);
    svc.create(&guest_ctx(), room.id, first, 2, today)
        .await
        .expect("First booking should succeed");

    let second = StayRange::new(
        first.check_out,
        first.check_out.checked_add_days(Days::new(3)).unwrap(),
    )
    .unwrap();
    svc.create(&guest_ctx(), room.id, second, 2, today)
        .await
        .expect("Back-to-back booking must be allowed");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn cancelling_a_foreign_reservation_is_forbidden() {
    let pool = test_pool().await;
    let svc = service(&pool);
    let room = create_room(&pool).await;
    let owner = guest_ctx();
    let today = Utc::now().date_naive();

    let reservation = svc
        .create(&owner, room.id, future_range(50, 5), 2, today)
        .await
        .expect("Booking should succeed");

    let stranger = guest_ctx();
    let err = svc
        .cancel(&stranger, reservation.id, today)
        .await
        .expect_err("A stranger must not cancel the reservation");
    assert_eq!(err.kind, ErrorKind::Forbidden);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn purging_twice_removes_nothing_the_second_time() {
    let pool = test_pool().await;
    let svc = service(&pool);
    let room = create_room(&pool).await;
    let repo = ReservationRepository::new(pool.clone());
    let today = Utc::now().date_naive();

    // Insert a long-finished stay directly; the service would reject the
    // past dates at request validation.
    let check_out = today.checked_sub_days(Days::new(200)).unwrap();
    let check_in = check_out.checked_sub_days(Days::new(3)).unwrap();
    repo.create(&CreateReservation {
        room_id: room.id,
        client_id: GuestId::new(),
        range: StayRange::new(check_in, check_out).unwrap(),
        guest_count: 1,
    })
    .await
    .expect("Direct insert should succeed");

    let first = svc.purge_expired(today).await.expect("First sweep");
    assert!(first >= 1);

    let second = svc.purge_expired(today).await.expect("Second sweep");
    assert_eq!(second, 0);
}
