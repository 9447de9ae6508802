//! # stayhub-mailer
//!
//! Composes booking confirmation and cancellation messages and delivers
//! them through the [`MailSender`] trait defined in `stayhub-core`.
//!
//! Actual transport is an external concern; the shipped sender records
//! deliveries through `tracing` so that an SMTP or API-backed transport can
//! be swapped in behind the same trait.
//!
//! [`MailSender`]: stayhub_core::traits::MailSender

pub mod messages;
pub mod sender;

pub use messages::BookingMail;
pub use sender::LogMailer;
