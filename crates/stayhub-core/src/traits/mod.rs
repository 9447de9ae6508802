//! Core traits defined in `stayhub-core` and implemented by other crates.

pub mod mailer;

pub use mailer::MailSender;
