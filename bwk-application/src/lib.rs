//! Application flows that tie the booking use cases together with
//! their side effects.
//!
//! A flow mutates bookings first and records notifications and audit
//! entries afterwards. Side-effect failures are logged and swallowed,
//! the booking mutation is never reverted.

#[macro_use]
extern crate log;

mod book_event;
mod cancel_booking;
mod guard;

pub mod prelude {
    pub use super::{book_event::*, cancel_booking::*, guard::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use bwk_core::{db::*, entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
