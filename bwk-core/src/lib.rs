//! # bwk-core
//!
//! Repository contracts and the usecases that make up the booking engine:
//! capacity allocation, the booking state machine, waitlist promotion and
//! the notification/audit records emitted by every transition.

pub mod db;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use bwk_entities::{
        booking::*, booking_log::*, email::*, event::*, id::*, notification::*, password::*,
        tenant::*, time::*, user::*,
    };
}
