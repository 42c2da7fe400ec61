#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # bwk-entities
//!
//! Reusable, agnostic domain entities for bookwerk.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod booking;
pub mod booking_log;
pub mod email;
pub mod event;
pub mod id;
pub mod notification;
pub mod password;
pub mod tenant;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
