use strum::{Display, EnumString};

use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id         : Id,
    pub event      : Id,
    pub user       : Id,
    // Always inherited from the event at creation.
    pub tenant     : Id,
    pub status     : BookingStatus,
    pub created_at : Timestamp,
}

impl Booking {
    /// A booking that has not reached its terminal state.
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Waitlisted,
    Canceled,
}

impl BookingStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Canceled)
    }

    /// Whether this booking occupies one of the event's capacity slots.
    pub const fn occupies_slot(self) -> bool {
        matches!(self, BookingStatus::Confirmed)
    }
}
