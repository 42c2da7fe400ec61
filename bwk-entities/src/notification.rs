use strum::{Display, EnumString};

use crate::{id::Id, time::Timestamp};

/// In-app notification for a booking state change.
///
/// Created as a side effect of a booking transition and never mutated
/// afterwards, except for the `read` flag which the recipient may set.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id         : Id,
    pub user       : Id,
    pub booking    : Id,
    pub tenant     : Id,
    pub kind       : NotificationType,
    pub title      : String,
    pub message    : String,
    pub read       : bool,
    pub created_at : Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationType {
    BookingConfirmed,
    Waitlisted,
    WaitlistPromoted,
    BookingCanceled,
}
