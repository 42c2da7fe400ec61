use strum::{Display, EnumString};

use crate::{id::Id, time::Timestamp};

/// Append-only audit trail entry for a booking.
///
/// Never mutated or deleted by normal operation.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLog {
    pub id         : Id,
    pub booking    : Id,
    pub event      : Id,
    pub user       : Id,
    pub tenant     : Id,
    pub action     : LogAction,
    pub note       : Option<String>,
    pub created_at : Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum LogAction {
    CreateRequest,
    AutoConfirm,
    AutoWaitlist,
    PromoteFromWaitlist,
    CancelConfirmed,
}
