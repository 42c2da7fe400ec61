use crate::{id::Id, time::Timestamp};

/// A bookable event with a fixed capacity.
///
/// The capacity is the sole input to the allocation decision and is
/// treated as immutable once bookings exist.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id          : Id,
    pub title       : String,
    pub description : Option<String>,
    pub date        : Timestamp,
    pub capacity    : u32,
    pub organizer   : Id,
    pub tenant      : Id,
    pub created_at  : Timestamp,
}
