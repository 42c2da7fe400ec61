use crate::{id::Id, time::Timestamp};

/// Isolation boundary grouping organizers, events, and bookings.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id         : Id,
    pub name       : String,
    pub created_by : Id,
    pub created_at : Timestamp,
}
