use super::prelude::*;
use crate::usecases::{capacity::decide_booking_status, notify::BookingTransition};

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub event: Id,
    pub user: Id,
}

/// A new booking that has passed all checks and is ready to be stored.
#[derive(Debug, Clone)]
pub struct Storable(Booking);

/// Validates a booking request and decides its initial status.
///
/// The status is computed by the capacity allocator and is never chosen
/// by the caller. The booking inherits the tenant of its event, even if
/// the booking user belongs to another tenant.
pub fn new_booking<D>(db: &D, b: NewBooking) -> Result<Storable>
where
    D: EventRepo + BookingRepo,
{
    let NewBooking { event, user } = b;
    let event = db.get_event(&event)?;
    if db.try_get_active_booking(&event.id, &user)?.is_some() {
        return Err(Error::AlreadyBooked);
    }
    let status = decide_booking_status(db, &event)?;
    Ok(Storable(Booking {
        id: Id::new(),
        event: event.id,
        user,
        tenant: event.tenant,
        status,
        created_at: Timestamp::now(),
    }))
}

pub fn store_created_booking<D: BookingRepo>(db: &D, b: Storable) -> Result<BookingTransition> {
    let Storable(booking) = b;
    db.create_booking(&booking)?;
    log::debug!(
        "Stored new {} booking {} for event {}",
        booking.status,
        booking.id,
        booking.event
    );
    Ok(BookingTransition::created(booking))
}
