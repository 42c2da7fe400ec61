use super::*;
use crate::guard::EventLockPool;
use usecases::NewBooking;

/// Books an event for a user.
///
/// The booking is confirmed while capacity is available and waitlisted
/// once the event is full. The affected user is notified and the
/// decision lands in the audit trail.
pub fn book_event<D: Db>(db: &D, locks: &EventLockPool, new_booking: NewBooking) -> Result<Booking> {
    let transition = {
        let event = db.get_event(&new_booking.event)?;
        let lock = locks.event_lock(&event.tenant, &event.id);
        let _guard = lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let storable = usecases::new_booking(db, new_booking)?;
        usecases::store_created_booking(db, storable)?
    };

    // The booking is already stored, a failed side effect must not undo it.
    if let Err(err) = usecases::record_booking_transition(db, &transition) {
        warn!(
            "Failed to record the creation of booking {}: {}",
            transition.booking.id, err
        );
    }

    Ok(transition.booking)
}
