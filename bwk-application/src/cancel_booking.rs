use super::*;
use crate::guard::EventLockPool;

/// Cancels a booking on behalf of its owner, an organizer or an admin.
///
/// Canceling a confirmed booking frees one capacity slot, which is
/// immediately handed to the oldest waitlisted booking of the event.
/// The promotion happens under the same event lock as the cancellation
/// so that no concurrent booking request can grab the freed slot twice.
pub fn cancel_booking<D: Db>(
    db: &D,
    locks: &EventLockPool,
    actor: &User,
    booking_id: &Id,
) -> Result<Booking> {
    let (transition, promoted) = {
        let booking = db.get_booking(booking_id)?;
        let lock = locks.event_lock(&booking.tenant, &booking.event);
        let _guard = lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let transition = usecases::cancel_booking(db, actor, booking_id)?;

        // Only a previously confirmed booking frees a slot.
        let promoted = if transition.from == Some(BookingStatus::Confirmed) {
            usecases::promote_from_waitlist(
                db,
                &transition.booking.event,
                &transition.booking.tenant,
            )
            .unwrap_or_else(|err| {
                warn!(
                    "Failed to promote from the waitlist of event {}: {}",
                    transition.booking.event, err
                );
                None
            })
        } else {
            None
        };
        (transition, promoted)
    };

    if let Err(err) = usecases::record_booking_transition(db, &transition) {
        warn!(
            "Failed to record the cancellation of booking {}: {}",
            transition.booking.id, err
        );
    }
    if let Some(promoted) = &promoted {
        if let Err(err) = usecases::record_booking_transition(db, promoted) {
            warn!(
                "Failed to record the promotion of booking {}: {}",
                promoted.booking.id, err
            );
        }
    }

    Ok(transition.booking)
}
