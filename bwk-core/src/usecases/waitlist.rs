use super::prelude::*;
use crate::usecases::notify::BookingTransition;

/// Promotes the oldest still-waitlisted booking of an event after a
/// confirmed slot has been freed.
///
/// At most one booking is promoted per call: a single cancellation frees
/// exactly one slot, so promotions never cascade.
pub fn promote_from_waitlist<D: BookingRepo>(
    db: &D,
    event: &Id,
    tenant: &Id,
) -> Result<Option<BookingTransition>> {
    let Some(mut booking) = db.oldest_waitlisted_booking(event, tenant)? else {
        return Ok(None);
    };
    booking.status = BookingStatus::Confirmed;
    db.update_booking(&booking)?;
    log::debug!(
        "Promoted booking {} from the waitlist of event {}",
        booking.id,
        event
    );
    Ok(Some(BookingTransition::updated(
        booking,
        BookingStatus::Waitlisted,
    )))
}
