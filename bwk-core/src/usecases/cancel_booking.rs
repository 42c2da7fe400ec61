use super::prelude::*;
use crate::usecases::{authorize::authorize_booking_cancellation, notify::BookingTransition};

/// Transitions a booking into its terminal state.
///
/// The returned transition carries the previous status so that the caller
/// knows whether a capacity slot has been freed.
pub fn cancel_booking<D>(db: &D, actor: &User, booking_id: &Id) -> Result<BookingTransition>
where
    D: BookingRepo,
{
    let mut booking = db.get_booking(booking_id)?;
    authorize_booking_cancellation(actor, &booking)?;
    if booking.status.is_terminal() {
        return Err(Error::AlreadyCanceled);
    }
    let from = booking.status;
    booking.status = BookingStatus::Canceled;
    db.update_booking(&booking)?;
    log::debug!("Canceled {} booking {}", from, booking.id);
    Ok(BookingTransition::updated(booking, from))
}
