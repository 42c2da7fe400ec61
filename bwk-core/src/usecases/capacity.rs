use super::prelude::*;

/// Decides whether a new booking for the given event is confirmed
/// immediately or queued on the waitlist.
///
/// Pure read; the decision is applied when the booking is stored. The
/// count-then-decide is evaluated at creation time only, so callers that
/// need consistency under concurrent requests must serialize per event.
pub fn decide_booking_status<R: BookingRepo>(repo: &R, event: &Event) -> Result<BookingStatus> {
    let confirmed = repo.count_confirmed_bookings(&event.id, &event.tenant)?;
    if confirmed < u64::from(event.capacity) {
        Ok(BookingStatus::Confirmed)
    } else {
        Ok(BookingStatus::Waitlisted)
    }
}
