use super::prelude::*;

/// A user's own bookings, newest first, optionally filtered by status.
pub fn bookings_by_user<R: BookingRepo>(
    repo: &R,
    user: &Id,
    status: Option<BookingStatus>,
    pagination: &Pagination,
) -> Result<Page<Booking>> {
    Ok(repo.user_bookings(user, status, pagination)?)
}
