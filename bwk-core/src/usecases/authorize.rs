use super::prelude::*;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(())
}

/// Attendees may only cancel their own bookings; organizers and admins
/// may cancel any booking within their tenant. Nobody may touch bookings
/// of a foreign tenant.
pub fn authorize_booking_cancellation(actor: &User, booking: &Booking) -> Result<()> {
    if actor.tenant.as_ref() != Some(&booking.tenant) {
        return Err(Error::Forbidden);
    }
    if actor.role == Role::Attendee && actor.id != booking.user {
        return Err(Error::Forbidden);
    }
    Ok(())
}
