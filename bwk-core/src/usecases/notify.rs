use super::prelude::*;

/// A booking state change that has already been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingTransition {
    pub booking: Booking,
    /// The status before the change, `None` for newly created bookings.
    pub from: Option<BookingStatus>,
}

impl BookingTransition {
    pub fn created(booking: Booking) -> Self {
        Self {
            booking,
            from: None,
        }
    }

    pub fn updated(booking: Booking, from: BookingStatus) -> Self {
        Self {
            booking,
            from: Some(from),
        }
    }
}

/// Emits the side-effect records of a booking transition: exactly one
/// notification for the affected user and one audit log entry.
///
/// Errors are returned to the caller. The booking mutation has already
/// succeeded when this runs, so callers must not revert it on failure;
/// the application flows log and swallow instead.
pub fn record_booking_transition<D>(db: &D, transition: &BookingTransition) -> Result<()>
where
    D: EventRepo + UserRepo + NotificationRepo + BookingLogRepo,
{
    let BookingTransition { booking, from } = transition;
    let event = db.get_event(&booking.event)?;
    let user = db.get_user(&booking.user)?;

    let Some((kind, action, note)) = transition_records(*from, booking.status) else {
        log::debug!(
            "No records to emit for transition {:?} -> {} of booking {}",
            from,
            booking.status,
            booking.id
        );
        return Ok(());
    };
    let (title, message) = notification_content(kind, &event.title);

    db.create_notification(&Notification {
        id: Id::new(),
        user: user.id,
        booking: booking.id.clone(),
        tenant: booking.tenant.clone(),
        kind,
        title,
        message,
        read: false,
        created_at: Timestamp::now(),
    })?;
    db.log_booking_action(&BookingLog {
        id: Id::new(),
        booking: booking.id.clone(),
        event: booking.event.clone(),
        user: booking.user.clone(),
        tenant: booking.tenant.clone(),
        action,
        note: Some(note.into()),
        created_at: Timestamp::now(),
    })?;
    Ok(())
}

fn transition_records(
    from: Option<BookingStatus>,
    to: BookingStatus,
) -> Option<(NotificationType, LogAction, &'static str)> {
    use BookingStatus::*;
    match (from, to) {
        (None, Confirmed) => Some((
            NotificationType::BookingConfirmed,
            LogAction::AutoConfirm,
            "Booking automatically confirmed - capacity available",
        )),
        (None, Waitlisted) => Some((
            NotificationType::Waitlisted,
            LogAction::AutoWaitlist,
            "Booking automatically waitlisted - event at capacity",
        )),
        (Some(Confirmed), Canceled) | (Some(Waitlisted), Canceled) => Some((
            NotificationType::BookingCanceled,
            LogAction::CancelConfirmed,
            "Booking canceled by user or admin",
        )),
        (Some(Waitlisted), Confirmed) => Some((
            NotificationType::WaitlistPromoted,
            LogAction::PromoteFromWaitlist,
            "Promoted from waitlist due to cancellation",
        )),
        _ => None,
    }
}

fn notification_content(kind: NotificationType, event_title: &str) -> (String, String) {
    match kind {
        NotificationType::BookingConfirmed => (
            "Booking Confirmed".into(),
            format!("Your booking for \"{event_title}\" has been confirmed."),
        ),
        NotificationType::Waitlisted => (
            "Added to Waitlist".into(),
            format!(
                "You have been added to the waitlist for \"{event_title}\". \
                 We'll notify you if a spot becomes available."
            ),
        ),
        NotificationType::BookingCanceled => (
            "Booking Canceled".into(),
            format!("Your booking for \"{event_title}\" has been canceled."),
        ),
        NotificationType::WaitlistPromoted => (
            "Promoted from Waitlist".into(),
            format!("Great news! Your waitlisted booking for \"{event_title}\" has been confirmed."),
        ),
    }
}
