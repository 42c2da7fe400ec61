// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// One page of a filtered query together with the total number
/// of matching records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

pub trait TenantRepo {
    fn create_tenant(&self, tenant: &Tenant) -> Result<()>;
    fn get_tenant(&self, id: &Id) -> Result<Tenant>;
    fn try_get_tenant_by_name(&self, name: &str) -> Result<Option<Tenant>>;
    fn count_tenants(&self) -> Result<usize>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn get_user(&self, id: &Id) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait EventRepo {
    fn create_event(&self, event: &Event) -> Result<()>;
    fn get_event(&self, id: &Id) -> Result<Event>;

    // Ordered by event date, ascending.
    fn all_events_chronologically(&self, pagination: &Pagination) -> Result<Page<Event>>;
    fn tenant_events_chronologically(
        &self,
        tenant: &Id,
        pagination: &Pagination,
    ) -> Result<Page<Event>>;

    fn count_events(&self) -> Result<usize>;
}

pub trait BookingRepo {
    fn create_booking(&self, booking: &Booking) -> Result<()>;
    fn update_booking(&self, booking: &Booking) -> Result<()>;
    fn get_booking(&self, id: &Id) -> Result<Booking>;

    /// Number of bookings currently occupying capacity slots of the event.
    fn count_confirmed_bookings(&self, event: &Id, tenant: &Id) -> Result<u64>;

    // Only non-canceled bookings
    fn try_get_active_booking(&self, event: &Id, user: &Id) -> Result<Option<Booking>>;

    /// The next promotion candidate: the earliest-created booking that is
    /// still waitlisted for the event.
    fn oldest_waitlisted_booking(&self, event: &Id, tenant: &Id) -> Result<Option<Booking>>;

    // Ordered by creation time stamp, newest first.
    fn user_bookings(
        &self,
        user: &Id,
        status: Option<BookingStatus>,
        pagination: &Pagination,
    ) -> Result<Page<Booking>>;
}

pub trait NotificationRepo {
    fn create_notification(&self, notification: &Notification) -> Result<()>;
    fn update_notification(&self, notification: &Notification) -> Result<()>;
    fn get_notification(&self, id: &Id) -> Result<Notification>;

    // Ordered by creation time stamp, newest first.
    fn user_notifications(
        &self,
        user: &Id,
        tenant: &Id,
        unread_only: bool,
        pagination: &Pagination,
    ) -> Result<Page<Notification>>;

    fn count_unread_notifications(&self, user: &Id, tenant: &Id) -> Result<u64>;
}

pub trait BookingLogRepo {
    // The audit trail is append-only: entries are never updated or deleted.
    fn log_booking_action(&self, log: &BookingLog) -> Result<()>;
    fn booking_logs(&self, booking: &Id) -> Result<Vec<BookingLog>>;
}
