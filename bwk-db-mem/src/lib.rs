//! In-memory implementation of the repository traits.
//!
//! All entities live in a single [`RwLock`]ed store, so a `&MemoryDb`
//! can be shared between threads. Nothing survives a process restart.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bwk_core::{entities::*, repositories::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default)]
struct State {
    tenants: Vec<Tenant>,
    users: Vec<User>,
    events: Vec<Event>,
    bookings: Vec<Booking>,
    notifications: Vec<Notification>,
    booking_logs: Vec<BookingLog>,
}

#[derive(Debug, Default)]
pub struct MemoryDb {
    state: RwLock<State>,
}

impl MemoryDb {
    // A poisoned lock only means another thread panicked while
    // holding it. The store itself is still consistent, every
    // write below is a single push or field update.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn paginate<T>(items: Vec<T>, pagination: &Pagination) -> Page<T> {
    let total = items.len() as u64;
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map_or(usize::MAX, |l| l as usize);
    let items = items.into_iter().skip(offset).take(limit).collect();
    Page { items, total }
}

impl TenantRepo for MemoryDb {
    fn create_tenant(&self, tenant: &Tenant) -> Result<()> {
        let mut state = self.write();
        if state.tenants.iter().any(|t| t.id == tenant.id) {
            return Err(Error::AlreadyExists);
        }
        state.tenants.push(tenant.clone());
        Ok(())
    }

    fn get_tenant(&self, id: &Id) -> Result<Tenant> {
        self.read()
            .tenants
            .iter()
            .find(|t| t.id == *id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn try_get_tenant_by_name(&self, name: &str) -> Result<Option<Tenant>> {
        Ok(self
            .read()
            .tenants
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    fn count_tenants(&self) -> Result<usize> {
        Ok(self.read().tenants.len())
    }
}

impl UserRepo for MemoryDb {
    fn create_user(&self, user: &User) -> Result<()> {
        let mut state = self.write();
        if state.users.iter().any(|u| u.id == user.id) {
            return Err(Error::AlreadyExists);
        }
        state.users.push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> Result<()> {
        let mut state = self.write();
        let stored = state
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(Error::NotFound)?;
        *stored = user.clone();
        Ok(())
    }

    fn get_user(&self, id: &Id) -> Result<User> {
        self.read()
            .users
            .iter()
            .find(|u| u.id == *id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>> {
        Ok(self
            .read()
            .users
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.read().users.len())
    }
}

impl EventRepo for MemoryDb {
    fn create_event(&self, event: &Event) -> Result<()> {
        let mut state = self.write();
        if state.events.iter().any(|e| e.id == event.id) {
            return Err(Error::AlreadyExists);
        }
        state.events.push(event.clone());
        Ok(())
    }

    fn get_event(&self, id: &Id) -> Result<Event> {
        self.read()
            .events
            .iter()
            .find(|e| e.id == *id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn all_events_chronologically(&self, pagination: &Pagination) -> Result<Page<Event>> {
        let mut events = self.read().events.clone();
        events.sort_by_key(|e| e.date);
        Ok(paginate(events, pagination))
    }

    fn tenant_events_chronologically(
        &self,
        tenant: &Id,
        pagination: &Pagination,
    ) -> Result<Page<Event>> {
        let mut events: Vec<_> = self
            .read()
            .events
            .iter()
            .filter(|e| e.tenant == *tenant)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.date);
        Ok(paginate(events, pagination))
    }

    fn count_events(&self) -> Result<usize> {
        Ok(self.read().events.len())
    }
}

impl BookingRepo for MemoryDb {
    fn create_booking(&self, booking: &Booking) -> Result<()> {
        let mut state = self.write();
        if state.bookings.iter().any(|b| b.id == booking.id) {
            return Err(Error::AlreadyExists);
        }
        state.bookings.push(booking.clone());
        Ok(())
    }

    fn update_booking(&self, booking: &Booking) -> Result<()> {
        let mut state = self.write();
        let stored = state
            .bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or(Error::NotFound)?;
        *stored = booking.clone();
        Ok(())
    }

    fn get_booking(&self, id: &Id) -> Result<Booking> {
        self.read()
            .bookings
            .iter()
            .find(|b| b.id == *id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn count_confirmed_bookings(&self, event: &Id, tenant: &Id) -> Result<u64> {
        Ok(self
            .read()
            .bookings
            .iter()
            .filter(|b| {
                b.event == *event && b.tenant == *tenant && b.status == BookingStatus::Confirmed
            })
            .count() as u64)
    }

    fn try_get_active_booking(&self, event: &Id, user: &Id) -> Result<Option<Booking>> {
        Ok(self
            .read()
            .bookings
            .iter()
            .find(|b| b.event == *event && b.user == *user && b.is_active())
            .cloned())
    }

    fn oldest_waitlisted_booking(&self, event: &Id, tenant: &Id) -> Result<Option<Booking>> {
        // Ties on the timestamp are broken by insertion order.
        Ok(self
            .read()
            .bookings
            .iter()
            .filter(|b| {
                b.event == *event && b.tenant == *tenant && b.status == BookingStatus::Waitlisted
            })
            .min_by_key(|b| b.created_at)
            .cloned())
    }

    fn user_bookings(
        &self,
        user: &Id,
        status: Option<BookingStatus>,
        pagination: &Pagination,
    ) -> Result<Page<Booking>> {
        let mut bookings: Vec<_> = self
            .read()
            .bookings
            .iter()
            .filter(|b| b.user == *user && status.map_or(true, |s| b.status == s))
            .cloned()
            .collect();
        bookings.sort_by_key(|b| std::cmp::Reverse(b.created_at));
        Ok(paginate(bookings, pagination))
    }
}

impl NotificationRepo for MemoryDb {
    fn create_notification(&self, notification: &Notification) -> Result<()> {
        let mut state = self.write();
        if state.notifications.iter().any(|n| n.id == notification.id) {
            return Err(Error::AlreadyExists);
        }
        state.notifications.push(notification.clone());
        Ok(())
    }

    fn update_notification(&self, notification: &Notification) -> Result<()> {
        let mut state = self.write();
        let stored = state
            .notifications
            .iter_mut()
            .find(|n| n.id == notification.id)
            .ok_or(Error::NotFound)?;
        *stored = notification.clone();
        Ok(())
    }

    fn get_notification(&self, id: &Id) -> Result<Notification> {
        self.read()
            .notifications
            .iter()
            .find(|n| n.id == *id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn user_notifications(
        &self,
        user: &Id,
        tenant: &Id,
        unread_only: bool,
        pagination: &Pagination,
    ) -> Result<Page<Notification>> {
        let mut notifications: Vec<_> = self
            .read()
            .notifications
            .iter()
            .filter(|n| n.user == *user && n.tenant == *tenant && (!unread_only || !n.read))
            .cloned()
            .collect();
        notifications.sort_by_key(|n| std::cmp::Reverse(n.created_at));
        Ok(paginate(notifications, pagination))
    }

    fn count_unread_notifications(&self, user: &Id, tenant: &Id) -> Result<u64> {
        Ok(self
            .read()
            .notifications
            .iter()
            .filter(|n| n.user == *user && n.tenant == *tenant && !n.read)
            .count() as u64)
    }
}

impl BookingLogRepo for MemoryDb {
    fn log_booking_action(&self, log: &BookingLog) -> Result<()> {
        self.write().booking_logs.push(log.clone());
        Ok(())
    }

    fn booking_logs(&self, booking: &Id) -> Result<Vec<BookingLog>> {
        Ok(self
            .read()
            .booking_logs
            .iter()
            .filter(|l| l.booking == *booking)
            .cloned()
            .collect())
    }
}
