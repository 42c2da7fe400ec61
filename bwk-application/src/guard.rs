use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use super::*;

/// Advisory locks that serialize booking mutations per event.
///
/// The capacity check and the subsequent insert are separate repository
/// calls. Holding the event's lock across both keeps the number of
/// confirmed bookings at or below the event capacity under concurrent
/// requests.
#[derive(Debug, Default)]
pub struct EventLockPool {
    locks: Mutex<HashMap<(Id, Id), Arc<Mutex<()>>>>,
}

impl EventLockPool {
    /// The lock for one event of one tenant. Lock it for the duration
    /// of the mutation.
    pub fn event_lock(&self, tenant: &Id, event: &Id) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry((tenant.clone(), event.clone())).or_default())
    }
}
