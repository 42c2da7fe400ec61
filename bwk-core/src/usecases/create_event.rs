use super::prelude::*;
use crate::{usecases::authorize::authorize_role, util::validate};

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub date: Timestamp,
    pub capacity: u32,
    pub organizer: Id,
}

/// Creates an event within the organizer's tenant.
pub fn create_event<D>(db: &D, e: NewEvent) -> Result<Event>
where
    D: EventRepo + UserRepo,
{
    let NewEvent {
        title,
        description,
        date,
        capacity,
        organizer,
    } = e;
    if title.trim().is_empty() {
        return Err(Error::Title);
    }
    if !validate::is_valid_capacity(capacity) {
        return Err(Error::Capacity);
    }
    let user = db.get_user(&organizer)?;
    authorize_role(&user, Role::Organizer)?;
    let Some(tenant) = user.tenant else {
        // Events always belong to a tenant.
        return Err(Error::Forbidden);
    };
    let event = Event {
        id: Id::new(),
        title: title.trim().into(),
        description: description.filter(|d| !d.is_empty()),
        date,
        capacity,
        organizer: user.id,
        tenant,
        created_at: Timestamp::now(),
    };
    db.create_event(&event)?;
    Ok(event)
}
