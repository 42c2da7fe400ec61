use strum::{Display, EnumString};

use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub name       : String,
    pub email      : EmailAddress,
    pub password   : Password,
    pub role       : Role,
    // Users sign up without a tenant; an organizer that creates
    // a tenant gets it attached retroactively.
    pub tenant     : Option<Id>,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Attendee  = 0,
    Organizer = 1,
    Admin     = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::Attendee
    }
}
