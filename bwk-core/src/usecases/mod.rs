mod authorize;
mod cancel_booking;
mod capacity;
mod create_booking;
mod create_event;
mod create_tenant;
mod error;
mod notifications;
mod notify;
mod query_bookings;
mod query_events;
mod register;
mod waitlist;


pub type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, cancel_booking::*, capacity::*, create_booking::*, create_event::*,
    create_tenant::*, error::Error, notifications::*, notify::*, query_bookings::*,
    query_events::*, register::*, waitlist::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
