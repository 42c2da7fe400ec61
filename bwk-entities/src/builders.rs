pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{booking_builder::*, event_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn tenant(mut self, tenant: Option<Id>) -> Self {
            self.user.tenant = tenant;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            Self::Build {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                    email: EmailAddress::new_unchecked("".into()),
                    password: Password::from_hash("".into()),
                    role: Role::default(),
                    tenant: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::*, time::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.event.title = title.into();
            self
        }
        pub fn capacity(mut self, capacity: u32) -> Self {
            self.event.capacity = capacity;
            self
        }
        pub fn date(mut self, date: Timestamp) -> Self {
            self.event.date = date;
            self
        }
        pub fn organizer(mut self, organizer: &str) -> Self {
            self.event.organizer = organizer.into();
            self
        }
        pub fn tenant(mut self, tenant: &str) -> Self {
            self.event.tenant = tenant.into();
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> Self::Build {
            Self::Build {
                event: Event {
                    id: Id::new(),
                    title: "".into(),
                    description: None,
                    date: Timestamp::now(),
                    capacity: 1,
                    organizer: Id::new(),
                    tenant: Id::new(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, id::*, time::*};

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn event(mut self, event: &str) -> Self {
            self.booking.event = event.into();
            self
        }
        pub fn user(mut self, user: &str) -> Self {
            self.booking.user = user.into();
            self
        }
        pub fn tenant(mut self, tenant: &str) -> Self {
            self.booking.tenant = tenant.into();
            self
        }
        pub fn status(mut self, status: BookingStatus) -> Self {
            self.booking.status = status;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.booking.created_at = created_at;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> Self::Build {
            Self::Build {
                booking: Booking {
                    id: Id::new(),
                    event: Id::new(),
                    user: Id::new(),
                    tenant: Id::new(),
                    status: BookingStatus::Confirmed,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
