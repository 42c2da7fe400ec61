use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid e-mail address")]
    EmailAddress,
    #[error("Invalid password")]
    Password,
    #[error("Invalid role")]
    Role,
    #[error("The name is invalid")]
    Name,
    #[error("The title is invalid")]
    Title,
    #[error("The capacity is invalid")]
    Capacity,
    #[error("The tenant name is invalid")]
    TenantName,
    #[error("A tenant with this name already exists")]
    TenantNameExists,
    #[error("The user already belongs to a tenant")]
    TenantExists,
    #[error("A user with this e-mail already exists")]
    EmailExists,
    #[error("There is already a booking for this event")]
    AlreadyBooked,
    #[error("The booking has already been canceled")]
    AlreadyCanceled,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<bwk_entities::password::ParseError> for Error {
    fn from(_: bwk_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<bwk_entities::email::EmailAddressParseError> for Error {
    fn from(_: bwk_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}
