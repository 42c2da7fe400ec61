use std::str::FromStr;

use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Signup. Users are created without a tenant; organizers attach one
/// later by creating it.
pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let NewUser {
        name,
        email,
        password,
        role,
    } = u;
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    if !validate::is_valid_email(&email) {
        return Err(Error::EmailAddress);
    }
    let email = email.trim().to_lowercase().parse::<EmailAddress>()?;
    let password = password.parse::<Password>()?;
    let role = Role::from_str(&role).map_err(|_| Error::Role)?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::EmailExists);
    }
    let new_user = User {
        id: Id::new(),
        name: name.trim().into(),
        email,
        password,
        role,
        tenant: None,
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(new_user)
}
