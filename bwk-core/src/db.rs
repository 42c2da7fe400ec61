use crate::repositories::*;

/// Aggregate access to all repositories of the data store.
pub trait Db:
    TenantRepo + UserRepo + EventRepo + BookingRepo + NotificationRepo + BookingLogRepo
{
}

impl<T> Db for T where
    T: TenantRepo + UserRepo + EventRepo + BookingRepo + NotificationRepo + BookingLogRepo
{
}
