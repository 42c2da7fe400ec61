use super::prelude::*;

/// A user's notifications within their tenant, newest first.
pub fn notifications_by_user<R: NotificationRepo>(
    repo: &R,
    user: &User,
    unread_only: bool,
    pagination: &Pagination,
) -> Result<Page<Notification>> {
    let Some(tenant) = &user.tenant else {
        // Without a tenant there is nothing to list.
        return Ok(Page::empty());
    };
    Ok(repo.user_notifications(&user.id, tenant, unread_only, pagination)?)
}

pub fn count_unread_notifications<R: NotificationRepo>(repo: &R, user: &User) -> Result<u64> {
    let Some(tenant) = &user.tenant else {
        return Ok(0);
    };
    Ok(repo.count_unread_notifications(&user.id, tenant)?)
}

/// Marks a notification as read. Only the recipient may do this.
pub fn mark_notification_read<R: NotificationRepo>(
    repo: &R,
    actor: &User,
    id: &Id,
) -> Result<Notification> {
    let mut notification = repo.get_notification(id)?;
    if notification.user != actor.id || actor.tenant.as_ref() != Some(&notification.tenant) {
        return Err(Error::Forbidden);
    }
    if !notification.read {
        notification.read = true;
        repo.update_notification(&notification)?;
    }
    Ok(notification)
}
