use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewTenant {
    pub name: String,
    pub created_by: Id,
}

/// Creates a tenant and retroactively attaches it to the creating user.
///
/// Strictly limited to organizers (admins administrate an existing
/// tenant, they do not found new ones), and to one tenant per user.
pub fn create_tenant<D>(db: &D, t: NewTenant) -> Result<Tenant>
where
    D: TenantRepo + UserRepo,
{
    let NewTenant { name, created_by } = t;
    let name = name.trim().to_owned();
    if !validate::is_valid_tenant_name(&name) {
        return Err(Error::TenantName);
    }
    let mut user = db.get_user(&created_by)?;
    if user.role != Role::Organizer {
        return Err(Error::Forbidden);
    }
    if user.tenant.is_some() {
        return Err(Error::TenantExists);
    }
    if db.try_get_tenant_by_name(&name)?.is_some() {
        return Err(Error::TenantNameExists);
    }
    let tenant = Tenant {
        id: Id::new(),
        name,
        created_by: user.id.clone(),
        created_at: Timestamp::now(),
    };
    db.create_tenant(&tenant)?;
    user.tenant = Some(tenant.id.clone());
    db.update_user(&user)?;
    log::debug!("Created tenant {} for user {}", tenant.id, user.id);
    Ok(tenant)
}

#[cfg(test)]
mod tests {

    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use bwk_entities::builders::*;

    fn organizer(db: &MockDb, id: &str) -> User {
        let user = User::build().id(id).role(Role::Organizer).finish();
        db.users.borrow_mut().push(user.clone());
        user
    }

    fn new_tenant(name: &str, created_by: &str) -> NewTenant {
        NewTenant {
            name: name.into(),
            created_by: created_by.into(),
        }
    }

    #[test]
    fn create_tenant_and_attach_to_creator() {
        let db = MockDb::default();
        organizer(&db, "o");

        let tenant = create_tenant(&db, new_tenant("ACME Events", "o")).unwrap();

        assert_eq!(tenant.name, "ACME Events");
        assert_eq!(tenant.created_by, "o".into());
        assert_eq!(db.users.borrow()[0].tenant, Some(tenant.id));
    }

    #[test]
    fn trim_tenant_name() {
        let db = MockDb::default();
        organizer(&db, "o");
        let tenant = create_tenant(&db, new_tenant("  ACME  ", "o")).unwrap();
        assert_eq!(tenant.name, "ACME");
    }

    #[test]
    fn reject_short_names() {
        let db = MockDb::default();
        organizer(&db, "o");
        assert!(matches!(
            create_tenant(&db, new_tenant(" x ", "o")),
            Err(Error::TenantName)
        ));
    }

    #[test]
    fn reject_non_organizers() {
        let db = MockDb::default();
        db.users
            .borrow_mut()
            .push(User::build().id("a").role(Role::Attendee).finish());
        db.users
            .borrow_mut()
            .push(User::build().id("x").role(Role::Admin).finish());

        assert!(matches!(
            create_tenant(&db, new_tenant("ACME", "a")),
            Err(Error::Forbidden)
        ));
        // Admins are not organizers.
        assert!(matches!(
            create_tenant(&db, new_tenant("ACME", "x")),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn reject_second_tenant_per_user() {
        let db = MockDb::default();
        organizer(&db, "o");
        create_tenant(&db, new_tenant("First", "o")).unwrap();
        assert!(matches!(
            create_tenant(&db, new_tenant("Second", "o")),
            Err(Error::TenantExists)
        ));
    }

    #[test]
    fn reject_duplicate_tenant_name() {
        let db = MockDb::default();
        organizer(&db, "o1");
        organizer(&db, "o2");
        create_tenant(&db, new_tenant("ACME", "o1")).unwrap();
        assert!(matches!(
            create_tenant(&db, new_tenant("ACME", "o2")),
            Err(Error::TenantNameExists)
        ));
        assert_eq!(db.tenants.borrow().len(), 1);
    }

    #[test]
    fn reject_unknown_user() {
        let db = MockDb::default();
        assert!(create_tenant(&db, new_tenant("ACME", "nope")).is_err());
    }
}
