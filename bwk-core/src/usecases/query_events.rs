use super::prelude::*;

pub fn get_event<R: EventRepo>(repo: &R, id: &Id) -> Result<Event> {
    Ok(repo.get_event(id)?)
}

/// Events across all tenants, for browsing.
///
/// Attendees may book any event regardless of tenant; this listing is
/// deliberately not tenant-scoped.
pub fn all_events<R: EventRepo>(repo: &R, pagination: &Pagination) -> Result<Page<Event>> {
    Ok(repo.all_events_chronologically(pagination)?)
}

/// Tenant-scoped event listing for organizer and admin dashboards.
pub fn tenant_events<R: EventRepo>(
    repo: &R,
    tenant: &Id,
    pagination: &Pagination,
) -> Result<Page<Event>> {
    Ok(repo.tenant_events_chronologically(tenant, pagination)?)
}

#[cfg(test)]
mod tests {

    use super::{
        super::{tests::MockDb, *},
        *,
    };
    use bwk_entities::builders::*;

    fn event(db: &MockDb, id: &str, tenant: &str, date: i64) {
        db.events.borrow_mut().push(
            Event::build()
                .id(id)
                .tenant(tenant)
                .date(Timestamp::from_milliseconds(date))
                .finish(),
        );
    }

    #[test]
    fn browse_all_events_across_tenants() {
        let db = MockDb::default();
        event(&db, "e2", "t1", 200);
        event(&db, "e1", "t2", 100);

        let page = all_events(&db, &Pagination::default()).unwrap();

        assert_eq!(page.total, 2);
        let ids: Vec<_> = page.items.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["e1", "e2"]);
    }

    #[test]
    fn tenant_scoped_listing() {
        let db = MockDb::default();
        event(&db, "e1", "t1", 100);
        event(&db, "e2", "t2", 200);

        let page = tenant_events(&db, &"t1".into(), &Pagination::default()).unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "e1".into());
    }
}
