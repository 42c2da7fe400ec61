use super::{
    error::{AppError, BError},
    prelude::*,
    *,
};
use bwk_db_mem::MemoryDb;
use bwk_entities::builders::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn seed_attendee(db: &MemoryDb, id: &str) {
    db.create_user(
        &User::build()
            .id(id)
            .role(Role::Attendee)
            .tenant(Some("t".into()))
            .finish(),
    )
    .unwrap();
}

fn seed_event(db: &MemoryDb, id: &str, capacity: u32) {
    db.create_event(
        &Event::build()
            .id(id)
            .tenant("t")
            .title("Rust Meetup")
            .capacity(capacity)
            .finish(),
    )
    .unwrap();
}

fn attendee(id: &str) -> User {
    User::build()
        .id(id)
        .role(Role::Attendee)
        .tenant(Some("t".into()))
        .finish()
}

fn book(db: &MemoryDb, locks: &EventLockPool, user: &str) -> Booking {
    book_event(
        db,
        locks,
        usecases::NewBooking {
            event: "e".into(),
            user: user.into(),
        },
    )
    .unwrap()
}

#[test]
fn booking_lifecycle_with_waitlist_promotion() {
    init_logger();
    let db = MemoryDb::default();
    let locks = EventLockPool::default();
    seed_event(&db, "e", 2);
    for id in ["a", "b", "c", "d"] {
        seed_attendee(&db, id);
    }

    let a = book(&db, &locks, "a");
    let b = book(&db, &locks, "b");
    let c = book(&db, &locks, "c");
    let d = book(&db, &locks, "d");
    assert_eq!(a.status, BookingStatus::Confirmed);
    assert_eq!(b.status, BookingStatus::Confirmed);
    assert_eq!(c.status, BookingStatus::Waitlisted);
    assert_eq!(d.status, BookingStatus::Waitlisted);

    // Every request notified its user and left an audit entry.
    for id in ["a", "b", "c", "d"] {
        assert_eq!(
            db.count_unread_notifications(&id.into(), &"t".into())
                .unwrap(),
            1
        );
    }
    assert_eq!(db.booking_logs(&a.id).unwrap().len(), 1);

    let canceled = cancel_booking(&db, &locks, &attendee("a"), &a.id).unwrap();
    assert_eq!(canceled.status, BookingStatus::Canceled);

    // The freed slot goes to the oldest waitlisted booking.
    assert_eq!(
        db.get_booking(&c.id).unwrap().status,
        BookingStatus::Confirmed
    );
    assert_eq!(
        db.get_booking(&d.id).unwrap().status,
        BookingStatus::Waitlisted
    );
    assert_eq!(
        db.count_confirmed_bookings(&"e".into(), &"t".into())
            .unwrap(),
        2
    );

    let promotion = db
        .user_notifications(&"c".into(), &"t".into(), false, &Pagination::default())
        .unwrap();
    assert_eq!(promotion.total, 2);
    let kinds: Vec<_> = promotion.items.iter().map(|n| n.kind).collect();
    assert!(kinds.contains(&NotificationType::WaitlistPromoted));
    assert!(kinds.contains(&NotificationType::Waitlisted));

    let logs = db.booking_logs(&a.id).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].action, LogAction::CancelConfirmed);
    let logs = db.booking_logs(&c.id).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].action, LogAction::PromoteFromWaitlist);
}

#[test]
fn canceling_a_waitlisted_booking_promotes_nobody() {
    init_logger();
    let db = MemoryDb::default();
    let locks = EventLockPool::default();
    seed_event(&db, "e", 1);
    for id in ["a", "b", "c"] {
        seed_attendee(&db, id);
    }

    book(&db, &locks, "a");
    let b = book(&db, &locks, "b");
    let c = book(&db, &locks, "c");
    assert_eq!(b.status, BookingStatus::Waitlisted);

    cancel_booking(&db, &locks, &attendee("b"), &b.id).unwrap();

    // No slot was freed, c stays on the waitlist.
    assert_eq!(
        db.get_booking(&c.id).unwrap().status,
        BookingStatus::Waitlisted
    );
}

#[test]
fn canceling_twice_fails_without_side_effects() {
    init_logger();
    let db = MemoryDb::default();
    let locks = EventLockPool::default();
    seed_event(&db, "e", 1);
    seed_attendee(&db, "a");

    let a = book(&db, &locks, "a");
    cancel_booking(&db, &locks, &attendee("a"), &a.id).unwrap();
    let notifications_before = db
        .user_notifications(&"a".into(), &"t".into(), false, &Pagination::default())
        .unwrap()
        .total;
    let logs_before = db.booking_logs(&a.id).unwrap().len();

    let result = cancel_booking(&db, &locks, &attendee("a"), &a.id);

    assert!(matches!(
        result,
        Err(AppError::Business(BError::Parameter(
            usecases::Error::AlreadyCanceled
        )))
    ));
    let notifications_after = db
        .user_notifications(&"a".into(), &"t".into(), false, &Pagination::default())
        .unwrap()
        .total;
    assert_eq!(notifications_before, notifications_after);
    assert_eq!(db.booking_logs(&a.id).unwrap().len(), logs_before);
}

#[test]
fn concurrent_bookings_never_exceed_capacity() {
    init_logger();
    let db = MemoryDb::default();
    let locks = EventLockPool::default();
    seed_event(&db, "e", 3);
    let users: Vec<String> = (0..8).map(|i| format!("u{i}")).collect();
    for user in &users {
        seed_attendee(&db, user);
    }

    let db = &db;
    let locks = &locks;
    std::thread::scope(|scope| {
        for user in &users {
            scope.spawn(move || book(db, locks, user));
        }
    });

    assert_eq!(
        db.count_confirmed_bookings(&"e".into(), &"t".into())
            .unwrap(),
        3
    );
    let waitlisted = users
        .iter()
        .filter(|user| {
            db.try_get_active_booking(&"e".into(), &user.as_str().into())
                .unwrap()
                .unwrap()
                .status
                == BookingStatus::Waitlisted
        })
        .count();
    assert_eq!(waitlisted, 5);
}

#[test]
fn concurrent_cancellations_fill_each_freed_slot_once() {
    init_logger();
    let db = MemoryDb::default();
    let locks = EventLockPool::default();
    seed_event(&db, "e", 2);
    for id in ["a", "b", "c", "d"] {
        seed_attendee(&db, id);
    }

    let a = book(&db, &locks, "a");
    let b = book(&db, &locks, "b");
    let c = book(&db, &locks, "c");
    let d = book(&db, &locks, "d");
    assert_eq!(c.status, BookingStatus::Waitlisted);
    assert_eq!(d.status, BookingStatus::Waitlisted);

    let db = &db;
    let locks = &locks;
    std::thread::scope(|scope| {
        for (owner, booking) in [("a", &a), ("b", &b)] {
            scope.spawn(move || cancel_booking(db, locks, &attendee(owner), &booking.id).unwrap());
        }
    });

    // Both freed slots were handed to the waitlist, exactly once each.
    assert_eq!(
        db.get_booking(&c.id).unwrap().status,
        BookingStatus::Confirmed
    );
    assert_eq!(
        db.get_booking(&d.id).unwrap().status,
        BookingStatus::Confirmed
    );
    assert_eq!(
        db.count_confirmed_bookings(&"e".into(), &"t".into())
            .unwrap(),
        2
    );
}
