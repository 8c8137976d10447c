use super::*;
use tg_core::{entities::*, repositories::*};
use tg_entities::builders::*;

fn connections() -> Connections {
    let connections = Connections::init(":memory:", 1).unwrap();
    run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
    connections
}

fn seed(connections: &Connections, ids: &[&str]) {
    let db = connections.exclusive().unwrap();
    for id in ids {
        db.create_venue(&Venue::build().id(id).name(&format!("Bar {id}")).finish())
            .unwrap();
    }
}

#[test]
fn create_and_load_venues() {
    let connections = connections();
    seed(&connections, &["b", "a"]);
    let db = connections.shared().unwrap();
    assert_eq!(db.count_venues().unwrap(), 2);
    let venues = db.all_venues().unwrap();
    assert_eq!(venues[0].id, Id::from("b"));
    assert_eq!(venues[1].id, Id::from("a"));
    assert_eq!(db.get_venue("a").unwrap().name, "Bar a");
    assert!(matches!(db.get_venue("c"), Err(Error::NotFound)));
    assert!(db.try_get_venue("c").unwrap().is_none());
}

#[test]
fn reject_duplicate_venues() {
    let connections = connections();
    seed(&connections, &["a"]);
    let db = connections.exclusive().unwrap();
    let same_id = Venue::build().id("a").name("Other").finish();
    assert!(matches!(db.create_venue(&same_id), Err(Error::AlreadyExists)));
    let same_name = Venue::build().id("b").name("Bar a").finish();
    assert!(matches!(db.create_venue(&same_name), Err(Error::AlreadyExists)));
}

#[test]
fn update_venue_status() {
    let connections = connections();
    seed(&connections, &["a"]);
    let status = PublishedStatus {
        wait_minutes: 20,
        cover_amount: 15,
        report_count: 3,
        last_updated: Timestamp::from_millis(1_234_567),
    };
    {
        let db = connections.exclusive().unwrap();
        db.update_venue_status("a", &status).unwrap();
        assert!(matches!(
            db.update_venue_status("x", &status),
            Err(Error::NotFound)
        ));
    }
    let db = connections.shared().unwrap();
    assert_eq!(db.get_venue("a").unwrap().status, status);
}

#[test]
fn read_only_connections_reject_writes() {
    let connections = connections();
    let db = connections.shared().unwrap();
    assert!(db.create_venue(&Venue::build().finish()).is_err());
    assert_eq!(db.count_venues().unwrap(), 0);
}

#[test]
fn create_update_and_load_reports() {
    let connections = connections();
    seed(&connections, &["a"]);
    let db = connections.exclusive().unwrap();
    let t0 = Timestamp::from_secs(10_000);
    let mut report = Report::build()
        .id("r1")
        .venue("a")
        .reporter(Some("u1"))
        .wait_minutes(10)
        .cover_amount(5)
        .submitted_at(t0)
        .finish();
    db.create_report(&report).unwrap();
    assert_eq!(db.get_report("r1").unwrap(), report);

    report.wait_minutes = 30;
    report.submitted_at = t0 + Duration::minutes(10);
    db.update_report(&report).unwrap();
    assert_eq!(db.get_report("r1").unwrap(), report);
    assert_eq!(
        db.reports_of_venue_since("a", Timestamp::from_millis(i64::MIN))
            .unwrap(),
        vec![report]
    );
}

#[test]
fn report_of_unknown_venue() {
    let connections = connections();
    let db = connections.exclusive().unwrap();
    let report = Report::build().venue("x").finish();
    assert!(matches!(db.create_report(&report), Err(Error::NotFound)));
}

#[test]
fn latest_report_of_reporter() {
    let connections = connections();
    seed(&connections, &["a", "b"]);
    let db = connections.exclusive().unwrap();
    let t0 = Timestamp::from_secs(10_000);
    for (id, venue, reporter, at) in [
        ("r1", "a", Some("u1"), t0),
        ("r2", "a", Some("u1"), t0 + Duration::minutes(5)),
        ("r3", "a", Some("u2"), t0 + Duration::minutes(10)),
        ("r4", "b", Some("u1"), t0 + Duration::minutes(10)),
        ("r5", "a", None, t0 + Duration::minutes(10)),
    ] {
        db.create_report(
            &Report::build()
                .id(id)
                .venue(venue)
                .reporter(reporter)
                .submitted_at(at)
                .finish(),
        )
        .unwrap();
    }
    let latest = db
        .latest_report_of_reporter("a", "u1", t0 - Duration::hours(1))
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, Id::from("r2"));
    assert!(db
        .latest_report_of_reporter("a", "u1", t0 + Duration::minutes(5))
        .unwrap()
        .is_none());
    assert!(db
        .latest_report_of_reporter("a", "u3", t0 - Duration::hours(1))
        .unwrap()
        .is_none());
}

#[test]
fn reports_of_venue_since() {
    let connections = connections();
    seed(&connections, &["a", "b"]);
    let db = connections.exclusive().unwrap();
    let at = Timestamp::from_secs(1_000_000);
    for (venue, age) in [("a", 25), ("a", 24), ("a", 1), ("b", 1)] {
        db.create_report(
            &Report::build()
                .venue(venue)
                .submitted_at(at - Duration::hours(age))
                .finish(),
        )
        .unwrap();
    }
    let reports = db
        .reports_of_venue_since("a", at - Duration::hours(24))
        .unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].submitted_at, at - Duration::hours(1));
    assert!(reports[0].reporter_id.is_none());
}

#[test]
fn favorites() {
    let connections = connections();
    seed(&connections, &["a", "b"]);
    let db = connections.exclusive().unwrap();
    let favorite = |venue_id: &str, secs| Favorite {
        user: "u1".into(),
        venue_id: venue_id.into(),
        created_at: Timestamp::from_secs(secs),
    };
    db.create_favorite(&favorite("b", 1)).unwrap();
    db.create_favorite(&favorite("a", 2)).unwrap();
    assert!(matches!(
        db.create_favorite(&favorite("a", 3)),
        Err(Error::AlreadyExists)
    ));
    assert!(matches!(
        db.create_favorite(&favorite("x", 3)),
        Err(Error::NotFound)
    ));
    assert_eq!(
        db.favorite_venue_ids("u1").unwrap(),
        vec![Id::from("b"), Id::from("a")]
    );
    assert!(db.favorite_venue_ids("u2").unwrap().is_empty());
    assert!(db.delete_favorite("u1", "b").unwrap());
    assert!(!db.delete_favorite("u1", "b").unwrap());
    assert!(!db.delete_favorite("u1", "x").unwrap());
    assert_eq!(db.favorite_venue_ids("u1").unwrap(), vec![Id::from("a")]);
}

#[test]
fn rollback_failed_transaction() {
    let connections = connections();
    seed(&connections, &["a"]);
    let status = PublishedStatus {
        wait_minutes: 5,
        cover_amount: 5,
        report_count: 1,
        last_updated: Timestamp::from_secs(1),
    };
    let res: std::result::Result<(), uc::Error> =
        connections.exclusive().unwrap().transaction(|db| {
            db.update_venue_status("a", &status)?;
            Err(uc::Error::Conflict)
        });
    assert!(matches!(res, Err(uc::Error::Conflict)));
    let db = connections.shared().unwrap();
    assert!(db.get_venue("a").unwrap().status.is_neutral());
}

#[test]
fn pooled_connections_enforce_foreign_keys() {
    use diesel::{sql_types::Integer, RunQueryDsl as _};

    #[derive(diesel::QueryableByName)]
    struct Pragma {
        #[diesel(sql_type = Integer)]
        foreign_keys: i32,
    }

    let connections = connections();
    let db = connections.shared().unwrap();
    let pragma = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<Pragma>(&mut *db.conn.borrow_mut())
        .unwrap();
    assert_eq!(pragma.foreign_keys, 1);
}
