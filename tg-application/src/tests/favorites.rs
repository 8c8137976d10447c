use super::prelude::*;

#[test]
fn add_list_and_remove_favorites() {
    let fixture = BackendFixture::with_venues(&["a", "b", "c"]);
    let db = &fixture.db_connections;
    let user = ReporterId::from("u1");
    flows::add_favorite(db, &user, "c", Timestamp::from_secs(1)).unwrap();
    flows::add_favorite(db, &user, "a", Timestamp::from_secs(2)).unwrap();
    // Adding twice is fine
    flows::add_favorite(db, &user, "c", Timestamp::from_secs(3)).unwrap();
    let ids: Vec<_> = flows::favorite_venues(db, &user)
        .unwrap()
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![Id::from("c"), Id::from("a")]);
    assert!(flows::remove_favorite(db, &user, "c").unwrap());
    assert!(!flows::remove_favorite(db, &user, "c").unwrap());
    assert_eq!(flows::favorite_venues(db, &user).unwrap().len(), 1);
    assert!(flows::favorite_venues(db, &"u2".into()).unwrap().is_empty());
}

#[test]
fn favorite_of_unknown_venue() {
    let fixture = BackendFixture::with_venues(&["a"]);
    let err = flows::add_favorite(
        &fixture.db_connections,
        &"u1".into(),
        "x",
        Timestamp::now(),
    )
    .unwrap_err();
    assert!(err.is_not_found());
}
