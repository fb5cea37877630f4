use super::prelude::*;

fn organization_count(fixture: &BackendFixture) -> usize {
    let conn = fixture.db_connections.shared().unwrap();
    usecases::query_organizations(&conn, &fixture.token_decoder, Default::default())
        .unwrap()
        .len()
}

#[test]
fn create_organization_in_an_unknown_city_is_rejected() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let err = flows::create_organization(
        &fixture.db_connections,
        default_new_organization("Atlantis"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::CityNotFound))
    ));
    // The transaction rolled back, nothing was stored.
    assert_eq!(organization_count(&fixture), 0);
}

#[test]
fn create_organization_with_an_unknown_category_is_rejected() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    fixture.create_organization_category("Education");
    let mut new_org = default_new_organization("Moscow");
    new_org.categories = vec!["Education".into(), "Nonsense".into()];
    let err = flows::create_organization(&fixture.db_connections, new_org).unwrap_err();
    match err {
        AppError::Business(BError::Parameter(usecases::Error::CategoryNotFound(name))) => {
            assert_eq!(name, "Nonsense");
        }
        err => panic!("unexpected error: {err:?}"),
    }
    assert_eq!(organization_count(&fixture), 0);
}

#[test]
fn create_event_with_an_unknown_category_rolls_back() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("organizer");
    let org = flows::create_organization(
        &fixture.db_connections,
        default_new_organization("Moscow"),
    )
    .unwrap();
    let mut new_event = default_new_event("Moscow", org.organization.id);
    new_event.categories = vec!["Nonsense".into()];
    let err = flows::create_event(&fixture.db_connections, user.id, new_event).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::CategoryNotFound(_)))
    ));
    let conn = fixture.db_connections.shared().unwrap();
    let events = usecases::query_events(&conn, &fixture.token_decoder, Default::default()).unwrap();
    assert!(events.is_empty());
}

#[test]
fn create_event_with_half_a_coordinate_is_rejected() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("organizer");
    let org = flows::create_organization(
        &fixture.db_connections,
        default_new_organization("Moscow"),
    )
    .unwrap();
    let mut new_event = default_new_event("Moscow", org.organization.id);
    new_event.latitude = Some(55.75);
    let err = flows::create_event(&fixture.db_connections, user.id, new_event).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::Position))
    ));
}

#[test]
fn delete_organization_removes_category_links_and_favorites() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    fixture.create_organization_category("Education");
    let user = fixture.register_user("alice");
    let mut new_org = default_new_organization("Moscow");
    new_org.categories = vec!["Education".into()];
    let record = flows::create_organization(&fixture.db_connections, new_org).unwrap();
    let org_id = record.organization.id;
    flows::add_organization_favorite(&fixture.db_connections, user.id, org_id).unwrap();

    flows::delete_organization(&fixture.db_connections, org_id).unwrap();

    let conn = fixture.db_connections.shared().unwrap();
    let err = usecases::get_organization(&conn, org_id).unwrap_err();
    assert!(matches!(err, usecases::Error::OrganizationNotFound));
    assert!(conn.organization_category_names(org_id).unwrap().is_empty());
    let favorites =
        usecases::organization_favorites(&conn, user.id).unwrap();
    assert!(favorites.is_empty());
}

#[test]
fn delete_missing_organization_reports_not_found() {
    let fixture = BackendFixture::new();
    let err = flows::delete_organization(&fixture.db_connections, 4711).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::OrganizationNotFound))
    ));
}

#[test]
fn duplicate_favorite_is_rejected() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("alice");
    let record = flows::create_organization(
        &fixture.db_connections,
        default_new_organization("Moscow"),
    )
    .unwrap();
    let org_id = record.organization.id;
    flows::add_organization_favorite(&fixture.db_connections, user.id, org_id).unwrap();
    let err =
        flows::add_organization_favorite(&fixture.db_connections, user.id, org_id).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::AlreadyFavorite))
    ));
    let conn = fixture.db_connections.shared().unwrap();
    let favorites = usecases::organization_favorites(&conn, user.id).unwrap();
    assert_eq!(favorites.len(), 1);
}

#[test]
fn favorite_of_a_missing_entity_is_rejected() {
    let fixture = BackendFixture::new();
    let user = fixture.register_user("alice");
    let err = flows::add_organization_favorite(&fixture.db_connections, user.id, 4711).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::OrganizationNotFound))
    ));
}

#[test]
fn removing_a_missing_favorite_reports_not_found() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("alice");
    let record = flows::create_organization(
        &fixture.db_connections,
        default_new_organization("Moscow"),
    )
    .unwrap();
    let err = flows::remove_organization_favorite(
        &fixture.db_connections,
        user.id,
        record.organization.id,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::FavoriteNotFound))
    ));
}

#[test]
fn news_favorites_round_trip() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("alice");
    let record = flows::create_news(
        &fixture.db_connections,
        user.id,
        usecases::NewNews {
            title: "Shelter opened".into(),
            description: None,
            image: None,
            city: Some("Moscow".into()),
            meta: None,
        },
    )
    .unwrap();
    flows::add_news_favorite(&fixture.db_connections, user.id, record.news.id).unwrap();
    let conn = fixture.db_connections.shared().unwrap();
    let favorites = usecases::news_favorites(&conn, user.id).unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].city.as_deref(), Some("Moscow"));
    drop(conn);
    flows::remove_news_favorite(&fixture.db_connections, user.id, record.news.id).unwrap();
    let conn = fixture.db_connections.shared().unwrap();
    assert!(usecases::news_favorites(&conn, user.id).unwrap().is_empty());
}

#[test]
fn duplicate_city_name_is_rejected() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let err = flows::create_city(&fixture.db_connections, "Moscow").unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::CityExists))
    ));
    let conn = fixture.db_connections.shared().unwrap();
    assert_eq!(conn.all_cities().unwrap().len(), 1);
}

#[test]
fn duplicate_category_name_is_rejected_per_kind() {
    let fixture = BackendFixture::new();
    fixture.create_organization_category("Education");
    let err = flows::create_category(
        &fixture.db_connections,
        CategoryKind::Organization,
        "Education",
        None,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::CategoryExists))
    ));
    // The same name is still free in the other namespace.
    fixture.create_event_category("Education");
}

#[test]
fn duplicate_login_is_rejected() {
    let fixture = BackendFixture::new();
    fixture.register_user("alice");
    let err = flows::register_user(
        &fixture.db_connections,
        usecases::NewUser {
            full_name: "Second Alice".into(),
            login: "alice".into(),
            password: "secret123".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::LoginTaken))
    ));
}

#[test]
fn login_with_the_wrong_password_is_rejected() {
    let fixture = BackendFixture::new();
    fixture.register_user("alice");
    let conn = fixture.db_connections.shared().unwrap();
    let credentials = usecases::Credentials {
        login: "alice".into(),
        password: "wrong".into(),
    };
    let err = usecases::login(&conn, &credentials).unwrap_err();
    assert!(matches!(err, usecases::Error::Credentials));

    let credentials = usecases::Credentials {
        login: "alice".into(),
        password: "secret123".into(),
    };
    let user = usecases::login(&conn, &credentials).unwrap();
    assert_eq!(user.login, "alice");
}
