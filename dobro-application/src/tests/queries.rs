use super::prelude::*;

#[test]
fn organizations_without_filters_are_returned_newest_first() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    for name in ["First", "Second", "Third"] {
        let mut new_org = default_new_organization("Moscow");
        new_org.name = name.into();
        flows::create_organization(&fixture.db_connections, new_org).unwrap();
    }

    let conn = fixture.db_connections.shared().unwrap();
    let records =
        usecases::query_organizations(&conn, &fixture.token_decoder, Default::default()).unwrap();
    let names: Vec<_> = records
        .iter()
        .map(|r| r.organization.name.as_str())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[test]
fn city_substring_filter_matches_partial_names() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    fixture.create_city("Kazan");
    fixture.create_organization_category("Education");
    let mut new_org = default_new_organization("Moscow");
    new_org.categories = vec!["Education".into()];
    flows::create_organization(&fixture.db_connections, new_org).unwrap();

    let conn = fixture.db_connections.shared().unwrap();
    let query = usecases::OrganizationQuery {
        city: Some("Mosc".into()),
        ..Default::default()
    };
    let records = usecases::query_organizations(&conn, &fixture.token_decoder, query).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].organization.name, "Helping Hands");
    assert_eq!(records[0].city, "Moscow");
    assert_eq!(records[0].categories, vec!["Education".to_string()]);

    let query = usecases::OrganizationQuery {
        city: Some("Kazan".into()),
        ..Default::default()
    };
    let records = usecases::query_organizations(&conn, &fixture.token_decoder, query).unwrap();
    assert!(records.is_empty());
}

#[test]
fn category_filter_displays_the_full_category_set() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    fixture.create_organization_category("Education");
    fixture.create_organization_category("Health");
    let mut new_org = default_new_organization("Moscow");
    new_org.categories = vec!["Education".into(), "Health".into()];
    flows::create_organization(&fixture.db_connections, new_org).unwrap();
    let mut other = default_new_organization("Moscow");
    other.name = "Unrelated".into();
    flows::create_organization(&fixture.db_connections, other).unwrap();

    let conn = fixture.db_connections.shared().unwrap();
    let query = usecases::OrganizationQuery {
        categories: Some(vec!["Education".into()]),
        ..Default::default()
    };
    let records = usecases::query_organizations(&conn, &fixture.token_decoder, query).unwrap();
    assert_eq!(records.len(), 1);
    // The displayed set is never restricted to the filter set.
    assert_eq!(
        records[0].categories,
        vec!["Education".to_string(), "Health".to_string()]
    );
}

#[test]
fn pattern_filter_matches_name_or_description_case_insensitively() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let mut first = default_new_organization("Moscow");
    first.name = "Animal Shelter".into();
    flows::create_organization(&fixture.db_connections, first).unwrap();
    let mut second = default_new_organization("Moscow");
    second.name = "Food Bank".into();
    second.description = Some("Shelter meals for the homeless".into());
    flows::create_organization(&fixture.db_connections, second).unwrap();
    let mut third = default_new_organization("Moscow");
    third.name = "Hospice".into();
    flows::create_organization(&fixture.db_connections, third).unwrap();

    let conn = fixture.db_connections.shared().unwrap();
    let query = usecases::OrganizationQuery {
        pattern: Some("shelter".into()),
        ..Default::default()
    };
    let records = usecases::query_organizations(&conn, &fixture.token_decoder, query).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn invalid_pattern_is_a_parameter_error() {
    let fixture = BackendFixture::new();
    let conn = fixture.db_connections.shared().unwrap();
    let query = usecases::OrganizationQuery {
        pattern: Some("he(lp".into()),
        ..Default::default()
    };
    let err = usecases::query_organizations(&conn, &fixture.token_decoder, query).unwrap_err();
    assert!(matches!(err, usecases::Error::Pattern));
}

#[test]
fn favorites_filter_with_a_valid_token() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("alice");
    let favorite = flows::create_organization(
        &fixture.db_connections,
        default_new_organization("Moscow"),
    )
    .unwrap();
    let mut other = default_new_organization("Moscow");
    other.name = "Unbookmarked".into();
    flows::create_organization(&fixture.db_connections, other).unwrap();
    flows::add_organization_favorite(&fixture.db_connections, user.id, favorite.organization.id)
        .unwrap();

    let conn = fixture.db_connections.shared().unwrap();
    let query = usecases::OrganizationQuery {
        favorites_only: true,
        token: Some(format!("user-{}", user.id)),
        ..Default::default()
    };
    let records = usecases::query_organizations(&conn, &fixture.token_decoder, query).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].organization.id, favorite.organization.id);
}

#[test]
fn favorites_filter_with_an_invalid_token_is_ignored() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("alice");
    let favorite = flows::create_organization(
        &fixture.db_connections,
        default_new_organization("Moscow"),
    )
    .unwrap();
    let mut other = default_new_organization("Moscow");
    other.name = "Unbookmarked".into();
    flows::create_organization(&fixture.db_connections, other).unwrap();
    flows::add_organization_favorite(&fixture.db_connections, user.id, favorite.organization.id)
        .unwrap();

    let conn = fixture.db_connections.shared().unwrap();
    let query = usecases::OrganizationQuery {
        favorites_only: true,
        token: Some("garbage".into()),
        ..Default::default()
    };
    // The constraint is silently dropped, the full set comes back.
    let records = usecases::query_organizations(&conn, &fixture.token_decoder, query).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn event_time_range_filter() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("organizer");
    let org = flows::create_organization(
        &fixture.db_connections,
        default_new_organization("Moscow"),
    )
    .unwrap();

    // 2024-01-01 and 2024-06-01
    let mut winter = default_new_event("Moscow", org.organization.id);
    winter.name = "Winter run".into();
    winter.starts_at = Some(1_704_067_200);
    flows::create_event(&fixture.db_connections, user.id, winter).unwrap();
    let mut summer = default_new_event("Moscow", org.organization.id);
    summer.name = "Summer run".into();
    summer.starts_at = Some(1_717_200_000);
    flows::create_event(&fixture.db_connections, user.id, summer).unwrap();

    let conn = fixture.db_connections.shared().unwrap();
    let query = usecases::EventQuery {
        // 2024-03-01
        starts_after: Some(Timestamp::from_seconds(1_709_251_200)),
        ..Default::default()
    };
    let records = usecases::query_events(&conn, &fixture.token_decoder, query).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event.name, "Summer run");
}

#[test]
fn event_filter_by_owning_organizations() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("organizer");
    let first = flows::create_organization(
        &fixture.db_connections,
        default_new_organization("Moscow"),
    )
    .unwrap();
    let mut other = default_new_organization("Moscow");
    other.name = "Other".into();
    let second = flows::create_organization(&fixture.db_connections, other).unwrap();
    flows::create_event(
        &fixture.db_connections,
        user.id,
        default_new_event("Moscow", first.organization.id),
    )
    .unwrap();
    flows::create_event(
        &fixture.db_connections,
        user.id,
        default_new_event("Moscow", second.organization.id),
    )
    .unwrap();

    let conn = fixture.db_connections.shared().unwrap();
    let query = usecases::EventQuery {
        organizations: Some(vec![first.organization.id]),
        ..Default::default()
    };
    let records = usecases::query_events(&conn, &fixture.token_decoder, query).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event.nko_id, first.organization.id);
    assert_eq!(records[0].organization_name, "Helping Hands");
}

#[test]
fn news_without_a_city_resolves_to_no_city_name() {
    let fixture = BackendFixture::new();
    fixture.create_city("Moscow");
    let user = fixture.register_user("editor");
    let record = flows::create_news(
        &fixture.db_connections,
        user.id,
        usecases::NewNews {
            title: "Portal launched".into(),
            description: None,
            image: None,
            city: None,
            meta: None,
        },
    )
    .unwrap();
    assert_eq!(record.city, None);

    let conn = fixture.db_connections.shared().unwrap();
    let records =
        usecases::query_news(&conn, &fixture.token_decoder, Default::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].city, None);
    assert_eq!(records[0].news.title, "Portal launched");
}
