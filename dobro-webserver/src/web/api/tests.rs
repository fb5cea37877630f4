use super::*;

pub mod prelude {
    use crate::web::{self, api, sqlite};

    pub use crate::web::tests::prelude::*;
    pub use dobro_application::prelude as flows;
    pub use dobro_core::entities::CategoryKind;

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn bearer(token: &str) -> Header<'static> {
        Header::new("Authorization", format!("Bearer {token}"))
    }
}

use self::prelude::*;

fn register_and_login(client: &Client, login: &str) -> json::TokenPair {
    let res = client
        .post("/auth/register")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"full_name":"Test user {login}","login":"{login}","password":"secret123"}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let res = client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"login":"{login}","password":"secret123"}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

fn create_organization(client: &Client, name: &str, city: &str, categories: &[&str]) -> i64 {
    let categories = categories
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(",");
    let res = client
        .post("/nko")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"name":"{name}","address":"Tverskaya 1","city":"{city}","latitude":55.75,"longitude":37.61,"categories":[{categories}]}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let org: json::Organization = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    org.id
}

#[test]
fn ping() {
    let (client, _db) = setup();
    let res = client.get("/ping").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let pong: json::Ping = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(pong.status, "ok");
    assert_eq!(pong.message, "pong");
    assert!(!pong.timestamp.is_empty());
}

#[test]
fn query_organizations_by_city_substring() {
    let (client, db) = setup();
    flows::create_city(&db, "Moscow").unwrap();
    flows::create_city(&db, "Kazan").unwrap();
    flows::create_category(&db, CategoryKind::Organization, "Education", None).unwrap();
    create_organization(&client, "Helping Hands", "Moscow", &["Education"]);

    let res = client.get("/nko?city=Mosc").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let orgs: Vec<json::Organization> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].name, "Helping Hands");
    assert_eq!(orgs[0].city, "Moscow");
    assert_eq!(orgs[0].categories, vec!["Education".to_string()]);

    let res = client.get("/nko?city=Kazan").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let orgs: Vec<json::Organization> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(orgs.is_empty());
}

#[test]
fn create_organization_in_an_unknown_city() {
    let (client, _db) = setup();
    let res = client
        .post("/nko")
        .header(ContentType::JSON)
        .body(r#"{"name":"Helping Hands","address":"Tverskaya 1","city":"Atlantis","latitude":55.75,"longitude":37.61}"#)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    test_json(&res);
}

#[test]
fn query_with_an_invalid_regex() {
    let (client, _db) = setup();
    let res = client.get("/nko?regex=he(lp").dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(err.http_status, 400);
}

#[test]
fn delete_organization() {
    let (client, db) = setup();
    flows::create_city(&db, "Moscow").unwrap();
    let id = create_organization(&client, "Helping Hands", "Moscow", &[]);

    let res = client.delete(format!("/nko/{id}")).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let msg: json::ResultMessage = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(msg.message.contains("deleted"));

    let res = client.get(format!("/nko/{id}")).dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn register_login_and_fetch_the_current_user() {
    let (client, _db) = setup();
    let tokens = register_and_login(&client, "alice");

    // Without a token the profile is off limits.
    let res = client.get("/users/me").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .get("/users/me")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let user: json::User = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(user.login, "alice");
    assert_eq!(user.role, "user");
}

#[test]
fn login_with_invalid_credentials() {
    let (client, _db) = setup();
    register_and_login(&client, "alice");
    let res = client
        .post("/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"login":"alice","password":"wrong"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn register_with_a_taken_login() {
    let (client, _db) = setup();
    register_and_login(&client, "alice");
    let res = client
        .post("/auth/register")
        .header(ContentType::JSON)
        .body(r#"{"full_name":"Second Alice","login":"alice","password":"secret123"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn refresh_the_token_pair() {
    let (client, _db) = setup();
    let tokens = register_and_login(&client, "alice");

    // An access token must not pass as a refresh token.
    let res = client
        .post("/auth/refresh")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"refresh_token":"{}"}}"#,
            tokens.access_token
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .post("/auth/refresh")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"refresh_token":"{}"}}"#,
            tokens.refresh_token
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let fresh: json::TokenPair = serde_json::from_str(&res.into_string().unwrap()).unwrap();

    let res = client
        .get("/users/me")
        .header(bearer(&fresh.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
}

#[test]
fn organization_favorites_over_http() {
    let (client, db) = setup();
    flows::create_city(&db, "Moscow").unwrap();
    let id = create_organization(&client, "Helping Hands", "Moscow", &[]);
    create_organization(&client, "Unbookmarked", "Moscow", &[]);
    let tokens = register_and_login(&client, "alice");

    // Favorite mutations require authentication.
    let res = client.post(format!("/nko/{id}/favorite")).dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .post(format!("/nko/{id}/favorite"))
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    // Doubled favorites are rejected.
    let res = client
        .post(format!("/nko/{id}/favorite"))
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    let res = client
        .get("/nko/favorites")
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let orgs: Vec<json::Organization> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].id, id);

    // The favorites filter of the resolver sees the same set.
    let res = client
        .get(format!(
            "/nko?favorite=true&jwt_token={}",
            tokens.access_token
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let orgs: Vec<json::Organization> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(orgs.len(), 1);

    // With a bogus token the constraint is dropped silently.
    let res = client.get("/nko?favorite=true&jwt_token=bogus").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let orgs: Vec<json::Organization> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(orgs.len(), 2);

    let res = client
        .delete(format!("/nko/{id}/favorite"))
        .header(bearer(&tokens.access_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client
        .get("/nko/favorites")
        .header(bearer(&tokens.access_token))
        .dispatch();
    let orgs: Vec<json::Organization> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(orgs.is_empty());
}

#[test]
fn create_and_filter_events() {
    let (client, db) = setup();
    flows::create_city(&db, "Moscow").unwrap();
    let nko_id = create_organization(&client, "Helping Hands", "Moscow", &[]);
    let tokens = register_and_login(&client, "organizer");

    // Event creation is tied to the authenticated account.
    let res = client
        .post("/event")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"nko_id":{nko_id},"name":"Winter run","city":"Moscow","starts_at":1704067200}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .post("/event")
        .header(ContentType::JSON)
        .header(bearer(&tokens.access_token))
        .body(format!(
            r#"{{"nko_id":{nko_id},"name":"Winter run","city":"Moscow","starts_at":1704067200}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let event: json::Event = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(event.nko_name, "Helping Hands");
    assert_eq!(event.state, "draft");
    assert_eq!(event.starts_at, Some(1_704_067_200));

    let res = client
        .post("/event")
        .header(ContentType::JSON)
        .header(bearer(&tokens.access_token))
        .body(format!(
            r#"{{"nko_id":{nko_id},"name":"Summer run","city":"Moscow","starts_at":1717200000}}"#
        ))
        .dispatch();
    assert_eq!(res.status(), Status::Created);

    // 2024-03-01 cuts off the winter event.
    let res = client.get("/event?time_from=1709251200").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let events: Vec<json::Event> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Summer run");

    let res = client.get(format!("/event?nko_id={nko_id}")).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let events: Vec<json::Event> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(events.len(), 2);

    // Bounds far outside any plausible date must not wrap around.
    let res = client.get(format!("/event?time_from={}", i64::MAX)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let events: Vec<json::Event> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(events.is_empty());

    let res = client.get(format!("/event?time_to={}", i64::MAX)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let events: Vec<json::Event> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(events.len(), 2);
}

#[test]
fn news_without_a_city_serializes_a_null_city() {
    let (client, _db) = setup();
    let tokens = register_and_login(&client, "editor");
    let res = client
        .post("/news")
        .header(ContentType::JSON)
        .header(bearer(&tokens.access_token))
        .body(r#"{"title":"Portal launched"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);

    let res = client.get("/news").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains(r#""city":null"#));
    let news: Vec<json::News> = serde_json::from_str(&body_str).unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].city, None);
}

#[test]
fn cities_round_trip() {
    let (client, _db) = setup();
    let res = client
        .post("/city")
        .header(ContentType::JSON)
        .body(r#"{"name":"Moscow"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let city: json::City = serde_json::from_str(&res.into_string().unwrap()).unwrap();

    // Duplicate names are rejected.
    let res = client
        .post("/city")
        .header(ContentType::JSON)
        .body(r#"{"name":"Moscow"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    // Lookup by id and by name.
    let res = client.get(format!("/city/{}", city.id)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.get("/city/Moscow").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let by_name: json::City = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(by_name.id, city.id);

    let res = client.delete(format!("/city/{}", city.id)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.get(format!("/city/{}", city.id)).dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn category_namespaces_are_separate() {
    let (client, _db) = setup();
    let res = client
        .post("/category/nko")
        .header(ContentType::JSON)
        .body(r#"{"name":"Education"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);

    // The same name is still free in the event namespace.
    let res = client
        .post("/category/event")
        .header(ContentType::JSON)
        .body(r#"{"name":"Education"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);

    let res = client
        .post("/category/nko")
        .header(ContentType::JSON)
        .body(r#"{"name":"Education"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    let res = client.get("/category/nko").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let categories: Vec<json::Category> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Education");
}
