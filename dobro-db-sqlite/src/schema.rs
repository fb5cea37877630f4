///////////////////////////////////////////////////////////////////////
// Cities & users
///////////////////////////////////////////////////////////////////////

table! {
    cities (id) {
        id -> BigInt,
        name -> Text,
    }
}

table! {
    users (id) {
        id -> BigInt,
        full_name -> Text,
        login -> Text,
        password -> Text,
        role -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Organizations
///////////////////////////////////////////////////////////////////////

table! {
    organizations (id) {
        id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        logo -> Nullable<Text>,
        address -> Text,
        city_id -> BigInt,
        lat -> Double,
        lng -> Double,
        meta -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    organization_categories (id) {
        id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
    }
}

table! {
    organization_category_links (org_id, category_id) {
        org_id -> BigInt,
        category_id -> BigInt,
    }
}

table! {
    favorite_organizations (user_id, org_id) {
        user_id -> BigInt,
        org_id -> BigInt,
    }
}

joinable!(organizations -> cities (city_id));
joinable!(organization_category_links -> organizations (org_id));
joinable!(organization_category_links -> organization_categories (category_id));
joinable!(favorite_organizations -> organizations (org_id));
joinable!(favorite_organizations -> users (user_id));

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    events (id) {
        id -> BigInt,
        nko_id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        address -> Nullable<Text>,
        city_id -> BigInt,
        picture -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        starts_at -> Nullable<BigInt>,
        finish_at -> Nullable<BigInt>,
        created_by -> BigInt,
        approved_by -> Nullable<BigInt>,
        state -> SmallInt,
        meta -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    event_categories (id) {
        id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
    }
}

table! {
    event_category_links (event_id, category_id) {
        event_id -> BigInt,
        category_id -> BigInt,
    }
}

table! {
    favorite_events (user_id, event_id) {
        user_id -> BigInt,
        event_id -> BigInt,
    }
}

joinable!(events -> organizations (nko_id));
joinable!(events -> cities (city_id));
joinable!(event_category_links -> events (event_id));
joinable!(event_category_links -> event_categories (category_id));
joinable!(favorite_events -> events (event_id));
joinable!(favorite_events -> users (user_id));

///////////////////////////////////////////////////////////////////////
// News
///////////////////////////////////////////////////////////////////////

table! {
    news (id) {
        id -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        image -> Nullable<Text>,
        city_id -> Nullable<BigInt>,
        created_by -> BigInt,
        approved_by -> Nullable<BigInt>,
        meta -> Nullable<Text>,
        created_at -> BigInt,
    }
}

table! {
    favorite_news (user_id, news_id) {
        user_id -> BigInt,
        news_id -> BigInt,
    }
}

joinable!(news -> cities (city_id));
joinable!(favorite_news -> news (news_id));
joinable!(favorite_news -> users (user_id));

allow_tables_to_appear_in_same_query!(
    cities,
    users,
    organizations,
    organization_categories,
    organization_category_links,
    favorite_organizations,
    events,
    event_categories,
    event_category_links,
    favorite_events,
    news,
    favorite_news,
);
