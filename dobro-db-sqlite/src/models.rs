#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Queryable)]
pub struct CityEntity {
    pub id: i64,
    pub name: String,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub full_name: String,
    pub login: String,
    pub password: String,
    pub role: i16,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub full_name: &'a str,
    pub login: &'a str,
    pub password: &'a str,
    pub role: i16,
}

#[derive(Queryable)]
pub struct CategoryEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Queryable)]
pub struct OrganizationEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub address: String,
    pub city_id: i64,
    pub lat: f64,
    pub lng: f64,
    pub meta: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = organizations)]
pub struct NewOrganization<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub logo: Option<&'a str>,
    pub address: &'a str,
    pub city_id: i64,
    pub lat: f64,
    pub lng: f64,
    pub meta: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct EventEntity {
    pub id: i64,
    pub nko_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city_id: i64,
    pub picture: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub starts_at: Option<i64>,
    pub finish_at: Option<i64>,
    pub created_by: i64,
    pub approved_by: Option<i64>,
    pub state: i16,
    pub meta: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = events)]
pub struct NewEvent<'a> {
    pub nko_id: i64,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub address: Option<&'a str>,
    pub city_id: i64,
    pub picture: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub starts_at: Option<i64>,
    pub finish_at: Option<i64>,
    pub created_by: i64,
    pub approved_by: Option<i64>,
    pub state: i16,
    pub meta: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct NewsEntity {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub city_id: Option<i64>,
    pub created_by: i64,
    pub approved_by: Option<i64>,
    pub meta: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = news)]
pub struct NewNews<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub city_id: Option<i64>,
    pub created_by: i64,
    pub approved_by: Option<i64>,
    pub meta: Option<&'a str>,
    pub created_at: i64,
}
