//! JSON data structures of the portal's HTTP API.
//!
//! Responses are fully denormalized: entities carry their city and
//! category names instead of foreign keys, coordinates are split into
//! nullable `latitude`/`longitude` fields and timestamps are unix
//! timestamps in seconds.

use serde::{Deserialize, Serialize};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id          : i64,
    pub name        : String,
    pub description : Option<String>,
    pub logo        : Option<String>,
    pub address     : String,
    pub city        : String,
    pub latitude    : f64,
    pub longitude   : f64,
    pub meta        : Option<serde_json::Value>,
    pub created_at  : i64,
    pub categories  : Vec<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id          : i64,
    pub nko_id      : i64,
    pub nko_name    : String,
    pub name        : String,
    pub description : Option<String>,
    pub address     : Option<String>,
    pub city        : String,
    pub picture     : Option<String>,
    pub latitude    : Option<f64>,
    pub longitude   : Option<f64>,
    pub starts_at   : Option<i64>,
    pub finish_at   : Option<i64>,
    pub created_by  : i64,
    pub approved_by : Option<i64>,
    pub state       : String,
    pub meta        : Option<String>,
    pub created_at  : i64,
    pub categories  : Vec<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    pub id          : i64,
    pub title       : String,
    pub description : Option<String>,
    pub image       : Option<String>,
    pub city        : Option<String>,
    pub created_by  : i64,
    pub approved_by : Option<i64>,
    pub meta        : Option<serde_json::Value>,
    pub created_at  : i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub login: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub meta: Option<serde_json::Value>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub nko_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: String,
    pub picture: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub starts_at: Option<i64>,
    pub finish_at: Option<i64>,
    pub state: Option<String>,
    pub meta: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNews {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub city: Option<String>,
    pub meta: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCity {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub full_name: String,
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Liveness probe response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ping {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

/// Confirmation payload of delete and favorite operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
