use std::str::FromStr;

use num_derive::{FromPrimitive, ToPrimitive};

use crate::password::Password;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id        : i64,
    pub full_name : String,
    pub login     : String,
    pub password  : Password,
    pub role      : Role,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    User      = 0,
    NpoOwner  = 1,
    Moderator = 2,
    Admin     = 3,
}

impl Default for Role {
    fn default() -> Role {
        Role::User
    }
}

#[derive(Debug)]
pub struct RoleParseError;

impl FromStr for Role {
    type Err = RoleParseError;
    fn from_str(s: &str) -> Result<Role, Self::Err> {
        // Wire names as used by the first portal release.
        match &*s.to_lowercase() {
            "user" => Ok(Role::User),
            "nko" => Ok(Role::NpoOwner),
            "moder" => Ok(Role::Moderator),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleParseError),
        }
    }
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::NpoOwner => "nko",
            Role::Moderator => "moder",
            Role::Admin => "admin",
        }
    }
}
