use std::str::FromStr;

use num_derive::{FromPrimitive, ToPrimitive};

use crate::{geo::MapPoint, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum EventState {
    Draft    = 0,
    Review   = 1,
    Approved = 2,
    Rejected = 3,
}

#[derive(Debug)]
pub struct EventStateParseError;

impl FromStr for EventState {
    type Err = EventStateParseError;
    fn from_str(s: &str) -> Result<EventState, Self::Err> {
        match &*s.to_lowercase() {
            "draft" => Ok(EventState::Draft),
            "review" => Ok(EventState::Review),
            "approved" => Ok(EventState::Approved),
            "rejected" => Ok(EventState::Rejected),
            _ => Err(EventStateParseError),
        }
    }
}

impl EventState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventState::Draft => "draft",
            EventState::Review => "review",
            EventState::Approved => "approved",
            EventState::Rejected => "rejected",
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id          : i64,
    pub nko_id      : i64,
    pub name        : String,
    pub description : Option<String>,
    pub address     : Option<String>,
    pub city_id     : i64,
    pub picture     : Option<String>,
    pub pos         : Option<MapPoint>,
    // Both start/finish time stamps are stored with millisecond precision.
    pub starts_at   : Option<Timestamp>,
    pub finish_at   : Option<Timestamp>,
    pub created_by  : i64,
    pub approved_by : Option<i64>,
    pub state       : EventState,
    pub meta        : Option<String>,
    pub created_at  : Timestamp,
}
