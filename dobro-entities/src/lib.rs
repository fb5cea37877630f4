#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # dobro-entities
//!
//! Reusable, agnostic domain entities for the Dobrye Dela portal.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod category;
pub mod city;
pub mod event;
pub mod geo;
pub mod news;
pub mod organization;
pub mod password;
pub mod time;
pub mod user;
