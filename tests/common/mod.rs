//! Common test utilities for refiner integration tests
//!
//! Fixture loading plus builders for synthetic payloads.

#![allow(dead_code)]

pub mod fixtures;
pub mod payloads;

pub use fixtures::{all_fixtures, fixtures_root, load_fixture, FixtureError};
pub use payloads::{contribution, envelope, random_contribution, zomato_order, zomato_secured, Generated};
