//! Shared test fixtures for the StarTrivia workspace.
//!
//! Provides canned SWAPI payloads and a mock people server:
//! - [`luke_skywalker`], [`c3po`], [`darth_vader`] payloads
//! - [`PeopleServer`], a `wiremock` server answering `/api/people/{id}`
//!
//! Each [`PeopleServer`] is independent; tests can run in parallel.

mod fixtures;

pub use fixtures::*;
