//! # Person API
//!
//! Fetches a single Star Wars character from the SWAPI `people` resource and
//! decodes it into a [`Person`].
//!
//! ## Pipeline
//!
//! ```text
//! id ──► {base_url}{id} ──► GET ──► body ──► JSON object ──► Person
//!                                                   │
//!                       any failure: logged ───────►└──► None
//! ```
//!
//! Field extraction is lenient: a missing or wrong-typed field becomes `""` or
//! an empty list. Only an unreachable endpoint, a non-success status, or a
//! body that is empty, not JSON, or not a JSON object produces absence.
//!
//! [`PersonFetcher`] is the caller-facing entry point. [`SwapiClient`] exposes
//! the same request with error detail for callers that want it.

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod person;

pub use client::{PeopleSource, SwapiClient, create_swapi_client, person_url};
pub use config::PersonApiConfig;
pub use error::{PersonApiError, PersonApiResult};
pub use fetcher::{MAX_PERSON_ID, PersonFetcher, random_person_id};
pub use person::{Person, decode_person};
