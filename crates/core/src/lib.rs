//! Core library for flocktools
//!
//! This crate implements the **Functional Core** of the flocktools
//! application, following the Functional Core - Imperative Shell
//! architectural pattern.
//!
//! # Architecture Overview
//!
//! The flocktools project uses a two-crate architecture to enforce
//! separation of concerns:
//!
//! - **`flocktools_core`** (this crate): domain types and pure
//!   transformation functions, plus the small filesystem helpers for
//!   next-link and filter persistence
//! - **`flocktools`**: HTTP, pagination walking, CLI parsing and output
//!   rendering (the Imperative Shell)
//!
//! The shared plumbing lives at the top level:
//!
//! - [`envelope`]: the JSON:API `{data, meta, links}` wire shape and the
//!   [`envelope::Page`] type consumed by the pagination walker
//! - [`query`]: query-parameter construction for list endpoints
//! - [`pagination`]: next-link token cache
//! - [`filters`]: saved filter expressions
//!
//! Each remaining module maps to one Flock API module and contains the
//! attribute structs deserialized from the wire, the output domain types,
//! and the transformation functions between them. Transformations are pure
//! and tested against fixture data; no HTTP is involved anywhere in this
//! crate.

pub mod calendar;
pub mod checkins;
pub mod envelope;
pub mod filters;
pub mod giving;
pub mod groups;
pub mod pagination;
pub mod people;
pub mod publishing;
pub mod query;
pub mod registrations;
pub mod services;
pub mod webhooks;
