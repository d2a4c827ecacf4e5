//! Common library for the users service
//!
//! This crate provides the storage plumbing shared by services: PostgreSQL
//! pool configuration, connectivity checks, the schema bootstrap, and the
//! database error type.

pub mod database;
pub mod error;
pub mod schema;
