//! Users service
//!
//! A small JSON API over the `users` table: `GET /` lists users ordered by
//! username and `POST /` creates one. Storage plumbing lives in the
//! `common` crate.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod response;
pub mod routes;
pub mod state;
