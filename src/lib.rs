//! Backstop: a minimal backend that proves it can reach its dependencies.
//!
//! Exposes two endpoints: a static acknowledgment at `/` and a health check
//! at `/health` that queries Postgres and pings Redis, reporting both in one
//! aggregated JSON response.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod probe;
pub mod routes;
pub mod state;
