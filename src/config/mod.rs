//! Configuration modules for the Rollcall API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables at startup:
//!
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`server`]: bind address for the HTTP listener

pub mod cors;
pub mod database;
pub mod server;
