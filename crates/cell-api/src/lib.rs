//! HTTP JSON interface to the two-diode solver
//!
//! Stateless service: each request carries the full cell configuration,
//! gets solved and answered, and leaves nothing behind. Configuration
//! problems come back as 400 `CONFIG_ERROR`, convergence failures as
//! 422 `SOLVE_ERROR`, both in a `{ error: { code, message } }` envelope.

pub mod http;
pub mod schema;

pub use http::{run, HttpServerConfig};
