//! Client SDK for the bolão shared-lottery platform.
//!
//! Wraps the platform's REST API with typed service calls, a persistent
//! session store driven by the API's bearer credential, and the bounded
//! number picker used to compose a pool's games. All business rules (share
//! allocation, balance arithmetic, prize computation) live server-side; this
//! crate is the trusted way to talk to them.

pub mod config;
pub mod error;
pub mod http;
pub mod picker;
pub mod services;
pub mod session;
pub mod types;

pub use config::ClientConfig;
pub use error::{BolaoError, Result};
pub use http::ApiClient;
pub use picker::NumberPicker;
pub use session::{Session, SessionStore};
