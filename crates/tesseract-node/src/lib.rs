//! Tesseract Node - 4-D offline quantum demo server.
//!
//! A small HTTP service exposing a handful of demo endpoints backed by a
//! local statevector simulator, a mutable 4-D spacetime coordinate, and a
//! coordinate-keyed in-memory store.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tesseract_node::{AppState, NodeConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = NodeConfig::default();
//!     let bind = config.bind_address;
//!     let state = Arc::new(AppState::with_config(config));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(bind).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod drift;
pub mod dto;
pub mod error;
pub mod memory;
pub mod server;
pub mod spacetime;
pub mod state;

pub use dto::{
    EntangleResponse, GhzResponse, MoveParams, MoveResponse, SearchParams, SearchResponse,
    StatusResponse,
};
pub use error::ApiError;
pub use memory::{CellKey, HyperMemory};
pub use server::create_router;
pub use spacetime::{Position, SPEED_OF_LIGHT, Spacetime4D};
pub use state::{AppState, NodeConfig};
