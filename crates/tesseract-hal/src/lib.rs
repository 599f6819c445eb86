//! Tesseract Backend Abstraction Layer
//!
//! This crate defines the seam between the Tesseract node and whatever
//! executes its circuits. The node ships with a local statevector
//! simulator behind this trait; a hardware adapter would implement the
//! same surface.
//!
//! # Core Components
//!
//! - [`Backend`] — the async execution trait (submit / status / result)
//! - [`JobId`], [`JobStatus`], [`Job`] — job lifecycle types
//! - [`Counts`], [`ExecutionResult`] — measurement outcome handling
//! - [`Capabilities`] — static backend description
//! - [`HalError`], [`HalResult`] — error taxonomy
//!
//! # Implementing a backend
//!
//! ```ignore
//! use tesseract_hal::{Backend, Capabilities, ExecutionResult, HalResult, JobId, JobStatus};
//! use tesseract_ir::Circuit;
//!
//! struct MyBackend {
//!     caps: Capabilities,
//! }
//!
//! #[async_trait::async_trait]
//! impl Backend for MyBackend {
//!     fn name(&self) -> &str {
//!         &self.caps.name
//!     }
//!
//!     fn capabilities(&self) -> &Capabilities {
//!         &self.caps
//!     }
//!
//!     // ... submit / status / result / cancel
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::Backend;
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
