//! Tractus Prelude — convenient imports for common usage.
//!
//! ```rust
//! use tractus::prelude::*;
//! ```

pub use crate::run_cascade;

pub use tractus_runtime::prelude::*;
