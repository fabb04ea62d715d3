//! # cmlist-core - Core Domain Types
//!
//! Foundation crate for the contact method list. Provides domain types,
//! error handling, logging setup and the contact method sort order.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ContactMethod`] - A single contact method record as returned by the backend
//! - [`ContactMethodId`] - Opaque identifier, unique within a user's list
//! - [`ContactMethodType`] - Channel kind (voice, SMS, email, push, webhook)
//! - [`UserId`] - Identifier of the user owning the list
//! - [`Breakpoint`] - Named viewport width class
//!
//! ### Sorting (`sort`)
//! - [`sort_contact_methods()`] - Deterministic, stable display order
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cmlist_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod sort;
pub mod types;

/// Prelude for common imports used throughout all contact method list crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use sort::sort_contact_methods;
pub use types::{Breakpoint, ContactMethod, ContactMethodId, ContactMethodType, UserId};
