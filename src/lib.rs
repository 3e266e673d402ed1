//! taskclient-core: the reusable pieces of the task-manager client.
//!
//! Two independent, stateless components:
//!
//! - [`decode`] reads the `sub` and `roles` claims out of a login token
//!   without verifying its signature, for role-based screen routing.
//! - [`classify`] turns a raw failure message into an [`ErrorCategory`]
//!   the presentation layer can show.
//!
//! Both are total: malformed input degrades to [`Claims::empty`] or
//! [`ErrorCategory::Generic`] instead of an error.

#![forbid(unsafe_code)]

pub mod core;
pub mod error;

pub use crate::core::claims::{Claims, Role, decode, try_decode};
pub use crate::core::classifier::{ErrorCategory, GENERIC_MESSAGE_LIMIT, classify};
pub use crate::core::signal::ErrorSignal;
pub use crate::error::TaskClientError;
