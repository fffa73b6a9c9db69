//! Role assignment.
//!
//! Deals `undercover` to a fixed minority of the roster and binds every
//! player to the word of their role.

mod assignor;

pub use assignor::{assign_roles, undercover_count};
