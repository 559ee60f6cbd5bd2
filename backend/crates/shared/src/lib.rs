//! Shared Kernel
//!
//! Vocabulary used by both the `auth` and `portfolio` crates:
//! - [`error`]: `AppError`, the problem-details response every crate error
//!   ends up as
//! - [`id`]: typed UUID ids for content records
//!
//! Nothing here knows about admins, tokens or projects.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
