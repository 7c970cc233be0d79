//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod asset;
pub mod balance;
pub mod chain;
pub mod swap;

pub use asset::*;
pub use balance::*;
pub use chain::*;
pub use swap::*;
