//! Chain-specific data and address rules.

pub mod accounts;
pub mod near;
pub mod tokens;

pub use accounts::{classify_address, is_valid_address, validate_address, AccountKind, AddressValidator};
pub use tokens::{TokenRow, REGISTRY_VERSION, TOKENS};
