//! NEAR account id rules.
//!
//! - implicit: 64 hex characters (the hex of an ed25519 public key)
//! - named: dot-separated labels of `[a-z0-9_-]`, each starting and ending
//!   with `[a-z0-9]`, at least two labels

/// Length of an implicit account id.
pub const IMPLICIT_ACCOUNT_LEN: usize = 64;

/// Whether `account_id` is a 64-character hex implicit account (any case).
pub fn is_implicit_account(account_id: &str) -> bool {
    account_id.len() == IMPLICIT_ACCOUNT_LEN && account_id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Whether `account_id` is a human-readable named account such as `alice.near`.
pub fn is_named_account(account_id: &str) -> bool {
    let mut labels = 0usize;
    for label in account_id.split('.') {
        if !is_valid_label(label) {
            return false;
        }
        labels += 1;
    }
    labels >= 2
}

/// Whether `account_id` is either an implicit or a named account.
///
/// Empty input is simply invalid.
pub fn is_valid_account_id(account_id: &str) -> bool {
    is_implicit_account(account_id) || is_named_account(account_id)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
        return false;
    };

    is_edge_char(first)
        && is_edge_char(last)
        && bytes.iter().all(|&b| is_edge_char(b) || b == b'_' || b == b'-')
}

fn is_edge_char(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}
