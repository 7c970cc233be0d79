//! RLP helpers on top of `alloy-rlp`.
//!
//! Scalars, byte strings and addresses use the `Encodable` impls that ship
//! with alloy's primitives: integers are minimal big-endian and zero is the
//! empty string (`0x80`). This module adds list assembly from heterogeneous
//! fields and a structural header check for encoded payloads.

use alloy::primitives::Address;
use alloy_rlp::{Encodable, Header, PayloadView, EMPTY_STRING_CODE};
use serde::Serialize;

use crate::error::{AppError, Result};

/// Highest first byte that marks an EIP-2718 typed envelope.
const MAX_TYPE_BYTE: u8 = 0x7f;

// ============================================================================
// Encoding
// ============================================================================

/// Accumulates list items, then prefixes the list header.
#[derive(Debug, Default)]
pub struct ListEncoder {
    payload: Vec<u8>,
}

impl ListEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one RLP item.
    pub fn push<T: Encodable + ?Sized>(&mut self, item: &T) -> &mut Self {
        item.encode(&mut self.payload);
        self
    }

    /// Append an already-encoded item.
    pub fn push_raw(&mut self, encoded: &[u8]) -> &mut Self {
        self.payload.extend_from_slice(encoded);
        self
    }

    /// Append an optional address; `None` is the empty string.
    pub fn push_optional_address(&mut self, address: Option<&Address>) -> &mut Self {
        match address {
            Some(address) => self.push(address),
            None => {
                self.payload.push(EMPTY_STRING_CODE);
                self
            }
        }
    }

    /// Write `prefix` (if any), the list header and the payload into a buffer.
    pub fn finish(&self, prefix: Option<u8>) -> Vec<u8> {
        let header = Header { list: true, payload_length: self.payload.len() };
        let mut out = Vec::with_capacity(1 + header.length() + self.payload.len());
        if let Some(prefix) = prefix {
            out.push(prefix);
        }
        header.encode(&mut out);
        out.extend_from_slice(&self.payload);
        out
    }
}

// ============================================================================
// Structural decoding
// ============================================================================

/// Shape of the outermost list in an encoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListHeader {
    /// Envelope type byte, if the payload is typed.
    pub tx_type: Option<u8>,
    /// Length of the list payload in bytes.
    pub payload_length: usize,
    /// Number of top-level items in the list.
    pub item_count: usize,
}

/// Read the first list header of `data`, skipping a typed-envelope byte.
///
/// # Errors
/// [`AppError::Encoding`] if `data` is empty, is not a list, is truncated or
/// has trailing bytes after the list.
pub fn decode_list_header(data: &[u8]) -> Result<ListHeader> {
    let first = *data.first().ok_or_else(|| AppError::Encoding("Empty payload".to_string()))?;
    let (tx_type, mut buf) = if first <= MAX_TYPE_BYTE { (Some(first), &data[1..]) } else { (None, data) };

    let view = Header::decode_raw(&mut buf)?;
    if !buf.is_empty() {
        return Err(AppError::Encoding(format!("{} trailing bytes after list", buf.len())));
    }

    match view {
        PayloadView::List(items) => Ok(ListHeader {
            tx_type,
            payload_length: items.iter().map(|item| item.len()).sum(),
            item_count: items.len(),
        }),
        PayloadView::String(_) => Err(AppError::Encoding("Expected list, found string".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, Bytes, U256};

    #[test]
    fn test_scalar_zero_is_empty_string() {
        let mut list = ListEncoder::new();
        list.push(&0u64).push(&U256::ZERO);
        assert_eq!(list.finish(None), vec![0xc2, 0x80, 0x80]);
    }

    #[test]
    fn test_single_byte_encodes_as_itself() {
        let mut list = ListEncoder::new();
        list.push(&0x7fu64).push(&0x80u64);
        assert_eq!(list.finish(None), vec![0xc3, 0x7f, 0x81, 0x80]);
    }

    #[test]
    fn test_optional_address() {
        let to = address!("3535353535353535353535353535353535353535");
        let mut list = ListEncoder::new();
        list.push_optional_address(Some(&to)).push_optional_address(None);

        let encoded = list.finish(None);
        assert_eq!(encoded[0], 0xc0 + 22);
        assert_eq!(encoded[1], 0x94);
        assert_eq!(encoded[22], 0x80);
    }

    #[test]
    fn test_long_list_header() {
        let mut list = ListEncoder::new();
        list.push(&Bytes::from(vec![0xaa; 60]));

        let encoded = list.finish(None);
        // 60-byte string: 0xb8 0x3c + 60 bytes = 62-byte payload
        assert_eq!(&encoded[..4], &[0xf8, 62, 0xb8, 60]);
        assert_eq!(encoded.len(), 64);
    }

    #[test]
    fn test_finish_with_prefix() {
        let encoded = ListEncoder::new().finish(Some(0x02));
        assert_eq!(encoded, vec![0x02, 0xc0]);
    }

    #[test]
    fn test_decode_list_header() {
        let header = decode_list_header(&[0xc4, 0x01, 0x82, 0x01, 0x00]).unwrap();
        assert_eq!(header, ListHeader { tx_type: None, payload_length: 4, item_count: 2 });
    }

    #[test]
    fn test_decode_list_header_typed() {
        let header = decode_list_header(&[0x02, 0xc2, 0x80, 0x80]).unwrap();
        assert_eq!(header.tx_type, Some(0x02));
        assert_eq!(header.item_count, 2);
    }

    #[test]
    fn test_decode_list_header_errors() {
        assert!(matches!(decode_list_header(&[]), Err(AppError::Encoding(_))));
        // String, not a list
        assert!(matches!(decode_list_header(&[0x83, 0x61, 0x62, 0x63]), Err(AppError::Encoding(_))));
        // Truncated
        assert!(matches!(decode_list_header(&[0xc3, 0x01]), Err(AppError::Encoding(_))));
        // Trailing bytes
        assert!(matches!(decode_list_header(&[0xc1, 0x01, 0x02]), Err(AppError::Encoding(_))));
    }
}
