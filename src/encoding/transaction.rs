//! Unsigned EVM transaction encoding.
//!
//! Produces the exact byte payload an external signer signs:
//!
//! - **Legacy** (EIP-155): `rlp([nonce, gasPrice, gasLimit, to, value, data, chainId, 0, 0])`
//! - **Fee market** (EIP-1559): `0x02 || rlp([chainId, nonce, maxPriorityFeePerGas,
//!   maxFeePerGas, gasLimit, to, value, data, accessList])`
//!
//! Field values are not checked for plausibility; the encoder only fixes the
//! byte layout.

use alloy::hex;
use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use crate::encoding::rlp::ListEncoder;
use crate::error::{AppError, Result};
use crate::types::ChainId;

/// Envelope type byte of fee-market transactions.
pub const FEE_MARKET_TX_TYPE: u8 = 0x02;

/// Transaction envelope format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxType {
    #[serde(alias = "eip155")]
    Legacy,
    #[serde(alias = "eip1559")]
    FeeMarket,
}

impl TxType {
    /// Preferred format for `chain`, or `None` if the chain is not EVM.
    ///
    /// Every supported EVM chain accepts EIP-1559 transactions; legacy
    /// encoding stays available through [`TransactionFields`].
    pub fn for_chain(chain: ChainId) -> Option<TxType> {
        chain.supports_fee_market().then_some(TxType::FeeMarket)
    }
}

// ============================================================================
// Transaction types
// ============================================================================

/// EIP-155 legacy transaction fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTransaction {
    pub chain_id: u64,
    pub nonce: u64,
    pub gas_price: U256,
    pub gas_limit: u64,
    /// Recipient; `None` creates a contract.
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
}

/// One access list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    pub address: Address,
    pub storage_keys: Vec<B256>,
}

impl AccessListItem {
    fn encode_into(&self, list: &mut ListEncoder) {
        let mut item = ListEncoder::new();
        item.push(&self.address).push(&self.storage_keys);
        list.push_raw(&item.finish(None));
    }
}

/// EIP-1559 fee-market transaction fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeMarketTransaction {
    pub chain_id: u64,
    pub nonce: u64,
    pub max_priority_fee_per_gas: U256,
    pub max_fee_per_gas: U256,
    pub gas_limit: u64,
    /// Recipient; `None` creates a contract.
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
    pub access_list: Vec<AccessListItem>,
}

/// A transaction ready to be encoded for signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsignedTransaction {
    Legacy(LegacyTransaction),
    FeeMarket(FeeMarketTransaction),
}

impl UnsignedTransaction {
    pub fn tx_type(&self) -> TxType {
        match self {
            UnsignedTransaction::Legacy(_) => TxType::Legacy,
            UnsignedTransaction::FeeMarket(_) => TxType::FeeMarket,
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            UnsignedTransaction::Legacy(tx) => tx.chain_id,
            UnsignedTransaction::FeeMarket(tx) => tx.chain_id,
        }
    }

    /// Encode the signing payload.
    pub fn encode(&self) -> Vec<u8> {
        let mut list = ListEncoder::new();
        match self {
            UnsignedTransaction::Legacy(tx) => {
                list.push(&tx.nonce)
                    .push(&tx.gas_price)
                    .push(&tx.gas_limit)
                    .push_optional_address(tx.to.as_ref())
                    .push(&tx.value)
                    .push(&tx.data)
                    .push(&tx.chain_id)
                    .push(&0u8)
                    .push(&0u8);
                list.finish(None)
            }
            UnsignedTransaction::FeeMarket(tx) => {
                list.push(&tx.chain_id)
                    .push(&tx.nonce)
                    .push(&tx.max_priority_fee_per_gas)
                    .push(&tx.max_fee_per_gas)
                    .push(&tx.gas_limit)
                    .push_optional_address(tx.to.as_ref())
                    .push(&tx.value)
                    .push(&tx.data);
                encode_access_list(&tx.access_list, &mut list);
                list.finish(Some(FEE_MARKET_TX_TYPE))
            }
        }
    }

    /// Encode the signing payload as `0x`-prefixed hex.
    pub fn encode_hex(&self) -> String {
        hex::encode_prefixed(self.encode())
    }

    /// Keccak-256 of the signing payload.
    pub fn signing_hash(&self) -> B256 {
        keccak256(self.encode())
    }
}

fn encode_access_list(access_list: &[AccessListItem], list: &mut ListEncoder) {
    let mut inner = ListEncoder::new();
    for item in access_list {
        item.encode_into(&mut inner);
    }
    list.push_raw(&inner.finish(None));
}

impl From<LegacyTransaction> for UnsignedTransaction {
    fn from(tx: LegacyTransaction) -> Self {
        UnsignedTransaction::Legacy(tx)
    }
}

impl From<FeeMarketTransaction> for UnsignedTransaction {
    fn from(tx: FeeMarketTransaction) -> Self {
        UnsignedTransaction::FeeMarket(tx)
    }
}

// ============================================================================
// Loose field set
// ============================================================================

/// Transaction fields as received from callers, before a format is chosen.
///
/// Numeric fields are strings so that values above 2^53 survive JSON; they
/// accept decimal or `0x` hex.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFields {
    pub chain_id: u64,
    #[serde(default)]
    pub nonce: u64,
    pub gas_limit: u64,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub gas_price: Option<String>,
    #[serde(default)]
    pub max_fee_per_gas: Option<String>,
    #[serde(default)]
    pub max_priority_fee_per_gas: Option<String>,
    #[serde(default)]
    pub access_list: Vec<AccessListItem>,
}

impl TransactionFields {
    /// Build an [`UnsignedTransaction`] of the requested format.
    ///
    /// # Errors
    /// [`AppError::Encoding`] if a fee field required by `tx_type` is missing,
    /// [`AppError::Parse`] if a field is malformed.
    pub fn build(&self, tx_type: TxType) -> Result<UnsignedTransaction> {
        let to = match self.to.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(to) => Some(to.parse::<Address>().map_err(|e| {
                AppError::Parse(format!("Invalid recipient address '{}': {}", to, e))
            })?),
        };
        let value = parse_quantity("value", self.value.as_deref())?.unwrap_or(U256::ZERO);
        let data = match self.data.as_deref() {
            None | Some("") | Some("0x") => Bytes::new(),
            Some(data) => Bytes::from(hex::decode(data)?),
        };

        let tx = match tx_type {
            TxType::Legacy => UnsignedTransaction::Legacy(LegacyTransaction {
                chain_id: self.chain_id,
                nonce: self.nonce,
                gas_price: required("gasPrice", self.gas_price.as_deref())?,
                gas_limit: self.gas_limit,
                to,
                value,
                data,
            }),
            TxType::FeeMarket => UnsignedTransaction::FeeMarket(FeeMarketTransaction {
                chain_id: self.chain_id,
                nonce: self.nonce,
                max_priority_fee_per_gas: required(
                    "maxPriorityFeePerGas",
                    self.max_priority_fee_per_gas.as_deref(),
                )?,
                max_fee_per_gas: required("maxFeePerGas", self.max_fee_per_gas.as_deref())?,
                gas_limit: self.gas_limit,
                to,
                value,
                data,
                access_list: self.access_list.clone(),
            }),
        };
        Ok(tx)
    }
}

fn parse_quantity(field: &str, raw: Option<&str>) -> Result<Option<U256>> {
    raw.map(|raw| {
        raw.trim()
            .parse::<U256>()
            .map_err(|e| AppError::Parse(format!("Invalid {} '{}': {}", field, raw, e)))
    })
    .transpose()
}

fn required(field: &str, raw: Option<&str>) -> Result<U256> {
    parse_quantity(field, raw)?
        .ok_or_else(|| AppError::Encoding(format!("Missing {} for this transaction type", field)))
}

/// Encode `tx` to raw bytes.
pub fn encode_transaction(tx: &UnsignedTransaction) -> Vec<u8> {
    tx.encode()
}

/// Encode `tx` to `0x`-prefixed hex.
pub fn encode_transaction_hex(tx: &UnsignedTransaction) -> String {
    tx.encode_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::rlp::decode_list_header;
    use alloy::primitives::{address, b256};

    const ONE_ETHER: u64 = 1_000_000_000_000_000_000;

    fn eip155_example() -> LegacyTransaction {
        LegacyTransaction {
            chain_id: 1,
            nonce: 9,
            gas_price: U256::from(20_000_000_000u64),
            gas_limit: 21_000,
            to: Some(address!("3535353535353535353535353535353535353535")),
            value: U256::from(ONE_ETHER),
            data: Bytes::new(),
        }
    }

    fn fee_market_example() -> FeeMarketTransaction {
        FeeMarketTransaction {
            chain_id: 1,
            nonce: 0,
            max_priority_fee_per_gas: U256::from(1_000_000_000u64),
            max_fee_per_gas: U256::from(30_000_000_000u64),
            gas_limit: 21_000,
            to: Some(address!("3535353535353535353535353535353535353535")),
            value: U256::from(ONE_ETHER),
            data: Bytes::new(),
            access_list: vec![],
        }
    }

    // ============================================================================
    // Legacy
    // ============================================================================

    #[test]
    fn test_legacy_eip155_signing_payload() {
        let tx = UnsignedTransaction::from(eip155_example());
        assert_eq!(
            tx.encode_hex(),
            "0xec098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a764000080018080"
        );
    }

    #[test]
    fn test_legacy_eip155_signing_hash() {
        let tx = UnsignedTransaction::from(eip155_example());
        assert_eq!(
            tx.signing_hash(),
            b256!("daf5a779ae972f972197303d7b574746c7ef83eadac0f2791ad23db92e4c8e53")
        );
    }

    #[test]
    fn test_legacy_has_nine_items() {
        let encoded = UnsignedTransaction::from(eip155_example()).encode();
        let header = decode_list_header(&encoded).unwrap();
        assert_eq!(header.item_count, 9);
        assert_eq!(header.tx_type, None);
        assert_eq!(encoded.len(), 1 + header.payload_length);
    }

    #[test]
    fn test_legacy_contract_creation_all_zero() {
        let tx = UnsignedTransaction::from(LegacyTransaction {
            chain_id: 1,
            nonce: 0,
            gas_price: U256::ZERO,
            gas_limit: 0,
            to: None,
            value: U256::ZERO,
            data: Bytes::new(),
        });
        assert_eq!(tx.encode(), vec![0xc9, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01, 0x80, 0x80]);
    }

    #[test]
    fn test_legacy_long_data_uses_long_header() {
        let mut tx = eip155_example();
        tx.data = Bytes::from(vec![0xab; 100]);

        let encoded = UnsignedTransaction::from(tx).encode();
        assert_eq!(encoded[0], 0xf8);
        assert_eq!(encoded[1] as usize, encoded.len() - 2);
    }

    // ============================================================================
    // Fee market
    // ============================================================================

    #[test]
    fn test_fee_market_prefix_and_items() {
        let encoded = UnsignedTransaction::from(fee_market_example()).encode();
        assert_eq!(encoded[0], FEE_MARKET_TX_TYPE);
        assert!(encoded[1] >= 0xc0);

        let header = decode_list_header(&encoded).unwrap();
        assert_eq!(header.tx_type, Some(0x02));
        assert_eq!(header.item_count, 9);
    }

    #[test]
    fn test_fee_market_empty_access_list_is_last_item() {
        let encoded = UnsignedTransaction::from(fee_market_example()).encode();
        // data (0x80) followed by an empty list (0xc0)
        assert_eq!(&encoded[encoded.len() - 2..], &[0x80, 0xc0]);
    }

    #[test]
    fn test_fee_market_access_list_encoding() {
        let mut tx = fee_market_example();
        tx.access_list = vec![AccessListItem {
            address: address!("3535353535353535353535353535353535353535"),
            storage_keys: vec![B256::ZERO],
        }];
        let encoded = UnsignedTransaction::from(tx).encode();

        // item payload is address (21) + [key] (34) = 55 bytes, the short-form limit;
        // the enclosing 56-byte access list needs the long form.
        let tail = &encoded[encoded.len() - 58..];
        assert_eq!(&tail[..4], &[0xf8, 56, 0xf7, 0x94]);
    }

    #[test]
    fn test_signing_hash_is_keccak_of_payload() {
        let tx = UnsignedTransaction::from(fee_market_example());
        assert_eq!(tx.signing_hash(), keccak256(tx.encode()));
    }

    // ============================================================================
    // TransactionFields
    // ============================================================================

    #[test]
    fn test_fields_build_legacy() {
        let fields = TransactionFields {
            chain_id: 1,
            nonce: 9,
            gas_limit: 21_000,
            to: Some("0x3535353535353535353535353535353535353535".to_string()),
            value: Some("1000000000000000000".to_string()),
            gas_price: Some("0x4a817c800".to_string()),
            ..Default::default()
        };
        let tx = fields.build(TxType::Legacy).unwrap();
        assert_eq!(tx, UnsignedTransaction::from(eip155_example()));
    }

    #[test]
    fn test_fields_build_missing_fee_fields() {
        let fields = TransactionFields { chain_id: 1, gas_limit: 21_000, ..Default::default() };
        assert!(matches!(fields.build(TxType::Legacy), Err(AppError::Encoding(_))));
        assert!(matches!(fields.build(TxType::FeeMarket), Err(AppError::Encoding(_))));
    }

    #[test]
    fn test_fields_build_rejects_bad_values() {
        let fields = TransactionFields {
            chain_id: 1,
            gas_limit: 21_000,
            gas_price: Some("-1".to_string()),
            ..Default::default()
        };
        assert!(matches!(fields.build(TxType::Legacy), Err(AppError::Parse(_))));

        let fields = TransactionFields {
            chain_id: 1,
            gas_limit: 21_000,
            gas_price: Some("1".to_string()),
            data: Some("0xzz".to_string()),
            ..Default::default()
        };
        assert!(matches!(fields.build(TxType::Legacy), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_fields_deserialize_camel_case() {
        let json = r#"{"chainId": 8453, "gasLimit": 50000, "maxFeePerGas": "100",
                       "maxPriorityFeePerGas": "1", "data": "0xa9059cbb"}"#;
        let fields: TransactionFields = serde_json::from_str(json).unwrap();

        let tx = fields.build(TxType::FeeMarket).unwrap();
        assert_eq!(tx.chain_id(), 8453);
        assert_eq!(tx.tx_type(), TxType::FeeMarket);
    }

    #[test]
    fn test_tx_type_for_chain() {
        assert_eq!(TxType::for_chain(ChainId::Arbitrum), Some(TxType::FeeMarket));
        assert_eq!(TxType::for_chain(ChainId::Solana), None);
        let parsed: TxType = serde_json::from_str(r#""eip1559""#).unwrap();
        assert_eq!(parsed, TxType::FeeMarket);
    }

    #[test]
    fn test_tx_type_for_every_evm_chain() {
        for chain in ChainId::ALL {
            let expected = chain.evm_chain_id().map(|_| TxType::FeeMarket);
            assert_eq!(TxType::for_chain(chain), expected, "{}", chain);
        }
    }
}
