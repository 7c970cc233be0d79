//! Transaction byte encoding.

pub mod rlp;
pub mod transaction;

pub use rlp::{decode_list_header, ListHeader};
pub use transaction::{
    encode_transaction, encode_transaction_hex, AccessListItem, FeeMarketTransaction,
    LegacyTransaction, TransactionFields, TxType, UnsignedTransaction, FEE_MARKET_TX_TYPE,
};
