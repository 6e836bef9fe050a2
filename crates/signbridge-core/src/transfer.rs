use serde::{Deserialize, Serialize};

use crate::crypto::PublicKey;
use crate::error::ConnectorError;
use crate::serialize;

/// Semantic field set behind a transfer-shaped transaction.
///
/// The canonical on-wire encoding of these fields must round-trip losslessly;
/// the backend enforces that on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFields {
    /// Destination account.
    pub to: PublicKey,
    /// Amount in the network's base unit.
    pub amount: u64,
    /// Sender nonce.
    pub nonce: u64,
    /// Fee in the network's base unit.
    pub fee: u64,
}

impl TransferFields {
    /// Build fields from key/value string pairs, as supplied by a dApp
    /// session ("to", "amount", "nonce", "fee").
    ///
    /// Strict: a missing, duplicate, unknown, or unparseable field fails with
    /// `InvalidSerialization` rather than producing a partially-populated
    /// transaction.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, ConnectorError> {
        let mut to: Option<PublicKey> = None;
        let mut amount: Option<u64> = None;
        let mut nonce: Option<u64> = None;
        let mut fee: Option<u64> = None;

        for (key, value) in pairs {
            match *key {
                "to" => {
                    let bytes =
                        hex::decode(value).map_err(|_| ConnectorError::InvalidSerialization)?;
                    let parsed =
                        PublicKey::from_slice(&bytes).ok_or(ConnectorError::InvalidSerialization)?;
                    if to.replace(parsed).is_some() {
                        return Err(ConnectorError::InvalidSerialization);
                    }
                }
                "amount" => {
                    let parsed = Self::parse_u64(value)?;
                    if amount.replace(parsed).is_some() {
                        return Err(ConnectorError::InvalidSerialization);
                    }
                }
                "nonce" => {
                    let parsed = Self::parse_u64(value)?;
                    if nonce.replace(parsed).is_some() {
                        return Err(ConnectorError::InvalidSerialization);
                    }
                }
                "fee" => {
                    let parsed = Self::parse_u64(value)?;
                    if fee.replace(parsed).is_some() {
                        return Err(ConnectorError::InvalidSerialization);
                    }
                }
                _ => return Err(ConnectorError::InvalidSerialization),
            }
        }

        match (to, amount, nonce, fee) {
            (Some(to), Some(amount), Some(nonce), Some(fee)) => Ok(TransferFields {
                to,
                amount,
                nonce,
                fee,
            }),
            _ => Err(ConnectorError::InvalidSerialization),
        }
    }

    fn parse_u64(value: &str) -> Result<u64, ConnectorError> {
        value
            .parse::<u64>()
            .map_err(|_| ConnectorError::InvalidSerialization)
    }

    /// Canonical bytes for digesting/signing these fields.
    pub fn signing_bytes(&self) -> Result<Vec<u8>, ConnectorError> {
        serialize::to_bytes(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KeyPair;

    fn dest_hex() -> String {
        KeyPair::generate().public.to_hex()
    }

    #[test]
    fn test_from_pairs() {
        let to = dest_hex();
        let fields = TransferFields::from_pairs(&[
            ("to", &to),
            ("amount", "1000"),
            ("nonce", "1"),
            ("fee", "10"),
        ])
        .unwrap();

        assert_eq!(fields.amount, 1000);
        assert_eq!(fields.nonce, 1);
        assert_eq!(fields.fee, 10);
        assert_eq!(fields.to.to_hex(), to);
    }

    #[test]
    fn test_from_pairs_missing_destination() {
        let result =
            TransferFields::from_pairs(&[("amount", "1000"), ("nonce", "1"), ("fee", "10")]);
        assert_eq!(result.unwrap_err(), ConnectorError::InvalidSerialization);
    }

    #[test]
    fn test_from_pairs_duplicate_field() {
        let to = dest_hex();
        let result = TransferFields::from_pairs(&[
            ("to", &to),
            ("amount", "1000"),
            ("amount", "2000"),
            ("nonce", "1"),
            ("fee", "10"),
        ]);
        assert_eq!(result.unwrap_err(), ConnectorError::InvalidSerialization);
    }

    #[test]
    fn test_from_pairs_unknown_field() {
        let to = dest_hex();
        let result = TransferFields::from_pairs(&[
            ("to", &to),
            ("amount", "1000"),
            ("nonce", "1"),
            ("fee", "10"),
            ("memo", "hello"),
        ]);
        assert_eq!(result.unwrap_err(), ConnectorError::InvalidSerialization);
    }

    #[test]
    fn test_from_pairs_garbage_amount() {
        let to = dest_hex();
        let result = TransferFields::from_pairs(&[
            ("to", &to),
            ("amount", "not-a-number"),
            ("nonce", "1"),
            ("fee", "10"),
        ]);
        assert_eq!(result.unwrap_err(), ConnectorError::InvalidSerialization);
    }

    #[test]
    fn test_signing_bytes_deterministic() {
        let fields = TransferFields {
            to: KeyPair::generate().public,
            amount: 500,
            nonce: 2,
            fee: 5,
        };
        assert_eq!(
            fields.signing_bytes().unwrap(),
            fields.signing_bytes().unwrap()
        );
    }
}
