#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use pc_workshop_core::{ItemId, Order, PlacementRecord};
use pc_workshop_world::SaveData;
use serde::{Deserialize, Serialize};

const TRANSFER_DOMAIN: &str = "msc";
const TRANSFER_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded save payload.
pub(crate) const TRANSFER_HEADER: &str = "msc:v1";
/// Delimiter used to separate the prefix, balance and payload.
const FIELD_DELIMITER: char = ':';

/// Encodes a save snapshot into a single-line string suitable for
/// clipboard transfer.
pub(crate) fn encode(data: &SaveData) -> String {
    let payload = SerializableSave {
        inventory: data.inventory.clone(),
        installed_parts: data.installed_parts.clone(),
        current_order: data.current_order.clone(),
    };
    let json = serde_json::to_vec(&payload).expect("save transfer serialization never fails");
    let encoded = STANDARD_NO_PAD.encode(json);
    format!("{TRANSFER_HEADER}:{}:{encoded}", data.money)
}

/// Decodes a save snapshot from the provided string representation.
pub(crate) fn decode(value: &str) -> Result<SaveData, SaveTransferError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SaveTransferError::EmptyPayload);
    }

    let mut parts = trimmed.split(FIELD_DELIMITER);
    let domain = parts.next().ok_or(SaveTransferError::MissingPrefix)?;
    let version = parts.next().ok_or(SaveTransferError::MissingVersion)?;
    let balance = parts.next().ok_or(SaveTransferError::MissingBalance)?;
    let payload = parts.next().ok_or(SaveTransferError::MissingPayload)?;

    if domain != TRANSFER_DOMAIN {
        return Err(SaveTransferError::InvalidPrefix(domain.to_owned()));
    }
    if version != TRANSFER_VERSION {
        return Err(SaveTransferError::UnsupportedVersion(version.to_owned()));
    }

    let money = balance
        .trim()
        .parse::<u32>()
        .map_err(|_| SaveTransferError::InvalidBalance(balance.to_owned()))?;
    let bytes = STANDARD_NO_PAD
        .decode(payload.as_bytes())
        .map_err(SaveTransferError::InvalidEncoding)?;
    let decoded: SerializableSave =
        serde_json::from_slice(&bytes).map_err(SaveTransferError::InvalidPayload)?;

    Ok(SaveData {
        money,
        inventory: decoded.inventory,
        installed_parts: decoded.installed_parts,
        current_order: decoded.current_order,
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SerializableSave {
    inventory: Vec<ItemId>,
    #[serde(rename = "installedParts")]
    installed_parts: Vec<PlacementRecord>,
    #[serde(rename = "currentOrder")]
    current_order: Option<Order>,
}

/// Errors that can occur while decoding save transfer strings.
#[derive(Debug)]
pub(crate) enum SaveTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the encoded save.
    MissingPrefix,
    /// The encoded save did not contain a version segment.
    MissingVersion,
    /// The encoded save did not include the balance segment.
    MissingBalance,
    /// The encoded save did not include the payload segment.
    MissingPayload,
    /// The encoded save used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The encoded save used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The balance could not be parsed from the encoded save.
    InvalidBalance(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
}

impl fmt::Display for SaveTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "clipboard payload was empty"),
            Self::MissingPrefix => write!(f, "save string is missing the prefix"),
            Self::MissingVersion => write!(f, "save string is missing the version"),
            Self::MissingBalance => write!(f, "save string is missing the balance"),
            Self::MissingPayload => write!(f, "save string is missing the payload"),
            Self::InvalidPrefix(prefix) => write!(f, "save prefix '{prefix}' is not supported"),
            Self::UnsupportedVersion(version) => {
                write!(f, "save version '{version}' is not supported")
            }
            Self::InvalidBalance(balance) => {
                write!(f, "could not parse balance '{balance}'")
            }
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode save payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse save payload: {error}")
            }
        }
    }
}

impl Error for SaveTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_workshop_core::{OrderId, PartKind};

    #[test]
    fn round_trip_fresh_save() {
        let data = SaveData::default();

        let encoded = encode(&data);
        assert!(encoded.starts_with(&format!("{TRANSFER_HEADER}:1000:")));

        let decoded = decode(&encoded).expect("save decodes");
        assert_eq!(data, decoded);
    }

    #[test]
    fn round_trip_populated_save() {
        let data = SaveData {
            money: 730,
            inventory: vec![ItemId::new("cpu1"), ItemId::new("hdd1")],
            installed_parts: vec![PlacementRecord {
                item: ItemId::new("cpu1"),
                kind: PartKind::Cpu,
            }],
            current_order: Some(Order::new(
                OrderId::new(41),
                "Workstation",
                "Build a PC with at least one Memory.",
                PartKind::Ram,
                333,
            )),
        };

        let encoded = encode(&data);
        assert!(encoded.starts_with(&format!("{TRANSFER_HEADER}:730:")));

        let decoded = decode(&encoded).expect("save decodes");
        assert_eq!(data, decoded);
    }

    #[test]
    fn foreign_prefixes_are_rejected() {
        assert!(matches!(
            decode("maze:v1:10:AAAA"),
            Err(SaveTransferError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn unsupported_versions_are_rejected() {
        assert!(matches!(
            decode("msc:v2:10:AAAA"),
            Err(SaveTransferError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn garbage_balances_are_rejected() {
        assert!(matches!(
            decode("msc:v1:lots:AAAA"),
            Err(SaveTransferError::InvalidBalance(_))
        ));
    }

    #[test]
    fn empty_strings_are_rejected() {
        assert!(matches!(
            decode("   "),
            Err(SaveTransferError::EmptyPayload)
        ));
    }
}
