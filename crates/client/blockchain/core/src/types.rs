//! Wallet-facing data types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 20-byte account or contract address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(pub [u8; 20]);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddressParseError {
    #[error("address must be 40 hex digits, got {0}")]
    Length(usize),

    #[error("invalid hex in address: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Address {
    pub const ZERO: Self = Self([0; 20]);

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Abbreviated form for status lines (`0x1234…abcd`).
    pub fn short(&self) -> String {
        let full = hex::encode(self.0);
        format!("0x{}…{}", &full[..4], &full[36..])
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches("0x").trim_start_matches("0X");
        if digits.len() != 40 {
            return Err(AddressParseError::Length(digits.len()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Transaction hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(pub [u8; 32]);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Contract call that produced a receipt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    UpdateTaps { count: u64 },
    UpdateLevel { level: u32 },
    MintNft { milestone: u64 },
}

/// Confirmation of a state-changing contract call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub kind: TxKind,
    pub from: Address,
    pub confirmed_at: DateTime<Utc>,
}

/// Per-player progress stored by the contract.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_taps: u64,
    pub current_level: u32,
    pub nfts_minted: u32,
    pub last_mint_timestamp: Option<DateTime<Utc>>,
    pub last_level_up_timestamp: Option<DateTime<Utc>>,
}

/// Static description of the progress contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub name: String,
    pub symbol: String,
    pub chain_id: u64,
    pub address: Option<Address>,
    /// Ascending milestone thresholds that unlock an NFT.
    pub milestones: Vec<u64>,
    /// Reward per milestone in milli-ETH, parallel to `milestones`.
    pub rewards_milli_eth: Vec<u64>,
}

impl ContractInfo {
    pub const DEFAULT_MILESTONES: [u64; 5] = [100, 500, 1000, 5000, 10000];
    pub const DEFAULT_REWARDS_MILLI_ETH: [u64; 5] = [1, 5, 10, 50, 100];

    pub fn new(chain_id: u64, address: Option<Address>) -> Self {
        Self {
            name: "Runner Milestones".to_string(),
            symbol: "RUNM".to_string(),
            chain_id,
            address,
            milestones: Self::DEFAULT_MILESTONES.to_vec(),
            rewards_milli_eth: Self::DEFAULT_REWARDS_MILLI_ETH.to_vec(),
        }
    }

    pub fn is_milestone(&self, value: u64) -> bool {
        self.milestones.contains(&value)
    }

    pub fn reward_for(&self, milestone: u64) -> Option<u64> {
        let index = self.milestones.iter().position(|&m| m == milestone)?;
        self.rewards_milli_eth.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_parses_with_and_without_prefix() {
        let with: Address = "0x00000000000000000000000000000000000000ff".parse().unwrap();
        let without: Address = "00000000000000000000000000000000000000ff".parse().unwrap();
        assert_eq!(with, without);
        assert_eq!(with.0[19], 0xff);
        assert_eq!(with.to_string(), "0x00000000000000000000000000000000000000ff");
    }

    #[test]
    fn address_rejects_bad_input() {
        assert_eq!(
            "0x1234".parse::<Address>(),
            Err(AddressParseError::Length(4))
        );
        assert!(matches!(
            "zz00000000000000000000000000000000000000".parse::<Address>(),
            Err(AddressParseError::Hex(_))
        ));
    }

    #[test]
    fn short_address_keeps_both_ends() {
        let address: Address = "0xabcd00000000000000000000000000000000ef12".parse().unwrap();
        assert_eq!(address.short(), "0xabcd…ef12");
    }

    #[test]
    fn rewards_line_up_with_milestones() {
        let info = ContractInfo::new(42161, None);
        assert_eq!(info.reward_for(1000), Some(10));
        assert_eq!(info.reward_for(42), None);
        assert!(info.is_milestone(5000));
    }
}
