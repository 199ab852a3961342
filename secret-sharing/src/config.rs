//! Secret sharing configuration.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the supported compact schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    /// 96-bit secrets over the prime `2^96 - 17`.
    Compact96,
    /// 104-bit secrets over the prime `2^104 - 17`.
    Compact104,
    /// 128-bit secrets over the prime `2^128 - 159`.
    #[default]
    Compact128,
}

impl SchemeKind {
    /// Returns the field width in bits.
    pub fn num_bits(&self) -> usize {
        match self {
            SchemeKind::Compact96 => 96,
            SchemeKind::Compact104 => 104,
            SchemeKind::Compact128 => 128,
        }
    }

    /// Returns the size of a secret in bytes.
    pub fn secret_size(&self) -> usize {
        self.num_bits() / 8
    }

    /// Returns the size of an encoded share in bytes.
    pub fn share_size(&self) -> usize {
        1 + self.secret_size()
    }

    fn name(&self) -> &'static str {
        match self {
            SchemeKind::Compact96 => "compact96",
            SchemeKind::Compact104 => "compact104",
            SchemeKind::Compact128 => "compact128",
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown scheme name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scheme: {0}")]
pub struct UnknownSchemeError(String);

impl FromStr for SchemeKind {
    type Err = UnknownSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact96" => Ok(SchemeKind::Compact96),
            "compact104" => Ok(SchemeKind::Compact104),
            "compact128" => Ok(SchemeKind::Compact128),
            _ => Err(UnknownSchemeError(s.to_owned())),
        }
    }
}

/// Handling of shares whose length doesn't match the scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedShares {
    /// Skip malformed shares and reconstruct from the rest.
    #[default]
    Discard,
    /// Fail the join on the first malformed share.
    Reject,
}

/// Secret sharing configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheme used to split and join secrets.
    pub scheme: SchemeKind,
    /// Handling of malformed shares when joining.
    pub malformed_shares: MalformedShares,
}

#[cfg(test)]
mod tests {
    use super::{Config, MalformedShares, SchemeKind};

    #[test]
    fn test_scheme_sizes() {
        assert_eq!(SchemeKind::Compact96.secret_size(), 12);
        assert_eq!(SchemeKind::Compact96.share_size(), 13);
        assert_eq!(SchemeKind::Compact104.secret_size(), 13);
        assert_eq!(SchemeKind::Compact104.share_size(), 14);
        assert_eq!(SchemeKind::Compact128.secret_size(), 16);
        assert_eq!(SchemeKind::Compact128.share_size(), 17);
    }

    #[test]
    fn test_scheme_names() {
        for kind in [
            SchemeKind::Compact96,
            SchemeKind::Compact104,
            SchemeKind::Compact128,
        ] {
            let name = kind.to_string();
            assert_eq!(name.parse::<SchemeKind>(), Ok(kind));
            assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{name}\""));
        }

        let err = "compact256".parse::<SchemeKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown scheme: compact256");
    }

    #[test]
    fn test_config_deserialization() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.scheme, SchemeKind::Compact128);
        assert_eq!(cfg.malformed_shares, MalformedShares::Discard);

        let cfg: Config =
            serde_json::from_str(r#"{"scheme":"compact96","malformed_shares":"reject"}"#).unwrap();
        assert_eq!(cfg.scheme, SchemeKind::Compact96);
        assert_eq!(cfg.malformed_shares, MalformedShares::Reject);

        assert!(serde_json::from_str::<Config>(r#"{"scheme":"compact64"}"#).is_err());
    }
}
