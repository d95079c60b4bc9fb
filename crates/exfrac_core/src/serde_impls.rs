//! Serde support preserving the canonical-form invariants.
//!
//! The wire form is a `{ "numer": "...", "denom": "..." }` pair of decimal
//! strings, so arbitrarily large parts survive formats without big-integer
//! support. Deserialization rebuilds through [`Fraction::new`]: a payload
//! carrying a zero denominator fails, and an unreduced pair lands in
//! canonical form instead of bypassing the invariants.

use num_bigint::BigInt;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fraction::Fraction;

#[derive(Serialize, Deserialize)]
#[serde(rename = "Fraction")]
struct RawFraction {
    numer: String,
    denom: String,
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawFraction {
            numer: self.numer().to_string(),
            denom: self.denom().to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawFraction::deserialize(deserializer)?;
        let numer: BigInt = raw
            .numer
            .parse()
            .map_err(|_| D::Error::custom("numer is not a decimal integer"))?;
        let denom: BigInt = raw
            .denom
            .parse()
            .map_err(|_| D::Error::custom("denom is not a decimal integer"))?;
        Fraction::new(numer, denom).map_err(D::Error::custom)
    }
}
