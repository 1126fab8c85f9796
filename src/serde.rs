// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! serde implementation.
//!
//! Decimals serialize as their trimmed string form for both human-readable
//! and binary formats; a raw mantissa would lose the precision alongside it.
//! Deserialization parses in strict mode.

use crate::decimal::{Buf, Decimal};
use crate::round::RoundPolicy;
use std::marker::PhantomData;

impl<const P: u32, R: RoundPolicy> serde::Serialize for Decimal<P, R> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut buf = Buf::new();
        self.fmt_internal(true, false, &mut buf);
        let str = unsafe { std::str::from_utf8_unchecked(buf.as_slice()) };
        str.serialize(serializer)
    }
}

impl<'de, const P: u32, R: RoundPolicy> serde::Deserialize<'de> for Decimal<P, R> {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct DecimalVisitor<const P: u32, R>(PhantomData<R>);

        impl<const P: u32, R: RoundPolicy> serde::de::Visitor<'_> for DecimalVisitor<P, R> {
            type Value = Decimal<P, R>;

            #[inline]
            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "a decimal string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Decimal<P, R>, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(DecimalVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::decimal::Decimal;
    use crate::round::HalfEvenRound;

    #[test]
    fn test_serde_json() {
        let dec: Decimal<4> = "123.456".parse().unwrap();

        let json = serde_json::to_string(&dec).unwrap();
        assert_eq!(json, r#""123.456""#);
        let json_dec: Decimal<4> = serde_json::from_str(&json).unwrap();
        assert_eq!(json_dec, dec);

        let neg: Decimal<2, HalfEvenRound> = "-0.05".parse().unwrap();
        assert_eq!(serde_json::to_string(&neg).unwrap(), r#""-0.05""#);
    }

    #[test]
    fn test_serde_bincode() {
        let dec: Decimal<4> = "-123.456".parse().unwrap();

        let bin = bincode::serialize(&dec).unwrap();
        let bin_dec: Decimal<4> = bincode::deserialize(&bin).unwrap();
        assert_eq!(bin_dec, dec);
    }

    #[test]
    fn test_serde_invalid() {
        let result = serde_json::from_str::<Decimal<4>>(r#""1.2.3""#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Decimal<4>>("123");
        assert!(result.is_err());
    }
}
