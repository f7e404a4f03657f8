use crate::bls12_381::{BLSGt, BLSScalar, BLSG1, BLSG2};
use crate::prelude::*;
use serde::de::{SeqAccess, Visitor};

/// Implement serde for a type with [`FromToBytes`]: base64 text for human-readable
/// formats, raw bytes otherwise.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let bytes = $crate::serialization::FromToBytes::to_canonical_bytes(self);
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&bytes))
                } else {
                    serializer.serialize_bytes(&bytes)
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::BytesVisitor)?
                };
                <$t as $crate::serialization::FromToBytes>::from_canonical_bytes(bytes.as_slice())
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Conversion of scalars and group elements to and from their canonical byte strings.
pub trait FromToBytes: Sized {
    /// Convert to bytes.
    fn to_canonical_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn from_canonical_bytes(bytes: &[u8]) -> Result<Self>;
}

macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl FromToBytes for $t {
            fn to_canonical_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }
            fn from_canonical_bytes(bytes: &[u8]) -> Result<$t> {
                $t::from_bytes(bytes).map_err(|_| AlgebraError::DeserializationError)
            }
        }
    };
}

macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl FromToBytes for $g {
            fn to_canonical_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }
            fn from_canonical_bytes(bytes: &[u8]) -> Result<$g> {
                $g::from_compressed_bytes(bytes)
            }
        }
    };
}

to_from_bytes_scalar!(BLSScalar);
to_from_bytes_group!(BLSG1);
to_from_bytes_group!(BLSG2);
to_from_bytes_group!(BLSGt);

serialize_deserialize!(BLSScalar);
serialize_deserialize!(BLSG1);
serialize_deserialize!(BLSG2);
serialize_deserialize!(BLSGt);

/// Collects either a byte string or a sequence of bytes.
pub struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        formatter.write_str("a base64 string or a byte sequence")
    }

    fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut vec: Vec<u8> = vec![];
        while let Some(x) = seq.next_element()? {
            vec.push(x);
        }
        Ok(vec)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
        Ok(v.to_vec())
    }

    fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
    where
        E: serde::de::Error,
    {
        b64dec(v).map_err(serde::de::Error::custom)
    }
}
