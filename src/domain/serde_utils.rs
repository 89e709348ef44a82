//! Serde helpers for snowflake identifiers.

/// Snowflakes arrive either as decimal strings or as bare JSON numbers.
/// Both are accepted; serialization always produces the string form.
pub mod string_to_u64 {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// # Errors
    ///
    /// Returns an error for negative numbers, non-numeric strings and any
    /// other JSON type.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = u64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a snowflake as string or unsigned integer")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
                Ok(value)
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
                u64::try_from(value).map_err(|_| E::custom(format!("negative snowflake {value}")))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
                value.trim().parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::string_to_u64")]
        id: u64,
    }

    #[test]
    fn test_deserializes_string_and_number() {
        let from_str: Wrapper = serde_json::from_str(r#"{"id":"81384788765712384"}"#).unwrap();
        let from_num: Wrapper = serde_json::from_str(r#"{"id":81384788765712384}"#).unwrap();

        assert_eq!(from_str, from_num);
        assert_eq!(from_str.id, 81_384_788_765_712_384);
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Wrapper { id: 42 }).unwrap();
        assert_eq!(json, r#"{"id":"42"}"#);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"id":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"id":-1}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"id":true}"#).is_err());
    }
}
