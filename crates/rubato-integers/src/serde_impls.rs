//! Serde support, enabled with the `serde` feature.
//!
//! A [`Rational`] is written in its canonical text form so it can sit in a
//! document attribute; a [`Quantization`] is written as its denominator.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Quantization, Rational};

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

impl Serialize for Quantization {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.denominator())
    }
}

impl<'de> Deserialize<'de> for Quantization {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Quantization::new)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::{Quantization, Rational};

    #[derive(Debug, PartialEq, Deserialize)]
    struct Preferences {
        quantization: Quantization,
        offset: Rational,
    }

    #[test]
    fn test_rational_as_string() {
        let r = Rational::new(-60, 154).unwrap();
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"-30/77\"");
        let back: Rational = serde_json::from_str("\"60/-154\"").unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_rational_rejects_malformed() {
        let err = serde_json::from_str::<Rational>("\"1/0\"").unwrap_err();
        assert!(err.to_string().contains("denominator is zero"));
    }

    #[test]
    fn test_preferences_document() {
        let prefs: Preferences =
            serde_json::from_str(r#"{ "quantization": 0, "offset": "3/4" }"#).unwrap();
        assert_eq!(
            prefs,
            Preferences {
                quantization: Quantization::default(),
                offset: Rational::new(3, 4).unwrap(),
            }
        );
        assert_eq!(serde_json::to_string(&Quantization::new(-16)).unwrap(), "16");
    }
}
