use serde::Deserialize;

///
/// Claims read from the bearer token payload.
///
/// Only `email` is required, but that is checked after decoding
/// so a token without it fails with a credential error instead
/// of a deserialization one.
///
#[derive(Deserialize)]
pub struct Claims {
    #[serde(default, with = "de_lenient_string")]
    pub email: Option<String>,
    #[serde(default, with = "de_lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, with = "de_lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, with = "de_lenient_string")]
    pub role: Option<String>,
}

mod de_lenient_string {
    //!
    //! Claim of any other JSON type than string is treated as absent
    //!

    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;

        match value {
            Value::String(string) => Ok(Some(string)),
            _ => Ok(None),
        }
    }
}
