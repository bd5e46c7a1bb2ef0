use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SeatModification {
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub seat_number: i32,

    ///
    /// Target user, caller is the target when omitted
    ///
    pub email: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seat_modification_json_deserialize_missing_fields() {
        let modification = serde_json::from_str::<SeatModification>("{}").unwrap();

        assert_eq!(modification.section, "");
        assert_eq!(modification.seat_number, 0);
        assert_eq!(modification.email, None);
    }
}
