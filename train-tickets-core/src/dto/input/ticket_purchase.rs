use serde::Deserialize;

///
/// Missing fields are deserialized as empty strings
/// and rejected by the service.
///
#[derive(Debug, Deserialize)]
pub struct TicketPurchase {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}
