use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct UserRemoval {
    ///
    /// Target user, caller is the target when omitted
    ///
    pub email: Option<String>,
}
