use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct AllocationsFilter {
    ///
    /// `None` or empty string means all sections
    ///
    pub section: Option<String>,
}
