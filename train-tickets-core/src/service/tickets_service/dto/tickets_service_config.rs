#[derive(Clone)]
pub struct TicketsServiceConfig {
    pub route_from: String,
    pub route_to: String,

    /// cents
    pub ticket_price: u32,
}
