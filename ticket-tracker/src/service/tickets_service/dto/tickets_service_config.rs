use std::time::Duration;

pub struct TicketsServiceConfig {
    /// Delay applied before every operation to imitate a remote API
    pub simulated_delay: Duration,
}
