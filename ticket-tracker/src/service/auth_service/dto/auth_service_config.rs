use std::time::Duration;

pub struct AuthServiceConfig {
    pub simulated_delay: Duration,
}
