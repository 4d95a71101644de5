use anyhow::anyhow;
use std::{net::SocketAddr, path::PathBuf, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    /// File where tickets and session are stored
    pub storage_path: PathBuf,

    /// Delay applied to every service call
    pub simulated_delay: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_TRACKER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_TRACKER_LOG_FILENAME")?;
        let bind_address = Self::env_var("TICKET_TRACKER_BIND_ADDRESS")?.parse()?;
        let storage_path = Self::env_var("TICKET_TRACKER_STORAGE_PATH")?.into();
        let simulated_delay = Self::env_var("TICKET_TRACKER_SIMULATED_DELAY")?.parse()?;
        let simulated_delay = Duration::from_millis(simulated_delay);

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            storage_path,
            simulated_delay,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    const VARIABLES: [(&str, &str); 5] = [
        ("TICKET_TRACKER_LOG_DIRECTORY", "logs"),
        ("TICKET_TRACKER_LOG_FILENAME", "ticket-tracker.log"),
        ("TICKET_TRACKER_BIND_ADDRESS", "127.0.0.1:8080"),
        ("TICKET_TRACKER_STORAGE_PATH", "data/storage.json"),
        ("TICKET_TRACKER_SIMULATED_DELAY", "500"),
    ];

    fn set_variables() {
        for (name, value) in VARIABLES {
            std::env::set_var(name, value);
        }
    }

    #[test]
    #[serial]
    fn parse_all_set() {
        set_variables();

        let env = ApplicationEnv::parse().unwrap();

        assert_eq!(env.log_directory, "logs");
        assert_eq!(env.log_filename, "ticket-tracker.log");
        assert_eq!(
            env.bind_address,
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(env.storage_path, PathBuf::from("data/storage.json"));
        assert_eq!(env.simulated_delay, Duration::from_millis(500));
    }

    #[test]
    #[serial]
    fn parse_missing_variable() {
        set_variables();
        std::env::remove_var("TICKET_TRACKER_STORAGE_PATH");

        let result = ApplicationEnv::parse();

        assert_eq!(
            result.err().unwrap().to_string(),
            "environment variable TICKET_TRACKER_STORAGE_PATH not set"
        );
    }

    #[test]
    #[serial]
    fn parse_invalid_delay() {
        set_variables();
        std::env::set_var("TICKET_TRACKER_SIMULATED_DELAY", "half a second");

        let result = ApplicationEnv::parse();

        assert!(result.is_err());
    }
}
