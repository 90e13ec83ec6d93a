use std::net::SocketAddr;

use clap::Parser;

/// Trial ceiling applied to every request unless overridden
pub const DEFAULT_MAX_TRIALS: usize = 100_000;

#[derive(Parser, Debug, Clone)]
#[command(name = "creditsim-server")]
#[command(about = "HTTP service for Monte Carlo credit-risk simulations")]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(short, long, env = "CREDITSIM_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Origin allowed by CORS (repeatable). Any origin is allowed when none are set.
    #[arg(
        long = "allowed-origin",
        env = "CREDITSIM_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Largest `num_simulations` a request may ask for
    #[arg(long, default_value_t = DEFAULT_MAX_TRIALS)]
    pub max_trials: usize,

    /// Fixed seed for requests that do not send one
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            allowed_origins: Vec::new(),
            log_level: "info".to_string(),
            max_trials: DEFAULT_MAX_TRIALS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = ServerArgs::try_parse_from(["creditsim-server"]).unwrap();
        assert_eq!(args.max_trials, DEFAULT_MAX_TRIALS);
        assert_eq!(args.log_level, "info");
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_repeated_origins_and_seed() {
        let args = ServerArgs::try_parse_from([
            "creditsim-server",
            "--bind",
            "0.0.0.0:8080",
            "--allowed-origin",
            "http://localhost:3000",
            "--allowed-origin",
            "https://risk.example.com",
            "--seed",
            "7",
            "--max-trials",
            "500",
        ])
        .unwrap();

        assert_eq!(args.bind, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(
            args.allowed_origins,
            vec!["http://localhost:3000", "https://risk.example.com"]
        );
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.max_trials, 500);
    }

    #[test]
    fn test_comma_separated_origins() {
        let args = ServerArgs::try_parse_from([
            "creditsim-server",
            "--allowed-origin",
            "http://a.test,http://b.test",
        ])
        .unwrap();
        assert_eq!(args.allowed_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        assert!(ServerArgs::try_parse_from(["creditsim-server", "--bind", "nowhere"]).is_err());
    }
}
