use dotenv::dotenv;
use thiserror::Error;

const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_LOG_CONFIG: &str = "./log-config.yml";
const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("failed to parse {name} from {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Which document store backs the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub redis_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub log_config: String,
    pub leaderboard_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_backend: StoreBackend::Memory,
            redis_url: None,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let store_backend = match lookup("STORE_BACKEND").as_deref() {
            None | Some("redis") => StoreBackend::Redis,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let redis_url = lookup("REDIS_URL").filter(|url| !url.is_empty());
        if store_backend == StoreBackend::Redis && redis_url.is_none() {
            return Err(ConfigError::Missing("REDIS_URL"));
        }

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                value: port,
            })?,
            None => defaults.server_port,
        };

        let leaderboard_limit = match lookup("LEADERBOARD_LIMIT") {
            Some(limit) => limit.parse::<usize>().map_err(|_| ConfigError::Invalid {
                name: "LEADERBOARD_LIMIT",
                value: limit,
            })?,
            None => defaults.leaderboard_limit,
        };

        Ok(Config {
            store_backend,
            redis_url,
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            log_config: lookup("LOG_CONFIG").unwrap_or(defaults.log_config),
            leaderboard_limit,
        })
    }
}
