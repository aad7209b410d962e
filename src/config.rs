const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime settings
///
/// Read from the environment; a `.env` file is honoured when the binary
/// loads it with `dotenv` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// SQLite connection URL
    pub database_url: String,
    /// Pool size for file-backed databases
    pub max_connections: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Settings {
    /// Settings for a private in-memory database
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`
    ///
    /// Missing or unparsable values fall back to defaults with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            tracing::warn!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            DEFAULT_DATABASE_URL.to_string()
        });

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!(
                        "Invalid DATABASE_MAX_CONNECTIONS {:?}, using {}",
                        raw,
                        DEFAULT_MAX_CONNECTIONS
                    );
                    DEFAULT_MAX_CONNECTIONS
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Self {
            database_url,
            max_connections,
        }
    }

    /// True when the URL names an in-memory SQLite database
    ///
    /// Each connection to such a database sees its own copy, so the pool
    /// must be held at one connection.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}
