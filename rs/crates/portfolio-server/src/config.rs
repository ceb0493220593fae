pub const DEFAULT_DESTINATION: &str = "mugunthan701@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Address named in the log record and the acknowledgement message.
    pub destination: String,
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            destination: DEFAULT_DESTINATION.into(),
            log_json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { key, value } => write!(f, "invalid {}: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(host) = get("HOST") {
            cfg.host = host.trim().to_string();
        }
        if let Some(port) = get("PORT") {
            cfg.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: port.clone() })?;
        }
        if let Some(dest) = get("CONTACT_DESTINATION") {
            cfg.destination = dest.trim().to_string();
        }
        if let Some(raw) = get("LOG_JSON") {
            cfg.log_json = parse_bool(&raw)
                .ok_or(ConfigError::Invalid { key: "LOG_JSON", value: raw.clone() })?;
        }
        Ok(cfg)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
