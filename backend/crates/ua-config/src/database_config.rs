use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_IDLE_TIMEOUT_SECS,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_LIFETIME_SECS, DEFAULT_MIN_CONNECTIONS,
    MAX_CONNECT_TIMEOUT_SECS, MAX_MAX_CONNECTIONS, MIN_CONNECT_TIMEOUT_SECS, MIN_MAX_CONNECTIONS,
    MIN_MAX_LIFETIME_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// PostgreSQL connection settings.
///
/// `url` has no default: it must come from the config file or `DATABASE_URL`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    /// Upper bound on open connections in the pool
    pub max_connections: u32,
    /// Idle connections the pool keeps open
    pub min_connections: u32,
    pub max_lifetime_secs: u64,
    pub idle_timeout_secs: u64,
    /// Startup reachability check and per-acquire timeout
    pub connect_timeout_secs: u64,
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            max_lifetime_secs: DEFAULT_MAX_LIFETIME_SECS,
            idle_timeout_secs: DEFAULT_IDLE_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ConfigError::database("DATABASE_URL environment variable not set"))?;

        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            return Err(ConfigError::database(
                "database.url must start with postgres:// or postgresql://",
            ));
        }

        if self.max_connections < MIN_MAX_CONNECTIONS || self.max_connections > MAX_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::database(format!(
                "database.min_connections ({}) cannot exceed database.max_connections ({})",
                self.min_connections, self.max_connections
            )));
        }

        if self.max_lifetime_secs < MIN_MAX_LIFETIME_SECS {
            return Err(ConfigError::database(format!(
                "database.max_lifetime_secs must be >= {}, got {}",
                MIN_MAX_LIFETIME_SECS, self.max_lifetime_secs
            )));
        }

        if self.idle_timeout_secs == 0 {
            return Err(ConfigError::database(
                "database.idle_timeout_secs must be > 0",
            ));
        }

        if self.connect_timeout_secs < MIN_CONNECT_TIMEOUT_SECS
            || self.connect_timeout_secs > MAX_CONNECT_TIMEOUT_SECS
        {
            return Err(ConfigError::database(format!(
                "database.connect_timeout_secs must be {}-{}, got {}",
                MIN_CONNECT_TIMEOUT_SECS, MAX_CONNECT_TIMEOUT_SECS, self.connect_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Connection URL with the password masked, for logging.
    ///
    /// Masks the userinfo password and any `password` query parameter.
    pub fn redacted_url(&self) -> String {
        let Some(url) = self.url.as_deref() else {
            return String::from("<unset>");
        };

        let (base, query) = match url.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (url, None),
        };

        let mut redacted = redact_userinfo(base);
        if let Some(query) = query {
            redacted.push('?');
            redacted.push_str(&redact_query(query));
        }
        redacted
    }
}

/// The last `@` ends the userinfo, so an unencoded `/` or `@` in the
/// password cannot hide it.
fn redact_userinfo(base: &str) -> String {
    let Some(scheme_end) = base.find("://").map(|i| i + 3) else {
        return base.to_string();
    };

    let rest = &base[scheme_end..];
    match rest.rfind('@') {
        Some(at) => {
            let userinfo = &rest[..at];
            let masked = match userinfo.split_once(':') {
                Some((user, _)) => format!("{}:***", user),
                None => userinfo.to_string(),
            };
            format!("{}{}{}", &base[..scheme_end], masked, &rest[at..])
        }
        None => base.to_string(),
    }
}

fn redact_query(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key.eq_ignore_ascii_case("password") => format!("{}=***", key),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}
