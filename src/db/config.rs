//! Database connection settings.

use std::env;

use sqlx::ConnectOptions;
use sqlx::mysql::MySqlConnectOptions;

/// Environment variable holding the database user name.
pub const DB_USER_ENV: &str = "DBUSER";
/// Environment variable holding the database password.
pub const DB_PASS_ENV: &str = "DBPASS";

/// MySQL connection settings.
///
/// Credentials come from the environment; host, port and database name are
/// fixed defaults that callers may override field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            password: String::new(),
            host: "127.0.0.1".to_string(),
            port: 3306,
            name: "myapp".to_string(),
        }
    }
}

impl DbConfig {
    /// Read `DBUSER` and `DBPASS`; unset variables become empty strings.
    pub fn from_env() -> Self {
        Self {
            user: env::var(DB_USER_ENV).unwrap_or_default(),
            password: env::var(DB_PASS_ENV).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Render a `mysql://` connection URL with the password percent-encoded.
    pub fn url(&self) -> String {
        let mut options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        options.to_url_lossy().to_string()
    }
}
