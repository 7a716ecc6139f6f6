use std::fmt;

use serde::{Deserialize, Deserializer, de::Error as _};

/// Connection parameters from the schema's `database` section.
///
/// Every parameter is optional; the field source provider decides which
/// ones it needs.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    #[serde(rename = "type", default)]
    pub driver: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub database_name: Option<String>,
    /// Either a number or a numeric string in the document
    #[serde(default, deserialize_with = "deserialize_port")]
    pub port: Option<u16>,
    #[serde(default)]
    pub socket: Option<String>,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database_name", &self.database_name)
            .field("port", &self.port)
            .field("socket", &self.socket)
            .finish()
    }
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Option::<Port>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Port::Number(port)) => Ok(Some(port)),
        Some(Port::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Port::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid port '{}'", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields() {
        let db: DatabaseConfig = serde_json::from_str(
            r#"{
                "type": "mysql",
                "host": "localhost",
                "user": "root",
                "password": "secret",
                "database_name": "shop",
                "port": 3306,
                "socket": "/tmp/mysql.sock"
            }"#,
        )
        .unwrap();

        assert_eq!(db.driver.as_deref(), Some("mysql"));
        assert_eq!(db.host.as_deref(), Some("localhost"));
        assert_eq!(db.user.as_deref(), Some("root"));
        assert_eq!(db.password.as_deref(), Some("secret"));
        assert_eq!(db.database_name.as_deref(), Some("shop"));
        assert_eq!(db.port, Some(3306));
        assert_eq!(db.socket.as_deref(), Some("/tmp/mysql.sock"));
    }

    #[test]
    fn test_everything_optional() {
        let db: DatabaseConfig = serde_json::from_str(r#"{ "host": null }"#).unwrap();
        assert_eq!(db, DatabaseConfig::default());
    }

    #[test]
    fn test_port_as_string() {
        let db: DatabaseConfig = serde_json::from_str(r#"{ "port": "5432" }"#).unwrap();
        assert_eq!(db.port, Some(5432));

        let db: DatabaseConfig = serde_json::from_str(r#"{ "port": "" }"#).unwrap();
        assert_eq!(db.port, None);

        assert!(serde_json::from_str::<DatabaseConfig>(r#"{ "port": "abc" }"#).is_err());
    }

    #[test]
    fn test_port_from_toml() {
        let db: DatabaseConfig = toml::from_str("type = \"pgsql\"\nport = 5432\n").unwrap();
        assert_eq!(db.driver.as_deref(), Some("pgsql"));
        assert_eq!(db.port, Some(5432));
    }

    #[test]
    fn test_debug_redacts_password() {
        let db = DatabaseConfig {
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", db);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
