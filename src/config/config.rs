use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_secure: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("session.cookie_name", "moodbank_session")?
            .set_default("session.cookie_secure", false)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("MOODBANK").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = AppConfig::load("does_not_exist.yaml").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.session.cookie_name, "moodbank_session");
        assert!(!config.session.cookie_secure);
    }
}
