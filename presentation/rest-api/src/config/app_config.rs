use super::{
    auth_config::AuthConfig, cors_config, locale_config::LocaleConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub auth: AuthConfig,
    pub locale: LocaleConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            auth: AuthConfig::from_env()?,
            locale: LocaleConfig::from_env(),
        })
    }
}
