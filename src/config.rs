use std::time::Duration;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Projects table
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub projects_table: String,
    pub http_timeout: Duration,

    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Decorative layer
    pub decorations_enabled: bool,
    pub star_count: usize,

    // Profile
    pub profile: Profile,
}

/// Biography and contact details shown in the about section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub owner_name: String,
    pub tagline: String,
    pub bio: String,
    pub photo_url: Option<String>,
    pub instagram_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub whatsapp_url: Option<String>,
    pub email: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            owner_name: "Video Editor".to_string(),
            tagline: "Welcome to my portfolio website!!".to_string(),
            bio: "I edit short-form and long-form videos for creators.".to_string(),
            photo_url: None,
            instagram_url: None,
            tiktok_url: None,
            whatsapp_url: None,
            email: None,
        }
    }
}

impl Profile {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            owner_name: env_or_default("SITE_OWNER_NAME", &defaults.owner_name),
            tagline: env_or_default("SITE_TAGLINE", &defaults.tagline),
            bio: env_or_default("SITE_BIO", &defaults.bio),
            photo_url: optional_env("PROFILE_PHOTO_URL"),
            instagram_url: optional_env("CONTACT_INSTAGRAM_URL"),
            tiktok_url: optional_env("CONTACT_TIKTOK_URL"),
            whatsapp_url: optional_env("CONTACT_WHATSAPP_URL"),
            email: optional_env("CONTACT_EMAIL"),
        }
    }

    /// Contact links in display order as `(label, href)`.
    #[must_use]
    pub fn contact_links(&self) -> Vec<(&'static str, String)> {
        let mut links = Vec::new();
        if let Some(url) = &self.instagram_url {
            links.push(("Instagram", url.clone()));
        }
        if let Some(url) = &self.tiktok_url {
            links.push(("TikTok", url.clone()));
        }
        if let Some(url) = &self.whatsapp_url {
            links.push(("WhatsApp", url.clone()));
        }
        if let Some(email) = &self.email {
            links.push(("Email", format!("mailto:{email}")));
        }
        links
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Projects table
            supabase_url: required_env("SUPABASE_URL")?,
            supabase_anon_key: required_env("SUPABASE_ANON_KEY")?,
            projects_table: env_or_default("PROJECTS_TABLE", "projects"),
            http_timeout: Duration::from_secs(parse_env_u64("HTTP_TIMEOUT_SECS", 15)?),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            // Decorative layer
            decorations_enabled: parse_env_bool("DECORATIONS_ENABLED", true)?,
            star_count: parse_env_usize("STAR_COUNT", 75)?,

            profile: Profile::from_env(),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match Url::parse(&self.supabase_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::InvalidValue {
                    name: "SUPABASE_URL".to_string(),
                    message: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    name: "SUPABASE_URL".to_string(),
                    message: e.to_string(),
                });
            }
        }
        if self.supabase_anon_key.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "SUPABASE_ANON_KEY".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.projects_table.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "PROJECTS_TABLE".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.web_port == 0 {
            return Err(ConfigError::InvalidValue {
                name: "WEB_PORT".to_string(),
                message: "must be non-zero".to_string(),
            });
        }
        Ok(())
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => parse_bool(name, &val),
        _ => Ok(default),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::ParseBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
