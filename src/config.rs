use anyhow::Result;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::workflow::CommentPolicy;

/// Main configuration structure for the service desk client
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceDeskConfig {
    /// Ticket API settings
    pub api: ApiConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
    /// Workflow gating settings
    pub workflow: WorkflowConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the ticket API
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Retries for idempotent requests
    pub retry_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// Reject whitespace-only comments on transitions that need one
    pub require_nonblank_comment: bool,
}

impl WorkflowConfig {
    pub fn comment_policy(&self) -> CommentPolicy {
        CommentPolicy::from_require_nonblank(self.require_nonblank_comment)
    }
}

impl Default for ServiceDeskConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "/api".to_string(),
                timeout_ms: 30_000,
                retry_count: 3,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
            workflow: WorkflowConfig {
                require_nonblank_comment: true,
            },
        }
    }
}

impl ServiceDeskConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (service-desk.toml, .service-desk-rc)
    /// 3. Environment variables (SERVICE_DESK_<SECTION>__<KEY>)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if Path::new("service-desk.toml").exists() {
            builder = builder.add_source(File::with_name("service-desk"));
        }

        if Path::new(".service-desk-rc").exists() {
            builder = builder.add_source(File::new(".service-desk-rc", FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("SERVICE_DESK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load a single TOML file layered over the defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<ServiceDeskConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = ServiceDeskConfig::load_env_file();
        ServiceDeskConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static ServiceDeskConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}
