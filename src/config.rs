use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub mail: MailConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "POSTBOX_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "POSTBOX_PORT", default_value_t = 5000)]
    pub port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct MailConfig {
    /// SMTP server hostname
    #[arg(long, env = "POSTBOX_SMTP_HOST")]
    pub smtp_host: String,

    /// SMTP submission port (STARTTLS)
    #[arg(long, env = "POSTBOX_SMTP_PORT", default_value_t = 587)]
    pub smtp_port: u16,

    /// SMTP account username
    #[arg(long, env = "POSTBOX_SMTP_USERNAME")]
    pub smtp_username: String,

    /// SMTP app-level password, never hard-coded
    #[arg(long, env = "POSTBOX_SMTP_PASSWORD")]
    pub smtp_password: String,

    /// Inbox that receives every relayed submission
    #[arg(long, env = "POSTBOX_RECIPIENT")]
    pub recipient: String,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "POSTBOX_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
