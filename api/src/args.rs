use std::path::PathBuf;

use clap::Parser;
use nutrition_assistant_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_HISTORY_PATH, HistoryConfig, LLMConfig,
    NutritionConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrition-assistant", version, about = "Nutrition Assistant HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub history: HistoryArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
#[command(next_help_heading = "Server")]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
#[command(next_help_heading = "LLM")]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Legacy name for the Gemini key.
    #[arg(long = "api-key", env = "API_KEY", hide = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

impl LlmArgs {
    /// `GEMINI_API_KEY` wins over `API_KEY` when both are set.
    pub fn resolved_api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .or(self.api_key.as_deref())
            .filter(|key| !key.trim().is_empty())
    }
}

#[derive(Debug, Clone, clap::Args)]
#[command(next_help_heading = "History")]
pub struct HistoryArgs {
    #[arg(long = "history-path", env = "HISTORY_PATH", default_value = DEFAULT_HISTORY_PATH)]
    pub path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
#[command(next_help_heading = "Logging")]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directive.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for NutritionConfig {
    fn from(args: Args) -> Self {
        let gemini_api_key = args.llm.resolved_api_key().unwrap_or_default().to_string();

        NutritionConfig {
            llm: LLMConfig {
                gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            history: HistoryConfig {
                path: args.history.path,
            },
        }
    }
}
