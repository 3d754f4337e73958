use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language name or code (used verbatim in the translation prompt)
    pub source_language: String,

    /// Target language name or code (used verbatim in the translation prompt)
    pub target_language: String,

    /// Root directory containing source documents
    pub source_dir: PathBuf,

    /// Root directory mirroring the source tree with translated documents
    pub target_dir: PathBuf,

    /// File recording the UNIX timestamp of the last completed run
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// Persistent log file for run reports
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Document extension to translate (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Dump every source and translated chunk beside the target for inspection
    #[serde(default)]
    pub dump_chunks: bool,

    /// Translation config
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: Ollama
    Ollama,
    // @provider: OpenAI
    #[default]
    OpenAI,
    // @provider: Anthropic
    Anthropic,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Ollama => "Ollama",
            Self::OpenAI => "OpenAI",
            Self::Anthropic => "Anthropic",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Ollama => "ollama".to_string(),
            Self::OpenAI => "openai".to_string(),
            Self::Anthropic => "anthropic".to_string(),
        }
    }

    /// Environment variable holding the provider's API key
    pub fn api_key_env_var(&self) -> Option<&'static str> {
        match self {
            Self::Ollama => None,
            Self::OpenAI => Some("OPENAI_API_KEY"),
            Self::Anthropic => Some("ANTHROPIC_API_KEY"),
        }
    }

    /// Whether the provider requires an API key at all
    pub fn requires_api_key(&self) -> bool {
        self.api_key_env_var().is_some()
    }
}

// Implement Display trait for TranslationProvider
impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProvider
impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: Model name
    #[serde(default = "String::new")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Max bytes per translated chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TranslationProvider) -> Self {
        match provider_type {
            TranslationProvider::Ollama => Self {
                provider_type: "ollama".to_string(),
                model: default_ollama_model(),
                api_key: String::new(),
                endpoint: default_ollama_endpoint(),
                chunk_size: default_chunk_size(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::OpenAI => Self {
                provider_type: "openai".to_string(),
                model: default_openai_model(),
                api_key: String::new(),
                endpoint: default_openai_endpoint(),
                chunk_size: default_chunk_size(),
                timeout_secs: default_timeout_secs(),
            },
            TranslationProvider::Anthropic => Self {
                provider_type: "anthropic".to_string(),
                model: default_anthropic_model(),
                api_key: String::new(),
                endpoint: default_anthropic_endpoint(),
                chunk_size: default_chunk_size(),
                timeout_secs: default_timeout_secs(),
            },
        }
    }

    /// API key from the config, falling back to the provider's environment variable
    pub fn resolved_api_key(&self, provider: &TranslationProvider) -> Option<String> {
        if !self.api_key.is_empty() {
            return Some(self.api_key.clone());
        }
        provider
            .api_key_env_var()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty())
    }
}

/// Translation section of the configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Active provider
    #[serde(default)]
    pub provider: TranslationProvider,

    /// Settings for every known provider
    #[serde(default = "default_available_providers")]
    pub available_providers: Vec<ProviderConfig>,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: TranslationProvider::default(),
            available_providers: default_available_providers(),
        }
    }
}

impl TranslationConfig {
    /// Settings for the active provider
    pub fn provider_config(&self) -> Result<&ProviderConfig> {
        let wanted = self.provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == wanted)
            .ok_or_else(|| anyhow!("No configuration found for provider: {}", wanted))
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: "English".to_string(),
            target_language: "Japanese".to_string(),
            source_dir: PathBuf::from("docs"),
            target_dir: PathBuf::from("docs_translated"),
            state_file: default_state_file(),
            log_file: default_log_file(),
            extension: default_extension(),
            dump_chunks: false,
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration. This is the fatal gate before any
    /// document is processed.
    pub fn validate(&self) -> Result<()> {
        if self.source_language.is_empty() {
            return Err(anyhow!("Source language cannot be empty"));
        }
        if self.target_language.is_empty() {
            return Err(anyhow!("Target language cannot be empty"));
        }
        if self.extension.is_empty() {
            return Err(anyhow!("Document extension cannot be empty"));
        }

        let provider = &self.translation.provider;
        let provider_config = self.translation.provider_config()?;

        if provider_config.model.is_empty() {
            return Err(anyhow!(
                "No model configured for provider: {}",
                provider.display_name()
            ));
        }
        if provider_config.chunk_size == 0 {
            return Err(anyhow!("Chunk size must be greater than zero"));
        }
        if provider.requires_api_key()
            && provider_config.resolved_api_key(provider).is_none()
        {
            return Err(anyhow!(
                "{} requires an API key; set it in the config or via {}",
                provider.display_name(),
                provider.api_key_env_var().unwrap_or_default()
            ));
        }

        Ok(())
    }
}

fn default_state_file() -> PathBuf {
    PathBuf::from("exec_date_translation.txt")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("mdtrans.log")
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_chunk_size() -> usize {
    crate::markdown::DEFAULT_CHUNK_SIZE
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-5-sonnet-latest".to_string()
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_available_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig::new(TranslationProvider::Ollama),
        ProviderConfig::new(TranslationProvider::OpenAI),
        ProviderConfig::new(TranslationProvider::Anthropic),
    ]
}
