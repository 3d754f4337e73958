/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct, which dispatches
 * chunk translation requests to the configured provider, and the
 * ChunkTranslator trait that the orchestrator (and tests) depend on instead
 * of the network.
 */

use async_trait::async_trait;
use log::debug;

use crate::app_config::{TranslationConfig, TranslationProvider};
use crate::errors::{AppError, ProviderError, TranslationError};
use crate::providers::Provider;
use crate::providers::anthropic::{Anthropic, AnthropicRequest};
use crate::providers::ollama::{Ollama, GenerationRequest};
use crate::providers::openai::{OpenAI, OpenAIRequest};

/// Maximum tokens requested per translated chunk
const MAX_COMPLETION_TOKENS: u32 = 4096;

/// A collaborator that translates one chunk of text at a time.
///
/// The orchestrator only sees this seam, so tests can substitute mock
/// translators and the core pipeline never touches the network directly.
#[async_trait]
pub trait ChunkTranslator: Send + Sync {
    /// Translate a single chunk, preserving its Markdown structure
    async fn translate_chunk(&self, text: &str) -> Result<String, TranslationError>;
}

/// Concrete provider client behind the service
enum ProviderClient {
    Ollama(Ollama),
    OpenAI(OpenAI),
    Anthropic(Anthropic),
}

/// Translation service backed by one of the configured providers
pub struct TranslationService {
    client: ProviderClient,
    model: String,
    source_language: String,
    target_language: String,
}

impl TranslationService {
    /// Build a service from the translation section of the configuration.
    /// Fails fast when the active provider lacks a usable API key.
    pub fn new(
        config: &TranslationConfig,
        source_language: &str,
        target_language: &str,
    ) -> Result<Self, AppError> {
        let provider_config = config
            .provider_config()
            .map_err(|e| AppError::Config(e.to_string()))?;
        let timeout = provider_config.timeout_secs;

        let client = match config.provider {
            TranslationProvider::Ollama => {
                ProviderClient::Ollama(Ollama::new(provider_config.endpoint.clone(), timeout))
            }
            TranslationProvider::OpenAI => {
                let api_key = provider_config
                    .resolved_api_key(&config.provider)
                    .ok_or_else(|| {
                        AppError::Config("OpenAI API key is not set".to_string())
                    })?;
                ProviderClient::OpenAI(OpenAI::new(
                    api_key,
                    provider_config.endpoint.clone(),
                    timeout,
                ))
            }
            TranslationProvider::Anthropic => {
                let api_key = provider_config
                    .resolved_api_key(&config.provider)
                    .ok_or_else(|| {
                        AppError::Config("Anthropic API key is not set".to_string())
                    })?;
                ProviderClient::Anthropic(Anthropic::new(
                    api_key,
                    provider_config.endpoint.clone(),
                    timeout,
                ))
            }
        };

        Ok(Self {
            client,
            model: provider_config.model.clone(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        })
    }

    /// System prompt instructing the model to translate while preserving
    /// the Markdown format
    fn system_prompt(&self) -> String {
        format!(
            "You are a professional translator. Translate the following {} markdown text to {}, preserving the markdown format.",
            self.source_language, self.target_language
        )
    }

    /// Issue a minimal request to verify the provider is reachable
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        match &self.client {
            ProviderClient::Ollama(client) => client.test_connection(&self.model).await,
            ProviderClient::OpenAI(client) => client.test_connection(&self.model).await,
            ProviderClient::Anthropic(client) => client.test_connection(&self.model).await,
        }
    }
}

#[async_trait]
impl ChunkTranslator for TranslationService {
    async fn translate_chunk(&self, text: &str) -> Result<String, TranslationError> {
        debug!("Translation request for {} bytes", text.len());

        let translated = match &self.client {
            ProviderClient::Ollama(client) => {
                let request = GenerationRequest::new(&self.model, text)
                    .system(self.system_prompt())
                    .temperature(0.0);
                let response = client.complete(request).await?;
                Ollama::extract_text(&response)
            }
            ProviderClient::OpenAI(client) => {
                let request = OpenAIRequest::new(&self.model, MAX_COMPLETION_TOKENS)
                    .add_message("system", self.system_prompt())
                    .add_message("user", text)
                    .temperature(0.0);
                let response = client.complete(request).await?;
                OpenAI::extract_text(&response)
            }
            ProviderClient::Anthropic(client) => {
                let request = AnthropicRequest::new(&self.model, MAX_COMPLETION_TOKENS)
                    .system(self.system_prompt())
                    .add_message("user", text)
                    .temperature(0.0);
                let response = client.complete(request).await?;
                Anthropic::extract_text(&response)
            }
        };

        Ok(translated)
    }
}
