/*!
 * Tests for provider request construction and response handling
 */

use mdtrans::providers::Provider;
use mdtrans::providers::anthropic::{Anthropic, AnthropicContent, AnthropicRequest, AnthropicResponse};
use mdtrans::providers::ollama::{GenerationRequest, GenerationResponse, Ollama};
use mdtrans::providers::openai::{OpenAI, OpenAIChoice, OpenAIMessage, OpenAIRequest, OpenAIResponse};

/// Test the OpenAI chat request wire shape
#[test]
fn test_openai_request_withMessages_shouldSerializeExpectedShape() {
    let request = OpenAIRequest::new("gpt-4o", 4096)
        .add_message("system", "translate")
        .add_message("user", "hello")
        .temperature(0.0);

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["model"], "gpt-4o");
    assert_eq!(value["max_tokens"], 4096);
    assert_eq!(value["temperature"], 0.0);
    assert_eq!(value["messages"].as_array().unwrap().len(), 2);
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][1]["content"], "hello");
}

/// Test that unset optional fields are omitted from the OpenAI request
#[test]
fn test_openai_request_withoutTemperature_shouldOmitField() {
    let request = OpenAIRequest::new("gpt-4o", 64).add_message("user", "hi");
    let value = serde_json::to_value(&request).unwrap();

    assert!(value.get("temperature").is_none());
}

/// Test text extraction from an OpenAI response
#[test]
fn test_openai_extract_text_withChoices_shouldTakeFirst() {
    let response = OpenAIResponse {
        choices: vec![OpenAIChoice {
            message: OpenAIMessage {
                role: "assistant".to_string(),
                content: "translated text".to_string(),
            },
        }],
        usage: None,
    };

    assert_eq!(OpenAI::extract_text(&response), "translated text");

    let empty = OpenAIResponse {
        choices: vec![],
        usage: None,
    };
    assert_eq!(OpenAI::extract_text(&empty), "");
}

/// Test the Anthropic request wire shape, including the system prompt
#[test]
fn test_anthropic_request_withSystem_shouldSerializeExpectedShape() {
    let request = AnthropicRequest::new("claude-3-5-sonnet-latest", 4096)
        .system("translate")
        .add_message("user", "hello")
        .temperature(0.0);

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["model"], "claude-3-5-sonnet-latest");
    assert_eq!(value["system"], "translate");
    assert_eq!(value["max_tokens"], 4096);
    assert_eq!(value["messages"][0]["role"], "user");
}

/// Test that Anthropic text extraction only collects text blocks
#[test]
fn test_anthropic_extract_text_withMixedBlocks_shouldFilterTextOnly() {
    let response = AnthropicResponse {
        content: vec![
            AnthropicContent {
                content_type: "text".to_string(),
                text: "hello ".to_string(),
            },
            AnthropicContent {
                content_type: "tool_use".to_string(),
                text: "ignored".to_string(),
            },
            AnthropicContent {
                content_type: "text".to_string(),
                text: "world".to_string(),
            },
        ],
    };

    assert_eq!(Anthropic::extract_text(&response), "hello world");
}

/// Test that the Ollama request disables streaming and carries the system
/// prompt
#[test]
fn test_ollama_request_withSystemPrompt_shouldSerializeExpectedShape() {
    let request = GenerationRequest::new("llama3.2:3b", "hello")
        .system("translate")
        .temperature(0.0);

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["model"], "llama3.2:3b");
    assert_eq!(value["prompt"], "hello");
    assert_eq!(value["system"], "translate");
    assert_eq!(value["stream"], false);
    assert_eq!(value["options"]["temperature"], 0.0);
}

/// Test text extraction from an Ollama response
#[test]
fn test_ollama_extract_text_withResponse_shouldReturnGeneratedText() {
    let response = GenerationResponse {
        model: "llama3.2:3b".to_string(),
        response: "translated".to_string(),
        done: true,
    };

    assert_eq!(Ollama::extract_text(&response), "translated");
}
