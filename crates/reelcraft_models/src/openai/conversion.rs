//! Conversion between Reelcraft and OpenAI chat completions types.

use super::dto::{ChatCompletionRequest, ChatCompletionResponse, ChatResponseFormat};
use reelcraft_core::{FinishReason, GenerateRequest, GenerateResponse, ResponseFormat};
use reelcraft_error::{OpenAiError, OpenAiErrorKind, ReelcraftResult};

/// Build a chat completions body from a generic request.
///
/// `default_model` is used when the request does not name a model.
pub fn to_chat_request(
    req: &GenerateRequest,
    default_model: &str,
) -> ReelcraftResult<ChatCompletionRequest> {
    let response_format = match req.response_format() {
        ResponseFormat::Text => None,
        ResponseFormat::JsonObject => Some(ChatResponseFormat::JsonObject),
    };

    ChatCompletionRequest::builder()
        .model(req.model().clone().unwrap_or_else(|| default_model.to_string()))
        .messages(req.messages().clone())
        .max_tokens(*req.max_tokens())
        .temperature(*req.temperature())
        .response_format(response_format)
        .build()
        .map_err(|e| OpenAiError::new(OpenAiErrorKind::RequestConversion(e.to_string())).into())
}

/// Convert a chat completions body to a generic response.
///
/// Only the first choice is used.
///
/// # Errors
///
/// Returns `EmptyResponse` if there is no choice or the choice has no content.
pub fn from_chat_response(resp: &ChatCompletionResponse) -> ReelcraftResult<GenerateResponse> {
    let choice = resp
        .choices()
        .first()
        .ok_or_else(|| OpenAiError::new(OpenAiErrorKind::EmptyResponse))?;

    let text = choice
        .message()
        .content()
        .clone()
        .ok_or_else(|| OpenAiError::new(OpenAiErrorKind::EmptyResponse))?;

    let mut response = GenerateResponse::new(text);
    if let Some(model) = resp.model() {
        response = response.with_model(model.clone());
    }
    if let Some(reason) = choice.finish_reason() {
        response = response.with_finish_reason(finish_reason(reason));
    }
    Ok(response)
}

fn finish_reason(raw: &str) -> FinishReason {
    match raw {
        "stop" => FinishReason::Stop,
        "length" => FinishReason::Length,
        "content_filter" => FinishReason::ContentFilter,
        _ => FinishReason::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelcraft_core::Message;

    #[test]
    fn json_mode_request_carries_response_format() {
        let req = GenerateRequest::builder()
            .messages(vec![Message::user("give me json")])
            .response_format(ResponseFormat::JsonObject)
            .build()
            .unwrap();

        let body = to_chat_request(&req, "gpt-4.1-nano").unwrap();
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "gpt-4.1-nano");
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "give me json");
    }

    #[test]
    fn text_request_omits_optional_fields() {
        let req = GenerateRequest::builder()
            .messages(vec![Message::user("hi")])
            .model(Some("gpt-4-turbo".to_string()))
            .build()
            .unwrap();

        let value = serde_json::to_value(to_chat_request(&req, "ignored").unwrap()).unwrap();

        assert_eq!(value["model"], "gpt-4-turbo");
        assert!(value.get("response_format").is_none());
        assert!(value.get("max_tokens").is_none());
        assert!(value.get("temperature").is_none());
    }

    #[test]
    fn response_text_and_finish_reason_are_extracted() {
        let resp: ChatCompletionResponse = serde_json::from_str(
            r#"{
                "id": "chatcmpl-1",
                "model": "gpt-4-turbo",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "hello"}, "finish_reason": "stop"}
                ]
            }"#,
        )
        .unwrap();

        let out = from_chat_response(&resp).unwrap();
        assert_eq!(out.text(), "hello");
        assert_eq!(out.model().as_deref(), Some("gpt-4-turbo"));
        assert_eq!(*out.finish_reason(), Some(FinishReason::Stop));
    }

    #[test]
    fn missing_content_is_an_error() {
        let resp: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(from_chat_response(&resp).is_err());

        let resp: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(from_chat_response(&resp).is_err());
    }
}
