// src/infrastructure/tagging/openai_provider.rs
use std::env;

use tracing::{debug, instrument};

use crate::domain::tag_record::TagRecord;
use crate::domain::tagging::{TagExtractor, TaggingError, TaggingResult};
use crate::infrastructure::tagging::model::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat,
};

/// Tag extraction via OpenAI's chat completions API with a fixed output
/// schema. The API key is read from `OPENAI_API_KEY` at call time.
#[derive(Debug, Clone)]
pub struct OpenAiTagExtractor {
    url: String,
    model: String,
}

impl Default for OpenAiTagExtractor {
    fn default() -> Self {
        Self {
            url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl OpenAiTagExtractor {
    pub fn new(url: String, model: String) -> Self {
        Self { url, model }
    }

    /// Instruction set for the model: evaluation order task -> person ->
    /// time -> product, short locale-idiomatic labels, any field omissible.
    fn build_prompt(text: &str) -> String {
        format!(
            r#"请按照以下顺序分析输入文本，并提取相应标签：

输入文本：{}

分析顺序和标记规则：
1. 是否是todo（待办事项）？
   - 必须包含明确的时间点，比如前后、xx日期；如果包含需要执行的时间、任务、计划、目标等，标记为 todo: true
   - 普通陈述不要标记
2. 有人物吗？
   - 提取具体人名、角色、团体等
   - 如：张三、李经理、开发团队、客户、用户等
   - 标记在 person 字段
3. 有时间信息吗？
   - 提取明确的时间表达，相对或绝对均可
   - 如：今天、明天、下周、3月15日等
   - 标记在 time 字段
4. 有网址或产品吗？
   - 提取网站、应用、产品名称
   - 如：GitHub、微信、淘宝、百度、ChatGPT等
   - 标记在 product 字段

注意：
- 如果同时符合多个条件，可以都标记
- 提取的标签应该简洁明了，通常1-4个字
- 要符合中文表达习惯
- 优先提取最明确和最重要的信息
- 如果某个维度不明确，可以不标记
"#,
            text
        )
    }

    fn parse_tag_content(content: &str) -> TaggingResult<TagRecord> {
        serde_json::from_str(content)
            .map_err(|e| TaggingError::InvalidResponse(format!("invalid tag JSON: {}", e)))
    }

    fn map_error_status(status: u16, body: &str) -> TaggingError {
        match status {
            401 => TaggingError::Unauthorized,
            402 => TaggingError::QuotaExhausted,
            429 if body.contains("insufficient_quota") || body.contains("quota") => {
                TaggingError::QuotaExhausted
            }
            429 => TaggingError::RateLimited,
            _ => TaggingError::RequestFailed(format!("OpenAI API returned {}: {}", status, body)),
        }
    }
}

impl TagExtractor for OpenAiTagExtractor {
    #[instrument(skip(text), fields(text_len = text.len()))]
    fn extract(&self, text: &str) -> TaggingResult<TagRecord> {
        debug!("OpenAI tag extraction request for text length: {}", text.len());

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| TaggingError::MissingApiKey)?;

        let client = reqwest::blocking::Client::new();

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Self::build_prompt(text),
            }],
            response_format: ResponseFormat::tag_record(),
            temperature: 0.0,
        };

        let response = client
            .post(format!("{}/v1/chat/completions", self.url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .map_err(|e| TaggingError::RequestFailed(format!("OpenAI API request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::map_error_status(status.as_u16(), &body));
        }

        let data: ChatCompletionResponse = response.json().map_err(|e| {
            TaggingError::InvalidResponse(format!("Failed to parse OpenAI response: {}", e))
        })?;

        let content = data
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| TaggingError::InvalidResponse("empty choices array".to_string()))?;

        Self::parse_tag_content(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{init_test_env, EnvGuard};
    use serial_test::serial;

    #[test]
    #[serial]
    fn given_missing_api_key_when_extracting_then_returns_configuration_error() {
        let _ = init_test_env();
        let _guard = EnvGuard::new();
        env::remove_var("OPENAI_API_KEY");

        let extractor = OpenAiTagExtractor::default();
        let result = extractor.extract("明天和张三讨论GitHub项目进展");

        assert_eq!(result.unwrap_err(), TaggingError::MissingApiKey);
    }

    #[test]
    fn given_model_content_when_parsed_then_returns_record() {
        let record = OpenAiTagExtractor::parse_tag_content(
            r#"{"todo":true,"person":"张三","time":"明天","product":"GitHub"}"#,
        )
        .unwrap();
        assert_eq!(record.person.as_deref(), Some("张三"));
        assert_eq!(record.todo, Some(true));
    }

    #[test]
    fn given_stray_generic_tag_field_when_parsed_then_it_is_ignored() {
        let record =
            OpenAiTagExtractor::parse_tag_content(r#"{"product":"GitHub","tag":"产品"}"#).unwrap();
        assert_eq!(record.product.as_deref(), Some("GitHub"));
        assert!(record.person.is_none());
    }

    #[test]
    fn given_upstream_status_when_mapped_then_error_kinds_are_distinct() {
        assert_eq!(
            OpenAiTagExtractor::map_error_status(401, ""),
            TaggingError::Unauthorized
        );
        assert_eq!(
            OpenAiTagExtractor::map_error_status(429, "{\"error\":{\"code\":\"rate_limit_exceeded\"}}"),
            TaggingError::RateLimited
        );
        assert_eq!(
            OpenAiTagExtractor::map_error_status(429, "{\"error\":{\"code\":\"insufficient_quota\"}}"),
            TaggingError::QuotaExhausted
        );
        assert!(matches!(
            OpenAiTagExtractor::map_error_status(500, "boom"),
            TaggingError::RequestFailed(_)
        ));
    }

    #[test]
    #[serial]
    fn given_live_api_key_when_extracting_scenario_then_returns_expected_tags() {
        let _ = init_test_env();
        if env::var("OPENAI_API_KEY").is_err() {
            // exit early if no API key is set
            eprintln!("OPENAI_API_KEY environment variable not set");
            return;
        }

        let extractor = OpenAiTagExtractor::default();
        let tags = extractor.extract("明天和张三讨论GitHub项目进展").unwrap();

        assert_eq!(tags.person.as_deref(), Some("张三"));
        assert_eq!(tags.time.as_deref(), Some("明天"));
        assert_eq!(tags.product.as_deref(), Some("GitHub"));
    }
}
