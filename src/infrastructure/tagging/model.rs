// src/infrastructure/tagging/model.rs
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Request/response shapes for the chat-completions endpoint, reduced to
/// the fields this crate uses.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub response_format: ResponseFormat,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
    pub json_schema: JsonSchemaFormat,
}

#[derive(Debug, Serialize)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub schema: Value,
}

impl ResponseFormat {
    /// Constrain output to the four-field tag object. All fields optional,
    /// nothing else allowed, so `strict` stays off.
    pub fn tag_record() -> Self {
        Self {
            kind: "json_schema".to_string(),
            json_schema: JsonSchemaFormat {
                name: "entry_tags".to_string(),
                schema: json!({
                    "type": "object",
                    "properties": {
                        "todo": { "type": "boolean", "description": "是否是待办事项或任务" },
                        "person": { "type": "string", "description": "涉及的人物，如：张三、李四、团队、客户等" },
                        "time": { "type": "string", "description": "时间信息，如：今天、明天、下周、3月15日等" },
                        "product": { "type": "string", "description": "产品或网站名称，如：GitHub、微信、淘宝等" }
                    },
                    "additionalProperties": false
                }),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: String,
}
