use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTH_TOKEN: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 工具栏中可选择的模拟 HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub const ALL: [Verb; 5] = [Verb::Get, Verb::Post, Verb::Put, Verb::Patch, Verb::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb(pub String);

impl fmt::Display for UnknownVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown verb: {}", self.0)
    }
}

impl std::error::Error for UnknownVerb {}

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVerb(s.to_string()))
    }
}

/// 路径对应的资源类别（派生值，从不存储）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Blog,
    Static,
    Interactive,
    Unknown,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Blog => "blog",
            ResourceKind::Static => "static",
            ResourceKind::Interactive => "interactive",
            ResourceKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 路径的结构信息
///
/// `is_detail` 只看段数（恰好两段 `/{category}/{slug}`），与类别是否已知无关。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathShape {
    pub category: String,
    pub is_detail: bool,
}

/// 当前页面已加载的资源快照
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentResource {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CurrentResource {
    pub fn category_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.category.as_deref().unwrap_or(fallback)
    }
}

/// 创建 / 编辑表单提交的数据
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPayload {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_alt: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_alt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
}

impl From<&CurrentResource> for FormPayload {
    fn from(resource: &CurrentResource) -> Self {
        Self {
            title: resource.title.clone(),
            title_alt: resource.title_alt.clone(),
            subtitle: resource.subtitle.clone(),
            subtitle_alt: resource.subtitle_alt.clone(),
            body: resource.body.clone().unwrap_or_default(),
            body_alt: resource.body_alt.clone(),
            tags: resource.tags.clone().unwrap_or_default(),
            category: resource.category.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_parse_is_case_insensitive() {
        assert_eq!("delete".parse::<Verb>(), Ok(Verb::Delete));
        assert_eq!(" Patch ".parse::<Verb>(), Ok(Verb::Patch));
        assert!("TRACE".parse::<Verb>().is_err());
    }

    #[test]
    fn test_verb_serializes_uppercase() {
        let json = serde_json::to_string(&Verb::Put).unwrap();
        assert_eq!(json, "\"PUT\"");
    }

    #[test]
    fn test_resource_wire_format_uses_camel_case() {
        let json = r#"{"id":"42","title":"X","titleAlt":"Y","tags":["rust"]}"#;
        let resource: CurrentResource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.title_alt.as_deref(), Some("Y"));
        assert_eq!(resource.category, None);
    }

    #[test]
    fn test_form_payload_prefill_from_resource() {
        let resource = CurrentResource {
            id: "42".into(),
            title: "Hello".into(),
            body: Some("text".into()),
            category: Some("blog".into()),
            ..Default::default()
        };
        let payload = FormPayload::from(&resource);
        assert_eq!(payload.title, "Hello");
        assert_eq!(payload.body, "text");
        assert_eq!(payload.category, "blog");
        assert!(payload.tags.is_empty());
    }
}
