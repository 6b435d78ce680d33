//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 从当前资源预填
//! - 数据到 `FormPayload` 的转换

use leptos::prelude::*;
use verbbar_shared::{CurrentResource, FormPayload};

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub title: RwSignal<String>,
    pub title_alt: RwSignal<String>,
    pub subtitle: RwSignal<String>,
    pub subtitle_alt: RwSignal<String>,
    pub body: RwSignal<String>,
    pub body_alt: RwSignal<String>,
    /// 逗号分隔
    pub tags: RwSignal<String>,
    pub category: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            title_alt: RwSignal::new(String::new()),
            subtitle: RwSignal::new(String::new()),
            subtitle_alt: RwSignal::new(String::new()),
            body: RwSignal::new(String::new()),
            body_alt: RwSignal::new(String::new()),
            tags: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
        }
    }

    /// 重置为空白的创建表单
    pub fn reset(&self, category: &str) {
        self.title.set(String::new());
        self.title_alt.set(String::new());
        self.subtitle.set(String::new());
        self.subtitle_alt.set(String::new());
        self.body.set(String::new());
        self.body_alt.set(String::new());
        self.tags.set(String::new());
        self.category.set(category.to_string());
    }

    /// 用页面提供的资源预填编辑表单
    pub fn fill(&self, resource: &CurrentResource) {
        let payload = FormPayload::from(resource);
        self.title.set(payload.title);
        self.title_alt.set(payload.title_alt.unwrap_or_default());
        self.subtitle.set(payload.subtitle.unwrap_or_default());
        self.subtitle_alt.set(payload.subtitle_alt.unwrap_or_default());
        self.body.set(payload.body);
        self.body_alt.set(payload.body_alt.unwrap_or_default());
        self.tags.set(join_tags(&payload.tags));
        self.category.set(payload.category);
    }

    pub fn to_payload(&self) -> FormPayload {
        FormPayload {
            title: self.title.get().trim().to_string(),
            title_alt: non_empty(self.title_alt.get()),
            subtitle: non_empty(self.subtitle.get()),
            subtitle_alt: non_empty(self.subtitle_alt.get()),
            body: self.body.get(),
            body_alt: non_empty(self.body_alt.get()),
            tags: split_tags(&self.tags.get()),
            category: self.category.get(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// `"rust, wasm,,"` -> `["rust", "wasm"]`
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_drops_blanks() {
        assert_eq!(split_tags("rust, wasm,, "), vec!["rust", "wasm"]);
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn test_tags_survive_join_and_split() {
        let tags = vec!["a".to_string(), "b c".to_string()];
        assert_eq!(split_tags(&join_tags(&tags)), tags);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty("x".into()), Some("x".into()));
    }
}
