//! LocalStorage 封装模块
//!
//! 以 JSON 形式存取带类型的值，解析失败视为不存在。

use serde::Serialize;
use serde::de::DeserializeOwned;

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 键不存在、存储不可用或内容无法解析时返回 `None`
    pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
        let raw = Self::storage()?.get_item(key).ok()??;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, "discarding unreadable stored value: {e}");
                None
            }
        }
    }

    pub fn store<T: Serialize>(key: &str, value: &T) -> bool {
        let Ok(raw) = serde_json::to_string(value) else {
            return false;
        };
        Self::storage()
            .and_then(|s| s.set_item(key, &raw).ok())
            .is_some()
    }

    pub fn remove(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
