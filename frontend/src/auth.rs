//! 认证模块
//!
//! 管理会话状态，并作为工具栏认证闸门的认证协作者。
//! 令牌只保存在内存中，LocalStorage 只记住上次的用户名。

use async_trait::async_trait;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use verbbar::{AuthProvider, ToolbarResult};
use verbbar_shared::Credentials;

use crate::api::PostsApi;
use crate::web::LocalStorage;

const STORAGE_LOGIN_KEY: &str = "verbbar_login";

/// 记住的登录信息，不含任何凭据
#[derive(Serialize, Deserialize)]
struct RememberedLogin {
    username: String,
}

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 会话令牌（仅在登录成功后存在）
    pub token: Option<String>,
    /// 上次登录的用户名，用于自动填充
    pub username: String,
}

/// 认证上下文
///
/// 包含读写信号与 API 客户端，通过 Context 在组件间共享。
#[derive(Clone)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
    api: PostsApi,
}

impl AuthContext {
    pub fn new(base_url: &str) -> Self {
        let (state, set_state) = signal(AuthState::default());
        let token = Signal::derive(move || state.get().token);
        Self {
            state,
            set_state,
            api: PostsApi::new(base_url, token),
        }
    }

    /// 共享当前会话令牌的 API 客户端
    pub fn api(&self) -> PostsApi {
        self.api.clone()
    }

    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().token.is_some())
    }
}

#[async_trait(?Send)]
impl AuthProvider for AuthContext {
    fn is_authenticated(&self) -> bool {
        self.state.with_untracked(|s| s.token.is_some())
    }

    async fn login(&self, credentials: Credentials) -> ToolbarResult<bool> {
        let Some(token) = self.api.login(&credentials).await? else {
            return Ok(false);
        };

        let remembered = RememberedLogin {
            username: credentials.username.clone(),
        };
        if !LocalStorage::store(STORAGE_LOGIN_KEY, &remembered) {
            tracing::debug!("could not remember username");
        }
        self.set_state.update(|state| {
            state.token = Some(token);
            state.username = credentials.username;
        });
        Ok(true)
    }

    /// 主动退出同时忘记用户名
    fn logout(&self) {
        LocalStorage::remove(STORAGE_LOGIN_KEY);
        self.set_state.set(AuthState::default());
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：从 LocalStorage 加载上次的用户名，但不恢复会话
pub fn init_auth(ctx: &AuthContext) {
    if let Some(RememberedLogin { username }) = LocalStorage::load(STORAGE_LOGIN_KEY) {
        ctx.set_state.update(|state| state.username = username);
    }
}
