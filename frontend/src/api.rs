//! 文章 API 客户端
//!
//! 所有端点都由 `verbbar_shared::protocol` 中的 `ApiRequest` 描述，
//! 这里只负责拼接 URL、附带会话令牌并把失败映射为 `ToolbarError`。

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use verbbar::dispatcher::STATUS_UNAUTHORIZED;
use verbbar::{PostMutations, ToolbarError, ToolbarResult};
use verbbar_shared::protocol::{
    ApiRequest, CreatePostRequest, DeletePostRequest, GetPostRequest, ListPostsRequest,
    LoginRequest, UpdatePostRequest,
};
use verbbar_shared::{Credentials, CurrentResource, FormPayload, HEADER_AUTH_TOKEN, Verb};

#[derive(Clone)]
pub struct PostsApi {
    base_url: String,
    /// 当前会话令牌，由认证上下文派生
    token: Signal<Option<String>>,
}

impl PostsApi {
    pub fn new(base_url: &str, token: Signal<Option<String>>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn builder(&self, method: Verb, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = match method {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        };
        match self.token.get_untracked() {
            Some(token) => builder.header(HEADER_AUTH_TOKEN, &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// 发送请求并检查状态码，失败时尽量带上服务端返回的消息
    async fn call<R: ApiRequest>(&self, req: &R) -> ToolbarResult<Response> {
        let res = self
            .builder(R::METHOD, R::PATH)
            .json(req)
            .map_err(|e| ToolbarError::mutation(None, e.to_string()))?
            .send()
            .await
            .map_err(|e| ToolbarError::mutation(None, e.to_string()))?;

        if !res.ok() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("{} {} failed: {}", R::METHOD, R::PATH, status)
            } else {
                body
            };
            tracing::warn!(path = R::PATH, status, "api request failed");
            return Err(ToolbarError::mutation(Some(status), message));
        }
        Ok(res)
    }

    async fn send<R: ApiRequest>(&self, req: &R) -> ToolbarResult<R::Response> {
        let res = self.call(req).await?;
        res.json::<R::Response>()
            .await
            .map_err(|e| ToolbarError::mutation(None, e.to_string()))
    }

    /// 读取单篇文章，不存在时返回 `None`
    pub async fn get_post(&self, category: &str, slug: &str) -> ToolbarResult<Option<CurrentResource>> {
        self.send(&GetPostRequest {
            category: category.to_string(),
            slug: slug.to_string(),
        })
        .await
    }

    pub async fn list_posts(&self, category: &str) -> ToolbarResult<Vec<CurrentResource>> {
        self.send(&ListPostsRequest {
            category: category.to_string(),
        })
        .await
    }

    /// 凭据无效时返回 `Ok(None)`
    pub async fn login(&self, credentials: &Credentials) -> ToolbarResult<Option<String>> {
        let req = LoginRequest {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        };
        match self.send(&req).await {
            Ok(res) => Ok(Some(res.token)),
            Err(e) if e.status_code() == STATUS_UNAUTHORIZED => Ok(None),
            Err(e) => Err(ToolbarError::Auth(e.to_string())),
        }
    }
}

#[async_trait(?Send)]
impl PostMutations for PostsApi {
    async fn create(&self, payload: &FormPayload) -> ToolbarResult<()> {
        let req = CreatePostRequest {
            payload: payload.clone(),
        };
        self.call(&req).await.map(|_| ())
    }

    async fn update(&self, id: &str, payload: &FormPayload) -> ToolbarResult<()> {
        let req = UpdatePostRequest {
            id: id.to_string(),
            payload: payload.clone(),
        };
        self.call(&req).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> ToolbarResult<()> {
        let req = DeletePostRequest { id: id.to_string() };
        self.call(&req).await.map(|_| ())
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://x.dev", "/api/posts"), "https://x.dev/api/posts");
        assert_eq!(join_url("", "api/posts"), "/api/posts");
    }
}
