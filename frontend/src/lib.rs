//! verbbar 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务，同时是工具栏的导航协作者
//! - `auth`: 会话状态，同时是认证协作者
//! - `toolbar`: 引擎分发器的上下文封装
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod delete_confirm;
    pub mod login;
    pub mod pages;
    pub mod post_form;
    pub mod post_page;
    pub mod verb_bar;
}
mod toolbar;

use crate::auth::{AuthContext, init_auth};
use crate::components::delete_confirm::DeleteConfirmDialog;
use crate::components::login::AuthPrompt;
use crate::components::pages::{CategoryPage, HomePage, InteractivePage, NotFoundPage, StaticPage};
use crate::components::post_form::PostFormDialog;
use crate::components::post_page::PostPage;
use crate::components::verb_bar::VerbBar;
use crate::toolbar::provide_toolbar;

use leptos::prelude::*;
use verbbar::{PathClassifier, ToolbarConfig};

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod route;
    pub mod router;
    pub mod runtime;
    mod storage;

    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{RouterOutlet, provide_router};

/// 后端地址，留空表示与页面同源
const API_BASE: &str = match option_env!("VERBBAR_API_BASE") {
    Some(base) => base,
    None => "",
};

/// 构建期注入的工具栏配置（JSON），缺省使用内置分类
fn load_config() -> ToolbarConfig {
    let Some(json) = option_env!("VERBBAR_CONFIG") else {
        return ToolbarConfig::default();
    };
    ToolbarConfig::from_json(json).unwrap_or_else(|e| {
        tracing::error!(error_code = e.error_code(), "falling back to default config: {e}");
        ToolbarConfig::default()
    })
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Category { category } => view! { <CategoryPage category /> }.into_any(),
        AppRoute::Post { category, slug } => view! { <PostPage category slug /> }.into_any(),
        AppRoute::Page { name } => view! { <StaticPage name /> }.into_any(),
        AppRoute::Interactive { page } => view! { <InteractivePage page /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    tracing::info!(
        blog = ?config.blog_categories,
        bridge_timeout_ms = config.bridge_timeout_ms,
        "verbbar starting"
    );

    // 1. 认证上下文（同时提供共享令牌的 API 客户端）
    let auth_ctx = AuthContext::new(API_BASE);
    init_auth(&auth_ctx);
    provide_context(auth_ctx.clone());

    // 2. 路由服务，与工具栏共用同一份分类配置
    let router = provide_router(PathClassifier::new(&config));

    // 3. 分发器：注入认证、变更与导航协作者
    provide_toolbar(&config, auth_ctx.clone(), auth_ctx.api(), router);

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <VerbBar />
            <main class="max-w-4xl mx-auto p-4 md:p-8">
                <RouterOutlet matcher=route_matcher />
            </main>
            <PostFormDialog />
            <DeleteConfirmDialog />
            <AuthPrompt />
        </div>
    }
}
