//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 同时作为工具栏的导航协作者：GET 跳转、删除后回到分类页、数据失效后刷新。

use leptos::prelude::*;
use verbbar::classifier::normalize;
use verbbar::{Navigator, PathClassifier, ToolbarError, ToolbarResult};
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径（含查询串）
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| {
            let location = w.location();
            let path = location.pathname().ok()?;
            let search = location.search().unwrap_or_default();
            Some(format!("{path}{search}"))
        })
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) -> ToolbarResult<()> {
    let window = web_sys::window().ok_or_else(|| ToolbarError::navigation(path, "no window"))?;
    let history = window
        .history()
        .map_err(|e| ToolbarError::navigation(path, format!("{e:?}")))?;
    history
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .map_err(|e| ToolbarError::navigation(path, format!("{e:?}")))
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 当前完整路径，交互页面据此识别子路由
    current_path: RwSignal<String>,
    /// 数据版本号，失效时递增，页面据此重新获取
    revision: RwSignal<u64>,
    classifier: StoredValue<PathClassifier>,
}

impl RouterService {
    fn new(classifier: PathClassifier) -> Self {
        let path = current_path();
        let initial_route = AppRoute::from_path(&path, &classifier);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            current_path: RwSignal::new(path),
            revision: RwSignal::new(0),
            classifier: StoredValue::new(classifier),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn current_path(&self) -> RwSignal<String> {
        self.current_path
    }

    pub fn revision(&self) -> RwSignal<u64> {
        self.revision
    }

    fn resolve(&self, path: &str) -> AppRoute {
        self.classifier.with_value(|c| AppRoute::from_path(path, c))
    }

    /// 页面内链接使用，失败只记录日志
    pub fn navigate(&self, path: &str) {
        if let Err(e) = Navigator::navigate_to(self, path) {
            tracing::warn!(path, "navigation failed: {e}");
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            router.set_route.set(router.resolve(&path));
            router.current_path.set(path);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

impl Navigator for RouterService {
    fn navigate_to(&self, path: &str) -> ToolbarResult<()> {
        let target = self.resolve(path);
        push_history_state(path)?;
        tracing::debug!(path, route = %target, "navigate");

        self.current_path.set(path.to_string());
        self.set_route.set(target.clone());
        // 同一路径的 GET 也要重新读取
        self.revision.update(|r| *r += 1);

        if target == AppRoute::NotFound {
            return Err(ToolbarError::navigation(path, "no page matches this path"));
        }
        Ok(())
    }

    fn invalidate(&self, path: &str) {
        let current = normalize(&self.current_path.get_untracked());
        if normalize(path) == current {
            tracing::debug!(path, "current page invalidated");
            self.revision.update(|r| *r += 1);
        }
    }
}

/// 提供路由服务到 Context 并初始化
///
/// 工具栏需要把路由服务作为导航协作者，因此在 App 根部直接调用。
pub fn provide_router(classifier: PathClassifier) -> RouterService {
    let router = RouterService::new(classifier);
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure provide_router is called.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接，点击时走路由服务而不是整页刷新
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
