//! 工具栏上下文
//!
//! 持有引擎的 `VerbDispatcher`，把它的状态与提示镜像到信号中，
//! 并把所有异步操作派发到 wasm 执行器。

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use verbbar::{AlertState, ToolbarConfig, ToolbarState, VerbDispatcher};
use verbbar_shared::{Credentials, FormPayload, Verb};

use crate::api::PostsApi;
use crate::auth::AuthContext;
use crate::web::router::RouterService;
use crate::web::runtime::WebRuntime;

pub type AppDispatcher = VerbDispatcher<WebRuntime, AuthContext, PostsApi, RouterService>;

#[derive(Clone, Copy)]
pub struct ToolbarContext {
    dispatcher: StoredValue<Rc<AppDispatcher>, LocalStorage>,
    pub state: RwSignal<ToolbarState>,
    pub alerts: RwSignal<AlertState>,
}

impl ToolbarContext {
    pub fn dispatcher(&self) -> Rc<AppDispatcher> {
        self.dispatcher.get_value()
    }

    pub fn dispatch(&self, verb: Verb, path: String) {
        let dispatcher = self.dispatcher();
        spawn_local(async move {
            let outcome = dispatcher.dispatch(verb, &path).await;
            tracing::debug!(%verb, %path, ?outcome, "dispatch finished");
        });
    }

    pub fn submit_create(&self, payload: FormPayload) {
        let dispatcher = self.dispatcher();
        spawn_local(async move {
            dispatcher.submit_create(payload).await;
        });
    }

    pub fn submit_update(&self, payload: FormPayload) {
        let dispatcher = self.dispatcher();
        spawn_local(async move {
            dispatcher.submit_update(payload).await;
        });
    }

    pub fn confirm_delete(&self) {
        let dispatcher = self.dispatcher();
        spawn_local(async move {
            dispatcher.confirm_delete().await;
        });
    }

    pub fn login(&self, credentials: Credentials) {
        let dispatcher = self.dispatcher();
        spawn_local(async move {
            dispatcher.login(credentials).await;
        });
    }

    pub fn cancel_modal(&self) {
        self.dispatcher().cancel_modal();
    }

    pub fn cancel_auth(&self) {
        self.dispatcher().cancel_auth();
    }

    pub fn dismiss_error(&self) {
        self.dispatcher().dismiss_error();
    }

    pub fn logout(&self) {
        self.dispatcher().logout();
    }
}

pub fn provide_toolbar(
    config: &ToolbarConfig,
    auth: AuthContext,
    api: PostsApi,
    router: RouterService,
) -> ToolbarContext {
    let dispatcher = Rc::new(VerbDispatcher::new(config, WebRuntime, auth, api, router));

    let state = RwSignal::new(dispatcher.state());
    let alerts = RwSignal::new(dispatcher.alerts().state());
    dispatcher.subscribe(move |s| state.set(s.clone()));
    dispatcher.alerts().subscribe(move |a| alerts.set(*a));

    let ctx = ToolbarContext {
        dispatcher: StoredValue::new_local(dispatcher),
        state,
        alerts,
    };
    provide_context(ctx);
    ctx
}

pub fn use_toolbar() -> ToolbarContext {
    use_context::<ToolbarContext>().expect("ToolbarContext should be provided")
}
