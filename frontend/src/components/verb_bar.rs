//! 方法工具栏
//!
//! 方法选择、路径输入（带自动补全）、发送按钮，以及两类瞬时提示。

use leptos::prelude::*;
use verbbar::ErrorStatus;
use verbbar_shared::Verb;

use crate::auth::use_auth;
use crate::toolbar::use_toolbar;
use crate::web::router::use_router;

fn verb_badge(verb: Verb) -> &'static str {
    match verb {
        Verb::Get => "badge-success",
        Verb::Post => "badge-info",
        Verb::Put => "badge-warning",
        Verb::Patch => "badge-accent",
        Verb::Delete => "badge-error",
    }
}

#[component]
pub fn VerbBar() -> impl IntoView {
    let toolbar = use_toolbar();
    let router = use_router();
    let is_authenticated = use_auth().is_authenticated_signal();

    let (verb, set_verb) = signal(Verb::Get);
    let (path, set_path) = signal(router.current_path().get_untracked());

    // 生效方法被回退时（例如取消登录）同步选择框
    Effect::new(move |_| {
        set_verb.set(toolbar.state.with(|s| s.active_verb));
    });

    // 页面内跳转后同步路径输入
    Effect::new(move |_| {
        set_path.set(router.current_path().get());
    });

    let suggestions = move || {
        let prefix = path.get();
        toolbar
            .dispatcher()
            .classifier()
            .suggest(&prefix)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let target = path.get_untracked();
        let target = if target.trim().is_empty() {
            "/".to_string()
        } else {
            target.trim().to_string()
        };
        toolbar.dispatch(verb.get_untracked(), target);
    };

    let on_logout = move |_| toolbar.logout();

    view! {
        <div class="navbar bg-base-100 shadow-xl sticky top-0 z-40 gap-2">
            <form class="flex-1 join" on:submit=on_submit>
                <select
                    class="select select-bordered join-item font-mono"
                    on:change=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<Verb>() {
                            set_verb.set(v);
                        }
                    }
                >
                    {Verb::ALL
                        .into_iter()
                        .map(|v| view! {
                            <option value=v.as_str() selected=move || verb.get() == v>{v.as_str()}</option>
                        })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    list="verbbar-paths"
                    class="input input-bordered join-item w-full font-mono"
                    placeholder="/blog/my-slug"
                    on:input=move |ev| set_path.set(event_target_value(&ev))
                    prop:value=path
                />
                <datalist id="verbbar-paths">
                    <For
                        each=suggestions
                        key=|s| s.clone()
                        children=|s| view! { <option value=s></option> }
                    />
                </datalist>
                <button type="submit" class="btn btn-primary join-item">"Send"</button>
            </form>

            <div class="flex-none gap-2">
                <span class=move || format!("badge font-mono {}", verb_badge(toolbar.state.with(|s| s.active_verb)))>
                    {move || toolbar.state.with(|s| s.active_verb.as_str())}
                </span>
                <Show when=move || toolbar.state.with(|s| s.status.is_some())>
                    <span class="badge badge-outline font-mono">
                        {move || toolbar.state.with(|s| s.status.unwrap_or_default())}
                    </span>
                </Show>
                <Show when=move || is_authenticated.get()>
                    <button on:click=on_logout class="btn btn-outline btn-sm">"Sign out"</button>
                </Show>
            </div>
        </div>

        <AlertToasts />
    }
}

/// 方法切换 / 方法不被允许两类提示各自自动消失；
/// 其余错误（资源不可用、变更失败）在没有表单承载时以可关闭的提示显示
#[component]
fn AlertToasts() -> impl IntoView {
    let toolbar = use_toolbar();

    let rejected_status = ErrorStatus::MethodNotAllowed.status_code();
    let stray_error = Memo::new(move |_| {
        if toolbar.alerts.with(|a| a.method_rejected.is_some()) {
            return None;
        }
        toolbar.state.with(|s| {
            // 405 只由限时提示展示
            if s.modal.is_flow() || s.modal.is_auth_prompt() || s.status == Some(rejected_status) {
                None
            } else {
                s.error.clone()
            }
        })
    });

    view! {
        <div class="toast toast-top toast-end z-50">
            <Show when=move || toolbar.alerts.with(|a| a.method_changed)>
                <div class="alert alert-info shadow-lg">
                    <span>
                        {move || format!("Method switched to {}", toolbar.state.with(|s| s.active_verb))}
                    </span>
                </div>
            </Show>
            <Show when=move || toolbar.alerts.with(|a| a.method_rejected.is_some())>
                <div class="alert alert-error shadow-lg">
                    <span>
                        {move || {
                            let verb = toolbar.alerts.with(|a| a.method_rejected).unwrap_or_default();
                            let detail = toolbar.state.with(|s| s.error.clone()).unwrap_or_default();
                            format!("405 Method Not Allowed ({verb}): {detail}")
                        }}
                    </span>
                </div>
            </Show>
            {move || stray_error.get().map(|message| view! {
                <div role="alert" class="alert alert-warning shadow-lg">
                    <span>
                        {move || toolbar.state.with(|s| s.status).map(|code| format!("{code} ")).unwrap_or_default()}
                        {message}
                    </span>
                    <button class="btn btn-ghost btn-xs" on:click=move |_| toolbar.dismiss_error()>"✕"</button>
                </div>
            })}
        </div>
    }
}
