//! 登录提示框
//!
//! 认证闸门暂存操作后弹出，显示上下文提示；登录成功后由分发器重放暂存的操作。

use leptos::prelude::*;
use verbbar::Modal;
use verbbar_shared::Credentials;

use crate::auth::use_auth;
use crate::toolbar::use_toolbar;

#[component]
pub fn AuthPrompt() -> impl IntoView {
    let auth = use_auth();
    let toolbar = use_toolbar();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let prompt = Memo::new(move |_| {
        toolbar.state.with(|s| match &s.modal {
            Modal::AuthPrompt { message, error } => Some((message.clone(), error.clone())),
            _ => None,
        })
    });
    let is_open = Memo::new(move |_| prompt.with(Option::is_some));

    Effect::new(move |_| {
        let open = is_open.get();
        if open {
            // 自动填充上次的用户名
            set_username.set(auth.state.with_untracked(|s| s.username.clone()));
            set_password.set(String::new());
        }
        set_is_submitting.set(false);

        if let Some(dialog) = dialog_ref.get() {
            if open {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    // 登录失败后恢复按钮
    Effect::new(move |_| {
        if prompt.with(|p| p.as_ref().is_some_and(|(_, e)| e.is_some())) {
            set_is_submitting.set(false);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            return;
        }
        set_is_submitting.set(true);
        toolbar.login(Credentials {
            username: username.get(),
            password: password.get(),
        });
    };

    let message = move || prompt.get().map(|(m, _)| m).unwrap_or_default();
    let error = move || prompt.get().and_then(|(_, e)| e);

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| toolbar.cancel_auth()>
            <div class="modal-box max-w-md">
                <h3 class="font-bold text-lg">"Sign in"</h3>
                <p class="py-2 text-base-content/70">{message}</p>

                <form on:submit=on_submit>
                    <Show when=move || error().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">"Username"</span>
                        </label>
                        <input
                            id="username"
                            type="text"
                            autocomplete="username"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">"Password"</span>
                        </label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            placeholder="••••••••"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| toolbar.cancel_auth()>
                            "Cancel"
                        </button>
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                            } else {
                                "Sign in".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
