//! 创建 / 编辑文章对话框
//!
//! 由工具栏状态驱动：`Modal::CreateForm` 打开空白表单，
//! `Modal::EditForm` 用页面提供的资源预填。

mod form_state;

use leptos::prelude::*;
use verbbar::Modal;

use crate::toolbar::use_toolbar;
use form_state::FormState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Closed,
    Create,
    Edit,
}

#[component]
pub fn PostFormDialog() -> impl IntoView {
    let toolbar = use_toolbar();
    let form = FormState::new();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (submitting, set_submitting) = signal(false);

    let mode = Memo::new(move |_| {
        toolbar.state.with(|s| match &s.modal {
            Modal::CreateForm { .. } => Mode::Create,
            Modal::EditForm { .. } => Mode::Edit,
            _ => Mode::Closed,
        })
    });

    // 表单打开时预填
    Effect::new(move |_| {
        let opened = mode.get();
        toolbar.state.with_untracked(|s| match &s.modal {
            Modal::CreateForm { category } => form.reset(category),
            Modal::EditForm { resource } => form.fill(resource),
            _ => {}
        });
        set_submitting.set(false);

        if let Some(dialog) = dialog_ref.get() {
            if opened != Mode::Closed {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    // 提交失败时表单保持打开，恢复按钮
    Effect::new(move |_| {
        if toolbar.state.with(|s| s.error.is_some()) {
            set_submitting.set(false);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        let payload = form.to_payload();
        match mode.get_untracked() {
            Mode::Create => toolbar.submit_create(payload),
            Mode::Edit => toolbar.submit_update(payload),
            Mode::Closed => set_submitting.set(false),
        }
    };

    let heading = move || match mode.get() {
        Mode::Edit => "Edit post",
        _ => "New post",
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| toolbar.cancel_modal()>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg">{heading}</h3>
                <p class="py-2 text-base-content/70">
                    {move || format!("Category: {}", form.category.get())}
                </p>

                <Show when=move || toolbar.state.with(|s| s.error.is_some())>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>
                            {move || {
                                let state = toolbar.state.get();
                                format!("{} {}", state.status.unwrap_or_default(), state.error.unwrap_or_default())
                            }}
                        </span>
                    </div>
                </Show>

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="title" class="label">
                                <span class="label-text">"Title"</span>
                            </label>
                            <input id="title" required
                                type="text"
                                on:input=move |ev| form.title.set(event_target_value(&ev))
                                prop:value=move || form.title.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="title_alt" class="label">
                                <span class="label-text">"Alternate title"</span>
                            </label>
                            <input id="title_alt"
                                type="text"
                                on:input=move |ev| form.title_alt.set(event_target_value(&ev))
                                prop:value=move || form.title_alt.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="subtitle" class="label">
                                <span class="label-text">"Subtitle"</span>
                            </label>
                            <input id="subtitle"
                                type="text"
                                on:input=move |ev| form.subtitle.set(event_target_value(&ev))
                                prop:value=move || form.subtitle.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="subtitle_alt" class="label">
                                <span class="label-text">"Alternate subtitle"</span>
                            </label>
                            <input id="subtitle_alt"
                                type="text"
                                on:input=move |ev| form.subtitle_alt.set(event_target_value(&ev))
                                prop:value=move || form.subtitle_alt.get()
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="body" class="label">
                            <span class="label-text">"Body"</span>
                        </label>
                        <textarea id="body"
                            class="textarea textarea-bordered h-40 w-full"
                            on:input=move |ev| form.body.set(event_target_value(&ev))
                            prop:value=move || form.body.get()
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label for="body_alt" class="label">
                            <span class="label-text">"Alternate body"</span>
                        </label>
                        <textarea id="body_alt"
                            class="textarea textarea-bordered h-24 w-full"
                            on:input=move |ev| form.body_alt.set(event_target_value(&ev))
                            prop:value=move || form.body_alt.get()
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label for="tags" class="label">
                            <span class="label-text">"Tags"</span>
                        </label>
                        <input id="tags"
                            type="text"
                            placeholder="rust, wasm"
                            on:input=move |ev| form.tags.set(event_target_value(&ev))
                            prop:value=move || form.tags.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| toolbar.cancel_modal()>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || submitting.get() class="btn btn-primary">
                            {move || if submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                            } else {
                                "Save".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
