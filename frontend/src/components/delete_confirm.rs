use leptos::prelude::*;
use verbbar::Modal;

use crate::toolbar::use_toolbar;

/// 删除确认框，显示页面提供的资源标题
#[component]
pub fn DeleteConfirmDialog() -> impl IntoView {
    let toolbar = use_toolbar();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let (deleting, set_deleting) = signal(false);

    let title = Memo::new(move |_| {
        toolbar.state.with(|s| match &s.modal {
            Modal::DeleteConfirm { resource } => Some(resource.title.clone()),
            _ => None,
        })
    });

    Effect::new(move |_| {
        let open = title.with(Option::is_some);
        set_deleting.set(false);
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

    let on_confirm = move |_| {
        set_deleting.set(true);
        toolbar.confirm_delete();
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| toolbar.cancel_modal()>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Delete post"</h3>
                <p class="py-4">
                    "Delete "
                    <span class="font-semibold">{move || title.get().unwrap_or_default()}</span>
                    "? This cannot be undone."
                </p>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| toolbar.cancel_modal()>
                        "Cancel"
                    </button>
                    <button type="button" class="btn btn-error" disabled=move || deleting.get() on:click=on_confirm>
                        {move || if deleting.get() {
                            view! { <span class="loading loading-spinner"></span> "Deleting..." }.into_any()
                        } else {
                            "Delete".into_any()
                        }}
                    </button>
                </div>
            </div>
        </dialog>
    }
}
