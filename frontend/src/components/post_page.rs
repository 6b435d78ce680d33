//! 单篇文章页面
//!
//! 挂载期间把已加载的文章注册为工具栏的资源提供者，卸载时随 owner 一起注销。

use leptos::prelude::*;
use leptos::task::spawn_local;
use verbbar::ResourceResponder;
use verbbar_shared::CurrentResource;

use crate::auth::use_auth;
use crate::toolbar::use_toolbar;
use crate::web::router::{Link, use_router};

#[component]
pub fn PostPage(category: String, slug: String) -> impl IntoView {
    let api = use_auth().api();
    let router = use_router();
    let toolbar = use_toolbar();

    let post = RwSignal::new(Option::<CurrentResource>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // 加载完成前应答为空，工具栏据此判定资源不可用
    let guard = toolbar
        .dispatcher()
        .bridge()
        .register(move |responder: ResourceResponder| {
            responder.reply(post.get_untracked());
        });
    let _registration = StoredValue::new_local(guard);

    let fetch_category = category.clone();
    Effect::new(move |_| {
        router.revision().track();
        let api = api.clone();
        let category = fetch_category.clone();
        let slug = slug.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api.get_post(&category, &slug).await {
                Ok(found) => {
                    post.set(found);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let back = format!("/{category}");

    view! {
        <article class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <Link to=back class="link link-hover text-sm opacity-70">"← back"</Link>
                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                {move || match post.get() {
                    Some(p) => view! {
                        <h1 class="card-title text-3xl">{p.title.clone()}</h1>
                        {p.subtitle.clone().map(|s| view! { <p class="text-lg opacity-70">{s}</p> })}
                        <div class="flex gap-2">
                            {p.tags.clone().unwrap_or_default().into_iter()
                                .map(|t| view! { <span class="badge badge-outline">{t}</span> })
                                .collect_view()}
                        </div>
                        <div class="prose max-w-none whitespace-pre-wrap">{p.body.clone().unwrap_or_default()}</div>
                    }.into_any(),
                    None if loading.get() => view! {
                        <span class="loading loading-spinner loading-md"></span>
                    }.into_any(),
                    None => view! { <p class="opacity-50">"This post does not exist."</p> }.into_any(),
                }}
            </div>
        </article>
    }
}
