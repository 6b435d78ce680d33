use leptos::prelude::*;
use leptos::task::spawn_local;
use verbbar::Modal;
use verbbar_shared::CurrentResource;

use crate::auth::use_auth;
use crate::toolbar::use_toolbar;
use crate::web::router::{Link, use_router};

#[component]
pub fn HomePage() -> impl IntoView {
    let toolbar = use_toolbar();
    let entries = toolbar.dispatcher().classifier().suggest("/");
    let entries: Vec<String> = entries.into_iter().map(str::to_string).collect();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-3xl">"verbbar"</h1>
                <p class="opacity-70">
                    "Pick a method, type a path, press Send. GET reads, POST creates, PUT edits, DELETE removes."
                </p>
                <ul class="menu">
                    {entries
                        .into_iter()
                        .map(|path| view! { <li><Link to=path.clone()>{path}</Link></li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// 博客分类列表
#[component]
pub fn CategoryPage(category: String) -> impl IntoView {
    let api = use_auth().api();
    let router = use_router();

    let (posts, set_posts) = signal(Vec::<CurrentResource>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let fetch_category = category.clone();
    Effect::new(move |_| {
        router.revision().track();
        let api = api.clone();
        let category = fetch_category.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_posts(&category).await {
                Ok(list) => {
                    set_posts.set(list);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let heading = category.clone();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-3xl capitalize">{heading}</h1>
                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <Show when=move || loading.get() && posts.with(Vec::is_empty)>
                    <span class="loading loading-spinner loading-md"></span>
                </Show>
                <Show when=move || !loading.get() && posts.with(Vec::is_empty)>
                    <p class="opacity-50">"No posts yet. Switch to POST and send to write one."</p>
                </Show>
                <ul class="menu">
                    <For
                        each=move || posts.get()
                        key=|p| p.id.clone()
                        children=move |p| {
                            let href = format!("/{}/{}", category, p.id);
                            view! {
                                <li>
                                    <Link to=href>
                                        <span class="font-semibold">{p.title}</span>
                                        {p.subtitle.map(|s| view! { <span class="opacity-60">{s}</span> })}
                                    </Link>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}

#[component]
pub fn StaticPage(name: String) -> impl IntoView {
    let body = match name.as_str() {
        "about" => "A small blog with a method toolbar on top.",
        "contact" => "Write to the author through the guestbook in the lab.",
        _ => "A static page.",
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-3xl capitalize">{name}</h1>
                <p>{body}</p>
            </div>
        </div>
    }
}

/// 交互页面：POST 到已登记的子路由时打开页面内模态框
#[component]
pub fn InteractivePage(page: String) -> impl IntoView {
    let toolbar = use_toolbar();
    let open_modal = Memo::new(move |_| {
        toolbar.state.with(|s| match &s.modal {
            Modal::Interactive { modal } => Some(modal.clone()),
            _ => None,
        })
    });

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-3xl capitalize">{page}</h1>
                <p class="opacity-70">"Send POST to one of this page's sub-routes to open it."</p>
                {move || open_modal.get().map(|modal| view! { <InteractiveModal modal /> })}
            </div>
        </div>
    }
}

#[component]
fn InteractiveModal(modal: String) -> impl IntoView {
    let toolbar = use_toolbar();
    let (entries, set_entries) = signal(Vec::<String>::new());
    let (draft, set_draft) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let line = draft.get().trim().to_string();
        if !line.is_empty() {
            set_entries.update(|list| list.push(line));
            set_draft.set(String::new());
        }
    };

    view! {
        <div class="bg-base-200 p-4 rounded-lg space-y-2">
            <div class="flex justify-between items-center">
                <h2 class="font-bold capitalize">{modal}</h2>
                <button class="btn btn-ghost btn-sm" on:click=move |_| toolbar.cancel_modal()>"Close"</button>
            </div>
            <ul class="font-mono text-sm">
                {move || entries.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
            </ul>
            <form class="join w-full" on:submit=on_submit>
                <input
                    type="text"
                    class="input input-bordered join-item w-full"
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    prop:value=draft
                />
                <button type="submit" class="btn join-item">"Add"</button>
            </form>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[50vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
            </div>
        </div>
    }
}
