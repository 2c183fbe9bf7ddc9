//! 统一登录页
//!
//! 员工与终端用户走同一个表单：`identifier` 原样送后端，
//! 由服务端判定身份类别。登录成功后的去向由会话流程统一
//! 计算（守卫记下的目的地 > redirectHint > 默认落地页）。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::icons::SquareParking;
use crate::mutation::{MutationState, use_mount_guard};
use crate::session::{apply_login, perform_login, use_api, use_session};
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_session();
    let api = use_api();
    let router = use_router();
    let guard = use_mount_guard();

    let (identifier, set_identifier) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (mutation, set_mutation) = signal(MutationState::Idle);

    let is_loading = move || ctx.state.get().is_loading;

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if identifier.get().is_empty() || password.get().is_empty() {
            set_mutation.set(MutationState::Failed("请输入账号和密码".to_string()));
            return;
        }
        // 提交中再点：丢弃
        if set_mutation.try_update(|m| m.begin()) != Some(true) {
            return;
        }

        let api = api.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let remembered = router.take_pending();
            let result = perform_login(
                &api,
                &identifier.get_untracked(),
                &password.get_untracked(),
                remembered,
            )
            .await;

            if !guard.alive() {
                return;
            }
            match result {
                Ok(outcome) => {
                    apply_login(&ctx, outcome.session);
                    set_mutation.set(MutationState::Succeeded);
                    router.navigate_route(outcome.landing);
                }
                Err(err) => set_mutation.set(MutationState::Failed(err.user_message())),
            }
        });
    };

    view! {
        <Show when=move || !is_loading() fallback=|| view! { <div class="flex items-center justify-center min-h-screen"><span class="loading loading-spinner loading-lg text-primary"></span></div> }>
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <SquareParking attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">"ParkDesk 泊车管理"</h1>
                            <p class="text-base-content/70">
                                "员工用户名或注册邮箱均可登录"
                            </p>
                        </div>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit.clone()>
                            <Show when=move || mutation.with(|m| m.error().is_some())>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
                                    <span>{move || mutation.with(|m| m.error().unwrap_or_default().to_string())}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="identifier">
                                    <span class="label-text">"账号"</span>
                                </label>
                                <input
                                    id="identifier"
                                    type="text"
                                    placeholder="用户名 / 邮箱"
                                    autocomplete="username"
                                    on:input=move |ev| set_identifier.set(event_target_value(&ev))
                                    prop:value=identifier
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"密码"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    autocomplete="current-password"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || mutation.with(|m| m.is_submitting())>
                                    {move || if mutation.with(|m| m.is_submitting()) {
                                        view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                    } else {
                                        "登 录".into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
