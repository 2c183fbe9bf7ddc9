//! 控制台（员工登录后的落地页）
//!
//! 拉三张列表算几个总量指标。指标只求当下一眼能看明白，不做
//! 图表也不缓存，点刷新就整体重拉。

use leptos::prelude::*;
use leptos::task::spawn_local;

use parkdesk_shared::protocol::{ListParkingLots, ListUsers, ListVehicles};

use crate::components::icons::{RefreshCw, TriangleAlert};
use crate::components::shell::Shell;
use crate::error::ApiError;
use crate::mutation::use_mount_guard;
use crate::session::use_api;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct LotTotals {
    lots: usize,
    capacity: u64,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let guard = use_mount_guard();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (lots, set_lots) = signal(LotTotals::default());
    let (vehicles, set_vehicles) = signal(0usize);
    let (users, set_users) = signal(0usize);

    let load = {
        let api = api.clone();
        let guard = guard.clone();
        move || {
            let api = api.clone();
            let guard = guard.clone();
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                let result = async {
                    let lot_list = api.send(&ListParkingLots).await?;
                    let vehicle_list = api.send(&ListVehicles).await?;
                    let user_list = api.send(&ListUsers).await?;
                    Ok::<_, ApiError>((lot_list, vehicle_list, user_list))
                }
                .await;
                if !guard.alive() {
                    return;
                }
                set_loading.set(false);
                match result {
                    Ok((lot_list, vehicle_list, user_list)) => {
                        set_lots.set(LotTotals {
                            lots: lot_list.len(),
                            capacity: lot_list.iter().map(|l| u64::from(l.capacity)).sum(),
                        });
                        set_vehicles.set(vehicle_list.len());
                        set_users.set(user_list.len());
                    }
                    // 会话过期由全局裁决跳回登录页
                    Err(err) if err.is_auth_expired() => {}
                    Err(err) => set_error.set(Some(err.user_message())),
                }
            });
        }
    };

    {
        let load = load.clone();
        Effect::new(move |_| load());
    }

    view! {
        <Shell>
            <div class="flex items-center justify-between mb-6">
                <div>
                    <h1 class="text-2xl font-bold">"控制台"</h1>
                    <p class="text-base-content/70 text-sm">"各项业务总量一览。"</p>
                </div>
                <button
                    class="btn btn-ghost btn-circle"
                    title="刷新"
                    disabled=move || loading.get()
                    on:click={
                        let load = load.clone();
                        move |_| load()
                    }
                >
                    <RefreshCw attr:class=move || {
                        if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                    }/>
                </button>
            </div>

            <Show when=move || error.with(|e| e.is_some())>
                <div role="alert" class="alert alert-error mb-4">
                    <TriangleAlert attr:class="h-5 w-5"/>
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="stats stats-vertical md:stats-horizontal shadow w-full bg-base-100">
                <div class="stat">
                    <div class="stat-title">"停车场"</div>
                    <div class="stat-value text-primary">{move || lots.get().lots}</div>
                    <div class="stat-desc">"在营网点数"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"车位总数"</div>
                    <div class="stat-value">{move || lots.get().capacity}</div>
                    <div class="stat-desc">"全部网点合计"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"登记车辆"</div>
                    <div class="stat-value text-secondary">{move || vehicles.get()}</div>
                    <div class="stat-desc">"含全部车型"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"注册用户"</div>
                    <div class="stat-value">{move || users.get()}</div>
                    <div class="stat-desc">"终端车主"</div>
                </div>
            </div>
        </Shell>
    }
}
