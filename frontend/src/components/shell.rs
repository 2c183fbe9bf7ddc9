//! 已登录页面的外壳
//!
//! 顶栏 + 侧边菜单 + 内容区。菜单按登录身份切换：员工看全套
//! 管理入口，终端用户只看自己的三个页面。退出登录先通知服务端
//! （失败也照常退出），本地清干净后由路由守卫送回登录页。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::icons::{CircleUser, LogOut, SquareParking};
use crate::components::session_status::SessionStatus;
use crate::session::{apply_logout, perform_logout, use_api, use_session};
use crate::web::router::Link;

const STAFF_MENU: &[(&str, &str)] = &[
    ("/dashboard", "控制台"),
    ("/users", "用户"),
    ("/staff", "员工"),
    ("/vehicles", "车辆"),
    ("/vehicle-types", "车型"),
    ("/parking-lots", "停车场"),
    ("/parking-modes", "停放模式"),
    ("/prices", "价格"),
    ("/accounts", "账号"),
    ("/roles", "角色"),
];

const END_USER_MENU: &[(&str, &str)] = &[
    ("/home", "首页"),
    ("/vehicles", "我的车辆"),
    ("/prices", "价格一览"),
];

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_session();
    let api = use_api();

    let display_name = ctx.display_name_signal();
    let user_kind = ctx.user_kind_signal();
    let is_staff = Signal::derive(move || user_kind.get().map(|k| k.is_staff()).unwrap_or(false));

    let on_logout = move |_| {
        let api = api.clone();
        spawn_local(async move {
            perform_logout(&api).await;
            apply_logout(&ctx);
            // 跳转交给路由守卫：会话一消失它自然送回登录页
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm px-4">
                <div class="flex-1 flex items-center gap-2">
                    <SquareParking attr:class="h-6 w-6 text-primary"/>
                    <span class="text-lg font-bold">"ParkDesk"</span>
                    <SessionStatus/>
                </div>
                <div class="flex-none flex items-center gap-3">
                    <span class="flex items-center gap-1 text-sm opacity-80">
                        <CircleUser attr:class="h-5 w-5"/>
                        {display_name}
                    </span>
                    <button class="btn btn-ghost btn-sm" title="退出登录" on:click=on_logout>
                        <LogOut attr:class="h-4 w-4"/>
                    </button>
                </div>
            </div>

            <div class="flex">
                <aside class="w-48 shrink-0 bg-base-100 border-r border-base-300">
                    <ul class="menu p-2 gap-1">
                        {move || {
                            let menu = if is_staff.get() { STAFF_MENU } else { END_USER_MENU };
                            menu.iter()
                                .map(|(path, label)| {
                                    view! {
                                        <li>
                                            <Link to=*path>{*label}</Link>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </aside>
                <main class="flex-1 p-6">{children()}</main>
            </div>
        </div>
    }
}
