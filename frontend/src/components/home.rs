//! 首页（终端用户登录后的落地页）

use leptos::prelude::*;

use crate::components::icons::SquareParking;
use crate::components::shell::Shell;
use crate::session::use_session;
use crate::web::router::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_session();
    let display_name = ctx.display_name_signal();

    view! {
        <Shell>
            <div class="hero bg-base-100 rounded-box shadow mb-6">
                <div class="hero-content text-center py-10">
                    <div>
                        <SquareParking attr:class="h-12 w-12 mx-auto text-primary"/>
                        <h1 class="text-2xl font-bold mt-2">
                            {move || format!("欢迎，{}", display_name.get())}
                        </h1>
                        <p class="text-base-content/70 mt-1">"在这里查看您的车辆与各停车场的收费标准。"</p>
                    </div>
                </div>
            </div>

            <div class="grid gap-4 md:grid-cols-2">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"我的车辆"</h2>
                        <p class="text-sm opacity-70">"登记、修改或注销名下车辆。"</p>
                        <div class="card-actions justify-end">
                            <Link to="/vehicles" attr:class="btn btn-primary btn-sm">"去查看"</Link>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">"价格一览"</h2>
                        <p class="text-sm opacity-70">"各停车场、车型与停放模式的收费标准。"</p>
                        <div class="card-actions justify-end">
                            <Link to="/prices" attr:class="btn btn-primary btn-sm">"去查看"</Link>
                        </div>
                    </div>
                </div>
            </div>
        </Shell>
    }
}
