//! 资源管理页引擎
//!
//! 九个管理页（用户、员工、车辆……）其实是同一张"列表 + 搜索 +
//! 分页 + 新建/编辑对话框 + 删除"页面套上不同的资源而已。页面
//! 骨架在这里只写一次，各资源以 [`ResourceSchema`] 描述自己的
//! 列、表单字段与接口调用。

mod pager;
pub mod schemas;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::icons::{
    ChevronLeft, ChevronRight, Pencil, Plus, RefreshCw, Search, Trash2,
};
use crate::components::record_dialog::{FieldSpec, FormValues, RecordDialog};
use crate::components::shell::Shell;
use crate::error::ApiError;
use crate::mutation::{use_mount_guard, MutationState};
use crate::session::{use_api, ConsoleApi};

/// 一种可管理资源的完整描述
///
/// 方法全部挂在类型上，不携带状态；接口调用拿到的是页面注入的
/// 同一个客户端，令牌与 401/403 裁决都走统一路径。
#[async_trait(?Send)]
pub trait ResourceSchema: 'static {
    /// 列表行记录
    type Record: Clone + PartialEq + Default + Send + Sync + 'static;

    /// 中文名，标题、按钮与提示语里用
    const TITLE: &'static str;

    /// 表头
    fn columns() -> &'static [&'static str];
    /// 一行记录渲染成的单元格文本，与 [`Self::columns`] 对齐
    fn cells(record: &Self::Record) -> Vec<String>;
    /// 行主键
    fn id(record: &Self::Record) -> String;
    /// 表单字段描述
    fn fields() -> &'static [FieldSpec];
    /// 记录 -> 表单值
    fn to_form(record: &Self::Record) -> FormValues;
    /// 表单值 -> 记录，校验失败返回给用户看的文案
    fn from_form(values: &FormValues) -> Result<Self::Record, String>;

    async fn fetch_all(api: &ConsoleApi) -> Result<Vec<Self::Record>, ApiError>;
    async fn create(api: &ConsoleApi, record: Self::Record) -> Result<Self::Record, ApiError>;
    async fn update(
        api: &ConsoleApi,
        id: String,
        record: Self::Record,
    ) -> Result<Self::Record, ApiError>;
    async fn remove(api: &ConsoleApi, id: String) -> Result<bool, ApiError>;
}

/// 对话框状态：编辑态记住打开时的原记录，提交时取它的主键
#[derive(Clone, PartialEq)]
enum DialogMode<R> {
    Closed,
    Create,
    Edit(R),
}

fn matches_filter(cells: &[String], needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    cells.iter().any(|cell| cell.to_lowercase().contains(&needle))
}

/// 组装一个资源的管理页
///
/// 监听 -> 裁决 -> 处理 -> 加载：初次与变更后都重新拉全量列表，
/// 搜索与分页在前端内存里完成。所有异步回调落地前先问挂载守卫，
/// 401/403 由客户端全局裁决，这里只对局部错误弹提示。
pub fn resource_page<S: ResourceSchema>() -> impl IntoView {
    let api = use_api();
    let guard = use_mount_guard();

    let (records, set_records) = signal(Vec::<S::Record>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(String::new());
    let (page, set_page) = signal(0usize);
    let (dialog, set_dialog) = signal(DialogMode::<S::Record>::Closed);
    let (mutation, set_mutation) = signal(MutationState::Idle);
    let (deleting, set_deleting) = signal(Option::<String>::None);
    // (文案, 是否成功)
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);
    let form = RwSignal::new(FormValues::new());

    // ====== 加载 ======

    let load = {
        let api = api.clone();
        let guard = guard.clone();
        move || {
            let api = api.clone();
            let guard = guard.clone();
            set_loading.set(true);
            spawn_local(async move {
                let result = S::fetch_all(&api).await;
                if !guard.alive() {
                    return;
                }
                set_loading.set(false);
                match result {
                    Ok(list) => set_records.set(list),
                    // 会话过期由全局裁决跳回登录页，这里不再弹提示
                    Err(err) if err.is_auth_expired() => {}
                    Err(err) => set_notification.set(Some((err.user_message(), false))),
                }
            });
        }
    };

    {
        let load = load.clone();
        Effect::new(move |_| load());
    }

    // 提示 3 秒后自动消失
    Effect::new(move |_| {
        if notification.with(|n| n.is_some()) {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    // ====== 过滤与分页 ======

    let filtered = Memo::new(move |_| {
        let needle = filter.get();
        records.with(|list| {
            list.iter()
                .filter(|record| matches_filter(&S::cells(record), &needle))
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let total = Memo::new(move |_| filtered.with(Vec::len));
    let page_count = Memo::new(move |_| pager::page_count(total.get(), pager::PAGE_SIZE));
    let current_page =
        Memo::new(move |_| pager::clamp_page(page.get(), total.get(), pager::PAGE_SIZE));
    let visible = Memo::new(move |_| {
        filtered.with(|list| {
            let (start, end) = pager::page_bounds(page.get(), list.len(), pager::PAGE_SIZE);
            list[start..end].to_vec()
        })
    });
    let at_first_page = move || current_page.get() == 0;
    let at_last_page = move || current_page.get() + 1 >= page_count.get();

    // ====== 对话框 ======

    let dialog_open =
        Signal::derive(move || dialog.with(|mode| !matches!(mode, DialogMode::Closed)));
    let dialog_title = Signal::derive(move || {
        dialog.with(|mode| match mode {
            DialogMode::Edit(_) => format!("编辑{}", S::TITLE),
            _ => format!("新建{}", S::TITLE),
        })
    });

    let open_create = move |_| {
        form.set(S::to_form(&S::Record::default()));
        set_mutation.set(MutationState::Idle);
        set_dialog.set(DialogMode::Create);
    };

    let on_cancel = Callback::new(move |()| set_dialog.set(DialogMode::Closed));

    let on_submit = {
        let api = api.clone();
        let guard = guard.clone();
        let load = load.clone();
        Callback::new(move |values: FormValues| {
            let record = match S::from_form(&values) {
                Ok(record) => record,
                Err(message) => {
                    set_mutation.update(|m| m.fail(message));
                    return;
                }
            };
            if set_mutation.try_update(|m| m.begin()) != Some(true) {
                return;
            }
            let api = api.clone();
            let guard = guard.clone();
            let load = load.clone();
            spawn_local(async move {
                let result = match dialog.get_untracked() {
                    DialogMode::Create => S::create(&api, record).await.map(|_| ()),
                    DialogMode::Edit(original) => {
                        S::update(&api, S::id(&original), record).await.map(|_| ())
                    }
                    DialogMode::Closed => return,
                };
                if !guard.alive() {
                    return;
                }
                match result {
                    Ok(()) => {
                        set_mutation.update(|m| m.succeed());
                        set_dialog.set(DialogMode::Closed);
                        set_notification.set(Some((format!("{}已保存", S::TITLE), true)));
                        load();
                    }
                    Err(err) if err.is_auth_expired() => {}
                    // 失败留在框内回显，对话框不关，输入不丢
                    Err(err) => set_mutation.update(|m| m.fail(err.user_message())),
                }
            });
        })
    };

    let col_span = (S::columns().len() + 1).to_string();
    let col_span_empty = col_span.clone();

    view! {
        <Shell>
            <div class="flex flex-wrap items-center justify-between gap-3 mb-4">
                <h1 class="text-2xl font-bold">{S::TITLE}"管理"</h1>
                <div class="flex items-center gap-2">
                    <label class="input input-bordered input-sm flex items-center gap-2">
                        <Search attr:class="h-4 w-4 opacity-60"/>
                        <input
                            type="search"
                            class="grow"
                            placeholder="搜索..."
                            prop:value=filter
                            on:input=move |ev| {
                                set_filter.set(event_target_value(&ev));
                                set_page.set(0);
                            }
                        />
                    </label>
                    <button
                        class="btn btn-ghost btn-sm"
                        title="刷新"
                        disabled=move || loading.get()
                        on:click={
                            let load = load.clone();
                            move |_| load()
                        }
                    >
                        <RefreshCw attr:class=move || {
                            if loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" }
                        }/>
                    </button>
                    <button class="btn btn-primary btn-sm" on:click=open_create>
                        <Plus attr:class="h-4 w-4"/>
                        {format!("新建{}", S::TITLE)}
                    </button>
                </div>
            </div>

            <div class="overflow-x-auto bg-base-100 rounded-box shadow">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            {S::columns().iter().map(|col| view! { <th>{*col}</th> }).collect_view()}
                            <th class="text-right">"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || loading.get()>
                            <tr>
                                <td colspan=col_span.clone() class="text-center py-8">
                                    <span class="loading loading-spinner loading-md"></span>
                                </td>
                            </tr>
                        </Show>
                        <Show when=move || !loading.get() && total.get() == 0>
                            <tr>
                                <td colspan=col_span_empty.clone() class="text-center py-8 opacity-60">
                                    "暂无数据，点击右上角新建一条"
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || visible.get()
                            key=|record| S::id(record)
                            children=move |record: S::Record| {
                                let cells = S::cells(&record);
                                let record_id = S::id(&record);

                                let on_edit = {
                                    let record = record.clone();
                                    move |_| {
                                        form.set(S::to_form(&record));
                                        set_mutation.set(MutationState::Idle);
                                        set_dialog.set(DialogMode::Edit(record.clone()));
                                    }
                                };

                                let on_delete = {
                                    let api = api.clone();
                                    let guard = guard.clone();
                                    let load = load.clone();
                                    let id = record_id.clone();
                                    move |_| {
                                        let confirmed = web_sys::window()
                                            .map(|w| {
                                                w.confirm_with_message(
                                                        &format!("确认删除这条{}记录？", S::TITLE),
                                                    )
                                                    .unwrap_or(false)
                                            })
                                            .unwrap_or(false);
                                        if !confirmed {
                                            return;
                                        }
                                        if deleting.with_untracked(|d| d.is_some()) {
                                            return;
                                        }
                                        set_deleting.set(Some(id.clone()));
                                        let api = api.clone();
                                        let guard = guard.clone();
                                        let load = load.clone();
                                        let id = id.clone();
                                        spawn_local(async move {
                                            let result = S::remove(&api, id).await;
                                            if !guard.alive() {
                                                return;
                                            }
                                            set_deleting.set(None);
                                            match result {
                                                Ok(_) => {
                                                    set_notification.set(Some((
                                                        format!("{}已删除", S::TITLE),
                                                        true,
                                                    )));
                                                    load();
                                                }
                                                Err(err) if err.is_auth_expired() => {}
                                                Err(err) => set_notification
                                                    .set(Some((err.user_message(), false))),
                                            }
                                        });
                                    }
                                };

                                let busy = {
                                    let id = record_id.clone();
                                    move || deleting.with(|d| d.as_deref() == Some(id.as_str()))
                                };

                                view! {
                                    <tr>
                                        {cells
                                            .into_iter()
                                            .map(|cell| view! { <td>{cell}</td> })
                                            .collect_view()}
                                        <td class="text-right">
                                            <div class="join">
                                                <button
                                                    class="btn btn-ghost btn-xs join-item"
                                                    title="编辑"
                                                    on:click=on_edit
                                                >
                                                    <Pencil attr:class="h-4 w-4"/>
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-xs join-item text-error"
                                                    title="删除"
                                                    disabled=busy
                                                    on:click=on_delete
                                                >
                                                    <Trash2 attr:class="h-4 w-4"/>
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <div class="flex items-center justify-between mt-4">
                <span class="text-sm opacity-70">{move || format!("共 {} 条", total.get())}</span>
                <div class="join">
                    <button
                        class="join-item btn btn-sm"
                        disabled=at_first_page
                        on:click=move |_| set_page.set(current_page.get_untracked().saturating_sub(1))
                    >
                        <ChevronLeft attr:class="h-4 w-4"/>
                    </button>
                    <span class="join-item btn btn-sm pointer-events-none">
                        {move || format!("{} / {}", current_page.get() + 1, page_count.get())}
                    </span>
                    <button
                        class="join-item btn btn-sm"
                        disabled=at_last_page
                        on:click=move |_| set_page.set(current_page.get_untracked() + 1)
                    >
                        <ChevronRight attr:class="h-4 w-4"/>
                    </button>
                </div>
            </div>

            <Show when=move || notification.with(|n| n.is_some())>
                <div class="toast toast-top toast-end z-50">
                    <div class=move || {
                        if notification.with(|n| n.as_ref().is_some_and(|(_, ok)| *ok)) {
                            "alert alert-success"
                        } else {
                            "alert alert-error"
                        }
                    }>
                        <span>
                            {move || notification
                                .with(|n| n.as_ref().map(|(text, _)| text.clone()).unwrap_or_default())}
                        </span>
                    </div>
                </div>
            </Show>

            <RecordDialog
                title=dialog_title
                fields={S::fields()}
                values=form
                open=dialog_open
                mutation=mutation
                on_cancel=on_cancel
                on_submit=on_submit
            />
        </Shell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_filter_is_case_insensitive() {
        let cells = vec!["京A·88888".to_string(), "Zhang Wei".to_string()];
        assert!(matches_filter(&cells, "zhang"));
        assert!(matches_filter(&cells, "京a"));
        assert!(!matches_filter(&cells, "沪B"));
    }

    #[test]
    fn test_blank_filter_keeps_everything() {
        let cells = vec!["whatever".to_string()];
        assert!(matches_filter(&cells, ""));
        assert!(matches_filter(&cells, "   "));
    }
}
