//! 通用记录对话框
//!
//! 九个管理页共用同一个新建/编辑模态框：字段由各资源的
//! 描述表驱动，值统一放在一个字符串表里，提交时再由资源
//! 自己的 `from_form` 做解析与校验。

use std::collections::HashMap;

use leptos::prelude::*;

use crate::mutation::MutationState;

/// 表单值表：字段 key -> 输入原文
pub type FormValues = HashMap<&'static str, String>;

/// 字段类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// 开关（"true"/"false"）
    Flag,
}

/// 一个表单字段的描述
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            required: false,
            placeholder: "",
        }
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number,
            required: false,
            placeholder: "",
        }
    }

    pub const fn flag(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Flag,
            required: false,
            placeholder: "",
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

// =========================================================
// from_form 的取值工具
// =========================================================

pub fn required_field(
    values: &FormValues,
    key: &'static str,
    label: &str,
) -> Result<String, String> {
    match values.get(key).map(|s| s.trim()) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(format!("请填写{label}")),
    }
}

pub fn optional_field(values: &FormValues, key: &'static str) -> Option<String> {
    values
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn number_field(values: &FormValues, key: &'static str, label: &str) -> Result<f64, String> {
    required_field(values, key, label)?
        .parse::<f64>()
        .map_err(|_| format!("{label}必须是数字"))
}

pub fn int_field(values: &FormValues, key: &'static str, label: &str) -> Result<u32, String> {
    required_field(values, key, label)?
        .parse::<u32>()
        .map_err(|_| format!("{label}必须是非负整数"))
}

pub fn flag_field(values: &FormValues, key: &'static str) -> bool {
    values.get(key).map(|s| s == "true").unwrap_or(false)
}

// =========================================================
// UI 组件
// =========================================================

fn field_input(spec: &'static FieldSpec, values: RwSignal<FormValues>) -> AnyView {
    match spec.kind {
        FieldKind::Text => view! {
            <div class="form-control">
                <label class="label" for=spec.key>
                    <span class="label-text">{spec.label}</span>
                </label>
                <input
                    id=spec.key
                    type="text"
                    placeholder=spec.placeholder
                    required=spec.required
                    prop:value=move || values.with(|v| v.get(spec.key).cloned().unwrap_or_default())
                    on:input=move |ev| {
                        values.update(|v| {
                            v.insert(spec.key, event_target_value(&ev));
                        });
                    }
                    class="input input-bordered w-full"
                />
            </div>
        }
        .into_any(),
        FieldKind::Number => view! {
            <div class="form-control">
                <label class="label" for=spec.key>
                    <span class="label-text">{spec.label}</span>
                </label>
                <input
                    id=spec.key
                    type="number"
                    step="any"
                    placeholder=spec.placeholder
                    required=spec.required
                    prop:value=move || values.with(|v| v.get(spec.key).cloned().unwrap_or_default())
                    on:input=move |ev| {
                        values.update(|v| {
                            v.insert(spec.key, event_target_value(&ev));
                        });
                    }
                    class="input input-bordered w-full"
                />
            </div>
        }
        .into_any(),
        FieldKind::Flag => view! {
            <div class="form-control">
                <label class="label cursor-pointer">
                    <span class="label-text">{spec.label}</span>
                    <input
                        type="checkbox"
                        class="toggle toggle-primary"
                        prop:checked=move || values.with(|v| v.get(spec.key).map(|s| s == "true").unwrap_or(false))
                        on:change=move |ev| {
                            values.update(|v| {
                                v.insert(
                                    spec.key,
                                    if event_target_checked(&ev) { "true" } else { "false" }.to_string(),
                                );
                            });
                        }
                    />
                </label>
            </div>
        }
        .into_any(),
    }
}

/// 新建/编辑共用的模态框
///
/// 打开与关闭都由父组件的状态驱动；提交只把值表原样交出去，
/// 校验失败的文案经由 `mutation` 信号回显在框内。
#[component]
pub fn RecordDialog(
    /// 标题（"新建车辆" / "编辑车辆"）
    #[prop(into)] title: Signal<String>,
    /// 字段描述表
    fields: &'static [FieldSpec],
    /// 表单值
    values: RwSignal<FormValues>,
    /// 是否打开
    #[prop(into)] open: Signal<bool>,
    /// 提交状态机
    #[prop(into)] mutation: Signal<MutationState>,
    /// 取消/关闭
    #[prop(into)] on_cancel: Callback<()>,
    /// 提交（值表快照）
    #[prop(into)] on_submit: Callback<FormValues>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit_ev = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(values.get_untracked());
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_cancel.run(())>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>

                <form on:submit=on_submit_ev class="space-y-4 mt-4">
                    <Show when=move || mutation.with(|m| m.error().is_some())>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || mutation.with(|m| m.error().unwrap_or_default().to_string())}</span>
                        </div>
                    </Show>

                    {fields.iter().map(|spec| field_input(spec, values)).collect_view()}

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| on_cancel.run(())>
                            "取消"
                        </button>
                        <button
                            type="submit"
                            disabled=move || mutation.with(|m| m.is_submitting())
                            class="btn btn-primary"
                        >
                            {move || if mutation.with(|m| m.is_submitting()) {
                                view! { <span class="loading loading-spinner"></span> "保存中..." }.into_any()
                            } else {
                                view! { "保存" }.into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
