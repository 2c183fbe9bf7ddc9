//! LocalStorage 封装模块
//!
//! 走 `gloo-storage` 的 raw Storage 接口读写纯字符串，
//! 不经过它的 JSON 编码层：运维在 DevTools 里手工写入的
//! 配置键必须原样可读。

use gloo_storage::{LocalStorage as Backing, Storage};

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在或发生错误
    pub fn get(key: &str) -> Option<String> {
        Backing::raw().get_item(key).ok()?
    }

    /// 设置存储值
    ///
    /// # 返回
    /// - `true` 如果操作成功
    /// - `false` 如果操作失败（存储满、隐私模式等）
    pub fn set(key: &str, value: &str) -> bool {
        Backing::raw().set_item(key, value).is_ok()
    }

    /// 删除存储的键值对，键不存在时也视为成功
    pub fn delete(key: &str) {
        Backing::delete(key);
    }
}
