//! 控制台日志
//!
//! wasm 目标写入浏览器 console；原生目标（单元测试）退回标准流。
//! 错误处理策略要求：任何被吞掉的错误至少留下一条 console 诊断。

pub(crate) fn log_str(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    println!("{msg}");
}

pub(crate) fn error_str(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::logging::log_str(&format!($($t)*))
    };
}

macro_rules! console_error {
    ($($t:tt)*) => {
        $crate::logging::error_str(&format!($($t)*))
    };
}

pub(crate) use {console_error, console_log};
