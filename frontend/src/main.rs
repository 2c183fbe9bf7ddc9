use leptos::prelude::*;
use parkdesk_frontend::App;

// wasm 单线程环境下用 lol_alloc 换取更小的产物体积
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: lol_alloc::AssumeSingleThreaded<lol_alloc::FreeListAllocator> =
    unsafe { lol_alloc::AssumeSingleThreaded::new(lol_alloc::FreeListAllocator::new()) };

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
