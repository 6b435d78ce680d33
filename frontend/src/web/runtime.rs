//! 浏览器运行时
//!
//! 计时基于 `setTimeout`（gloo-timers），任务派发到 wasm 的单线程执行器。

use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use verbbar::Runtime;

#[derive(Clone, Copy, Default)]
pub struct WebRuntime;

impl Runtime for WebRuntime {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }
}
