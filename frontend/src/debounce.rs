use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};

/// 定时器后端。浏览器中使用 `setTimeout`，测试中使用手动时钟。
pub trait TimerScheduler {
    type Handle: 'static;

    /// 定时器注册失败时返回 `None`
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// 基于 `window.setTimeout` 的定时器
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl TimerScheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(callback, delay).ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// 防抖器：最多持有一个待触发的定时器，每次调用都会取消上一次
pub struct Debouncer<S: TimerScheduler> {
    scheduler: S,
    delay: Duration,
    pending: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: TimerScheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 取消尚未触发的调用，静默期结束后执行 `f`
    pub fn call(&self, f: impl FnOnce() + 'static) {
        self.cancel();

        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                pending.borrow_mut().take();
                f();
            }),
        );
        *self.pending.borrow_mut() = handle;
    }

    /// 丢弃尚未触发的调用，返回之前是否有待触发的调用
    pub fn cancel(&self) -> bool {
        let handle = self.pending.borrow_mut().take();
        match handle {
            Some(handle) => {
                self.scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    struct Timer {
        id: u64,
        due: Duration,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        timers: Vec<Timer>,
    }

    /// 只有测试推进时钟时定时器才会触发
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due_index = clock
                        .timers
                        .iter()
                        .enumerate()
                        .filter(|(_, timer)| timer.due <= target)
                        .min_by_key(|(_, timer)| (timer.due, timer.id))
                        .map(|(index, _)| index);
                    due_index.map(|index| {
                        let timer = clock.timers.remove(index);
                        clock.now = timer.due;
                        timer.callback
                    })
                };
                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }

        pub fn pending_timers(&self) -> usize {
            self.clock.borrow().timers.len()
        }
    }

    impl TimerScheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<u64> {
            let mut clock = self.clock.borrow_mut();
            clock.next_id += 1;
            let id = clock.next_id;
            let due = clock.now + delay;
            clock.timers.push(Timer { id, due, callback });
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            self.clock
                .borrow_mut()
                .timers
                .retain(|timer| timer.id != handle);
        }
    }
}
