//! requestAnimationFrame-backed `FrameScheduler`.
//!
//! The wrapped frame callback holds a strong reference to the slot it is
//! stored in, so a started loop keeps itself alive after the scheduler is
//! dropped. `cancel` empties the slot and so releases the loop.

use std::cell::RefCell;
use std::rc::Rc;

use orrery_engine::{FrameCallback, FrameScheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Something that can run a callback on the next display refresh.
pub trait FrameSource: 'static {
    type Callback: 'static;

    fn wrap_callback(&self, f: Box<dyn FnMut(f64)>) -> Self::Callback;
    fn request_frame(&self, callback: &Self::Callback) -> Result<i32, JsValue>;
    fn cancel_frame(&self, handle: i32) -> Result<(), JsValue>;
}

impl FrameSource for Window {
    type Callback = Closure<dyn FnMut(f64)>;

    fn wrap_callback(&self, f: Box<dyn FnMut(f64)>) -> Self::Callback {
        Closure::wrap(f)
    }

    fn request_frame(&self, callback: &Self::Callback) -> Result<i32, JsValue> {
        self.request_animation_frame(callback.as_ref().unchecked_ref())
    }

    fn cancel_frame(&self, handle: i32) -> Result<(), JsValue> {
        self.cancel_animation_frame(handle)
    }
}

#[derive(Default)]
struct LoopState {
    running: bool,
    /// Id of the pending animation frame request.
    handle: Option<i32>,
}

type Slot<C> = Rc<RefCell<Option<C>>>;

pub struct AnimationFrameScheduler<P: FrameSource = Window> {
    source: Rc<P>,
    state: Rc<RefCell<LoopState>>,
    slot: Slot<P::Callback>,
}

impl<P: FrameSource> AnimationFrameScheduler<P> {
    pub fn new(source: P) -> Self {
        Self {
            source: Rc::new(source),
            state: Rc::new(RefCell::new(LoopState::default())),
            slot: Rc::new(RefCell::new(None)),
        }
    }
}

fn request_next<P: FrameSource>(source: &P, slot: &Slot<P::Callback>, state: &RefCell<LoopState>) {
    let guard = slot.borrow();
    let Some(callback) = guard.as_ref() else {
        return;
    };
    match source.request_frame(callback) {
        Ok(handle) => state.borrow_mut().handle = Some(handle),
        Err(err) => {
            log::error!("requestAnimationFrame failed: {err:?}");
            state.borrow_mut().running = false;
        }
    }
}

impl<P: FrameSource> FrameScheduler for AnimationFrameScheduler<P> {
    fn start(&mut self, mut callback: FrameCallback) {
        self.cancel();

        let state = Rc::clone(&self.state);
        let source = Rc::clone(&self.source);
        // Strong: the loop owns itself until `cancel` empties the slot.
        let slot = Rc::clone(&self.slot);

        let frame = self.source.wrap_callback(Box::new(move |now_ms: f64| {
            state.borrow_mut().handle = None;
            if !state.borrow().running {
                return;
            }
            callback(now_ms);
            // The callback may have cancelled the loop.
            if state.borrow().running {
                request_next(&*source, &slot, &state);
            }
        }));

        *self.slot.borrow_mut() = Some(frame);
        self.state.borrow_mut().running = true;
        request_next(&*self.source, &self.slot, &self.state);
    }

    fn cancel(&mut self) {
        {
            let mut state = self.state.borrow_mut();
            state.running = false;
            if let Some(handle) = state.handle.take() {
                if let Err(err) = self.source.cancel_frame(handle) {
                    log::warn!("cancelAnimationFrame failed: {err:?}");
                }
            }
        }
        // Releasing the callback here breaks its reference to itself.
        let released = self.slot.borrow_mut().take();
        drop(released);
    }

    fn is_running(&self) -> bool {
        self.state.borrow().running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Weak;

    type TestCallback = Rc<RefCell<Box<dyn FnMut(f64)>>>;

    /// Frame source that only remembers callbacks weakly, the way the
    /// browser does not own a wasm closure.
    #[derive(Clone, Default)]
    struct TestFrames {
        pending: Rc<RefCell<Vec<(i32, Weak<RefCell<Box<dyn FnMut(f64)>>>)>>>,
        next_handle: Rc<Cell<i32>>,
    }

    impl TestFrames {
        /// Run every pending request. Fails if a request outlived its callback.
        fn fire(&self, now_ms: f64) -> Result<usize, &'static str> {
            let due = std::mem::take(&mut *self.pending.borrow_mut());
            let count = due.len();
            for (_, weak) in due {
                let callback = weak.upgrade().ok_or("frame callback was dropped")?;
                (callback.borrow_mut())(now_ms);
            }
            Ok(count)
        }

        fn pending(&self) -> usize {
            self.pending.borrow().len()
        }
    }

    impl FrameSource for TestFrames {
        type Callback = TestCallback;

        fn wrap_callback(&self, f: Box<dyn FnMut(f64)>) -> TestCallback {
            Rc::new(RefCell::new(f))
        }

        fn request_frame(&self, callback: &TestCallback) -> Result<i32, JsValue> {
            let handle = self.next_handle.get() + 1;
            self.next_handle.set(handle);
            self.pending.borrow_mut().push((handle, Rc::downgrade(callback)));
            Ok(handle)
        }

        fn cancel_frame(&self, handle: i32) -> Result<(), JsValue> {
            self.pending.borrow_mut().retain(|(h, _)| *h != handle);
            Ok(())
        }
    }

    fn counting(frames: &Rc<Cell<u32>>) -> FrameCallback {
        let frames = Rc::clone(frames);
        Box::new(move |_| frames.set(frames.get() + 1))
    }

    #[test]
    fn loop_outlives_its_scheduler() {
        let source = TestFrames::default();
        let frames = Rc::new(Cell::new(0));
        let mut scheduler = AnimationFrameScheduler::new(source.clone());
        scheduler.start(counting(&frames));
        drop(scheduler);

        for _ in 0..3 {
            assert_eq!(source.fire(16.0), Ok(1));
        }
        assert_eq!(frames.get(), 3);
        assert_eq!(source.pending(), 1);
    }

    #[test]
    fn cancel_stops_and_releases_callback() {
        let source = TestFrames::default();
        let token = Rc::new(());
        let held = Rc::clone(&token);
        let mut scheduler = AnimationFrameScheduler::new(source.clone());
        scheduler.start(Box::new(move |_| {
            let _held = &held;
        }));
        assert!(scheduler.is_running());
        assert_eq!(source.fire(16.0), Ok(1));
        assert_eq!(Rc::strong_count(&token), 2);

        scheduler.cancel();
        assert!(!scheduler.is_running());
        assert_eq!(source.pending(), 0);
        assert_eq!(source.fire(32.0), Ok(0));
        assert_eq!(Rc::strong_count(&token), 1);
    }

    #[test]
    fn restart_replaces_previous_loop() {
        let source = TestFrames::default();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut scheduler = AnimationFrameScheduler::new(source.clone());

        scheduler.start(counting(&first));
        scheduler.start(counting(&second));
        assert_eq!(source.pending(), 1);
        source.fire(16.0).unwrap();
        source.fire(32.0).unwrap();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 2);
        assert_eq!(Rc::strong_count(&first), 1);
    }
}
