//! Deterministic stand-ins for the browser used by the trail tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::host::{Host, HostEvent};
use super::render::DrawCommand;
use super::surface::Surface;

type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

struct IntervalSlot {
    id: u64,
    millis: u64,
    due: u64,
    callback: Tick,
}

#[derive(Default)]
struct HostState {
    viewport: (u32, u32),
    now: u64,
    next_id: u64,
    frames: Vec<(u64, Box<dyn FnOnce()>)>,
    intervals: Vec<IntervalSlot>,
    listeners: Vec<(u64, Rc<dyn Fn(HostEvent)>)>,
}

impl HostState {
    fn id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Host driven by hand: frames run on `run_frame`, time moves on `advance`.
#[derive(Clone, Default)]
pub struct ManualHost {
    state: Rc<RefCell<HostState>>,
}

#[derive(Clone, Copy)]
enum Kind {
    Frame,
    Interval,
    Listener,
}

/// Cancels its registration on drop.
pub struct Registration {
    id: u64,
    kind: Kind,
    state: Weak<RefCell<HostState>>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else { return };
        let id = self.id;
        // removed callbacks are dropped after the borrow ends
        let _removed: (Vec<_>, Vec<_>, Vec<_>) = {
            let mut state = state.borrow_mut();
            match self.kind {
                Kind::Frame => (drain(&mut state.frames, |(i, _)| *i == id), Vec::new(), Vec::new()),
                Kind::Interval => (Vec::new(), drain(&mut state.intervals, |s| s.id == id), Vec::new()),
                Kind::Listener => (Vec::new(), Vec::new(), drain(&mut state.listeners, |(i, _)| *i == id)),
            }
        };
    }
}

fn drain<T>(items: &mut Vec<T>, mut matches: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut removed = Vec::new();
    let mut i = 0;
    while i < items.len() {
        if matches(&items[i]) {
            removed.push(items.remove(i));
        } else {
            i += 1;
        }
    }
    removed
}

impl ManualHost {
    pub fn new(width: u32, height: u32) -> Self {
        let host = Self::default();
        host.set_viewport(width, height);
        host
    }

    pub fn set_viewport(&self, width: u32, height: u32) {
        self.state.borrow_mut().viewport = (width, height);
    }

    /// Runs the oldest pending frame callback. Returns false when none is queued.
    pub fn run_frame(&self) -> bool {
        let next = {
            let mut state = self.state.borrow_mut();
            if state.frames.is_empty() {
                None
            } else {
                Some(state.frames.remove(0))
            }
        };
        match next {
            Some((_, callback)) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Moves the clock forward, firing every interval that comes due.
    pub fn advance(&self, millis: u64) {
        let target = self.state.borrow().now + millis;
        loop {
            let tick = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .intervals
                    .iter_mut()
                    .filter(|slot| slot.due <= target)
                    .min_by_key(|slot| slot.due);
                match due {
                    Some(slot) => {
                        let at = slot.due;
                        slot.due += slot.millis;
                        let callback = slot.callback.clone();
                        state.now = at;
                        Some(callback)
                    }
                    None => None,
                }
            };
            match tick {
                Some(callback) => (&mut *callback.borrow_mut())(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }

    pub fn emit(&self, event: HostEvent) {
        let listeners: Vec<_> = self
            .state
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    pub fn active_intervals(&self) -> usize {
        self.state.borrow().intervals.len()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    fn registration(&self, id: u64, kind: Kind) -> Registration {
        Registration {
            id,
            kind,
            state: Rc::downgrade(&self.state),
        }
    }
}

impl Host for ManualHost {
    type Frame = Registration;
    type Ticker = Registration;
    type Listener = Registration;

    fn viewport(&self) -> (u32, u32) {
        self.state.borrow().viewport
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Registration {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.id();
            state.frames.push((id, callback));
            id
        };
        self.registration(id, Kind::Frame)
    }

    fn start_interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Registration {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.id();
            let due = state.now + millis as u64;
            state.intervals.push(IntervalSlot {
                id,
                millis: millis as u64,
                due,
                callback: Rc::new(RefCell::new(callback)),
            });
            id
        };
        self.registration(id, Kind::Interval)
    }

    fn listen(&self, callback: Rc<dyn Fn(HostEvent)>) -> Registration {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.id();
            state.listeners.push((id, callback));
            id
        };
        self.registration(id, Kind::Listener)
    }
}

#[derive(Default)]
struct Recorded {
    size: (u32, u32),
    frames: Vec<Vec<DrawCommand>>,
}

/// Surface that keeps every frame it was asked to draw.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    recorded: Rc<RefCell<Recorded>>,
}

impl RecordingSurface {
    pub fn frames(&self) -> Vec<Vec<DrawCommand>> {
        self.recorded.borrow().frames.clone()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        self.recorded.borrow().size
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.recorded.borrow_mut().size = (width, height);
    }

    fn draw(&mut self, commands: &[DrawCommand]) {
        self.recorded.borrow_mut().frames.push(commands.to_vec());
    }
}
