use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::config::TrailConfig;
use super::host::{Host, HostEvent};
use super::points::Trail;
#[cfg(test)]
use super::points::TrailPoint;
use super::render::frame_commands;
use super::surface::Surface;

struct Drivers<H: Host> {
    running: bool,
    frame: Option<H::Frame>,
    ticker: Option<H::Ticker>,
    listener: Option<H::Listener>,
}

struct Inner<H: Host, S: Surface> {
    host: H,
    config: TrailConfig,
    trail: RefCell<Trail>,
    surface: RefCell<Option<S>>,
    drivers: RefCell<Drivers<H>>,
}

/// Glowing cursor trail bound to one surface for one mount.
///
/// Input, the decay interval and the frame loop all share one trail. Their
/// callbacks hold weak references, so dropping the animator stops them too.
pub struct TrailAnimator<H: Host, S: Surface> {
    inner: Rc<Inner<H, S>>,
}

impl<H, S> TrailAnimator<H, S>
where
    H: Host + 'static,
    S: Surface + 'static,
{
    /// Sizes the surface and starts the drivers. Without a surface the
    /// animator stays inert and nothing is registered with the host.
    pub fn mount(host: H, surface: Option<S>, config: TrailConfig) -> Self {
        let has_surface = surface.is_some();
        let inner = Rc::new(Inner {
            host,
            trail: RefCell::new(Trail::new(&config)),
            config,
            surface: RefCell::new(surface),
            drivers: RefCell::new(Drivers {
                running: false,
                frame: None,
                ticker: None,
                listener: None,
            }),
        });

        if !has_surface {
            debug!("No drawing surface, cursor trail stays inert");
            return Self { inner };
        }

        inner.resize();

        let weak = Rc::downgrade(&inner);
        let listener = inner.host.listen(Rc::new(move |event: HostEvent| {
            let Some(inner) = weak.upgrade() else { return };
            match event {
                HostEvent::PointerMove { x, y } => inner.on_pointer_move(x, y),
                HostEvent::Resize => inner.resize(),
            }
        }));

        let weak = Rc::downgrade(&inner);
        let ticker = inner.host.start_interval(
            inner.config.tick_millis,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.decay_tick();
                }
            }),
        );

        {
            let mut drivers = inner.drivers.borrow_mut();
            drivers.running = true;
            drivers.listener = Some(listener);
            drivers.ticker = Some(ticker);
        }
        inner.schedule_frame();
        debug!("Cursor trail mounted at {:?}", inner.host.viewport());

        Self { inner }
    }

    /// Stops the frame loop, the decay interval and every listener. Safe to
    /// call more than once.
    pub fn teardown(&self) {
        let (frame, ticker, listener) = {
            let mut drivers = self.inner.drivers.borrow_mut();
            if !drivers.running {
                return;
            }
            drivers.running = false;
            (drivers.frame.take(), drivers.ticker.take(), drivers.listener.take())
        };
        drop(frame);
        drop(ticker);
        drop(listener);
        self.inner.trail.borrow_mut().clear();
        debug!("Cursor trail torn down");
    }
}

// Direct access for driving the animator without a host.
#[cfg(test)]
impl<H, S> TrailAnimator<H, S>
where
    H: Host + 'static,
    S: Surface + 'static,
{
    pub fn on_pointer_move(&self, x: f64, y: f64) {
        self.inner.on_pointer_move(x, y);
    }

    pub fn decay_tick(&self) {
        self.inner.decay_tick();
    }

    pub fn render_frame(&self) {
        self.inner.render_frame();
    }

    pub fn resize(&self) {
        self.inner.resize();
    }

    pub fn is_running(&self) -> bool {
        self.inner.drivers.borrow().running
    }

    pub fn points(&self) -> Vec<TrailPoint> {
        self.inner.trail.borrow().points().to_vec()
    }
}

impl<H, S> Inner<H, S>
where
    H: Host + 'static,
    S: Surface + 'static,
{
    fn schedule_frame(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let frame = self.host.request_frame(Box::new(move || {
            let Some(inner) = weak.upgrade() else { return };
            inner.render_frame();
            if inner.drivers.borrow().running {
                inner.schedule_frame();
            }
        }));
        self.drivers.borrow_mut().frame = Some(frame);
    }

    fn on_pointer_move(&self, x: f64, y: f64) {
        self.trail.borrow_mut().push(x, y);
    }

    fn decay_tick(&self) {
        self.trail.borrow_mut().decay_and_prune();
    }

    fn render_frame(&self) {
        let mut surface = self.surface.borrow_mut();
        let Some(surface) = surface.as_mut() else { return };
        let commands = frame_commands(self.trail.borrow().points(), surface.size(), &self.config);
        surface.draw(&commands);
    }

    fn resize(&self) {
        let (width, height) = self.host.viewport();
        if let Some(surface) = self.surface.borrow_mut().as_mut() {
            surface.set_size(width, height);
        }
    }
}
