use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, MouseEvent, TouchEvent};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    PointerMove { x: f64, y: f64 },
    Resize,
}

/// Maps the first contact of a touch move to a pointer sample. A move with no
/// contacts carries no position and yields nothing.
pub fn touch_sample(first: Option<(f64, f64)>) -> Option<HostEvent> {
    first.map(|(x, y)| HostEvent::PointerMove { x, y })
}

/// Everything the animator needs from its environment. Each handle stops
/// its driver when dropped.
pub trait Host {
    type Frame;
    type Ticker;
    type Listener;

    fn viewport(&self) -> (u32, u32);
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Frame;
    fn start_interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Self::Ticker;
    fn listen(&self, callback: Rc<dyn Fn(HostEvent)>) -> Self::Listener;
}

/// Browser window: animation frames, timers and window-level listeners.
#[derive(Clone, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    type Frame = AnimationFrame;
    type Ticker = Interval;
    type Listener = Vec<EventListener>;

    fn viewport(&self) -> (u32, u32) {
        let Some(window) = web_sys::window() else {
            return (0, 0);
        };
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dimension(window.inner_width()), dimension(window.inner_height()))
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> AnimationFrame {
        request_animation_frame(move |_| callback())
    }

    fn start_interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(millis, callback)
    }

    fn listen(&self, callback: Rc<dyn Fn(HostEvent)>) -> Vec<EventListener> {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to listen on");
            return Vec::new();
        };

        let on_mouse = callback.clone();
        let mouse = EventListener::new(&window, "mousemove", move |event: &Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_mouse(HostEvent::PointerMove {
                    x: event.client_x() as f64,
                    y: event.client_y() as f64,
                });
            }
        });

        let on_touch = callback.clone();
        // gloo registers listeners as passive unless told otherwise
        let touch = EventListener::new(&window, "touchmove", move |event: &Event| {
            if let Some(event) = event.dyn_ref::<TouchEvent>() {
                let first = event
                    .touches()
                    .get(0)
                    .map(|t| (t.client_x() as f64, t.client_y() as f64));
                if let Some(sample) = touch_sample(first) {
                    on_touch(sample);
                }
            }
        });

        let resize = EventListener::new(&window, "resize", move |_| callback(HostEvent::Resize));

        vec![mouse, touch, resize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_without_contacts_yields_nothing() {
        assert_eq!(touch_sample(None), None);
    }

    #[test]
    fn touch_uses_the_first_contact() {
        // TouchList::get(0) hands over only the first of several contacts
        let contacts = [(12.5, 40.0), (300.0, 2.0)];
        assert_eq!(
            touch_sample(contacts.first().copied()),
            Some(HostEvent::PointerMove { x: 12.5, y: 40.0 })
        );
    }

    #[test]
    fn touch_at_origin_is_still_a_sample() {
        assert_eq!(
            touch_sample(Some((0.0, 0.0))),
            Some(HostEvent::PointerMove { x: 0.0, y: 0.0 })
        );
    }
}
