use log::warn;
use yew::prelude::*;

use crate::config::TrailConfig;
use crate::trail::animator::TrailAnimator;
use crate::trail::host::BrowserHost;
use crate::trail::surface::CanvasSurface;

const OVERLAY_STYLE: &str =
    "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 40;";

/// Full-viewport canvas that paints the glowing trail behind the pointer.
#[function_component(GlowingCursor)]
pub fn glowing_cursor() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let surface = match CanvasSurface::from_node(&canvas_ref) {
                    Ok(surface) => Some(surface),
                    Err(e) => {
                        warn!("Cursor trail disabled: {}", e);
                        None
                    }
                };
                let animator = TrailAnimator::mount(BrowserHost, surface, TrailConfig::default());
                move || animator.teardown()
            },
            (), // mount once, tear down on unmount
        );
    }

    html! {
        <canvas ref={canvas_ref} class="cursor-trail" style={OVERLAY_STYLE} />
    }
}
