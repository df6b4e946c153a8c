use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod error;
mod trail {
    pub mod animator;
    pub mod host;
    pub mod points;
    pub mod render;
    pub mod surface;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod glowing_cursor;
    pub mod link_card;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, rendering Landing page");
            html! { <Landing /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
