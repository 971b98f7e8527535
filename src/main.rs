use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod scheduling;
mod quiz {
    pub mod engine;
    pub mod modal;
}
mod components {
    pub mod cursor_trail;
}
mod pages {
    pub mod booking;
    pub mod landing;
}

use pages::{booking::Booking, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/book")]
    Booking,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Booking => {
            info!("Rendering Booking page");
            html! { <Booking /> }
        }
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
