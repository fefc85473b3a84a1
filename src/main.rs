use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod booking;
mod config;
mod dom;
mod models;
mod pricing;
mod submission;
mod pages {
    pub mod home;
}
mod components {
    pub mod booking_form;
    pub mod footer;
    pub mod nav;
    pub mod pricing;
    pub mod promos;
    pub mod radio_card;
}

use pages::home::Home;

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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
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

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(LOG_LEVEL).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
