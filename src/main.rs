use log::{debug, info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod button;
mod config;
mod icons;
mod meta;
mod navigation;
mod theme;
mod utils;

mod layout {
    pub mod footer;
    pub mod header;
}
mod sections {
    pub mod hero;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};
use theme::Theme;

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
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        move |_| {
            match web_sys::window().and_then(|window| window.document()) {
                Some(document) => {
                    if let Err(err) = meta::SITE.apply(&document) {
                        warn!("Failed to apply page metadata: {:?}", err);
                    }
                }
                None => warn!("No document to apply page metadata to"),
            }
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Theme />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if !utils::is_valid_email(config::CONTACT_EMAIL) {
        warn!("Contact address {:?} does not look like an email", config::CONTACT_EMAIL);
    }

    debug!(
        "Contact line {} (national digits {})",
        config::PHONE_DISPLAY,
        utils::format_phone(config::PHONE_HREF.trim_start_matches("tel:+44"))
    );

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
