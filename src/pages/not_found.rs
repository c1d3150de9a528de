use yew::prelude::*;
use yew_router::prelude::*;

use crate::layout::footer::Footer;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <main class="min-h-screen flex flex-col items-center justify-center bg-slate-900 text-white px-4">
                <h1 class="text-6xl font-display font-bold text-brand-accent mb-4">{"404"}</h1>
                <p class="text-xl text-gray-300 mb-8">{"This page took a wrong turn."}</p>
                <Link<Route> to={Route::Home} classes="text-brand-accent hover:text-orange-400 font-medium">
                    {"Back to the home page"}
                </Link<Route>>
            </main>
            <Footer />
        </>
    }
}
