use yew::prelude::*;

use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::sections::hero::Hero;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Header />
            <main>
                <Hero />
            </main>
            <Footer />
        </>
    }
}
