//! Inline stroke icons, drawn on a 24x24 grid.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: String,
}

fn outline(class: &str, shapes: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class={class.to_string()}
        >
            { shapes }
        </svg>
    }
}

#[function_component(Truck)]
pub fn truck(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <path d="M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2" />
            <path d="M15 18H9" />
            <path d="M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14" />
            <circle cx="17" cy="18" r="2" />
            <circle cx="7" cy="18" r="2" />
        </>
    })
}

#[function_component(Phone)]
pub fn phone(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
    })
}

#[function_component(Mail)]
pub fn mail(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        </>
    })
}

#[function_component(MapPin)]
pub fn map_pin(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        </>
    })
}

#[function_component(Menu)]
pub fn menu(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </>
    })
}

#[function_component(Close)]
pub fn close(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </>
    })
}

#[function_component(ArrowRight)]
pub fn arrow_right(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        </>
    })
}

#[function_component(CheckCircle)]
pub fn check_circle(props: &IconProps) -> Html {
    outline(&props.class, html! {
        <>
            <circle cx="12" cy="12" r="10" />
            <path d="m9 12 2 2 4-4" />
        </>
    })
}
