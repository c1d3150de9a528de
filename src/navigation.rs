use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub target: &'static str,
}

impl NavigationItem {
    pub const fn new(label: &'static str, target: &'static str) -> Self {
        Self { label, target }
    }
}

pub const PRIMARY: &[NavigationItem] = &[
    NavigationItem::new("Home", "/"),
    NavigationItem::new("Services", "/services"),
    NavigationItem::new("About", "/about"),
    NavigationItem::new("Contact", "/contact"),
];

pub const SERVICES: &[NavigationItem] = &[
    NavigationItem::new("UK Road Transport", "/services#uk-road"),
    NavigationItem::new("European Transport", "/services#europe"),
    NavigationItem::new("Global Logistics", "/services#global"),
    NavigationItem::new("Railway Transport", "/services#rail"),
];

pub const COMPANY: &[NavigationItem] = &[
    NavigationItem::new("About Us", "/about"),
    NavigationItem::new("Services", "/services"),
    NavigationItem::new("Contact", "/contact"),
];

pub const LEGAL: &[NavigationItem] = &[
    NavigationItem::new("Privacy Policy", "/privacy"),
    NavigationItem::new("Terms of Service", "/terms"),
];

#[derive(Properties, PartialEq)]
pub struct NavLinksProps {
    pub items: &'static [NavigationItem],
    #[prop_or_default]
    pub class: String,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// One anchor per item, in list order.
///
/// Targets like `/services#rail` live outside this app's router, so these are
/// plain anchors rather than router links.
#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <>
            { for props.items.iter().map(|item| html! {
                <a
                    key={item.label}
                    href={item.target}
                    class={props.class.clone()}
                    onclick={props.onclick.clone()}
                >
                    {item.label}
                </a>
            }) }
        </>
    }
}
