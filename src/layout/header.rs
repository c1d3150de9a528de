use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MouseEvent, Window};
use yew::prelude::*;

use crate::button::{button_class, Size, Variant};
use crate::cn;
use crate::config;
use crate::icons::{Close, Menu, Phone, Truck};
use crate::navigation::{NavLinks, PRIMARY};

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD_PX
}

/// Mobile menu lifecycle. `Closing` keeps the panel mounted while it
/// animates out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuPanel {
    #[default]
    Closed,
    Open,
    Closing,
}

impl MenuPanel {
    pub fn is_open(self) -> bool {
        self == MenuPanel::Open
    }

    pub fn is_mounted(self) -> bool {
        self != MenuPanel::Closed
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuPanel::Open => MenuPanel::Closing,
            MenuPanel::Closed | MenuPanel::Closing => MenuPanel::Open,
        }
    }

    pub fn closed(self) -> Self {
        match self {
            MenuPanel::Open => MenuPanel::Closing,
            other => other,
        }
    }

    pub fn settled(self) -> Self {
        match self {
            MenuPanel::Closing => MenuPanel::Closed,
            other => other,
        }
    }
}

/// Color tokens for one header mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bar: &'static str,
    pub brand_icon: &'static str,
    pub brand_word: &'static str,
    pub link: &'static str,
    pub phone: &'static str,
    pub menu_icon: &'static str,
}

const TOP_OF_PAGE: Palette = Palette {
    bar: "bg-transparent",
    brand_icon: "text-white",
    brand_word: "text-white",
    link: "text-white",
    phone: "text-white hover:text-brand-accent",
    menu_icon: "text-white",
};

const SCROLLED: Palette = Palette {
    bar: "bg-white/95 backdrop-blur-md shadow-md",
    brand_icon: "text-brand-primary",
    brand_word: "text-brand-accent",
    link: "text-gray-700",
    phone: "text-gray-700 hover:text-brand-accent",
    menu_icon: "text-gray-900",
};

impl Palette {
    pub fn for_scroll(scrolled: bool) -> Self {
        if scrolled {
            SCROLLED
        } else {
            TOP_OF_PAGE
        }
    }
}

/// Window scroll listener that unregisters itself when dropped.
struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    fn attach(mut on_offset: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let reader = window.clone();
        let mut report = move || match reader.scroll_y() {
            Ok(offset) => on_offset(offset),
            Err(err) => warn!("Failed to read scroll offset: {:?}", err),
        };

        // Initial check, the page may be restored mid-scroll
        report();

        let callback = Closure::wrap(Box::new(report) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_state_eq(|| false);
    let menu = use_state_eq(MenuPanel::default);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = ScrollSubscription::attach(move |offset| {
                    scrolled.set(is_scrolled(offset));
                })
                .map_err(|err| warn!("Header scroll tracking disabled: {:?}", err))
                .ok();
                move || drop(subscription)
            },
            (),
        );
    }

    // Unmount the mobile panel once its exit animation has played. Dropping
    // the timeout on re-open or unmount cancels it.
    {
        let menu_handle = menu.clone();
        use_effect_with_deps(
            move |panel: &MenuPanel| {
                let timeout = (*panel == MenuPanel::Closing).then(|| {
                    Timeout::new(config::MENU_EXIT_MS, move || {
                        menu_handle.set(menu_handle.settled());
                    })
                });
                move || drop(timeout)
            },
            *menu,
        );
    }

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = menu.toggled();
            debug!("Mobile menu {:?} -> {:?}", *menu, next);
            menu.set(next);
        })
    };

    let on_navigate = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    html! {
        <HeaderBar
            scrolled={*scrolled}
            menu={*menu}
            on_toggle={on_toggle}
            on_navigate={on_navigate}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderBarProps {
    pub scrolled: bool,
    pub menu: MenuPanel,
    pub on_toggle: Callback<MouseEvent>,
    pub on_navigate: Callback<MouseEvent>,
}

/// Stateless rendering of the header for a given scroll mode and menu state.
#[function_component(HeaderBar)]
pub fn header_bar(props: &HeaderBarProps) -> Html {
    let palette = Palette::for_scroll(props.scrolled);
    let quote_class = button_class(Variant::Solid, Size::Default, "bg-brand-accent hover:bg-orange-600 text-white");

    html! {
        <header class={cn!("fixed top-0 left-0 right-0 z-50 transition-all duration-300", palette.bar)}>
            <nav class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    <a href="/" class="flex items-center space-x-2">
                        <Truck class={cn!("h-8 w-8 transition-colors", palette.brand_icon)} />
                        <div class="text-2xl font-display font-bold">
                            <span class="text-brand-primary">{"S&Z"}</span>
                            <span class={cn!("transition-colors", palette.brand_word)}>{" TRADING"}</span>
                        </div>
                    </a>

                    <div class="hidden md:flex items-center space-x-8">
                        <NavLinks
                            items={PRIMARY}
                            class={cn!("font-medium transition-colors hover:text-brand-accent", palette.link)}
                        />
                    </div>

                    <div class="hidden lg:flex items-center space-x-4">
                        <a
                            href={config::PHONE_HREF}
                            class={cn!("flex items-center space-x-2 text-sm font-medium transition-colors", palette.phone)}
                        >
                            <Phone class="h-4 w-4" />
                            <span>{config::PHONE_DISPLAY}</span>
                        </a>
                        <a href={config::QUOTE_TARGET} class={quote_class.clone()}>{"Get Quote"}</a>
                    </div>

                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-100/10 transition-colors"
                        aria-label="Toggle navigation menu"
                        aria-expanded={props.menu.is_open().to_string()}
                        onclick={props.on_toggle.clone()}
                    >
                        if props.menu.is_open() {
                            <Close class={cn!("h-6 w-6", palette.menu_icon)} />
                        } else {
                            <Menu class={cn!("h-6 w-6", palette.menu_icon)} />
                        }
                    </button>
                </div>

                if props.menu.is_mounted() {
                    <div class={cn!(
                        "mobile-panel md:hidden py-4 px-4 border-t border-gray-200 bg-white/95 rounded-b-lg",
                        (props.menu == MenuPanel::Closing).then_some("mobile-panel--closing")
                    )}>
                        <div class="flex flex-col space-y-4">
                            <NavLinks
                                items={PRIMARY}
                                class="text-gray-700 hover:text-brand-accent font-medium transition-colors"
                                onclick={props.on_navigate.clone()}
                            />
                            <div class="pt-4 border-t border-gray-200 space-y-3">
                                <a
                                    href={config::PHONE_HREF}
                                    class="flex items-center space-x-2 text-gray-700 hover:text-brand-accent"
                                >
                                    <Phone class="h-4 w-4" />
                                    <span>{config::PHONE_DISPLAY}</span>
                                </a>
                                <a
                                    href={config::QUOTE_TARGET}
                                    class={cn!(&quote_class, "w-full")}
                                    onclick={props.on_navigate.clone()}
                                >
                                    {"Get Quote"}
                                </a>
                            </div>
                        </div>
                    </div>
                }
            </nav>
            <style>
                {r#"
                    .mobile-panel {
                        animation: panel-enter 200ms ease-out both;
                    }
                    .mobile-panel--closing {
                        animation: panel-exit 200ms ease-in both;
                    }
                    @keyframes panel-enter {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes panel-exit {
                        from { opacity: 1; transform: translateY(0); }
                        to { opacity: 0; transform: translateY(-20px); }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_bar(scrolled: bool, menu: MenuPanel) -> String {
        yew::ServerRenderer::<HeaderBar>::with_props(move || HeaderBarProps {
            scrolled,
            menu,
            on_toggle: Callback::from(|_| ()),
            on_navigate: Callback::from(|_| ()),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuPanel::default(), MenuPanel::Closed);
        assert!(!MenuPanel::default().is_open());
        assert!(!MenuPanel::default().is_mounted());
    }

    #[test]
    fn even_toggles_restore_open_flag() {
        for start in [MenuPanel::Closed, MenuPanel::Open, MenuPanel::Closing] {
            let mut panel = start;
            for flips in 1..=6 {
                panel = panel.toggled();
                if flips % 2 == 0 {
                    assert_eq!(panel.is_open(), start.is_open(), "start {:?}", start);
                } else {
                    assert_ne!(panel.is_open(), start.is_open(), "start {:?}", start);
                }
            }
        }
    }

    #[test]
    fn closing_plays_out_before_unmount() {
        let closing = MenuPanel::Open.toggled();
        assert_eq!(closing, MenuPanel::Closing);
        assert!(closing.is_mounted());
        assert!(!closing.is_open());
        assert_eq!(closing.settled(), MenuPanel::Closed);

        // A settle arriving after a re-open must not hide the panel.
        assert_eq!(closing.toggled().settled(), MenuPanel::Open);
    }

    #[test]
    fn navigating_only_closes_an_open_menu() {
        assert_eq!(MenuPanel::Open.closed(), MenuPanel::Closing);
        assert_eq!(MenuPanel::Closed.closed(), MenuPanel::Closed);
        assert_eq!(MenuPanel::Closing.closed(), MenuPanel::Closing);
    }

    #[test]
    fn palettes_differ_in_every_token() {
        let top = Palette::for_scroll(false);
        let solid = Palette::for_scroll(true);
        assert_ne!(top.bar, solid.bar);
        assert_ne!(top.brand_icon, solid.brand_icon);
        assert_ne!(top.brand_word, solid.brand_word);
        assert_ne!(top.link, solid.link);
        assert_ne!(top.phone, solid.phone);
        assert_ne!(top.menu_icon, solid.menu_icon);
    }

    #[tokio::test]
    async fn top_of_page_is_transparent_with_closed_menu() {
        let html = render_bar(false, MenuPanel::Closed).await;
        assert!(html.contains("bg-transparent"));
        assert!(!html.contains("shadow-md"));
        assert!(!html.contains("mobile-panel md:hidden"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert_eq!(html.matches("href=\"/about\"").count(), 1);
    }

    #[tokio::test]
    async fn scrolled_bar_switches_palette() {
        let html = render_bar(true, MenuPanel::Closed).await;
        assert!(html.contains("bg-white/95 backdrop-blur-md shadow-md"));
        assert!(!html.contains("bg-transparent"));
        assert!(html.contains("text-gray-700"));
    }

    #[tokio::test]
    async fn open_menu_renders_mobile_links() {
        let html = render_bar(false, MenuPanel::Open).await;
        assert!(html.contains("mobile-panel md:hidden"));
        assert!(!html.contains("mobile-panel--closing\""));
        assert!(html.contains("aria-expanded=\"true\""));
        for item in PRIMARY {
            let needle = format!(">{}</a>", item.label);
            assert_eq!(html.matches(&needle).count(), 2, "{}", item.label);
        }
    }

    #[tokio::test]
    async fn closing_menu_stays_mounted_for_exit_animation() {
        let html = render_bar(true, MenuPanel::Closing).await;
        assert!(html.contains("mobile-panel--closing\""));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[tokio::test]
    async fn stateful_header_mounts_closed_and_unscrolled() {
        let html = yew::ServerRenderer::<Header>::new()
            .hydratable(false)
            .render()
            .await;
        assert!(html.contains("bg-transparent"));
        assert!(html.contains("S&amp;Z"));
        assert!(html.contains(config::PHONE_HREF));
        assert!(!html.contains("mobile-panel md:hidden"));
    }
}
