use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::icons::{Mail, MapPin, Phone, Truck};
use crate::navigation::{NavLinks, NavigationItem, COMPANY, LEGAL, SERVICES};

/// Where the footer gets "now" from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(i32),
}

impl Clock {
    pub fn current_year(self) -> i32 {
        match self {
            Clock::System => Local::now().year(),
            Clock::Fixed(year) => year,
        }
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub clock: Clock,
}

fn link_column(title: &'static str, items: &'static [NavigationItem]) -> Html {
    html! {
        <div>
            <h3 class="font-semibold text-lg mb-4">{title}</h3>
            <ul class="space-y-2">
                { for items.iter().map(|item| html! {
                    <li key={item.label}>
                        <a
                            href={item.target}
                            class="text-gray-400 hover:text-brand-accent transition-colors text-sm"
                        >
                            {item.label}
                        </a>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    // Read on every render so a long-lived tab picks up the new year.
    let year = props.clock.current_year();

    html! {
        <footer class="bg-slate-900 text-white">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center space-x-2 mb-4">
                            <Truck class="h-8 w-8 text-brand-accent" />
                            <div class="text-xl font-display font-bold">{"S&Z TRADING"}</div>
                        </div>
                        <p class="text-gray-400 text-sm mb-4">
                            {format!(
                                "Delivering your goods safely and efficiently, anytime, anywhere. Trusted transport logistics since {}.",
                                config::FOUNDED_YEAR
                            )}
                        </p>
                    </div>

                    { link_column("Our Services", SERVICES) }
                    { link_column("Company", COMPANY) }

                    <div>
                        <h3 class="font-semibold text-lg mb-4">{"Get In Touch"}</h3>
                        <ul class="space-y-3">
                            <li>
                                <a
                                    href={config::PHONE_HREF}
                                    class="flex items-center space-x-2 text-gray-400 hover:text-brand-accent transition-colors text-sm"
                                >
                                    <Phone class="h-4 w-4" />
                                    <span>{config::PHONE_DISPLAY}</span>
                                </a>
                            </li>
                            <li>
                                <a
                                    href={config::mailto_href()}
                                    class="flex items-center space-x-2 text-gray-400 hover:text-brand-accent transition-colors text-sm"
                                >
                                    <Mail class="h-4 w-4" />
                                    <span>{config::CONTACT_EMAIL}</span>
                                </a>
                            </li>
                            <li>
                                <div class="flex items-start space-x-2 text-gray-400 text-sm">
                                    <MapPin class="h-4 w-4 mt-0.5 flex-shrink-0" />
                                    <span>{config::LOCATION}</span>
                                </div>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-800 mt-8 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-400 text-sm">{copyright_line(year)}</p>
                    <div class="flex space-x-6 mt-4 md:mt-0">
                        <NavLinks
                            items={LEGAL}
                            class="text-gray-400 hover:text-brand-accent text-sm transition-colors"
                        />
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_at(clock: Clock) -> String {
        yew::ServerRenderer::<Footer>::with_props(move || FooterProps { clock })
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    fn copyright_names_company_and_year() {
        assert_eq!(
            copyright_line(2024),
            "© 2024 S&Z Trading International Limited. All rights reserved."
        );
    }

    #[test]
    fn system_clock_reads_local_year() {
        assert_eq!(Clock::System.current_year(), Local::now().year());
        assert_eq!(Clock::default(), Clock::System);
    }

    #[tokio::test]
    async fn copyright_follows_the_clock() {
        let earlier = render_at(Clock::Fixed(2024)).await;
        let later = render_at(Clock::Fixed(2031)).await;

        assert!(earlier.contains("© 2024 S&amp;Z Trading International Limited"));
        assert!(!earlier.contains("© 2031"));
        assert!(later.contains("© 2031 S&amp;Z Trading International Limited"));
        assert_ne!(earlier, later);
    }

    #[tokio::test]
    async fn renders_every_column_and_contact_target() {
        let html = render_at(Clock::Fixed(2025)).await;
        for item in SERVICES.iter().chain(COMPANY).chain(LEGAL) {
            assert!(html.contains(&format!("href=\"{}\"", item.target)), "{}", item.target);
        }
        assert!(html.contains("href=\"tel:+441234567890\""));
        assert!(html.contains("href=\"mailto:info@szitrans.com\""));
        assert!(html.contains("United Kingdom"));
        assert!(html.contains("since 2022."));
    }
}
