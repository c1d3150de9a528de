use yew::prelude::*;

use crate::button::{button_class, Size, Variant};
use crate::cn;
use crate::config;
use crate::icons::{ArrowRight, CheckCircle, Phone, Truck};

pub const FEATURES: &[&str] = &[
    "On-Time Delivery Guaranteed",
    "Competitive Pricing",
    "25+ Countries Covered",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 2] = [
    Stat { value: "15,000+", label: "Deliveries" },
    Stat { value: "98%", label: "On-Time Rate" },
];

/// Parts of the hero that animate in on mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Badge,
    Headline,
    Copy,
    Feature(usize),
    Actions,
    Visual,
    Stat(usize),
    ScrollCue,
}

/// Starting pose a block animates out of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// From 30px lower.
    Rise,
    /// From 20px to the left.
    Slide,
    /// From slightly scaled down.
    Zoom,
    /// Opacity only.
    Fade,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::Rise => "reveal reveal-rise",
            Motion::Slide => "reveal reveal-slide",
            Motion::Zoom => "reveal reveal-zoom",
            Motion::Fade => "reveal reveal-fade",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub motion: Motion,
}

impl Reveal {
    pub fn style(&self) -> String {
        format!(
            "animation-delay: {}ms; animation-duration: {}ms;",
            self.delay_ms, self.duration_ms
        )
    }
}

const FEATURE_START_MS: u32 = 500;
const FEATURE_STAGGER_MS: u32 = 100;
const STAT_STAGGER_MS: u32 = 200;

fn actions_at() -> u32 {
    FEATURE_START_MS + FEATURES.len() as u32 * FEATURE_STAGGER_MS
}

fn stats_at() -> u32 {
    actions_at() + 200
}

impl Block {
    /// Entrance schedule. Every delay is derived from the one before it, so
    /// growing the feature list pushes the rest of the hero back.
    pub fn reveal(self) -> Reveal {
        let (delay_ms, duration_ms, motion) = match self {
            Block::Badge => (200, 400, Motion::Zoom),
            Block::Headline => (300, 600, Motion::Rise),
            Block::Copy => (400, 600, Motion::Rise),
            Block::Feature(index) => (
                FEATURE_START_MS + index as u32 * FEATURE_STAGGER_MS,
                400,
                Motion::Slide,
            ),
            Block::Actions => (actions_at(), 500, Motion::Rise),
            Block::Visual => (actions_at() + 100, 800, Motion::Zoom),
            Block::Stat(index) => (stats_at() + index as u32 * STAT_STAGGER_MS, 500, Motion::Rise),
            Block::ScrollCue => (
                stats_at() + STATS.len() as u32 * STAT_STAGGER_MS + 100,
                600,
                Motion::Fade,
            ),
        };
        Reveal { delay_ms, duration_ms, motion }
    }

    fn name(self) -> String {
        match self {
            Block::Badge => "badge".to_string(),
            Block::Headline => "headline".to_string(),
            Block::Copy => "copy".to_string(),
            Block::Feature(index) => format!("feature-{}", index),
            Block::Actions => "actions".to_string(),
            Block::Visual => "visual".to_string(),
            Block::Stat(index) => format!("stat-{}", index),
            Block::ScrollCue => "scroll-cue".to_string(),
        }
    }
}

/// All animated blocks, in the order they appear on screen.
pub fn sequence() -> Vec<Block> {
    let mut blocks = vec![Block::Badge, Block::Headline, Block::Copy];
    blocks.extend((0..FEATURES.len()).map(Block::Feature));
    blocks.extend([Block::Actions, Block::Visual]);
    blocks.extend((0..STATS.len()).map(Block::Stat));
    blocks.push(Block::ScrollCue);
    blocks
}

/// Class, inline timing and marker attribute for an animated block.
fn animated(block: Block, class: &str) -> (String, String, String) {
    let reveal = block.reveal();
    (
        cn!(class, reveal.motion.class()),
        reveal.style(),
        block.name(),
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let (badge_class, badge_style, badge_name) = animated(
        Block::Badge,
        "inline-flex items-center space-x-2 bg-brand-accent/10 border border-brand-accent/20 rounded-full px-4 py-2 mb-6",
    );
    let (headline_class, headline_style, headline_name) = animated(
        Block::Headline,
        "text-4xl md:text-5xl lg:text-6xl font-display font-bold mb-6 leading-tight",
    );
    let (copy_class, copy_style, copy_name) =
        animated(Block::Copy, "text-xl text-gray-300 mb-8 leading-relaxed");
    let (actions_class, actions_style, actions_name) =
        animated(Block::Actions, "flex flex-col sm:flex-row gap-4");
    let (visual_class, visual_style, visual_name) =
        animated(Block::Visual, "relative hidden lg:block");
    let (deliveries_class, deliveries_style, deliveries_name) = animated(
        Block::Stat(0),
        "absolute -bottom-6 -left-6 bg-white rounded-xl shadow-2xl p-4",
    );
    let (on_time_class, on_time_style, on_time_name) = animated(
        Block::Stat(1),
        "absolute -top-6 -right-6 bg-brand-accent rounded-xl shadow-2xl p-4",
    );
    let (cue_class, cue_style, cue_name) = animated(
        Block::ScrollCue,
        "absolute bottom-8 left-1/2 transform -translate-x-1/2",
    );

    let quote_class = button_class(
        Variant::Solid,
        Size::Large,
        "bg-brand-accent hover:bg-orange-600 text-white text-lg px-8 group",
    );
    let call_class = button_class(
        Variant::Outline,
        Size::Large,
        "border-white/20 text-white hover:bg-white/10 text-lg px-8 group",
    );

    html! {
        <section class="hero relative min-h-screen flex items-center overflow-hidden bg-gradient-to-br from-slate-900 via-blue-900 to-slate-900">
            <div class="hero-grid absolute inset-0"></div>
            <div class="absolute inset-0 bg-gradient-to-t from-slate-900/50 to-transparent"></div>

            <div class="container relative mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="text-white">
                        <div class={badge_class} style={badge_style} data-reveal={badge_name}>
                            <span class="h-2 w-2 bg-brand-accent rounded-full animate-pulse"></span>
                            <span class="text-sm font-medium">
                                {format!("Trusted Since {}", config::FOUNDED_YEAR)}
                            </span>
                        </div>

                        <h1 class={headline_class} style={headline_style} data-reveal={headline_name}>
                            {"European Logistics "}
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-brand-accent to-orange-400">
                                {"Excellence"}
                            </span>
                        </h1>

                        <p class={copy_class} style={copy_style} data-reveal={copy_name}>
                            {"Delivering your goods safely and efficiently across the UK, Europe, and beyond. \
                              Professional transport solutions tailored to your business needs."}
                        </p>

                        <div class="space-y-3 mb-8">
                            { for FEATURES.iter().enumerate().map(|(index, feature)| {
                                let (class, style, name) =
                                    animated(Block::Feature(index), "flex items-center space-x-3");
                                html! {
                                    <div key={*feature} class={class} style={style} data-reveal={name}>
                                        <CheckCircle class="h-5 w-5 text-brand-accent flex-shrink-0" />
                                        <span class="text-gray-200">{*feature}</span>
                                    </div>
                                }
                            }) }
                        </div>

                        <div class={actions_class} style={actions_style} data-reveal={actions_name}>
                            <a href={config::QUOTE_TARGET} class={quote_class}>
                                {"Request Quote"}
                                <ArrowRight class="ml-2 h-5 w-5 group-hover:translate-x-1 transition-transform" />
                            </a>
                            <a href={config::PHONE_HREF} class={call_class}>
                                <Phone class="mr-2 h-5 w-5" />
                                {"Call Us Now"}
                            </a>
                        </div>
                    </div>

                    <div class={visual_class} style={visual_style} data-reveal={visual_name}>
                        <div class="relative">
                            <div class="absolute inset-0 bg-gradient-to-tr from-brand-accent/20 to-blue-500/20 rounded-2xl blur-3xl"></div>
                            <div class="relative bg-gradient-to-br from-slate-800 to-slate-900 rounded-2xl p-8 border border-white/10">
                                <div class="aspect-[4/3] bg-gradient-to-br from-blue-600/20 to-orange-600/20 rounded-xl flex items-center justify-center">
                                    <div class="text-center">
                                        <Truck class="h-24 w-24 text-white/20 mx-auto mb-4" />
                                        <p class="text-gray-400 text-sm">{"Our fleet"}</p>
                                        <p class="text-gray-500 text-xs mt-2">
                                            {"Road and rail freight across the UK and Europe"}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class={deliveries_class} style={deliveries_style} data-reveal={deliveries_name}>
                            <div class="flex items-center space-x-3">
                                <div class="h-12 w-12 bg-brand-accent/10 rounded-lg flex items-center justify-center">
                                    <CheckCircle class="h-6 w-6 text-brand-accent" />
                                </div>
                                <div>
                                    <div class="text-2xl font-bold text-gray-900">{STATS[0].value}</div>
                                    <div class="text-sm text-gray-600">{STATS[0].label}</div>
                                </div>
                            </div>
                        </div>

                        <div class={on_time_class} style={on_time_style} data-reveal={on_time_name}>
                            <div class="text-center">
                                <div class="text-3xl font-bold text-white">{STATS[1].value}</div>
                                <div class="text-sm text-orange-100">{STATS[1].label}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class={cue_class} style={cue_style} data-reveal={cue_name}>
                <div class="flex flex-col items-center space-y-2">
                    <span class="text-white/60 text-sm">{"Scroll to explore"}</span>
                    <div class="scroll-cue h-8 w-5 border-2 border-white/30 rounded-full flex justify-center pt-2">
                        <div class="h-1.5 w-1.5 bg-white rounded-full"></div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .hero-grid {
                        background-image:
                            linear-gradient(to right, rgba(255, 255, 255, 0.05) 1px, transparent 1px),
                            linear-gradient(to bottom, rgba(255, 255, 255, 0.05) 1px, transparent 1px);
                        background-size: 20px 20px;
                    }

                    .reveal {
                        animation-timing-function: ease-out;
                        animation-fill-mode: both;
                    }
                    .reveal-rise { animation-name: reveal-rise; }
                    .reveal-slide { animation-name: reveal-slide; }
                    .reveal-zoom { animation-name: reveal-zoom; }
                    .reveal-fade { animation-name: reveal-fade; }

                    @keyframes reveal-rise {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes reveal-slide {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes reveal-zoom {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes reveal-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    /* Runs on the compositor for as long as the cue is mounted */
                    .scroll-cue {
                        animation: scroll-bob 1.5s ease-in-out infinite;
                    }
                    @keyframes scroll-bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(8px); }
                    }

                    @media (prefers-reduced-motion: reduce) {
                        .reveal, .scroll-cue {
                            animation: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn delay(block: Block) -> u32 {
        block.reveal().delay_ms
    }

    #[test]
    fn sequence_covers_every_block_once() {
        let blocks = sequence();
        assert_eq!(blocks.len(), 3 + FEATURES.len() + 2 + STATS.len() + 1);
        assert_eq!(blocks.first(), Some(&Block::Badge));
        assert_eq!(blocks.last(), Some(&Block::ScrollCue));
    }

    #[test]
    fn blocks_appear_in_presentation_order() {
        let delays: Vec<u32> = sequence().into_iter().map(delay).collect();
        assert!(
            delays.windows(2).all(|pair| pair[0] < pair[1]),
            "delays not strictly increasing: {:?}",
            delays
        );
    }

    #[test]
    fn features_stagger_between_copy_and_actions() {
        assert!(delay(Block::Copy) < delay(Block::Feature(0)));
        let last = Block::Feature(FEATURES.len() - 1);
        assert!(delay(last) < delay(Block::Actions));
        assert!(delay(Block::Actions) < delay(Block::Visual));
        assert!(delay(Block::Stat(1)) < delay(Block::ScrollCue));
    }

    #[test]
    fn every_block_starts_hidden_and_moves_or_fades() {
        for block in sequence() {
            let reveal = block.reveal();
            assert!(reveal.duration_ms > 0);
            assert!(reveal.motion.class().starts_with("reveal "));
        }
        assert_eq!(Block::Feature(0).reveal().motion, Motion::Slide);
        assert_eq!(Block::ScrollCue.reveal().motion, Motion::Fade);
    }

    #[test]
    fn reveal_style_carries_timing() {
        let reveal = Reveal { delay_ms: 700, duration_ms: 500, motion: Motion::Rise };
        assert_eq!(reveal.style(), "animation-delay: 700ms; animation-duration: 500ms;");
    }

    #[tokio::test]
    async fn rendered_blocks_reveal_top_to_bottom() {
        let html = yew::ServerRenderer::<Hero>::new()
            .hydratable(false)
            .render()
            .await;

        let marker = Regex::new(r#"data-reveal="([a-z0-9-]+)""#).unwrap();
        let rendered: Vec<&str> = marker
            .captures_iter(&html)
            .map(|caps| caps.get(1).unwrap().as_str())
            .collect();
        let expected: Vec<String> = sequence().into_iter().map(Block::name).collect();
        assert_eq!(rendered, expected);

        let timing = Regex::new(r"animation-delay: (\d+)ms").unwrap();
        let delays: Vec<u32> = timing
            .captures_iter(&html)
            .map(|caps| caps[1].parse().unwrap())
            .collect();
        assert_eq!(delays.len(), expected.len());
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn renders_copy_features_and_calls_to_action() {
        let html = yew::ServerRenderer::<Hero>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains("Trusted Since 2022"));
        assert!(html.contains("Excellence"));
        for feature in FEATURES {
            assert!(html.contains(feature), "{}", feature);
        }
        for stat in STATS {
            assert!(html.contains(stat.value));
            assert!(html.contains(stat.label));
        }
        assert!(html.contains("href=\"/contact\""));
        assert!(html.contains("href=\"tel:+441234567890\""));
        assert!(html.contains("scroll-cue h-8"));
        assert!(html.contains("infinite"));
    }
}
