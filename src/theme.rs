use yew::prelude::*;

/// An sRGB color kept as channels so Tailwind can apply `/<alpha>` modifiers
/// on top of the CSS variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn channels(self) -> String {
        format!("{} {} {}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrandTokens {
    pub primary: Rgb,
    pub accent: Rgb,
    pub body_font: &'static str,
    pub display_font: &'static str,
}

pub const BRAND: BrandTokens = BrandTokens {
    primary: Rgb(30, 58, 138),
    accent: Rgb(249, 115, 22),
    body_font: "Inter",
    display_font: "Plus Jakarta Sans",
};

impl BrandTokens {
    /// `:root` declarations that `tailwind.config.js` points the
    /// `brand-*` colors and `font-sans`/`font-display` families at.
    pub fn stylesheet(&self) -> String {
        format!(
            ":root {{\n\
             \x20 --brand-primary: {primary};\n\
             \x20 --brand-accent: {accent};\n\
             \x20 --font-body: \"{body}\", ui-sans-serif, system-ui, sans-serif;\n\
             \x20 --font-display: \"{display}\", ui-sans-serif, system-ui, sans-serif;\n\
             }}\n",
            primary = self.primary.channels(),
            accent = self.accent.channels(),
            body = self.body_font,
            display = self.display_font,
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProps {
    #[prop_or(BRAND)]
    pub tokens: BrandTokens,
}

#[function_component(Theme)]
pub fn theme(props: &ThemeProps) -> Html {
    html! {
        <style>{ props.tokens.stylesheet() }</style>
    }
}
