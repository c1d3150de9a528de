use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace as ECMAScript's `\s` defines it. Rust's `\s` differs: it
/// includes U+0085 and leaves out U+FEFF.
const JS_WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{2})([0-9]{4})([0-9]{4})").unwrap());
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let local = format!("[^{}@]+", JS_WHITESPACE);
    Regex::new(&format!("^{local}@{local}\\.{local}$", local = local)).unwrap()
});

/// Something `cn!` accepts: plain strings, or an `Option` of one for
/// conditional classes.
pub trait ClassFragment {
    fn push_to(self, out: &mut String);
}

impl ClassFragment for &str {
    fn push_to(self, out: &mut String) {
        out.push(' ');
        out.push_str(self);
    }
}

impl ClassFragment for String {
    fn push_to(self, out: &mut String) {
        self.as_str().push_to(out);
    }
}

impl ClassFragment for &String {
    fn push_to(self, out: &mut String) {
        self.as_str().push_to(out);
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn push_to(self, out: &mut String) {
        if let Some(fragment) = self {
            fragment.push_to(out);
        }
    }
}

/// Combines class fragments into one class string.
///
/// Conditionals read as `cn!("text-white", scrolled.then_some("text-gray-700"))`.
/// Fragments are joined in argument order before merging, so later Tailwind
/// utilities override earlier ones from the same group; see [`tw_merge`].
#[macro_export]
macro_rules! cn {
    ($($fragment:expr),* $(,)?) => {{
        let mut joined = ::std::string::String::new();
        $( $crate::utils::ClassFragment::push_to($fragment, &mut joined); )*
        $crate::utils::tw_merge(&joined)
    }};
}

/// Splits "2 + 4 + 4" digits as "XX XXXX XXXX". Only the first match is
/// rewritten; anything else comes back untouched.
pub fn format_phone(phone: &str) -> String {
    PHONE_PATTERN.replacen(phone, 1, "$1 $2 $3").into_owned()
}

/// Syntactic sanity check only: `something@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Drops duplicate classes and resolves Tailwind conflicts, last one wins.
///
/// Conflicts are only detected between classes carrying the same variant
/// prefix (`hover:`, `md:` ...) and important marker. Classes that are not
/// recognised as Tailwind utilities are always kept.
pub fn tw_merge(classes: &str) -> String {
    let tokens: Vec<&str> = classes.split_whitespace().collect();
    let mut seen_tokens: HashSet<&str> = HashSet::new();
    let mut taken: HashSet<(String, &'static str)> = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

    for token in tokens.into_iter().rev() {
        if !seen_tokens.insert(token) {
            continue;
        }
        let (modifiers, utility) = split_modifiers(token);
        let Some(group) = class_group(utility) else {
            kept.push(token);
            continue;
        };
        let scope = modifiers.to_string();
        if taken.contains(&(scope.clone(), group)) {
            continue;
        }
        for &overridden in conflicting_groups(group) {
            taken.insert((scope.clone(), overridden));
        }
        taken.insert((scope, group));
        kept.push(token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Splits `md:hover:!-mt-2` into (`md:hover:!`, `mt-2`).
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut base_start = 0;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => base_start = index + 1,
            _ => {}
        }
    }
    let mut base = &token[base_start..];
    let mut prefix_end = base_start;
    if let Some(rest) = base.strip_prefix('!') {
        base = rest;
        prefix_end += 1;
    }
    (&token[..prefix_end], base.strip_prefix('-').unwrap_or(base))
}

const SIZES: &[&str] = &[
    "xs", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

fn is_size(value: &str) -> bool {
    SIZES.contains(&value)
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

/// Arbitrary value that reads as a CSS length rather than a color.
fn is_length(inner: &str) -> bool {
    inner.starts_with("length:")
        || inner.starts_with("calc(")
        || inner.starts_with("clamp(")
        || inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn class_group(utility: &str) -> Option<&'static str> {
    let exact = match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "hidden" | "contents" | "table" | "flow-root" => Some("display"),
        "static" | "fixed" | "absolute" | "relative" | "sticky" => Some("position"),
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => Some("flex-direction"),
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => Some("flex-wrap"),
        "flex-1" | "flex-auto" | "flex-initial" | "flex-none" => Some("flex"),
        "shrink" | "shrink-0" | "flex-shrink" | "flex-shrink-0" => Some("shrink"),
        "grow" | "grow-0" | "flex-grow" | "flex-grow-0" => Some("grow"),
        "rounded" => Some("rounded"),
        "shadow" => Some("shadow"),
        "border" => Some("border-width"),
        "transition" => Some("transition"),
        "transform" | "transform-none" => Some("transform"),
        "blur" => Some("blur"),
        "italic" | "not-italic" => Some("font-style"),
        "underline" | "overline" | "line-through" | "no-underline" => Some("text-decoration"),
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => Some("text-transform"),
        "antialiased" | "subpixel-antialiased" => Some("font-smoothing"),
        "container" => Some("container"),
        _ => None,
    };
    if exact.is_some() {
        return exact;
    }

    let (head, value) = utility.split_once('-')?;
    let group = match head {
        "text" => text_group(value),
        "bg" => bg_group(value),
        "font" => font_group(value),
        "border" => border_group(value),
        "rounded" => rounded_group(value),
        "shadow" => {
            if is_size(value) || value == "inner" || value == "none" {
                "shadow"
            } else {
                "shadow-color"
            }
        }
        "p" | "px" | "py" | "pt" | "pr" | "pb" | "pl" | "ps" | "pe" | "m" | "mx" | "my" | "mt"
        | "mr" | "mb" | "ml" | "ms" | "me" | "w" | "h" | "z" | "top" | "right" | "bottom"
        | "left" | "inset" | "gap" | "opacity" | "duration" | "delay" | "ease" | "leading"
        | "tracking" | "order" | "aspect" | "from" | "via" | "to" | "size" | "basis" | "cursor"
        | "overflow" | "items" | "justify" | "self" | "content" | "place" | "whitespace"
        | "break" | "object" | "fill" | "stroke" | "ring" => spacing_like(head, value),
        "min" | "max" | "space" | "translate" | "scale" | "rotate" | "skew" => {
            axis_group(head, value)?
        }
        "backdrop" => match value.split_once('-') {
            Some(("blur", _)) => "backdrop-blur",
            _ if value == "blur" => "backdrop-blur",
            _ => return None,
        },
        "blur" => "blur",
        "transition" => "transition",
        "grid" => match value.split_once('-') {
            Some(("cols", _)) => "grid-cols",
            Some(("rows", _)) => "grid-rows",
            _ => return None,
        },
        "col" => "col",
        "row" => "row",
        "animate" => "animate",
        "line" => "line-clamp",
        _ => return None,
    };
    Some(group)
}

fn text_group(value: &str) -> &'static str {
    match value {
        v if is_size(v) => "font-size",
        v if is_arbitrary(v) && is_length(&v[1..v.len() - 1]) => "font-size",
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        "ellipsis" | "clip" => "text-overflow",
        _ => "text-color",
    }
}

fn bg_group(value: &str) -> &'static str {
    match value {
        "fixed" | "local" | "scroll" => "bg-attachment",
        "auto" | "cover" | "contain" => "bg-size",
        "center" | "top" | "bottom" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" => "bg-position",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        "none" => "bg-image",
        v if v.starts_with("gradient-") => "bg-image",
        v if v.starts_with("clip-") => "bg-clip",
        v if v.starts_with("[size:") || v.starts_with("[length:") => "bg-size",
        v if v.starts_with("[url(") || v.starts_with("[image:") => "bg-image",
        v if v.starts_with("grid-") => "bg-pattern",
        _ => "bg-color",
    }
}

fn font_group(value: &str) -> &'static str {
    match value {
        "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
        | "extrabold" | "black" => "font-weight",
        _ => "font-family",
    }
}

fn border_group(value: &str) -> &'static str {
    let width = |v: &str| v.chars().all(|c| c.is_ascii_digit()) || is_arbitrary(v);
    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => "border-style",
        "collapse" | "separate" => "border-collapse",
        v if width(v) => "border-width",
        "x" => "border-w-x",
        "y" => "border-w-y",
        "t" => "border-w-t",
        "r" => "border-w-r",
        "b" => "border-w-b",
        "l" => "border-w-l",
        v => match v.split_once('-') {
            Some(("x", rest)) if width(rest) => "border-w-x",
            Some(("y", rest)) if width(rest) => "border-w-y",
            Some(("t", rest)) if width(rest) => "border-w-t",
            Some(("r", rest)) if width(rest) => "border-w-r",
            Some(("b", rest)) if width(rest) => "border-w-b",
            Some(("l", rest)) if width(rest) => "border-w-l",
            _ => "border-color",
        },
    }
}

fn rounded_group(value: &str) -> &'static str {
    let side = value.split_once('-').map_or(value, |(side, _)| side);
    match side {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => "rounded",
    }
}

fn spacing_like(head: &str, value: &str) -> &'static str {
    match head {
        "p" => "p",
        "px" => "px",
        "py" => "py",
        "pt" => "pt",
        "pr" => "pr",
        "pb" => "pb",
        "pl" => "pl",
        "ps" => "ps",
        "pe" => "pe",
        "m" => "m",
        "mx" => "mx",
        "my" => "my",
        "mt" => "mt",
        "mr" => "mr",
        "mb" => "mb",
        "ml" => "ml",
        "ms" => "ms",
        "me" => "me",
        "w" => "w",
        "h" => "h",
        "z" => "z",
        "top" => "top",
        "right" => "right",
        "bottom" => "bottom",
        "left" => "left",
        "inset" => match value.split_once('-') {
            Some(("x", _)) => "inset-x",
            Some(("y", _)) => "inset-y",
            _ => "inset",
        },
        "gap" => match value.split_once('-') {
            Some(("x", _)) => "gap-x",
            Some(("y", _)) => "gap-y",
            _ => "gap",
        },
        "opacity" => "opacity",
        "duration" => "duration",
        "delay" => "delay",
        "ease" => "ease",
        "leading" => "leading",
        "tracking" => "tracking",
        "order" => "order",
        "aspect" => "aspect",
        "from" | "via" | "to" if value.ends_with('%') => match head {
            "from" => "gradient-from-position",
            "via" => "gradient-via-position",
            _ => "gradient-to-position",
        },
        "from" => "gradient-from",
        "via" => "gradient-via",
        "to" => "gradient-to",
        "size" => "size",
        "basis" => "basis",
        "cursor" => "cursor",
        "overflow" => match value.split_once('-') {
            Some(("x", _)) => "overflow-x",
            Some(("y", _)) => "overflow-y",
            _ => "overflow",
        },
        "items" => "align-items",
        "justify" => match value.split_once('-') {
            Some(("items", _)) => "justify-items",
            Some(("self", _)) => "justify-self",
            _ => "justify-content",
        },
        "self" => "align-self",
        "content" => "align-content",
        "place" => match value.split_once('-') {
            Some(("items", _)) => "place-items",
            Some(("self", _)) => "place-self",
            _ => "place-content",
        },
        "whitespace" => "whitespace",
        "break" => "word-break",
        "object" => "object-fit",
        "fill" => "fill",
        "stroke" => "stroke",
        _ => match value {
            v if v.starts_with("offset") => "ring-offset",
            v if v.chars().all(|c| c.is_ascii_digit()) || v == "inset" => "ring-width",
            _ => "ring-color",
        },
    }
}

fn axis_group(head: &str, value: &str) -> Option<&'static str> {
    let (axis, _) = value.split_once('-').unwrap_or((value, ""));
    let group = match (head, axis) {
        ("min", "w") => "min-w",
        ("min", "h") => "min-h",
        ("max", "w") => "max-w",
        ("max", "h") => "max-h",
        ("space", "x") => "space-x",
        ("space", "y") => "space-y",
        ("translate", "x") => "translate-x",
        ("translate", "y") => "translate-y",
        ("scale", "x") => "scale-x",
        ("scale", "y") => "scale-y",
        ("scale", _) => "scale",
        ("rotate", _) => "rotate",
        ("skew", "x") => "skew-x",
        ("skew", "y") => "skew-y",
        _ => return None,
    };
    Some(group)
}

/// Longhand groups that a later shorthand wipes out.
fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "size" => &["w", "h"],
        "gap" => &["gap-x", "gap-y"],
        "rounded" => &[
            "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-tl", "rounded-tr",
            "rounded-br", "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-width" => &[
            "border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "overflow" => &["overflow-x", "overflow-y"],
        "scale" => &["scale-x", "scale-y"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conditional_class_overrides_base_color() {
        let condition = true;
        assert_eq!(cn!("text-red-500", condition.then_some("text-blue-500")), "text-blue-500");
        let condition = false;
        assert_eq!(cn!("text-red-500", condition.then_some("text-blue-500")), "text-red-500");
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(tw_merge("px-4 font-medium font-medium"), "px-4 font-medium");
        assert_eq!(cn!("reveal", "reveal", String::from("reveal")), "reveal");
    }

    #[test]
    fn repeated_class_keeps_its_last_position() {
        assert_eq!(cn!("text-red-500", "text-blue-500", "text-red-500"), "text-red-500");
        assert_eq!(cn!("p-4", "px-2", "p-4"), "p-4");
        assert_eq!(cn!("reveal", "font-bold", "reveal"), "font-bold reveal");
        let base = String::from("text-white");
        assert_eq!(cn!(&base, None::<&str>, Some("text-gray-700")), "text-gray-700");
    }

    #[test]
    fn arbitrary_text_values_split_size_from_color() {
        assert_eq!(tw_merge("text-lg text-[14px]"), "text-[14px]");
        assert_eq!(tw_merge("text-[1.5rem] text-sm"), "text-sm");
        assert_eq!(tw_merge("text-lg text-[#333]"), "text-lg text-[#333]");
    }

    #[test]
    fn different_groups_under_same_prefix_coexist() {
        assert_eq!(tw_merge("text-lg text-red-500 text-center"), "text-lg text-red-500 text-center");
        assert_eq!(tw_merge("font-display font-bold font-medium"), "font-display font-medium");
    }

    #[test]
    fn variants_scope_conflicts() {
        assert_eq!(
            tw_merge("text-white hover:text-brand-accent text-gray-700"),
            "hover:text-brand-accent text-gray-700"
        );
        assert_eq!(tw_merge("md:hidden hidden md:flex"), "hidden md:flex");
    }

    #[test]
    fn shorthand_wipes_earlier_longhands_only() {
        assert_eq!(tw_merge("px-2 py-1 p-3"), "p-3");
        assert_eq!(tw_merge("p-3 px-2"), "p-3 px-2");
        assert_eq!(tw_merge("rounded-t-lg rounded-xl"), "rounded-xl");
    }

    #[test]
    fn background_fragments_are_split_by_property() {
        assert_eq!(tw_merge("bg-white/95 bg-transparent"), "bg-transparent");
        assert_eq!(
            tw_merge("bg-gradient-to-br bg-slate-900 bg-clip-text"),
            "bg-gradient-to-br bg-slate-900 bg-clip-text"
        );
    }

    #[test]
    fn negative_and_arbitrary_values() {
        assert_eq!(tw_merge("-bottom-6 bottom-2"), "bottom-2");
        assert_eq!(tw_merge("bg-[size:20px_20px] bg-cover"), "bg-cover");
        assert_eq!(tw_merge("border-2 border-white/30 border"), "border-white/30 border");
        assert_eq!(
            tw_merge("focus-visible:ring-2 focus-visible:ring-offset-2 focus-visible:ring-4"),
            "focus-visible:ring-offset-2 focus-visible:ring-4"
        );
    }

    #[test]
    fn unknown_classes_are_kept() {
        assert_eq!(tw_merge("site-header reveal reveal"), "site-header reveal");
        assert_eq!(tw_merge(""), "");
    }

    #[test]
    fn phone_is_split_two_four_four() {
        assert_eq!(format_phone("1234567890"), "12 3456 7890");
        assert_eq!(format_phone(&"441234567890"[2..]), "12 3456 7890");
        assert_eq!(format_phone("123"), "123");
    }

    #[test]
    fn phone_only_rewrites_first_run() {
        assert_eq!(format_phone("441234567890"), "44 1234 567890");
        assert_eq!(format_phone("tel 0123456789"), "tel 01 2345 6789");
        assert_eq!(format_phone("+44 123 456 7890"), "+44 123 456 7890");
        // Only ASCII digits count.
        assert_eq!(format_phone("١٢٣٤٥٦٧٨٩٠"), "١٢٣٤٥٦٧٨٩٠");
        assert_eq!(format_phone("１２３４５６７８９０"), "１２３４５６７８９０");
    }

    #[test]
    fn email_check_is_permissive_but_needs_a_dot() {
        assert!(is_valid_email("info@szitrans.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@sub.domain.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn email_whitespace_follows_ecmascript() {
        assert!(!is_valid_email("a\u{FEFF}b@c.d"));
        assert!(!is_valid_email("a@b\u{00A0}c.d"));
        assert!(!is_valid_email("a@b.c\u{3000}d"));
        assert!(is_valid_email("a\u{0085}b@c.d"));
        assert!(is_valid_email("a@b.c\u{180E}"));
    }
}
