use crate::cn;

const BASE: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Solid,
    Outline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Size {
    Default,
    Large,
}

/// Class string for an anchor styled as a button. `extra` wins over the
/// variant defaults wherever they touch the same property.
pub fn button_class(variant: Variant, size: Size, extra: &str) -> String {
    let variant = match variant {
        Variant::Solid => "bg-slate-900 text-white hover:bg-slate-800",
        Variant::Outline => "border border-slate-200 bg-transparent hover:bg-slate-100",
    };
    let size = match size {
        Size::Default => "h-10 px-4 py-2",
        Size::Large => "h-11 rounded-md px-8",
    };
    cn!(BASE, variant, size, extra)
}
