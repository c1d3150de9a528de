use wasm_bindgen::JsValue;
use web_sys::Document;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

pub const SITE: PageMeta = PageMeta {
    title: "S&Z Trading International | European Logistics Excellence",
    description: "Reliable transport logistics solutions across UK, Europe and globally. On-time delivery, competitive rates, expert service since 2022.",
    keywords: "logistics, freight transport, UK shipping, European transport, global logistics",
};

impl PageMeta {
    /// `<meta name=..>` pairs this page wants in the document head.
    pub fn named_tags(&self) -> [(&'static str, &'static str); 2] {
        [("description", self.description), ("keywords", self.keywords)]
    }

    /// Pushes title and meta tags into the live document, creating tags that
    /// `index.html` did not ship.
    pub fn apply(&self, document: &Document) -> Result<(), JsValue> {
        document.set_title(self.title);
        let head = document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

        for (name, content) in self.named_tags() {
            let selector = format!("meta[name=\"{}\"]", name);
            let tag = match document.query_selector(&selector)? {
                Some(tag) => tag,
                None => {
                    let tag = document.create_element("meta")?;
                    tag.set_attribute("name", name)?;
                    head.append_child(&tag)?;
                    tag
                }
            };
            tag.set_attribute("content", content)?;
        }
        Ok(())
    }
}
