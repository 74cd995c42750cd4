// src/parse/page.rs

use scraper::{ElementRef, Html, Selector};
use unicode_normalization::UnicodeNormalization;

/// A parsed HTML document.
pub struct Page {
    doc: Html,
}

/// A single element of a [`Page`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// All `<tag class="class">` elements in document order.
    pub fn find_by_class(&self, tag: &str, class: &str) -> Vec<Node<'_>> {
        let sel = Selector::parse(&format!("{}.{}", tag, class)).expect("tag.class selector");
        self.doc.select(&sel).map(|el| Node { el }).collect()
    }

    /// `href` of the first `<a href>` whose trimmed text is exactly `text`.
    pub fn find_link_by_text(&self, text: &str) -> Option<&str> {
        let sel = Selector::parse("a[href]").expect("anchor selector");
        self.doc
            .select(&sel)
            .find(|el| el.text().collect::<String>().trim() == text)
            .and_then(|el| el.value().attr("href"))
    }
}

impl<'a> Node<'a> {
    /// Concatenated text content; comments are not included.
    pub fn text(&self) -> String {
        self.el.text().collect()
    }

    /// Text normalised the way table cells are compared: NFKD, then trimmed.
    pub fn normalized_text(&self) -> String {
        normalize(&self.text())
    }

    /// Raw markup between the element's tags, comments included.
    pub fn inner_html(&self) -> String {
        self.el.inner_html()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }
}

/// NFKD folds non-breaking spaces into plain spaces before trimming.
pub fn normalize(s: &str) -> String {
    s.nfkd().collect::<String>().trim().to_string()
}
