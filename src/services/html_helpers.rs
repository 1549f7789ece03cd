use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("PARAGRAPH_SELECTOR is a valid selector"));

// Text inside these never counts as prose.
const SKIPPED_ELEMENTS: [&str; 2] = ["style", "script"];

/// Returns the text of every `<p>` element, in document order, with entities decoded.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&PARAGRAPH_SELECTOR)
        .map(|paragraph| paragraph_text(paragraph).trim().to_string())
        .collect()
}

fn paragraph_text(paragraph: ElementRef) -> String {
    paragraph
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let skipped = node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(element) => SKIPPED_ELEMENTS.contains(&element.name()),
                _ => false,
            });
            (!skipped).then(|| &**text)
        })
        .collect()
}
