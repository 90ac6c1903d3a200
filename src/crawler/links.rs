//! Detail link discovery on listing pages

use scraper::{Html, Selector};

/// Collects the detail-page locations linked from a listing document
///
/// Every element matched by `selector` contributes one location, in document
/// order: `host` followed by the raw `href`. An element without an `href`
/// yields `host` alone. Duplicates are kept; each one becomes its own record.
///
/// # Example
///
/// ```
/// use movie_crawler::crawler::discover_links;
/// use scraper::{Html, Selector};
///
/// let html = Html::parse_document(r#"<ul class="films"><li><a href="/movie/a1/">A</a></li></ul>"#);
/// let selector = Selector::parse(".films li a").unwrap();
/// let links = discover_links(&html, &selector, "http://www.example.com");
/// assert_eq!(links, vec!["http://www.example.com/movie/a1/".to_string()]);
/// ```
pub fn discover_links(document: &Html, selector: &Selector, host: &str) -> Vec<String> {
    document
        .select(selector)
        .map(|element| {
            let href = element.value().attr("href").unwrap_or_default();
            format!("{}{}", host, href)
        })
        .collect()
}
