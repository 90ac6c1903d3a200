use serde::Deserialize;

/// Main configuration structure for Movie-Crawler
///
/// Every section falls back to the built-in values, so `Config::default()`
/// is the stock crawl of the five catalog categories.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
    pub selectors: SelectorConfig,
    pub labels: LabelConfig,
    #[serde(rename = "category")]
    pub categories: Vec<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
            selectors: SelectorConfig::default(),
            labels: LabelConfig::default(),
            categories: default_categories(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Scheme and host every listing path and detail href is appended to
    pub host: String,

    /// Maximum number of detail pages fetched at once within a category
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: u32,

    /// User-Agent header; the HTTP client's default when absent
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            host: "http://www.atmovies.com.tw".to_string(),
            max_concurrent_fetches: 1,
            user_agent: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the per-category JSON files are written to
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
        }
    }
}

/// Selector strings for every extracted field, keyed by field
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub title: String,

    pub poster: String,

    #[serde(rename = "poster-attr")]
    pub poster_attr: String,

    pub trailer: String,

    #[serde(rename = "trailer-attr")]
    pub trailer_attr: String,

    /// Element whose own text (nested elements excluded) is the synopsis
    pub synopsis: String,

    /// Marker element the description is counted from
    #[serde(rename = "description-anchor")]
    pub description_anchor: String,

    /// How many element siblings after the anchor the description sits
    #[serde(rename = "description-offset")]
    pub description_offset: usize,

    /// The short labeled lines carrying runtime and release date
    #[serde(rename = "metadata-lines")]
    pub metadata_lines: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: ".filmTitle".to_string(),
            poster: "#filmTagBlock a.Poster > img".to_string(),
            poster_attr: "src".to_string(),
            trailer: "div.video_view > iframe.image.featured".to_string(),
            trailer_attr: "src".to_string(),
            synopsis: "#filmTagBlock > span:nth-child(3)".to_string(),
            description_anchor: "div.video_view".to_string(),
            description_offset: 3,
            metadata_lines: "#filmTagBlock ul.runtime > li".to_string(),
        }
    }
}

/// Phrases used to clean and classify extracted text
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Characters stripped from both ends of title, synopsis and description
    #[serde(rename = "trim-chars")]
    pub trim_chars: String,

    /// Section heading removed from the description wherever it occurs
    #[serde(rename = "description-heading")]
    pub description_heading: String,

    /// A metadata line containing this is a runtime line
    #[serde(rename = "runtime-label")]
    pub runtime_label: String,

    #[serde(rename = "runtime-prefix")]
    pub runtime_prefix: String,

    #[serde(rename = "runtime-unit")]
    pub runtime_unit: String,

    /// A metadata line containing this (and not the runtime label) is a release date line
    #[serde(rename = "release-label")]
    pub release_label: String,

    #[serde(rename = "release-prefix")]
    pub release_prefix: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            trim_chars: " \n\t".to_string(),
            description_heading: "劇情簡介".to_string(),
            runtime_label: "片長".to_string(),
            runtime_prefix: "片長：".to_string(),
            runtime_unit: "分".to_string(),
            release_label: "上映日期".to_string(),
            release_prefix: "上映日期：".to_string(),
        }
    }
}

/// One listing page to crawl and the file its movies go to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Short name used in logs and the run summary
    pub name: String,

    /// Site-relative path of the listing page, appended to the host
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// Selector matching the detail-page anchors on the listing page
    #[serde(rename = "link-selector")]
    pub link_selector: String,

    /// File name of the JSON output
    pub output: String,
}

impl Category {
    pub fn new(name: &str, listing_path: &str, link_selector: &str, output: &str) -> Self {
        Self {
            name: name.to_string(),
            listing_path: listing_path.to_string(),
            link_selector: link_selector.to_string(),
            output: output.to_string(),
        }
    }
}

/// The stock category list, in crawl order
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("coming", "/movie/next/0", ".filmNextListAll li a", "coming.json"),
        Category::new("first-round", "/movie/now/0", ".filmListAll li a", "first-round.json"),
        Category::new("second-round", "/movie/now2/0", ".filmListAll li a", "second-round.json"),
        Category::new(
            "new-this-week",
            "/movie/new",
            "article.box.post > div.filmTitle > a",
            "new-this-week.json",
        ),
        Category::new("future", "/movie/next2", ".filmNext2ListAll li a", "future.json"),
    ]
}
