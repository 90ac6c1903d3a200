use crate::config::types::{Category, Config, CrawlerConfig, LabelConfig, SelectorConfig};
use crate::{ConfigError, ConfigResult};
use scraper::Selector;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    validate_selectors(&config.selectors)?;
    validate_labels(&config.labels)?;
    validate_categories(&config.categories)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.host)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid host '{}': {}", config.host, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Host '{}' must use the http or https scheme",
            config.host
        )));
    }

    // Paths and hrefs are appended verbatim and already start with '/'
    if config.host.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "host must not end with '/', got '{}'",
            config.host
        )));
    }

    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 64 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_fetches must be between 1 and 64, got {}",
            config.max_concurrent_fetches
        )));
    }

    if let Some(user_agent) = &config.user_agent {
        if user_agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user_agent cannot be blank".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &crate::config::types::OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every field selector compiles
fn validate_selectors(config: &SelectorConfig) -> Result<(), ConfigError> {
    for selector in [
        &config.title,
        &config.poster,
        &config.trailer,
        &config.synopsis,
        &config.description_anchor,
        &config.metadata_lines,
    ] {
        validate_selector(selector)?;
    }

    if config.poster_attr.is_empty() || config.trailer_attr.is_empty() {
        return Err(ConfigError::Validation(
            "poster_attr and trailer_attr cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates text normalisation phrases
fn validate_labels(config: &LabelConfig) -> Result<(), ConfigError> {
    let required = [
        ("trim_chars", &config.trim_chars),
        ("description_heading", &config.description_heading),
        ("runtime_label", &config.runtime_label),
        ("runtime_prefix", &config.runtime_prefix),
        ("runtime_unit", &config.runtime_unit),
        ("release_label", &config.release_label),
        ("release_prefix", &config.release_prefix),
    ];

    for (key, value) in required {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", key)));
        }
    }

    Ok(())
}

/// Validates the category list
fn validate_categories(categories: &[Category]) -> Result<(), ConfigError> {
    if categories.is_empty() {
        return Err(ConfigError::Validation(
            "at least one category is required".to_string(),
        ));
    }

    let mut names = HashSet::new();
    let mut outputs = HashSet::new();

    for category in categories {
        if category.name.is_empty() {
            return Err(ConfigError::Validation(
                "category name cannot be empty".to_string(),
            ));
        }

        if !names.insert(category.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category name '{}'",
                category.name
            )));
        }

        if !category.listing_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "listing path of '{}' must start with '/', got '{}'",
                category.name, category.listing_path
            )));
        }

        validate_output_name(&category.output)?;

        if !outputs.insert(category.output.as_str()) {
            return Err(ConfigError::Validation(format!(
                "output '{}' is used by more than one category",
                category.output
            )));
        }

        validate_selector(&category.link_selector)?;
    }

    Ok(())
}

/// Output names are bare file names inside the output directory
fn validate_output_name(output: &str) -> Result<(), ConfigError> {
    if output.is_empty() || output == "." || output == ".." {
        return Err(ConfigError::Validation(format!(
            "invalid output file name '{}'",
            output
        )));
    }

    if output.contains('/') || output.contains('\\') {
        return Err(ConfigError::Validation(format!(
            "output '{}' must be a file name, not a path",
            output
        )));
    }

    Ok(())
}

fn validate_selector(selector: &str) -> Result<(), ConfigError> {
    Selector::parse(selector)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {}", selector, e)))
}
