//! Content loading: JSON file (or built-in copy) to validated `SiteContent`.

use std::path::Path;

use anyhow::{Context, Result};
use brainwave_leptos::types::{
    BenefitsContent, ContentItem, ContentList, HeadingContent, NavItem, ServicesContent,
    SiteContent,
};
use serde::Deserialize;
use tracing::{info, warn};

/// Content file as written by hand, before the duplicate policy is applied.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContentFile {
    #[serde(default)]
    navigation: Vec<NavItem>,
    benefits: BenefitsFile,
    services: ServicesContent,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BenefitsFile {
    #[serde(default)]
    heading: HeadingContent,
    items: Vec<ContentItem>,
}

/// Build the benefit list under the chosen duplicate policy.
///
/// Without `dedupe` a repeated id fails the whole load; with it the first
/// occurrence wins and every dropped repeat is logged.
pub fn apply_duplicate_policy(items: Vec<ContentItem>, dedupe: bool) -> Result<ContentList> {
    if !dedupe {
        return Ok(ContentList::new(items)?);
    }

    let (list, dropped) = ContentList::dedup_keep_first(items)?;
    for item in &dropped {
        warn!(id = %item.id, title = %item.title, "dropping repeated content item");
    }
    Ok(list)
}

/// Parse and validate content JSON.
pub fn parse_content(json: &str, dedupe: bool) -> Result<SiteContent> {
    let file: ContentFile = serde_json::from_str(json).context("invalid content JSON")?;

    let content = SiteContent {
        navigation: file.navigation,
        benefits: BenefitsContent {
            heading: file.benefits.heading,
            items: apply_duplicate_policy(file.benefits.items, dedupe)?,
        },
        services: file.services,
    };
    content.validate()?;
    Ok(content)
}

/// Load content from `path`, or the built-in copy when no file is given.
pub fn load_content(path: Option<&Path>, dedupe: bool) -> Result<SiteContent> {
    let Some(path) = path else {
        info!("Using built-in content");
        return Ok(SiteContent::default());
    };

    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content {}", path.display()))?;
    let content =
        parse_content(&data, dedupe).with_context(|| format!("in {}", path.display()))?;

    info!(
        "Loaded {} benefit tiles from {}",
        content.benefits.items.len(),
        path.display()
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainwave_leptos::ContentError;

    fn tiles(ids: &[&str]) -> String {
        let items: Vec<String> = ids
            .iter()
            .enumerate()
            .map(|(n, id)| {
                format!(r#"{{"id":"{id}","title":"Tile {n}","text":"Body","icon":"icon.svg"}}"#)
            })
            .collect();
        format!(
            r#"{{
                "benefits": {{ "items": [{}] }},
                "services": {{
                    "spotlight": {{ "title": "S", "text": "s", "image": "s.png" }},
                    "photo": {{ "title": "P", "text": "p", "image": "p.png" }},
                    "video": {{ "title": "V", "text": "v", "image": "v.png" }}
                }}
            }}"#,
            items.join(",")
        )
    }

    #[test]
    fn duplicate_ids_fail_by_default() {
        let err = parse_content(&tiles(&["a", "b", "a"]), false).unwrap_err();
        let content_err = err.downcast_ref::<ContentError>().expect("content error");
        assert_eq!(
            content_err,
            &ContentError::DuplicateId {
                id: "a".into(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let content = parse_content(&tiles(&["a", "b", "a"]), true).unwrap();
        let items = content.benefits.items.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Tile 0");
        assert_eq!(items[1].id, "b");
    }

    #[test]
    fn dedupe_still_rejects_empty_ids() {
        assert!(parse_content(&tiles(&["a", ""]), true).is_err());
    }

    #[test]
    fn missing_path_uses_built_in_copy() {
        let content = load_content(None, false).unwrap();
        assert_eq!(content, SiteContent::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = tiles(&["a"]).replacen("\"benefits\"", "\"extra\": 1, \"benefits\"", 1);
        assert!(parse_content(&json, false).is_err());
    }
}
