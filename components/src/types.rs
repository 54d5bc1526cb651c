//! Content types consumed by the landing page components.
//!
//! These types are:
//!
//! - **Serializable** - loaded from JSON by the content collaborator
//! - **Immutable after construction** - components only read them
//! - **Validated at the boundary** - [`ContentList`] cannot hold duplicate ids
//!
//! # Example
//!
//! ```rust
//! use brainwave_leptos::types::{ContentItem, ContentList};
//!
//! let items = ContentList::new(vec![
//!     ContentItem {
//!         id: "0".into(),
//!         title: "Ask anything".into(),
//!         text: "Find answers without searching multiple sources.".into(),
//!         icon: "benefits/icon-1.svg".into(),
//!         highlighted: true,
//!         ..Default::default()
//!     },
//! ])
//! .unwrap();
//! assert_eq!(items.len(), 1);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// One entry of a content list, rendered as a tile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentItem {
    /// Unique key of the tile
    pub id: String,
    /// Tile title
    pub title: String,
    /// Body text
    pub text: String,
    /// Icon asset token
    pub icon: String,
    /// Illustration revealed on hover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Card background asset token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Whether the tile gets the ambient light overlay
    #[serde(default)]
    pub highlighted: bool,
}

impl ContentItem {
    /// Hover illustration, if one is set and non-empty.
    pub fn decoration(&self) -> Option<&str> {
        non_empty(self.image.as_deref())
    }

    /// Card background, if one is set and non-empty.
    pub fn background(&self) -> Option<&str> {
        non_empty(self.background.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Ordered content items with unique, non-empty ids.
///
/// Duplicate ids are rejected by [`ContentList::new`]. Callers that prefer
/// to drop repeats must opt in through [`ContentList::dedup_keep_first`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ContentItem>", into = "Vec<ContentItem>")]
pub struct ContentList {
    items: Vec<ContentItem>,
}

impl ContentList {
    /// Validate and wrap `items`, preserving their order.
    pub fn new(items: Vec<ContentItem>) -> Result<Self, ContentError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            check_item(index, item)?;
            if let Some(first) = seen.insert(item.id.as_str(), index) {
                return Err(ContentError::DuplicateId {
                    id: item.id.clone(),
                    first,
                    second: index,
                });
            }
        }
        Ok(Self { items })
    }

    /// Keep the first item for every id and return the dropped repeats.
    ///
    /// Empty ids and titles are still rejected.
    pub fn dedup_keep_first(
        items: Vec<ContentItem>,
    ) -> Result<(Self, Vec<ContentItem>), ContentError> {
        let mut kept: Vec<ContentItem> = Vec::with_capacity(items.len());
        let mut dropped = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            check_item(index, &item)?;
            if kept.iter().any(|k| k.id == item.id) {
                dropped.push(item);
            } else {
                kept.push(item);
            }
        }
        Ok((Self { items: kept }, dropped))
    }

    /// Items in their original order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }
}

fn check_item(index: usize, item: &ContentItem) -> Result<(), ContentError> {
    if item.id.trim().is_empty() {
        return Err(ContentError::EmptyId { index });
    }
    if item.title.trim().is_empty() {
        return Err(ContentError::EmptyTitle {
            id: item.id.clone(),
        });
    }
    Ok(())
}

impl TryFrom<Vec<ContentItem>> for ContentList {
    type Error = ContentError;

    fn try_from(items: Vec<ContentItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<ContentList> for Vec<ContentItem> {
    fn from(list: ContentList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a ContentList {
    type Item = &'a ContentItem;
    type IntoIter = std::slice::Iter<'a, ContentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Title plus optional secondary text of a section heading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadingContent {
    /// Prominent title; absent or empty renders no heading element
    pub title: Option<String>,
    /// Secondary text placed in the reserved slot
    pub text: Option<String>,
}

impl HeadingContent {
    /// Heading with a title only.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: None,
        }
    }
}

/// Header navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    /// Unique key
    pub id: String,
    /// Link label
    pub title: String,
    /// Link target, usually an in-page anchor
    pub url: String,
    /// Only shown in the mobile menu
    #[serde(default)]
    pub only_mobile: bool,
}

/// Content of the benefits section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenefitsContent {
    /// Section heading
    #[serde(default)]
    pub heading: HeadingContent,
    /// Tiles, in display order
    pub items: ContentList,
}

/// A single service showcase card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceBlock {
    /// Card title
    pub title: String,
    /// Card body text
    pub text: String,
    /// Illustration asset token
    pub image: String,
    /// Alt text of the illustration
    #[serde(default)]
    pub image_alt: String,
}

/// Content of the services ("how to use") section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicesContent {
    /// Section heading
    #[serde(default)]
    pub heading: HeadingContent,
    /// Large card with the feature checklist
    pub spotlight: ServiceBlock,
    /// Checklist entries of the spotlight card
    #[serde(default)]
    pub features: Vec<String>,
    /// Photo editing card
    pub photo: ServiceBlock,
    /// Chat prompt shown over the photo card
    #[serde(default)]
    pub photo_prompt: String,
    /// Video generation card
    pub video: ServiceBlock,
    /// Tool icons of the video card
    #[serde(default)]
    pub video_tools: Vec<String>,
    /// Index of the emphasised tool icon
    #[serde(default = "default_active_tool")]
    pub active_tool: usize,
    /// Chat notice shown over the video preview
    #[serde(default)]
    pub video_notice: String,
}

fn default_active_tool() -> usize {
    2
}

/// Everything the landing page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    /// Header navigation
    #[serde(default)]
    pub navigation: Vec<NavItem>,
    /// Benefits section
    pub benefits: BenefitsContent,
    /// Services section
    pub services: ServicesContent,
}

impl SiteContent {
    /// Check invariants not already enforced by the field types.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = std::collections::HashSet::new();
        for nav in &self.navigation {
            if !seen.insert(nav.id.as_str()) {
                return Err(ContentError::DuplicateNavId(nav.id.clone()));
            }
        }
        Ok(())
    }
}
