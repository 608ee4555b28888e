use serde::{Deserialize, Serialize};

use super::PageDetails;

// ============================================================================
// Create-page Request Body
// ============================================================================

/// Body of Notion's `POST /v1/pages`.
///
/// `children` is left out entirely when the page has no Open Graph image.
#[derive(Debug, Clone, Serialize)]
pub struct NotionPagePayload {
    pub parent: Parent,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
    pub properties: Properties,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parent {
    pub database_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Icon {
    pub external: External,
}

#[derive(Debug, Clone, Serialize)]
pub struct External {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub object: &'static str,
    pub image: ImageBlock,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageBlock {
    pub external: External,
}

#[derive(Debug, Clone, Serialize)]
pub struct Properties {
    #[serde(rename = "Name")]
    pub name: TitleProperty,
    #[serde(rename = "Tags")]
    pub tags: MultiSelectProperty,
    #[serde(rename = "URL")]
    pub url: UrlProperty,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleProperty {
    pub title: Vec<RichText>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RichText {
    pub text: TextContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MultiSelectProperty {
    pub multi_select: Vec<SelectOption>,
}

/// One entry of a `multi_select` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrlProperty {
    pub url: String,
}

impl NotionPagePayload {
    /// The page URL doubles as the page icon; the scraped image, if any,
    /// becomes the single child block.
    pub fn new(details: &PageDetails, tags: Vec<SelectOption>, database_id: &str) -> Self {
        let children = if details.image.is_empty() {
            Vec::new()
        } else {
            vec![Block {
                object: "block",
                image: ImageBlock {
                    external: External {
                        url: details.image.clone(),
                    },
                },
            }]
        };

        NotionPagePayload {
            parent: Parent {
                database_id: database_id.to_string(),
            },
            icon: Icon {
                external: External {
                    url: details.url.clone(),
                },
            },
            children,
            properties: Properties {
                name: TitleProperty {
                    title: vec![RichText {
                        text: TextContent {
                            content: details.title.clone(),
                        },
                    }],
                },
                tags: MultiSelectProperty { multi_select: tags },
                url: UrlProperty {
                    url: details.url.clone(),
                },
            },
        }
    }
}
