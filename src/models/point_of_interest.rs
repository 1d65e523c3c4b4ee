//! Point-of-interest records returned by the API.

use serde::{Deserialize, Serialize};

/// POI category as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Sights,
    BeachPark,
    Historical,
    Nightlife,
    Restaurant,
    Shopping,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Sights => write!(f, "SIGHTS"),
            Category::BeachPark => write!(f, "BEACH_PARK"),
            Category::Historical => write!(f, "HISTORICAL"),
            Category::Nightlife => write!(f, "NIGHTLIFE"),
            Category::Restaurant => write!(f, "RESTAURANT"),
            Category::Shopping => write!(f, "SHOPPING"),
            Category::Other => write!(f, "OTHER"),
        }
    }
}

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCode {
    pub latitude: f64,
    pub longitude: f64,
}

/// Link back to the resource itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfLink {
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    /// Always "location"
    #[serde(rename = "type")]
    pub resource_type: String,

    /// Always "POINT_OF_INTEREST"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,

    pub id: String,

    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_link: Option<SelfLink>,

    pub geo_code: GeoCode,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Popularity rank, lower is more popular
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl PointOfInterest {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
