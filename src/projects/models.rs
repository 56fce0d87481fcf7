use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

use crate::platforms::Platform;

/// One row of the hosted `projects` table.
///
/// Rows are created by hand in the database dashboard, so nothing here is
/// validated beyond its JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    /// Raw platform column value. See [`Project::platform`].
    pub platform: String,
    pub video_url: String,
    pub year: i32,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Project {
    /// Parsed platform, or `None` for values outside the supported set.
    #[must_use]
    pub fn platform(&self) -> Option<Platform> {
        self.platform.parse().ok()
    }

    /// Video identifier for the embed player, if the URL is recognized.
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        self.platform()
            .and_then(|p| p.extract_identifier(&self.video_url))
    }
}

/// Gallery ordering: newest year first, then manual order within a year.
#[must_use]
pub fn gallery_order(a: &Project, b: &Project) -> Ordering {
    b.year
        .cmp(&a.year)
        .then_with(|| a.order_index.cmp(&b.order_index))
}

/// Sort projects into gallery order.
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(gallery_order);
}

/// Accept either a string or a numeric primary key.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, year: i32, order_index: i32) -> Project {
        Project {
            id: id.to_string(),
            platform: "youtube".to_string(),
            video_url: String::new(),
            year,
            order_index,
            created_at: None,
        }
    }

    #[test]
    fn test_deserialize_row() {
        let json = r#"{
            "id": "6f1c3a52-6c0e-4a8e-9f5e-0d3b4c1e2a11",
            "platform": "tiktok",
            "video_url": "https://www.tiktok.com/@user/video/7123456789012345678",
            "year": 2024,
            "order_index": 2,
            "created_at": "2024-05-01T10:00:00.000000+00:00"
        }"#;
        let row: Project = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, "6f1c3a52-6c0e-4a8e-9f5e-0d3b4c1e2a11");
        assert_eq!(row.platform(), Some(Platform::TikTok));
        assert_eq!(row.identifier(), Some("7123456789012345678".to_string()));
    }

    #[test]
    fn test_deserialize_numeric_id_and_missing_optional_columns() {
        let json = r#"{"id": 42, "platform": "youtube", "video_url": "", "year": 2023}"#;
        let row: Project = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.order_index, 0);
        assert!(row.created_at.is_none());
        assert_eq!(row.identifier(), None);
    }

    #[test]
    fn test_unknown_platform_has_no_identifier() {
        let mut row = project("1", 2024, 0);
        row.platform = "vimeo".to_string();
        row.video_url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string();
        assert_eq!(row.platform(), None);
        assert_eq!(row.identifier(), None);
    }

    #[test]
    fn test_sort_projects() {
        let mut rows = vec![
            project("a", 2022, 1),
            project("b", 2024, 2),
            project("c", 2024, 0),
            project("d", 2023, 5),
        ];
        sort_projects(&mut rows);
        let ids: Vec<_> = rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "d", "a"]);
    }
}
