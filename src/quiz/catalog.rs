use std::{collections::HashSet, fs, path::Path};

use thiserror::Error;

use super::room::RoomInfo;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read room catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed room catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Room catalog is empty")]
    Empty,

    #[error("Room '{0}' has a blank slug")]
    BlankSlug(String),

    #[error("Room slug '{0}' appears more than once")]
    DuplicateSlug(String),
}

/// The rooms available when no catalog file is configured.
pub fn builtin() -> Vec<RoomInfo> {
    vec![
        RoomInfo {
            name: "Classic Rock".to_owned(),
            slug: "classic-rock".to_owned(),
            image: "/web/images/guitar.svg".to_owned(),
        },
        RoomInfo {
            name: "Pop Hits".to_owned(),
            slug: "pop-hits".to_owned(),
            image: "/web/images/pop.svg".to_owned(),
        },
    ]
}

pub fn from_file(path: impl AsRef<Path>) -> Result<Vec<RoomInfo>, CatalogError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;

    from_json(&json)
}

/// Parses a JSON array of `{ "name", "slug", "image" }` objects.
pub fn from_json(json: &str) -> Result<Vec<RoomInfo>, CatalogError> {
    let rooms: Vec<RoomInfo> = serde_json::from_str(json)?;

    if rooms.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for room in &rooms {
        if room.slug.trim().is_empty() {
            return Err(CatalogError::BlankSlug(room.name.clone()));
        }
        if !seen.insert(room.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug(room.slug.clone()));
        }
    }

    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_catalog_has_unique_slugs() {
        let rooms = builtin();
        let slugs: HashSet<_> = rooms.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs.len(), rooms.len());
        assert!(slugs.contains("classic-rock"));
    }

    #[test]
    fn test_from_json_success() {
        let rooms = from_json(
            r#"[{"name": "Jazz", "slug": "jazz", "image": "/web/images/sax.svg"}]"#,
        )
        .unwrap();

        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].slug, "jazz");
        assert_eq!(rooms[0].image, "/web/images/sax.svg");
    }

    #[test]
    fn test_from_json_rejects_duplicate_slug() {
        let result = from_json(
            r#"[
                {"name": "A", "slug": "same", "image": "a.svg"},
                {"name": "B", "slug": "same", "image": "b.svg"}
            ]"#,
        );
        assert!(matches!(result, Err(CatalogError::DuplicateSlug(s)) if s == "same"));
    }

    #[test]
    fn test_from_json_rejects_blank_slug() {
        let result = from_json(r#"[{"name": "A", "slug": "  ", "image": "a.svg"}]"#);
        assert!(matches!(result, Err(CatalogError::BlankSlug(n)) if n == "A"));
    }

    #[test]
    fn test_from_json_rejects_empty_and_malformed() {
        assert!(matches!(from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(from_json("{"), Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn test_from_file_reads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Metal", "slug": "metal", "image": "m.svg"}}]"#).unwrap();

        let rooms = from_file(file.path()).unwrap();
        assert_eq!(rooms[0].name, "Metal");
    }

    #[test]
    fn test_from_file_missing() {
        let result = from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }
}
