use serde::Deserialize;

/// A single image record from the photos API
///
/// Field names follow the wire format (`albumId`, `thumbnailUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_wire_field_names() {
        let json = r#"{
            "albumId": 1,
            "id": 7,
            "title": "officia porro iure quia iusto qui ipsa ut modi",
            "url": "https://via.placeholder.com/600/24f355",
            "thumbnailUrl": "https://via.placeholder.com/150/24f355"
        }"#;

        let photo: Photo = serde_json::from_str(json).unwrap();
        assert_eq!(photo.album_id, 1);
        assert_eq!(photo.id, 7);
        assert_eq!(photo.thumbnail_url, "https://via.placeholder.com/150/24f355");
    }

    #[test]
    fn test_missing_thumbnail_is_rejected() {
        let json = r#"{"albumId": 1, "id": 7, "title": "t", "url": "u"}"#;
        assert!(serde_json::from_str::<Photo>(json).is_err());
    }
}
