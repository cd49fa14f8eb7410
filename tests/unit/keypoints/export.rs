//! Tests for keypoint JSON serialization and output files

#[cfg(test)]
mod tests {
    use axonmorph::keypoints::export::{to_pretty_json, write_keypoints};
    use axonmorph::keypoints::naming::SubjectId;
    use axonmorph::keypoints::parser::MarkerCollection;
    use std::fs;
    use tempfile::TempDir;

    fn sample_collection() -> MarkerCollection {
        let mut markers = MarkerCollection::new();
        markers.insert("1".to_string(), vec![(10, 20), (30, 40)]);
        markers.insert("3".to_string(), vec![(5, 6)]);
        markers
    }

    // Tests the 4-space indentation the downstream tooling expects
    // Verified by switching to the default 2-space formatter
    #[test]
    fn test_json_uses_four_space_indent() {
        let json = to_pretty_json(&sample_collection()).unwrap();

        assert!(json.contains("\n    \"1\""));
        assert!(!json.contains("\n  \"1\""));
    }

    // Tests coordinates serialize as [x, y] arrays under their type key
    // Verified by serializing coordinates as objects
    #[test]
    fn test_json_structure() {
        let json = to_pretty_json(&sample_collection()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["1"][0][0], 10);
        assert_eq!(value["1"][0][1], 20);
        assert_eq!(value["1"][1][0], 30);
        assert_eq!(value["3"][0][1], 6);
    }

    // Tests the output directory is created and the filename derived
    // Verified by failing on a missing output directory
    #[test]
    fn test_write_keypoints_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("compressed_keypoints");
        let id = SubjectId::from_stem("counts_2025-A01-8000X").unwrap();

        let path = write_keypoints(&sample_collection(), &output_dir, &id).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "sub-A01_sample-0001_keypoints.json"
        );
        let body = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["3"][0][0], 5);
    }

    // Tests an empty collection serializes to an empty object
    // Verified by erroring on empty collections
    #[test]
    fn test_empty_collection() {
        let json = to_pretty_json(&MarkerCollection::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
