//! Tests for combined axonmyelin mask synthesis

#[cfg(test)]
mod tests {
    use axonmorph::PipelineError;
    use axonmorph::masks::merge::{merge_masks, prepare_masks};
    use image::GrayImage;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_mask(path: &Path, width: u32, height: u32, foreground: &[(u32, u32)]) {
        let mask = GrayImage::from_fn(width, height, |x, y| {
            if foreground.contains(&(x, y)) {
                image::Luma([255])
            } else {
                image::Luma([0])
            }
        });
        mask.save(path).unwrap();
    }

    // Tests the class labels and axon precedence on overlap
    // Verified by letting myelin win overlapping pixels
    #[test]
    fn test_merge_labels_and_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let axon_path = temp_dir.path().join("s_seg-axon.png");
        let myelin_path = temp_dir.path().join("s_seg-myelin.png");
        let combined_path = temp_dir.path().join("s_seg-axonmyelin.png");

        // (1, 1) belongs to both classes
        write_mask(&axon_path, 3, 3, &[(0, 0), (1, 1)]);
        write_mask(&myelin_path, 3, 3, &[(1, 1), (2, 2)]);

        merge_masks(&axon_path, &myelin_path, &combined_path).unwrap();

        let combined = image::open(&combined_path).unwrap().to_luma8();
        assert_eq!(combined.get_pixel(0, 0).0[0], 255);
        assert_eq!(combined.get_pixel(1, 1).0[0], 255);
        assert_eq!(combined.get_pixel(2, 2).0[0], 127);
        assert_eq!(combined.get_pixel(0, 2).0[0], 0);
    }

    // Tests mismatched mask geometries are rejected
    // Verified by cropping instead of failing
    #[test]
    fn test_merge_dimension_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let axon_path = temp_dir.path().join("s_seg-axon.png");
        let myelin_path = temp_dir.path().join("s_seg-myelin.png");
        let combined_path = temp_dir.path().join("s_seg-axonmyelin.png");

        write_mask(&axon_path, 3, 3, &[]);
        write_mask(&myelin_path, 2, 3, &[]);

        let result = merge_masks(&axon_path, &myelin_path, &combined_path);
        assert!(matches!(
            result,
            Err(PipelineError::MaskDimensionMismatch { .. })
        ));
    }

    // Tests a missing myelin partner propagates as a fatal error
    // Verified by skipping unmatched axon masks
    #[test]
    fn test_merge_missing_partner() {
        let temp_dir = TempDir::new().unwrap();
        let axon_path = temp_dir.path().join("s_seg-axon.png");
        write_mask(&axon_path, 2, 2, &[(0, 0)]);

        let result = prepare_masks(temp_dir.path());
        assert!(result.is_err());
    }

    // Tests batch preparation over every axon mask in the directory
    // Verified by processing only the first pair
    #[test]
    fn test_prepare_masks_creates_all_pairs() {
        let temp_dir = TempDir::new().unwrap();
        for subject in ["sub-A01", "sub-B02"] {
            write_mask(
                &temp_dir.path().join(format!("{subject}_seg-axon.png")),
                2,
                2,
                &[(0, 0)],
            );
            write_mask(
                &temp_dir.path().join(format!("{subject}_seg-myelin.png")),
                2,
                2,
                &[(1, 1)],
            );
        }

        let written = prepare_masks(temp_dir.path()).unwrap();
        assert_eq!(written, 2);
        assert!(temp_dir.path().join("sub-A01_seg-axonmyelin.png").exists());
        assert!(temp_dir.path().join("sub-B02_seg-axonmyelin.png").exists());
    }

    // Tests preparation is a no-op when any combined mask exists
    // Verified by regenerating masks unconditionally
    #[test]
    fn test_prepare_masks_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        write_mask(&temp_dir.path().join("sub-A01_seg-axon.png"), 2, 2, &[]);
        write_mask(&temp_dir.path().join("sub-A01_seg-myelin.png"), 2, 2, &[]);
        write_mask(
            &temp_dir.path().join("sub-A01_seg-axonmyelin.png"),
            2,
            2,
            &[],
        );

        let written = prepare_masks(temp_dir.path()).unwrap();
        assert_eq!(written, 0);
    }
}
