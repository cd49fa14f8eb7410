//! Combined axonmyelin mask synthesis

use crate::io::configuration::{AXON_PIXEL, MYELIN_PIXEL};
use crate::io::error::{PipelineError, Result};
use crate::masks::pairing;
use image::GrayImage;
use std::path::Path;

fn load_gray(path: &Path) -> Result<GrayImage> {
    let img = image::open(path).map_err(|e| PipelineError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_luma8())
}

/// Merge a per-class axon/myelin mask pair into a combined mask
///
/// Both inputs are treated as binary masks: any non-zero pixel is
/// foreground. Myelin pixels are written as gray level 127 and axon pixels
/// as 255, with axon taking precedence where the classes overlap.
///
/// # Errors
///
/// Returns an error if either mask cannot be loaded, the pair disagrees on
/// dimensions, or the combined mask cannot be saved
pub fn merge_masks(axon_path: &Path, myelin_path: &Path, output_path: &Path) -> Result<()> {
    let axon = load_gray(axon_path)?;
    let myelin = load_gray(myelin_path)?;

    if axon.dimensions() != myelin.dimensions() {
        return Err(PipelineError::MaskDimensionMismatch {
            axon_path: axon_path.to_path_buf(),
            axon_dimensions: axon.dimensions(),
            myelin_dimensions: myelin.dimensions(),
        });
    }

    let (width, height) = axon.dimensions();
    let combined = GrayImage::from_fn(width, height, |x, y| {
        if axon.get_pixel(x, y).0[0] > 0 {
            image::Luma([AXON_PIXEL])
        } else if myelin.get_pixel(x, y).0[0] > 0 {
            image::Luma([MYELIN_PIXEL])
        } else {
            image::Luma([0])
        }
    });

    combined
        .save(output_path)
        .map_err(|e| PipelineError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Create combined masks for every axon mask lacking one
///
/// No-op when the directory already holds any combined mask. Otherwise each
/// `*_seg-axon.png` is paired with its myelin mask by filename substitution
/// and merged. Returns the number of combined masks written.
///
/// # Errors
///
/// Returns an error if the directory cannot be scanned, a myelin partner is
/// missing, or any individual merge fails
pub fn prepare_masks(seg_dir: &Path) -> Result<usize> {
    if pairing::axonmyelin_mask_count(seg_dir)? > 0 {
        return Ok(0);
    }

    let axon_masks = pairing::collect_axon_masks(seg_dir)?;
    if !axon_masks.is_empty() {
        log::info!("no combined axonmyelin mask found, creating them");
    }

    let mut written = 0;
    for axon_path in &axon_masks {
        let myelin_path = pairing::myelin_partner(axon_path);
        let output_path = pairing::combined_path(axon_path);
        merge_masks(axon_path, &myelin_path, &output_path)?;
        written += 1;
    }
    Ok(written)
}
