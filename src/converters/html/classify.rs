//! Heuristic image role classifier.
//!
//! Distinguishes QR codes, icons, logos, diagrams and photos from decoded
//! pixel dimensions, slide position, and cheap pixel statistics (a grayscale
//! contrast ratio and a color-diversity measure on a 50x50 downsample).
//!
//! The rules are ordered and first-match-wins; the categories overlap, so
//! reordering them changes results.

use std::collections::HashSet;

use image::{imageops::FilterType, DynamicImage, GenericImageView};
use log::debug;

use super::{
    constants::{
        DIAGRAM_DIVERSITY_THRESHOLD, ICON_MAX_SIZE, LOGO_MAX_SIZE, QR_ASPECT_MAX, QR_ASPECT_MIN,
        QR_CONTRAST_THRESHOLD, QR_MAX_SIZE, QR_MIN_SIZE,
    },
    item::{Classification, ImageRole},
};

/// Share of pixels that are near-black (gray < 50) or near-white
/// (gray >= 205). QR codes score close to 1.0; photographs score low.
fn contrast_ratio(img: &DynamicImage) -> f64 {
    let gray = img.to_luma8();
    let total = gray.pixels().len();
    if total == 0 {
        return 0.0;
    }
    let extreme = gray
        .pixels()
        .filter(|p| p.0[0] < 50 || p.0[0] >= 205)
        .count();
    extreme as f64 / total as f64
}

/// Distinct colors in a 50x50 downsample divided by 2500. Charts and
/// diagrams use many flat distinct colors; logos and icons use few.
fn color_diversity(img: &DynamicImage) -> f64 {
    let small = img.resize_exact(50, 50, FilterType::Nearest).to_rgb8();
    let unique: HashSet<[u8; 3]> = small.pixels().map(|p| p.0).collect();
    unique.len() as f64 / 2500.0
}

fn is_qr_signature(width: u32, height: u32, contrast: f64) -> bool {
    if !(QR_MIN_SIZE..=QR_MAX_SIZE).contains(&width)
        || !(QR_MIN_SIZE..=QR_MAX_SIZE).contains(&height)
    {
        return false;
    }
    let aspect = width as f64 / height as f64;
    (QR_ASPECT_MIN..=QR_ASPECT_MAX).contains(&aspect) && contrast >= QR_CONTRAST_THRESHOLD
}

/// True when the image sits where logos live: one of the four slide corners
/// or the bottom-center band.
fn is_logo_position(left_pct: f64, top_pct: f64) -> bool {
    (left_pct < 20.0 && top_pct < 20.0)
        || (left_pct > 80.0 && top_pct < 20.0)
        || (left_pct < 20.0 && top_pct > 80.0)
        || (left_pct > 80.0 && top_pct > 80.0)
        || (left_pct > 40.0 && left_pct < 60.0 && top_pct > 85.0)
}

/// Classifies an embedded image from its raw bytes and slide position
/// (left/top as percentages of the slide).
///
/// Decode failure is a per-item recoverable condition: it yields
/// [`ImageRole::Unknown`] with zero confidence and never aborts the
/// surrounding conversion.
pub fn classify(bytes: &[u8], position_pct: (f64, f64)) -> Classification {
    let img = match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(e) => {
            debug!("image decode failed, classifying as unknown: {}", e);
            return Classification {
                role: ImageRole::Unknown,
                confidence: 0.0,
                reason: format!("decode failed: {}", e),
                actual_size: (0, 0),
            };
        }
    };

    let (width, height) = img.dimensions();
    let (left_pct, top_pct) = position_pct;
    let contrast = contrast_ratio(&img);

    if is_qr_signature(width, height, contrast) {
        return Classification {
            role: ImageRole::QrCode,
            confidence: 0.9,
            reason: "small, square, high contrast".to_string(),
            actual_size: (width, height),
        };
    }

    // Icons are small but must not carry the square+contrast QR signature.
    if width.max(height) <= ICON_MAX_SIZE {
        let aspect = width as f64 / height.max(1) as f64;
        let qr_like = (QR_ASPECT_MIN..=QR_ASPECT_MAX).contains(&aspect)
            && contrast >= QR_CONTRAST_THRESHOLD;
        if !qr_like {
            return Classification {
                role: ImageRole::Icon,
                confidence: 0.8,
                reason: "small, simple graphic".to_string(),
                actual_size: (width, height),
            };
        }
    }

    if width.max(height) > ICON_MAX_SIZE
        && width.max(height) <= LOGO_MAX_SIZE
        && is_logo_position(left_pct, top_pct)
    {
        return Classification {
            role: ImageRole::Logo,
            confidence: 0.7,
            reason: "medium size, anchored to a corner or bottom band".to_string(),
            actual_size: (width, height),
        };
    }

    if width.max(height) > LOGO_MAX_SIZE && color_diversity(&img) > DIAGRAM_DIVERSITY_THRESHOLD {
        return Classification {
            role: ImageRole::Diagram,
            confidence: 0.6,
            reason: "large, diverse colors".to_string(),
            actual_size: (width, height),
        };
    }

    Classification {
        role: ImageRole::Photo,
        confidence: 0.5,
        reason: "large, photographic content".to_string(),
        actual_size: (width, height),
    }
}
