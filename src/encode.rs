//! QR symbol generation.
//!
//! Encoding itself (mode selection, error correction, masking) is done by the
//! [`qrcode`] crate. This module picks the symbol parameters and renders the
//! result into a grayscale bitmap with one pixel per module and no quiet zone.
use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode, Version};
use tracing::debug;

use crate::error::{Error, Result};

/// Smallest QR version.
pub const MIN_VERSION: i16 = 1;
/// Largest QR version.
pub const MAX_VERSION: i16 = 40;

/// Pixel value of a light module in the generated bitmap.
pub const LIGHT: Luma<u8> = Luma([255u8]);

/// Encodes `data` into a QR code bitmap.
///
/// With `version` set to `None` the smallest version that holds the data is used.
/// A fixed version is used as-is; data that does not fit is an error.
/// The error correction level is always [`EcLevel::L`].
///
/// # Example
///
/// ```
/// use ascii_qr::encode::generate_bitmap;
///
/// let img = generate_bitmap("Hello, World!", Some(2)).unwrap();
/// assert_eq!(img.dimensions(), (25, 25));
/// ```
pub fn generate_bitmap(data: &str, version: Option<i16>) -> Result<GrayImage> {
    let code = match version {
        Some(v) if !(MIN_VERSION..=MAX_VERSION).contains(&v) => {
            return Err(Error::InvalidVersion(v))
        }
        Some(v) => QrCode::with_version(data, Version::Normal(v), EcLevel::L)?,
        None => QrCode::with_error_correction_level(data, EcLevel::L)?,
    };

    let img = code
        .render::<Luma<u8>>()
        .quiet_zone(false)
        .module_dimensions(1, 1)
        .build();

    debug!(
        version = ?code.version(),
        width = img.width(),
        height = img.height(),
        "generated QR bitmap"
    );
    Ok(img)
}
