use image::GrayImage;

use crate::encode::{generate_bitmap, LIGHT};
use crate::error::{Error, Result};

/*---- Utilities ----*/

/// Glyph printed for a dark module.
pub const FILL: char = '█';
/// Glyph printed for a light module.
pub const BLANK: char = ' ';
/// Widest border accepted by [`bitmap_to_ascii_with_border`], in modules.
pub const MAX_BORDER: u32 = 64;

/// Rendering options for [`generate_qr_ascii`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Fixed QR version (1 to 40). `None` picks the smallest version that fits.
    pub version: Option<i16>,
    /// Print every module twice horizontally, for terminals with tall fonts.
    pub stretch: bool,
    /// Width of the light margin around the symbol, in modules.
    pub border: u32,
}

/// Converts a QR code bitmap to ASCII art.
///
/// Each row of the bitmap becomes one newline-terminated line. A white pixel
/// becomes a space, any other pixel becomes [`FILL`]. With `stretch` every
/// glyph is written twice.
///
/// # Example
///
/// ```
/// use ascii_qr::encode::generate_bitmap;
/// use ascii_qr::helper::bitmap_to_ascii;
///
/// let img = generate_bitmap("Hello, World!", None).unwrap();
/// let art = bitmap_to_ascii(&img, true);
/// assert_eq!(art.lines().count(), img.height() as usize);
/// ```
pub fn bitmap_to_ascii(img: &GrayImage, stretch: bool) -> String {
    rasterize(img, stretch, 0)
}

/// Same as [`bitmap_to_ascii`], surrounded by `border` light modules on every side.
///
/// # Errors
///
/// Returns [`Error::BorderTooLarge`] if `border` exceeds [`MAX_BORDER`].
pub fn bitmap_to_ascii_with_border(img: &GrayImage, stretch: bool, border: u32) -> Result<String> {
    if border > MAX_BORDER {
        return Err(Error::BorderTooLarge(border));
    }
    Ok(rasterize(img, stretch, border as usize))
}

fn rasterize(img: &GrayImage, stretch: bool, border: usize) -> String {
    let (width, height) = img.dimensions();
    let repeat = if stretch { 2 } else { 1 };
    let line_chars = (width as usize + 2 * border) * repeat;
    let mut art = String::with_capacity((height as usize + 2 * border) * (line_chars * 3 + 1));

    let blank_line = |art: &mut String| {
        art.extend(std::iter::repeat(BLANK).take(line_chars));
        art.push('\n');
    };

    for _ in 0..border {
        blank_line(&mut art);
    }
    for y in 0..height {
        art.extend(std::iter::repeat(BLANK).take(border * repeat));
        for x in 0..width {
            let c = if *img.get_pixel(x, y) == LIGHT { BLANK } else { FILL };
            art.extend(std::iter::repeat(c).take(repeat));
        }
        art.extend(std::iter::repeat(BLANK).take(border * repeat));
        art.push('\n');
    }
    for _ in 0..border {
        blank_line(&mut art);
    }

    art
}

/// Encodes `data` and renders it as ASCII art.
///
/// # Errors
///
/// Returns an error if the version is out of range, the data does not fit it,
/// or the border exceeds [`MAX_BORDER`].
///
/// # Example
///
/// ```
/// use ascii_qr::helper::{generate_qr_ascii, Options};
///
/// let art = generate_qr_ascii("Hello, World!", &Options::default()).unwrap();
/// print!("{}", art);
/// ```
pub fn generate_qr_ascii(data: &str, options: &Options) -> Result<String> {
    let img = generate_bitmap(data, options.version)?;
    bitmap_to_ascii_with_border(&img, options.stretch, options.border)
}
