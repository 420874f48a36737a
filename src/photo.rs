use crate::Error;
use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};

/// How the uploaded photo is shaped into the sidebar's photo slot
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PhotoMask {
    /// Keep the center-cropped square as-is
    Square,
    /// Mask the square into a circle via the alpha channel
    Circle,
}

/// A decoded, slot-sized photo ready to be placed by the layout engine.
///
/// The asset owns a plain RGBA buffer; it lives only as long as the
/// [`Layout`](crate::Layout) that references it and is freed with it on
/// every exit path. No temporary files are involved.
pub struct PhotoAsset {
    pixels: RgbaImage,
    mask: PhotoMask,
    had_alpha: bool,
}

impl PhotoAsset {
    /// Decode raw upload bytes into a square, slot-sized asset.
    ///
    /// The format is sniffed from the bytes and must be PNG, JPEG, or GIF;
    /// anything else is rejected with [`Error::UnsupportedPhotoFormat`] and
    /// unreadable data with [`Error::PhotoDecode`]. The image is
    /// center-cropped to a square and downscaled to `side` pixels *before*
    /// masking, so an upload at the request-size ceiling is never processed
    /// at full resolution more than once.
    pub fn decode(bytes: &[u8], side: u32, mask: PhotoMask) -> Result<PhotoAsset, Error> {
        let format = image::guess_format(bytes)?;
        if !matches!(
            format,
            ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif
        ) {
            return Err(Error::UnsupportedPhotoFormat(format!("{format:?}")));
        }

        let decoded = image::load_from_memory_with_format(bytes, format)?;
        let had_alpha = decoded.color().has_alpha();

        let (w, h) = (decoded.width(), decoded.height());
        let square = w.min(h);
        let cropped = decoded.crop_imm((w - square) / 2, (h - square) / 2, square, square);
        let mut pixels = cropped
            .resize_exact(side, side, FilterType::Triangle)
            .to_rgba8();

        if mask == PhotoMask::Circle {
            apply_circle_mask(&mut pixels);
        }

        Ok(PhotoAsset {
            pixels,
            mask,
            had_alpha,
        })
    }

    /// The side length of the square pixel buffer
    pub fn side(&self) -> u32 {
        self.pixels.width()
    }

    pub fn mask(&self) -> PhotoMask {
        self.mask
    }

    /// The RGB channels of the buffer, row-major
    pub(crate) fn rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .pixels()
            .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
            .collect()
    }

    /// The alpha channel of the buffer, if the asset needs one. A circular
    /// mask always carries alpha; a square asset only does when the source
    /// image already had transparency.
    pub(crate) fn alpha_bytes(&self) -> Option<Vec<u8>> {
        (self.mask == PhotoMask::Circle || self.had_alpha)
            .then(|| self.pixels.pixels().map(|p| p.0[3]).collect())
    }
}

/// Zero the alpha of every pixel whose center falls outside the inscribed
/// circle of the square buffer
fn apply_circle_mask(pixels: &mut RgbaImage) {
    let side = pixels.width() as f32;
    let center = side / 2.0;
    let radius_sq = center * center;
    for (x, y, pixel) in pixels.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy > radius_sq {
            pixel.0[3] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([200, 120, 40]),
        ));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageOutputFormat::Png,
        )
        .expect("png encodes");
        bytes
    }

    #[test]
    fn decodes_to_the_requested_slot_size() {
        // a wide input still ends up square at the slot side
        let asset = PhotoAsset::decode(&png_bytes(100, 50), 64, PhotoMask::Square)
            .expect("photo decodes");
        assert_eq!(asset.side(), 64);
        assert!(asset.alpha_bytes().is_none());
        assert_eq!(asset.rgb_bytes().len(), 64 * 64 * 3);
    }

    #[test]
    fn circle_mask_clears_the_corners() {
        let asset = PhotoAsset::decode(&png_bytes(80, 80), 32, PhotoMask::Circle)
            .expect("photo decodes");
        let alpha = asset.alpha_bytes().expect("circle mask carries alpha");
        assert_eq!(alpha[0], 0, "corner pixel should be transparent");
        let center = 16 * 32 + 16;
        assert_eq!(alpha[center], 255, "center pixel should be opaque");
    }

    #[test]
    fn rejects_formats_outside_the_allow_list() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, image::Rgba([0; 4])));
        let mut bmp = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bmp),
            image::ImageOutputFormat::Bmp,
        )
        .expect("bmp encodes");
        assert!(matches!(
            PhotoAsset::decode(&bmp, 32, PhotoMask::Square),
            Err(Error::UnsupportedPhotoFormat(_))
        ));
    }

    #[test]
    fn corrupt_bytes_are_a_decode_error() {
        let garbage = b"definitely not an image";
        assert!(matches!(
            PhotoAsset::decode(garbage, 32, PhotoMask::Square),
            Err(Error::PhotoDecode(_))
        ));
    }
}
