//! Heightmap debug visualization: renders the synthesized height field to a
//! 2D RGBA image and encodes it as PNG, so noise output can be eyeballed
//! without a graphics context.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use ridge_terrain::HeightField;

/// Errors raised when writing a debug image to disk.
#[derive(Debug, thiserror::Error)]
pub enum ImageWriteError {
    /// Failed to create the output file.
    #[error("failed to create image file: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
}

/// A 2D debug image stored as row-major RGBA pixels.
#[derive(Clone, Debug)]
pub struct DebugImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// Create a new black (all-zero) image with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Read the RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    fn put(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = ((y * self.width + x) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }
}

/// Render the height field as an image, one pixel per grid vertex.
///
/// Heights are normalized from `[-max_amplitude, +max_amplitude]` to
/// `[0, 1]` before color mapping, so the ramp stays stable across octave
/// parameter changes.
pub fn render_heightmap(field: &HeightField) -> DebugImage {
    let width = field.cols() as u32;
    let height = field.rows() as u32;
    let mut image = DebugImage::new(width, height);

    let max_amp = field.max_amplitude();
    for row in 0..field.rows() {
        for col in 0..field.cols() {
            let h = field.sample(row, col);
            let normalized = if max_amp > 0.0 {
                (h / max_amp + 1.0) * 0.5
            } else {
                0.5
            };
            let (r, g, b) = height_to_color(normalized);
            image.put(col as u32, row as u32, [r, g, b, 255]);
        }
    }

    image
}

/// Map a normalized height `[0, 1]` to an RGB color.
///
/// Color bands: deep water → shallow water → shore → lowlands → highlands → snow.
pub fn height_to_color(normalized: f32) -> (u8, u8, u8) {
    let n = normalized.clamp(0.0, 1.0);
    if n < 0.25 {
        // Deep water: dark blue
        (0, 0, 128)
    } else if n < 0.5 {
        // Shallow water: blue
        (30, 80, 200)
    } else if n < 0.52 {
        // Shore: sandy yellow
        (220, 200, 130)
    } else if n < 0.7 {
        // Lowlands: green, darkening with altitude
        let t = (n - 0.52) / 0.18;
        (
            (30.0 + t * 80.0) as u8,
            (160.0 - t * 40.0) as u8,
            (30.0 + t * 20.0) as u8,
        )
    } else if n < 0.85 {
        // Highlands: brown
        let t = (n - 0.7) / 0.15;
        (
            (110.0 + t * 40.0) as u8,
            (90.0 + t * 30.0) as u8,
            (60.0 + t * 30.0) as u8,
        )
    } else {
        // Snow caps: white
        (240, 240, 245)
    }
}

/// Encode the image as an 8-bit RGBA PNG at `path`.
pub fn write_png(image: &DebugImage, path: &Path) -> Result<(), ImageWriteError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.pixels)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridge_terrain::HeightParams;

    #[test]
    fn test_debug_image_correct_dimensions() {
        let image = DebugImage::new(256, 128);
        assert_eq!((image.width, image.height), (256, 128));
        assert_eq!(image.pixels.len(), 256 * 128 * 4);
    }

    #[test]
    fn test_pixel_addressing_is_row_major() {
        let mut image = DebugImage::new(16, 16);
        image.put(3, 9, [10, 20, 30, 255]);
        assert_eq!(image.pixel(3, 9), [10, 20, 30, 255]);
        assert_eq!(image.pixel(0, 0), [0, 0, 0, 0]);
        // Row-major: the written pixel sits at byte offset (9 * 16 + 3) * 4.
        assert_eq!(image.pixels[(9 * 16 + 3) * 4], 10);
    }

    #[test]
    fn test_height_to_color_covers_full_range() {
        for i in 0..=100 {
            let normalized = i as f32 / 100.0;
            // Must not panic anywhere in the ramp, including band edges.
            let _ = height_to_color(normalized);
        }
    }

    #[test]
    fn test_heightmap_has_multiple_colors() {
        let field = HeightField::new(100, 100, HeightParams::default());
        let image = render_heightmap(&field);

        let mut colors = std::collections::HashSet::new();
        for chunk in image.pixels.chunks_exact(4) {
            colors.insert((chunk[0], chunk[1], chunk[2]));
        }
        assert!(
            colors.len() > 1,
            "heightmap of varied terrain should use more than {} color",
            colors.len()
        );
    }

    #[test]
    fn test_flat_field_renders_uniformly() {
        let field = HeightField::new(
            10,
            10,
            HeightParams {
                base_amplitude: 0.0,
                ..Default::default()
            },
        );
        let image = render_heightmap(&field);
        let first = image.pixel(0, 0);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(image.pixel(x, y), first);
            }
        }
    }

    #[test]
    fn test_write_png_produces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("height.png");

        let field = HeightField::new(32, 32, HeightParams::default());
        let image = render_heightmap(&field);
        write_png(&image, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0, "PNG file should not be empty");
    }
}
