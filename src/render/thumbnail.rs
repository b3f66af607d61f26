//! Thumbnail composition: centered label text drawn over a template image.

use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use anyhow::{Context, Result, anyhow};
use image::{Rgba, RgbaImage};

/// Pixel offset of the drop shadow relative to the label.
const SHADOW_OFFSET: f32 = 2.0;

const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LABEL_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Shared, read-only inputs for thumbnail rendering.
///
/// Loaded once at startup and cloned per entry, so the template itself is
/// never mutated.
pub struct ThumbnailAssets {
    template: RgbaImage,
    font: FontVec,
    scale: PxScale,
}

impl ThumbnailAssets {
    /// Decode the template image and parse the label font.
    pub fn load(template_path: &Path, font_path: &Path, font_px: f32) -> Result<Self> {
        let template = image::open(template_path)
            .with_context(|| {
                format!(
                    "failed to open thumbnail template at {}",
                    template_path.display()
                )
            })?
            .to_rgba8();

        let font_data = fs::read(font_path)
            .with_context(|| format!("failed to read font at {}", font_path.display()))?;
        let font = FontVec::try_from_vec(font_data)
            .map_err(|err| anyhow!("failed to parse font at {}: {err}", font_path.display()))?;

        Ok(Self {
            template,
            font,
            scale: PxScale::from(font_px),
        })
    }

    /// Compose a thumbnail with the label centered over a copy of the template.
    ///
    /// The label is drawn twice: first offset in black for the drop shadow,
    /// then at the true position in white. Shadow first, so the foreground
    /// layers over it.
    pub fn render(&self, label: &str) -> RgbaImage {
        let mut canvas = self.template.clone();

        let (text_width, text_height) = self.measure(label);
        let x = ((canvas.width() as f32 - text_width) / 2.0).round();
        let y = ((canvas.height() as f32 - text_height) / 2.0).round();

        self.draw_text(
            &mut canvas,
            (x + SHADOW_OFFSET, y + SHADOW_OFFSET),
            SHADOW_COLOR,
            label,
        );
        self.draw_text(&mut canvas, (x, y), LABEL_COLOR, label);

        canvas
    }

    /// Rendered size of the label: advance width with kerning, and the
    /// font's ascent-to-descent height.
    fn measure(&self, text: &str) -> (f32, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        (width, scaled.ascent() - scaled.descent())
    }

    fn draw_text(&self, canvas: &mut RgbaImage, origin: (f32, f32), color: Rgba<u8>, text: &str) {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = origin.1 + scaled.ascent();
        let mut caret = origin.0;
        let mut previous: Option<GlyphId> = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px < 0 || py < 0 {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                if px >= canvas.width() || py >= canvas.height() {
                    return;
                }
                let pixel = canvas.get_pixel_mut(px, py);
                *pixel = blend(*pixel, color, coverage);
            });
        }
    }
}

/// Composite a coverage-weighted color over an existing pixel.
fn blend(under: Rgba<u8>, over: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let coverage = coverage.clamp(0.0, 1.0);
    let mix = |under: u8, over: u8| -> u8 {
        (f32::from(over) * coverage + f32::from(under) * (1.0 - coverage)).round() as u8
    };
    Rgba([
        mix(under[0], over[0]),
        mix(under[1], over[1]),
        mix(under[2], over[2]),
        under[3].max((coverage * f32::from(over[3])).round() as u8),
    ])
}
