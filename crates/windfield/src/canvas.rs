// Software RGBA canvas for the particle trails
//
// Straight-alpha RGBA8 framebuffer, row-major. The two drawing operations
// the engine needs are a destination-out style fade (partial erase of the
// whole frame, which turns motion into trails) and a round-capped stroked
// line segment blended source-over.

use glam::Vec2;

#[derive(Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data, straight alpha, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reallocate for new dimensions and clear to transparent
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width * height * 4) as usize];
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Erase a fraction of the existing drawing, like compositing a black
    /// rectangle with `destination-out`: every pixel's alpha is scaled by
    /// (1 - amount), so old strokes decay over successive frames.
    pub fn fade(&mut self, amount: f32) {
        let keep = (1.0 - amount).clamp(0.0, 1.0);
        for px in self.pixels.chunks_exact_mut(4) {
            px[3] = (px[3] as f32 * keep) as u8;
        }
    }

    /// Stroke a line segment from `from` to `to` with round caps.
    ///
    /// Coverage is computed per pixel from the distance to the segment
    /// (a capsule of radius width/2), which gives the rounded caps for
    /// free. NaN endpoints produce an empty coverage region and draw
    /// nothing.
    pub fn stroke_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: [u8; 3], alpha: f32) {
        if self.pixels.is_empty() || !(alpha > 0.0) {
            return;
        }

        let radius = width * 0.5;
        let pad = radius + 1.0;

        // NaN bounds collapse to an empty pixel range via the saturating casts
        let min_x = ((from.x.min(to.x) - pad).floor() as i64).max(0) as u32;
        let min_y = ((from.y.min(to.y) - pad).floor() as i64).max(0) as u32;
        let max_x = (((from.x.max(to.x) + pad).ceil() as i64).max(0) as u32).min(self.width);
        let max_y = (((from.y.max(to.y) + pad).ceil() as i64).max(0) as u32).min(self.height);

        for y in min_y..max_y {
            for x in min_x..max_x {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let dist = distance_to_segment(center, from, to);
                let coverage = (radius + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(x, y, color, alpha * coverage);
                }
            }
        }
    }

    /// Source-over blend of a straight-alpha source onto one pixel
    fn blend_pixel(&mut self, x: u32, y: u32, color: [u8; 3], alpha: f32) {
        let idx = ((y * self.width + x) * 4) as usize;
        let dst = &mut self.pixels[idx..idx + 4];

        let sa = alpha.clamp(0.0, 1.0);
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }

        for c in 0..3 {
            let sc = color[c] as f32;
            let dc = dst[c] as f32;
            dst[c] = ((sc * sa + dc * da * (1.0 - sa)) / out_a).round() as u8;
        }
        dst[3] = (out_a * 255.0).round() as u8;
    }
}

/// Distance from a point to the closest point on a segment
fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < 1e-12 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(canvas: &Canvas, x: u32, y: u32) -> u8 {
        canvas.pixels()[((y * canvas.width() + x) * 4 + 3) as usize]
    }

    #[test]
    fn test_stroke_covers_pixels_along_the_segment() {
        let mut canvas = Canvas::new(64, 64);
        canvas.stroke_segment(
            Vec2::new(10.0, 32.0),
            Vec2::new(50.0, 32.0),
            1.2,
            [250, 101, 51],
            0.8,
        );

        assert!(alpha_at(&canvas, 30, 32) > 0);
        // far away from the segment stays untouched
        assert_eq!(alpha_at(&canvas, 30, 10), 0);
    }

    #[test]
    fn test_fade_decays_alpha_to_zero() {
        let mut canvas = Canvas::new(16, 16);
        canvas.stroke_segment(
            Vec2::new(2.0, 8.0),
            Vec2::new(14.0, 8.0),
            1.2,
            [255, 255, 255],
            1.0,
        );
        let before = alpha_at(&canvas, 8, 8);
        assert!(before > 0);

        canvas.fade(0.12);
        let after = alpha_at(&canvas, 8, 8);
        assert!(after < before);

        for _ in 0..200 {
            canvas.fade(0.12);
        }
        assert_eq!(alpha_at(&canvas, 8, 8), 0);
    }

    #[test]
    fn test_zero_size_canvas_is_inert() {
        let mut canvas = Canvas::new(0, 0);
        canvas.fade(0.12);
        canvas.stroke_segment(Vec2::ZERO, Vec2::new(5.0, 5.0), 1.2, [255, 0, 0], 0.5);
        assert!(canvas.pixels().is_empty());
    }

    #[test]
    fn test_nan_endpoints_draw_nothing() {
        let mut canvas = Canvas::new(32, 32);
        canvas.stroke_segment(
            Vec2::new(f32::NAN, f32::NAN),
            Vec2::new(f32::NAN, f32::NAN),
            1.2,
            [250, 101, 51],
            0.8,
        );
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_resize_clears_previous_content() {
        let mut canvas = Canvas::new(32, 32);
        canvas.stroke_segment(
            Vec2::new(4.0, 4.0),
            Vec2::new(28.0, 28.0),
            2.0,
            [255, 255, 255],
            1.0,
        );
        canvas.resize(48, 24);
        assert_eq!(canvas.width(), 48);
        assert_eq!(canvas.height(), 24);
        assert!(canvas.pixels().iter().all(|&b| b == 0));
    }
}
