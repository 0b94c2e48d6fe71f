use dr4::{Color, Rect2f, Vec2f};

/// CPU render surface: straight-alpha RGBA8, row-major, top-left origin.
///
/// Every drawable of this backend renders into a `Canvas`; the window's back
/// buffer is one too and gets uploaded to the GPU on present.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Canvas {
    /// Creates a canvas filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color.to_array(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Rect2f {
        Rect2f::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Reallocates to the new size. Previous content is discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_array());
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| Color::from(self.pixels[i]))
    }

    /// Overwrites one pixel. Returns `false` when `(x, y)` is outside.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color.to_array();
                true
            }
            None => false,
        }
    }

    /// Raw RGBA8 bytes, tightly packed.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Source-over blends `color` into one pixel, scaled by `coverage`.
    /// Coordinates outside the canvas are ignored.
    pub(crate) fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(i) = self.index(x as u32, y as u32) {
            self.pixels[i] = blend(self.pixels[i], color, coverage);
        }
    }

    /// Blends a single-channel coverage mask tinted with `color`, top-left at `(x, y)`.
    pub fn blend_mask(&mut self, x: i32, y: i32, width: usize, height: usize, mask: &[u8], color: Color) {
        debug_assert_eq!(mask.len(), width * height);

        // Clip in i64: glyph origins far off-canvas must not overflow.
        let (x, y) = (i64::from(x), i64::from(y));
        let cols = clip_span(x, width, self.width);
        let rows = clip_span(y, height, self.height);

        for row in rows {
            let dst_y = (y + row as i64) as u32;
            for col in cols.clone() {
                let coverage = mask[row * width + col];
                if coverage != 0 {
                    let i = self.flat((x + col as i64) as u32, dst_y);
                    self.pixels[i] = blend(self.pixels[i], color, coverage);
                }
            }
        }
    }

    /// Blends `src` over this canvas with its top-left at `at`.
    pub fn blend_canvas(&mut self, src: &Canvas, at: Vec2f) {
        let Some(region) = self.overlap(src, at) else {
            return;
        };
        for row in 0..region.height {
            for col in 0..region.width {
                let s = src.pixels[src.flat(region.src_x + col, region.src_y + row)];
                let d = self.flat(region.dst_x + col, region.dst_y + row);
                self.pixels[d] = blend(self.pixels[d], Color::from(s), u8::MAX);
            }
        }
    }

    /// Replaces the covered pixels with those of `src`, alpha included.
    pub fn copy_canvas(&mut self, src: &Canvas, at: Vec2f) {
        let Some(region) = self.overlap(src, at) else {
            return;
        };
        let width = region.width as usize;
        for row in 0..region.height {
            let s = src.flat(region.src_x, region.src_y + row);
            let d = self.flat(region.dst_x, region.dst_y + row);
            self.pixels[d..d + width].copy_from_slice(&src.pixels[s..s + width]);
        }
    }

    #[inline]
    fn flat(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn overlap(&self, src: &Canvas, at: Vec2f) -> Option<Overlap> {
        if !at.is_finite() {
            return None;
        }
        let origin = Vec2f::new(at.x.floor(), at.y.floor());
        let placed = Rect2f::from_pos_size(origin, Vec2f::new(src.width as f32, src.height as f32));
        let clip = placed.intersect(self.bounds())?;

        Some(Overlap {
            dst_x: clip.pos.x as u32,
            dst_y: clip.pos.y as u32,
            src_x: (clip.pos.x - origin.x) as u32,
            src_y: (clip.pos.y - origin.y) as u32,
            width: clip.size.x as u32,
            height: clip.size.y as u32,
        })
    }
}

/// Indices of a `len`-long run starting at `start` that land in `0..limit`.
fn clip_span(start: i64, len: usize, limit: u32) -> std::ops::Range<usize> {
    let len = len as i64;
    let first = (-start).clamp(0, len);
    let end = (i64::from(limit) - start).clamp(first, len);
    first as usize..end as usize
}

/// Clipped copy region between two canvases, in whole pixels.
struct Overlap {
    dst_x: u32,
    dst_y: u32,
    src_x: u32,
    src_y: u32,
    width: u32,
    height: u32,
}

/// Straight-alpha source-over.
pub(crate) fn blend(dst: [u8; 4], src: Color, coverage: u8) -> [u8; 4] {
    let sa = (src.a as f32 / 255.0) * (coverage as f32 / 255.0);
    if sa <= 0.0 {
        return dst;
    }
    if sa >= 1.0 {
        return [src.r, src.g, src.b, u8::MAX];
    }

    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let mix = |s: u8, d: u8| {
        ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    [
        mix(src.r, dst[0]),
        mix(src.g, dst[1]),
        mix(src.b, dst[2]),
        (out_a * 255.0).round() as u8,
    ]
}
