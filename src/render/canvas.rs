//! RGBA8 像素緩衝與繪圖原語
//!
//! 繪製本身是例行公事，核心只約定輸出格式：row-major RGBA8

/// 像素緩衝
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// 以背景色填滿的新畫布
    pub fn new(width: u32, height: u32, background: [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&[background[0], background[1], background[2], 255]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return; // 越界像素直接丟棄
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[idx] = color[0];
        self.pixels[idx + 1] = color[1];
        self.pixels[idx + 2] = color[2];
        self.pixels[idx + 3] = 255;
    }

    /// 實心圓盤
    pub fn disc(&mut self, cx: f64, cy: f64, radius: f64, color: [u8; 3]) {
        let r = radius.max(0.5);
        let (x0, x1) = ((cx - r).floor() as i64, (cx + r).ceil() as i64);
        let (y0, y1) = ((cy - r).floor() as i64, (cy + r).ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// 指定線寬的線段
    pub fn stroke(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: [u8; 3]) {
        let len = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
        let steps = (len.ceil() as usize).max(1) * 2;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let cx = x0 + (x1 - x0) * t;
            let cy = y0 + (y1 - y0) * t;
            self.disc(cx, cy, width / 2.0, color);
        }
    }

    /// 箭頭：線段加上兩翼箭頭
    pub fn arrow(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: [u8; 3]) {
        self.stroke(x0, y0, x1, y1, width, color);

        let len = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
        if len < 1.0 {
            return; // 退化向量不畫箭頭
        }
        let head = (len * 0.12).max(4.0);
        let angle = (y1 - y0).atan2(x1 - x0);
        for wing in [2.6, -2.6f64] {
            let wx = x1 + head * (angle + wing).cos();
            let wy = y1 + head * (angle + wing).sin();
            self.stroke(x1, y1, wx, wy, width, color);
        }
    }

    /// 圓周輪廓
    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, width: f64, color: [u8; 3]) {
        let steps = ((radius * std::f64::consts::TAU).ceil() as usize).max(16);
        for i in 0..steps {
            let a = std::f64::consts::TAU * i as f64 / steps as f64;
            self.disc(cx + radius * a.cos(), cy + radius * a.sin(), width / 2.0, color);
        }
    }
}

/// 前景色向背景色靠攏，模擬半透明樣式
pub fn fade(color: [u8; 3], background: [u8; 3], alpha: f64) -> [u8; 3] {
    let mix = |c: u8, b: u8| -> u8 {
        (c as f64 * alpha + b as f64 * (1.0 - alpha)).round() as u8
    };
    [
        mix(color[0], background[0]),
        mix(color[1], background[1]),
        mix(color[2], background[2]),
    ]
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_filled_with_background() {
        let canvas = Canvas::new(4, 3, [51, 48, 95]);
        assert_eq!(canvas.pixel(0, 0), [51, 48, 95, 255]);
        assert_eq!(canvas.pixel(3, 2), [51, 48, 95, 255]);
        assert_eq!(canvas.into_rgba().len(), 4 * 3 * 4);
    }

    #[test]
    fn test_out_of_bounds_pixels_dropped() {
        let mut canvas = Canvas::new(2, 2, [0, 0, 0]);
        canvas.set_pixel(-1, 0, [255, 255, 255]);
        canvas.set_pixel(0, 5, [255, 255, 255]);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(canvas.pixel(x, y), [0, 0, 0, 255]);
            }
        }
    }

    #[test]
    fn test_stroke_marks_endpoints() {
        let mut canvas = Canvas::new(20, 20, [0, 0, 0]);
        canvas.stroke(2.0, 2.0, 17.0, 17.0, 1.0, [255, 255, 255]);
        assert_eq!(canvas.pixel(2, 2), [255, 255, 255, 255]);
        assert_eq!(canvas.pixel(17, 17), [255, 255, 255, 255]);
    }

    #[test]
    fn test_fade_blends_toward_background() {
        let faded = fade([255, 255, 255], [51, 48, 95], 0.5);
        assert_eq!(faded, [153, 152, 175]);
    }
}
