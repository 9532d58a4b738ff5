//! Bloch 球圖
//!
//! 固定視角（仰角 20°、方位角 45°）的正交投影：
//! 座標軸箭頭、球面輪廓、虛線赤道、|0⟩/|1⟩ 極點標籤，
//! 加上每個狀態向量的箭頭與標籤

use crate::quantum::{StateVector, VectorStyle, POLE_LABEL_OFFSET, SPHERE_RADIUS};

use super::canvas::{fade, Canvas};
use super::config::RenderConfig;
use super::font::Font;

const ELEV_DEG: f64 = 20.0;
const AZIM_DEG: f64 = 45.0;
const AXIS_LENGTH: f64 = 3.5; // 座標軸箭頭長度（顯示單位）

/// 固定視角的正交投影
struct Projection {
    cx: f64,
    cy: f64,
    scale: f64,
    sin_azim: f64,
    cos_azim: f64,
    sin_elev: f64,
    cos_elev: f64,
}

impl Projection {
    fn new(config: &RenderConfig) -> Self {
        let extent = AXIS_LENGTH + 0.6; // 留出軸標籤空間
        let scale = config.sphere_width.min(config.sphere_height) as f64 / (2.0 * extent);
        Self {
            cx: config.sphere_width as f64 / 2.0,
            cy: config.sphere_height as f64 / 2.0,
            scale,
            sin_azim: AZIM_DEG.to_radians().sin(),
            cos_azim: AZIM_DEG.to_radians().cos(),
            sin_elev: ELEV_DEG.to_radians().sin(),
            cos_elev: ELEV_DEG.to_radians().cos(),
        }
    }

    /// 3D 點 → 螢幕座標
    fn project(&self, v: &StateVector) -> (f64, f64) {
        // 方位角旋轉：深度軸朝向觀察者
        let depth = v.x * self.cos_azim + v.y * self.sin_azim;
        let horiz = -v.x * self.sin_azim + v.y * self.cos_azim;
        // 仰角旋轉後取垂直分量
        let vert = v.z * self.cos_elev - depth * self.sin_elev;

        (self.cx + horiz * self.scale, self.cy - vert * self.scale)
    }
}

/// 渲染 Bloch 球圖
///
/// 相同輸入與配置下輸出完全確定
pub fn render_sphere(
    config: &RenderConfig,
    font: &Font,
    items: &[(StateVector, &str, VectorStyle)],
) -> Canvas {
    let mut canvas = Canvas::new(config.sphere_width, config.sphere_height, config.background);
    let proj = Projection::new(config);
    let fg = config.foreground;
    let scale = config.text_scale;

    // ------------------------------------------------------------------
    // 座標軸箭頭與標籤
    // ------------------------------------------------------------------
    let origin = proj.project(&StateVector::zero());
    let axes = [
        (StateVector::new(AXIS_LENGTH, 0.0, 0.0), "X"),
        (StateVector::new(0.0, AXIS_LENGTH, 0.0), "Y"),
        (StateVector::new(0.0, 0.0, AXIS_LENGTH - 1.0), "Z"),
    ];
    for (tip, label) in &axes {
        let (tx, ty) = proj.project(tip);
        canvas.arrow(origin.0, origin.1, tx, ty, 1.5, fg);

        let label_point = StateVector::new(tip.x * 1.15, tip.y * 1.15, tip.z * 1.15);
        let (lx, ly) = proj.project(&label_point);
        font.draw_text(&mut canvas, lx as i64, ly as i64, label, scale, fg);
    }

    // ------------------------------------------------------------------
    // 球面輪廓（正交投影下是圓）與虛線赤道
    // ------------------------------------------------------------------
    let outline = fade(fg, config.background, 0.4);
    canvas.circle(proj.cx, proj.cy, SPHERE_RADIUS * proj.scale, 1.5, outline);

    let dashes = 48;
    for i in 0..dashes {
        // 偶數段畫、奇數段跳，形成虛線
        if i % 2 != 0 {
            continue;
        }
        let a0 = std::f64::consts::TAU * i as f64 / dashes as f64;
        let a1 = std::f64::consts::TAU * (i + 1) as f64 / dashes as f64;
        let p0 = proj.project(&StateVector::new(
            SPHERE_RADIUS * a0.cos(),
            SPHERE_RADIUS * a0.sin(),
            0.0,
        ));
        let p1 = proj.project(&StateVector::new(
            SPHERE_RADIUS * a1.cos(),
            SPHERE_RADIUS * a1.sin(),
            0.0,
        ));
        canvas.stroke(p0.0, p0.1, p1.0, p1.1, 1.5, fg);
    }

    // ------------------------------------------------------------------
    // 極點標籤
    // ------------------------------------------------------------------
    for (z, label) in [(POLE_LABEL_OFFSET, "|0>"), (-POLE_LABEL_OFFSET, "|1>")] {
        let (px, py) = proj.project(&StateVector::new(0.0, 0.0, z));
        let w = font.text_width(label, scale);
        let h = font.text_height(scale);
        font.draw_text(&mut canvas, px as i64 - w / 2, py as i64 - h / 2, label, scale, fg);
    }

    // ------------------------------------------------------------------
    // 狀態向量箭頭與標籤
    // ------------------------------------------------------------------
    for (vector, label, style) in items {
        let color = match style {
            VectorStyle::Solid => fg,
            VectorStyle::Faded => fade(fg, config.background, 0.6),
        };
        let (tx, ty) = proj.project(vector);
        canvas.arrow(origin.0, origin.1, tx, ty, 4.0, color);

        if !label.is_empty() {
            // 標籤放在向量 0.6 倍處
            let anchor = StateVector::new(vector.x * 0.6, vector.y * 0.6, vector.z * 0.6);
            let (lx, ly) = proj.project(&anchor);
            font.draw_text(&mut canvas, lx as i64 + 6, ly as i64, label, scale, color);
        }
    }

    canvas
}

// ============================================================================
// 單元測試
// ============================================================================
