//! 公式圖
//!
//! 固定列舉的公式集合，以 ASCII 近似原始的 LaTeX 排版。
//! 未知識別名不是錯誤終點：畫出明確標示的佔位圖，請求照常完成

use crate::quantum::QuantumError;

use super::canvas::Canvas;
use super::config::RenderConfig;
use super::font::Font;

/// 固定列舉的公式識別名
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormulaTag {
    BasisStates,
    XGate,
    Strategy,
    Superposition,
    Probability,
    Measurement,
    Intro,
}

impl FormulaTag {
    /// 解析識別名；未知名稱回傳 `UnknownTag`
    pub fn parse(tag: &str) -> Result<Self, QuantumError> {
        match tag {
            "basis_states" => Ok(FormulaTag::BasisStates),
            "x_gate" => Ok(FormulaTag::XGate),
            "strategy" => Ok(FormulaTag::Strategy),
            "superposition" => Ok(FormulaTag::Superposition),
            "probability" => Ok(FormulaTag::Probability),
            "measurement" => Ok(FormulaTag::Measurement),
            "intro" => Ok(FormulaTag::Intro),
            _ => Err(QuantumError::UnknownTag(tag.to_string())),
        }
    }

    /// 所有公式（用於預先生成圖檔）
    pub fn all() -> &'static [FormulaTag] {
        &[
            FormulaTag::BasisStates,
            FormulaTag::XGate,
            FormulaTag::Strategy,
            FormulaTag::Superposition,
            FormulaTag::Probability,
            FormulaTag::Measurement,
            FormulaTag::Intro,
        ]
    }

    /// 公式的 ASCII 排版
    pub fn text(&self) -> &'static str {
        match self {
            FormulaTag::BasisStates => "|X> = [1 0], |O> = [0 1]",
            FormulaTag::XGate => "X = [0 1 / 1 0]",
            FormulaTag::Strategy => "THETA = PI * POWER",
            FormulaTag::Superposition => "|PSI> = A|X> + B|O>",
            FormulaTag::Probability => "P(X) = SIN^2(THETA/2), P(O) = COS^2(THETA/2)",
            FormulaTag::Measurement => "|PSI> -> |X> OR |O>",
            FormulaTag::Intro => "I = [1 0 / 0 1]",
        }
    }
}

/// 渲染公式圖（置中一行文字）
pub fn render_formula(config: &RenderConfig, font: &Font, tag: FormulaTag) -> Canvas {
    let mut canvas = Canvas::new(config.formula_width, config.formula_height, config.background);

    let text = tag.text();
    // 長公式自動縮小一級，避免超出畫布
    let mut scale = config.text_scale.max(1);
    while scale > 1 && font.text_width(text, scale) > config.formula_width as i64 {
        scale -= 1;
    }

    let x = (config.formula_width as i64 - font.text_width(text, scale)) / 2;
    let y = (config.formula_height as i64 - font.text_height(scale)) / 2;
    font.draw_text(&mut canvas, x.max(0), y.max(0), text, scale, config.foreground);

    canvas
}

/// 未知公式識別名的佔位圖
///
/// 用錯誤色文字明確標示，媒體型別與正常回應一致
pub fn render_placeholder(config: &RenderConfig, font: &Font, tag: &str) -> Canvas {
    let mut canvas = Canvas::new(config.formula_width, config.formula_height, config.background);

    let text = format!("UNKNOWN FORMULA: {}", tag);
    let mut scale = config.text_scale.max(1);
    while scale > 1 && font.text_width(&text, scale) > config.formula_width as i64 {
        scale -= 1;
    }
    font.draw_text(&mut canvas, 10, 10, &text, scale, config.error_color);

    // 錯誤色外框
    let w = config.formula_width as f64;
    let h = config.formula_height as f64;
    canvas.stroke(0.0, 0.0, w - 1.0, 0.0, 1.0, config.error_color);
    canvas.stroke(0.0, h - 1.0, w - 1.0, h - 1.0, 1.0, config.error_color);
    canvas.stroke(0.0, 0.0, 0.0, h - 1.0, 1.0, config.error_color);
    canvas.stroke(w - 1.0, 0.0, w - 1.0, h - 1.0, 1.0, config.error_color);

    canvas
}

// ============================================================================
// 單元測試
// ============================================================================
