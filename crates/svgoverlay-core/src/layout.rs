//! `pdf_tex` macro-file parsing.
//!
//! Inkscape's LaTeX export wraps the image in a `picture` environment:
//!
//! ```text
//! \begin{picture}(1,0.5)%
//!   \put(0,0){\includegraphics[width=\unitlength,page=1]{pump.pdf}}%
//!   \put(0.25,0.1){\color[rgb]{0,0,0}\makebox(0,0)[lt]{...\begin{tabular}[t]{l}Sensor A\end{tabular}}}}%
//! \end{picture}%
//! ```
//!
//! Only the canvas size and the `\put` invocations matter here. The content of each `\put` is kept
//! as raw text.

use crate::model::{Canvas, MacroLayout, PlacementCommand};
use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

fn picture_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\\begin\{picture\}\((.*?),(.*?)\)%").unwrap())
}

fn put_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\\put\((.*?),(.*?)\)\{(.*?)\}%").unwrap())
}

fn parse_number(raw: &str, context: &'static str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber {
            context,
            value: raw.to_string(),
        })
}

/// Reads the first `\begin{picture}(w,h)%` declaration.
pub fn parse_canvas(text: &str) -> Result<Canvas> {
    let caps = picture_re().captures(text).ok_or(Error::MissingCanvas)?;
    Ok(Canvas {
        width: parse_number(&caps[1], "canvas width")?,
        height: parse_number(&caps[2], "canvas height")?,
    })
}

/// Collects every `\put(x,y){content}%` in file order. No placement at all is not an error.
pub fn parse_placements(text: &str) -> Result<Vec<PlacementCommand>> {
    put_re()
        .captures_iter(text)
        .map(|caps| {
            Ok(PlacementCommand {
                x: parse_number(&caps[1], "placement x")?,
                y: parse_number(&caps[2], "placement y")?,
                content: caps[3].to_string(),
            })
        })
        .collect()
}

pub fn parse_macro_layout(text: &str) -> Result<MacroLayout> {
    let canvas = parse_canvas(text)?;
    let placements = parse_placements(text)?;
    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        placements = placements.len(),
        "parsed macro layout"
    );
    Ok(MacroLayout { canvas, placements })
}
