#![forbid(unsafe_code)]

//! HTML markup for an SVG diagram whose labels are redrawn as HTML.
//!
//! When a [`Resolution`] is available, the label-free image is embedded and every matched label
//! is placed on top of it as an absolutely positioned `<code>` element. Otherwise the original
//! image is embedded unchanged.

use std::fmt::Write as _;
use std::path::Path;
use svgoverlay_core::{Label, Match, Resolution};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// CSS width of the wrapper.
    pub width: String,
    /// Prepended to the image path in the emitted `data` attribute.
    pub src_prefix: String,
    /// CSS font size of the label text.
    pub font_size: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            src_prefix: String::new(),
            font_size: "0.9em".to_string(),
        }
    }
}

impl HtmlOptions {
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_src_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.src_prefix = prefix.into();
        self
    }

    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self
    }
}

fn join_src(prefix: &str, path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    if prefix.is_empty() {
        return path;
    }
    format!("{}/{}", prefix.trim_end_matches('/'), path)
}

/// The label's lines, escaped, joined with `<br/>`.
pub fn label_html(label: &Label) -> String {
    label
        .lines()
        .iter()
        .map(|line| htmlize::escape_text(line.as_str()).into_owned())
        .collect::<Vec<_>>()
        .join("<br/>")
}

fn write_match(out: &mut String, m: &Match, font_size: &str) {
    // `bottom` because pdf_tex coordinates grow upwards from the bottom-left corner.
    let _ = write!(
        out,
        r#"
  <div style="position: absolute; bottom: {}%; left: {}%; transform: translateY(+0.5em);">
    <code class="docutils literal notranslate" style="font-size: {};"><span class="pre">{}</span></code>
  </div>"#,
        m.position.y * 100.0,
        m.position.x * 100.0,
        htmlize::escape_attribute(font_size),
        label_html(&m.label),
    );
}

/// Renders `svg_file` (as referenced from the document) with its resolved overlay.
///
/// The label-free image is assumed to sit next to `svg_file`, so only its file name is taken from
/// the overlay.
pub fn render_overlay_html(
    svg_file: &str,
    resolution: &Resolution,
    options: &HtmlOptions,
) -> String {
    let svg_file = Path::new(svg_file);
    let (src, matches): (String, &[Match]) = match resolution {
        Resolution::Available(overlay) => {
            let label_free = match overlay.label_free_path.file_name() {
                Some(name) => svg_file.with_file_name(name),
                None => svg_file.to_path_buf(),
            };
            (
                join_src(&options.src_prefix, &label_free),
                overlay.matches.as_slice(),
            )
        }
        Resolution::Unavailable => (join_src(&options.src_prefix, svg_file), &[][..]),
    };

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div style="position: relative; width: {}; display: inline-block;">
  <object data="{}" type="image/svg+xml" style="width: 100%; height: auto; display: block;"></object>"#,
        htmlize::escape_attribute(options.width.as_str()),
        htmlize::escape_attribute(src.as_str()),
    );
    for m in matches {
        write_match(&mut out, m, &options.font_size);
    }
    out.push_str("\n</div>\n");
    out
}
