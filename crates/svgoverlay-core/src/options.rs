pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const SODIPODI_NAMESPACE: &str = "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd";

pub const DEFAULT_MACRO_EXTENSION: &str = "pdf_tex";
pub const DEFAULT_LABEL_FREE_SUFFIX: &str = "_txt_removed";
pub const DEFAULT_CONTENT_OPENING_MARKER: &str = r"\begin{tabular}";

/// Names the extractor uses to recognize label nodes and line breaks.
///
/// Label nodes are matched by namespace and local name; spans are matched by local name only, so a
/// `tspan` in an unexpected namespace still contributes its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgVocabulary {
    pub namespace: &'static str,
    pub text_tag: &'static str,
    pub span_tag: &'static str,
    pub line_role_namespace: &'static str,
    pub line_role_attribute: &'static str,
    pub line_role_value: &'static str,
}

impl SvgVocabulary {
    /// Inkscape's vocabulary: `svg:text` / `svg:tspan` with `sodipodi:role="line"`.
    pub const INKSCAPE: Self = Self {
        namespace: SVG_NAMESPACE,
        text_tag: "text",
        span_tag: "tspan",
        line_role_namespace: SODIPODI_NAMESPACE,
        line_role_attribute: "role",
        line_role_value: "line",
    };
}

impl Default for SvgVocabulary {
    fn default() -> Self {
        Self::INKSCAPE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Extension of the companion macro file, without the dot.
    pub macro_extension: String,
    /// Appended to the diagram's file stem to name the label-free copy.
    pub label_free_suffix: String,
    /// Where matching starts inside a placement's content, when present.
    pub content_opening_marker: String,
    pub vocabulary: SvgVocabulary,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            macro_extension: DEFAULT_MACRO_EXTENSION.to_string(),
            label_free_suffix: DEFAULT_LABEL_FREE_SUFFIX.to_string(),
            content_opening_marker: DEFAULT_CONTENT_OPENING_MARKER.to_string(),
            vocabulary: SvgVocabulary::default(),
        }
    }
}

impl OverlayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_macro_extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.macro_extension = ext.trim_start_matches('.').to_string();
        self
    }

    pub fn with_label_free_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.label_free_suffix = suffix.into();
        self
    }

    pub fn with_content_opening_marker(mut self, marker: impl Into<String>) -> Self {
        self.content_opening_marker = marker.into();
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: SvgVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }
}
