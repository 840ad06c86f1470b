use serde::Serialize;
use std::path::PathBuf;

/// One piece of a label, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelSegment {
    Text(String),
    /// Start of a new visual line (`sodipodi:role="line"` on a `tspan`).
    LineBreak,
}

impl LabelSegment {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::LineBreak => None,
        }
    }
}

/// A text node removed from the diagram, as an ordered list of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Label {
    segments: Vec<LabelSegment>,
}

impl Label {
    pub fn new(segments: Vec<LabelSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[LabelSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A label can only be matched if it has at least one non-empty text segment to search for.
    pub fn is_matchable(&self) -> bool {
        self.segments
            .iter()
            .any(|s| s.as_text().is_some_and(|t| !t.is_empty()))
    }

    /// Segments joined into visual lines. A leading line break does not produce an empty first
    /// line, but consecutive breaks do.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut cur = String::new();
        let mut started = false;
        for seg in &self.segments {
            match seg {
                LabelSegment::Text(s) => {
                    cur.push_str(s);
                    started = true;
                }
                LabelSegment::LineBreak => {
                    if started {
                        out.push(std::mem::take(&mut cur));
                    }
                    started = true;
                }
            }
        }
        if started {
            out.push(cur);
        }
        out
    }

    pub fn plain_text(&self) -> String {
        self.lines().join("\n")
    }
}

impl From<Vec<LabelSegment>> for Label {
    fn from(segments: Vec<LabelSegment>) -> Self {
        Self::new(segments)
    }
}

/// A `\put(x,y){content}%` invocation from the macro file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementCommand {
    pub x: f64,
    pub y: f64,
    pub content: String,
}

/// Logical dimensions declared by `\begin{picture}(width,height)%`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    /// Unchecked: a zero dimension yields a non-finite coordinate.
    pub fn normalize(&self, x: f64, y: f64) -> NormalizedPosition {
        NormalizedPosition {
            x: x / self.width,
            y: y / self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroLayout {
    pub canvas: Canvas,
    pub placements: Vec<PlacementCommand>,
}

/// Position relative to the canvas, with the origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub label: Label,
    pub position: NormalizedPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub labels: Vec<Label>,
    pub label_free_svg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub matches: Vec<Match>,
    pub label_free_path: PathBuf,
}

/// Outcome of resolving one diagram.
///
/// `Unavailable` is the "no overlay data" sentinel: callers render the original image as-is. It is
/// distinct from an `Available` overlay with zero matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Available(Overlay),
    Unavailable,
}

impl Resolution {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        match self {
            Self::Available(overlay) => Some(overlay),
            Self::Unavailable => None,
        }
    }

    pub fn into_overlay(self) -> Option<Overlay> {
        match self {
            Self::Available(overlay) => Some(overlay),
            Self::Unavailable => None,
        }
    }
}

impl From<Option<Overlay>> for Resolution {
    fn from(value: Option<Overlay>) -> Self {
        match value {
            Some(overlay) => Self::Available(overlay),
            None => Self::Unavailable,
        }
    }
}
