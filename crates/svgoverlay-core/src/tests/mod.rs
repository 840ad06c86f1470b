mod layout;

use crate::{Label, LabelSegment};

pub(crate) fn text(s: &str) -> LabelSegment {
    LabelSegment::text(s)
}

pub(crate) fn label(segments: &[LabelSegment]) -> Label {
    Label::new(segments.to_vec())
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}
