//! Label extraction from SVG text nodes.
//!
//! The document is parsed read-only. Label nodes are collected during the walk and their byte
//! ranges are cut out of the original source afterwards, so everything outside a label node is
//! kept verbatim and repeated runs over the same input produce identical output.

use crate::model::{Extraction, Label, LabelSegment};
use crate::options::SvgVocabulary;
use crate::{Error, Result};
use std::ops::Range;
use std::path::Path;

fn parse_document(svg: &str) -> Result<roxmltree::Document<'_>> {
    // Some editors emit a DOCTYPE; roxmltree rejects DTDs unless asked not to.
    let mut opt = roxmltree::ParsingOptions::default();
    opt.allow_dtd = true;
    Ok(roxmltree::Document::parse_with_options(svg, opt)?)
}

fn is_label_node(node: roxmltree::Node<'_, '_>, vocabulary: &SvgVocabulary) -> bool {
    node.is_element()
        && node.tag_name().name() == vocabulary.text_tag
        && node.tag_name().namespace() == Some(vocabulary.namespace)
}

fn is_span(node: roxmltree::Node<'_, '_>, vocabulary: &SvgVocabulary) -> bool {
    node.is_element() && node.tag_name().name() == vocabulary.span_tag
}

fn starts_new_line(node: roxmltree::Node<'_, '_>, vocabulary: &SvgVocabulary) -> bool {
    node.attribute((vocabulary.line_role_namespace, vocabulary.line_role_attribute))
        == Some(vocabulary.line_role_value)
}

fn flush_text(pending: &mut String, out: &mut Vec<LabelSegment>) {
    if !pending.is_empty() {
        out.push(LabelSegment::Text(std::mem::take(pending)));
    }
}

/// Collects the segments of `element` in reading order.
///
/// Leading text and the text following each child element become separate segments. Text split
/// only by comments or processing instructions is joined back together.
fn collect_segments(
    element: roxmltree::Node<'_, '_>,
    vocabulary: &SvgVocabulary,
    out: &mut Vec<LabelSegment>,
) {
    let mut pending = String::new();
    for child in element.children() {
        if child.is_text() {
            pending.push_str(child.text().unwrap_or_default());
            continue;
        }
        if !child.is_element() {
            continue;
        }

        flush_text(&mut pending, out);
        if is_span(child, vocabulary) {
            if starts_new_line(child, vocabulary) {
                out.push(LabelSegment::LineBreak);
            }
            collect_segments(child, vocabulary, out);
        }
    }
    flush_text(&mut pending, out);
}

fn label_of(node: roxmltree::Node<'_, '_>, vocabulary: &SvgVocabulary) -> Label {
    let mut segments = Vec::new();
    collect_segments(node, vocabulary, &mut segments);
    // The first collected segment belongs to the container, not to the label.
    Label::new(segments.into_iter().skip(1).collect())
}

fn remove_ranges(source: &str, ranges: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut i = 0usize;
    for range in ranges {
        out.push_str(&source[i..range.start]);
        i = range.end;
    }
    out.push_str(&source[i..]);
    out
}

/// Extracts every label from `svg` and returns them with a copy of the document that no longer
/// contains any label node.
pub fn extract_labels(svg: &str, vocabulary: &SvgVocabulary) -> Result<Extraction> {
    let doc = parse_document(svg)?;

    let mut labels = Vec::new();
    let mut removals: Vec<Range<usize>> = Vec::new();
    for node in doc.descendants().filter(|n| is_label_node(*n, vocabulary)) {
        labels.push(label_of(node, vocabulary));

        // A label nested in another label disappears with its outer node.
        let nested = node
            .ancestors()
            .skip(1)
            .any(|a| is_label_node(a, vocabulary));
        if !nested {
            removals.push(node.range());
        }
    }

    tracing::debug!(
        labels = labels.len(),
        removed_nodes = removals.len(),
        "extracted svg labels"
    );

    Ok(Extraction {
        labels,
        label_free_svg: remove_ranges(svg, &removals),
    })
}

/// Reads `diagram`, extracts its labels and writes the label-free copy to `out`.
///
/// The diagram itself is never written.
pub fn extract_to_file(
    diagram: &Path,
    out: &Path,
    vocabulary: &SvgVocabulary,
) -> Result<Vec<Label>> {
    if out == diagram {
        return Err(Error::OutputOverwritesInput {
            path: out.to_path_buf(),
        });
    }
    let svg = std::fs::read_to_string(diagram).map_err(|e| Error::io(diagram, e))?;
    let Extraction {
        labels,
        label_free_svg,
    } = extract_labels(&svg, vocabulary)?;
    std::fs::write(out, label_free_svg).map_err(|e| Error::io(out, e))?;
    Ok(labels)
}
