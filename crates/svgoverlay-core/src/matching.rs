use crate::model::{Label, LabelSegment, MacroLayout, Match, PlacementCommand};

/// Returns `true` if every text segment occurs in `content`, in order and without overlap.
///
/// The search starts at `opening_marker` when the content contains it, else at the beginning.
/// Line breaks take part in the walk but are never searched for.
pub fn segments_in_order(content: &str, segments: &[LabelSegment], opening_marker: &str) -> bool {
    let mut cursor = content.find(opening_marker).unwrap_or(0);
    for segment in segments {
        let LabelSegment::Text(text) = segment else {
            continue;
        };
        match content[cursor..].find(text.as_str()) {
            Some(rel) => cursor += rel + text.len(),
            None => return false,
        }
    }
    true
}

/// The first placement (in file order) whose content holds the label.
///
/// There is no exclusivity: a placement already claimed by another label is still a candidate.
pub fn find_placement<'a>(
    label: &Label,
    placements: &'a [PlacementCommand],
    opening_marker: &str,
) -> Option<&'a PlacementCommand> {
    if !label.is_matchable() {
        return None;
    }
    placements.iter().find(|placement| {
        let found = segments_in_order(&placement.content, label.segments(), opening_marker);
        if !found {
            tracing::trace!(x = placement.x, y = placement.y, "placement rejected");
        }
        found
    })
}

/// Pairs labels with their placements. Labels without one are dropped.
pub fn match_labels(labels: &[Label], layout: &MacroLayout, opening_marker: &str) -> Vec<Match> {
    let matches: Vec<Match> = labels
        .iter()
        .filter_map(|label| {
            let placement = find_placement(label, &layout.placements, opening_marker)?;
            Some(Match {
                label: label.clone(),
                position: layout.canvas.normalize(placement.x, placement.y),
            })
        })
        .collect();

    tracing::debug!(
        labels = labels.len(),
        matched = matches.len(),
        "matched labels to placements"
    );
    matches
}
