#![forbid(unsafe_code)]

//! Recovers the on-canvas position of every text label in an SVG diagram.
//!
//! Vector editors such as Inkscape can export a diagram as an image plus a `pdf_tex` file that
//! places each label with `\put(x,y){...}`. This crate reconciles the two:
//!
//! - [`label`]: pulls the text labels out of the SVG and writes a label-free copy
//! - [`layout`]: reads the canvas size and the `\put` placements from the macro file
//! - [`matching`]: pairs each label with the first placement that contains its text in order
//! - [`resolve`]: runs the pipeline for one diagram path and never fails loudly
//!
//! ```no_run
//! use svgoverlay_core::{Resolution, resolve};
//!
//! match resolve("docs/figures/pump.svg") {
//!     Resolution::Available(overlay) => {
//!         for m in &overlay.matches {
//!             println!("{:?} at {:?}", m.label.plain_text(), m.position);
//!         }
//!     }
//!     Resolution::Unavailable => println!("no overlay data"),
//! }
//! ```

pub mod error;
pub mod label;
pub mod layout;
pub mod matching;
pub mod model;
pub mod options;
pub mod resolve;

pub use error::{Error, ErrorKind, Result};
pub use label::{extract_labels, extract_to_file};
pub use layout::{parse_canvas, parse_macro_layout, parse_placements};
pub use matching::{find_placement, match_labels, segments_in_order};
pub use model::{
    Canvas, Extraction, Label, LabelSegment, MacroLayout, Match, NormalizedPosition, Overlay,
    PlacementCommand, Resolution,
};
pub use options::{OverlayOptions, SvgVocabulary};
pub use resolve::{OverlayResolver, resolve};

#[cfg(test)]
mod tests;
