use crate::label::extract_to_file;
use crate::layout::parse_macro_layout;
use crate::matching::match_labels;
use crate::model::{Overlay, Resolution};
use crate::options::OverlayOptions;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Runs the full pipeline for one diagram: companion lookup, macro parsing, label extraction and
/// matching.
///
/// The resolver holds configuration only. Every call starts from scratch, so one resolver can
/// serve many diagrams, from several threads if needed. Resolving the *same* diagram concurrently
/// races on its label-free output file.
#[derive(Debug, Clone, Default)]
pub struct OverlayResolver {
    options: OverlayOptions,
}

impl OverlayResolver {
    pub fn new(options: OverlayOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// `diagram.svg` -> `diagram.pdf_tex`
    pub fn companion_macro_path(&self, diagram: &Path) -> PathBuf {
        diagram.with_extension(&self.options.macro_extension)
    }

    /// `dir/diagram.svg` -> `dir/diagram_txt_removed.svg`
    pub fn label_free_path(&self, diagram: &Path) -> PathBuf {
        let stem = diagram
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut name = format!("{stem}{}", self.options.label_free_suffix);
        if let Some(ext) = diagram.extension() {
            name.push('.');
            name.push_str(&ext.to_string_lossy());
        }
        diagram.with_file_name(name)
    }

    /// Like [`OverlayResolver::resolve`], but reports why an overlay could not be produced.
    pub fn try_resolve(&self, diagram: &Path) -> Result<Overlay> {
        let macro_path = self.companion_macro_path(diagram);
        if !diagram.is_file() {
            return Err(Error::MissingDiagram {
                path: diagram.to_path_buf(),
            });
        }
        if !macro_path.is_file() {
            return Err(Error::MissingCompanion { path: macro_path });
        }

        let macro_text =
            std::fs::read_to_string(&macro_path).map_err(|e| Error::io(&macro_path, e))?;
        let layout = parse_macro_layout(&macro_text)?;

        let label_free_path = self.label_free_path(diagram);
        let labels = extract_to_file(diagram, &label_free_path, &self.options.vocabulary)?;

        let matches = match_labels(&labels, &layout, &self.options.content_opening_marker);
        Ok(Overlay {
            matches,
            label_free_path,
        })
    }

    /// Resolves `diagram`, turning every failure into [`Resolution::Unavailable`].
    ///
    /// A missing companion file, an unparsable SVG or a macro file without a canvas must never
    /// break a documentation build; the caller shows the original image instead.
    pub fn resolve(&self, diagram: &Path) -> Resolution {
        match self.try_resolve(diagram) {
            Ok(overlay) => Resolution::Available(overlay),
            Err(err) => {
                tracing::debug!(
                    diagram = %diagram.display(),
                    kind = ?err.kind(),
                    error = %err,
                    "overlay unavailable"
                );
                Resolution::Unavailable
            }
        }
    }
}

/// Resolves `diagram` with the default (Inkscape) options.
pub fn resolve(diagram: impl AsRef<Path>) -> Resolution {
    OverlayResolver::default().resolve(diagram.as_ref())
}
