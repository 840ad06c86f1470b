use serde::Serialize;
use std::path::{Path, PathBuf};
use svgoverlay_core::{
    Label, MacroLayout, NormalizedPosition, OverlayOptions, OverlayResolver, Resolution,
};
use svgoverlay_html::{HtmlOptions, render_overlay_html};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "SVGOVERLAY_LOG";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Overlay(svgoverlay_core::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Overlay(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<svgoverlay_core::Error> for CliError {
    fn from(value: svgoverlay_core::Error) -> Self {
        Self::Overlay(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Resolve,
    Html,
    Labels,
    Layout,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    source_root: Option<PathBuf>,
    out: Option<String>,
    macro_extension: Option<String>,
    label_free_suffix: Option<String>,
    html: HtmlOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchOut<'a> {
    lines: Vec<String>,
    label: &'a Label,
    position: NormalizedPosition,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveOut<'a> {
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_free_path: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matches: Option<Vec<MatchOut<'a>>>,
}

#[derive(Serialize)]
struct LabelOut<'a> {
    lines: Vec<String>,
    segments: &'a Label,
}

fn usage() -> &'static str {
    "svgoverlay\n\
\n\
USAGE:\n\
  svgoverlay [resolve] [--pretty] [--source-root <dir>] [--macro-ext <ext>] [--suffix <suffix>] <diagram.svg>\n\
  svgoverlay html [--width <css>] [--font-size <css>] [--src-prefix <path>] [--source-root <dir>] [--macro-ext <ext>] [--suffix <suffix>] [--out <path>] <diagram.svg>\n\
  svgoverlay labels [--pretty] <diagram.svg>\n\
  svgoverlay layout [--pretty] <diagram.pdf_tex>\n\
\n\
NOTES:\n\
  - resolve prints the matched labels as JSON, or {\"available\":false} when there is no overlay data.\n\
  - resolve and html write <diagram>_txt_removed.svg next to the diagram.\n\
  - the diagram path in html output is relative to --source-root; --src-prefix is prepended to it.\n\
  - labels only reads the diagram; no file is written.\n\
  - set SVGOVERLAY_LOG (e.g. debug) to see why an overlay is unavailable.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "resolve" => args.command = Command::Resolve,
            "html" => args.command = Command::Html,
            "labels" => args.command = Command::Labels,
            "layout" => args.command = Command::Layout,
            "--pretty" => args.pretty = true,
            "--source-root" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.source_root = Some(PathBuf::from(dir));
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--macro-ext" => {
                let Some(ext) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.macro_extension = Some(ext.clone());
            }
            "--suffix" => {
                let Some(suffix) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if suffix.is_empty() {
                    return Err(CliError::Usage(usage()));
                }
                args.label_free_suffix = Some(suffix.clone());
            }
            "--width" => {
                let Some(width) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.html.width = width.clone();
            }
            "--font-size" => {
                let Some(size) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.html.font_size = size.clone();
            }
            "--src-prefix" => {
                let Some(prefix) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.html.src_prefix = prefix.clone();
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.input.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn build_resolver(args: &Args) -> OverlayResolver {
    let mut options = OverlayOptions::new();
    if let Some(ext) = &args.macro_extension {
        options = options.with_macro_extension(ext.as_str());
    }
    if let Some(suffix) = &args.label_free_suffix {
        options = options.with_label_free_suffix(suffix.as_str());
    }
    OverlayResolver::new(options)
}

fn diagram_path(args: &Args, input: &str) -> PathBuf {
    match &args.source_root {
        Some(root) => root.join(input),
        None => PathBuf::from(input),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn resolve_out(resolution: &Resolution) -> ResolveOut<'_> {
    match resolution {
        Resolution::Available(overlay) => ResolveOut {
            available: true,
            label_free_path: Some(overlay.label_free_path.as_path()),
            matches: Some(
                overlay
                    .matches
                    .iter()
                    .map(|m| MatchOut {
                        lines: m.label.lines(),
                        label: &m.label,
                        position: m.position,
                    })
                    .collect(),
            ),
        },
        Resolution::Unavailable => ResolveOut {
            available: false,
            label_free_path: None,
            matches: None,
        },
    }
}

fn resolve_logged(resolver: &OverlayResolver, diagram: &Path) -> Resolution {
    let resolution = resolver.resolve(diagram);
    match &resolution {
        Resolution::Available(overlay) => tracing::info!(
            diagram = %diagram.display(),
            matches = overlay.matches.len(),
            "overlay resolved"
        ),
        Resolution::Unavailable => {
            tracing::info!(diagram = %diagram.display(), "no overlay data")
        }
    }
    resolution
}

fn run(args: Args) -> Result<(), CliError> {
    let Some(input) = args.input.as_deref() else {
        return Err(CliError::Usage(usage()));
    };

    match args.command {
        Command::Resolve => {
            let resolver = build_resolver(&args);
            let resolution = resolve_logged(&resolver, &diagram_path(&args, input));
            write_json(&resolve_out(&resolution), args.pretty)
        }
        Command::Html => {
            let resolver = build_resolver(&args);
            let resolution = resolve_logged(&resolver, &diagram_path(&args, input));
            let html = render_overlay_html(input, &resolution, &args.html);
            write_text(&html, args.out.as_deref())
        }
        Command::Labels => {
            let svg = std::fs::read_to_string(diagram_path(&args, input))?;
            let options = OverlayOptions::default();
            let extraction = svgoverlay_core::extract_labels(&svg, &options.vocabulary)?;
            let out: Vec<LabelOut<'_>> = extraction
                .labels
                .iter()
                .map(|label| LabelOut {
                    lines: label.lines(),
                    segments: label,
                })
                .collect();
            write_json(&out, args.pretty)
        }
        Command::Layout => {
            let text = std::fs::read_to_string(diagram_path(&args, input))?;
            let layout: MacroLayout = svgoverlay_core::parse_macro_layout(&text)?;
            write_json(&layout, args.pretty)
        }
    }
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
