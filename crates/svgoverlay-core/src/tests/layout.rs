use super::assert_close;
use crate::*;

const INKSCAPE_PDF_TEX: &str = r#"%% Creator: Inkscape 1.2.2, www.inkscape.org
%% PDF/EPS/PS + LaTeX output extension by Johan Engelen, 2010
\begingroup%
  \makeatletter%
  \providecommand\color[2][]{%
    \errmessage{(Inkscape) Color is used for the text in Inkscape, but the package 'color.sty' is not loaded}%
    \renewcommand\color[2][]{}%
  }%
  \setlength{\unitlength}{200bp}%
  \makeatother%
  \begin{picture}(1,0.5)%
    \lineheight{1}%
    \setlength\tabcolsep{0pt}%
    \put(0,0){\includegraphics[width=\unitlength,page=1]{pump.pdf}}%
    \put(0.25,0.1){\color[rgb]{0,0,0}\makebox(0,0)[lt]{\lineheight{1.25}\smash{\begin{tabular}[t]{l}Sensor A\end{tabular}}}}%
    \put(0.6,0.3){\color[rgb]{0,0,0}\makebox(0,0)[lt]{\lineheight{1.25}\smash{\begin{tabular}[t]{l}Pump\\inlet\end{tabular}}}}%
  \end{picture}%
\endgroup%
"#;

#[test]
fn parse_canvas_reads_picture_dimensions() {
    let canvas = parse_canvas(INKSCAPE_PDF_TEX).unwrap();
    assert_eq!(
        canvas,
        Canvas {
            width: 1.0,
            height: 0.5
        }
    );
}

#[test]
fn parse_canvas_takes_first_declaration_and_trims() {
    let text = "\\begin{picture}( 100 , 50 )%\n\\begin{picture}(1,1)%\n";
    let canvas = parse_canvas(text).unwrap();
    assert_close(canvas.width, 100.0);
    assert_close(canvas.height, 50.0);
}

#[test]
fn parse_canvas_missing_declaration_is_parse_error() {
    let err = parse_canvas("\\put(1,2){x}%").unwrap_err();
    assert!(matches!(err, Error::MissingCanvas));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn parse_canvas_rejects_non_numeric_dimension() {
    let err = parse_canvas("\\begin{picture}(wide,1)%").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidNumber {
            context: "canvas width",
            ..
        }
    ));
}

#[test]
fn parse_placements_in_file_order_with_raw_content() {
    let placements = parse_placements(INKSCAPE_PDF_TEX).unwrap();
    assert_eq!(placements.len(), 3);

    assert_close(placements[0].x, 0.0);
    assert_eq!(
        placements[0].content,
        r"\includegraphics[width=\unitlength,page=1]{pump.pdf}"
    );

    assert_close(placements[1].x, 0.25);
    assert_close(placements[1].y, 0.1);
    assert_eq!(
        placements[1].content,
        r"\color[rgb]{0,0,0}\makebox(0,0)[lt]{\lineheight{1.25}\smash{\begin{tabular}[t]{l}Sensor A\end{tabular}}}"
    );

    assert_close(placements[2].x, 0.6);
    assert_close(placements[2].y, 0.3);
    assert!(placements[2].content.contains(r"Pump\\inlet"));
}

#[test]
fn parse_placements_content_may_span_lines() {
    let text = "\\put(3,4){first line\nsecond line}%\n";
    let placements = parse_placements(text).unwrap();
    assert_eq!(
        placements,
        vec![PlacementCommand {
            x: 3.0,
            y: 4.0,
            content: "first line\nsecond line".to_string(),
        }]
    );
}

#[test]
fn parse_placements_none_is_empty() {
    assert!(parse_placements("\\begin{picture}(1,1)%\n").unwrap().is_empty());
}

#[test]
fn parse_placements_rejects_non_numeric_coordinate() {
    let err = parse_placements("\\put(a,1){x}%").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidNumber {
            context: "placement x",
            ..
        }
    ));
}

#[test]
fn parse_macro_layout_combines_both() {
    let layout = parse_macro_layout(INKSCAPE_PDF_TEX).unwrap();
    assert_close(layout.canvas.height, 0.5);
    assert_eq!(layout.placements.len(), 3);
}
