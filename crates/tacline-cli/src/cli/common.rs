//! Input documents shared across CLI commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

use tacline::{ClipRect, Point, RenderConfig, SymbolFamily};

/// Output format for generated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Svg,
}

/// A graphic to draw, as read from JSON or YAML.
///
/// Anchors come either as `[x, y]` pairs or as SVG path data.
#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub family: String,
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    pub dpi: Option<f64>,
    pub clip: Option<ClipRect>,
    pub anchors: Option<Vec<[f64; 2]>>,
    pub path: Option<String>,
}

fn default_thickness() -> f64 {
    1.0
}

impl InputDoc {
    /// Parse a document; `.yaml`/`.yml` files are YAML, anything else JSON.
    pub fn parse(text: &str, source: &str) -> Result<Self, String> {
        let is_yaml = Path::new(source)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        if is_yaml {
            serde_yaml::from_str(text).map_err(|e| format!("{source}: {e}"))
        } else {
            serde_json::from_str(text).map_err(|e| format!("{source}: {e}"))
        }
    }

    pub fn config(&self) -> Result<RenderConfig, String> {
        let family: SymbolFamily = self.family.parse()?;
        let mut config = RenderConfig::new(family).with_thickness(self.thickness);
        if let Some(dpi) = self.dpi {
            config = config.with_dpi(dpi);
        }
        if let Some(clip) = self.clip {
            config = config.with_clip(clip);
        }
        Ok(config)
    }

    pub fn anchors(&self) -> Result<Vec<Point>, String> {
        match (&self.anchors, &self.path) {
            (Some(pairs), _) => Ok(pairs.iter().map(|&[x, y]| Point::new(x, y)).collect()),
            (None, Some(d)) => parse_path_data(d),
            (None, None) => Err("input needs either 'anchors' or 'path'".to_string()),
        }
    }
}

/// Read a document from a file, or from stdin when `source` is `-`.
pub fn load_input(source: &str) -> Result<(RenderConfig, Vec<Point>), String> {
    let text = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {e}"))?;
        buf
    } else {
        fs::read_to_string(source).map_err(|e| format!("Failed to read {source}: {e}"))?
    };

    let doc = InputDoc::parse(&text, source)?;
    Ok((doc.config()?, doc.anchors()?))
}

/// Anchor points from SVG path data.
///
/// Every command contributes its end point; curve control points are
/// dropped. `Z` repeats the start of the current sub-path.
pub fn parse_path_data(d: &str) -> Result<Vec<Point>, String> {
    let mut points = Vec::new();
    let mut subpath_start: Option<Point> = None;

    for segment in SimplifyingPathParser::from(d) {
        let segment = segment.map_err(|e| format!("Bad path data: {e}"))?;
        match segment {
            SimplePathSegment::MoveTo { x, y } => {
                let p = Point::new(x, y);
                subpath_start = Some(p);
                points.push(p);
            }
            SimplePathSegment::LineTo { x, y }
            | SimplePathSegment::Quadratic { x, y, .. }
            | SimplePathSegment::CurveTo { x, y, .. } => points.push(Point::new(x, y)),
            SimplePathSegment::ClosePath => points.extend(subpath_start),
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_data_gives_end_points() {
        let pts = parse_path_data("M 0 0 L 100 0 C 120 0 140 20 150 50 Z").unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!((pts[2].x, pts[2].y), (150.0, 50.0));
        assert_eq!((pts[3].x, pts[3].y), (0.0, 0.0));
    }

    #[test]
    fn relative_commands_are_resolved() {
        let pts = parse_path_data("m 10 10 l 20 0 h 5").unwrap();
        let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![10.0, 30.0, 35.0]);
    }

    #[test]
    fn yaml_document() {
        let doc = InputDoc::parse(
            "family: flot\nanchors: [[0, 0], [100, 0]]\nclip: {min_x: 0, min_y: 0, max_x: 50, max_y: 50}\n",
            "in.yaml",
        )
        .unwrap();
        let config = doc.config().unwrap();
        assert_eq!(config.family, SymbolFamily::Flot);
        assert_eq!(config.line_thickness, 1.0);
        assert!(config.clip.is_some());
        assert_eq!(doc.anchors().unwrap().len(), 2);
    }

    #[test]
    fn json_document_with_path() {
        let doc = InputDoc::parse(r#"{"family": "REEF", "thickness": 2, "path": "M0,0 L100,0"}"#, "in.json").unwrap();
        assert_eq!(doc.config().unwrap().line_thickness, 2.0);
        assert_eq!(doc.anchors().unwrap().len(), 2);
    }

    #[test]
    fn unknown_family_is_reported() {
        let doc = InputDoc::parse(r#"{"family": "NOPE", "anchors": [[0, 0]]}"#, "in.json").unwrap();
        assert!(doc.config().unwrap_err().contains("NOPE"));
    }
}
