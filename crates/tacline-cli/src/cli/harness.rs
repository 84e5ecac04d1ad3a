//! Harness command: a randomised count/generate consistency sweep.
//!
//! Every family is run on random anchor sets, thicknesses, clip rectangles
//! and, now and then, a geographic converter. Any family whose generated
//! length differs from its count, or that produces a non-finite point, is
//! reported.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use tacline::{try_count, try_generate, ClipRect, MercatorViewport, Point, RenderConfig, SymbolFamily};

/// Canvas the random anchors are drawn on.
const CANVAS: f64 = 600.0;

/// One disagreement found by the sweep.
#[derive(Debug, Serialize, Clone)]
pub struct Mismatch {
    pub family: String,
    pub iteration: usize,
    pub anchors: Vec<[f64; 2]>,
    pub thickness: f64,
    pub counted: usize,
    pub generated: usize,
    pub non_finite: bool,
}

/// Summary printed as JSON at the end of a run.
#[derive(Debug, Serialize)]
pub struct HarnessReport {
    pub seed: u64,
    pub iterations: usize,
    pub cases: usize,
    pub points: usize,
    pub mismatches: Vec<Mismatch>,
}

fn random_anchors(rng: &mut StdRng, n: usize) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..CANVAS), rng.random_range(0.0..CANVAS)))
        .collect()
}

fn random_config(rng: &mut StdRng, family: SymbolFamily) -> RenderConfig {
    let mut config = RenderConfig::new(family).with_thickness(rng.random_range(0.5..12.0));
    if rng.random_bool(0.25) {
        let (x, y) = (rng.random_range(0.0..CANVAS), rng.random_range(0.0..CANVAS));
        config = config.with_clip(ClipRect::new(x, y, x + CANVAS / 2.0, y + CANVAS / 2.0));
    }
    if rng.random_bool(0.1) {
        let view = MercatorViewport::new(rng.random_range(-170.0..170.0), rng.random_range(-60.0..60.0), 10.0);
        config = config.with_geo(Arc::new(view));
    }
    config
}

/// Run the sweep; deterministic for a given seed.
pub fn run_harness(iterations: usize, seed: u64) -> HarnessReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = HarnessReport {
        seed,
        iterations,
        cases: 0,
        points: 0,
        mismatches: Vec::new(),
    };

    for iteration in 0..iterations {
        for &family in SymbolFamily::all() {
            let n = rng.random_range(family.min_points()..=family.min_points() + 4);
            let anchors = random_anchors(&mut rng, n);
            let config = random_config(&mut rng, family);

            let (Ok(counted), Ok(points)) = (try_count(&config, &anchors), try_generate(&config, &anchors)) else {
                continue;
            };
            report.cases += 1;
            report.points += points.len();

            let non_finite = points.iter().any(|p| !p.is_finite());
            if counted != points.len() || non_finite {
                tracing::warn!(%family, iteration, counted, generated = points.len(), "inconsistent output");
                report.mismatches.push(Mismatch {
                    family: family.name().to_string(),
                    iteration,
                    anchors: anchors.iter().map(|p| [p.x, p.y]).collect(),
                    thickness: config.line_thickness,
                    counted,
                    generated: points.len(),
                    non_finite,
                });
            }
        }
    }
    report
}

/// Execute the harness command. Fails when any mismatch was found.
pub fn cmd_harness(iterations: usize, seed: u64) -> Result<(), String> {
    let report = run_harness(iterations, seed);
    let json = serde_json::to_string_pretty(&report).map_err(|e| format!("Failed to encode JSON: {e}"))?;
    println!("{json}");

    if report.mismatches.is_empty() {
        eprintln!("{} cases, {} points, all consistent", report.cases, report.points);
        Ok(())
    } else {
        Err(format!("{} inconsistent cases", report.mismatches.len()))
    }
}
