//! Family → construction table.
//!
//! Every family resolves to exactly one [`Construction`]: a pair of plain
//! function pointers sharing the same arithmetic, one sizing the output and
//! one producing it.
//!
//! ## Rust Lesson #9: Function Pointers
//!
//! `fn(&DrawContext) -> Result<usize>` is a *function pointer* type, not a
//! closure. It has no captured state, is `Copy`, and can be stored in a
//! `const` table. Any free function with a matching signature coerces to it.

use crate::channel;
use crate::config::DrawContext;
use crate::error::Result;
use crate::family::{FamilyClass, SymbolFamily};
use crate::flot;
use crate::geometry::Point;
use crate::glyphs::{arcs, arrows, clipped, linear, lines, tasks};
use crate::motifs::{ditch, fortl, pipe, reef, squall, DitchStyle};

pub type CountFn = fn(&DrawContext) -> Result<usize>;
pub type GenerateFn = fn(&DrawContext) -> Result<Vec<Point>>;

/// The counting and generating halves of one construction.
#[derive(Clone, Copy)]
pub struct Construction {
    pub count: CountFn,
    pub generate: GenerateFn,
}

impl Construction {
    const fn new(count: CountFn, generate: GenerateFn) -> Self {
        Self { count, generate }
    }
}

/// Look up the construction for `family`.
pub fn construction(family: SymbolFamily) -> Construction {
    match family.class() {
        FamilyClass::Polyline => Construction::new(lines::open_count, lines::solid),
        FamilyClass::Dashed => Construction::new(lines::open_count, lines::dashed),
        FamilyClass::ClosedArea => Construction::new(lines::area_count, lines::area),
        FamilyClass::Encircle => Construction::new(lines::encircle_count, lines::encircle),
        FamilyClass::Arrow => match family {
            SymbolFamily::Oneway | SymbolFamily::Alt | SymbolFamily::Twoway => {
                Construction::new(arrows::flow_count, arrows::flow)
            }
            _ => Construction::new(arrows::attack_count, arrows::attack),
        },
        FamilyClass::Linear => Construction::new(linear::count, linear::generate),
        FamilyClass::Axis => Construction::new(channel::axis_count, channel::axis_generate),
        FamilyClass::Fence => Construction::new(channel::fence_count, channel::fence_generate),
        FamilyClass::Density => Construction::new(density_count, density_generate),
        FamilyClass::Wavy => Construction::new(flot::count, flot::generate),
        FamilyClass::ClipDependent => Construction::new(clipped::count, clipped::generate),
        FamilyClass::FixedGlyph => Construction::new(tasks::count, tasks::generate),
        FamilyClass::ArcTask => Construction::new(arcs::count, arcs::generate),
    }
}

// ============================================================================
// DENSITY ADAPTERS
// ============================================================================
//
// The motif generators take a path and an already scaled spacing; these
// adapters supply both from the context.

fn ditch_style(family: SymbolFamily) -> DitchStyle {
    match family {
        SymbolFamily::Atditchc => DitchStyle::Filled,
        SymbolFamily::Atditchm => DitchStyle::Marked,
        _ => DitchStyle::Open,
    }
}

fn density_count(ctx: &DrawContext) -> Result<usize> {
    let path = ctx.anchors;
    match ctx.family {
        SymbolFamily::Reef => reef::count(path, ctx.size(reef::REEF_SPACING)),
        SymbolFamily::Pipe => pipe::count(path, ctx.size(pipe::PIPE_SPACING)),
        SymbolFamily::Fortl => fortl::count(path, ctx.size(fortl::FORTL_SPACING)),
        SymbolFamily::Squall => squall::count(path, ctx.size(squall::SQUALL_LENGTH)),
        family => ditch::count(path, ctx.size(ditch::DITCH_SPACING), ditch_style(family)),
    }
}

fn density_generate(ctx: &DrawContext) -> Result<Vec<Point>> {
    let path = ctx.anchors;
    Ok(match ctx.family {
        SymbolFamily::Reef => reef::generate(path, ctx.size(reef::REEF_SPACING)),
        SymbolFamily::Pipe => pipe::generate(path, ctx.size(pipe::PIPE_SPACING)),
        SymbolFamily::Fortl => fortl::generate(path, ctx.size(fortl::FORTL_SPACING)),
        SymbolFamily::Squall => squall::generate(
            path,
            ctx.size(squall::SQUALL_LENGTH),
            ctx.size(squall::SQUALL_AMPLITUDE),
        ),
        family => ditch::generate(path, ctx.size(ditch::DITCH_SPACING), ditch_style(family)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;

    #[test]
    fn reef_example() {
        let anchors = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let config = RenderConfig::new(SymbolFamily::Reef);
        let ctx = config.context(&anchors);
        let c = construction(SymbolFamily::Reef);
        assert_eq!((c.count)(&ctx).unwrap(), 14);
        assert_eq!((c.generate)(&ctx).unwrap().len(), 14);
    }

    #[test]
    fn ditch_styles_follow_family() {
        assert_eq!(ditch_style(SymbolFamily::Atditch), DitchStyle::Open);
        assert_eq!(ditch_style(SymbolFamily::Atditchc), DitchStyle::Filled);
        assert_eq!(ditch_style(SymbolFamily::Atditchm), DitchStyle::Marked);
    }
}
