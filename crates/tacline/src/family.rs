//! Symbol families and their behaviour classes.
//!
//! One variant per tactical graphic the engine can draw. The table below is
//! the single source for each family's display name, class and minimum
//! anchor count.

use std::fmt;
use std::str::FromStr;

/// Behaviour class: which construction module draws a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyClass {
    /// Plain open polyline through the anchors.
    Polyline,
    /// Dashed open polyline.
    Dashed,
    /// Polyline closed back to the first anchor.
    ClosedArea,
    /// Closed area with teeth along every side.
    Encircle,
    /// Lines decorated with arrowheads.
    Arrow,
    /// Lines decorated with ticks, notches or diamonds.
    Linear,
    /// Double-outline axis arrows built on the channel generator.
    Axis,
    /// Fences and wires: strokes on parallel offset lines.
    Fence,
    /// Repeating motifs whose number depends on path length.
    Density,
    /// Scallops and weather-front glyphs.
    Wavy,
    /// Glyphs whose size depends on the visible part of the base segment.
    ClipDependent,
    /// Constant-size glyphs.
    FixedGlyph,
    /// Task graphics built around sampled arcs.
    ArcTask,
}

impl FamilyClass {
    pub fn name(&self) -> &'static str {
        match self {
            FamilyClass::Polyline => "polyline",
            FamilyClass::Dashed => "dashed",
            FamilyClass::ClosedArea => "closed-area",
            FamilyClass::Encircle => "encircle",
            FamilyClass::Arrow => "arrow",
            FamilyClass::Linear => "linear",
            FamilyClass::Axis => "axis",
            FamilyClass::Fence => "fence",
            FamilyClass::Density => "density",
            FamilyClass::Wavy => "wavy",
            FamilyClass::ClipDependent => "clip-dependent",
            FamilyClass::FixedGlyph => "fixed-glyph",
            FamilyClass::ArcTask => "arc-task",
        }
    }
}

// ============================================================================
// FAMILY TABLE
// ============================================================================

macro_rules! symbol_families {
    ($($variant:ident => $name:literal, $class:ident, $min:literal;)+) => {
        /// Tactical graphic family tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SymbolFamily {
            $($variant,)+
        }

        impl SymbolFamily {
            /// Every family, in table order.
            pub fn all() -> &'static [SymbolFamily] {
                &[$(SymbolFamily::$variant,)+]
            }

            /// Upper-case display name, e.g. `"BS_ELLIPSE"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(SymbolFamily::$variant => $name,)+
                }
            }

            pub fn class(&self) -> FamilyClass {
                match self {
                    $(SymbolFamily::$variant => FamilyClass::$class,)+
                }
            }

            /// Fewest anchors the construction accepts.
            pub fn min_points(&self) -> usize {
                match self {
                    $(SymbolFamily::$variant => $min,)+
                }
            }
        }
    };
}

symbol_families! {
    Boundary => "BOUNDARY", Polyline, 2;
    Pl => "PL", Polyline, 2;
    Ll => "LL", Polyline, 2;
    Loa => "LOA", Polyline, 2;
    Ld => "LD", Polyline, 2;
    Release => "RELEASE", Polyline, 2;
    Hold => "HOLD", Polyline, 2;
    Brdghd => "BRDGHD", Polyline, 2;
    Fscl => "FSCL", Polyline, 2;
    Cfl => "CFL", Polyline, 2;
    Nfl => "NFL", Polyline, 2;
    Rfl => "RFL", Polyline, 2;

    Pld => "PLD", Dashed, 2;
    Ldlc => "LDLC", Dashed, 2;
    Bcl => "BCL", Dashed, 2;
    Icl => "ICL", Dashed, 2;
    Trough => "TROUGH", Dashed, 2;

    Genarea => "GENAREA", ClosedArea, 3;
    Assy => "ASSY", ClosedArea, 3;
    Ea => "EA", ClosedArea, 3;
    Obj => "OBJ", ClosedArea, 3;
    Battle => "BATTLE", ClosedArea, 3;
    Encircle => "ENCIRCLE", Encircle, 3;

    Diratkgnd => "DIRATKGND", Arrow, 2;
    Diratkspt => "DIRATKSPT", Arrow, 2;
    Diratkfnt => "DIRATKFNT", Arrow, 2;
    Diratkair => "DIRATKAIR", Arrow, 2;
    Folsp => "FOLSP", Arrow, 2;
    Oneway => "ONEWAY", Arrow, 2;
    Alt => "ALT", Arrow, 2;
    Twoway => "TWOWAY", Arrow, 2;

    Lintgt => "LINTGT", Linear, 2;
    Lintgts => "LINTGTS", Linear, 2;
    Fpf => "FPF", Linear, 2;
    Abatis => "ABATIS", Linear, 2;
    OverheadWire => "OVERHEAD_WIRE", Linear, 2;

    Axad => "AXAD", Axis, 2;
    Catk => "CATK", Axis, 2;
    Main => "MAIN", Axis, 2;
    Spt => "SPT", Axis, 2;
    Airaoa => "AIRAOA", Axis, 2;
    Catkbyfire => "CATKBYFIRE", Axis, 2;
    Aaaaa => "AAAAA", Axis, 2;

    Doublea => "DOUBLEA", Fence, 2;
    Lwfence => "LWFENCE", Fence, 2;
    Hwfence => "HWFENCE", Fence, 2;
    Unsp => "UNSP", Fence, 2;
    Sfence => "SFENCE", Fence, 2;
    Dfence => "DFENCE", Fence, 2;
    Singlec => "SINGLEC", Fence, 2;
    Doublec => "DOUBLEC", Fence, 2;
    Triple => "TRIPLE", Fence, 2;
    Atwall => "ATWALL", Fence, 2;
    Lc => "LC", Fence, 2;

    Reef => "REEF", Density, 2;
    Pipe => "PIPE", Density, 2;
    Fortl => "FORTL", Density, 2;
    Squall => "SQUALL", Density, 2;
    Atditch => "ATDITCH", Density, 2;
    Atditchc => "ATDITCHC", Density, 2;
    Atditchm => "ATDITCHM", Density, 2;

    Flot => "FLOT", Wavy, 2;
    Wf => "WF", Wavy, 2;
    Uwf => "UWF", Wavy, 2;
    Cf => "CF", Wavy, 2;
    Ucf => "UCF", Wavy, 2;
    Occluded => "OCCLUDED", Wavy, 2;
    Sf => "SF", Wavy, 2;
    Wfg => "WFG", Wavy, 2;
    Cfg => "CFG", Wavy, 2;
    Wfy => "WFY", Wavy, 2;
    Cfy => "CFY", Wavy, 2;
    Sfg => "SFG", Wavy, 2;
    Sfy => "SFY", Wavy, 2;
    Ofy => "OFY", Wavy, 2;
    Instability => "INSTABILITY", Wavy, 2;

    Fix => "FIX", ClipDependent, 2;
    Bydif => "BYDIF", ClipDependent, 3;
    Fordif => "FORDIF", ClipDependent, 3;

    Roadblk => "ROADBLK", FixedGlyph, 2;
    Ferry => "FERRY", FixedGlyph, 2;
    Raft => "RAFT", FixedGlyph, 2;
    Convoy => "CONVOY", FixedGlyph, 2;
    Hconvoy => "HCONVOY", FixedGlyph, 2;
    Cluster => "CLUSTER", FixedGlyph, 2;
    BsEllipse => "BS_ELLIPSE", FixedGlyph, 3;
    Block => "BLOCK", FixedGlyph, 3;
    Breach => "BREACH", FixedGlyph, 3;
    Canalize => "CANALIZE", FixedGlyph, 3;
    Bypass => "BYPASS", FixedGlyph, 3;
    Clear => "CLEAR", FixedGlyph, 3;
    Disrupt => "DISRUPT", FixedGlyph, 3;
    Penetrate => "PENETRATE", FixedGlyph, 3;

    Seize => "SEIZE", ArcTask, 3;
    Occupy => "OCCUPY", ArcTask, 3;
    Retain => "RETAIN", ArcTask, 2;
    Secure => "SECURE", ArcTask, 2;
    Isolate => "ISOLATE", ArcTask, 2;
    Delay => "DELAY", ArcTask, 3;
    Contain => "CONTAIN", ArcTask, 2;
}

impl SymbolFamily {
    /// Case-insensitive lookup by display name. `-` is accepted for `_`.
    pub fn from_name(name: &str) -> Option<SymbolFamily> {
        let wanted = name.trim().replace('-', "_");
        SymbolFamily::all()
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(&wanted))
    }

    /// Channel families get channel-specific pre/post-processing downstream.
    pub fn is_channel(&self) -> bool {
        matches!(self.class(), FamilyClass::Axis | FamilyClass::Fence)
    }
}

impl fmt::Display for SymbolFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolFamily::from_name(s).ok_or_else(|| format!("unknown symbol family '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_one_hundred_unique_families() {
        let all = SymbolFamily::all();
        assert_eq!(all.len(), 100);
        let names: HashSet<_> = all.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), 100);
    }

    #[test]
    fn names_round_trip() {
        for &family in SymbolFamily::all() {
            assert_eq!(SymbolFamily::from_name(family.name()), Some(family));
        }
        assert_eq!(SymbolFamily::from_name("bs-ellipse"), Some(SymbolFamily::BsEllipse));
        assert_eq!("flot".parse::<SymbolFamily>(), Ok(SymbolFamily::Flot));
        assert!("NOPE".parse::<SymbolFamily>().is_err());
    }

    #[test]
    fn channel_classification() {
        assert!(SymbolFamily::Axad.is_channel());
        assert!(SymbolFamily::Doublea.is_channel());
        assert!(SymbolFamily::Lc.is_channel());
        assert!(!SymbolFamily::Flot.is_channel());
        assert!(!SymbolFamily::Roadblk.is_channel());
    }

    #[test]
    fn minimum_anchor_counts() {
        assert_eq!(SymbolFamily::Genarea.min_points(), 3);
        assert_eq!(SymbolFamily::Bydif.min_points(), 3);
        assert_eq!(SymbolFamily::Retain.min_points(), 2);
        assert!(SymbolFamily::all().iter().all(|f| f.min_points() >= 2));
    }
}
