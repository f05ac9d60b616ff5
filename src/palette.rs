//! Score-to-color brackets for the two palettes.
//!
//! Each bracket has an inclusive upper bound. Brackets are checked in
//! ascending order and the first match wins; anything above the last bound
//! gets the palette's top color.

use crate::types::{ColorToken, Palette};

pub const LIGHT_GREEN: ColorToken = ColorToken::new("#aaffaa", (0xaa, 0xff, 0xaa));
pub const GOLDENROD: ColorToken = ColorToken::new("goldenrod", (0xda, 0xa5, 0x20));
pub const LIGHT_RED: ColorToken = ColorToken::new("#ffaaaa", (0xff, 0xaa, 0xaa));

pub const META_GREEN: ColorToken = ColorToken::new("#32b08c", (0x32, 0xb0, 0x8c));
pub const META_AMBER: ColorToken = ColorToken::new("#ffb94a", (0xff, 0xb9, 0x4a));
pub const META_CORAL: ColorToken = ColorToken::new("#f95f53", (0xf9, 0x5f, 0x53));
pub const META_ROSE: ColorToken = ColorToken::new("#bf3d5e", (0xbf, 0x3d, 0x5e));
pub const META_RED: ColorToken = ColorToken::new("#dc4e58", (0xdc, 0x4e, 0x58));

const REGULAR_BRACKETS: &[(f64, ColorToken)] = &[(100.0, LIGHT_GREEN), (150.0, GOLDENROD)];
const REGULAR_TOP: ColorToken = LIGHT_RED;

const METAVERSE_BRACKETS: &[(f64, ColorToken)] = &[
    (9.0, META_GREEN),
    (20.0, META_AMBER),
    (50.0, META_CORAL),
    (70.0, META_ROSE),
];
const METAVERSE_TOP: ColorToken = META_RED;

/// Pick the color for `score` under `palette`. Total over all `f64`; NaN
/// fails every comparison and lands in the top bracket.
pub fn select_color(score: f64, palette: Palette) -> ColorToken {
    let (brackets, top) = match palette {
        Palette::Regular => (REGULAR_BRACKETS, REGULAR_TOP),
        Palette::Metaverse => (METAVERSE_BRACKETS, METAVERSE_TOP),
    };
    brackets
        .iter()
        .find(|(upper, _)| score <= *upper)
        .map(|(_, color)| *color)
        .unwrap_or(top)
}

/// Flip the palette. Returns the new palette together with the label the
/// toggle control should now show, which names the palette the next toggle
/// would switch to.
pub fn toggle_preference(current: Palette) -> (Palette, &'static str) {
    let next = current.other();
    (next, next.other().label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_brackets() {
        for score in [-5.0, 0.0, 42.0, 100.0] {
            assert_eq!(select_color(score, Palette::Regular), LIGHT_GREEN, "score {score}");
        }
        for score in [100.5, 120.0, 150.0] {
            assert_eq!(select_color(score, Palette::Regular), GOLDENROD, "score {score}");
        }
        for score in [150.01, 151.0, 10_000.0] {
            assert_eq!(select_color(score, Palette::Regular), LIGHT_RED, "score {score}");
        }
    }

    #[test]
    fn metaverse_bounds_are_inclusive() {
        assert_eq!(select_color(0.0, Palette::Metaverse), META_GREEN);
        assert_eq!(select_color(9.0, Palette::Metaverse), META_GREEN);
        assert_eq!(select_color(9.5, Palette::Metaverse), META_AMBER);
        assert_eq!(select_color(20.0, Palette::Metaverse), META_AMBER);
        assert_eq!(select_color(21.0, Palette::Metaverse), META_CORAL);
        assert_eq!(select_color(50.0, Palette::Metaverse), META_CORAL);
        assert_eq!(select_color(70.0, Palette::Metaverse), META_ROSE);
        assert_eq!(select_color(70.1, Palette::Metaverse), META_RED);
        assert_eq!(select_color(100.0, Palette::Metaverse), META_RED);
    }

    #[test]
    fn literal_identifiers_are_preserved() {
        assert_eq!(select_color(1.0, Palette::Regular).as_str(), "#aaffaa");
        assert_eq!(select_color(101.0, Palette::Regular).to_string(), "goldenrod");
        assert_eq!(select_color(71.0, Palette::Metaverse).as_str(), "#dc4e58");
    }

    #[test]
    fn nan_lands_in_top_bracket() {
        assert_eq!(select_color(f64::NAN, Palette::Regular), LIGHT_RED);
        assert_eq!(select_color(f64::NAN, Palette::Metaverse), META_RED);
    }

    #[test]
    fn toggle_flips_and_labels_the_other_palette() {
        let (next, label) = toggle_preference(Palette::Regular);
        assert_eq!(next, Palette::Metaverse);
        assert_eq!(label, "(regular colors)");

        let (back, label) = toggle_preference(next);
        assert_eq!(back, Palette::Regular);
        assert_eq!(label, "(metaverse colors)");
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        for start in [Palette::Regular, Palette::Metaverse] {
            let (once, _) = toggle_preference(start);
            let (twice, _) = toggle_preference(once);
            assert_eq!(twice, start);
        }
    }
}
