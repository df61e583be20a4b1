use eframe::egui::Pos2;

use crate::i18n;
use crate::stats::TitleStats;
use crate::ui::CANVAS_SCALE;

/// Font size of the label, in full-resolution canvas pixels
pub const PLAYER_COUNT_FONT_PX: f32 = 60.0;

/// "N Players Online" label in the bottom right corner.
///
/// `x` is in logical units, `width` in full-resolution canvas pixels. When the
/// text changes, the label is shifted left by the width growth scaled down
/// to logical units, which keeps its right edge roughly in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCountLabel {
    pub text: String,
    pub pos: Pos2,
    pub width: f32,
}

impl PlayerCountLabel {
    pub fn new(lang: &str, pos: Pos2, measure: impl Fn(&str) -> f32) -> Self {
        let text = i18n::players_online(lang, 0);
        let width = measure(&text);
        Self { text, pos, width }
    }

    pub fn apply(&mut self, stats: &TitleStats, lang: &str, measure: impl Fn(&str) -> f32) {
        self.text = i18n::players_online(lang, stats.player_count);
        let new_width = measure(&self.text);
        self.pos.x -= (new_width - self.width) / CANVAS_SCALE;
        self.width = new_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-pitch stand-in for text layout: 30 canvas pixels per char
    fn monospace(text: &str) -> f32 {
        text.chars().count() as f32 * 30.0
    }

    #[test]
    fn test_initial_label() {
        let label = PlayerCountLabel::new("en", Pos2::new(260.0, 160.0), monospace);
        assert_eq!(label.text, "0 Players Online");
        assert_eq!(label.width, 16.0 * 30.0);
    }

    #[test]
    fn test_apply_shifts_by_width_delta() {
        let mut label = PlayerCountLabel::new("en", Pos2::new(260.0, 160.0), monospace);
        let old_width = label.width;

        let stats = TitleStats {
            player_count: 42,
            battle_count: 7,
        };
        label.apply(&stats, "en", monospace);

        assert!(label.text.contains("42"));
        let new_width = monospace(&label.text);
        assert_eq!(label.width, new_width);
        assert!((label.pos.x - (260.0 - (new_width - old_width) / 6.0)).abs() < 1e-4);
        assert_eq!(label.pos.x, 255.0);
        assert_eq!(label.pos.y, 160.0);
    }

    #[test]
    fn test_shrinking_text_moves_right() {
        let mut label = PlayerCountLabel::new("en", Pos2::new(260.0, 160.0), monospace);
        label.apply(
            &TitleStats {
                player_count: 12345,
                battle_count: 0,
            },
            "en",
            monospace,
        );
        let x_wide = label.pos.x;

        label.apply(
            &TitleStats {
                player_count: 3,
                battle_count: 0,
            },
            "en",
            monospace,
        );
        assert!(label.pos.x > x_wide);
        assert_eq!(label.pos.x, 260.0);
    }

    #[test]
    fn test_same_width_does_not_move() {
        let mut label = PlayerCountLabel::new("en", Pos2::new(260.0, 160.0), monospace);
        label.apply(
            &TitleStats {
                player_count: 7,
                battle_count: 0,
            },
            "en",
            monospace,
        );
        assert_eq!(label.pos.x, 260.0);
    }
}
