//! UI handlers and the shared state they plug into.
//!
//! Every screen implements [`UiHandler`]. The [`UiRoot`] holds what screens
//! share: the active mode, the message box background and the tooltip.

pub mod message;
pub mod theme;
pub mod title;
pub mod tween;

pub use message::MessageScreen;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Vec2};
use std::time::Duration;

use self::theme::Theme;
use self::tween::{Ease, Fader};

/// Logical canvas the title scene is laid out on
pub const SCALED_CANVAS: Vec2 = Vec2::new(320.0, 180.0);

/// Ratio between full-resolution canvas pixels and logical units
pub const CANVAS_SCALE: f32 = 6.0;

/// Which screen currently owns the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Title,
    Message,
}

/// Lifecycle shared by every screen
pub trait UiHandler {
    /// Mode this handler serves
    fn mode(&self) -> UiMode;

    /// Build retained state. Runs once before the first `show`.
    fn setup(&mut self, root: &mut UiRoot);

    /// Make the screen active. Returns false when it could not be shown.
    fn show(&mut self, root: &mut UiRoot) -> bool;

    /// Leave the screen
    fn clear(&mut self, root: &mut UiRoot);

    /// Re-read external state that affects the screen
    fn update(&mut self);
}

/// Tooltip content requested by a hovered widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub title: String,
    pub content: String,
}

/// State shared between handlers
pub struct UiRoot {
    pub mode: UiMode,
    pub theme: Theme,
    /// Alpha of the message box background behind every screen
    pub message_bg: Fader,
    pub tooltip: Option<Tooltip>,
}

impl UiRoot {
    pub fn new(theme: Theme) -> Self {
        Self {
            mode: UiMode::Title,
            theme,
            message_bg: Fader::new(1.0),
            tooltip: None,
        }
    }

    pub fn show_tooltip(&mut self, title: &str, content: &str) {
        self.tooltip = Some(Tooltip {
            title: title.to_string(),
            content: content.to_string(),
        });
    }

    pub fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    pub fn fade_message_bg(&mut self, to: f32, duration: Duration) {
        self.message_bg.fade_to(to, duration, Ease::SineInOut);
    }

    pub fn advance(&mut self, dt: f32) {
        self.message_bg.advance(dt);
    }

    /// Paint the message box background strip along the bottom of the canvas
    pub fn paint_message_bg(&self, painter: &egui::Painter, canvas: &CanvasTransform) {
        let alpha = self.message_bg.value();
        if alpha <= 0.0 || !canvas.has_area() {
            return;
        }
        let rect = canvas.rect(Pos2::new(0.0, SCALED_CANVAS.y - 48.0), Vec2::new(SCALED_CANVAS.x, 48.0));
        painter.rect_filled(rect, 0.0, self.theme.message_bg.gamma_multiply(alpha));
    }

    /// Paint the tooltip next to the pointer
    pub fn paint_tooltip(&self, painter: &egui::Painter, pointer: Option<Pos2>) {
        let (Some(tooltip), Some(pointer)) = (&self.tooltip, pointer) else {
            return;
        };
        let text = if tooltip.title.is_empty() {
            tooltip.content.clone()
        } else {
            format!("{}\n{}", tooltip.title, tooltip.content)
        };
        let galley = painter.layout_no_wrap(text, FontId::proportional(14.0), self.theme.message_text);
        let pos = pointer + Vec2::new(12.0, -galley.size().y - 8.0);
        let frame = Rect::from_min_size(pos, galley.size()).expand(4.0);
        painter.rect_filled(frame, 3.0, self.theme.message_bg);
        painter.galley(pos, galley, Color32::WHITE);
    }
}

/// Maps logical canvas coordinates onto the screen rect
#[derive(Debug, Clone, Copy)]
pub struct CanvasTransform {
    origin: Pos2,
    /// Screen points per logical unit
    zoom: f32,
}

impl CanvasTransform {
    /// Fit the logical canvas inside `available`, letterboxed and centered
    pub fn fit(available: Rect) -> Self {
        let zoom = (available.width() / SCALED_CANVAS.x).min(available.height() / SCALED_CANVAS.y);
        let size = SCALED_CANVAS * zoom;
        let origin = available.center() - size / 2.0;
        Self { origin, zoom }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pos(&self, logical: Pos2) -> Pos2 {
        self.origin + logical.to_vec2() * self.zoom
    }

    pub fn rect(&self, min: Pos2, size: Vec2) -> Rect {
        Rect::from_min_size(self.pos(min), size * self.zoom)
    }

    /// False when the available rect collapsed, e.g. on a minimized window.
    /// Nothing sized by the canvas can be laid out then.
    pub fn has_area(&self) -> bool {
        self.zoom > 0.0
    }

    /// Screen rect of a box anchored at `logical` with a normalized origin
    pub fn anchored(&self, logical: Pos2, size: Vec2, anchor: Align2) -> Rect {
        anchor.anchor_size(self.pos(logical), size * self.zoom)
    }

    /// Font size in points for a size given in full-resolution canvas pixels
    pub fn font(&self, canvas_px: f32) -> FontId {
        FontId::proportional(canvas_px / CANVAS_SCALE * self.zoom)
    }
}

/// Run one egui pass over a `size` window without a backend, drawing
/// through `draw` inside a frameless central panel
#[cfg(test)]
pub(crate) fn run_headless(
    ctx: &egui::Context,
    size: Vec2,
    events: Vec<egui::Event>,
    mut draw: impl FnMut(&mut egui::Ui),
) -> egui::FullOutput {
    let input = egui::RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, size)),
        events,
        ..Default::default()
    };
    ctx.run(input, |ctx| {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| draw(ui));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_fit_letterboxes() {
        let available = Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 1000.0));
        let canvas = CanvasTransform::fit(available);
        assert_eq!(canvas.zoom(), 4.0);
        let bounds = canvas.rect(Pos2::ZERO, SCALED_CANVAS);
        assert_eq!(bounds.width(), 1280.0);
        assert_eq!(bounds.height(), 720.0);
        assert_eq!(bounds.min.y, 140.0);
    }

    #[test]
    fn test_collapsed_canvas_has_no_area() {
        let canvas = CanvasTransform::fit(Rect::from_min_size(Pos2::ZERO, Vec2::ZERO));
        assert!(!canvas.has_area());
        assert!(CanvasTransform::fit(Rect::from_min_size(Pos2::ZERO, Vec2::new(640.0, 360.0))).has_area());
    }

    #[test]
    fn test_tooltip_show_hide() {
        let mut root = UiRoot::new(Theme::dark());
        root.show_tooltip("", "discord");
        assert_eq!(root.tooltip.as_ref().unwrap().content, "discord");
        root.hide_tooltip();
        assert!(root.tooltip.is_none());
    }

    #[test]
    fn test_message_bg_fades() {
        let mut root = UiRoot::new(Theme::dark());
        assert_eq!(root.message_bg.value(), 1.0);
        root.fade_message_bg(0.0, Duration::from_millis(100));
        root.advance(0.2);
        assert_eq!(root.message_bg.value(), 0.0);
    }
}
