//! Title screen: logo, splash caption, title options, social links, the
//! rival vignette and the live player count.

mod icons;
mod player_count;
mod rival;
mod stats_poller;

pub use icons::{SocialIconRow, title_links};
pub use player_count::{PLAYER_COUNT_FONT_PX, PlayerCountLabel};
pub use rival::RivalVignette;
pub use stats_poller::{StatsEvent, StatsPoller};

use chrono::{DateTime, Utc};
use eframe::egui::{self, Align2, Color32, Pos2, Rect, Sense, Shape, Vec2};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use super::theme::TextStyle;
use super::tween::{Ease, Fader, Pulse};
use super::{CanvasTransform, SCALED_CANVAS, UiHandler, UiMode, UiRoot};
use crate::assets::Assets;
use crate::config::TitleConfig;
use crate::events::EventManager;
use crate::save::PlayerGender;
use crate::splash;
use crate::stats::StatsSource;

/// Width of a string in full-resolution canvas pixels at the player count font
pub type MeasureText = Box<dyn Fn(&str) -> f32>;

const LOGO_FALLBACK_SIZE: Vec2 = Vec2::new(150.0, 56.0);
const OVERLAY_RECT: Rect = Rect::from_min_max(Pos2::new(8.0, 59.0), Pos2::new(100.0, 130.0));
const OVERLAY_ALPHA: f32 = 0.5;
const SPLASH_FONT_PX: f32 = 54.0;
const SPLASH_ANGLE_DEG: f32 = -20.0;
const SPLASH_PULSE_FACTOR: f32 = 1.25;
const OPTION_FONT_PX: f32 = 66.0;

/// Durations that drive the title screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleTiming {
    pub stats_interval: Duration,
    pub fade: Duration,
    pub splash_pulse: Duration,
}

impl Default for TitleTiming {
    fn default() -> Self {
        Self::from(&TitleConfig::default())
    }
}

impl From<&TitleConfig> for TitleTiming {
    fn from(config: &TitleConfig) -> Self {
        Self {
            stats_interval: Duration::from_secs(config.stats_interval_secs.max(1)),
            fade: Duration::from_millis(config.fade_ms),
            splash_pulse: Duration::from_millis(config.splash_pulse_ms),
        }
    }
}

/// Everything the title screen reads from outside
pub struct TitleContext {
    /// Resolved UI language
    pub lang: String,
    pub stats: Arc<dyn StatsSource>,
    pub events: EventManager,
    pub gender: watch::Receiver<PlayerGender>,
    pub assets: Assets,
    pub measure: MeasureText,
    pub timing: TitleTiming,
}

/// Entries of the title option menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleOption {
    NewGame,
    Settings,
    Exit,
}

impl TitleOption {
    pub fn all() -> &'static [TitleOption] {
        &[TitleOption::NewGame, TitleOption::Settings, TitleOption::Exit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TitleOption::NewGame => "New Game",
            TitleOption::Settings => "Settings",
            TitleOption::Exit => "Exit",
        }
    }
}

/// Retained scene built by `setup`
struct TitleScene {
    container: Fader,
    logo_pos: Pos2,
    logo_size: Vec2,
    icons: SocialIconRow,
    rival: RivalVignette,
    player_count: PlayerCountLabel,
    splash_pos: Pos2,
    splash_pulse: Pulse,
}

pub struct TitleScreen {
    ctx: TitleContext,
    scene: Option<TitleScene>,
    poller: StatsPoller,
    visible: bool,
    splash_message: String,
}

impl TitleScreen {
    pub fn new(ctx: TitleContext) -> Self {
        let poller = StatsPoller::new(ctx.stats.clone(), ctx.timing.stats_interval);
        Self {
            ctx,
            scene: None,
            poller,
            visible: false,
            splash_message: String::new(),
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn splash_message(&self) -> &str {
        &self.splash_message
    }

    /// Whether the stats refresh timer is running
    #[cfg(test)]
    pub fn stats_timer_active(&self) -> bool {
        self.poller.is_running()
    }

    #[cfg(test)]
    pub fn player_count(&self) -> Option<&PlayerCountLabel> {
        self.scene.as_ref().map(|s| &s.player_count)
    }

    #[cfg(test)]
    pub fn rival(&self) -> Option<&RivalVignette> {
        self.scene.as_ref().map(|s| &s.rival)
    }

    #[cfg(test)]
    pub fn icons(&self) -> Option<&SocialIconRow> {
        self.scene.as_ref().map(|s| &s.icons)
    }

    /// Current container alpha
    #[cfg(test)]
    pub fn alpha(&self) -> f32 {
        self.scene.as_ref().map(|s| s.container.value()).unwrap_or(0.0)
    }

    /// Target alpha of the running container fade
    #[cfg(test)]
    pub fn alpha_target(&self) -> f32 {
        self.scene.as_ref().map(|s| s.container.target()).unwrap_or(0.0)
    }

    /// Apply finished stats fetches. Failures are logged and leave the label as is.
    pub fn poll_stats(&mut self) {
        let events = self.poller.poll();
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        for event in events {
            match event {
                StatsEvent::Updated(stats) => {
                    scene.player_count.apply(&stats, &self.ctx.lang, &self.ctx.measure);
                }
                StatsEvent::Failed(e) => {
                    tracing::error!("Failed to fetch title stats: {}", e);
                }
            }
        }
    }

    /// Advance animations by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        if let Some(scene) = self.scene.as_mut() {
            scene.container.advance(dt);
            scene.splash_pulse.advance(dt);
        }
    }

    /// Per-frame work: animations, stats, drawing. Returns a picked option.
    pub fn frame(
        &mut self,
        ui: &mut egui::Ui,
        root: &mut UiRoot,
        dt: f32,
        now: DateTime<Utc>,
    ) -> Option<TitleOption> {
        self.advance(dt);
        self.poll_stats();

        let scene = self.scene.as_mut()?;
        let alpha = scene.container.value();
        if alpha > 0.0 && (scene.container.is_animating() || self.visible) {
            ui.ctx().request_repaint();
        }
        if alpha <= 0.0 {
            return None;
        }

        let canvas = CanvasTransform::fit(ui.max_rect());
        if !canvas.has_area() {
            return None;
        }
        let theme = root.theme.clone();
        let painter = ui.painter().clone();

        // Logo
        let logo_rect = canvas.anchored(scene.logo_pos, scene.logo_size, Align2::CENTER_TOP);
        match self.ctx.assets.texture(ui.ctx(), "logo") {
            Some(texture) => {
                let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                painter.image(texture, logo_rect, uv, Color32::WHITE.gamma_multiply(alpha));
            }
            None => {
                painter.text(
                    logo_rect.center(),
                    Align2::CENTER_CENTER,
                    "PokéRogue",
                    canvas.font(180.0),
                    theme.accent.gamma_multiply(alpha),
                );
            }
        }

        // Option menu on its overlay
        let overlay = canvas.rect(OVERLAY_RECT.min, OVERLAY_RECT.size());
        painter.rect_filled(overlay, 0.0, theme.menu_overlay.gamma_multiply(OVERLAY_ALPHA * alpha));
        let picked = render_options(ui, &canvas, overlay, &theme, alpha);

        scene.icons.render(ui, &canvas, &mut self.ctx.assets, root, alpha);
        scene.rival.render(ui, &canvas, &mut self.ctx.assets, &theme, alpha, now);

        // Player count
        let (fg, shadow) = theme.text_colors(TextStyle::Message);
        let label_pos = canvas.pos(scene.player_count.pos);
        let font = canvas.font(player_count::PLAYER_COUNT_FONT_PX);
        painter.text(
            label_pos + Vec2::splat(canvas.zoom() / 3.0),
            Align2::LEFT_TOP,
            &scene.player_count.text,
            font.clone(),
            shadow.gamma_multiply(alpha),
        );
        painter.text(label_pos, Align2::LEFT_TOP, &scene.player_count.text, font, fg.gamma_multiply(alpha));

        // Splash caption, rotated about its center and pulsing
        let (fg, _) = theme.text_colors(TextStyle::Money);
        let font = canvas.font(SPLASH_FONT_PX * scene.splash_pulse.value());
        let galley = painter.layout_no_wrap(self.splash_message.clone(), font, fg.gamma_multiply(alpha));
        let angle = SPLASH_ANGLE_DEG.to_radians();
        let half = galley.size() / 2.0;
        let rotated_half = egui::emath::Rot2::from_angle(angle) * half;
        let pos = canvas.pos(scene.splash_pos) - rotated_half;
        painter.add(Shape::Text(
            egui::epaint::TextShape::new(pos, galley, fg).with_angle(angle),
        ));

        if picked.is_some() {
            root.hide_tooltip();
        }
        picked
    }
}

/// Draw the option list inside the overlay; returns the clicked entry
fn render_options(
    ui: &egui::Ui,
    canvas: &CanvasTransform,
    overlay: Rect,
    theme: &super::theme::Theme,
    alpha: f32,
) -> Option<TitleOption> {
    let mut picked = None;
    let row_height = overlay.height() / TitleOption::all().len() as f32;
    let (fg, _) = theme.text_colors(TextStyle::Message);

    for (i, option) in TitleOption::all().iter().enumerate() {
        let row = Rect::from_min_size(
            overlay.min + Vec2::new(0.0, row_height * i as f32),
            Vec2::new(overlay.width(), row_height),
        );
        let response = ui.interact(row, ui.id().with(("title-option", i)), Sense::click());
        let color = if response.hovered() { theme.accent } else { fg };
        ui.painter().text(
            row.left_center() + Vec2::new(4.0 * canvas.zoom(), 0.0),
            Align2::LEFT_CENTER,
            option.label(),
            canvas.font(OPTION_FONT_PX),
            color.gamma_multiply(alpha),
        );
        if response.clicked() {
            picked = Some(*option);
        }
    }

    picked
}

impl UiHandler for TitleScreen {
    fn mode(&self) -> UiMode {
        UiMode::Title
    }

    fn setup(&mut self, _root: &mut UiRoot) {
        if self.scene.is_some() {
            return;
        }

        let lang = self.ctx.lang.clone();
        let gender = *self.ctx.gender.borrow();
        let active_event = self.ctx.events.active_event(Utc::now());

        let logo_pos = Pos2::new(SCALED_CANVAS.x / 4.0 + 3.0, 8.0);
        let logo_size = self.ctx.assets.size("logo").unwrap_or(LOGO_FALLBACK_SIZE);

        let scene = TitleScene {
            container: Fader::new(0.0),
            logo_pos,
            logo_size,
            icons: SocialIconRow::new(Pos2::new(15.0, SCALED_CANVAS.y - 15.0), &lang),
            rival: RivalVignette::new(gender, active_event, &lang, &self.ctx.assets),
            player_count: PlayerCountLabel::new(
                &lang,
                Pos2::new(SCALED_CANVAS.x - 60.0, SCALED_CANVAS.y - 20.0),
                &self.ctx.measure,
            ),
            splash_pos: Pos2::new(logo_pos.x + 64.0, logo_pos.y + logo_size.y - 8.0),
            splash_pulse: Pulse::new(1.0, SPLASH_PULSE_FACTOR, self.ctx.timing.splash_pulse),
        };
        self.scene = Some(scene);
        tracing::debug!("Title screen set up (language {})", lang);
    }

    fn show(&mut self, root: &mut UiRoot) -> bool {
        if root.mode != self.mode() {
            return false;
        }
        let Some(scene) = self.scene.as_mut() else {
            tracing::warn!("Title screen shown before setup");
            return false;
        };

        self.splash_message = splash::random_splash(&mut rand::rng()).to_string();

        scene.rival.show();
        scene.icons.set_visible(true);
        scene.container.fade_to(1.0, self.ctx.timing.fade, Ease::SineInOut);
        root.fade_message_bg(0.0, self.ctx.timing.fade);

        self.update();
        self.poller.start();
        self.visible = true;
        true
    }

    fn clear(&mut self, root: &mut UiRoot) {
        if let Some(scene) = self.scene.as_mut() {
            scene.rival.hide();
            scene.icons.set_visible(false);
            scene.container.fade_to(0.0, self.ctx.timing.fade, Ease::SineInOut);
        }
        root.hide_tooltip();
        self.poller.stop();
        root.fade_message_bg(1.0, self.ctx.timing.fade);
        self.visible = false;
    }

    fn update(&mut self) {
        let gender = *self.ctx.gender.borrow();
        if let Some(scene) = self.scene.as_mut() {
            scene.rival.update(gender, &self.ctx.assets);
        }
    }
}
