//! The rival standing next to the title menu, with a speech bubble that
//! either points at the Discord or counts down the running event.

use chrono::{DateTime, Utc};
use eframe::egui::{self, Align2, Color32, Pos2, Shape, Stroke, Vec2};

use crate::assets::Assets;
use crate::events::{self, TimedEvent};
use crate::i18n;
use crate::save::PlayerGender;
use crate::ui::theme::{Theme, TextStyle, palette};
use crate::ui::CanvasTransform;

/// Where the rival stands, in logical units (sprite center)
pub const RIVAL_POS: Pos2 = Pos2::new(176.0, 127.0);
/// Used when the sprite texture could not be loaded
pub const FALLBACK_SPRITE_SIZE: Vec2 = Vec2::new(48.0, 64.0);

const EVENT_DISPLAY_POS: Pos2 = Pos2::new(189.0, 49.0);
const CHANGELOG_POS: Pos2 = Pos2::new(190.0, 98.0);
const BUBBLE_POS: Pos2 = Pos2::new(244.0, 102.0);

/// Font sizes in full-resolution canvas pixels
const CHANGELOG_FONT_PX: f32 = 49.0;
const EVENT_FONT_PX: f32 = 45.0;

/// Texture key of the rival shown to a player of the given gender
pub fn rival_texture(gender: PlayerGender) -> &'static str {
    match gender {
        PlayerGender::Male => "ivy-sprite",
        PlayerGender::Female => "finn-sprite",
    }
}

/// Static text used when no event is running
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogText {
    pub text: String,
    pub pos: Pos2,
}

/// Countdown widget for the active event
#[derive(Debug, Clone, PartialEq)]
pub struct EventDisplay {
    pub event: TimedEvent,
    pub pos: Pos2,
    pub visible: bool,
    lang: String,
}

impl EventDisplay {
    pub fn new(event: TimedEvent, lang: &str) -> Self {
        Self {
            event,
            pos: EVENT_DISPLAY_POS,
            visible: false,
            lang: lang.to_string(),
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Banner texture key and its size, when the event has banner art loaded
    pub fn banner_image<'a>(&'a self, assets: &Assets) -> Option<(&'a str, Vec2)> {
        let key = self.event.banner_key.as_deref()?;
        Some((key, assets.size(key)?))
    }

    /// The countdown line the speech bubble is anchored to
    pub fn timer_text(&self, now: DateTime<Utc>) -> String {
        format!(
            "{} {}",
            i18n::event_ends_in(&self.lang),
            events::format_countdown(self.event.remaining(now))
        )
    }
}

/// What the speech bubble talks about; decided once when the rival is built
#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    Event(EventDisplay),
    Changelog(ChangelogText),
}

impl Banner {
    /// Text element the speech bubble wraps, and where it sits
    pub fn anchor_text(&self, now: DateTime<Utc>) -> (String, Pos2) {
        match self {
            Banner::Event(display) => (display.timer_text(now), display.pos + Vec2::new(0.0, 53.0)),
            Banner::Changelog(changelog) => (changelog.text.clone(), changelog.pos),
        }
    }

    pub fn is_event(&self) -> bool {
        matches!(self, Banner::Event(_))
    }
}

/// Rival sprite plus its drop shadow
#[derive(Debug, Clone, PartialEq)]
pub struct RivalSprite {
    pub texture_key: &'static str,
    pub pos: Pos2,
    pub size: Vec2,
}

/// Flat ellipse under the rival's feet
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteShadow {
    pub center: Pos2,
    pub radii: Vec2,
}

pub struct RivalVignette {
    sprite: RivalSprite,
    shadow: SpriteShadow,
    banner: Banner,
    bubble_visible: bool,
}

impl RivalVignette {
    /// Build the vignette, choosing event countdown or changelog text for good
    pub fn new(
        gender: PlayerGender,
        active_event: Option<&TimedEvent>,
        lang: &str,
        assets: &Assets,
    ) -> Self {
        let texture_key = rival_texture(gender);
        let size = assets.size(texture_key).unwrap_or(FALLBACK_SPRITE_SIZE);
        let sprite = RivalSprite {
            texture_key,
            pos: RIVAL_POS,
            size,
        };
        let shadow = SpriteShadow {
            center: Pos2::new(sprite.pos.x, sprite.pos.y + sprite.size.y / 2.0 - 1.0),
            radii: Vec2::new(sprite.size.x / 4.0, sprite.size.y / 20.0),
        };

        let banner = match active_event {
            Some(event) => {
                tracing::info!("Event '{}' is running, showing countdown", event.name);
                Banner::Event(EventDisplay::new(event.clone(), lang))
            }
            None => Banner::Changelog(ChangelogText {
                text: i18n::changelog_hint(lang).to_string(),
                pos: CHANGELOG_POS,
            }),
        };

        Self {
            sprite,
            shadow,
            banner,
            bubble_visible: false,
        }
    }

    #[cfg(test)]
    pub fn sprite(&self) -> &RivalSprite {
        &self.sprite
    }

    #[cfg(test)]
    pub fn shadow(&self) -> &SpriteShadow {
        &self.shadow
    }

    #[cfg(test)]
    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    #[cfg(test)]
    pub fn bubble_visible(&self) -> bool {
        self.bubble_visible
    }

    /// Reveal the bubble and, if there is one, the event display
    pub fn show(&mut self) {
        if let Banner::Event(display) = &mut self.banner {
            display.show();
        }
        self.bubble_visible = true;
    }

    pub fn hide(&mut self) {
        if let Banner::Event(display) = &mut self.banner {
            display.hide();
        }
        self.bubble_visible = false;
    }

    /// Swap the rival for the given player gender and re-seat its shadow
    pub fn update(&mut self, gender: PlayerGender, assets: &Assets) {
        self.sprite.texture_key = rival_texture(gender);
        self.sprite.size = assets
            .size(self.sprite.texture_key)
            .unwrap_or(FALLBACK_SPRITE_SIZE);
        let lift = match gender {
            PlayerGender::Male => 2.0,
            PlayerGender::Female => 3.0,
        };
        self.shadow.center.y = self.sprite.pos.y + self.sprite.size.y / 2.0 - lift;
    }

    pub fn render(
        &self,
        ui: &egui::Ui,
        canvas: &CanvasTransform,
        assets: &mut Assets,
        theme: &Theme,
        alpha: f32,
        now: DateTime<Utc>,
    ) {
        let painter = ui.painter();

        // Sprite
        let rect = canvas.anchored(self.sprite.pos, self.sprite.size, Align2::CENTER_CENTER);
        let tint = Color32::WHITE.gamma_multiply(alpha);
        match assets.texture(ui.ctx(), self.sprite.texture_key) {
            Some(texture) => {
                let uv = egui::Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                painter.image(texture, rect, uv, tint);
            }
            None => {
                painter.rect_filled(rect, 4.0, theme.accent.gamma_multiply(0.6 * alpha));
            }
        }

        // Shadow
        painter.add(ellipse(
            canvas.pos(self.shadow.center),
            self.shadow.radii * canvas.zoom(),
            palette::DARK_GREY.gamma_multiply(0.5 * alpha),
        ));

        // Event header: the banner art if it loaded, else the event name
        if let Banner::Event(display) = &self.banner {
            if display.visible {
                let banner = display
                    .banner_image(assets)
                    .and_then(|(key, size)| Some((assets.texture(ui.ctx(), key)?, size)));
                match banner {
                    Some((texture, size)) => {
                        let rect = canvas.anchored(display.pos, size, Align2::CENTER_TOP);
                        let uv = egui::Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                        painter.image(texture, rect, uv, tint);
                    }
                    None => {
                        let (fg, _) = theme.text_colors(TextStyle::Message);
                        painter.text(
                            canvas.pos(display.pos),
                            Align2::CENTER_TOP,
                            &display.event.name,
                            canvas.font(EVENT_FONT_PX * 1.4),
                            fg.gamma_multiply(alpha),
                        );
                    }
                }
            }
        }

        // Speech bubble around the banner text
        if self.bubble_visible {
            let (text, anchor) = self.banner.anchor_text(now);
            let (fg, shadow) = theme.text_colors(TextStyle::WindowAlt);
            let font_px = if self.banner.is_event() {
                EVENT_FONT_PX
            } else {
                CHANGELOG_FONT_PX
            };
            let wrap = (BUBBLE_POS.x + 60.0 - anchor.x) * canvas.zoom();
            // Colors come from the fallback so one galley serves both passes
            let galley = painter.layout(
                text,
                canvas.font(font_px),
                Color32::PLACEHOLDER,
                wrap.max(1.0),
            );
            let text_pos = canvas.pos(anchor);
            let bubble = egui::Rect::from_min_size(text_pos, galley.size()).expand(3.0 * canvas.zoom());
            painter.rect(
                bubble,
                2.0 * canvas.zoom(),
                theme.bubble_fill.gamma_multiply(alpha),
                Stroke::new(canvas.zoom() / 2.0, theme.bubble_border.gamma_multiply(alpha)),
                egui::StrokeKind::Outside,
            );
            painter.galley(
                text_pos + Vec2::splat(canvas.zoom() / 3.0),
                galley.clone(),
                shadow.gamma_multiply(alpha),
            );
            painter.galley(text_pos, galley, fg.gamma_multiply(alpha));
        }
    }
}

/// Filled ellipse as a convex polygon
fn ellipse(center: Pos2, radii: Vec2, fill: Color32) -> Shape {
    const SEGMENTS: usize = 24;
    let points = (0..SEGMENTS)
        .map(|i| {
            let angle = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
            center + Vec2::new(angle.cos() * radii.x, angle.sin() * radii.y)
        })
        .collect();
    Shape::convex_polygon(points, fill, Stroke::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::run_headless;
    use chrono::{Duration, TimeZone};

    fn spring_event() -> TimedEvent {
        TimedEvent {
            name: "Spring Festival".to_string(),
            banner_key: None,
            start: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_changelog_branch_without_event() {
        let rival = RivalVignette::new(PlayerGender::Male, None, "en", &Assets::default());
        assert!(matches!(
            rival.banner(),
            Banner::Changelog(c) if c.text == "Check the Discord for the latest changes!"
        ));
    }

    #[test]
    fn test_event_branch_with_event() {
        let event = spring_event();
        let rival = RivalVignette::new(PlayerGender::Male, Some(&event), "en", &Assets::default());
        assert!(rival.banner().is_event());

        let now = event.end - Duration::hours(25);
        let (text, _) = rival.banner().anchor_text(now);
        assert_eq!(text, "Event Ends in: 1d 1h 0m 0s");
    }

    #[test]
    fn test_update_keeps_banner_branch() {
        let event = spring_event();
        let mut rival = RivalVignette::new(PlayerGender::Male, Some(&event), "en", &Assets::default());
        rival.update(PlayerGender::Female, &Assets::default());
        rival.update(PlayerGender::Male, &Assets::default());
        assert!(rival.banner().is_event());
    }

    #[test]
    fn test_update_retextures_and_moves_shadow() {
        let assets = Assets::default();
        let mut rival = RivalVignette::new(PlayerGender::Male, None, "en", &assets);

        rival.update(PlayerGender::Male, &assets);
        let male = (rival.sprite().texture_key, rival.shadow().center.y);
        assert_eq!(male.0, "ivy-sprite");
        assert_eq!(male.1, 127.0 + 32.0 - 2.0);

        rival.update(PlayerGender::Female, &assets);
        let female = (rival.sprite().texture_key, rival.shadow().center.y);
        assert_eq!(female.0, "finn-sprite");
        assert_eq!(female.1, 127.0 + 32.0 - 3.0);
        assert_ne!(male, female);

        rival.update(PlayerGender::Female, &assets);
        assert_eq!((rival.sprite().texture_key, rival.shadow().center.y), female);
    }

    #[test]
    fn test_show_hide_event_display() {
        let event = spring_event();
        let mut rival = RivalVignette::new(PlayerGender::Female, Some(&event), "en", &Assets::default());
        assert!(!rival.bubble_visible());

        rival.show();
        assert!(rival.bubble_visible());
        assert!(matches!(rival.banner(), Banner::Event(d) if d.visible));

        rival.hide();
        assert!(!rival.bubble_visible());
        assert!(matches!(rival.banner(), Banner::Event(d) if !d.visible));
    }

    #[test]
    fn test_shadow_sized_from_sprite() {
        let rival = RivalVignette::new(PlayerGender::Male, None, "en", &Assets::default());
        assert_eq!(rival.shadow().radii, Vec2::new(12.0, 3.2));
        assert_eq!(rival.shadow().center, Pos2::new(176.0, 127.0 + 32.0 - 1.0));
    }

    #[test]
    fn test_banner_image_needs_loaded_art() {
        let mut event = spring_event();
        let display = EventDisplay::new(event.clone(), "en");
        assert_eq!(display.banner_image(&Assets::default()), None);

        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(40, 12)
            .save(dir.path().join("spring-banner.png"))
            .unwrap();
        let assets = Assets::load_dir(dir.path(), &["spring-banner"]);
        assert_eq!(display.banner_image(&assets), None);

        event.banner_key = Some("spring-banner".to_string());
        let display = EventDisplay::new(event.clone(), "en");
        assert_eq!(
            display.banner_image(&assets),
            Some(("spring-banner", Vec2::new(40.0, 12.0)))
        );

        event.banner_key = Some("summer-banner".to_string());
        let display = EventDisplay::new(event, "en");
        assert_eq!(display.banner_image(&assets), None);
    }

    #[test]
    fn test_bubble_text_shadow_uses_shadow_color() {
        let theme = Theme::dark();
        let mut rival = RivalVignette::new(PlayerGender::Male, None, "en", &Assets::default());
        rival.show();
        let mut assets = Assets::default();
        let ctx = egui::Context::default();

        let output = run_headless(&ctx, Vec2::new(1280.0, 720.0), Vec::new(), |ui| {
            let canvas = CanvasTransform::fit(ui.max_rect());
            rival.render(ui, &canvas, &mut assets, &theme, 1.0, Utc::now());
        });

        let hint = i18n::changelog_hint("en");
        let passes: Vec<_> = output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                Shape::Text(text) if text.galley.job.text == hint => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(passes.len(), 2);

        let (fg, shadow) = theme.text_colors(TextStyle::WindowAlt);
        assert_ne!(fg, shadow);
        assert_eq!(passes[0].fallback_color, shadow);
        assert_eq!(passes[1].fallback_color, fg);
        for pass in passes {
            assert!(pass
                .galley
                .job
                .sections
                .iter()
                .all(|section| section.format.color == Color32::PLACEHOLDER));
        }
    }
}
