use eframe::egui::{self, LayerId, Painter, Rect};
use std::sync::Arc;
use tokio::sync::watch;

use crate::assets::{Assets, TITLE_TEXTURES};
use crate::config::Config;
use crate::events::EventManager;
use crate::i18n;
use crate::save::{GameData, PlayerGender};
use crate::stats::StatsSource;
use crate::ui::theme::ThemePreset;
use crate::ui::title::{MeasureText, TitleContext, TitleOption, TitleScreen, TitleTiming};
use crate::ui::{CanvasTransform, MessageScreen, UiHandler, UiMode, UiRoot};
use crate::ui::message::{MessageAction, MessageKind};

/// Main application state
pub struct TitleApp {
    root: UiRoot,
    title: TitleScreen,
    message: MessageScreen,
    /// Player save data; the title screen watches its gender
    game_data: GameData,
    gender_tx: watch::Sender<PlayerGender>,
    /// Scene setup waits for the first frame, when fonts exist
    initialized: bool,
}

impl TitleApp {
    /// Create a new application instance
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &Config,
        stats: Arc<dyn StatsSource>,
    ) -> Self {
        let theme = ThemePreset::from_legacy_flag(config.launcher.legacy_theme).theme();
        theme.apply(&cc.egui_ctx);

        let game_data = match GameData::load() {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to load save data: {}", e);
                GameData::default()
            }
        };
        let (gender_tx, gender_rx) = watch::channel(game_data.gender);

        let lang = i18n::resolve_language(&config.launcher.locale);
        tracing::info!("Resolved language '{}' from locale '{}'", lang, config.launcher.locale);

        let mut textures: Vec<&str> = TITLE_TEXTURES.to_vec();
        textures.extend(config.events.iter().filter_map(|e| e.banner_key.as_deref()));

        let ctx = TitleContext {
            lang,
            stats,
            events: EventManager::new(config.events.clone()),
            gender: gender_rx,
            assets: Assets::load_dir(&config.assets_dir(), &textures),
            measure: measure_with(cc.egui_ctx.clone()),
            timing: TitleTiming::from(&config.title),
        };

        Self {
            root: UiRoot::new(theme),
            title: TitleScreen::new(ctx),
            message: MessageScreen::default(),
            game_data,
            gender_tx,
            initialized: false,
        }
    }

    /// Hand the UI over to another mode, clearing the current screen
    fn switch_mode(&mut self, mode: UiMode) {
        if self.root.mode == mode {
            return;
        }
        match self.root.mode {
            UiMode::Title => self.title.clear(&mut self.root),
            UiMode::Message => self.message.clear(&mut self.root),
        }
        self.root.mode = mode;
        let shown = match mode {
            UiMode::Title => self.title.show(&mut self.root),
            UiMode::Message => self.message.show(&mut self.root),
        };
        if !shown {
            tracing::warn!("Screen for {:?} refused to show", mode);
        }
    }

    fn set_gender(&mut self, gender: PlayerGender) {
        if self.game_data.gender == gender {
            return;
        }
        self.game_data.gender = gender;
        self.gender_tx.send_replace(gender);
        if let Err(e) = self.game_data.save() {
            tracing::error!("Failed to save player data: {}", e);
        }
    }

    fn handle_title_option(&mut self, ctx: &egui::Context, option: TitleOption) {
        match option {
            TitleOption::NewGame => {
                self.message
                    .set_kind(MessageKind::Notice("A new adventure awaits!".to_string()));
                self.switch_mode(UiMode::Message);
            }
            TitleOption::Settings => {
                self.message.set_kind(MessageKind::Settings);
                self.switch_mode(UiMode::Message);
            }
            TitleOption::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}

/// Text width at the player count font, in full-resolution canvas pixels
fn measure_with(ctx: egui::Context) -> MeasureText {
    let painter = Painter::new(ctx, LayerId::background(), Rect::EVERYTHING);
    Box::new(move |text: &str| {
        painter
            .layout_no_wrap(
                text.to_string(),
                egui::FontId::proportional(crate::ui::title::PLAYER_COUNT_FONT_PX),
                egui::Color32::WHITE,
            )
            .size()
            .x
    })
}

impl eframe::App for TitleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.initialized {
            self.title.setup(&mut self.root);
            self.message.setup(&mut self.root);
            self.title.show(&mut self.root);
            self.initialized = true;
        }

        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        self.root.advance(dt);
        let pointer = ctx.input(|i| i.pointer.hover_pos());

        let mut picked = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.root.theme.background))
            .show(ctx, |ui| {
                let canvas = CanvasTransform::fit(ui.max_rect());
                picked = self.title.frame(ui, &mut self.root, dt, chrono::Utc::now());
                self.root.paint_message_bg(ui.painter(), &canvas);
                self.root.paint_tooltip(ui.painter(), pointer);
            });

        if let Some(option) = picked {
            self.handle_title_option(ctx, option);
        }

        let gender = self.game_data.gender;
        match self.message.render(ctx, gender) {
            Some(MessageAction::Back) => self.switch_mode(UiMode::Title),
            Some(MessageAction::SetGender(gender)) => self.set_gender(gender),
            None => {}
        }

        if self.root.message_bg.is_animating() {
            ctx.request_repaint();
        }
    }
}
