//! Message screen shown when leaving the title screen.

use eframe::egui::{self, RichText};

use super::{UiHandler, UiMode, UiRoot};
use crate::save::PlayerGender;

/// What the message screen is currently displaying
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Notice(String),
    Settings,
}

/// Something the user picked on the message screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction {
    Back,
    SetGender(PlayerGender),
}

pub struct MessageScreen {
    kind: MessageKind,
    visible: bool,
}

impl Default for MessageScreen {
    fn default() -> Self {
        Self {
            kind: MessageKind::Notice(String::new()),
            visible: false,
        }
    }
}

impl MessageScreen {
    pub fn set_kind(&mut self, kind: MessageKind) {
        self.kind = kind;
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Draw the message window; returns the picked action, if any
    pub fn render(&mut self, ctx: &egui::Context, gender: PlayerGender) -> Option<MessageAction> {
        if !self.visible {
            return None;
        }
        let mut action = None;

        egui::Window::new("message")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
            .show(ctx, |ui| {
                match &self.kind {
                    MessageKind::Notice(text) => {
                        ui.label(RichText::new(text).size(18.0));
                    }
                    MessageKind::Settings => {
                        ui.label(RichText::new("Player").size(18.0).strong());
                        ui.horizontal(|ui| {
                            for option in [PlayerGender::Male, PlayerGender::Female] {
                                if ui.selectable_label(gender == option, option.name()).clicked() {
                                    action = Some(MessageAction::SetGender(option));
                                }
                            }
                        });
                    }
                }
                ui.add_space(8.0);
                if ui.button("Back").clicked() {
                    action = Some(MessageAction::Back);
                }
            });

        action
    }
}

impl UiHandler for MessageScreen {
    fn mode(&self) -> UiMode {
        UiMode::Message
    }

    fn setup(&mut self, _root: &mut UiRoot) {}

    fn show(&mut self, root: &mut UiRoot) -> bool {
        if root.mode != self.mode() {
            return false;
        }
        self.visible = true;
        true
    }

    fn clear(&mut self, _root: &mut UiRoot) {
        self.visible = false;
    }

    fn update(&mut self) {}
}
