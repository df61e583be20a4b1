//! Row of social links in the bottom left corner of the title screen.

use eframe::egui::{self, Color32, Pos2, Sense, Vec2};

use crate::assets::Assets;
use crate::i18n;
use crate::ui::{CanvasTransform, UiRoot};

const DISCORD_URL: &str = "https://discord.gg/uWpTfdKG49";
const GITHUB_URL: &str = "https://github.com/pagefaultgames/pokerogue";
const REDDIT_URL: &str = "https://www.reddit.com/r/pokerogue";

/// Icon size before the row is scaled down
pub const ICON_SIZE: f32 = 84.0;
/// Gap between icons before the row is scaled down
pub const ICON_GAP: f32 = 30.0;
/// Scale applied to the laid-out row
pub const ROW_SCALE: f32 = 1.0 / 6.0;

const IDLE_ALPHA: f32 = 0.5;
const HOVER_ALPHA: f32 = 1.0;

/// A clickable external link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLink {
    pub label: String,
    pub texture_key: String,
    pub url: String,
}

impl IconLink {
    fn new(name: &str, url: String) -> Self {
        Self {
            label: name.to_string(),
            texture_key: name.to_string(),
            url,
        }
    }
}

/// Links shown on the title screen, wiki first
pub fn title_links(lang: &str) -> Vec<IconLink> {
    vec![
        IconLink::new("wiki", i18n::wiki_url(lang)),
        IconLink::new("discord", DISCORD_URL.to_string()),
        IconLink::new("github", GITHUB_URL.to_string()),
        IconLink::new("reddit", REDDIT_URL.to_string()),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconState {
    #[default]
    Idle,
    Hovered,
}

impl IconState {
    pub fn alpha(&self) -> f32 {
        match self {
            IconState::Idle => IDLE_ALPHA,
            IconState::Hovered => HOVER_ALPHA,
        }
    }
}

/// Side effect an icon interaction asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconAction {
    ShowTooltip(String),
    HideTooltip,
    OpenUrl(String),
}

#[derive(Debug, Clone)]
pub struct Icon {
    pub link: IconLink,
    pub state: IconState,
    /// Offset from the row origin, unscaled
    pub offset: f32,
}

impl Icon {
    pub fn pointer_enter(&mut self) -> IconAction {
        self.state = IconState::Hovered;
        IconAction::ShowTooltip(self.link.label.clone())
    }

    pub fn pointer_exit(&mut self) -> IconAction {
        self.state = IconState::Idle;
        IconAction::HideTooltip
    }

    pub fn pointer_down(&self) -> IconAction {
        IconAction::OpenUrl(self.link.url.clone())
    }
}

pub struct SocialIconRow {
    icons: Vec<Icon>,
    /// Row origin in logical units
    origin: Pos2,
    visible: bool,
}

impl SocialIconRow {
    pub fn new(origin: Pos2, lang: &str) -> Self {
        let icons = title_links(lang)
            .into_iter()
            .enumerate()
            .map(|(i, link)| Icon {
                link,
                state: IconState::Idle,
                offset: i as f32 * (ICON_SIZE + ICON_GAP),
            })
            .collect();

        Self {
            icons,
            origin,
            visible: false,
        }
    }

    #[cfg(test)]
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    #[cfg(test)]
    pub fn icon_mut(&mut self, label: &str) -> Option<&mut Icon> {
        self.icons.iter_mut().find(|i| i.link.label == label)
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hiding also drops hover state so icons come back idle
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            for icon in &mut self.icons {
                icon.state = IconState::Idle;
            }
        }
    }

    /// Center of an icon in logical units
    pub fn icon_center(&self, index: usize) -> Option<Pos2> {
        self.icons
            .get(index)
            .map(|icon| self.origin + Vec2::new(icon.offset, 0.0) * ROW_SCALE)
    }

    /// Draw the row and run hover/click transitions
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        canvas: &CanvasTransform,
        assets: &mut Assets,
        root: &mut UiRoot,
        alpha: f32,
    ) {
        if !self.visible {
            return;
        }
        let size = Vec2::splat(ICON_SIZE * ROW_SCALE);

        for index in 0..self.icons.len() {
            let Some(center) = self.icon_center(index) else {
                continue;
            };
            let rect = canvas.anchored(center, size, egui::Align2::CENTER_CENTER);
            let id = ui.id().with(("title-icon", index));
            let response = ui.interact(rect, id, Sense::click());

            let icon = &mut self.icons[index];
            let mut actions = Vec::new();
            match (icon.state, response.hovered()) {
                (IconState::Idle, true) => actions.push(icon.pointer_enter()),
                (IconState::Hovered, false) => actions.push(icon.pointer_exit()),
                _ => {}
            }
            if response.clicked() {
                actions.push(icon.pointer_down());
            }

            let tint = Color32::WHITE.gamma_multiply(icon.state.alpha() * alpha);
            match assets.texture(ui.ctx(), &icon.link.texture_key) {
                Some(texture) => {
                    let uv = egui::Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                    ui.painter().image(texture, rect, uv, tint);
                }
                None => {
                    ui.painter().circle_filled(rect.center(), rect.width() / 2.0, tint);
                }
            }

            for action in actions {
                apply_action(root, action);
            }
        }
    }
}

fn apply_action(root: &mut UiRoot, action: IconAction) {
    match action {
        IconAction::ShowTooltip(name) => root.show_tooltip("", &name),
        IconAction::HideTooltip => root.hide_tooltip(),
        IconAction::OpenUrl(url) => {
            if let Err(e) = open::that(&url) {
                tracing::error!("Failed to open {}: {}", url, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_order_and_urls() {
        let links = title_links("en");
        let names: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(names, ["wiki", "discord", "github", "reddit"]);
        assert_eq!(links[0].url, "https://wiki.pokerogue.net/start");
        assert_eq!(links[1].url, DISCORD_URL);
        assert!(links.iter().all(|l| l.texture_key == l.label));
    }

    #[test]
    fn test_localized_wiki_link() {
        assert_eq!(title_links("ko")[0].url, "https://wiki.pokerogue.net/ko:start");
        assert_eq!(title_links("es")[0].url, "https://wiki.pokerogue.net/start");
    }

    #[test]
    fn test_layout_spacing() {
        let row = SocialIconRow::new(Pos2::new(15.0, 165.0), "en");
        let offsets: Vec<_> = row.icons().iter().map(|i| i.offset).collect();
        assert_eq!(offsets, [0.0, 114.0, 228.0, 342.0]);

        assert_eq!(row.icon_center(0), Some(Pos2::new(15.0, 165.0)));
        assert_eq!(row.icon_center(1), Some(Pos2::new(34.0, 165.0)));
        assert_eq!(row.icon_center(4), None);
    }

    #[test]
    fn test_hover_state_machine() {
        let mut row = SocialIconRow::new(Pos2::ZERO, "en");
        let icon = row.icon_mut("github").unwrap();
        assert_eq!(icon.state, IconState::Idle);
        assert_eq!(icon.state.alpha(), 0.5);

        assert_eq!(icon.pointer_enter(), IconAction::ShowTooltip("github".to_string()));
        assert_eq!(icon.state, IconState::Hovered);
        assert_eq!(icon.state.alpha(), 1.0);

        assert_eq!(icon.pointer_down(), IconAction::OpenUrl(GITHUB_URL.to_string()));
        assert_eq!(icon.state, IconState::Hovered);

        assert_eq!(icon.pointer_exit(), IconAction::HideTooltip);
        assert_eq!(icon.state, IconState::Idle);

        // Clicking while idle opens the link too
        assert_eq!(icon.pointer_down(), IconAction::OpenUrl(GITHUB_URL.to_string()));
        assert_eq!(icon.state, IconState::Idle);
    }

    #[test]
    fn test_icons_hover_independently() {
        let mut row = SocialIconRow::new(Pos2::ZERO, "en");
        row.icon_mut("wiki").unwrap().pointer_enter();
        let states: Vec<_> = row.icons().iter().map(|i| i.state).collect();
        assert_eq!(
            states,
            [IconState::Hovered, IconState::Idle, IconState::Idle, IconState::Idle]
        );
    }

    #[test]
    fn test_hiding_resets_hover() {
        let mut row = SocialIconRow::new(Pos2::ZERO, "en");
        row.set_visible(true);
        row.icon_mut("reddit").unwrap().pointer_enter();
        row.set_visible(false);
        assert!(row.icons().iter().all(|i| i.state == IconState::Idle));
        assert!(!row.is_visible());
    }

    #[test]
    fn test_tooltip_actions_reach_root() {
        let mut root = UiRoot::new(crate::ui::theme::Theme::dark());
        apply_action(&mut root, IconAction::ShowTooltip("wiki".to_string()));
        assert_eq!(root.tooltip.as_ref().unwrap().content, "wiki");
        apply_action(&mut root, IconAction::HideTooltip);
        assert!(root.tooltip.is_none());
    }
}
