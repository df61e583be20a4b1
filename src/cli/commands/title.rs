//! Title screen data without the window

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted};
use crate::config::Config;
use crate::i18n;
use crate::splash;
use crate::stats::StatsClient;
use crate::ui::title::title_links;

#[derive(Serialize)]
struct StatsResult {
    player_count: u64,
    battle_count: u64,
    label: String,
}

#[derive(Serialize)]
struct LinkResult {
    name: String,
    url: String,
}

pub async fn stats(config: &Config, format: OutputFormat) -> Result<()> {
    let client = StatsClient::new(&config.title.api_base)?;
    let lang = i18n::resolve_language(&config.launcher.locale);

    let stats = client.get_title_stats().await?;
    let result = StatsResult {
        player_count: stats.player_count,
        battle_count: stats.battle_count,
        label: i18n::players_online(&lang, stats.player_count),
    };

    print_formatted(&result, format, |r| {
        format!("{}\nBattles: {}", r.label, r.battle_count)
    });
    Ok(())
}

pub fn links(config: &Config, format: OutputFormat) -> Result<()> {
    let lang = i18n::resolve_language(&config.launcher.locale);
    let links: Vec<LinkResult> = title_links(&lang)
        .into_iter()
        .map(|l| LinkResult {
            name: l.label,
            url: l.url,
        })
        .collect();

    print_formatted(&links, format, |links| {
        links
            .iter()
            .map(|l| format!("{:<8} {}", l.name, l.url))
            .collect::<Vec<_>>()
            .join("\n")
    });
    Ok(())
}

pub fn splash(all: bool, format: OutputFormat) -> Result<()> {
    let messages: Vec<&str> = if all {
        splash::SPLASH_MESSAGES.to_vec()
    } else {
        vec![splash::random_splash(&mut rand::rng())]
    };

    print_formatted(&messages, format, |m| m.join("\n"));
    Ok(())
}
