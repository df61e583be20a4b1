//! Language resolution and the handful of strings the title screen shows.

/// Languages with translated title screen strings
const SUPPORTED: &[&str] = &[
    "en", "de", "es", "fr", "it", "ja", "ko", "pt-BR", "zh-CN", "zh-TW",
];

/// Languages the wiki has localized start pages for
const WIKI_LANGUAGES: &[&str] = &["de", "fr", "ko", "zh"];

const WIKI_DEFAULT_URL: &str = "https://wiki.pokerogue.net/start";

/// Resolve a requested locale to a supported language code.
///
/// Accepts `_` or `-` separators and any case. An exact match wins, then a
/// supported code sharing the primary subtag, then English.
pub fn resolve_language(requested: &str) -> String {
    let normalized = requested.trim().replace('_', "-");
    if let Some(exact) = SUPPORTED.iter().find(|s| s.eq_ignore_ascii_case(&normalized)) {
        return exact.to_string();
    }

    let primary = normalized.split('-').next().unwrap_or("").to_ascii_lowercase();
    SUPPORTED
        .iter()
        .find(|s| s.split('-').next() == Some(primary.as_str()))
        .map(|s| s.to_string())
        .unwrap_or_else(|| "en".to_string())
}

/// First two characters of a language code
fn primary_subtag(lang: &str) -> &str {
    lang.get(..2).unwrap_or(lang)
}

/// Wiki start page for a resolved language
pub fn wiki_url(lang: &str) -> String {
    let short = primary_subtag(lang);
    if WIKI_LANGUAGES.contains(&short) {
        format!("https://wiki.pokerogue.net/{}:start", short)
    } else {
        WIKI_DEFAULT_URL.to_string()
    }
}

/// "{count} Players Online"
pub fn players_online(lang: &str, count: u64) -> String {
    match primary_subtag(lang) {
        "de" => format!("{} Spieler Online", count),
        "es" => format!("{} Jugadores en Línea", count),
        "fr" => format!("{} Joueurs en Ligne", count),
        "it" => format!("{} Giocatori Online", count),
        "ja" => format!("オンラインのプレイヤー: {}", count),
        "ko" => format!("{}명 접속 중", count),
        "pt" => format!("{} Jogadores Ativos", count),
        "zh" => format!("{} 名玩家在线", count),
        _ => format!("{} Players Online", count),
    }
}

/// Rival speech bubble text when no event is running
pub fn changelog_hint(lang: &str) -> &'static str {
    match primary_subtag(lang) {
        "de" => "Schau auf Discord für die neuesten Änderungen!",
        "fr" => "Consultez le Discord pour les dernières nouveautés !",
        "ko" => "최신 변경 사항은 디스코드에서 확인하세요!",
        "zh" => "最新更新请查看 Discord！",
        _ => "Check the Discord for the latest changes!",
    }
}

/// Label before the event countdown
pub fn event_ends_in(lang: &str) -> &'static str {
    match primary_subtag(lang) {
        "de" => "Event endet in:",
        "fr" => "L'événement se termine dans :",
        _ => "Event Ends in:",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language() {
        assert_eq!(resolve_language("en"), "en");
        assert_eq!(resolve_language("de_DE"), "de");
        assert_eq!(resolve_language("zh-cn"), "zh-CN");
        assert_eq!(resolve_language("zh"), "zh-CN");
        assert_eq!(resolve_language("pt"), "pt-BR");
        assert_eq!(resolve_language("xx-YY"), "en");
        assert_eq!(resolve_language(""), "en");
    }

    #[test]
    fn test_wiki_url_localized() {
        for lang in ["de", "fr", "ko", "zh-CN", "zh-TW"] {
            let short = &lang[..2];
            assert_eq!(
                wiki_url(lang),
                format!("https://wiki.pokerogue.net/{}:start", short)
            );
        }
    }

    #[test]
    fn test_wiki_url_default() {
        for lang in ["en", "es", "it", "ja", "pt-BR", "x"] {
            assert_eq!(wiki_url(lang), "https://wiki.pokerogue.net/start");
        }
    }

    #[test]
    fn test_players_online() {
        assert_eq!(players_online("en", 42), "42 Players Online");
        assert_eq!(players_online("de", 0), "0 Spieler Online");
        assert_eq!(players_online("unknown", 7), "7 Players Online");
        assert!(players_online("zh-CN", 42).contains("42"));
    }

    #[test]
    fn test_changelog_hint_falls_back() {
        assert_eq!(changelog_hint("it"), "Check the Discord for the latest changes!");
    }
}
