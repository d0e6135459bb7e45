//! Static icon tables for device breakdown rows

use contracts::shared::stats_query::NOT_SET;

const BROWSER_ICON_DIR: &str = "/images/icon/browser";
const FALLBACK_BROWSER_ICON: &str = "fallback.svg";

// Logos from https://github.com/alrra/browser-logos where available
const BROWSER_ICONS: &[(&str, &str)] = &[
    ("Chrome", "chrome.svg"),
    ("Safari", "safari.png"),
    ("Firefox", "firefox.svg"),
    ("Microsoft Edge", "edge.svg"),
    ("Vivaldi", "vivaldi.svg"),
    ("Opera", "opera.svg"),
    ("Samsung Browser", "samsung-internet.svg"),
    ("Chromium", "chromium.svg"),
    ("UC Browser", "uc.svg"),
    // only PNG available upstream
    ("Yandex Browser", "yandex.png"),
    ("DuckDuckGo Privacy Browser", "duckduckgo.svg"),
    ("MIUI Browser", "miui.webp"),
    ("Huawei Browser Mobile", "huawei.png"),
    ("QQ Browser", "qq.png"),
    ("Ecosia", "ecosia.png"),
    ("vivo Browser", "vivo.png"),
];

/// Image file for a browser name; unknown browsers get the generic icon.
pub fn browser_icon_file(browser: &str) -> &'static str {
    BROWSER_ICONS
        .iter()
        .find(|(name, _)| *name == browser)
        .map(|(_, file)| *file)
        .unwrap_or(FALLBACK_BROWSER_ICON)
}

/// Absolute image path for a browser name
pub fn browser_icon_for(browser: &str) -> String {
    format!("{}/{}", BROWSER_ICON_DIR, browser_icon_file(browser))
}

const MOBILE_GLYPH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather"><rect x="5" y="2" width="14" height="20" rx="2" ry="2"/><line x1="12" y1="18" x2="12" y2="18"/></svg>"#;

const TABLET_GLYPH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather"><rect x="4" y="2" width="16" height="20" rx="2" ry="2" transform="rotate(180 12 12)"/><line x1="12" y1="18" x2="12" y2="18"/></svg>"#;

const LAPTOP_GLYPH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather"><rect x="2" y="3" width="20" height="14" rx="2" ry="2"/><line x1="2" y1="20" x2="22" y2="20"/></svg>"#;

const DESKTOP_GLYPH: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather"><rect x="2" y="3" width="20" height="14" rx="2" ry="2"/><line x1="8" y1="21" x2="16" y2="21"/><line x1="12" y1="17" x2="12" y2="21"/></svg>"#;

/// Inline SVG for a screen-size class. `(not set)` and unknown classes have no glyph.
pub fn screen_size_glyph(screen_size: &str) -> Option<&'static str> {
    match screen_size {
        "Mobile" => Some(MOBILE_GLYPH),
        "Tablet" => Some(TABLET_GLYPH),
        "Laptop" => Some(LAPTOP_GLYPH),
        "Desktop" => Some(DESKTOP_GLYPH),
        NOT_SET => None,
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_icon_for() {
        assert_eq!(browser_icon_for("Chrome"), "/images/icon/browser/chrome.svg");
        assert_eq!(browser_icon_for("Yandex Browser"), "/images/icon/browser/yandex.png");
        assert_eq!(browser_icon_for("UnknownXYZ"), "/images/icon/browser/fallback.svg");
        // lookup is exact
        assert_eq!(browser_icon_file("chrome"), "fallback.svg");
    }

    #[test]
    fn test_every_known_browser_has_own_icon() {
        for (name, file) in BROWSER_ICONS {
            assert_eq!(browser_icon_file(name), *file);
            assert_ne!(*file, FALLBACK_BROWSER_ICON);
        }
        assert_eq!(BROWSER_ICONS.len(), 16);
    }

    #[test]
    fn test_screen_size_glyph() {
        assert_eq!(screen_size_glyph(NOT_SET), None);
        assert_eq!(screen_size_glyph("Smartwatch"), None);
        assert_eq!(screen_size_glyph("Desktop"), Some(DESKTOP_GLYPH));
        assert!(screen_size_glyph("Mobile").unwrap().contains(r#"width="14" height="20""#));
        assert!(screen_size_glyph("Tablet").unwrap().contains("rotate(180 12 12)"));
        assert!(screen_size_glyph("Laptop").unwrap().contains(r#"x1="2" y1="20""#));
    }
}
