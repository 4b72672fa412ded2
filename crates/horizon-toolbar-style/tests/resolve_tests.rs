//! Integration tests for theme resolution and configuration loading.

use std::io::Write;

use horizon_toolbar_style::prelude::*;
use horizon_toolbar_style::Error;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_every_slot_override_beats_every_theme() {
    init_tracing();
    let resolver = PaletteResolver::new();
    let primary = ColorToken::from(DEFAULT_PRIMARY);

    for theme in ThemeName::ALL {
        for slot in ColorSlot::ALL {
            let mut overrides = ColorOverrides::new();
            match slot {
                ColorSlot::Background => overrides = overrides.background_color("paperLime700"),
                ColorSlot::Title => overrides = overrides.title_color("paperLime700"),
                ColorSlot::LeftIcon => overrides = overrides.left_icon_color("paperLime700"),
                ColorSlot::RightIcon => overrides = overrides.right_icon_color("paperLime700"),
            }

            let map = ResolvedStyleMap::resolve(theme, &primary, Some(&overrides), &resolver);
            let defaults = ResolvedStyleMap::resolve(theme, &primary, None, &resolver);

            for other in ColorSlot::ALL {
                if other == slot {
                    assert_eq!(map.get(other), resolver.resolve("paperLime700"));
                } else {
                    assert_eq!(map.get(other), defaults.get(other), "{theme} {other:?}");
                }
            }
        }
    }
}

#[test]
fn test_dark_background_follows_primary() {
    let resolver = PaletteResolver::new();
    for primary in PRIMARY_COLORS {
        let map = ResolvedStyleMap::resolve(
            ThemeName::Dark,
            &ColorToken::from(*primary),
            None,
            &resolver,
        );
        assert_eq!(map.background_color, resolver.resolve(primary));
    }
}

#[test]
fn test_custom_resolver_only_sees_dark_and_override_tokens() {
    let seen = parking_lot::Mutex::new(Vec::new());
    let recording = |token: &str| {
        seen.lock().push(token.to_string());
        Color::MAGENTA
    };

    let light = ResolvedStyleMap::resolve(
        ThemeName::Light,
        &ColorToken::from("paperBlue"),
        None,
        &recording,
    );
    assert_eq!(light.background_color, Color::WHITE);
    assert!(seen.lock().is_empty());

    let dark = ResolvedStyleMap::resolve(
        ThemeName::Dark,
        &ColorToken::from("paperBlue"),
        Some(&ColorOverrides::new().title_color("brand")),
        &recording,
    );
    assert_eq!(dark.background_color, Color::MAGENTA);
    assert_eq!(dark.color, Color::MAGENTA);
    assert_eq!(*seen.lock(), vec!["paperBlue".to_string(), "brand".to_string()]);
}

#[test]
fn test_config_from_toml_file() {
    init_tracing();
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "theme = \"light\"\nelevation = 8.0\n[overrides]\nright_icon_color = \"paperRed\"").unwrap();

    let config = ToolbarConfig::from_file(file.path()).unwrap();
    assert_eq!(config.theme, ThemeName::Light);
    assert_eq!(config.elevation, 8.0);
    assert_eq!(
        config.overrides.unwrap().right_icon_color.unwrap().as_str(),
        "paperRed"
    );
}

#[test]
fn test_config_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"direction": "rtl", "primary": "paperTeal"}}"#).unwrap();

    let config = ToolbarConfig::from_file(file.path()).unwrap();
    assert_eq!(config.direction, Direction::Rtl);
    assert_eq!(config.primary.as_str(), "paperTeal");
    assert_eq!(config.theme, ThemeName::Dark);
}

#[test]
fn test_config_errors() {
    let missing = ToolbarConfig::from_file("/definitely/not/here.toml");
    assert!(matches!(missing, Err(Error::Io { .. })));

    let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    let unsupported = ToolbarConfig::from_file(file.path());
    assert!(matches!(unsupported, Err(Error::Config { .. })));
}
