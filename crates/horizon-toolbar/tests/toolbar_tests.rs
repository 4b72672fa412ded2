//! Integration tests for toolbar rendering and press dispatch.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_toolbar::prelude::*;
use horizon_toolbar::widget::toolbar::ICON_SLOT_WIDTH;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_toolbar=trace,horizon_toolbar_style=debug")
        .with_test_writer()
        .try_init();
}

fn inbox_props() -> ToolbarProps {
    ToolbarProps::new()
        .theme(ThemeName::Dark)
        .primary("blue")
        .title("Inbox")
        .icon(ToolbarIcon::glyph("menu"))
        .action(ToolbarAction::new("search"))
        .action(ToolbarAction::new("more").disabled(true))
}

fn action_names(tree: &ViewTree) -> Vec<String> {
    tree.actions().map(|b| b.glyph.name.clone()).collect()
}

#[test]
fn test_dark_inbox_scenario() {
    init_tracing();
    let resolver = PaletteResolver::new();
    let tree = render(&inbox_props());

    assert_eq!(
        tree.root().style().background_color.as_set(),
        Some(&resolver.resolve("blue"))
    );

    let left = tree.left_icon().as_icon_button().expect("left icon button");
    assert_eq!(left.glyph.name, "menu");
    assert_eq!(left.glyph.size, 24.0);

    let ViewNode::Text {
        content,
        style,
        number_of_lines,
    } = tree.title()
    else {
        panic!("expected a text title");
    };
    assert_eq!(content, "Inbox");
    assert_eq!(*number_of_lines, Some(1));
    assert_eq!(style.color.as_set(), Some(&Color::from_rgba(1.0, 1.0, 1.0, 0.87)));

    let actions: Vec<_> = tree.actions().collect();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].glyph.name, "search");
    assert!(!actions[0].glyph.style.opacity.is_set());
    assert_eq!(actions[1].glyph.name, "more");
    assert_eq!(actions[1].glyph.style.opacity.as_set(), Some(&0.30));
}

#[test]
fn test_rtl_reverses_slots_only() {
    init_tracing();
    let ltr = render(&inbox_props());
    let rtl = render(&inbox_props().direction(Direction::Rtl));

    assert_eq!(
        rtl.slot_order(),
        [SlotKind::Actions, SlotKind::Title, SlotKind::LeftIcon]
    );

    // Same colors and content.
    assert_eq!(
        ltr.root().style().background_color,
        rtl.root().style().background_color
    );
    assert_eq!(action_names(&ltr), action_names(&rtl));
    assert_eq!(ltr.left_icon().as_icon_button().map(|b| &b.glyph.name), Some(&"menu".to_string()));
    assert_eq!(rtl.left_icon().as_icon_button().map(|b| &b.glyph.name), Some(&"menu".to_string()));

    // Array order: search, more, title, menu.
    let children = rtl.root().children();
    assert_eq!(children.len(), 4);
    assert_eq!(children[0].as_icon_button().map(|b| b.key), Some(Some(0)));
    assert_eq!(children[1].as_icon_button().map(|b| b.key), Some(Some(1)));
    assert_eq!(children[2].as_text(), Some("Inbox"));
    assert_eq!(children[3].as_icon_button().map(|b| b.key), Some(None));

    assert_eq!(rtl.title().style().text_align.as_set(), Some(&TextAlign::Right));
    assert!(!ltr.title().style().text_align.is_set());
}

#[test]
fn test_light_background_override() {
    init_tracing();
    let resolver = PaletteResolver::new();
    let tree = render(
        &ToolbarProps::new()
            .theme(ThemeName::Light)
            .title("Settings")
            .icon(ToolbarIcon::glyph("arrow-back"))
            .action(ToolbarAction::new("share"))
            .overrides(ColorOverrides::new().background_color("#ff0000")),
    );
    let light = ThemeColorSet::light();

    assert_eq!(
        tree.root().style().background_color.as_set(),
        Some(&resolver.resolve("#ff0000"))
    );
    assert_eq!(tree.title().style().color.as_set(), Some(&light.color));
    assert_eq!(
        tree.left_icon().as_icon_button().map(|b| b.glyph.color),
        Some(light.left_icon_color)
    );
    assert_eq!(
        tree.actions().map(|b| b.glyph.color).collect::<Vec<_>>(),
        [light.right_icon_color]
    );
}

#[test]
fn test_disabled_opacity_per_theme() {
    for (theme, opacity) in [(ThemeName::Light, 0.38), (ThemeName::Dark, 0.30)] {
        let tree = render(
            &ToolbarProps::new()
                .theme(theme)
                .action(ToolbarAction::new("delete").disabled(true))
                .action(ToolbarAction::new("edit")),
        );
        let opacities: Vec<_> = tree
            .actions()
            .map(|b| b.glyph.style.opacity.as_set().copied())
            .collect();
        assert_eq!(opacities, [Some(opacity), None], "{theme}");
    }
}

#[test]
fn test_left_slot_placeholder() {
    let cases = [
        None,
        Some(ToolbarIcon::Image(ImageRef(4))),
        Some(ToolbarIcon::glyph("")),
    ];

    for icon in cases {
        let mut props = ToolbarProps::new().title("Inbox");
        props.icon = icon.clone();
        let tree = render(&props);

        let left = tree.left_icon();
        assert!(left.is_spacer(), "{icon:?}");
        assert_eq!(
            left.style().width.as_set(),
            Some(&LengthValue::Px(ICON_SLOT_WIDTH)),
            "{icon:?}"
        );
        assert!(!tree.press(PressTarget::LeftIcon));
    }
}

#[test]
fn test_logo_and_missing_titles() {
    let logo = render(&ToolbarProps::new().title(ImageRef(12)));
    let ViewNode::Container { children, .. } = logo.title() else {
        panic!("expected a logo container");
    };
    assert!(matches!(
        children.as_slice(),
        [ViewNode::Image {
            source: Some(ImageRef(12)),
            ..
        }]
    ));

    for title in [None, Some(Title::text(""))] {
        let mut props = ToolbarProps::new();
        props.title = title;
        let tree = render(&props);
        let ViewNode::Container { children, .. } = tree.title() else {
            panic!("expected a logo container");
        };
        assert!(matches!(
            children.as_slice(),
            [ViewNode::Image { source: None, .. }]
        ));
    }
}

#[test]
fn test_rtl_logo_is_end_aligned() {
    let ltr = render(&ToolbarProps::new().title(ImageRef(3)));
    let rtl = render(&ToolbarProps::new().title(ImageRef(3)).direction(Direction::Rtl));

    let image_style = |tree: &ViewTree| tree.title().children()[0].style().clone();
    assert!(!image_style(&ltr).align_self.is_set());
    assert_eq!(image_style(&rtl).align_self.as_set(), Some(&AlignSelf::FlexEnd));
    assert!(!rtl.title().style().text_align.is_set());
}

#[test]
fn test_no_actions_reserve_nothing() {
    let tree = render(&ToolbarProps::new().title("Inbox"));
    assert_eq!(tree.root().children().len(), 2);
    assert!(tree.slot(SlotKind::Actions).is_empty());
    assert_eq!(tree.actions().count(), 0);
}

#[test]
fn test_render_is_idempotent() {
    let props = inbox_props()
        .overrides(ColorOverrides::new().title_color("paperAmber"))
        .right_icon_style(Style::new().opacity(0.8));
    assert_eq!(render(&props), render(&props));

    let toolbar = Toolbar::new(props.clone());
    assert_eq!(toolbar.render(), toolbar.render());
}

#[test]
fn test_press_dispatch() {
    init_tracing();
    let icon_presses = Arc::new(AtomicUsize::new(0));
    let search_presses = Arc::new(AtomicUsize::new(0));
    let more_presses = Arc::new(AtomicUsize::new(0));

    let props = {
        let icon = icon_presses.clone();
        let search = search_presses.clone();
        let more = more_presses.clone();
        ToolbarProps::new()
            .title("Inbox")
            .icon(ToolbarIcon::glyph("menu"))
            .on_icon_press(move || {
                icon.fetch_add(1, Ordering::SeqCst);
            })
            .action(ToolbarAction::new("search").on_press(move || {
                search.fetch_add(1, Ordering::SeqCst);
            }))
            .action(
                ToolbarAction::new("more")
                    .disabled(true)
                    .on_press(move || {
                        more.fetch_add(1, Ordering::SeqCst);
                    }),
            )
    };

    // Rendering never invokes handlers.
    let tree = render(&props);
    assert_eq!(icon_presses.load(Ordering::SeqCst), 0);

    for direction in [Direction::Ltr, Direction::Rtl] {
        let tree = render(&props.clone().direction(direction));
        assert!(tree.press(PressTarget::LeftIcon));
        assert!(tree.press(PressTarget::Action(0)));
        assert!(!tree.press(PressTarget::Action(1)));
        assert!(!tree.press(PressTarget::Action(2)));
    }

    assert_eq!(icon_presses.load(Ordering::SeqCst), 2);
    assert_eq!(search_presses.load(Ordering::SeqCst), 2);
    assert_eq!(more_presses.load(Ordering::SeqCst), 0);

    // Handlers are forwarded, not copied.
    let forwarded = tree.left_icon().as_icon_button().and_then(|b| b.on_press.as_ref());
    assert_eq!(forwarded, props.on_icon_press.as_ref());
}

#[test]
fn test_badge_passthrough() {
    let badge = Badge::counter(7).background_color("paperRed").color("white");
    let tree = render(
        &ToolbarProps::new()
            .action(ToolbarAction::new("mail").badge(badge.clone()))
            .action(ToolbarAction::new("chat")),
    );

    let badges: Vec<_> = tree.actions().map(|b| b.badge.clone()).collect();
    assert_eq!(badges, [Some(badge), None]);
}

#[test]
fn test_props_from_config() {
    let config = ToolbarConfig::from_toml_str(
        r##"
        theme = "light"
        direction = "rtl"
        elevation = 0.0

        [overrides]
        title_color = "#222222"
        "##,
    )
    .expect("valid config");

    let tree = render(&ToolbarProps::from_config(&config).title("Settings"));
    let resolver = PaletteResolver::new();

    assert_eq!(
        tree.root().style().background_color.as_set(),
        Some(&ThemeColorSet::light().background_color)
    );
    assert_eq!(tree.root().style().elevation.as_set(), Some(&0.0));
    assert_eq!(
        tree.title().style().color.as_set(),
        Some(&resolver.resolve("#222222"))
    );
    assert_eq!(tree.slot_order()[2], SlotKind::LeftIcon);
}

#[test]
fn test_shared_toolbar_across_threads() {
    let resolver: Arc<dyn ColorResolver> = Arc::new(CachedResolver::new(PaletteResolver::new()));
    let toolbar = Arc::new(Toolbar::new(inbox_props()).with_resolver(resolver));
    let expected = toolbar.render();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let toolbar = toolbar.clone();
            std::thread::spawn(move || toolbar.render())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("render thread"), expected);
    }
}
