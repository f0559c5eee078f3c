//! Integration tests for loading configuration files and applying them to a live pager.

use std::io::Write;
use std::sync::Arc;

use horizon_pager::menu::{MenuItem, TabAlignment};
use horizon_pager::pager::{PagerController, PagerDataSource, RecordingSurface};
use horizon_pager::{Color, PageIndex, PagerConfig, PagerError, ScrollDirection, Size};

struct Three;

impl PagerDataSource for Three {
    type Page = usize;

    fn menu_items(&self) -> Vec<MenuItem> {
        vec!["One".into(), "Two".into(), "Three".into()]
    }

    fn page(&self, index: PageIndex) -> usize {
        index.item()
    }
}

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_toml_file() {
    let file = write_config(
        ".toml",
        r##"
        [menu]
        height = 48
        alignment = "left"
        indicator_color = "#00FF00"

        [pages]
        scroll_direction = "vertical"
        "##,
    );

    let config = PagerConfig::load(file.path()).unwrap();
    assert_eq!(config.menu.height, 48.0);
    assert_eq!(config.menu.alignment, TabAlignment::Left);
    assert_eq!(config.menu.indicator_color, Color::from_rgb8(0, 255, 0));
    assert_eq!(config.pages.scroll_direction, ScrollDirection::Vertical);
    assert!(config.pages.bounces);
}

#[test]
fn test_load_json_file() {
    let file = write_config(".json", r#"{ "pages": { "bounces": false } }"#);

    let config = PagerConfig::load(file.path()).unwrap();
    assert!(!config.pages.bounces);
    assert_eq!(config.menu, PagerConfig::default().menu);
}

#[test]
fn test_load_reports_errors() {
    let missing = PagerConfig::load("/nonexistent/pager.toml");
    assert!(matches!(missing, Err(PagerError::Io(_))));

    let file = write_config(".toml", "[menu]\nselected_color = \"orange\"\n");
    assert!(matches!(PagerConfig::load(file.path()), Err(PagerError::ConfigParse(_))));
}

#[test]
fn test_saved_config_reloads_identically() {
    let mut config = PagerConfig::default();
    config.menu.selected_color = Color::from_rgba8(10, 20, 30, 128);
    config.pages.page_size = Some(Size::new(200.0, 300.0));

    let file = write_config(".toml", &config.to_toml_string().unwrap());
    assert_eq!(PagerConfig::load(file.path()).unwrap(), config);
}

#[test]
fn test_apply_loaded_config_to_live_pager() {
    let surface = RecordingSurface::new();
    let mut pager = PagerController::new()
        .with_data_source(Arc::new(Three))
        .with_surface(Box::new(surface.clone()));
    pager.set_bounds(Size::new(320.0, 480.0));
    pager.reload();
    pager.select_index(2).unwrap();

    let config = PagerConfig::from_toml_str(
        r#"
        [menu]
        height = 60

        [pages]
        edge_insets = { top = 0, left = 0, bottom = 0, right = 0 }
        "#,
    )
    .unwrap();
    pager.apply_config(config);

    assert_eq!(pager.current_index(), Some(2));
    assert_eq!(pager.menu().highlighted_index(), Some(2));
    assert_eq!(pager.menu_frame().height(), 60.0);
    assert_eq!(surface.last_layout().map(|l| l.frame.top()), Some(60.0));
}
