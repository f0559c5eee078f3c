//! Headless pager example: drives a pager through taps and swipes and prints
//! what a host would draw.
//!
//! Run with: cargo run -p horizon-pager --example headless_pager
//!
//! Set `RUST_LOG=horizon_pager=debug` (or `trace`) to watch the selection
//! logic at work.

use std::sync::Arc;

use horizon_pager::prelude::*;
use horizon_pager::pager::SurfaceCommand;
use tracing_subscriber::EnvFilter;

struct Weather {
    cities: Vec<&'static str>,
}

impl PagerDataSource for Weather {
    type Page = String;

    fn starting_index(&self) -> usize {
        1
    }

    fn menu_items(&self) -> Vec<MenuItem> {
        self.cities.iter().map(|&city| MenuItem::new(city)).collect()
    }

    fn page(&self, index: PageIndex) -> String {
        format!("Forecast for {}", self.cities[index.item()])
    }
}

fn print_strip(pager: &PagerController<String>) {
    let strip: Vec<String> = pager
        .menu()
        .tiles()
        .iter()
        .map(|tile| {
            let title = tile.title.as_deref().unwrap_or("?");
            if tile.selected {
                format!("[{title}]")
            } else {
                format!(" {title} ")
            }
        })
        .collect();
    println!("  strip: {}", strip.join(" "));
}

fn print_commands(surface: &RecordingSurface) {
    for command in surface.take() {
        match command {
            SurfaceCommand::ScrollTo { index, animated, .. } => {
                println!("  surface: scroll to page {} (animated: {animated})", index.item());
            }
            SurfaceCommand::ReloadTiles => println!("  surface: reload tiles"),
            SurfaceCommand::ApplyLayout(layout) => {
                println!("  surface: layout {} pages in {:?}", layout.page_count, layout.frame);
            }
            SurfaceCommand::ApplyStyle(_) => println!("  surface: restyle"),
        }
    }
}

fn main() -> PagerResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let surface = RecordingSurface::new();
    let mut pager = PagerController::new()
        .with_data_source(Arc::new(Weather {
            cities: vec!["Oslo", "Lisbon", "Nairobi", "Lima"],
        }))
        .with_surface(Box::new(surface.clone()))
        .with_config(PagerConfig::from_toml_str(
            r##"
            [menu]
            alignment = "left"
            selected_color = "#FFCC00"
            "##,
        )?);

    pager.current_changed.connect(|index| {
        println!("  -> current page is now {}", index.item());
    });
    pager.page_will_display.connect(|(page, _)| {
        println!("  -> showing \"{page}\"");
    });

    println!("reload");
    pager.set_bounds(Size::new(390.0, 844.0));
    pager.reload();
    pager.will_display_page(0)?;
    print_commands(&surface);
    print_strip(&pager);

    println!("tap on Lima");
    pager.tab_tapped(3)?;
    print_commands(&surface);
    print_strip(&pager);

    println!("swipe back to Nairobi");
    pager.drag_will_begin();
    pager.will_display_page(2)?;
    pager.drag_did_end(true);
    pager.did_end_displaying_page(3)?;
    pager.deceleration_did_end();
    print_strip(&pager);

    println!("start a swipe to Lisbon, then let go");
    pager.drag_will_begin();
    pager.will_display_page(1)?;
    pager.drag_did_end(true);
    pager.did_end_displaying_page(1)?;
    pager.deceleration_did_end();
    print_strip(&pager);

    Ok(())
}
