//! Validate a small layout in headless Chrome and build the HTML report.
//!
//! Run with `cargo run -p automotion-validator --example chrome_layout`.
//! Requires a local Chrome or Chromium.

use automotion_common::Units;
use automotion_validator::{Padding, ResponsiveValidator};
use automotion_vision::{ChromePage, ReportOptions};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
  body { margin: 0; font-family: sans-serif; }
  header { height: 80px; margin: 0 40px; background: #1f2937; color: #fff; }
  .grid { display: flex; flex-wrap: wrap; gap: 20px; margin: 20px 40px; }
  .card { width: 300px; height: 200px; background: #e5e7eb; }
</style>
</head>
<body>
  <header id="header">Automotion</header>
  <main class="grid">
    <div class="card">One</div>
    <div class="card">Two</div>
    <div class="card">Three</div>
    <div class="card">Four</div>
  </main>
</body>
</html>"#;

fn main() -> automotion_vision::Result<()> {
    let page = ChromePage::launch(1280, 800)?;
    page.open_html(PAGE)?;

    let header = page.find("#header")?;
    let grid = page.find("main")?;
    let cards = page.find_all(".card")?;

    let validator = ResponsiveValidator::new(&page)
        .with_report_options(ReportOptions::default())
        .draw_map();

    let header_ok = validator
        .init_with_scenario("Header")
        .draw_map()
        .find_element(header, "Header")
        .equal_left_right_offset()
        .height_between(60, 100)
        .same_offset_left_as(&grid, "Grid")
        .validate();

    let cards_ok = validator
        .init_with_scenario("Cards")
        .draw_map()
        .change_metrics_units_to(Units::Px)
        .find_elements(cards.clone())
        .aligned_as_grid(3)
        .are_not_overlapped_with_each_other()
        .with_same_size()
        .inside_of(&grid, "Grid")
        .validate();

    let first_card_ok = validator
        .init_with_scenario("First card")
        .draw_map()
        .find_element(cards[0].clone(), "First card")
        .inside_of_with_padding(&grid, "Grid", Padding::new(0, 0, 0, 0))
        .with_right_element_margin(&cards[1], 20, 20)
        .validate();

    println!("header: {}, cards: {}, first card: {}", header_ok, cards_ok, first_card_ok);
    if let Some(report) = validator.generate_report("chrome_layout") {
        println!("Report: {}", report.display());
    }
    Ok(())
}
