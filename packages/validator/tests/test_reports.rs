//! Artifacts written by failed sessions with draw-map enabled

use automotion_common::{MockPage, Platform, Rect, ViewportMetrics};
use automotion_validator::ResponsiveValidator;
use automotion_vision::{load_records, ReportOptions, ReportRecord, Rgba};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tempfile::TempDir;

fn blank_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn page_with_screenshot() -> MockPage {
    let page = MockPage::new(ViewportMetrics::desktop(200, 150));
    page.set_screenshot(blank_png(200, 150));
    page
}

#[test]
fn test_failed_session_writes_record_and_screenshot() {
    let temp = TempDir::new().unwrap();
    let page = page_with_screenshot();
    let card = page.add_element("card", Rect::new(20, 20, 100, 50));
    let badge = page.add_element("badge", Rect::new(30, 90, 40, 20));

    let validator = ResponsiveValidator::new(&page)
        .with_report_options(ReportOptions::new(temp.path()))
        .init_with_scenario("Card layout")
        .draw_map();

    let outcome = validator
        .find_element(card, "Product Card")
        .same_offset_left_as(&badge, "Badge")
        .finish();
    assert!(!outcome.passed);

    let record_path = outcome.record_path.expect("record should be written");
    let file_name = record_path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("ProductCard-automotion"));
    assert!(file_name.ends_with(".json"));
    assert_eq!(record_path.parent().unwrap(), temp.path().join("json"));

    let record: ReportRecord =
        serde_json::from_str(&std::fs::read_to_string(&record_path).unwrap()).unwrap();
    assert!(record.error);
    assert_eq!(record.scenario, "Card layout");
    assert_eq!(record.element_name, "Product Card");
    assert_eq!(record.root_element, Rect::new(20, 20, 100, 50));
    assert!(record.time_execution.ends_with(" milliseconds"));
    assert_eq!(record.details.len(), 1);
    assert_eq!(record.details[0].reason.element, Some(Rect::new(30, 90, 40, 20)));

    let screenshot_path = outcome.screenshot_path.expect("screenshot should be written");
    assert_eq!(
        screenshot_path.file_name().unwrap().to_string_lossy(),
        record.screenshot
    );

    // root box in the root colour, guide line through the shared left edge
    let painted = image::open(&screenshot_path).unwrap().to_rgba8();
    assert_eq!(painted.get_pixel(60, 20), &Rgba([255, 0, 0, 255]));
    assert_eq!(painted.get_pixel(50, 90), &Rgba([255, 0, 255, 255]));
    assert_eq!(painted.get_pixel(20, 0), &Rgba([255, 200, 0, 255]));

    assert_eq!(validator.record_files(), vec![record_path]);
    let report = validator.generate_report("layout").expect("report should be built");
    assert!(report.ends_with("layout.html"));
}

#[test]
fn test_record_json_shape() {
    let temp = TempDir::new().unwrap();
    let page = page_with_screenshot();
    let root = page.add_element("root", Rect::new(0, 0, 50, 50));

    let outcome = ResponsiveValidator::new(&page)
        .with_report_options(ReportOptions::new(temp.path()))
        .draw_map()
        .find_element(root, "Root")
        .max_width(10)
        .finish();

    let raw = std::fs::read_to_string(outcome.record_path.unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let keys = [
        "error",
        "details",
        "scenario",
        "rootElement",
        "timeExecution",
        "elementName",
        "screenshot",
    ];
    for key in keys {
        assert!(value.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(value["scenario"], "Default");
    assert_eq!(
        value["details"][0]["reason"]["message"],
        "Expected max width of element 'Root' is: 10px. Actual width is: 50px"
    );
    assert!(value["details"][0]["reason"].get("element").is_none());
    assert_eq!(value["rootElement"]["width"], 50);
}

#[test]
fn test_passing_session_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let page = page_with_screenshot();
    let root = page.add_element("root", Rect::new(0, 0, 50, 50));

    let validator = ResponsiveValidator::new(&page)
        .with_report_options(ReportOptions::new(temp.path()))
        .draw_map();
    let outcome = validator.find_element(root, "Root").max_width(100).finish();

    assert!(outcome.passed);
    assert!(outcome.record_path.is_none());
    assert!(!temp.path().join("json").exists());
    assert!(validator.generate_report("result").is_none());
}

#[test]
fn test_screenshot_failure_keeps_verdict() {
    let temp = TempDir::new().unwrap();
    let page = MockPage::new(ViewportMetrics::desktop(200, 150));
    let root = page.add_element("root", Rect::new(0, 0, 50, 50));

    let outcome = ResponsiveValidator::new(&page)
        .with_report_options(ReportOptions::new(temp.path()))
        .draw_map()
        .find_element(root, "Root")
        .max_width(10)
        .finish();

    assert!(!outcome.passed);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.screenshot_path.is_none());

    let records = load_records(&temp.path().join("json")).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].1.screenshot, "");
}

#[test]
fn test_without_draw_map_nothing_is_written() {
    let temp = TempDir::new().unwrap();
    let page = page_with_screenshot();
    let root = page.add_element("root", Rect::new(0, 0, 50, 50));

    let outcome = ResponsiveValidator::new(&page)
        .with_report_options(ReportOptions::new(temp.path()))
        .find_element(root, "Root")
        .max_width(10)
        .finish();

    assert!(!outcome.passed);
    assert!(outcome.record_path.is_none());
    assert!(!temp.path().join("img").exists());
}

#[test]
fn test_report_from_parent_validator() {
    let temp = TempDir::new().unwrap();
    let page = page_with_screenshot();
    let root = page.add_element("root", Rect::new(0, 0, 50, 50));

    let validator =
        ResponsiveValidator::new(&page).with_report_options(ReportOptions::new(temp.path()));
    let outcome = validator
        .init_with_scenario("Home")
        .draw_map()
        .find_element(root, "Root")
        .max_width(10)
        .finish();

    let record_path = outcome.record_path.expect("record should be written");
    assert_eq!(validator.record_files(), vec![record_path]);

    let report = validator.generate_report("home").expect("report should be built");
    assert_eq!(report, temp.path().join("home.html"));
    assert!(std::fs::read_to_string(&report).unwrap().contains("Root"));
}

#[test]
fn test_draw_map_survives_init() {
    let temp = TempDir::new().unwrap();
    let page = page_with_screenshot();
    let root = page.add_element("root", Rect::new(0, 0, 50, 50));

    let validator = ResponsiveValidator::new(&page)
        .with_report_options(ReportOptions::new(temp.path()))
        .draw_map();
    assert!(validator.init().settings().draw_map);

    let outcome = validator
        .init()
        .find_element(root, "Root")
        .max_width(10)
        .finish();
    assert!(outcome.record_path.is_some());
    assert!(outcome.screenshot_path.is_some());
}

#[test]
fn test_custom_colours_and_top_bar_reach_the_screenshot() {
    let temp = TempDir::new().unwrap();
    let page = MockPage::new(ViewportMetrics::mobile(Platform::Android, "Pixel", 200, 150));
    page.set_screenshot(blank_png(200, 150));
    let card = page.add_element("card", Rect::new(20, 20, 100, 50));
    let badge = page.add_element("badge", Rect::new(30, 90, 40, 20));

    let blue = Rgba([0, 0, 255, 255]);
    let green = Rgba([0, 255, 0, 255]);
    let black = Rgba([0, 0, 0, 255]);

    let mut validator = ResponsiveValidator::new(&page)
        .with_report_options(ReportOptions::new(temp.path()))
        .draw_map();
    validator.set_color_for_root_element(blue);
    validator.set_color_for_highlighted_elements(green);
    validator.set_lines_color(black);
    validator.set_top_bar_mobile_offset(true);

    let session = validator.init().find_element(card, "Card");
    assert!(session.session().settings().top_bar);
    let outcome = session.same_offset_left_as(&badge, "Badge").finish();

    let screenshot = outcome.screenshot_path.expect("screenshot should be written");
    let painted = image::open(&screenshot).unwrap().to_rgba8();

    // shapes sit 20px lower, below the status bar
    assert_eq!(painted.get_pixel(60, 40), &blue);
    assert_eq!(painted.get_pixel(60, 20), &Rgba([255, 255, 255, 255]));
    assert_eq!(painted.get_pixel(50, 110), &green);
    assert_eq!(painted.get_pixel(20, 0), &black);
}
