// Integration tests for panel composition: redaction, unavailable facts and
// formatting against the standard catalogue.

mod common;

use common::{console_provider, SECRETS};
use sysident::adapters::mock::{RecordingSurface, StaticInfoProvider};
use sysident::models::{Query, StorageMedium, WifiSlot};
use sysident::panels;
use sysident::ui::layout::DETAIL_SURFACE;
use sysident::ui::{Compositor, FieldValue};

fn render(provider: StaticInfoProvider, index: usize, reveal: bool) -> RecordingSurface {
    let compositor = Compositor::new(provider, panels::standard());
    let mut surface = RecordingSurface::new(DETAIL_SURFACE.width, DETAIL_SURFACE.height);
    compositor.render_panel(index, reveal, &mut surface);
    surface
}

fn all_text(surface: &RecordingSurface) -> String {
    surface.texts().collect::<Vec<_>>().join("\n")
}

// =============================================================================
// Redaction
// =============================================================================

#[test]
fn test_hidden_mode_never_draws_a_secret() {
    for index in 0..panels::standard().len() {
        let text = all_text(&render(console_provider(), index, false));
        for (_, secret) in SECRETS {
            assert!(!text.contains(secret), "panel {} leaked {}", index, secret);
        }
    }
}

#[test]
fn test_hidden_mode_never_queries_a_sensitive_field() {
    let catalogue = panels::standard();
    for (index, panel) in catalogue.panels().iter().enumerate() {
        let provider = console_provider();
        let log = provider.clone();
        render(provider, index, false);

        let queried = log.queried();
        for field in panel.fields().filter(|field| field.sensitive) {
            assert!(
                !queried.contains(&field.query),
                "{} queried {} while hidden",
                panel.title,
                field.query
            );
        }
    }
}

#[test]
fn test_reveal_mode_draws_resolved_values() {
    let text = all_text(&render(console_provider(), 0, true));
    assert!(text.contains("SDMC-SECRET-CID"));
    assert!(text.contains("NAND-SECRET-CID"));
    assert!(text.contains("2.55-0"));
}

#[test]
fn test_labels_remain_when_hidden() {
    let surface = render(console_provider(), 3, false);
    let texts: Vec<&str> = surface.texts().collect();
    for label in ["NNID:", "Principal ID:", "Time zone:"] {
        assert!(texts.contains(&label), "missing label {}", label);
    }
}

#[test]
fn test_only_active_panel_is_queried() {
    let catalogue = panels::standard();
    let provider = console_provider();
    let log = provider.clone();
    render(provider, 2, true);

    let battery: Vec<Query> = catalogue.panels()[2]
        .fields()
        .flat_map(|field| field.queries())
        .collect();
    assert!(!log.queried().is_empty());
    assert!(log.queried().iter().all(|query| battery.contains(query)));
}

// =============================================================================
// Unavailable facts
// =============================================================================

#[test]
fn test_empty_provider_renders_every_panel() {
    let catalogue = panels::standard();
    for (index, panel) in catalogue.panels().iter().enumerate() {
        let surface = render(StaticInfoProvider::new(), index, true);
        let texts: Vec<&str> = surface.texts().collect();
        for field in panel.fields().filter(|field| !field.label.is_empty()) {
            assert!(texts.contains(&field.label), "{} lost {}", panel.title, field.label);
        }
        assert!(texts.contains(&"N/A"), "{} shows no placeholder", panel.title);
    }
}

#[test]
fn test_one_missing_fact_does_not_hide_neighbours() {
    let provider = console_provider().without(Query::BatteryLevel);
    let text = all_text(&render(provider, 2, true));
    assert!(text.contains("N/A"));
    assert!(text.contains("200 (3.9 V)"));
    assert!(text.contains("Connected"));
}

#[test]
fn test_resolve_reports_unavailable() {
    let compositor = Compositor::new(StaticInfoProvider::new(), panels::standard());
    let field = &compositor.catalogue().panels()[1].sections[0].fields[0];
    assert_eq!(compositor.resolve(field, true).value, FieldValue::Unavailable);
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn test_battery_panel_formats() {
    let text = all_text(&render(console_provider(), 2, true));
    assert!(text.contains("87%"));
    assert!(text.contains("Normal"));
    assert!(text.contains("200 (3.9 V)"));
    assert!(text.contains("OFF"));
}

#[test]
fn test_model_annotation() {
    let text = all_text(&render(console_provider(), 1, true));
    assert!(text.contains("New 3DS XL (Retail - EUR)"));
    assert!(text.contains("0000ABCDEF"));
}

#[test]
fn test_misc_panel_formats() {
    let text = all_text(&render(console_provider(), 8, true));
    assert!(text.contains("120 (NAND: 34)"));
    assert!(text.contains("2 (67%)"));
}

#[test]
fn test_wifi_password_hidden_keeps_security_mode() {
    let surface = render(console_provider(), 6, false);
    let text = all_text(&surface);
    assert!(text.contains("home-net"));
    assert!(text.contains("(WPA2-PSK (AES))"));
    assert!(!text.contains("PASS1-SECRET"));
}

#[test]
fn test_storage_groups() {
    let provider = console_provider();
    let surface = render(provider, 7, true);
    let text = all_text(&surface);
    for medium in StorageMedium::ALL {
        assert!(text.contains(medium.title()));
    }
    assert!(text.contains("25%"));
    assert!(text.contains("24.0 GB"));
    assert!(text.contains("32.0 GB"));
}

#[test]
fn test_wifi_slots_are_always_drawn() {
    let text = all_text(&render(StaticInfoProvider::new(), 6, true));
    for slot in WifiSlot::ALL {
        assert!(text.contains(&format!("WiFi slot {}", slot.number())));
    }
}
