//! Common test utilities for integration tests.

#![allow(dead_code)]

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use sysident::adapters::mock::StaticInfoProvider;
use sysident::input::InputSnapshot;
use sysident::models::{Fact, Query, StorageMedium, WifiSlot};
use sysident::ui::layout::{MIN_HEIGHT, MIN_WIDTH, PANEL_ZONES};

/// Values that must never appear on screen while reveal mode is off.
pub const SECRETS: &[(Query, &str)] = &[
    (Query::SdmcCid, "SDMC-SECRET-CID"),
    (Query::NandCid, "NAND-SECRET-CID"),
    (Query::SerialNumber, "SERIAL-SECRET"),
    (Query::MacAddress, "MAC-SECRET"),
    (Query::NandLfcs, "LFCS-SECRET"),
    (Query::Nnid, "NNID-SECRET"),
    (Query::AccountCountry, "COUNTRY-SECRET"),
    (Query::AccountTimeZone, "TZ-SECRET"),
    (Query::Birthday, "BIRTHDAY-SECRET"),
    (Query::ParentalPin, "PIN-SECRET"),
    (Query::ParentalEmail, "EMAIL-SECRET"),
    (Query::ParentalSecretAnswer, "ANSWER-SECRET"),
    (Query::WifiPassphrase(WifiSlot::One), "PASS1-SECRET"),
    (Query::WifiMac(WifiSlot::Two), "WMAC2-SECRET"),
    (Query::HostAddress, "IP-SECRET"),
];

/// A provider that looks like a retail console, with a few facts missing.
pub fn console_provider() -> StaticInfoProvider {
    let mut provider = StaticInfoProvider::new()
        .with(Query::KernelVersion, Fact::text("2.55-0"))
        .with(Query::FirmVersion, Fact::text("2.55-0"))
        .with(Query::SystemVersion, Fact::text("11.17.0-50E"))
        .with(Query::Model, Fact::text("New 3DS XL"))
        .with(Query::RunningHardware, Fact::text("Retail"))
        .with(Query::Region, Fact::text("EUR"))
        .with(Query::Language, Fact::text("English"))
        .with(Query::DeviceId, Fact::Unsigned(123_456_789))
        .with(Query::OriginalLfcs, Fact::Unsigned(0xABCDEF))
        .with(Query::BatteryLevel, Fact::Unsigned(87))
        .with(Query::BatteryCharging, Fact::Flag(false))
        .with(Query::BatteryVoltage, Fact::Unsigned(200))
        .with(Query::AdapterConnected, Fact::Flag(true))
        .with(Query::McuFirmware, Fact::text("3.9"))
        .with(Query::PowerSaving, Fact::Flag(false))
        .with(Query::Username, Fact::text("Yoshi"))
        .with(Query::Brightness, Fact::text("3"))
        .with(Query::AutoBrightness, Fact::Flag(false))
        .with(Query::WifiSsid(WifiSlot::One), Fact::text("home-net"))
        .with(Query::WifiSecurity(WifiSlot::One), Fact::text("WPA2-PSK (AES)"))
        .with(Query::SdTitleCount, Fact::Unsigned(120))
        .with(Query::NandTitleCount, Fact::Unsigned(34))
        .with(Query::WifiStrength, Fact::Unsigned(2))
        .with(
            Query::StorageUsage(StorageMedium::Sd),
            Fact::Usage {
                used: 8 * 1024 * 1024 * 1024,
                total: 32 * 1024 * 1024 * 1024,
            },
        )
        .with(
            Query::StorageFree(StorageMedium::Sd),
            Fact::Unsigned(24 * 1024 * 1024 * 1024),
        )
        .with(
            Query::StorageTotal(StorageMedium::Sd),
            Fact::Unsigned(32 * 1024 * 1024 * 1024),
        );
    for (query, secret) in SECRETS {
        provider = provider.with(*query, Fact::text(*secret));
    }
    provider
}

pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(MIN_WIDTH, MIN_HEIGHT)).unwrap()
}

/// Whole buffer as text, one line per row.
pub fn screen_text(buf: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// A touch in the middle of panel `index`'s list entry.
pub fn touch_panel(index: usize) -> InputSnapshot {
    let zone = PANEL_ZONES.with_count(index + 1).zone(index);
    InputSnapshot::touch_at(zone.x + zone.width / 2, zone.y)
}
