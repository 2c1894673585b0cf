//! The standard panel catalogue.
//!
//! Nine panels, each a thin declarative binding from labels to queries.
//! Fields marked `sensitive()` are redacted unless reveal mode is on.
//!
//! Geometry is static: every WiFi slot group is drawn even when the slot is
//! empty, with `N/A` rows, rather than dropping the box or its failed rows.

use once_cell::sync::Lazy;
use ratatui::layout::Rect;
use std::sync::Arc;

use crate::models::format::{SIGNAL, VOLTAGE};
use crate::models::{
    Annotation, Catalogue, FieldDescriptor as Field, FieldFormat, Panel, Query, Section,
    StorageMedium, WifiSlot,
};

static STANDARD: Lazy<Arc<Catalogue>> = Lazy::new(|| {
    let panels = vec![
        kernel(),
        system(),
        battery(),
        account(),
        config(),
        hardware(),
        wifi(),
        storage(),
        misc(),
    ];
    Arc::new(Catalogue::new(panels).expect("standard catalogue has panels"))
});

/// Shared handle to the standard catalogue.
pub fn standard() -> Arc<Catalogue> {
    Arc::clone(&STANDARD)
}

const ON_OFF: FieldFormat = FieldFormat::Toggle {
    on: "ON",
    off: "OFF",
};

fn kernel() -> Panel {
    Panel::new("Kernel").with_section(Section::list(vec![
        Field::text("Kernel version:", Query::KernelVersion),
        Field::text("FIRM version:", Query::FirmVersion),
        Field::text("System version:", Query::SystemVersion),
        Field::text("Initial system version:", Query::InitialSystemVersion),
        Field::text("SDMC CID:", Query::SdmcCid).sensitive(),
        Field::text("NAND CID:", Query::NandCid).sensitive(),
        Field::new("Device ID:", Query::DeviceId, FieldFormat::Integer).sensitive(),
    ]))
}

fn system() -> Panel {
    Panel::new("System").with_section(Section::list(vec![
        Field::text("Model:", Query::Model)
            .annotated(Annotation::new([Query::RunningHardware, Query::Region])),
        Field::text("Language:", Query::Language),
        Field::new("ECS device ID:", Query::EcsDeviceId, FieldFormat::Integer).sensitive(),
        Field::new(
            "Original LFCS:",
            Query::OriginalLfcs,
            FieldFormat::Hex { width: 10 },
        )
        .sensitive(),
        Field::text("NAND LFCS:", Query::NandLfcs).sensitive(),
        Field::text("MAC address:", Query::MacAddress).sensitive(),
        Field::text("Serial number:", Query::SerialNumber).sensitive(),
    ]))
}

fn battery() -> Panel {
    Panel::new("Battery").with_section(Section::list(vec![
        Field::new("Battery level:", Query::BatteryLevel, FieldFormat::Percentage),
        Field::new(
            "Battery state:",
            Query::BatteryCharging,
            FieldFormat::Toggle {
                on: "Charging",
                off: "Normal",
            },
        ),
        Field::new("Battery voltage:", Query::BatteryVoltage, VOLTAGE),
        Field::new(
            "Adapter state:",
            Query::AdapterConnected,
            FieldFormat::Toggle {
                on: "Connected",
                off: "Disconnected",
            },
        ),
        Field::text("MCU firmware:", Query::McuFirmware),
        Field::new("Power saving mode:", Query::PowerSaving, ON_OFF),
    ]))
}

fn account() -> Panel {
    Panel::new("NNID").with_section(Section::list(vec![
        Field::text("NNID:", Query::Nnid).sensitive(),
        Field::new("Principal ID:", Query::PrincipalId, FieldFormat::Integer).sensitive(),
        Field::new("Persistent ID:", Query::PersistentId, FieldFormat::Integer).sensitive(),
        Field::new(
            "Transferable ID base:",
            Query::TransferableIdBase,
            FieldFormat::Integer,
        )
        .sensitive(),
        Field::text("Country:", Query::AccountCountry).sensitive(),
        Field::text("Time zone:", Query::AccountTimeZone).sensitive(),
    ]))
}

fn config() -> Panel {
    Panel::new("Config").with_section(Section::list(vec![
        Field::text("Username:", Query::Username),
        Field::text("Birthday:", Query::Birthday).sensitive(),
        Field::text("EULA version:", Query::EulaVersion),
        Field::text("Parental control PIN:", Query::ParentalPin).sensitive(),
        Field::text("Email address:", Query::ParentalEmail).sensitive(),
        Field::text("Secret answer:", Query::ParentalSecretAnswer).sensitive(),
    ]))
}

fn hardware() -> Panel {
    Panel::new("Hardware").with_section(Section::list(vec![
        Field::text("Screen type:", Query::ScreenType),
        Field::text("Headphones:", Query::HeadphoneStatus),
        Field::text("Card slot:", Query::CardSlotStatus),
        Field::text("SD card:", Query::SdCardStatus),
        Field::text("Sound output:", Query::SoundOutput),
        Field::text("Brightness level:", Query::Brightness).annotated(
            Annotation::new([Query::AutoBrightness]).with_prefix("auto brightness "),
        ),
    ]))
}

fn wifi() -> Panel {
    const TITLES: [&str; 3] = ["WiFi slot 1", "WiFi slot 2", "WiFi slot 3"];

    WifiSlot::ALL
        .into_iter()
        .zip(TITLES)
        .enumerate()
        .fold(Panel::new("WiFi"), |panel, (row, (slot, title))| {
            let bounds = Rect::new(2, 2 + 6 * row as u16, 60, 6);
            panel.with_section(Section::group(
                title,
                bounds,
                vec![
                    Field::text("SSID:", Query::WifiSsid(slot)),
                    Field::text("Password:", Query::WifiPassphrase(slot))
                        .sensitive()
                        .annotated(Annotation::new([Query::WifiSecurity(slot)])),
                    Field::text("MAC address:", Query::WifiMac(slot)).sensitive(),
                ],
            ))
        })
}

fn storage() -> Panel {
    StorageMedium::ALL
        .into_iter()
        .enumerate()
        .fold(Panel::new("Storage"), |panel, (cell, medium)| {
            let column = (cell % 2) as u16;
            let row = (cell / 2) as u16;
            let bounds = Rect::new(1 + 31 * column, 2 + 8 * row, 30, 7);
            panel.with_section(Section::group(
                medium.title(),
                bounds,
                vec![
                    Field::new("", Query::StorageUsage(medium), FieldFormat::Meter),
                    Field::new("Free:", Query::StorageFree(medium), FieldFormat::ByteSize),
                    Field::new("Used:", Query::StorageUsed(medium), FieldFormat::ByteSize),
                    Field::new("Total:", Query::StorageTotal(medium), FieldFormat::ByteSize),
                ],
            ))
        })
}

fn misc() -> Panel {
    Panel::new("Misc").with_section(Section::list(vec![
        Field::new("Installed titles (SD):", Query::SdTitleCount, FieldFormat::Integer)
            .annotated(Annotation::new([Query::NandTitleCount]).with_prefix("NAND: ")),
        Field::new("Installed tickets:", Query::TicketCount, FieldFormat::Integer),
        Field::new("Home menu ID:", Query::HomeMenuId, FieldFormat::Hex { width: 16 }),
        Field::new("WiFi signal strength:", Query::WifiStrength, SIGNAL),
        Field::text("IP:", Query::HostAddress).sensitive(),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensitive_queries(panel: &Panel) -> Vec<Query> {
        panel
            .fields()
            .filter(|field| field.sensitive)
            .map(|field| field.query)
            .collect()
    }

    #[test]
    fn test_standard_catalogue_has_nine_panels_in_order() {
        let catalogue = standard();
        assert_eq!(
            catalogue.titles().collect::<Vec<_>>(),
            vec![
                "Kernel", "System", "Battery", "NNID", "Config", "Hardware", "WiFi", "Storage",
                "Misc"
            ]
        );
    }

    #[test]
    fn test_kernel_identifiers_are_sensitive() {
        let catalogue = standard();
        let kernel = catalogue.get(0).unwrap();
        assert_eq!(kernel.fields().count(), 7);
        assert_eq!(
            sensitive_queries(kernel),
            vec![Query::SdmcCid, Query::NandCid, Query::DeviceId]
        );
    }

    #[test]
    fn test_account_panel_is_entirely_sensitive() {
        let catalogue = standard();
        let account = catalogue.get(3).unwrap();
        assert!(account.fields().all(|field| field.sensitive));
    }

    #[test]
    fn test_battery_panel_has_no_sensitive_fields() {
        let catalogue = standard();
        assert!(sensitive_queries(catalogue.get(2).unwrap()).is_empty());
    }

    #[test]
    fn test_wifi_panel_has_three_slots() {
        let catalogue = standard();
        let wifi = catalogue.get(6).unwrap();
        assert_eq!(wifi.sections.len(), 3);
        for (section, slot) in wifi.sections.iter().zip(WifiSlot::ALL) {
            assert_eq!(section.fields.len(), 3);
            assert!(!section.fields[0].sensitive, "SSID is shown");
            assert_eq!(section.fields[1].query, Query::WifiPassphrase(slot));
            assert!(section.fields[1].sensitive);
            assert!(section.fields[2].sensitive);
        }
    }

    #[test]
    fn test_storage_panel_covers_four_media() {
        let catalogue = standard();
        let storage = catalogue.get(7).unwrap();
        let titles: Vec<_> = storage.sections.iter().filter_map(|s| s.title).collect();
        assert_eq!(titles, vec!["SD", "CTR NAND", "TWL NAND", "TWL Photo"]);
        assert!(storage.fields().all(|field| !field.sensitive));
    }

    #[test]
    fn test_sections_fit_detail_surface() {
        let surface = crate::ui::layout::DETAIL_SURFACE;
        let bounds = Rect::new(0, 0, surface.width, surface.height);
        for panel in standard().panels() {
            for section in &panel.sections {
                assert_eq!(
                    section.bounds.intersection(bounds),
                    section.bounds,
                    "{} section escapes the detail surface",
                    panel.title
                );
            }
        }
    }

    #[test]
    fn test_storage_groups_do_not_overlap() {
        let catalogue = standard();
        let storage = catalogue.get(7).unwrap();
        for (i, a) in storage.sections.iter().enumerate() {
            for b in storage.sections.iter().skip(i + 1) {
                assert!(!a.bounds.intersects(b.bounds));
            }
        }
    }
}
