//! Fact identifiers and values.
//!
//! A [`Query`] names one platform fact (battery level, Wi-Fi slot SSID,
//! storage usage, ...). Info providers answer a query with a [`Fact`] or a
//! [`QueryError`](crate::error::QueryError).

use serde::Deserialize;
use std::fmt;

/// One of the three stored Wi-Fi connection slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WifiSlot {
    One,
    Two,
    Three,
}

impl WifiSlot {
    pub const ALL: [WifiSlot; 3] = [WifiSlot::One, WifiSlot::Two, WifiSlot::Three];

    /// 1-based slot number as shown to the user.
    pub fn number(self) -> u8 {
        match self {
            WifiSlot::One => 1,
            WifiSlot::Two => 2,
            WifiSlot::Three => 3,
        }
    }
}

/// Storage media reported on the storage panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageMedium {
    Sd,
    CtrNand,
    TwlNand,
    TwlPhoto,
}

impl StorageMedium {
    pub const ALL: [StorageMedium; 4] = [
        StorageMedium::Sd,
        StorageMedium::CtrNand,
        StorageMedium::TwlNand,
        StorageMedium::TwlPhoto,
    ];

    /// Group title on the storage panel.
    pub fn title(self) -> &'static str {
        match self {
            StorageMedium::Sd => "SD",
            StorageMedium::CtrNand => "CTR NAND",
            StorageMedium::TwlNand => "TWL NAND",
            StorageMedium::TwlPhoto => "TWL Photo",
        }
    }

    fn key(self) -> &'static str {
        match self {
            StorageMedium::Sd => "sd",
            StorageMedium::CtrNand => "ctr_nand",
            StorageMedium::TwlNand => "twl_nand",
            StorageMedium::TwlPhoto => "twl_photo",
        }
    }
}

/// Every fact the panel catalogue can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    // Kernel
    KernelVersion,
    FirmVersion,
    SystemVersion,
    InitialSystemVersion,
    SdmcCid,
    NandCid,
    DeviceId,

    // System
    Model,
    RunningHardware,
    Region,
    Language,
    EcsDeviceId,
    OriginalLfcs,
    NandLfcs,
    MacAddress,
    SerialNumber,

    // Battery
    BatteryLevel,
    BatteryCharging,
    BatteryVoltage,
    AdapterConnected,
    McuFirmware,
    PowerSaving,

    // Account
    Nnid,
    PrincipalId,
    PersistentId,
    TransferableIdBase,
    AccountCountry,
    AccountTimeZone,

    // Configuration
    Username,
    Birthday,
    EulaVersion,
    ParentalPin,
    ParentalEmail,
    ParentalSecretAnswer,

    // Hardware
    ScreenType,
    HeadphoneStatus,
    CardSlotStatus,
    SdCardStatus,
    SoundOutput,
    Brightness,
    AutoBrightness,

    // Wi-Fi
    WifiSsid(WifiSlot),
    WifiPassphrase(WifiSlot),
    WifiSecurity(WifiSlot),
    WifiMac(WifiSlot),

    // Storage
    StorageUsage(StorageMedium),
    StorageFree(StorageMedium),
    StorageUsed(StorageMedium),
    StorageTotal(StorageMedium),

    // Misc
    SdTitleCount,
    NandTitleCount,
    TicketCount,
    HomeMenuId,
    WifiStrength,
    HostAddress,
}

impl Query {
    /// All queries, in catalogue order.
    pub fn all() -> Vec<Query> {
        use Query::*;

        let mut queries = vec![
            KernelVersion,
            FirmVersion,
            SystemVersion,
            InitialSystemVersion,
            SdmcCid,
            NandCid,
            DeviceId,
            Model,
            RunningHardware,
            Region,
            Language,
            EcsDeviceId,
            OriginalLfcs,
            NandLfcs,
            MacAddress,
            SerialNumber,
            BatteryLevel,
            BatteryCharging,
            BatteryVoltage,
            AdapterConnected,
            McuFirmware,
            PowerSaving,
            Nnid,
            PrincipalId,
            PersistentId,
            TransferableIdBase,
            AccountCountry,
            AccountTimeZone,
            Username,
            Birthday,
            EulaVersion,
            ParentalPin,
            ParentalEmail,
            ParentalSecretAnswer,
            ScreenType,
            HeadphoneStatus,
            CardSlotStatus,
            SdCardStatus,
            SoundOutput,
            Brightness,
            AutoBrightness,
        ];
        for slot in WifiSlot::ALL {
            queries.extend([
                WifiSsid(slot),
                WifiPassphrase(slot),
                WifiSecurity(slot),
                WifiMac(slot),
            ]);
        }
        for medium in StorageMedium::ALL {
            queries.extend([
                StorageUsage(medium),
                StorageFree(medium),
                StorageUsed(medium),
                StorageTotal(medium),
            ]);
        }
        queries.extend([
            SdTitleCount,
            NandTitleCount,
            TicketCount,
            HomeMenuId,
            WifiStrength,
            HostAddress,
        ]);
        queries
    }

    /// Stable snake_case key, used by fact fixture files and log output.
    pub fn key(&self) -> String {
        use Query::*;

        let fixed = match self {
            KernelVersion => "kernel_version",
            FirmVersion => "firm_version",
            SystemVersion => "system_version",
            InitialSystemVersion => "initial_system_version",
            SdmcCid => "sdmc_cid",
            NandCid => "nand_cid",
            DeviceId => "device_id",
            Model => "model",
            RunningHardware => "running_hardware",
            Region => "region",
            Language => "language",
            EcsDeviceId => "ecs_device_id",
            OriginalLfcs => "original_lfcs",
            NandLfcs => "nand_lfcs",
            MacAddress => "mac_address",
            SerialNumber => "serial_number",
            BatteryLevel => "battery_level",
            BatteryCharging => "battery_charging",
            BatteryVoltage => "battery_voltage",
            AdapterConnected => "adapter_connected",
            McuFirmware => "mcu_firmware",
            PowerSaving => "power_saving",
            Nnid => "nnid",
            PrincipalId => "principal_id",
            PersistentId => "persistent_id",
            TransferableIdBase => "transferable_id_base",
            AccountCountry => "account_country",
            AccountTimeZone => "account_time_zone",
            Username => "username",
            Birthday => "birthday",
            EulaVersion => "eula_version",
            ParentalPin => "parental_pin",
            ParentalEmail => "parental_email",
            ParentalSecretAnswer => "parental_secret_answer",
            ScreenType => "screen_type",
            HeadphoneStatus => "headphone_status",
            CardSlotStatus => "card_slot_status",
            SdCardStatus => "sd_card_status",
            SoundOutput => "sound_output",
            Brightness => "brightness",
            AutoBrightness => "auto_brightness",
            SdTitleCount => "sd_title_count",
            NandTitleCount => "nand_title_count",
            TicketCount => "ticket_count",
            HomeMenuId => "home_menu_id",
            WifiStrength => "wifi_strength",
            HostAddress => "host_address",
            WifiSsid(slot) => return format!("wifi_{}_ssid", slot.number()),
            WifiPassphrase(slot) => return format!("wifi_{}_passphrase", slot.number()),
            WifiSecurity(slot) => return format!("wifi_{}_security", slot.number()),
            WifiMac(slot) => return format!("wifi_{}_mac", slot.number()),
            StorageUsage(medium) => return format!("storage_{}_usage", medium.key()),
            StorageFree(medium) => return format!("storage_{}_free", medium.key()),
            StorageUsed(medium) => return format!("storage_{}_used", medium.key()),
            StorageTotal(medium) => return format!("storage_{}_total", medium.key()),
        };
        fixed.to_string()
    }

    /// Inverse of [`Query::key`].
    pub fn from_key(key: &str) -> Option<Query> {
        Query::all().into_iter().find(|query| query.key() == key)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// A resolved fact value.
///
/// Deserializes untagged from JSON: booleans become [`Fact::Flag`], non-negative
/// integers [`Fact::Unsigned`], strings [`Fact::Text`] and
/// `{"used": .., "total": ..}` objects [`Fact::Usage`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Fact {
    Flag(bool),
    Unsigned(u64),
    Text(String),
    Usage { used: u64, total: u64 },
}

impl Fact {
    pub fn text(value: impl Into<String>) -> Self {
        Fact::Text(value.into())
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fact::Flag(true) => f.write_str("ON"),
            Fact::Flag(false) => f.write_str("OFF"),
            Fact::Unsigned(value) => write!(f, "{}", value),
            Fact::Text(value) => f.write_str(value),
            Fact::Usage { used, total } => write!(f, "{}/{}", used, total),
        }
    }
}
