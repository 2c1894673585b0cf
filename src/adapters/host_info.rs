//! Info provider for a Linux host.
//!
//! Only facts with a host analogue are answered: kernel and OS versions from
//! sysinfo, battery and adapter state from `/sys/class/power_supply`, DMI
//! strings, the machine id, the primary MAC address, the host name, and
//! usage of a few fixed mount points standing in for the storage media.
//! Everything else is [`QueryError::NotApplicable`].
//!
//! Every query reads the host afresh. Disk figures come from a sysinfo disk
//! list kept across queries and refreshed on each storage query.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use sysinfo::{Disks, Networks, System};

use crate::error::{classify_io_error, QueryError, QueryResult};
use crate::models::{Fact, Query, StorageMedium};
use crate::traits::InfoProvider;

const SYSFS_ROOT: &str = "/sys";
const MACHINE_ID: &str = "/etc/machine-id";

/// Full-scale battery voltage of the raw byte reading.
const VOLTAGE_FULL_SCALE: f64 = 5.0;

/// Space figures for one mounted filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountUsage {
    pub mount_point: PathBuf,
    pub available: u64,
    pub total: u64,
}

impl MountUsage {
    pub fn used(&self) -> u64 {
        self.total.saturating_sub(self.available)
    }
}

/// Produces the current mount table each time it is called.
pub type MountReader = Box<dyn Fn() -> Vec<MountUsage> + Send + Sync>;

pub struct HostInfoProvider {
    sysfs_root: PathBuf,
    machine_id: PathBuf,
    mounts: MountReader,
}

impl HostInfoProvider {
    pub fn new() -> Self {
        let disks = Mutex::new(Disks::new_with_refreshed_list());
        Self {
            sysfs_root: PathBuf::from(SYSFS_ROOT),
            machine_id: PathBuf::from(MACHINE_ID),
            mounts: Box::new(move || host_mounts(&disks)),
        }
    }

    /// Read sysfs attributes below `root` instead of `/sys`.
    pub fn with_sysfs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.sysfs_root = root.into();
        self
    }

    pub fn with_machine_id(mut self, path: impl Into<PathBuf>) -> Self {
        self.machine_id = path.into();
        self
    }

    /// Use a fixed mount table.
    pub fn with_mounts(self, mounts: Vec<MountUsage>) -> Self {
        self.with_mount_reader(move || mounts.clone())
    }

    /// Read the mount table through `reader` on every storage query.
    pub fn with_mount_reader<F>(mut self, reader: F) -> Self
    where
        F: Fn() -> Vec<MountUsage> + Send + Sync + 'static,
    {
        self.mounts = Box::new(reader);
        self
    }

    /// Host mount point standing in for each storage medium.
    pub fn mount_point(medium: StorageMedium) -> &'static Path {
        Path::new(match medium {
            StorageMedium::Sd => "/",
            StorageMedium::CtrNand => "/boot",
            StorageMedium::TwlNand => "/var",
            StorageMedium::TwlPhoto => "/home",
        })
    }

    fn mount(&self, medium: StorageMedium, query: Query) -> QueryResult<MountUsage> {
        let target = Self::mount_point(medium);
        (self.mounts)()
            .into_iter()
            .find(|mount| mount.mount_point == target)
            .ok_or(QueryError::NotApplicable { query })
    }

    fn read_trimmed(&self, path: &Path, query: Query) -> QueryResult<String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| classify_io_error(e, path, query))?;
        let value = content.trim();
        if value.is_empty() {
            return Err(QueryError::Missing { query });
        }
        Ok(value.to_string())
    }

    fn read_sysfs(&self, relative: &str, query: Query) -> QueryResult<String> {
        self.read_trimmed(&self.sysfs_root.join(relative), query)
    }

    fn read_number(&self, path: &Path, query: Query) -> QueryResult<u64> {
        let raw = self.read_trimmed(path, query)?;
        raw.parse::<u64>()
            .map_err(|_| QueryError::parse(query, format!("'{}' is not a number", raw)))
    }

    /// First power supply whose `type` attribute equals `kind`.
    fn power_supply(&self, kind: &str, query: Query) -> QueryResult<PathBuf> {
        let class = self.sysfs_root.join("class/power_supply");
        let entries = std::fs::read_dir(&class).map_err(|e| classify_io_error(e, &class, query))?;

        let mut supplies: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| {
                std::fs::read_to_string(path.join("type"))
                    .map(|t| t.trim() == kind)
                    .unwrap_or(false)
            })
            .collect();
        supplies.sort();
        supplies
            .into_iter()
            .next()
            .ok_or(QueryError::NotApplicable { query })
    }

    fn battery_attribute(&self, attribute: &str, query: Query) -> QueryResult<PathBuf> {
        Ok(self.power_supply("Battery", query)?.join(attribute))
    }

    fn battery_voltage(&self, query: Query) -> QueryResult<Fact> {
        let path = self.battery_attribute("voltage_now", query)?;
        let microvolts = self.read_number(&path, query)?;
        Ok(Fact::Unsigned(voltage_to_raw(microvolts)))
    }
}

impl Default for HostInfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Refresh the space figures of every known disk and report them.
fn host_mounts(disks: &Mutex<Disks>) -> Vec<MountUsage> {
    let mut disks = disks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    disks.refresh();
    disks
        .list()
        .iter()
        .map(|disk| MountUsage {
            mount_point: disk.mount_point().to_path_buf(),
            available: disk.available_space(),
            total: disk.total_space(),
        })
        .collect()
}

/// MAC address of the first non-loopback interface, by name.
fn primary_mac() -> Option<String> {
    let networks = Networks::new_with_refreshed_list();
    let mut interfaces: Vec<_> = networks
        .iter()
        .filter(|(name, _)| name.as_str() != "lo")
        .map(|(name, data)| (name.clone(), data.mac_address().to_string()))
        .filter(|(_, mac)| mac != "00:00:00:00:00:00")
        .collect();
    interfaces.sort();
    interfaces.into_iter().next().map(|(_, mac)| mac)
}

fn env_fact(name: &str, query: Query) -> QueryResult<Fact> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(Fact::Text)
        .ok_or(QueryError::Missing { query })
}

/// Battery voltage in microvolts as the raw byte the voltage format expects.
pub fn voltage_to_raw(microvolts: u64) -> u64 {
    let volts = microvolts as f64 / 1_000_000.0;
    (volts * 256.0 / VOLTAGE_FULL_SCALE).round().clamp(0.0, 255.0) as u64
}

impl InfoProvider for HostInfoProvider {
    fn query(&self, query: Query) -> QueryResult<Fact> {
        use Query::*;

        match query {
            KernelVersion => System::kernel_version()
                .map(Fact::Text)
                .ok_or(QueryError::NotApplicable { query }),
            SystemVersion => System::long_os_version()
                .map(Fact::Text)
                .ok_or(QueryError::NotApplicable { query }),
            FirmVersion => self
                .read_sysfs("class/dmi/id/bios_version", query)
                .map(Fact::Text),
            Model => self
                .read_sysfs("class/dmi/id/product_name", query)
                .map(Fact::Text),
            RunningHardware => Ok(Fact::text(std::env::consts::ARCH)),
            Language => env_fact("LANG", query),
            Username => env_fact("USER", query),
            SerialNumber => self.read_trimmed(&self.machine_id, query).map(Fact::Text),
            MacAddress => primary_mac()
                .map(Fact::Text)
                .ok_or(QueryError::NotApplicable { query }),
            HostAddress => hostname::get()
                .ok()
                .and_then(|name| name.into_string().ok())
                .map(Fact::Text)
                .ok_or(QueryError::Missing { query }),

            BatteryLevel => {
                let path = self.battery_attribute("capacity", query)?;
                self.read_number(&path, query).map(Fact::Unsigned)
            }
            BatteryCharging => {
                let path = self.battery_attribute("status", query)?;
                let status = self.read_trimmed(&path, query)?;
                Ok(Fact::Flag(status == "Charging"))
            }
            BatteryVoltage => self.battery_voltage(query),
            AdapterConnected => {
                let path = self.power_supply("Mains", query)?.join("online");
                self.read_number(&path, query).map(|online| Fact::Flag(online != 0))
            }

            StorageUsage(medium) => {
                let mount = self.mount(medium, query)?;
                Ok(Fact::Usage {
                    used: mount.used(),
                    total: mount.total,
                })
            }
            StorageFree(medium) => Ok(Fact::Unsigned(self.mount(medium, query)?.available)),
            StorageUsed(medium) => Ok(Fact::Unsigned(self.mount(medium, query)?.used())),
            StorageTotal(medium) => Ok(Fact::Unsigned(self.mount(medium, query)?.total)),

            _ => Err(QueryError::NotApplicable { query }),
        }
    }
}
