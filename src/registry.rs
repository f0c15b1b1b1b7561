extern crate winreg;            // Windows registry access

use crate::{data_defs::*, sources::RawSource};
use log::debug;
use winreg::enums::*;
use winreg::RegKey;

const RUN_KEYS: [&str; 4] = [
    "Software\\Microsoft\\Windows\\CurrentVersion\\Run",
    "Software\\Microsoft\\Windows\\CurrentVersion\\RunOnce",
    "Software\\Wow6432Node\\Microsoft\\Windows\\CurrentVersion\\Run",
    "Software\\Wow6432Node\\Microsoft\\Windows\\CurrentVersion\\RunOnce",
];

const SERVICES_KEY: &str = "System\\CurrentControlSet\\Services";

// hive label used in the record location
fn hive_name(
                hive: HKEY
            ) -> &'static str
{
    if hive == HKEY_LOCAL_MACHINE {
        "LOCAL_MACHINE"
    } else if hive == HKEY_CURRENT_USER {
        "CURRENT_USER"
    } else {
        ""
    }
}

fn open_key(
                hive: HKEY,
                key: &str
            ) -> Option<RegKey>
{
    match RegKey::predef(hive).open_subkey_with_flags(key, KEY_READ) {
        Ok(k) => Some(k),
        Err(e) => {
            debug!("[autorun_hunter] Could not open {}\\{key}: {e}", hive_name(hive));
            None
        }
    }
}

// every string value under the Run and RunOnce keys of HKLM and HKCU
pub struct RunKeys;

impl RawSource for RunKeys {
    fn entries(&self) -> Vec<RawEntry> {
        let mut entries = vec![];
        for hive in [HKEY_LOCAL_MACHINE, HKEY_CURRENT_USER] {
            for key in RUN_KEYS {
                let k = match open_key(hive, key) {
                    Some(k) => k,
                    None => continue,
                };
                let location = format!("{}\\{}", hive_name(hive), key);
                for value_result in k.enum_values() {
                    let name = match value_result {
                        Ok((n, _)) => n,
                        _ => continue,
                    };
                    // REG_SZ and REG_EXPAND_SZ only
                    let value: String = match k.get_value(&name) {
                        Ok(v) => v,
                        _ => continue,
                    };
                    if value.is_empty() { continue }
                    entries.push(RawEntry::new(EntryType::RunKey, &location, &value, true, &name));
                }
            }
        }
        entries
    }
}

// ImagePath of every service registered under HKLM
pub struct Services;

impl RawSource for Services {
    fn entries(&self) -> Vec<RawEntry> {
        let mut entries = vec![];
        let services = match open_key(HKEY_LOCAL_MACHINE, SERVICES_KEY) {
            Some(s) => s,
            None => return entries,
        };
        let names: Vec<String> = services.enum_keys().filter_map(Result::ok).collect();
        for name in names {
            let subkey_path = format!("{}\\{}", SERVICES_KEY, name);
            let image_path: String = match services
                .open_subkey_with_flags(&name, KEY_READ)
                .and_then(|s| s.get_value("ImagePath"))
            {
                Ok(p) => p,
                _ => continue,
            };
            let location = format!("{}\\{}", hive_name(HKEY_LOCAL_MACHINE), subkey_path);
            entries.push(RawEntry::new(EntryType::Service, &location, &image_path, true, ""));
        }
        entries
    }
}
