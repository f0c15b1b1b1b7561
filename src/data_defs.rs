extern crate serde;             // needed for json serialization
extern crate serde_derive;      // needed for json serialization
extern crate serde_json;        // needed for json serialization
extern crate docopt;
extern crate whoami;

use serde::Serialize;
use serde_derive::Deserialize;
use std::io::prelude::Write;
use docopt::Docopt;

pub const USAGE: &'static str = "
Autorun Hunter
    Inventory programs launched at logon, boot and startup.
    Each finding is resolved to an executable path plus arguments and hashed.

Usage:
    autorun_hunter [options]
    autorun_hunter [-rst] [-v] [--destination <ip> --port <port>]
    autorun_hunter --help

Options:
    Sources (default is all, always reported in this order):
        -r, --runkeys               Registry Run and RunOnce keys
        -s, --services              Service ImagePath values
        -t, --startup               Files in the Start Menu StartUp folders

    Network output:
        -d, --destination <ip>      IP address to send output to [default: NONE]
        -p, --port <port>           Destination port to send output to [default: 80]

    Misc:
        -h, --help                  Show this screen
        -v, --verbose               Log every resolution failure to stderr

Note:
    Records are written as one json object per line to stdout unless --destination is given.
    To capture output remotely, start a netcat listener on your port of choice.
    Use the -k option with netcat to prevent netcat from closing after a TCP connection is closed.

    Values that cannot be resolved are still reported: image_path keeps the raw value
    and the digests are empty when the file cannot be read.
";

#[derive(Debug, Deserialize)]
pub struct Args {
    // what to collect
    pub flag_runkeys: bool,
    pub flag_services: bool,
    pub flag_startup: bool,

    // cmd line options for network output
    pub flag_destination: String,
    pub flag_port: u16,

    //misc.
    pub flag_verbose: bool,
}

lazy_static! {
    pub static ref DEVICE_NAME: String = whoami::devicename();
    pub static ref DEVICE_TYPE: String = whoami::distro();
}

lazy_static! {
    pub static ref ARGS: Args = Docopt::new(USAGE)
                    .and_then(|d| d.deserialize())
                    .unwrap_or_else(|e| e.exit());
}

impl Args {
    // no source selected means collect everything
    pub fn wants(&self, entry_type: EntryType) -> bool {
        let any = self.flag_runkeys || self.flag_services || self.flag_startup;
        !any || match entry_type {
            EntryType::RunKey => self.flag_runkeys,
            EntryType::Service => self.flag_services,
            EntryType::Startup => self.flag_startup,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    RunKey,
    Service,
    Startup,
}

/// One raw finding as handed over by a source, before any resolution
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub entry_type: EntryType,
    pub location: String,
    pub value: String,
    pub parse: bool,
    pub name: String,
}

impl RawEntry {
    pub fn new(
        entry_type: EntryType,
        location: &str,
        value: &str,
        parse: bool,
        name: &str) -> RawEntry {
        RawEntry {
            entry_type,
            location: location.to_string(),
            value: value.to_string(),
            parse,
            name: name.to_string(),
        }
    }
}

/*
    Canonical autorun record, built once per raw finding and never updated.
    launch_string is always the raw value exactly as the source gave it.
*/
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Autorun {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub location: String,
    pub image_path: String,
    pub image_name: String,
    pub arguments: String,
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    pub entry: String,
    pub launch_string: String,
}

/*
    Help provided by Yandros on using traits:
        https://users.rust-lang.org/t/refactor-struct-fn-with-macro/40093
*/
type Str = ::std::borrow::Cow<'static, str>;
trait Loggable : Serialize {
    /// convert struct to json
    fn to_log (self: &'_ Self) -> Str
    {
        ::serde_json::to_string(&self)
            .ok()
            .map_or("<failed to serialize>".into(), Into::into)
    }

    /// convert struct to json and report it out
    fn write_log (self: &'_ Self) -> std::io::Result<()>
    {
        if !ARGS.flag_destination.eq("NONE") {
            let socket = format!("{}:{}", ARGS.flag_destination, ARGS.flag_port);
            let mut stream = ::std::net::TcpStream::connect(socket)?;
            writeln!(stream, "{}", self.to_log())
        } else {
            let stdout = ::std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", self.to_log())
        }
    }
}
impl<T : ?Sized + Serialize> Loggable for T {}

// report envelope: who and when, followed by the record itself
#[derive(Serialize)]
pub struct TxAutorun {
    pub data_type: String,
    pub timestamp: String,
    pub device_name: String,
    pub device_domain: String,
    pub device_type: String,
    #[serde(flatten)]
    pub autorun: Autorun,
}
impl TxAutorun {
    pub fn new(
        timestamp: String,
        device_domain: String,
        autorun: Autorun) -> TxAutorun {
        TxAutorun {
            data_type: "Autorun".to_string(),
            timestamp,
            device_name: DEVICE_NAME.to_owned(),
            device_domain,
            device_type: DEVICE_TYPE.to_owned(),
            autorun,
        }
    }

    // convert struct to json and report it out
    pub fn report_log(&self) -> std::io::Result<()> {
        self.write_log()
    }
}
