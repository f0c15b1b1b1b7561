/*
    Purpose: Inventory Windows autoruns; Run/RunOnce keys, services and StartUp folders.

    Every finding is resolved to the executable it launches, split from its arguments
    and hashed. A value that cannot be resolved is still reported with its raw launch string.

    Compiling:
        x32: cargo build --release --target i686-pc-windows-msvc
        x64: cargo build --release --target x86_64-pc-windows-msvc
*/
extern crate regex;
extern crate simplelog;         // stderr logging, stdout only carries records

#[macro_use] extern crate lazy_static;

mod collect;
mod data_defs;
mod environment;
mod error;
mod file;
mod locate;
mod mutate;
mod normalize;
#[cfg(windows)]
mod registry;
mod resolve;
mod sources;
mod time;

use {collect::*, data_defs::*, environment::*, sources::*, time::*};
use log::{warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;


fn init_logging(
                verbose: bool
            )
{
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("[autorun_hunter] Could not start logging: {e}");
    }
}

/*
    Sources in the reference order: run keys, services, then startup files.
    The registry is only reachable on Windows.
*/
fn select_sources(
                env: &Environment
            ) -> Vec<Box<dyn RawSource>>
{
    let mut sources: Vec<Box<dyn RawSource>> = vec![];
    if ARGS.wants(EntryType::RunKey) {
        #[cfg(windows)]
        sources.push(Box::new(registry::RunKeys));
        #[cfg(not(windows))]
        warn!("[autorun_hunter] Registry run keys are only available on Windows");
    }
    if ARGS.wants(EntryType::Service) {
        #[cfg(windows)]
        sources.push(Box::new(registry::Services));
        #[cfg(not(windows))]
        warn!("[autorun_hunter] Services are only available on Windows");
    }
    if ARGS.wants(EntryType::Startup) {
        sources.push(Box::new(StartupFolders::from_environment(env)));
    }
    sources
}

fn main() -> io::Result<()>
{
    init_logging(ARGS.flag_verbose);

    let mut collector = Collector::new(Environment::from_process());
    let sources = select_sources(collector.environment());
    let records = collector.scan(&sources);

    let timestamp = get_now();
    let domain = collector.environment().get("USERDOMAIN").unwrap_or("").to_string();
    for record in records {
        TxAutorun::new(timestamp.clone(), domain.clone(), record).report_log()?;
    }

    Ok(())
}
