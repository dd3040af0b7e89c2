// SPDX-License-Identifier: MPL-2.0
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bulk_notify::app::{self, paths, Flags};
use bulk_notify::logging::{self, LoggingConfig};

const HELP: &str = "\
bulk_notify - compose and dispatch bulk notifications

USAGE:
  bulk_notify [OPTIONS]

OPTIONS:
  -h, --help               Print help information
      --lang <LOCALE>      Interface language (e.g. en-US, fr)
      --i18n-dir <DIR>     Extra directory of .ftl translation files
      --config-dir <DIR>   Directory holding settings.toml
      --directory <FILE>   Audience directory file (TOML)
      --debug              Enable debug logging
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let debug = args.contains("--debug");
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        directory_file: args.opt_value_from_str("--directory").unwrap_or(None),
    };

    if let Err(err) = logging::init(LoggingConfig { debug }) {
        eprintln!("Failed to initialize logging: {err}");
    }

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
