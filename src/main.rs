// SPDX-License-Identifier: MPL-2.0
use gobarber::app::{self, Flags};

const HELP: &str = "\
GoBarber toast playground

USAGE:
  gobarber [OPTIONS]

OPTIONS:
  --config-dir <DIR>    Read settings.toml from DIR
  --log-level <FILTER>  Tracing filter (overrides RUST_LOG), e.g. gobarber=debug
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("Ignoring --config-dir: {err}");
            None
        }),
        log_level: args.opt_value_from_str("--log-level").unwrap_or_else(|err| {
            eprintln!("Ignoring --log-level: {err}");
            None
        }),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        eprintln!("Ignoring unknown arguments: {unused:?}");
    }

    app::logging::init(flags.log_level.as_deref());
    app::run(flags)
}
