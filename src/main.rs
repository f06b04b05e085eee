// SPDX-License-Identifier: MPL-2.0
use log::LevelFilter;
use menu_gallery::app::{self, paths, Flags};
use simple_logger::SimpleLogger;

const HELP: &str = "\
menu_gallery - storefront menu gallery

USAGE:
  menu_gallery [OPTIONS] [INDEX]

ARGS:
  <INDEX>               Open the viewer on this image (0-based)

OPTIONS:
  --lang <LOCALE>       Interface language, e.g. en-US or fr
  --config-dir <DIR>    Directory holding settings.toml
  --assets-dir <DIR>    Directory holding the img/ folder
  -h, --help            Print this help
";

fn main() -> iced::Result {
    if let Err(err) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("Logger already initialized: {err}");
    }

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let assets_dir = args.opt_value_from_str("--assets-dir")?;
    let initial_index = args.opt_free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", rest);
    }

    Ok(Flags {
        lang,
        config_dir,
        assets_dir,
        initial_index,
    })
}
