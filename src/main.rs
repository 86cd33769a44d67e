// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_gallery - photo gallery with a full-screen viewer

USAGE:
  iced_gallery [OPTIONS] [DIRECTORY]

ARGS:
  [DIRECTORY]          Directory to browse (defaults to the current directory)

OPTIONS:
  --open INDEX         Open the viewer at the given zero-based position
  --config-dir PATH    Read settings.toml from PATH
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_gallery=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let open_index = args.opt_value_from_str::<_, usize>("--open").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --open");
        None
    });
    let config_dir = args
        .opt_value_from_str::<_, String>("--config-dir")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        });
    let directory = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    app::run(Flags {
        directory,
        open_index,
        config_dir,
    })
}
