// SPDX-License-Identifier: MPL-2.0
use animated_tabs::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("animated_tabs=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        assets_dir: opt_value(&mut args, "--assets-dir"),
        select: opt_value(&mut args, "--select"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    app::run(flags)
}

/// Reads an optional `--key value` pair, logging and ignoring bad values.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "invalid command line value");
            None
        }
    }
}
