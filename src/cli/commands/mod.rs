pub mod account;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_APP_NAME: &str = "app-name";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("versionmonitor")
        .about("Version Monitor account client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long("api-url")
                .help("Base URL of the Version Monitor server, example: https://monitor.tld/")
                .env("VERSIONMONITOR_API_URL")
                .global(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_APP_NAME)
                .long("app-name")
                .help("Application name used in X-<AppName>-alert response headers")
                .env("VERSIONMONITOR_APP_NAME")
                .global(true)
                .default_value(crate::APP_NAME),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds")
                .env("VERSIONMONITOR_TIMEOUT")
                .global(true)
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..)),
        );

    let command = logging::with_args(command);

    account::with_subcommands(command)
}
