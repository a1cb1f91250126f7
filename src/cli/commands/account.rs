use clap::{Arg, Command};

pub const CMD_REGISTER: &str = "register";
pub const CMD_CHANGE_PASSWORD: &str = "change-password";
pub const CMD_RESET_PASSWORD: &str = "reset-password";
pub const CMD_RESET_INIT: &str = "init";
pub const CMD_RESET_FINISH: &str = "finish";

pub const ARG_LOGIN: &str = "login";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_FIRST_NAME: &str = "first-name";
pub const ARG_LAST_NAME: &str = "last-name";
pub const ARG_LANG_KEY: &str = "lang-key";
pub const ARG_KEY: &str = "key";
pub const ARG_NEW_PASSWORD: &str = "new-password";

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Account password")
        .env("VERSIONMONITOR_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("E-mail address")
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Create a new account")
                .arg(
                    Arg::new(ARG_LOGIN)
                        .short('l')
                        .long("login")
                        .help("Login name (lowercase letters and digits)")
                        .required(true),
                )
                .arg(email_arg())
                .arg(password_arg())
                .arg(Arg::new(ARG_FIRST_NAME).long("first-name").help("First name"))
                .arg(Arg::new(ARG_LAST_NAME).long("last-name").help("Last name"))
                .arg(
                    Arg::new(ARG_LANG_KEY)
                        .long("lang-key")
                        .help("Preferred language key, example: en"),
                ),
        )
        .subcommand(
            Command::new(CMD_CHANGE_PASSWORD)
                .about("Change the password of the current account")
                .arg(password_arg().help("New password")),
        )
        .subcommand(
            Command::new(CMD_RESET_PASSWORD)
                .about("Reset a forgotten password")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new(CMD_RESET_INIT)
                        .about("Request a password reset e-mail")
                        .arg(email_arg()),
                )
                .subcommand(
                    Command::new(CMD_RESET_FINISH)
                        .about("Set a new password using the key from the reset e-mail")
                        .arg(
                            Arg::new(ARG_KEY)
                                .short('k')
                                .long("key")
                                .help("Reset key")
                                .required(true),
                        )
                        .arg(
                            Arg::new(ARG_NEW_PASSWORD)
                                .long("new-password")
                                .help("New password")
                                .env("VERSIONMONITOR_NEW_PASSWORD")
                                .hide_env_values(true)
                                .required(true),
                        ),
                ),
        )
}
