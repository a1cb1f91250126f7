//! Map validated CLI matches to an account action.

use crate::api::account::{KeyAndPassword, ManagedUser};
use crate::cli::{
    actions::Action,
    commands::account::{
        ARG_EMAIL, ARG_FIRST_NAME, ARG_KEY, ARG_LANG_KEY, ARG_LAST_NAME, ARG_LOGIN,
        ARG_NEW_PASSWORD, ARG_PASSWORD, CMD_CHANGE_PASSWORD, CMD_REGISTER, CMD_RESET_FINISH,
        CMD_RESET_INIT, CMD_RESET_PASSWORD,
    },
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

/// # Errors
/// Returns an error if the subcommand is unknown or a required argument is missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = GlobalArgs::parse(matches)?;

    match matches.subcommand() {
        Some((CMD_REGISTER, sub_m)) => Ok(Action::Register {
            globals,
            user: ManagedUser {
                login: required(sub_m, ARG_LOGIN)?,
                password: SecretString::from(required(sub_m, ARG_PASSWORD)?),
                first_name: optional(sub_m, ARG_FIRST_NAME),
                last_name: optional(sub_m, ARG_LAST_NAME),
                email: required(sub_m, ARG_EMAIL)?,
                lang_key: optional(sub_m, ARG_LANG_KEY),
            },
        }),
        Some((CMD_CHANGE_PASSWORD, sub_m)) => Ok(Action::ChangePassword {
            globals,
            password: SecretString::from(required(sub_m, ARG_PASSWORD)?),
        }),
        Some((CMD_RESET_PASSWORD, sub_m)) => match sub_m.subcommand() {
            Some((CMD_RESET_INIT, init_m)) => Ok(Action::ResetPasswordInit {
                globals,
                email: required(init_m, ARG_EMAIL)?,
            }),
            Some((CMD_RESET_FINISH, finish_m)) => Ok(Action::ResetPasswordFinish {
                globals,
                request: KeyAndPassword {
                    key: required(finish_m, ARG_KEY)?,
                    new_password: SecretString::from(required(finish_m, ARG_NEW_PASSWORD)?),
                },
            }),
            _ => Err(anyhow!("missing subcommand for {CMD_RESET_PASSWORD}")),
        },
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn optional(matches: &ArgMatches, id: &str) -> Option<String> {
    matches
        .get_one::<String>(id)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
