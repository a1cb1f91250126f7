pub mod account;

use crate::api::account::{KeyAndPassword, ManagedUser};
use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Register {
        globals: GlobalArgs,
        user: ManagedUser,
    },
    ChangePassword {
        globals: GlobalArgs,
        password: SecretString,
    },
    ResetPasswordInit {
        globals: GlobalArgs,
        email: String,
    },
    ResetPasswordFinish {
        globals: GlobalArgs,
        request: KeyAndPassword,
    },
}

impl Action {
    #[must_use]
    pub fn globals(&self) -> &GlobalArgs {
        match self {
            Self::Register { globals, .. }
            | Self::ChangePassword { globals, .. }
            | Self::ResetPasswordInit { globals, .. }
            | Self::ResetPasswordFinish { globals, .. } => globals,
        }
    }

    /// Execute the action and print any alerts the server attached.
    ///
    /// # Errors
    /// Returns an error if the request fails or the server rejects it.
    pub async fn execute(self) -> Result<()> {
        account::handle(self).await
    }
}
