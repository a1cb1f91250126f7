use std::fmt;

/// Account endpoints exposed by the server, each bound to one fixed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Register,
    ChangePassword,
    PasswordResetInit,
    PasswordResetFinish,
}

impl Endpoint {
    pub const ALL: [Self; 4] = [
        Self::Register,
        Self::ChangePassword,
        Self::PasswordResetInit,
        Self::PasswordResetFinish,
    ];

    /// Path relative to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Register => "api/register",
            Self::ChangePassword => "api/account/change_password",
            Self::PasswordResetInit => "api/account/reset_password/init",
            Self::PasswordResetFinish => "api/account/reset_password/finish",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::ChangePassword => "ChangePassword",
            Self::PasswordResetInit => "PasswordResetInit",
            Self::PasswordResetFinish => "PasswordResetFinish",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
