use clap::{Args, Subcommand};

use sabor_core::enums::Role;

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Create an account and log in.
    Register(AuthRegisterArgs),
    /// Forget the stored session.
    Logout,
    /// Show the stored session.
    Status,
    /// Fetch the account profile from the backend.
    Profile,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// CLIENTE, PRODUCTOR or ADMIN.
    #[arg(long, default_value = "CLIENTE")]
    pub role: Role,
    #[arg(long)]
    pub phone: Option<String>,
}
