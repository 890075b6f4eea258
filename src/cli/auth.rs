//! Authentication CLI commands
//!
//! Passwords come from `BUDGETBUDDY_PASSWORD` when set, otherwise from a
//! hidden prompt. They are wiped from memory once used.

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::auth::IdentityProvider;
use crate::error::{BuddyError, BuddyResult};

/// Authentication subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and sign in
    Signup {
        /// Email address
        email: String,
        /// Password (prompted when omitted)
        #[arg(long, env = "BUDGETBUDDY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign in to an existing account
    Login {
        /// Email address
        email: String,
        /// Password (prompted when omitted)
        #[arg(long, env = "BUDGETBUDDY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show who is signed in
    Whoami,
}

fn read_password(given: Option<String>) -> BuddyResult<Zeroizing<String>> {
    match given {
        Some(password) => Ok(Zeroizing::new(password)),
        None => rpassword::prompt_password("Password: ")
            .map(Zeroizing::new)
            .map_err(|e| BuddyError::Io(format!("Failed to read password: {}", e))),
    }
}

/// Handle an auth command
pub fn handle_auth_command<P: IdentityProvider + ?Sized>(
    provider: &mut P,
    cmd: AuthCommands,
) -> BuddyResult<()> {
    match cmd {
        AuthCommands::Signup { email, password } => {
            let password = read_password(password)?;
            let session = provider.sign_up(&email, &password)?;
            println!("Account created. Signed in as {}", session.email);
        }

        AuthCommands::Login { email, password } => {
            let password = read_password(password)?;
            let session = provider.sign_in(&email, &password)?;
            println!("Signed in as {}", session.email);
        }

        AuthCommands::Logout => {
            if provider.current_session().is_none() {
                println!("You are not signed in.");
            } else {
                provider.sign_out()?;
                println!("Signed out.");
            }
        }

        AuthCommands::Whoami => match provider.current_session() {
            Some(session) => {
                println!("Signed in as {}", session.email);
                println!(
                    "  Since: {}",
                    session.signed_in_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
            None => println!("You are not signed in."),
        },
    }

    Ok(())
}
