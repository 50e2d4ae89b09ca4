use bolao_core::{ApiClient, BolaoError, Result};
use clap::Subcommand;
use dialoguer::Password;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Log in with an email (prompts for the password)
    Login {
        email: String,
    },
    /// Create an account and log in
    Register {
        /// Display name
        name: String,
        email: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the current session
    Whoami,
    /// Request a password-reset email
    ForgotPassword {
        email: String,
    },
    /// Set a new password using the token from the reset email
    ResetPassword {
        reset_token: String,
    },
    /// Show the profile, or change the display name
    Profile {
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
    },
}

pub async fn handle_auth_command(cmd: AuthCommands, client: &ApiClient) -> Result<()> {
    match cmd {
        AuthCommands::Login { email } => {
            validate_email(&email)?;
            let password = Password::new().with_prompt("Password").interact()?;
            if password.is_empty() {
                return Err(BolaoError::invalid_input("password must not be empty"));
            }

            let resp = client.auth().login(&email, &password).await?;
            let session = client.session().current();
            println!(
                "Logged in as {}",
                resp.name
                    .or(session.email)
                    .unwrap_or_else(|| email.clone())
            );
            if session.is_admin {
                println!("This account has administrator access.");
            }
        }

        AuthCommands::Register { name, email } => {
            if name.trim().is_empty() {
                return Err(BolaoError::invalid_input("name must not be empty"));
            }
            validate_email(&email)?;
            let password = Password::new()
                .with_prompt("Choose a password")
                .with_confirmation("Repeat the password", "Passwords do not match")
                .interact()?;
            validate_password(&password)?;

            let resp = client.auth().register(&name, &email, &password).await?;
            if let Some(message) = resp.message {
                println!("{}", message);
            }
            println!("Account created. You are now logged in as {}.", name);
        }

        AuthCommands::Logout => {
            client.auth().logout()?;
            println!("Session cleared.");
        }

        AuthCommands::Whoami => {
            let session = client.session().current();
            if !client.session().is_authenticated() {
                println!("Not logged in.");
                return Ok(());
            }
            println!("Subject: {}", session.subject_id.as_deref().unwrap_or("-"));
            println!("Email: {}", session.email.as_deref().unwrap_or("-"));
            println!("Name: {}", session.display_name.as_deref().unwrap_or("-"));
            println!("Administrator: {}", if session.is_admin { "yes" } else { "no" });
        }

        AuthCommands::ForgotPassword { email } => {
            validate_email(&email)?;
            let resp = client.auth().forgot_password(&email).await?;
            println!("{}", resp.message);
        }

        AuthCommands::ResetPassword { reset_token } => {
            let password = Password::new()
                .with_prompt("New password")
                .with_confirmation("Repeat the new password", "Passwords do not match")
                .interact()?;
            validate_password(&password)?;

            let resp = client.auth().reset_password(&reset_token, &password).await?;
            println!("{}", resp.message);
        }

        AuthCommands::Profile { name } => match name {
            Some(name) => {
                if name.trim().is_empty() {
                    return Err(BolaoError::invalid_input("name must not be empty"));
                }
                let profile = client.auth().update_profile(&name).await?;
                println!("Profile updated: {} <{}>", profile.name, profile.email);
            }
            None => {
                let profile = client.auth().profile().await?;
                println!("Name: {}", profile.name);
                println!("Email: {}", profile.email);
            }
        },
    }

    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(BolaoError::invalid_input(format!(
            "'{email}' does not look like an email address"
        )));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    if password.len() < 6 {
        return Err(BolaoError::invalid_input(
            "password must be at least 6 characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_is_checked_locally() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn short_passwords_are_rejected_before_dispatch() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("abc").is_err());
    }
}
