//! `schoolctl login` / `schoolctl logout` - session token handling

use dialoguer::{theme::ColorfulTheme, Password};
use miette::{IntoDiagnostic, Result};

use crate::api::ApiClient;
use crate::cli::{forms, output, GlobalOpts};
use crate::core::validate::{check, FieldConstraint, FieldKind};
use crate::core::Session;

#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(long, short = 'u')]
    pub username: Option<String>,
}

pub fn run(args: LoginArgs, global: &GlobalOpts) -> Result<()> {
    let theme = ColorfulTheme::default();
    let required = FieldConstraint::required(FieldKind::Text);

    let username = match args.username {
        Some(username) => {
            if let Some(message) = check(&username, "Username", &required) {
                return Err(miette::miette!("{}", message));
            }
            username
        }
        None => forms::text_field(&theme, "Username", required, "")?,
    };

    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()
        .into_diagnostic()?;
    if let Some(message) = check(&password, "Password", &required) {
        return Err(miette::miette!("{}", message));
    }

    let config = global.config();
    if global.verbose {
        eprintln!("Authenticating against {}", config.base_url);
    }

    let client = ApiClient::anonymous(config);
    let token = client
        .get_token(&username, &password)
        .map_err(|e| miette::miette!("Login failed: {}", e))?;

    let mut session = Session::load();
    session.set(token).into_diagnostic()?;

    output::success("Signed in.");
    Ok(())
}

pub fn run_logout(_global: &GlobalOpts) -> Result<()> {
    let mut session = Session::load();
    if !session.is_signed_in() {
        println!("Not signed in.");
        return Ok(());
    }
    session.clear().into_diagnostic()?;
    output::success("Signed out.");
    Ok(())
}
