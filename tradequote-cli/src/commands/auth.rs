//! Auth commands - register, login, logout, whoami

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};

use super::{get_context, get_logger, log_event};
use crate::output;
use tradequote_core::services::LogEvent;

pub fn register(name: Option<String>, email: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords don't match")
        .interact()?;

    match ctx.auth_service.register(&name, &email, &password) {
        Ok(session) => {
            log_event(&logger, LogEvent::new("register_ok").with_command("register"));
            output::success(&format!("Welcome, {}!", session.display_name));
            println!("You are now logged in as {}.", session.email);
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("register_failed")
                    .with_command("register")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}

pub fn login(email: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    match ctx.auth_service.login(&email, &password) {
        Ok(session) => {
            log_event(&logger, LogEvent::new("login_ok").with_command("login"));
            output::success(&format!("Logged in as {}.", session.email));
            Ok(())
        }
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("login_failed")
                    .with_command("login")
                    .with_error(e.to_string()),
            );
            Err(e.into())
        }
    }
}

pub fn logout() -> Result<()> {
    let ctx = get_context()?;
    ctx.auth_service.logout()?;
    output::success("Logged out.");
    Ok(())
}

pub fn whoami(json: bool) -> Result<()> {
    let ctx = get_context()?;

    match ctx.auth_service.current_session()? {
        Some(session) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session)?);
            } else {
                println!("{} ({})", session.display_name.bold(), session.email);
                println!("Identity provider: {}", ctx.auth_service.provider_name());
            }
        }
        None => {
            if json {
                println!("null");
            } else {
                output::warning("Not logged in. Run 'tq login' or 'tq register'.");
            }
        }
    }
    Ok(())
}
