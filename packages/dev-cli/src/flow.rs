//! Interactive walkthrough of the onboarding flow.
//!
//! Terminal rendition of the mobile screens: pick a country, type a phone
//! number, receive the (mocked) code, then verify or resend until it sticks.

use anyhow::{Context, Result};
use colored::Colorize;
use console::Term;
use country_picker::{selected_index, COUNTRIES};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use phone_rules::{format_by_country, validate_by_country, DEFAULT_DIAL_CODE};
use verify::{MockVerificationService, VerificationService};

use crate::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    let term = Term::stdout();
    print_banner(&term)?;

    // Country selection, pre-selected the way the picker trigger would be
    let labels: Vec<String> = COUNTRIES
        .iter()
        .map(|c| format!("{} {} ({})", c.flag, c.name, c.dial_code))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Country")
        .items(&labels)
        .default(selected_index(DEFAULT_DIAL_CODE, config.plus_one))
        .interact_on(&term)?;
    let dial_code = COUNTRIES[selection].dial_code;

    // Phone entry, gated the way the entry screen gates its Continue button
    let phone: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Mobile number ({dial_code})"))
        .validate_with(|input: &String| -> Result<(), &str> {
            if validate_by_country(input, dial_code) {
                Ok(())
            } else {
                Err("Please enter a valid phone number")
            }
        })
        .interact_text()?;
    let formatted = format_by_country(&phone, dial_code);
    let full_number = format!("{dial_code}{formatted}");
    println!("Your number: {}", formatted.bold());

    let service = MockVerificationService::new(config.mock_options());
    println!("{}", "Sending verification code...".dimmed());
    let sent = service
        .send_code(&full_number)
        .await
        .context("Sending OTP failed")?;
    println!("{} {}", "✓".green(), sent.message);

    // Code entry with user-triggered resend, like the OTP screen
    loop {
        let entry: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("6-digit code (or 'r' to resend)")
            .interact_text()?;
        let entry = entry.trim();

        if entry.eq_ignore_ascii_case("r") {
            match service.resend_code(&full_number).await {
                Ok(resent) => println!("{} {}", "✓".green(), resent.message),
                Err(err) => println!("{} {}", "✗".red(), err),
            }
            continue;
        }

        if entry.len() != 6 || !entry.chars().all(|c| c.is_ascii_digit()) {
            println!("{}", "OTP is 6 digits".yellow());
            continue;
        }

        match service.verify_code(&sent.verification_id, entry).await {
            Ok(verified) => {
                println!(
                    "{} Authenticated! token: {}",
                    "✓".green(),
                    verified.token.bold()
                );
                break;
            }
            Err(err) => println!("{} {}", "✗".red(), err),
        }
    }

    Ok(())
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!(
        "{}",
        "╔════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║        whattodos onboarding CLI        ║".bright_cyan()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════╝".bright_cyan()
    );
    println!();
    Ok(())
}
