use anyhow::Result;

use crate::cli::InitArgs;
use crate::context::TemplateContext;

/// Asks the user for a value that must not be empty.
pub trait InputSource {
    fn ask(&self, label: &str, error_message: &str) -> Result<String>;
}

/// Interactive terminal prompt.
pub struct TerminalPrompt;

impl InputSource for TerminalPrompt {
    fn ask(&self, label: &str, error_message: &str) -> Result<String> {
        let error_message = error_message.to_string();
        let value: String = cliclack::input(label)
            .validate(move |input: &String| {
                if input.is_empty() {
                    Err(error_message.clone())
                } else {
                    Ok(())
                }
            })
            .interact()?;
        Ok(value)
    }
}

/// Build the template context from flags, prompting for anything missing.
pub fn collect_context(args: &InitArgs, input: &impl InputSource) -> Result<TemplateContext> {
    let owner = value_or_ask(
        &args.owner,
        input,
        "GitHub Organization or Username",
        "Please provide a username",
    )?;
    let repo = value_or_ask(
        &args.repo,
        input,
        "GitHub Repo Name",
        "Please provide a repo name",
    )?;
    let cli_name = value_or_ask(
        &args.cli_name,
        input,
        "CLI Name",
        "Please provide a CLI name",
    )?;

    Ok(TemplateContext::new(owner, repo, cli_name)?)
}

fn value_or_ask(
    value: &Option<String>,
    input: &impl InputSource,
    label: &str,
    error_message: &str,
) -> Result<String> {
    match value {
        Some(value) => Ok(value.clone()),
        None => input.ask(label, error_message),
    }
}
