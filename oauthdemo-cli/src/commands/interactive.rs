//! Line-oriented front-end over the view controller.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use shared::{config::client::Config, models::GreetingKind};

use super::session::{Workspace, render_view};

const HELP: &str = "\
Commands:
  login          print the Google sign-in URL
  logout         print the logout URL and forget the local session
  get            call GET /api/hello
  post           call POST /api/hello with the current draft
  draft <text>   set the message sent by `post`
  show           print the current view
  reload         forget everything and resolve the session again
  help           show this list
  quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Login,
    Logout,
    Send(GreetingKind),
    Draft(String),
    Show,
    Reload,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ReplCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match head.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "login" => Self::Login,
            "logout" => Self::Logout,
            "get" => Self::Send(GreetingKind::Get),
            "post" => Self::Send(GreetingKind::Post),
            "draft" => Self::Draft(rest.trim().to_string()),
            "show" => Self::Show,
            "reload" => Self::Reload,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

fn prompt(message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush().ok();
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}

/// Runs until `quit` or end of input. Action failures are printed, not returned.
pub async fn run(config: &Config) -> Result<()> {
    let mut workspace = Workspace::open(config)?;
    workspace.start().await;
    print!("{}", render_view(workspace.controller.model()));
    println!("Type `help` for commands.");

    while let Some(line) = prompt("> ")? {
        let outcome: Result<()> = match ReplCommand::parse(&line) {
            ReplCommand::Empty => Ok(()),
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                println!("{HELP}");
                Ok(())
            }
            ReplCommand::Show => {
                print!("{}", render_view(workspace.controller.model()));
                Ok(())
            }
            ReplCommand::Login => workspace.controller.login().map_err(Into::into),
            ReplCommand::Logout => match workspace.logout() {
                Ok(()) => {
                    println!("Local session removed.");
                    // The in-memory jar still holds the old cookies.
                    workspace = Workspace::open(config)?;
                    workspace.start().await;
                    print!("{}", render_view(workspace.controller.model()));
                    Ok(())
                }
                Err(err) => Err(err),
            },
            ReplCommand::Send(kind) => workspace.greet(kind).await.map(|body| println!("{body}")),
            ReplCommand::Draft(text) => workspace.controller.set_draft(text).map_err(Into::into),
            ReplCommand::Reload => {
                workspace.controller.reset();
                workspace.start().await;
                print!("{}", render_view(workspace.controller.model()));
                Ok(())
            }
            ReplCommand::Unknown(word) => {
                println!("Unknown command '{word}'. Type `help` for commands.");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            eprintln!("{err}");
        }
    }

    workspace.save()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(ReplCommand::parse("  get\n"), ReplCommand::Send(GreetingKind::Get));
        assert_eq!(ReplCommand::parse("POST"), ReplCommand::Send(GreetingKind::Post));
        assert_eq!(ReplCommand::parse("exit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("?"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Empty);
        assert_eq!(
            ReplCommand::parse("frobnicate now"),
            ReplCommand::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn draft_keeps_inner_spacing() {
        assert_eq!(
            ReplCommand::parse("draft  hello   there \n"),
            ReplCommand::Draft("hello   there".to_string())
        );
        assert_eq!(ReplCommand::parse("draft"), ReplCommand::Draft(String::new()));
    }
}
