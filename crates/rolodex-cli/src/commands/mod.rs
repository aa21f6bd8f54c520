use crate::error::{user_message, CliError};
use anyhow::Result;
use chrono::NaiveDate;
use rolodex_config::AppConfig;
use rolodex_core::time::local_today;
use rolodex_store::Directory;
use tracing::debug;

pub mod birthdays;
pub mod contacts;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

pub struct Context<'a> {
    pub directory: &'a mut Directory,
    pub config: &'a AppConfig,
    pub today: Option<NaiveDate>,
}

impl Context<'_> {
    /// The pinned date if one was given, otherwise the local calendar day.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    Delete,
    RemovePhone,
    AddBirthday,
    ShowBirthday,
    RemoveBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Expects an already lowercased token.
    pub fn parse(token: &str) -> Option<Self> {
        let command = match token {
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "delete" => Command::Delete,
            "remove-phone" => Command::RemovePhone,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "remove-birthday" => Command::RemoveBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            _ => return None,
        };
        Some(command)
    }
}

pub const HELP_TEXT: &str = "\
hello                                   greeting
add <name> <phone>                      add a contact or a phone to it
change <name> <old> <new> [DD.MM.YYYY]  replace a phone, optionally set the birthday
phone <name>                            list phones
all                                     list every contact
delete <name>                           remove a contact
remove-phone <name> <phone>             remove a phone
add-birthday <name> <DD.MM.YYYY>        set the birthday
show-birthday <name>                    show the birthday
remove-birthday <name>                  clear the birthday
birthdays                               upcoming birthdays
close | exit                            quit";

/// Positional arguments that follow a command token.
#[derive(Debug, Clone, Copy)]
pub struct CommandArgs<'a> {
    values: &'a [String],
}

impl<'a> CommandArgs<'a> {
    pub fn new(values: &'a [String]) -> Self {
        Self { values }
    }

    /// The first `N` values. Extra values are ignored; too few is a bad value.
    pub fn unpack<const N: usize>(&self) -> Result<[&'a str; N]> {
        if self.values.len() < N {
            return Err(CliError::TooFewValues {
                expected: N,
                got: self.values.len(),
            }
            .into());
        }
        let values = self.values;
        Ok(std::array::from_fn(|index| values[index].as_str()))
    }

    /// The value at `index`; absent is a missing argument.
    pub fn at(&self, index: usize) -> Result<&'a str> {
        self.get(index).ok_or_else(|| CliError::MissingArgument(index).into())
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit(String),
}

pub fn execute(ctx: &mut Context<'_>, token: &str, values: &[String]) -> Outcome {
    let Some(command) = Command::parse(token) else {
        debug!(command = token, "unknown command");
        return Outcome::Reply(INVALID_COMMAND.to_string());
    };
    let args = CommandArgs::new(values);

    let result = match command {
        Command::Exit => return Outcome::Exit(FAREWELL.to_string()),
        Command::Hello => Ok(GREETING.to_string()),
        Command::Help => Ok(HELP_TEXT.to_string()),
        Command::Add => contacts::add_contact(ctx, args),
        Command::Change => contacts::change_contact(ctx, args),
        Command::Phone => contacts::show_phones(ctx, args),
        Command::All => contacts::show_all(ctx),
        Command::Delete => contacts::delete_contact(ctx, args),
        Command::RemovePhone => contacts::remove_phone(ctx, args),
        Command::AddBirthday => birthdays::add_birthday(ctx, args),
        Command::ShowBirthday => birthdays::show_birthday(ctx, args),
        Command::RemoveBirthday => birthdays::remove_birthday(ctx, args),
        Command::Birthdays => birthdays::upcoming(ctx),
    };

    Outcome::Reply(respond(command, result))
}

fn respond(command: Command, result: Result<String>) -> String {
    match result {
        Ok(text) => text,
        Err(err) => {
            debug!(?command, error = %format!("{err:#}"), "command failed");
            user_message(&err).to_string()
        }
    }
}
