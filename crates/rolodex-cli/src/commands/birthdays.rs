use crate::commands::{CommandArgs, Context};
use anyhow::Result;
use rolodex_core::time::format_date;
use rolodex_core::UpcomingBirthdays;
use tracing::debug;

pub const NO_UPCOMING_BIRTHDAYS: &str = "There are no upcoming birthdays yet";

pub fn add_birthday(ctx: &mut Context<'_>, args: CommandArgs<'_>) -> Result<String> {
    let [name, date] = args.unpack::<2>()?;
    ctx.directory.get_mut(name)?.set_birthday(date)?;
    debug!(name, "birthday set");
    Ok("Contact updated.".to_string())
}

pub fn show_birthday(ctx: &mut Context<'_>, args: CommandArgs<'_>) -> Result<String> {
    let [name] = args.unpack::<1>()?;
    let record = ctx.directory.get(name)?;
    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday is None".to_string(),
    })
}

pub fn remove_birthday(ctx: &mut Context<'_>, args: CommandArgs<'_>) -> Result<String> {
    let [name] = args.unpack::<1>()?;
    ctx.directory.get_mut(name)?.clear_birthday();
    Ok("Contact updated.".to_string())
}

pub fn upcoming(ctx: &mut Context<'_>) -> Result<String> {
    let today = ctx.today();
    let policy = ctx.config.birthdays;
    debug!(%today, window_days = policy.window_days(), "listing upcoming birthdays");

    match ctx.directory.upcoming_birthdays_with(today, policy) {
        UpcomingBirthdays::Empty => Ok(NO_UPCOMING_BIRTHDAYS.to_string()),
        UpcomingBirthdays::Results(entries) => {
            let lines: Vec<String> = entries
                .iter()
                .map(|entry| format!("{} : {}", entry.name, format_date(entry.greeting_date)))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
