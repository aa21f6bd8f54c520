use crate::commands::{CommandArgs, Context};
use anyhow::Result;
use rolodex_core::{Birthday, ContactRecord, PhoneNumber};
use tracing::debug;

const COLUMN_WIDTH: usize = 12;

/// Adds a phone to `name`, creating the contact first if needed. The phone is
/// validated before anything is created.
pub fn add_contact(ctx: &mut Context<'_>, args: CommandArgs<'_>) -> Result<String> {
    let [name, phone] = args.unpack::<2>()?;
    let phone = PhoneNumber::new(phone)?;

    if let Some(record) = ctx.directory.find_mut(name) {
        record.push_phone(phone);
        debug!(name, "phone added to existing contact");
        return Ok("Contact updated.".to_string());
    }

    let mut record = ContactRecord::new(name)?;
    record.push_phone(phone);
    ctx.directory.add(record);
    debug!(name, "contact added");
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new> [birthday]`. Every value is checked before the
/// record is touched.
pub fn change_contact(ctx: &mut Context<'_>, args: CommandArgs<'_>) -> Result<String> {
    let name = args.at(0)?;
    let [_, old_phone, new_phone] = args.unpack::<3>()?;
    let birthday = args.get(3).map(Birthday::parse).transpose()?;

    let record = ctx.directory.get_mut(name)?;
    record.edit_phone(old_phone, new_phone)?;
    if let Some(birthday) = birthday {
        record.set_birthday_date(birthday);
    }
    debug!(name, "contact changed");
    Ok(format!("Contact {name} updated successfully."))
}

pub fn show_phones(ctx: &mut Context<'_>, args: CommandArgs<'_>) -> Result<String> {
    let [name] = args.unpack::<1>()?;
    let record = ctx.directory.get(name)?;
    if record.phones().is_empty() {
        return Ok("No phones found.".to_string());
    }
    Ok(join_phones(record))
}

pub fn show_all(ctx: &mut Context<'_>) -> Result<String> {
    if ctx.directory.is_empty() {
        return Ok("No contacts.".to_string());
    }
    let rows: Vec<String> = ctx.directory.records().map(format_row).collect();
    Ok(rows.join("\n"))
}

pub fn delete_contact(ctx: &mut Context<'_>, args: CommandArgs<'_>) -> Result<String> {
    let [name] = args.unpack::<1>()?;
    ctx.directory.delete(name)?;
    debug!(name, "contact deleted");
    Ok("Contact deleted.".to_string())
}

pub fn remove_phone(ctx: &mut Context<'_>, args: CommandArgs<'_>) -> Result<String> {
    let [name, phone] = args.unpack::<2>()?;
    ctx.directory.get_mut(name)?.remove_phone(phone)?;
    Ok("Contact updated.".to_string())
}

fn format_row(record: &ContactRecord) -> String {
    let birthday = record
        .birthday()
        .map(|value| value.to_string())
        .unwrap_or_default();
    format!(
        "{:^width$}|{:^width$}|{}",
        record.name().as_str(),
        birthday,
        join_phones(record),
        width = COLUMN_WIDTH
    )
}

fn join_phones(record: &ContactRecord) -> String {
    let phones: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
    phones.join(", ")
}
