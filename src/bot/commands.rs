// src/bot/commands.rs

//! Contact store, command parsing, and command handlers for the
//! assistant bot.
//!
//! Every handler returns `Result<String, BotError>`; the `Ok` string is
//! the reply to show the user, the `Err` maps to a user-facing error
//! string via [`reply`]. Malformed input never panics the bot.

use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ContactBook
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// In-memory mapping from contact name to phone number, held in insertion
/// order so `all` lists contacts in the order they were added.
///
/// Linear scans; the book lives for one interactive session and stays
/// small.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: Vec<(String, String)>,
}

impl ContactBook {
    pub fn new() -> ContactBook {
        ContactBook { contacts: Vec::new() }
    }

    /// The phone number stored for `name`.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&String> {
        self.contacts
            .iter()
            .find(|(name_, _)| name_ == name)
            .map(|(_, phone)| phone)
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.get(name).is_some()
    }

    /// Store `phone` for `name`, overwriting any prior number. A known
    /// name keeps its position in the listing order.
    pub fn set(
        &mut self,
        name: &str,
        phone: &str,
    ) {
        match self
            .contacts
            .iter_mut()
            .find(|(name_, _)| name_ == name)
        {
            Some((_, phone_)) => *phone_ = String::from(phone),
            None => self
                .contacts
                .push((String::from(name), String::from(phone))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate `(name, phone)` pairs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.contacts.iter()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// errors and replies
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Ways a bot command can fail. Each maps to a fixed user-facing string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BotError {
    /// a command named a contact the book does not hold
    ContactNotFound,
    /// `add`/`change` called without exactly a name and a phone
    NameAndPhoneRequired,
    /// `phone` called without a name
    NotEnoughArguments,
}

impl fmt::Display for BotError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match self {
            BotError::ContactNotFound => write!(f, "Contact not found."),
            BotError::NameAndPhoneRequired => write!(f, "Give me name and phone please."),
            BotError::NotEnoughArguments => write!(f, "Not enough arguments."),
        }
    }
}

impl std::error::Error for BotError {}

/// Handler result; the `Ok` string is shown to the user verbatim.
pub type ResultReply = Result<String, BotError>;

/// Collapse a handler result into the string to show the user.
pub fn reply(result: ResultReply) -> String {
    match result {
        Ok(text) => text,
        Err(err) => err.to_string(),
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// command parsing and handlers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Split one input line into a lower-cased command word and its arguments.
///
/// An empty or whitespace-only line yields an empty command word.
pub fn parse_input(input: &str) -> (String, Vec<String>) {
    let mut parts = input.split_whitespace();
    let command: String = parts
        .next()
        .unwrap_or("")
        .to_lowercase();
    let args: Vec<String> = parts.map(String::from).collect();
    defñ!("input {:?}; command {:?}, {} args", input, command, args.len());

    (command, args)
}

/// `add <name> <phone>`; stores the pair, overwriting a known name.
pub fn add_contact(
    args: &[String],
    contacts: &mut ContactBook,
) -> ResultReply {
    match args {
        [name, phone] => {
            contacts.set(name, phone);
            Ok(String::from("Contact added."))
        }
        _ => Err(BotError::NameAndPhoneRequired),
    }
}

/// `change <name> <phone>`; updates a known name, errors on unknown.
pub fn change_contact(
    args: &[String],
    contacts: &mut ContactBook,
) -> ResultReply {
    match args {
        [name, phone] => {
            if !contacts.contains(name) {
                return Err(BotError::ContactNotFound);
            }
            contacts.set(name, phone);
            Ok(String::from("Contact updated."))
        }
        _ => Err(BotError::NameAndPhoneRequired),
    }
}

/// `phone <name>`; the stored number. Extra arguments are ignored.
pub fn show_phone(
    args: &[String],
    contacts: &ContactBook,
) -> ResultReply {
    let name: &String = match args.first() {
        Some(val) => val,
        None => return Err(BotError::NotEnoughArguments),
    };
    match contacts.get(name) {
        Some(phone) => Ok(phone.clone()),
        None => Err(BotError::ContactNotFound),
    }
}

/// `all`; every contact as `name: phone` lines, insertion order.
pub fn show_all(contacts: &ContactBook) -> ResultReply {
    if contacts.is_empty() {
        return Ok(String::from("No contacts found."));
    }
    let lines: Vec<String> = contacts
        .iter()
        .map(|(name, phone)| format!("{}: {}", name, phone))
        .collect();

    Ok(lines.join("\n"))
}
