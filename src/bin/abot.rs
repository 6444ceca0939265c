// src/bin/abot.rs

//! Driver program _abot_, the interactive assistant bot.
//!
//! A read-eval-print loop over the contact-book commands of
//! [`bot::commands`]; `hello`, `add`, `change`, `phone`, `all`, and
//! `exit`/`close`. Contacts live in process memory only and are gone when
//! the loop ends. Malformed input prints an error string and the loop
//! continues; only a broken stdin/stdout ends the program abnormally.
//!
//! [`bot::commands`]: llalib::bot::commands

use std::io::Write;

use ::anyhow::Context;
use ::llalib::bot::commands::{
    add_contact,
    change_contact,
    parse_input,
    reply,
    show_all,
    show_phone,
    ContactBook,
};
use ::si_trace_print::stack::stack_offset_set;
use ::si_trace_print::{defn, defo, defx};

fn main() -> anyhow::Result<()> {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let mut contacts = ContactBook::new();
    let stdin = std::io::stdin();
    let mut input = String::new();
    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        std::io::stdout()
            .flush()
            .context("failed to flush the command prompt")?;
        input.clear();
        let read_count: usize = stdin
            .read_line(&mut input)
            .context("failed to read a command from stdin")?;
        if read_count == 0 {
            // EOF; take leave as if `exit` was entered
            println!();
            println!("Good bye!");
            break;
        }
        let (command, args) = parse_input(&input);
        defo!("command {:?}, {} args", command, args.len());
        match command.as_str() {
            "exit" | "close" => {
                println!("Good bye!");
                break;
            }
            "hello" => println!("How can I help you?"),
            "add" => println!("{}", reply(add_contact(&args, &mut contacts))),
            "change" => println!("{}", reply(change_contact(&args, &mut contacts))),
            "phone" => println!("{}", reply(show_phone(&args, &contacts))),
            "all" => println!("{}", reply(show_all(&contacts))),
            _ => println!("Invalid command."),
        }
    }
    defx!();

    Ok(())
}
