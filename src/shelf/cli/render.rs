use colored::Colorize;
use shelf::api::{CmdMessage, MessageLevel};
use shelf::model::{Book, Status};
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(
    out: &mut W,
    error: &impl std::fmt::Display,
) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(error.to_string())])
}

pub(super) fn format_book(book: &Book) -> String {
    let status = match book.status {
        Status::Available => book.status.as_str().green(),
        Status::CheckedOut => book.status.as_str().yellow(),
    };
    format!(
        "ID: {}, Title: '{}', Author: '{}', Year: {}, Status: '{}'",
        book.id, book.title, book.author, book.year, status
    )
}

pub(super) fn print_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        writeln!(out, "{}", format_book(book))?;
    }
    Ok(())
}
