//! Interactive menu.
//!
//! [`MenuReader`] turns line-based input into validated [`MenuCommand`]s,
//! re-prompting until year and id answers are integers. [`run_menu`] drives
//! the reader and hands each command to the API. End of input is treated as
//! choosing "Exit".

use super::render::{print_books, print_error, print_messages};
use shelf::api::ShelfApi;
use shelf::error::{Result, ShelfError};
use shelf::store::DataStore;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\n--- Library ---\n\
1. Add a book\n\
2. Remove a book\n\
3. Search books\n\
4. List all books\n\
5. Change book status\n\
6. Exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Add {
        title: String,
        author: String,
        year: i32,
    },
    Remove {
        id: u32,
    },
    Search {
        query: String,
    },
    List,
    ChangeStatus {
        id: u32,
        status: String,
    },
    Exit,
    Invalid(String),
}

pub struct MenuReader<R, W> {
    input: R,
    out: W,
    done: bool,
}

impl<R: BufRead, W: Write> MenuReader<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            done: false,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Show `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt_number<T: FromStr>(&mut self, text: &str, retry: &str) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match answer.trim().parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.out, "{}", retry)?,
            }
        }
    }

    fn read_command(&mut self) -> io::Result<MenuCommand> {
        writeln!(self.out, "{}", MENU)?;
        let Some(choice) = self.prompt("Choose an action: ")? else {
            return Ok(MenuCommand::Exit);
        };

        let command = match choice.trim() {
            "1" => {
                let Some(title) = self.prompt("Enter title: ")? else {
                    return Ok(MenuCommand::Exit);
                };
                let Some(author) = self.prompt("Enter author: ")? else {
                    return Ok(MenuCommand::Exit);
                };
                let Some(year) = self.prompt_number(
                    "Enter publication year: ",
                    "Please enter a valid year (a number).",
                )?
                else {
                    return Ok(MenuCommand::Exit);
                };
                MenuCommand::Add {
                    title,
                    author,
                    year,
                }
            }
            "2" => match self.prompt_id("Enter the id of the book to remove: ")? {
                Some(id) => MenuCommand::Remove { id },
                None => MenuCommand::Exit,
            },
            "3" => match self.prompt("Enter title, author or year to search for: ")? {
                Some(query) => MenuCommand::Search { query },
                None => MenuCommand::Exit,
            },
            "4" => MenuCommand::List,
            "5" => {
                let Some(id) = self.prompt_id("Enter the id of the book: ")? else {
                    return Ok(MenuCommand::Exit);
                };
                let Some(status) =
                    self.prompt("Enter new status ('available' or 'checked-out'): ")?
                else {
                    return Ok(MenuCommand::Exit);
                };
                MenuCommand::ChangeStatus { id, status }
            }
            "6" => MenuCommand::Exit,
            other => MenuCommand::Invalid(other.to_string()),
        };
        Ok(command)
    }

    fn prompt_id(&mut self, text: &str) -> io::Result<Option<u32>> {
        self.prompt_number(text, "Please enter a valid id (a positive number).")
    }
}

impl<R: BufRead, W: Write> Iterator for MenuReader<R, W> {
    type Item = io::Result<MenuCommand>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let command = self.read_command();
        if matches!(command, Ok(MenuCommand::Exit) | Err(_)) {
            self.done = true;
        }
        Some(command)
    }
}

pub fn run_menu<S, R, W>(api: &mut ShelfApi<S>, input: R, out: W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut reader = MenuReader::new(input, out);

    while let Some(command) = reader.next() {
        let command = command?;
        let out = reader.out();

        let outcome = match command {
            MenuCommand::Add {
                title,
                author,
                year,
            } => api.add_book(&title, &author, year),
            MenuCommand::Remove { id } => api.remove_book(id),
            MenuCommand::Search { query } => {
                let result = api.search_books(&query)?;
                if !result.listed_books.is_empty() {
                    writeln!(out, "Found books:")?;
                }
                Ok(result)
            }
            MenuCommand::List => api.list_books(),
            MenuCommand::ChangeStatus { id, status } => api.change_status(id, &status),
            MenuCommand::Exit => {
                writeln!(out, "Goodbye.")?;
                break;
            }
            MenuCommand::Invalid(choice) => {
                writeln!(out, "Invalid choice '{}'. Try again.", choice)?;
                continue;
            }
        };

        match outcome {
            Ok(result) => {
                print_books(out, &result.listed_books)?;
                print_messages(out, &result.messages)?;
            }
            Err(e @ (ShelfError::BookNotFound(_) | ShelfError::InvalidStatus(_))) => {
                print_error(out, &e)?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
