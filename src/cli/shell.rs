//! Interactive menu shell
//!
//! Reads one line per prompt and drives a [`CatalogStore`]. Catalog errors
//! are printed and the loop continues; storage and I/O errors end the
//! session. End of input behaves like choosing Exit.

use std::io::{BufRead, Write};

use crate::catalog::{CatalogResult, CatalogStore};
use crate::observability::{log_event, Event};
use crate::storage::CatalogBackend;

use super::errors::CliResult;
use super::io::{read_line, write_record, write_stats};

const MENU: &str = "\n=== Library Management System ===\n\
1. Add Book\n\
2. Search Book\n\
3. Checkout Book\n\
4. Return Book\n\
5. Delete Book\n\
6. Display All Books\n\
7. View Library Statistics\n\
8. Exit\n\
===============================\n\
Enter your choice: ";

/// Menu entries, numbered as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Checkout,
    Return,
    Delete,
    List,
    Stats,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Search),
            "3" => Some(Self::Checkout),
            "4" => Some(Self::Return),
            "5" => Some(Self::Delete),
            "6" => Some(Self::List),
            "7" => Some(Self::Stats),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive session over a store, an input, and an output.
pub struct Shell<'a, B: CatalogBackend, R: BufRead, W: Write> {
    store: &'a mut CatalogStore<B>,
    input: R,
    output: W,
}

impl<'a, B: CatalogBackend, R: BufRead, W: Write> Shell<'a, B, R, W> {
    /// Create a shell session
    pub fn new(store: &'a mut CatalogStore<B>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until Exit or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        log_event(Event::ShellStart);
        writeln!(self.output, "Welcome to Library Management System")?;

        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = read_line(&mut self.input)? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(
                        self.output,
                        "\nThank you for using the Library Management System!"
                    )?;
                    break;
                }
                Some(choice) => {
                    if !self.dispatch(choice)? {
                        break;
                    }
                }
                None => writeln!(self.output, "\nInvalid choice. Please try again.")?,
            }
        }

        self.output.flush()?;
        log_event(Event::ShellExit);
        Ok(())
    }

    /// Runs one menu action. Returns false when input ended mid-prompt.
    fn dispatch(&mut self, choice: MenuChoice) -> CliResult<bool> {
        match choice {
            MenuChoice::Add => {
                let Some(title) = self.prompt("Enter title: ")? else {
                    return Ok(false);
                };
                let Some(author) = self.prompt("Enter author: ")? else {
                    return Ok(false);
                };
                let Some(identifier) = self.prompt("Enter ISBN: ")? else {
                    return Ok(false);
                };
                let result = self.store.add(&title, &author, &identifier).map(|_| ());
                self.report(result, "Book added successfully!")?;
            }
            MenuChoice::Search => {
                let Some(query) = self.prompt("Enter search term (case-insensitive): ")? else {
                    return Ok(false);
                };
                writeln!(self.output, "\nSearch Results for '{}':", query)?;
                let matches = self.store.search(&query);
                if matches.is_empty() {
                    writeln!(self.output, "\nNo books found matching your query.")?;
                }
                for record in matches {
                    write_record(&mut self.output, record)?;
                }
            }
            MenuChoice::Checkout => {
                let Some(identifier) = self.prompt("Enter ISBN to checkout: ")? else {
                    return Ok(false);
                };
                let result = self.store.checkout(&identifier).map(|_| ());
                self.report(result, "Book checked out successfully!")?;
            }
            MenuChoice::Return => {
                let Some(identifier) = self.prompt("Enter ISBN to return: ")? else {
                    return Ok(false);
                };
                let result = self.store.return_book(&identifier).map(|_| ());
                self.report(result, "Book returned successfully!")?;
            }
            MenuChoice::Delete => {
                let Some(identifier) = self.prompt("Enter ISBN to delete: ")? else {
                    return Ok(false);
                };
                let result = self.store.delete(&identifier).map(|_| ());
                self.report(result, "Book deleted successfully!")?;
            }
            MenuChoice::List => {
                let records = self.store.list_all();
                if records.is_empty() {
                    writeln!(self.output, "\nNo books in the library.")?;
                } else {
                    writeln!(self.output, "\n=== All Books in Library ===")?;
                    for record in records {
                        write_record(&mut self.output, record)?;
                    }
                }
            }
            MenuChoice::Stats => write_stats(&mut self.output, &self.store.stats())?,
            MenuChoice::Exit => {}
        }
        Ok(true)
    }

    fn prompt(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        read_line(&mut self.input)
    }

    fn report(&mut self, result: CatalogResult<()>, success: &str) -> CliResult<()> {
        match result {
            Ok(()) => writeln!(self.output, "\n{}", success)?,
            Err(e) if e.is_recoverable() => writeln!(self.output, "\nError: {}", e)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}

/// Convenience wrapper: run a shell session to completion.
pub fn run_shell<B, R, W>(store: &mut CatalogStore<B>, input: R, output: W) -> CliResult<()>
where
    B: CatalogBackend,
    R: BufRead,
    W: Write,
{
    Shell::new(store, input, output).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use std::io::Cursor;

    fn session(store: &mut CatalogStore<MemoryBackend>, script: &str) -> String {
        let mut output = Vec::new();
        run_shell(store, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 8 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_add_then_list() {
        let mut store = CatalogStore::with_backend(MemoryBackend::new()).unwrap();
        let output = session(&mut store, "1\nDune\nHerbert\n111\n6\n8\n");

        assert!(output.starts_with("Welcome to Library Management System"));
        assert!(output.contains("Book added successfully!"));
        assert!(output.contains("=== All Books in Library ==="));
        assert!(output.contains("Title: Dune"));
        assert!(output.contains("Thank you for using the Library Management System!"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let mut store = CatalogStore::with_backend(MemoryBackend::new()).unwrap();
        let output = session(&mut store, "3\nnope\n7\n8\n");

        assert!(output.contains("Error: No book with identifier 'nope'"));
        assert!(output.contains("Total Books: 0"));
    }

    #[test]
    fn test_invalid_choice() {
        let mut store = CatalogStore::with_backend(MemoryBackend::new()).unwrap();
        let output = session(&mut store, "x\n8\n");
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut store = CatalogStore::with_backend(MemoryBackend::new()).unwrap();
        let output = session(&mut store, "1\nDune\n");

        assert!(!output.contains("Book added successfully!"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_states() {
        let mut store = CatalogStore::with_backend(MemoryBackend::new()).unwrap();
        let output = session(&mut store, "6\n2\nanything\n8\n");

        assert!(output.contains("No books in the library."));
        assert!(output.contains("Search Results for 'anything':"));
        assert!(output.contains("No books found matching your query."));
    }

    #[test]
    fn test_storage_failure_ends_session() {
        let mut backend = MemoryBackend::new();
        backend.set_fail_saves(true);
        let mut store = CatalogStore::with_backend(backend).unwrap();

        let mut output = Vec::new();
        let result = run_shell(&mut store, Cursor::new("1\nA\nB\n1\n8\n"), &mut output);
        assert!(result.is_err());
        assert!(store.is_empty());
    }
}
