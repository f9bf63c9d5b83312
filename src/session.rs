use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::menu::{Command, Console};
use crate::product::ProductRepository;

const MENU: &str = "Product Repository Management
1. Add Product
2. Get Product by ID
3. Update Product
4. Delete Product
5. View All Products
6. Exit
";

/// ANSI erase-display + cursor-home
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Line-based console over any reader/writer pair
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write(&mut self, text: &str) -> Result<(), SessionError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, SessionError> {
        self.write(question)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Interactive product-management session.
///
/// Owns the repository it was given and drives the menu loop until the user
/// picks Exit or the input runs out.
pub struct Session<R, W> {
    repo: ProductRepository,
    terminal: Terminal<R, W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(repo: ProductRepository, input: R, output: W, config: SessionConfig) -> Self {
        Self {
            repo,
            terminal: Terminal::new(input, output),
            config,
        }
    }

    /// Run the menu loop.
    ///
    /// Command failures are printed and the loop continues; only console
    /// I/O errors are returned.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started with {} products", self.repo.len());

        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => {
                    info!("Exit selected");
                    break;
                }
                Err(SessionError::InputClosed) => {
                    info!("Console input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        info!("Session ended with {} products", self.repo.len());
        Ok(())
    }

    /// Show the menu and handle one choice. Returns false once Exit is chosen.
    fn step(&mut self) -> Result<bool, SessionError> {
        if self.config.clear_screen {
            self.terminal.write(CLEAR_SCREEN)?;
        }
        self.terminal.write(MENU)?;

        let choice = self.terminal.ask("Select an option: ")?;
        let command = Command::parse(&choice);
        debug!("Menu choice {:?} parsed as {:?}", choice, command);

        if command.is_exit() {
            return Ok(false);
        }

        let reply = command.execute(&mut self.terminal, &mut self.repo)?;
        self.terminal.write(&reply.encode())?;

        if self.config.pause {
            self.terminal.ask("\nPress Enter to continue...")?;
        }
        Ok(true)
    }

    /// Give back the repository, e.g. to inspect it after a scripted run
    pub fn into_repository(self) -> ProductRepository {
        self.repo
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::product::Product;

    fn quiet() -> SessionConfig {
        SessionConfig {
            clear_screen: false,
            pause: false,
        }
    }

    fn run_script(repo: ProductRepository, script: &str, config: SessionConfig) -> (ProductRepository, String) {
        let mut output = Vec::new();
        let mut session = Session::new(repo, Cursor::new(script.as_bytes()), &mut output, config);
        session.run().unwrap();
        let repo = session.into_repository();
        (repo, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_terminal_strips_line_endings() {
        let mut output = Vec::new();
        let mut terminal = Terminal::new(Cursor::new("first\r\nsecond\nlast"), &mut output);

        assert_eq!(terminal.ask("> ").unwrap(), "first");
        assert_eq!(terminal.ask("> ").unwrap(), "second");
        assert_eq!(terminal.ask("> ").unwrap(), "last");
        assert!(matches!(terminal.ask("> "), Err(SessionError::InputClosed)));
        drop(terminal);
        assert_eq!(output, b"> > > > ");
    }

    #[test]
    fn test_add_then_get() {
        let (repo, out) = run_script(ProductRepository::new(), "1\n1\nA\n2\n1\n6\n", quiet());

        assert!(out.contains("Product added successfully!\n"));
        assert!(out.contains("Product ID: 1, Name: A\n"));
        assert_eq!(repo.fetch(&1).unwrap(), Product::new(1, "A"));
    }

    #[test]
    fn test_duplicate_add_reports_error_and_continues() {
        let (repo, out) = run_script(
            ProductRepository::new(),
            "1\n1\nA\n1\n1\nB\n2\n1\n6\n",
            quiet(),
        );

        assert!(out.contains("Error: Item with key 1 already exists.\n"));
        assert!(out.contains("Product ID: 1, Name: A\n"));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_update_missing_reports_not_found() {
        let (repo, out) = run_script(ProductRepository::new(), "3\n1\nC\n6\n", quiet());

        assert!(out.contains("Error: Item with key 1 not found.\n"));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_delete_then_list() {
        let (repo, out) = run_script(
            ProductRepository::new(),
            "1\n1\nA\n1\n2\nB\n4\n1\n5\n6\n",
            quiet(),
        );

        assert!(out.contains("Product deleted successfully!\n"));
        assert!(out.contains("\nProducts in Repository:\nProduct ID: 2, Name: B\n"));
        assert!(!out.contains("Product ID: 1, Name: A"));
        assert_eq!(repo.snapshot().into_keys().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_list_empty() {
        let (_, out) = run_script(ProductRepository::new(), "5\n6\n", quiet());
        assert!(out.contains("\nNo products available.\n"));
    }

    #[test]
    fn test_bad_id_and_bad_choice_keep_running() {
        let (repo, out) = run_script(ProductRepository::new(), "x\n2\nnope\n1\n3\nC\n6\n", quiet());

        assert!(out.contains("Invalid option. Please try again.\n"));
        assert!(out.contains("Error: 'nope' is not a valid product ID"));
        assert!(out.contains("Product added successfully!\n"));
        assert_eq!(repo.fetch(&3).unwrap().name, "C");
        assert_eq!(out.matches("Select an option: ").count(), 4);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (repo, out) = run_script(ProductRepository::new(), "1\n8\n", quiet());

        // the name prompt hit end of input, so nothing was stored
        assert!(repo.is_empty());
        assert!(out.ends_with("Enter Product Name: "));
    }

    #[test]
    fn test_injected_repository_is_used() {
        let mut repo = ProductRepository::new();
        repo.insert(10, Product::new(10, "Seed")).unwrap();

        let (_, out) = run_script(repo, "2\n10\n6\n", quiet());
        assert!(out.contains("Product ID: 10, Name: Seed\n"));
    }

    #[test]
    fn test_pause_and_clear_screen() {
        let config = SessionConfig {
            clear_screen: true,
            pause: true,
        };
        let (_, out) = run_script(ProductRepository::new(), "5\n\n6\n", config);

        assert_eq!(out.matches(CLEAR_SCREEN).count(), 2);
        assert_eq!(out.matches("\nPress Enter to continue...").count(), 1);
        assert!(out.starts_with(CLEAR_SCREEN));
    }

    #[test]
    fn test_exit_skips_pause() {
        let config = SessionConfig {
            clear_screen: false,
            pause: true,
        };
        let (_, out) = run_script(ProductRepository::new(), "6\n", config);

        assert_eq!(out, format!("{}Select an option: ", MENU));
    }
}
