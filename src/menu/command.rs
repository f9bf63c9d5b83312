use tracing::warn;

use crate::error::{CommandError, SessionError};
use crate::menu::product::{AddCmd, DeleteCmd, GetCmd, ListCmd, UpdateCmd};
use crate::menu::{Console, Reply};
use crate::product::ProductRepository;

/// A single menu action run against the product repository
pub trait MenuCommand {
    fn execute(
        &self,
        console: &mut dyn Console,
        repo: &mut ProductRepository,
    ) -> Result<Reply, CommandError>;
}

/// Menu entries, numbered as they are shown
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 1. Add Product
    Add(AddCmd),
    /// 2. Get Product by ID
    Get(GetCmd),
    /// 3. Update Product
    Update(UpdateCmd),
    /// 4. Delete Product
    Delete(DeleteCmd),
    /// 5. View All Products
    List(ListCmd),
    /// 6. Exit
    Exit,
    /// Anything else the user typed
    Unknown(String),
}

impl Command {
    /// Parse a menu choice
    pub fn parse(choice: &str) -> Self {
        match choice.trim() {
            "1" => Command::Add(AddCmd),
            "2" => Command::Get(GetCmd),
            "3" => Command::Update(UpdateCmd),
            "4" => Command::Delete(DeleteCmd),
            "5" => Command::List(ListCmd),
            "6" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Run the command and turn recoverable failures into an error reply.
    ///
    /// Only console failures are returned as errors; they end the session.
    pub fn execute(
        &self,
        console: &mut dyn Console,
        repo: &mut ProductRepository,
    ) -> Result<Reply, SessionError> {
        let result = match self {
            Command::Add(cmd) => cmd.execute(console, repo),
            Command::Get(cmd) => cmd.execute(console, repo),
            Command::Update(cmd) => cmd.execute(console, repo),
            Command::Delete(cmd) => cmd.execute(console, repo),
            Command::List(cmd) => cmd.execute(console, repo),
            Command::Exit => Ok(Reply::Empty),
            Command::Unknown(_) => Ok(Reply::message("Invalid option. Please try again.")),
        };

        match result {
            Ok(reply) => Ok(reply),
            Err(CommandError::Input(e)) => {
                warn!("Command {:?} failed: {}", self, e);
                Ok(Reply::error(e))
            }
            Err(CommandError::Session(e)) => Err(e),
        }
    }
}
