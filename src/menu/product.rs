//! Product commands behind the menu entries

use crate::error::CommandError;
use crate::menu::{parse_id, Console, MenuCommand, Reply};
use crate::product::{Product, ProductRepository};

/// Add Product: reads an id and a name, inserts a new product
#[derive(Debug, Clone, PartialEq)]
pub struct AddCmd;

impl MenuCommand for AddCmd {
    fn execute(
        &self,
        console: &mut dyn Console,
        repo: &mut ProductRepository,
    ) -> Result<Reply, CommandError> {
        let id = parse_id(&console.ask("\nEnter Product ID: ")?)?;
        let name = console.ask("Enter Product Name: ")?;

        repo.insert(id, Product::new(id, name))?;
        Ok(Reply::message("Product added successfully!"))
    }
}

/// Get Product by ID
#[derive(Debug, Clone, PartialEq)]
pub struct GetCmd;

impl MenuCommand for GetCmd {
    fn execute(
        &self,
        console: &mut dyn Console,
        repo: &mut ProductRepository,
    ) -> Result<Reply, CommandError> {
        let id = parse_id(&console.ask("\nEnter Product ID to retrieve: ")?)?;
        Ok(Reply::Product(repo.fetch(&id)?))
    }
}

/// Update Product: the replacement is built from the same id it is stored under
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCmd;

impl MenuCommand for UpdateCmd {
    fn execute(
        &self,
        console: &mut dyn Console,
        repo: &mut ProductRepository,
    ) -> Result<Reply, CommandError> {
        let id = parse_id(&console.ask("\nEnter Product ID to update: ")?)?;
        let name = console.ask("Enter new Product Name: ")?;

        repo.replace(id, Product::new(id, name))?;
        Ok(Reply::message("Product updated successfully!"))
    }
}

/// Delete Product
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCmd;

impl MenuCommand for DeleteCmd {
    fn execute(
        &self,
        console: &mut dyn Console,
        repo: &mut ProductRepository,
    ) -> Result<Reply, CommandError> {
        let id = parse_id(&console.ask("\nEnter Product ID to delete: ")?)?;

        repo.remove(&id)?;
        Ok(Reply::message("Product deleted successfully!"))
    }
}

/// View All Products
#[derive(Debug, Clone, PartialEq)]
pub struct ListCmd;

impl MenuCommand for ListCmd {
    fn execute(
        &self,
        _console: &mut dyn Console,
        repo: &mut ProductRepository,
    ) -> Result<Reply, CommandError> {
        Ok(Reply::Listing(repo.snapshot()))
    }
}
