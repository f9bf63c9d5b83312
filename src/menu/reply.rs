use std::collections::BTreeMap;
use std::fmt::Display;

use crate::product::Product;

/// Result of a menu command, as shown to the user
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
  /// Plain confirmation or notice
  Message(String),
  /// A single fetched product
  Product(Product),
  /// Every stored product, keyed by id
  Listing(BTreeMap<i32, Product>),
  /// A failed command
  Error(String),
  /// Nothing to print
  Empty,
}

impl Reply {
  pub fn message(msg: impl Into<String>) -> Self {
    Reply::Message(msg.into())
  }

  /// Create an error reply from anything printable
  pub fn error(err: impl Display) -> Self {
    Reply::Error(err.to_string())
  }

  /// Render the reply as console text
  pub fn encode(&self) -> String {
    let mut buf = String::new();
    self.encode_to(&mut buf);
    buf
  }

  fn encode_to(&self, buf: &mut String) {
    match self {
      Reply::Message(msg) => {
        buf.push_str(msg);
        buf.push('\n');
      }
      Reply::Product(product) => {
        buf.push_str(&product.to_string());
        buf.push('\n');
      }
      Reply::Listing(products) if products.is_empty() => {
        buf.push_str("\nNo products available.\n");
      }
      Reply::Listing(products) => {
        buf.push_str("\nProducts in Repository:\n");
        for (id, product) in products {
          // the key is printed, not the embedded id
          buf.push_str(&format!("Product ID: {}, Name: {}\n", id, product.name));
        }
      }
      Reply::Error(msg) => {
        buf.push_str("Error: ");
        buf.push_str(msg);
        buf.push('\n');
      }
      Reply::Empty => {}
    }
  }
}
