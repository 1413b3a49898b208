// pos_admin_console/src/cli.rs

//! Command tree. Each subcommand stands in for one screen of the admin
//! console.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Point-of-sale administration console
#[derive(Parser, Debug)]
#[command(name = "pos-admin", author, version, about, long_about = None)]
pub struct Cli {
  /// Override POS_API_BASE_URL
  #[arg(long, global = true)]
  pub api_url: Option<String>,

  /// Override POS_SESSION_FILE
  #[arg(long, global = true)]
  pub session_file: Option<PathBuf>,

  /// More log output on stderr (-v info, -vv debug)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  pub verbose: u8,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Sign in and store the session
  Login {
    #[arg(short, long)]
    email: String,
    #[arg(short, long, env = "POS_PASSWORD", hide_env_values = true)]
    password: String,
  },
  /// Forget the stored session
  Logout,
  /// Show the signed-in user
  Whoami,
  /// Ask the API whether the stored token is still valid
  Verify,
  /// Catalog and sales summary
  Dashboard,
  /// Product catalog
  Products(ProductsArgs),
  /// Sales
  Sales(SalesArgs),
  /// User accounts (admin only)
  Users(UsersArgs),
}

#[derive(Args, Debug)]
pub struct ProductsArgs {
  #[command(subcommand)]
  pub action: ProductsAction,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ProductFieldArgs {
  #[arg(long)]
  pub name: Option<String>,
  #[arg(long)]
  pub price: Option<String>,
  #[arg(long)]
  pub stock: Option<String>,
  #[arg(long)]
  pub description: Option<String>,
  #[arg(long)]
  pub sku: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProductsAction {
  /// List products, optionally filtered by name, id, SKU or description
  List {
    #[arg(short, long)]
    search: Option<String>,
  },
  /// Show one product
  Show { id: String },
  /// Server-side search
  Search { query: String },
  /// Products in a category
  Category { category: String },
  /// Create a product
  Add {
    #[command(flatten)]
    fields: ProductFieldArgs,
    #[arg(long)]
    inactive: bool,
  },
  /// Edit a product; unspecified fields keep their current value
  Edit {
    id: String,
    #[command(flatten)]
    fields: ProductFieldArgs,
    #[arg(long, conflicts_with = "inactive")]
    active: bool,
    #[arg(long)]
    inactive: bool,
  },
  /// Delete a product
  Delete {
    id: String,
    /// Confirm the deletion
    #[arg(long)]
    yes: bool,
  },
  /// Activate or deactivate a product
  Status { id: String, state: Activity },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
  Active,
  Inactive,
}

impl Activity {
  pub fn is_active(self) -> bool {
    self == Activity::Active
  }
}

#[derive(Args, Debug)]
pub struct SalesArgs {
  #[command(subcommand)]
  pub action: SalesAction,
}

#[derive(Subcommand, Debug)]
pub enum SalesAction {
  /// List sales, optionally filtered by number or id and status
  List {
    #[arg(short, long)]
    search: Option<String>,
    /// pending, completed or cancelled
    #[arg(long)]
    status: Option<String>,
  },
  /// Show one sale
  Show { id: String },
  /// Delete a sale
  Delete {
    id: String,
    #[arg(long)]
    yes: bool,
  },
  /// Change a sale's status
  Status { id: String, status: String },
  /// Compose and register a new sale
  New(NewSaleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct NewSaleArgs {
  /// PRODUCT_ID or PRODUCT_ID:QTY, repeatable
  #[arg(short, long = "item", required = true)]
  pub items: Vec<String>,
  #[arg(long)]
  pub client: Option<String>,
  /// Efectivo, Tarjeta, Transferencia or Mixto (cash, card, transfer, mixed)
  #[arg(long)]
  pub payment: Option<String>,
  /// Sale date, YYYY-MM-DD (default today)
  #[arg(long)]
  pub date: Option<String>,
  #[arg(long)]
  pub discount: Option<String>,
  #[arg(long)]
  pub observations: Option<String>,
  /// Print the sale without registering it
  #[arg(long)]
  pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct UsersArgs {
  #[command(subcommand)]
  pub action: UsersAction,
}

#[derive(Args, Debug, Default, Clone)]
pub struct UserFieldArgs {
  #[arg(long)]
  pub name: Option<String>,
  #[arg(long)]
  pub email: Option<String>,
  #[arg(long)]
  pub password: Option<String>,
  /// Defaults to --password
  #[arg(long)]
  pub confirm_password: Option<String>,
  /// admin or user
  #[arg(long)]
  pub role: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
  /// List users, optionally filtered by name, email or role
  List {
    #[arg(short, long)]
    search: Option<String>,
  },
  /// Create a user
  Add {
    #[command(flatten)]
    fields: UserFieldArgs,
    #[arg(long)]
    inactive: bool,
  },
  /// Edit a user; leave --password out to keep the current one
  Edit {
    id: String,
    #[command(flatten)]
    fields: UserFieldArgs,
    #[arg(long, conflicts_with = "inactive")]
    active: bool,
    #[arg(long)]
    inactive: bool,
  },
  /// Delete a user
  Delete {
    id: String,
    #[arg(long)]
    yes: bool,
  },
  /// Flip a user's active flag
  Toggle { id: String },
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn command_tree_is_consistent() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_new_sale() {
    let cli = Cli::parse_from([
      "pos-admin", "sales", "new", "--item", "1:2", "-i", "7", "--payment", "Tarjeta", "--discount", "500",
    ]);
    match cli.command {
      Command::Sales(SalesArgs {
        action: SalesAction::New(args),
      }) => {
        assert_eq!(args.items, vec!["1:2", "7"]);
        assert_eq!(args.payment.as_deref(), Some("Tarjeta"));
        assert!(!args.dry_run);
      }
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn product_status_takes_activity() {
    let cli = Cli::parse_from(["pos-admin", "products", "status", "12", "inactive"]);
    assert!(matches!(
      cli.command,
      Command::Products(ProductsArgs {
        action: ProductsAction::Status {
          state: Activity::Inactive,
          ..
        }
      })
    ));
  }

  #[test]
  fn edit_rejects_active_and_inactive_together() {
    let parsed = Cli::try_parse_from(["pos-admin", "products", "edit", "1", "--active", "--inactive"]);
    assert!(parsed.is_err());
  }
}
