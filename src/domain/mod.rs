mod account;
mod customer;
mod history;
mod money;
mod transaction;

pub use account::*;
pub use customer::*;
pub use history::*;
pub use money::*;
pub use transaction::*;
