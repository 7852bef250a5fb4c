#![doc(hidden)]

//! Quasar-inspired widget kit backing the closed catalog.
//!
//! One module per catalog entry; `foundations` carries the shared tokens.

pub mod foundations;

pub mod card;
pub mod chip;
pub mod dialog;
pub mod header;
pub mod icon;
pub mod layout;
pub mod page;
pub mod space;
pub mod spinner;
pub mod table;
pub mod toolbar;

pub use card::*;
pub use chip::*;
pub use dialog::*;
pub use foundations::*;
pub use header::*;
pub use icon::*;
pub use layout::*;
pub use page::*;
pub use space::*;
pub use spinner::*;
pub use table::*;
pub use toolbar::*;
