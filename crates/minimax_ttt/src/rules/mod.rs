//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing about
//! whose turn it is; crediting a win to the player who just moved is the
//! job of [`State`](crate::State).

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{winning_line, LINES};
