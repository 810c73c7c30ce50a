//! Textual front end for coloured parity-game arenas.
//!
//! The format is a minimal-parity rendition of the pgsolver shape:
//!
//! ```text
//! arena <max_colour>;
//! <id> <colour> <owner> <succ>,<succ>,... ["name"];
//! ```
//!
//! `<owner>` is `0` for player 1 (the environment) and `1` for player 2 (the
//! system). `<colour>` is stamped on every outgoing edge of its node; a value
//! equal to `<max_colour>` leaves the edges uncoloured. The optional quoted
//! name is kept for diagnostics only.

mod conv;
mod parser;

#[cfg(test)]
mod test;

pub use conv::arena_file_to_arena;
use game::Owner;
pub use parser::parse_arena_file;

#[derive(Debug)]
pub struct Node {
    pub id: usize,
    pub colour: usize,
    pub owner: Owner,
    pub successors: Vec<usize>,
    pub name: Option<String>,
}

#[derive(Debug)]
pub struct ArenaFile {
    pub max_colour: usize,
    pub nodes: Vec<Node>,
}
