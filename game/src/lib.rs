pub mod arena;
pub mod index;
pub mod zielonka;


pub use arena::{Arena, ArenaBuilder, ArenaError, DenseArena, Edge, FilteredArena, Owner, StateId};
pub use zielonka::{is_realizable, solve, WinningRegions};

pub type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
pub type Map<K, V> = rustc_hash::FxHashMap<K, V>;
