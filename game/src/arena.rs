use log::debug;

use crate::index::{new_index, AsIndex, IndexedVec};
use crate::Set;

new_index!(pub index StateId);

/// The player choosing the outgoing edge at a state.
///
/// By this crate's convention player 2 is the system side, trying to make the
/// minimal colour seen infinitely often accepting, while player 1 is the
/// environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    Player1,
    Player2,
}

impl Owner {
    pub fn opponent(self) -> Owner {
        match self {
            Owner::Player1 => Owner::Player2,
            Owner::Player2 => Owner::Player1,
        }
    }
}

/// A transition to `successor` carrying a colour.
///
/// A colour equal to the arena's `max_colour` is the "no colour" sentinel; it
/// compares larger than every real colour, so uncoloured edges never win a
/// minimal-colour search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub successor: StateId,
    pub colour: usize,
}

/// A read-only view of a two-player coloured game graph.
///
/// The state set is fixed for the lifetime of a solving call; all operations
/// are pure reads. Querying a state outside `states()` is a caller contract
/// violation and panics.
pub trait Arena {
    fn states(&self) -> impl Iterator<Item = StateId> + '_;

    fn owner(&self, state: StateId) -> Owner;

    /// Outgoing edges; an empty menu is a legal dead end.
    fn edges(&self, state: StateId) -> impl Iterator<Item = Edge> + '_;

    fn predecessors(&self, state: StateId) -> impl Iterator<Item = StateId> + '_;

    /// The number of real colour classes, doubling as the "no colour" value.
    fn max_colour(&self) -> usize;

    /// The state whose winner answers the top-level realizability question.
    /// Only meaningful on a top-level arena.
    fn initial_state(&self) -> StateId;

    /// Whether a play whose minimal colour seen infinitely often is `colour`
    /// is won by player 2. The sentinel counts as seeing no colour at all and
    /// is never accepting, whatever its numeric parity.
    fn is_accepting(&self, colour: usize) -> bool {
        colour < self.max_colour() && colour % 2 == 0
    }

    /// The set of states from which `owner` can force the play into `targets`
    /// in finitely many steps.
    ///
    /// States are examined only through predecessor edges, so a state joins
    /// the attractor if it is a target, if `owner` controls it and some edge
    /// leads inside, or if the opponent controls it, it has at least one
    /// edge, and every edge leads inside. In particular an opponent-owned
    /// dead end is never attracted by the universal rule.
    fn attractor_fixpoint(&self, targets: &Set<StateId>, owner: Owner) -> Set<StateId> {
        let mut attractor = targets.clone();
        let mut queue = targets.iter().copied().collect::<Vec<_>>();

        while let Some(state) = queue.pop() {
            for pred in self.predecessors(state) {
                if attractor.contains(&pred) {
                    continue;
                }

                // A predecessor has an edge into the attractor by definition,
                // so the controlling player can simply move in.
                let attracted = self.owner(pred) == owner
                    || self.edges(pred).all(|e| attractor.contains(&e.successor));

                if attracted {
                    attractor.insert(pred);
                    queue.push(pred);
                }
            }
        }

        debug!("attracted {} states towards {} targets", attractor.len(), targets.len());

        attractor
    }

    /// Restricts the arena to `states`, keeping only edges that land inside
    /// the subset and satisfy `edge_filter`.
    fn filter<F>(&self, states: Set<StateId>, edge_filter: F) -> FilteredArena<'_, Self, F>
    where
        Self: Sized,
        F: Fn(Edge) -> bool,
    {
        FilteredArena { parent: self, states, edge_filter }
    }
}

/// An arena materialized over dense state indices, with a precomputed
/// predecessor relation for the attractor loop.
pub struct DenseArena {
    owners: IndexedVec<StateId, Owner>,
    edges: IndexedVec<StateId, Vec<Edge>>,
    predecessors: IndexedVec<StateId, Vec<StateId>>,
    max_colour: usize,
    initial: Option<StateId>,
}

impl Arena for DenseArena {
    fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.owners.indices()
    }

    fn owner(&self, state: StateId) -> Owner {
        self.owners[state]
    }

    fn edges(&self, state: StateId) -> impl Iterator<Item = Edge> + '_ {
        self.edges[state].iter().copied()
    }

    fn predecessors(&self, state: StateId) -> impl Iterator<Item = StateId> + '_ {
        self.predecessors[state].iter().copied()
    }

    fn max_colour(&self) -> usize {
        self.max_colour
    }

    fn initial_state(&self) -> StateId {
        match self.initial {
            Some(initial) => initial,
            None => panic!("arena has no initial state"),
        }
    }
}

// Not derived with `thiserror` because it would treat the `source` fields as
// the error source, which they are not (they are edge source states).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    ColourOutOfRange { source: StateId, successor: StateId, colour: usize, max_colour: usize },
    UnknownSuccessor { source: StateId, successor: StateId },
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArenaError::ColourOutOfRange { source, successor, colour, max_colour } => write!(
                f,
                "edge {source:?} -> {successor:?} has colour {colour}, outside [0, {max_colour}]"
            ),
            ArenaError::UnknownSuccessor { source, successor } => {
                write!(f, "edge from {source:?} leads to unknown state {successor:?}")
            }
        }
    }
}

impl std::error::Error for ArenaError {}

pub struct ArenaBuilder {
    max_colour: usize,
    owners: IndexedVec<StateId, Owner>,
    edges: IndexedVec<StateId, Vec<Edge>>,
    initial: Option<StateId>,
}

impl ArenaBuilder {
    pub fn new(max_colour: usize) -> Self {
        ArenaBuilder {
            max_colour,
            owners: IndexedVec::new(),
            edges: IndexedVec::new(),
            initial: None,
        }
    }

    pub fn add_state(&mut self, owner: Owner) -> StateId {
        self.edges.push(Vec::new());
        self.owners.push(owner)
    }

    pub fn add_edge(&mut self, source: StateId, successor: StateId, colour: usize) {
        self.edges[source].push(Edge { successor, colour });
    }

    pub fn add_uncoloured_edge(&mut self, source: StateId, successor: StateId) {
        self.add_edge(source, successor, self.max_colour);
    }

    pub fn initial_state(&mut self, state: StateId) {
        self.initial = Some(state);
    }

    /// Validates the edge relation and computes the predecessor tables.
    pub fn build(self) -> Result<DenseArena, ArenaError> {
        let states = self.owners.len();

        for (source, edges) in self.edges.enumerate() {
            for e in edges {
                if e.successor.to_usize() >= states {
                    return Err(ArenaError::UnknownSuccessor { source, successor: e.successor });
                }
                if e.colour > self.max_colour {
                    return Err(ArenaError::ColourOutOfRange {
                        source,
                        successor: e.successor,
                        colour: e.colour,
                        max_colour: self.max_colour,
                    });
                }
            }
        }

        let mut predecessors =
            (0..states).map(|_| Vec::new()).collect::<IndexedVec<StateId, Vec<StateId>>>();
        for (source, edges) in self.edges.enumerate() {
            for e in edges {
                if !predecessors[e.successor].contains(&source) {
                    predecessors[e.successor].push(source);
                }
            }
        }

        Ok(DenseArena {
            owners: self.owners,
            edges: self.edges,
            predecessors,
            max_colour: self.max_colour,
            initial: self.initial,
        })
    }
}

/// A restricted view of a parent arena.
///
/// A state whose edges are all filtered away becomes a genuine dead end in
/// the view. Owner lookup delegates to the parent, as does the initial state.
pub struct FilteredArena<'a, A, F> {
    parent: &'a A,
    states: Set<StateId>,
    edge_filter: F,
}

impl<A: Arena, F: Fn(Edge) -> bool> Arena for FilteredArena<'_, A, F> {
    fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    fn owner(&self, state: StateId) -> Owner {
        self.parent.owner(state)
    }

    fn edges(&self, state: StateId) -> impl Iterator<Item = Edge> + '_ {
        self.parent
            .edges(state)
            .filter(|&e| self.states.contains(&e.successor) && (self.edge_filter)(e))
    }

    fn predecessors(&self, state: StateId) -> impl Iterator<Item = StateId> + '_ {
        // Consistent with the filtered edge relation: a predecessor must
        // survive the state subset and keep an unfiltered edge to `state`.
        self.parent.predecessors(state).filter(move |&pred| {
            self.states.contains(&pred) && self.edges(pred).any(|e| e.successor == state)
        })
    }

    fn max_colour(&self) -> usize {
        self.parent.max_colour()
    }

    fn initial_state(&self) -> StateId {
        self.parent.initial_state()
    }
}
