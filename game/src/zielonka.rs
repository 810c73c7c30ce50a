use log::debug;

use crate::arena::{Arena, Owner, StateId};
use crate::Set;

/// A partition of a solved state set into the regions won by each player.
///
/// The two sets are disjoint by construction and together cover exactly the
/// state set the accumulator was created over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinningRegions {
    player1: Set<StateId>,
    player2: Set<StateId>,
}

impl WinningRegions {
    /// A partition where `owner` wins every one of the given states.
    pub fn new(states: impl IntoIterator<Item = StateId>, owner: Owner) -> Self {
        let mut regions = WinningRegions { player1: Set::default(), player2: Set::default() };
        regions.add_all(states, owner);
        regions
    }

    pub fn winning_region(&self, owner: Owner) -> &Set<StateId> {
        match owner {
            Owner::Player1 => &self.player1,
            Owner::Player2 => &self.player2,
        }
    }

    pub fn add_all(&mut self, states: impl IntoIterator<Item = StateId>, owner: Owner) {
        let region = match owner {
            Owner::Player1 => &mut self.player1,
            Owner::Player2 => &mut self.player2,
        };
        region.extend(states);
    }
}

/// Computes the winning region of each player with the recursive Zielonka
/// algorithm.
///
/// Player 2 wants to satisfy the parity condition, that is, get the minimal
/// colour appearing infinitely often to be accepting; player 1 chooses its
/// actions before player 2 does.
pub fn solve<A: Arena>(arena: &A) -> WinningRegions {
    let states = arena.states().collect::<Set<_>>();
    let regions = recursive_zielonka(arena, states.clone(), Set::default());

    debug_assert!(
        regions.winning_region(Owner::Player1).is_disjoint(regions.winning_region(Owner::Player2)),
        "the winning regions are not disjoint"
    );
    debug_assert!(
        states.iter().all(|s| {
            regions.winning_region(Owner::Player1).contains(s)
                || regions.winning_region(Owner::Player2).contains(s)
        }),
        "the winning regions do not cover the arena"
    );

    regions
}

/// Whether player 2 wins from the arena's initial state.
pub fn is_realizable<A: Arena>(arena: &A) -> bool {
    solve(arena).winning_region(Owner::Player2).contains(&arena.initial_state())
}

// Every frame restricts the root arena with its accumulated live-state set
// and removed-colour set instead of stacking nested views, so the recursion
// monomorphizes to a single view type.
fn recursive_zielonka<A: Arena>(
    root: &A,
    states: Set<StateId>,
    removed_colours: Set<usize>,
) -> WinningRegions {
    let game = root.filter(states, |e| !removed_colours.contains(&e.colour));

    let max_colour = game.max_colour();
    let minimal_colour = game
        .states()
        .flat_map(|s| game.edges(s))
        .map(|e| e.colour)
        .fold(max_colour, usize::min);

    // The parity of the minimal colour decides which player benefits from it.
    let favored = match game.is_accepting(minimal_colour) {
        true => Owner::Player2,
        false => Owner::Player1,
    };

    // No coloured edge left, so the parity of "no colour" wins everything.
    if minimal_colour == max_colour {
        return WinningRegions::new(game.states(), favored);
    }

    debug!(
        "solving {} states, minimal colour {minimal_colour}, favored {favored:?}",
        game.states().count(),
    );

    // Player 2 states that can (or are forced to) play an edge of the minimal
    // colour. This set may be empty: it is the second layer of an attractor
    // whose first layer is the minimally coloured edges themselves.
    let candidates = game
        .states()
        .filter(|&s| {
            game.owner(s) == Owner::Player2
                && match favored {
                    Owner::Player2 => game.edges(s).any(|e| e.colour == minimal_colour),
                    Owner::Player1 => game.edges(s).all(|e| e.colour == minimal_colour),
                }
        })
        .collect::<Set<_>>();

    let attractor = game.attractor_fixpoint(&candidates, favored);
    let remaining = game.states().filter(|s| !attractor.contains(s)).collect::<Set<_>>();

    // The minimal colour is used up: it can never be the minimal colour of
    // interest again in the sub-game.
    let mut sub_removed = removed_colours.clone();
    sub_removed.insert(minimal_colour);
    let sub_regions = recursive_zielonka(root, remaining, sub_removed);

    // If the favored player wins the whole sub-game it wins everywhere: it
    // can first force the play into the attractor and then win the rest.
    if sub_regions.winning_region(favored.opponent()).is_empty() {
        return WinningRegions::new(game.states(), favored);
    }

    // Otherwise retry without the opponent's attractor, this time keeping the
    // minimally coloured edges.
    let opponent = favored.opponent();
    let opponent_attractor =
        game.attractor_fixpoint(sub_regions.winning_region(opponent), opponent);
    let difference = game.states().filter(|s| !opponent_attractor.contains(s)).collect::<Set<_>>();

    drop(game);
    let mut regions = recursive_zielonka(root, difference, removed_colours);
    regions.add_all(opponent_attractor, opponent);
    regions
}
