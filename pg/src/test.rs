use game::{is_realizable, solve, Arena, Owner};

use crate::{arena_file_to_arena, parse_arena_file};

// Two request/grant pairs contending for one resource: granting either
// client leaves the combined obligation pending, so the environment wins by
// requesting both forever.
const CONTESTED: &str = "\
arena 2;
0 2 0 1,2 \"requests\";
1 1 1 0 \"both\";
2 0 1 0 \"none\";
";

#[test]
fn parses_nodes_and_names() {
    let file = parse_arena_file(CONTESTED).unwrap();

    assert_eq!(file.max_colour, 2);
    assert_eq!(file.nodes.len(), 3);
    assert_eq!(file.nodes[0].owner, Owner::Player1);
    assert_eq!(file.nodes[0].successors, vec![1, 2]);
    assert_eq!(file.nodes[1].owner, Owner::Player2);
    assert_eq!(file.nodes[1].name.as_deref(), Some("both"));
}

#[test]
fn parses_dead_end_rows() {
    let file = parse_arena_file("arena 1;\n0 0 1;\n").unwrap();

    assert_eq!(file.nodes[0].successors, Vec::<usize>::new());
    assert_eq!(file.nodes[0].name, None);
}

#[test]
fn rejects_missing_header() {
    assert!(parse_arena_file("0 0 0 0;\n").is_err());
}

#[test]
fn conversion_keeps_the_node_table() {
    let file = parse_arena_file(CONTESTED).unwrap();
    let (arena, table) = arena_file_to_arena(&file, 0).unwrap();

    assert_eq!(arena.states().count(), 3);
    assert_eq!(arena.initial_state(), table[&0]);
    assert_eq!(arena.owner(table[&1]), Owner::Player2);

    // Node colours end up on the outgoing edges; the node 0 colour equals
    // the declared maximum, so its edges are uncoloured.
    assert!(arena.edges(table[&1]).all(|e| e.colour == 1));
    assert!(arena.edges(table[&0]).all(|e| e.colour == arena.max_colour()));
}

#[test]
fn rejects_colour_above_declared_maximum() {
    let file = parse_arena_file("arena 1;\n0 3 1 0;\n").unwrap();

    assert!(arena_file_to_arena(&file, 0).is_err());
}

#[test]
fn solves_contested_arena_as_unrealisable() {
    let file = parse_arena_file(CONTESTED).unwrap();
    let (arena, table) = arena_file_to_arena(&file, 0).unwrap();

    assert!(!is_realizable(&arena));
    let regions = solve(&arena);
    assert!(regions.winning_region(Owner::Player1).contains(&table[&0]));
}

#[test]
fn solves_accepting_loop_as_realisable() {
    let file = parse_arena_file("arena 1;\n0 0 1 0;\n").unwrap();
    let (arena, _) = arena_file_to_arena(&file, 0).unwrap();

    assert!(is_realizable(&arena));
}
