use game::{ArenaBuilder, ArenaError, DenseArena, Map, StateId};

use crate::ArenaFile;

/// Builds a dense arena from a parsed description, stamping each node's
/// colour on its outgoing edges.
///
/// Returns the node-id to state table next to the arena so callers can map
/// solver answers back to the file's identifiers.
pub fn arena_file_to_arena(
    file: &ArenaFile,
    initial: usize,
) -> Result<(DenseArena, Map<usize, StateId>), ArenaError> {
    let mut builder = ArenaBuilder::new(file.max_colour);

    let node_id_to_state =
        file.nodes.iter().map(|n| (n.id, builder.add_state(n.owner))).collect::<Map<_, _>>();

    for node in &file.nodes {
        let source = node_id_to_state[&node.id];
        for successor in &node.successors {
            builder.add_edge(source, node_id_to_state[successor], node.colour);
        }
    }

    builder.initial_state(node_id_to_state[&initial]);

    Ok((builder.build()?, node_id_to_state))
}
