use chumsky::error::Simple;
use chumsky::primitive::{choice, just, none_of};
use chumsky::text::TextParser;
use chumsky::{text, Parser};
use game::Owner;

use crate::{ArenaFile, Node};

pub fn parse_arena_file(source: &str) -> Result<ArenaFile, Vec<Simple<char>>> {
    let arena = just("arena").padded();
    let number = text::int(10).map(|n: String| n.parse::<usize>().unwrap()).padded();
    let comma = just(',').padded();
    let semi = just(';');
    let newline = text::newline();

    let header = arena.ignore_then(number).then_ignore(semi).then_ignore(newline);

    let owner = choice((just('0').to(Owner::Player1), just('1').to(Owner::Player2))).padded();
    let successors = number.separated_by(comma);
    let name = none_of("\";")
        .repeated()
        .collect::<String>()
        .delimited_by(just('"'), just('"'))
        .padded();
    let row = number.then(number).then(owner).then(successors).then(name.or_not());
    let row = row.map(|((((id, colour), owner), successors), name)| Node {
        id,
        colour,
        owner,
        successors,
        name,
    });

    let rows = row.then_ignore(semi).separated_by(newline).allow_trailing();
    let file = header.then(rows).map(|(max_colour, nodes)| ArenaFile { max_colour, nodes });

    file.parse(source)
}
