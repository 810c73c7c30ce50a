use game::is_realizable;
use pg::{arena_file_to_arena, parse_arena_file};

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).expect("No arena file provided");
    let initial = std::env::args()
        .nth(2)
        .map(|n| n.parse().expect("Failed to parse initial node"))
        .unwrap_or(0);

    let now = std::time::Instant::now();

    let source = std::fs::read_to_string(path).expect("Failed to read arena file");
    let file = parse_arena_file(&source).expect("Failed to parse arena file");
    let (arena, _) = arena_file_to_arena(&file, initial).expect("Invalid arena");

    println!("Preprocessing took {:?}", now.elapsed());

    let now = std::time::Instant::now();

    let realizable = is_realizable(&arena);

    println!("Solve took {:?}", now.elapsed());
    println!("The specification is {}", if realizable { "REALISABLE" } else { "UNREALISABLE" });
}
