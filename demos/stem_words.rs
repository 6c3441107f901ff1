use porter2::Porter2;

fn main() {
    let stemmer = Porter2::new();
    let words = vec![
        "consign", "consigned", "consigning", "consignment",
        "generalization", "knightly", "hopping", "skies", "succeed",
    ];

    println!("=== Porter2 stems ===");
    for word in words {
        match stemmer.stem_traced(word) {
            Ok(trace) => println!(
                "{:>16} -> {:<12} {:?} {:?}",
                word, trace.stem, trace.outcome, trace.changed_by
            ),
            Err(e) => eprintln!("{}: {}", word, e),
        }
    }
}
