/// Phrasebook Check — runs golden transform cases and reports mismatches.
///
/// Usage: phrasebook_check <phrasebook.ron> [<phrasebook.ron> ...]

use olde_english::schema::phrasebook::Phrasebook;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: phrasebook_check <phrasebook.ron> [<phrasebook.ron> ...]");
        process::exit(0);
    }

    let mut total_cases = 0;
    let mut failures = 0;

    for path_str in &args[1..] {
        let path = Path::new(path_str);
        let book = match Phrasebook::load_from_ron(path) {
            Ok(book) => book,
            Err(e) => {
                eprintln!("ERROR: Failed to load '{}': {}", path.display(), e);
                process::exit(1);
            }
        };

        println!("Loaded {} cases from {}", book.cases.len(), path.display());
        total_cases += book.cases.len();

        for m in book.check() {
            failures += 1;
            println!("MISMATCH {}#{}", path.display(), m.index);
            println!("  input:    {:?}", m.input);
            println!("  expected: {:?}", m.expected);
            println!("  actual:   {:?}", m.actual);
        }
    }

    println!("\nSummary: {} cases, {} mismatches", total_cases, failures);

    if failures > 0 {
        process::exit(1);
    }
}
