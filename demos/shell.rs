use runcollapse::{normalize, Strategy};
use std::io::{self, BufRead, Write};

/// Interactive shell for the two collapse strategies.
///
/// Usage: cargo run --example shell
///
/// Reads a string and a 1/2 menu choice, prints the original, the
/// strategy name and the result, then offers another round. An invalid
/// input is reported and the loop re-prompts; it never exits the program.
fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Consecutive run collapser");
    println!("Collapses runs of 3+ identical characters.");
    println!("Only lowercase letters (a-z) are supported.\n");

    loop {
        print!("Enter the string to process: ");
        io::stdout().flush()?;
        let input = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        // Deliberately not trimmed: whitespace is an invalid-character
        // error, and the shell should show it rather than hide it.
        let input = normalize(Some(input.as_str()));

        let strategy = loop {
            println!("\nChoose strategy:");
            println!("1 - remove runs of 3+ consecutive characters");
            println!("2 - replace runs of 3+ consecutive characters with the previous letter");
            print!("Enter your choice (1 or 2): ");
            io::stdout().flush()?;

            match lines.next() {
                Some(line) => match line?.trim() {
                    "1" => break Strategy::Remove,
                    "2" => break Strategy::Replace,
                    other => println!("Invalid choice {:?}.", other),
                },
                None => return Ok(()),
            }
        };

        match strategy.process(input) {
            Ok(result) => {
                println!("\nOriginal string:  {}", input);
                println!("Strategy used:    {}", strategy.name());
                println!("Processed string: {}", result);
            }
            Err(err) => println!("\nError: {}", err),
        }

        print!("\nProcess another string? (y/n): ");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => {
                if !line?.trim().to_lowercase().starts_with('y') {
                    break;
                }
            }
            None => break,
        }
    }

    println!("Bye.");
    Ok(())
}
