// Prints a table of sample readings.
// Run with: cargo run --bin doc-so-samples
use crossterm::style::Stylize;
use doc_so::NumberReader;

fn main() {
    let reader = NumberReader::vietnamese();
    let test_cases = [
        "0", "5", "-5", "10", "15", "21", "24", "25", "100", "101", "110", "1000", "1005",
        "3000001", "1,000,000", "1,234,567", "0.5", "12.34", "1.005", "3.14159",
        "999999999999999999999",
    ];
    for literal in test_cases.iter() {
        match reader.read(*literal) {
            Ok(text) => println!("{:>24} => {}", literal, text),
            Err(e) => println!("{:>24} => {}", literal, e.to_string().red()),
        }
    }
}
