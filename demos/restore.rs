//! Restore spaces in a few listings using only the built-in vocabulary.
//!
//! `cargo run --example restore -- "куплюквартирувмоскве"`

use probel::SpaceRestorer;

fn main() {
    let restorer = SpaceRestorer::builder().curated().build();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec![
            "куплюквартиру".to_owned(),
            "ПродаюДиванВХорошемСостоянии".to_owned(),
            "iPhone15ProMaxНедорого".to_owned(),
        ]
    } else {
        inputs
    };

    for input in &inputs {
        let positions = restorer.predict_space_positions(input);
        println!("{input}\n  {positions:?}\n  {}", restorer.restore_spaces(input));
    }
}
