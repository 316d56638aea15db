//! Define a puzzle entirely as JSON and solve it.
//!
//! The wolf joins the classic cast: with capacity 2 the boat ferries two
//! passengers at once, so the crossing finishes in three trips.

use crossway::puzzle::Puzzle;
use crossway::search::Strategy;

const DEFINITION: &str = r#"{
    "start": {
        "near": ["boat", "cabbage", "goat", "wolf"],
        "far": []
    },
    "goal": {
        "near": [],
        "far": ["boat", "cabbage", "goat", "wolf"]
    },
    "facilitator": "boat",
    "capacity": 2,
    "rules": [
        "(wolf AND goat) AND NOT boat",
        "(goat AND cabbage) AND NOT boat"
    ]
}"#;

fn main() {
    let puzzle = Puzzle::from_json(DEFINITION).expect("definition is well-formed");
    let report = puzzle
        .solve(Strategy::BreadthFirst)
        .expect("puzzle is structurally sound");

    match report.path() {
        Some(path) => {
            println!("Solved in {} crossings:", path.len() - 1);
            for (i, state) in path.iter().enumerate() {
                println!("State {i}: {state}");
            }
        }
        None => println!("No solution path found"),
    }
}
