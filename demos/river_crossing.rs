//! Solve the classic fox/goose/beans crossing and print the path.

use crossway::puzzle::Puzzle;
use crossway::search::Strategy;

fn main() {
    let puzzle = Puzzle::fox_goose_beans();
    let report = puzzle
        .solve(Strategy::DepthFirst)
        .expect("the classic puzzle is well-formed");

    match report.path() {
        Some(path) => {
            println!("Solution path found:");
            for (i, state) in path.iter().enumerate() {
                println!("State {i}: {state}");
            }
        }
        None => println!("No solution path found"),
    }
}
