//! Compare the two traversal orders on the same puzzle.

use crossway::puzzle::Puzzle;
use crossway::search::Strategy;

fn main() {
    let puzzle = Puzzle::fox_goose_beans();

    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        let report = puzzle.solve(strategy).expect("puzzle is structurally sound");
        let crossings = report.path().map(|p| p.len() - 1);

        println!(
            "{:>13}: crossings={:?} expanded={} generated={} tree={}",
            strategy.name(),
            crossings,
            report.stats.nodes_expanded,
            report.stats.states_generated,
            report.stats.tree_size,
        );
    }
}
