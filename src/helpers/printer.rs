/// Prints the running best of one iteration as a compact table. Used by the
/// driver when `verbose` is enabled.
pub(crate) fn print_iteration_best(iteration: usize, best_mean: f64, n_pulls: u64) {
    let w = 12;
    let horiz = format!("+{}+{}+", "-".repeat(w), "-".repeat(w));
    let headers = format!("|{:^w$}|{:^w$}|", "Best mean", "Pulls");
    let values = format!("|{best_mean:^w$.4}|{n_pulls:^w$}|");

    println!("Iteration {iteration}:");
    println!("{horiz}");
    println!("{headers}");
    println!("{horiz}");
    println!("{values}");
    println!("{horiz}");
    println!();
}
