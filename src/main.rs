// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example endgame -- path/to/ticTacToeData.csv
fn main() {
    println!("tictacnet: a from-scratch feedforward network for tic-tac-toe endgames.");
    println!("Run `cargo run --example endgame -- <csv path>` to train on a dataset.");
}
