//! Prints the generated load/save module for the entities in `model.rs`.
//!
//! Set `RUST_LOG=debug` to see per-kind schema details on stderr.

mod model;

fn main() {
    propkit_build::run_from_inventory();
}
