// Driftcheck release-validation entry point.
// Usage: driftcheck <run|list|env> [--iterations N] [--verbose]

fn main() {
    driftcheck::cli::run();
}
