use env_logger::{Env, Target};

/// Diagnostics go to stderr so stdout carries nothing but the outcome line.
/// `RUST_LOG` overrides the default `warn` filter.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();
}
