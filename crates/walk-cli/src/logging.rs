//! logging.rs — Initialisation `tracing-subscriber` pour la CLI.
//!
//! Niveau par défaut selon `-v` : warn, info, debug, trace.
//! Avec `trace` (flag `--trace`, `WALK_TRACE`, fichier), la cible `walk-core`
//! passe au niveau `trace`. `RUST_LOG` a toujours le dernier mot.

use tracing_subscriber::EnvFilter;

pub fn default_directive(verbose: u8, trace: bool) -> String {
    let base = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    if trace {
        format!("{base},walk-core=trace")
    } else {
        base.to_owned()
    }
}

/// Installe le subscriber global. Sans effet s’il y en a déjà un (tests).
pub fn init(verbose: u8, trace: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, trace)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_ladder() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "info");
        assert_eq!(default_directive(2, false), "debug");
        assert_eq!(default_directive(9, false), "trace");
    }

    #[test]
    fn trace_flag_opens_the_core_target() {
        assert_eq!(default_directive(0, true), "warn,walk-core=trace");
        assert_eq!(default_directive(2, true), "debug,walk-core=trace");
        // directive acceptée par EnvFilter
        assert!(EnvFilter::try_new(default_directive(0, true)).is_ok());
    }
}
