//! walk-cli/src/lib.rs — CLI lib pour `walk`
//!
//! Sous-commandes :
//!   - eval : calcule term(N) (stratégie, budget, stats)
//!   - seq  : liste COUNT termes à partir de l’indice K
//!   - demo : rejoue la démonstration (code de sortie = entrée)
//!
//! `run()` est le point d’entrée du binaire ; `execute()` prend une `Cli` déjà
//! parsée et un `Write` pour la sortie (tests).

use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use walk_core::{demo, terms, CliOverrides, EvalConfig, Evaluator, Index, Strategy};

pub mod logging;
pub mod settings;

use settings::Settings;

/// Point d’entrée du binaire (à appeler depuis src/main.rs).
/// Renvoie le statut de processus à transmettre à `std::process::exit`.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out, |k| std::env::var(k).ok())
}

#[derive(Parser, Debug)]
#[command(name = "walk", version, about = "Évaluateur de la suite walk (term(0)=term(1)=1)")]
pub struct Cli {
    /// Verbosité (répéter pour plus de bruit)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Fichier de configuration (défaut : ./walk.toml s’il existe)
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Calcule term(N)
    Eval(EvalArgs),
    /// Affiche COUNT termes à partir de l’indice --start
    Seq(SeqArgs),
    /// Rejoue la démonstration : écrit term(N) dans l’emplacement, sort avec N
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Indice N (>= 0)
    #[arg(allow_negative_numbers = true)]
    pub index: Index,

    /// iterative | memoized | recursive
    #[arg(long)]
    pub strategy: Option<Strategy>,

    /// Plus grand indice accepté
    #[arg(long)]
    pub max_index: Option<u32>,

    /// Budget d’appels de la stratégie récursive
    #[arg(long)]
    pub max_calls: Option<u64>,

    /// Trace chaque pas (niveau `trace`)
    #[arg(long)]
    pub trace: bool,

    /// Affiche aussi la stratégie et le nombre de pas
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args, Debug)]
pub struct SeqArgs {
    /// Nombre de termes
    pub count: usize,

    /// Premier indice
    #[arg(long, default_value_t = 0)]
    pub start: usize,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Entrée de la démonstration
    #[arg(long, default_value_t = demo::DEMO_INPUT, allow_negative_numbers = true)]
    pub input: Index,
}

impl EvalArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            strategy: self.strategy,
            max_index: self.max_index,
            max_calls: self.max_calls,
            trace: self.trace.then_some(true),
        }
    }
}

/// Exécute la sous-commande. Renvoie le statut de processus.
///
/// Le subscriber est installé ici, une fois la configuration résolue, pour
/// que `trace` (flag, ENV ou fichier) ouvre la cible `walk-core`.
pub fn execute(
    cli: &Cli,
    out: &mut dyn Write,
    env: impl Fn(&str) -> Option<String>,
) -> Result<i32> {
    match &cli.cmd {
        Cmd::Eval(a) => {
            let file = Settings::load(cli.config.as_deref())?;
            let cfg = settings::resolve(file.eval, env, &a.overrides())?;
            logging::init(cli.verbose, cfg.trace);
            cmd_eval(a, cfg, out)
        }
        Cmd::Seq(a) => {
            logging::init(cli.verbose, false);
            cmd_seq(a, out)
        }
        Cmd::Demo(a) => {
            logging::init(cli.verbose, false);
            cmd_demo(a, out)
        }
    }
}

fn cmd_eval(a: &EvalArgs, cfg: EvalConfig, out: &mut dyn Write) -> Result<i32> {
    tracing::info!(index = a.index, strategy = %cfg.strategy, "eval");
    let mut ev = Evaluator::new(cfg);
    let res = ev
        .evaluate_with_stats(a.index)
        .wrap_err_with(|| format!("évaluation de term({})", a.index))?;
    if a.stats {
        writeln!(out, "term({}) = {}  [{}, {} pas]", res.index, res.term, res.strategy, res.steps)?;
    } else {
        writeln!(out, "{}", res.term)?;
    }
    Ok(0)
}

fn cmd_seq(a: &SeqArgs, out: &mut dyn Write) -> Result<i32> {
    let mut printed = 0usize;
    for (k, t) in terms().enumerate().skip(a.start).take(a.count) {
        writeln!(out, "{k}\t{t}")?;
        printed += 1;
    }
    if printed < a.count {
        tracing::warn!(
            requested = a.count,
            printed,
            "suite tronquée : les termes suivants dépassent i64::MAX"
        );
    }
    Ok(0)
}

fn cmd_demo(a: &DemoArgs, out: &mut dyn Write) -> Result<i32> {
    let res = demo::run(a.input).wrap_err("démonstration")?;
    writeln!(out, "slot = {}", res.slot)?;
    Ok(i32::from(res.exit_code))
}
