use crate::reports;
use clap::Args;
use keytravel::api;
use keytravel::config::SearchParams;
use keytravel::error::KtResult;
use keytravel::geometry::KeyboardDefinition;
use keytravel::layout::{layout_string, ScoredLayout};
use keytravel::optimizer::run_iterative_async;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub params: SearchParams,

    /// Keep breeding generations instead of sampling once
    #[arg(short = 'i', long, default_value_t = false)]
    pub iterative: bool,

    /// Stop the iterative search after this many seconds
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    /// JSON file with search parameters (replaces the flag values)
    #[arg(long)]
    pub params_file: Option<String>,
}

pub fn run(args: SearchArgs, def: &KeyboardDefinition, text: &str) -> KtResult<()> {
    let params = match &args.params_file {
        Some(path) => {
            info!("⚖️  Loading search parameters from: {}", path);
            SearchParams::load_from_file(path)?
        }
        None => args.params.clone(),
    };
    params.validate()?;

    let best = if args.iterative {
        run_generational(&args, def, text, params)?
    } else {
        info!(
            "🎲 Sampling {} random layouts for {} markers",
            params.population_size,
            def.marker_count()
        );
        api::optimize_once(def, text, &params)?
    };

    info!("=== 🏆 FINAL RESULT ===");
    info!("Distance: {:.2}", best.distance());
    info!("Layout: {}", layout_string(best.layout()));
    reports::print_layout_table("OPTIMIZED", best.layout());
    Ok(())
}

fn run_generational(
    args: &SearchArgs,
    def: &KeyboardDefinition,
    text: &str,
    params: SearchParams,
) -> KtResult<ScoredLayout> {
    let prepared = api::prepare(def, text)?;
    let deadline = args.time.map(|t| Instant::now() + Duration::from_secs(t));

    if deadline.is_none() && params.max_generations.is_none() {
        info!("🔁 Running until interrupted (Ctrl-C)");
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let flag = interrupted.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => flag.store(true, Ordering::Relaxed),
                Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
            }
        });

        let logger = |generation: usize, best: &ScoredLayout| {
            info!(
                "Gen {:6} | Best: {:.2} | {}",
                generation,
                best.distance(),
                layout_string(best.layout())
            );
        };
        let is_cancelled = || {
            interrupted.load(Ordering::Relaxed) || deadline.is_some_and(|d| Instant::now() >= d)
        };

        run_iterative_async(prepared.inputs, prepared.scorer, params, &logger, is_cancelled).await
    })
}
