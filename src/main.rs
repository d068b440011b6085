/*!
 * SchedSim - Main Entry Point
 *
 * Scheduling bookkeeping driver that:
 * - Seeds a process table with randomly prioritized PCBs
 * - Admits every process to the ready queue
 * - Drains the queue in priority order and reports statistics
 */

use anyhow::Context;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use sched_sim::core::limits::{PRIORITY_MAX, PRIORITY_MIN};
use sched_sim::{init_tracing, Dispatcher, SimConfig};

fn main() -> anyhow::Result<()> {
    // Initialize structured tracing
    init_tracing();

    info!("SchedSim starting...");
    info!("================================================");

    let config = SimConfig::from_env().context("invalid environment configuration")?;
    info!(
        "Configured: {} table slots, {} processes, seed {:?}",
        config.table_capacity, config.process_count, config.seed
    );

    let dispatcher = Dispatcher::from_config(&config);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("Spawning {} processes...", config.process_count);
    let mut pids = Vec::with_capacity(config.process_count);
    for _ in 0..config.process_count {
        let priority = rng.gen_range(PRIORITY_MIN..=PRIORITY_MAX);
        let pid = dispatcher.spawn(priority).context("spawn failed")?;
        pids.push(pid);
    }

    info!("Admitting all spawned processes to the ready queue...");
    for &pid in &pids {
        dispatcher.admit(pid).context("admit failed")?;
    }

    dispatcher.display_queue();

    info!("Draining the ready queue in priority order...");
    while let Some(pcb) = dispatcher.dispatch() {
        info!("Dispatched {}", pcb);
    }

    let queue_stats = dispatcher.queue_stats();
    info!(
        "Queue totals: {} enqueued, {} dequeued, {} reclaimed, {} growths, peak {}",
        queue_stats.enqueued,
        queue_stats.dequeued,
        queue_stats.reclaimed,
        queue_stats.growths,
        queue_stats.peak_len
    );

    let stats = dispatcher.stats();
    info!(
        "Dispatcher totals: {} spawned, {} admitted, {} dispatched, {} released",
        stats.spawned, stats.admitted, stats.dispatched, stats.released
    );

    if config.json_snapshot {
        let snapshot = dispatcher.snapshot();
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("snapshot serialization failed")?
        );
    }

    info!("SchedSim run complete");
    Ok(())
}
