use std::{io, time::Duration};

use bon::Builder;
use clap::Parser;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader, stdin},
    signal::ctrl_c,
    time::{MissedTickBehavior, interval},
};

use crate::{
    cli::{insight::InsightArgs, simulation::SimulationArgs},
    core::History,
    dashboard::{Dashboard, Refresh},
    fmt::FlowLine,
    prelude::*,
    tables::{build_history_table, build_snapshot_table},
};

#[derive(Parser)]
pub struct WatchArgs {
    /// Refresh period.
    #[clap(long, env = "REFRESH_INTERVAL", default_value = "5min", value_parser = parse_period)]
    interval: humantime::Duration,

    /// Stop after this many refreshes.
    #[clap(long)]
    ticks: Option<u64>,

    /// Number of recent snapshots to keep for the trend table, zero disables it.
    #[clap(long, env = "HISTORY_SIZE", default_value = "12")]
    history_size: usize,

    #[clap(flatten)]
    simulation: SimulationArgs,

    #[clap(flatten)]
    insight: InsightArgs,
}

fn parse_period(value: &str) -> Result<humantime::Duration> {
    let period: humantime::Duration = value.parse()?;
    ensure!(!period.is_zero(), "the refresh period must be positive");
    Ok(period)
}

impl WatchArgs {
    pub async fn run(self) -> Result {
        let period: Duration = *self.interval;
        let mut dashboard = Dashboard::builder()
            .current(self.simulation.initial_snapshot()?)
            .simulator(self.simulation.simulator())
            .rng(self.simulation.rng())
            .insights(self.insight.insights()?)
            .history(History::with_capacity(self.history_size))
            .build();

        println!("{}", build_snapshot_table(dashboard.current()));
        println!("{}", FlowLine(dashboard.current()));
        info!(?period, "watching, press Enter to refresh now");

        let n_refreshes = Watcher::builder()
            .period(period)
            .maybe_ticks(self.ticks)
            .build()
            .run(&mut dashboard, BufReader::new(stdin()), ctrl_c(), render)
            .await?;
        debug!(n_refreshes, "stopped");
        Ok(())
    }
}

fn render(refresh: &Refresh, dashboard: &Dashboard) {
    println!("{}", build_snapshot_table(&refresh.snapshot));
    println!("{}", FlowLine(&refresh.snapshot));
    if dashboard.history().len() > 1 {
        println!("{}", build_history_table(dashboard.history()));
    }
    println!("💡 {}", refresh.insight);
}

/// Refresh loop: fires on the timer and on every input line, one refresh at a time.
#[derive(Builder)]
pub struct Watcher {
    period: Duration,

    /// Stop after this many refreshes.
    ticks: Option<u64>,
}

impl Watcher {
    /// Run until `shutdown` resolves or the tick limit is reached, returning the number of refreshes.
    ///
    /// A manual trigger restarts the timer. Once the input is exhausted only the timer remains.
    pub async fn run<I, S>(
        &self,
        dashboard: &mut Dashboard,
        input: I,
        shutdown: S,
        mut on_refresh: impl FnMut(&Refresh, &Dashboard),
    ) -> Result<u64>
    where
        I: AsyncBufRead + Unpin,
        S: Future<Output = io::Result<()>>,
    {
        let mut interval = interval(self.period);
        interval.reset_after(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut lines = input.lines();
        let mut is_input_open = true;
        let mut n_refreshes = 0;
        tokio::pin!(shutdown);

        while self.ticks.is_none_or(|ticks| n_refreshes < ticks) {
            tokio::select! {
                _ = interval.tick() => {}
                line = lines.next_line(), if is_input_open => {
                    if line?.is_none() {
                        debug!("input closed, manual refresh disabled");
                        is_input_open = false;
                        continue;
                    }
                    interval.reset();
                }
                result = &mut shutdown => {
                    result?;
                    info!("interrupted");
                    break;
                }
            }

            // The refresh, including the insight, completes before the next trigger is accepted:
            let refresh = tokio::select! {
                refresh = dashboard.refresh() => refresh,
                result = &mut shutdown => {
                    result?;
                    info!("interrupted");
                    break;
                }
            };
            n_refreshes += 1;
            on_refresh(&refresh, dashboard);
        }

        Ok(n_refreshes)
    }
}
