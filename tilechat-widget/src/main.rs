use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Target};
use log::LevelFilter;
use tilechat_config::ConfigLoad;
use tilechat_core::ViewerEvent;
use tilechat_model::ItemKind;
use tilechat_widget::session::load_tiles;
use tilechat_widget::{ApiClient, ViewerHandle};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Tile,
    SuggestedOption,
}

impl From<KindArg> for ItemKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Tile => ItemKind::Tile,
            KindArg::SuggestedOption => ItemKind::SuggestedOption,
        }
    }
}

/// Fetch tiles for a category and run a carousel over them, logging what a
/// renderer would draw.
#[derive(Debug, Parser)]
#[command(name = "tilechat", version)]
struct Args {
    /// Tile category, any case (e.g. "kitchen-tiles").
    #[arg(long, default_value = "Bathroom-tiles")]
    category: String,

    /// Tile size such as 600x600; the first size offered is used when omitted.
    #[arg(long)]
    size: Option<String>,

    /// Viewer preset.
    #[arg(long, value_enum, default_value_t = KindArg::Tile)]
    kind: KindArg,

    /// Stop after this many seconds; runs until ctrl-c when omitted.
    #[arg(long)]
    run_for_secs: Option<u64>,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("tilechat", LevelFilter::Debug)
        .filter_module("tilechat_widget", LevelFilter::Debug)
        .filter_module("tilechat_core", LevelFilter::Debug)
        .filter_module("tilechat_config", LevelFilter::Debug)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();
    let ConfigLoad { config, source } =
        ConfigLoad::load_from_env().context("failed to load configuration")?;
    log::info!("Configuration loaded from {source}");

    let api = ApiClient::from_config(&config)?;
    let selection =
        load_tiles(&api, &args.category, args.size.as_deref()).await?;
    log::info!(
        "Showing {} tiles for {} / {}",
        selection.items.len(),
        selection.category,
        selection.size
    );

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let viewer = ViewerHandle::mount(
        selection.items,
        config.viewer_for(args.kind.into()),
        None,
        events_tx,
    );
    let mut snapshots = viewer.subscribe();
    log::info!("{}", snapshots.borrow_and_update().describe());

    let deadline = async {
        match args.run_for_secs {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted");
                break;
            }
            () = &mut deadline => break,
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                log::info!("{}", snapshots.borrow_and_update().describe());
            }
            Some(event) = events_rx.recv() => match event {
                ViewerEvent::CategoryChangeRequested => {
                    log::info!(
                        "Category change requested; restart with --category"
                    );
                }
                ViewerEvent::DetailsRequested { url } => {
                    log::info!("Details: {url}");
                }
                other => log::debug!("{other:?}"),
            },
        }
    }

    viewer.unmount().await;
    Ok(())
}
