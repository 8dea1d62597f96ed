//! Tree Explorer
//!
//! Replays a test set through an exported regression tree, one sample
//! per tick, with a console readout and an optional live SVG scene.
//!
//! Options: --model, --meta, --data, --speed, --svg, --autoplay

use clap::Parser;
use treeplay::runtime::Args;
use treeplay::runtime::Runtime;
use treeplay::session::Session;
use treeplay::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let args = Args::parse();
    let session = Session::load(&args.model, &args.meta, &args.data, args.settings())?;
    Runtime::new(session, args.svg, args.autoplay).run().await
}
