use crate::SPEED_DEFAULT;
use crate::VIEWPORT_HEIGHT;
use crate::VIEWPORT_WIDTH;
use crate::Pixels;
use crate::layout::Viewport;
use crate::playback::Speed;
use crate::session::Settings;
use clap::Parser;
use std::path::PathBuf;

/// Step through a regression tree one test sample at a time.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Exported tree structure
    #[arg(long, default_value = "tree.json")]
    pub model: PathBuf,
    /// Feature names, target name and training summary
    #[arg(long, default_value = "meta.json")]
    pub meta: PathBuf,
    /// Test samples with a header row
    #[arg(long, default_value = "samples.csv")]
    pub data: PathBuf,
    /// Initial playback speed
    #[arg(long, default_value_t = SPEED_DEFAULT, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub speed: u8,
    /// Rewrite this SVG file whenever the scene changes
    #[arg(long)]
    pub svg: Option<PathBuf>,
    #[arg(long, default_value_t = VIEWPORT_WIDTH)]
    pub width: Pixels,
    #[arg(long, default_value_t = VIEWPORT_HEIGHT)]
    pub height: Pixels,
    /// Play immediately and exit once every sample has landed
    #[arg(long)]
    pub autoplay: bool,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            speed: Speed::from(self.speed),
            viewport: Viewport {
                width: self.width,
                height: self.height,
            },
            ..Settings::default()
        }
    }
}
