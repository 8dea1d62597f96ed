use crate::NodeId;
use crate::session::Command;
use clap::Parser;
use std::path::PathBuf;

/// One line typed at the console prompt.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(about = "Playback controls", long_about = None)]
pub enum Input {
    #[command(about = "Start or resume playback", alias = "p")]
    Play,
    #[command(about = "Pause playback; markers in flight keep moving")]
    Pause,
    #[command(about = "Pause and process exactly one sample", aliases = ["s", "next"])]
    Step,
    #[command(about = "Set playback speed between 0 and 100")]
    Speed {
        #[arg(required = true, value_parser = clap::value_parser!(u8).range(0..=100))]
        value: u8,
    },
    #[command(about = "Fit the whole tree into view")]
    Fit,
    #[command(about = "Rewind to the first sample and clear the stacks")]
    Reset,
    #[command(about = "Describe a node", alias = "i")]
    Inspect {
        #[arg(required = true)]
        node: NodeId,
    },
    #[command(about = "Show progress, speed and running error")]
    Status,
    #[command(about = "Write the current scene as SVG")]
    Snapshot { path: Option<PathBuf> },
    #[command(about = "Leave the explorer", alias = "exit")]
    Quit,
}

impl Input {
    pub fn parse(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once("> ").chain(line.split_whitespace()))
    }
    /// The session control this input maps to, if any.
    pub fn command(&self) -> Option<Command> {
        match self {
            Self::Play => Some(Command::Play),
            Self::Pause => Some(Command::Pause),
            Self::Step => Some(Command::Step),
            Self::Speed { value } => Some(Command::Speed(*value)),
            Self::Fit => Some(Command::Fit),
            Self::Reset => Some(Command::Reset),
            Self::Inspect { node } => Some(Command::Inspect(*node)),
            Self::Status => Some(Command::Status),
            Self::Snapshot { .. } | Self::Quit => None,
        }
    }
}
