use super::*;
use crate::FRAME_PERIOD;
use crate::playback::State;
use crate::render::Svg;
use crate::session::Session;
use crate::session::Update;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use tokio::time::MissedTickBehavior;

/// Owns a session and drives it from three sources: console input,
/// the playback deadline, and the display frame clock.
pub struct Runtime {
    session: Session,
    svg: Option<PathBuf>,
    autoplay: bool,
}

impl Runtime {
    pub fn new(session: Session, svg: Option<PathBuf>, autoplay: bool) -> Self {
        Self {
            session,
            svg,
            autoplay,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut inputs = Console::listen();
        let mut frames = tokio::time::interval(FRAME_PERIOD);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut open = true;
        self.session.status();
        if self.autoplay {
            if self.session.total() == 0 {
                log::warn!("no samples to play");
            }
            self.session.play(Instant::now());
        }
        self.flush()?;
        loop {
            if self.exhausted(open) {
                log::info!("playback complete");
                break;
            }
            let deadline = self.session.deadline();
            tokio::select! {
                biased;
                input = inputs.recv(), if open => match input {
                    None if self.autoplay => open = false,
                    None => break,
                    Some(Input::Quit) => break,
                    Some(Input::Snapshot { path }) => self.snapshot(path)?,
                    Some(input) => {
                        if let Some(command) = input.command() {
                            self.session.handle(command, Instant::now());
                        }
                    }
                },
                _ = Self::sleep(deadline) => self.session.timer(Instant::now()),
                _ = frames.tick(), if self.session.busy() => self.session.frame(Instant::now()),
            }
            self.flush()?;
        }
        Ok(())
    }

    /// Whether an autoplay run can stop: nothing is scheduled and either
    /// every sample is done or no further input can arrive.
    fn exhausted(&self, open: bool) -> bool {
        self.autoplay
            && self.session.settled()
            && (!open || self.session.state() == State::Finished)
    }

    async fn sleep(deadline: Option<Instant>) {
        match deadline {
            Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
            None => std::future::pending().await,
        }
    }

    /// Prints pending updates and rewrites the scene file when the
    /// drawing changed.
    fn flush(&mut self) -> anyhow::Result<()> {
        let updates = self.session.drain();
        if updates.is_empty() {
            return Ok(());
        }
        updates.iter().for_each(Console::show);
        if updates.iter().any(Update::redraws) {
            if let Some(path) = self.svg.as_deref() {
                self.write(path)?;
            }
        }
        if !self.autoplay {
            Console::prompt();
        }
        Ok(())
    }

    fn snapshot(&mut self, path: Option<PathBuf>) -> anyhow::Result<()> {
        match path.or_else(|| self.svg.clone()) {
            Some(path) => {
                self.write(&path)?;
                println!("wrote {}", path.display());
            }
            None => eprintln!("no snapshot path; pass one or start with --svg"),
        }
        Console::prompt();
        Ok(())
    }

    fn write(&self, path: &Path) -> anyhow::Result<()> {
        use anyhow::Context;
        Svg::draw(&self.session, Instant::now())
            .save(path)
            .with_context(|| format!("write scene {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::session::Settings;
    use crate::tree::Meta;
    use crate::tree::Model;
    use crate::tree::TreeNode;
    use std::time::Duration;

    fn runtime(csv: &str, autoplay: bool) -> Runtime {
        let model = Model::new(
            0,
            vec![
                TreeNode::split(0, 0, 5.0, 1, 2),
                TreeNode::leaf(1, 1.0),
                TreeNode::leaf(2, 2.0),
            ],
        )
        .unwrap();
        let session = Session::new(
            model,
            Meta::new(vec!["feat0".into()], "target"),
            Dataset::parse(csv).unwrap(),
            Settings::default(),
        )
        .unwrap();
        Runtime::new(session, None, autoplay)
    }

    #[test]
    fn empty_autoplay_stops_once_input_closes() {
        let mut runtime = runtime("feat0,target\n", true);
        runtime.session.play(Instant::now());
        assert!(!runtime.exhausted(true));
        assert!(runtime.exhausted(false));
    }
    #[test]
    fn paused_autoplay_stops_once_input_closes() {
        let now = Instant::now();
        let mut runtime = runtime("feat0,target\n1,1\n9,2\n", true);
        runtime.session.play(now);
        assert!(!runtime.exhausted(false));
        runtime.session.pause();
        assert!(!runtime.exhausted(true));
        assert!(runtime.exhausted(false));
    }
    #[test]
    fn finished_autoplay_waits_for_landings() {
        let now = Instant::now();
        let mut runtime = runtime("feat0,target\n1,1\n", true);
        runtime.session.play(now);
        runtime.session.timer(now + Duration::from_secs(1));
        assert_eq!(runtime.session.state(), State::Finished);
        assert!(!runtime.exhausted(true));
        runtime.session.frame(now + Duration::from_secs(10));
        assert!(runtime.exhausted(true));
    }
    #[test]
    fn interactive_runs_never_stop_on_their_own() {
        let runtime = runtime("feat0,target\n", false);
        assert!(!runtime.exhausted(false));
    }
}
