use super::*;
use crate::NODE_RADIUS;
use crate::animation::Animator;
use crate::animation::Landing;
use crate::animation::Marker;
use crate::animation::Stacks;
use crate::data::Dataset;
use crate::layout::Bounds;
use crate::layout::Layout;
use crate::layout::Point;
use crate::layout::Transform;
use crate::playback::Cadence;
use crate::playback::Controller;
use crate::playback::Readout;
use crate::playback::Speed;
use crate::playback::State;
use crate::playback::Tally;
use crate::predict::Predictor;
use crate::tree::Hierarchy;
use crate::tree::Meta;
use crate::tree::Model;
use anyhow::Context;
use std::time::Instant;

/// Everything one loaded tree and test set needs to play back.
///
/// Created on load, cleared by an explicit reset, dropped when the viewer
/// goes away. All methods run to completion synchronously; the owner
/// calls [`Session::timer`] when the deadline passes and
/// [`Session::frame`] on every display refresh.
#[derive(Debug)]
pub struct Session {
    model: Model,
    meta: Meta,
    dataset: Dataset,
    layout: Layout,
    settings: Settings,
    controller: Controller,
    cadence: Cadence,
    animator: Animator,
    stacks: Stacks,
    scene: Scene,
    readout: Readout,
    tally: Tally,
    updates: Vec<Update>,
}

impl Session {
    pub fn new(model: Model, meta: Meta, dataset: Dataset, settings: Settings) -> anyhow::Result<Self> {
        model.check(&meta)?;
        let missing = dataset.missing(&meta);
        if !missing.is_empty() {
            log::warn!("sample columns missing: {}", missing.join(", "));
        }
        let layout = Layout::new(&Hierarchy::from(&model), settings.spacing);
        let mut scene = Scene::default();
        scene.focus(Transform::fit(&layout.bounds().grow(NODE_RADIUS), &settings.viewport));
        log::info!(
            "loaded {} nodes (depth {}), {} samples",
            model.len(),
            model.depth(),
            dataset.len()
        );
        Ok(Self {
            controller: Controller::new(dataset.len()),
            cadence: Cadence::new(settings.speed),
            animator: Animator::new(settings.velocity),
            readout: Readout::idle(dataset.len()),
            stacks: Stacks::default(),
            tally: Tally::default(),
            updates: Vec::new(),
            scene,
            layout,
            settings,
            dataset,
            model,
            meta,
        })
    }
    pub fn load(
        model: impl AsRef<std::path::Path>,
        meta: impl AsRef<std::path::Path>,
        data: impl AsRef<std::path::Path>,
        settings: Settings,
    ) -> anyhow::Result<Self> {
        let (model, meta, data) = (model.as_ref(), meta.as_ref(), data.as_ref());
        Self::new(
            Model::load(model).with_context(|| format!("model {}", model.display()))?,
            Meta::load(meta).with_context(|| format!("metadata {}", meta.display()))?,
            Dataset::load(data).with_context(|| format!("samples {}", data.display()))?,
            settings,
        )
    }
}

// dispatch
impl Session {
    pub fn handle(&mut self, command: Command, now: Instant) {
        log::debug!("[session] {}", command);
        match command {
            Command::Play => self.play(now),
            Command::Pause => self.pause(),
            Command::Step => self.step(now),
            Command::Speed(value) => self.set_speed(value, now),
            Command::Fit => self.fit(),
            Command::Reset => self.reset(),
            Command::Inspect(id) => self.inspect(id),
            Command::Status => self.status(),
        }
    }
    pub fn play(&mut self, now: Instant) {
        self.transition(|ctrl| {
            ctrl.play();
        });
        if self.controller.state().is_running() && !self.cadence.armed() {
            self.cadence.arm(now);
        }
    }
    pub fn pause(&mut self) {
        self.transition(|ctrl| {
            ctrl.pause();
        });
        self.cadence.disarm();
    }
    /// Processes exactly one sample now, pausing continuous playback.
    pub fn step(&mut self, now: Instant) {
        let mut next = None;
        self.transition(|ctrl| next = ctrl.step());
        self.cadence.disarm();
        if let Some(index) = next {
            self.process(index, now);
        }
    }
    /// Retunes the tick interval. While running the timer restarts with
    /// the new interval; otherwise nothing happens until the next play.
    pub fn set_speed(&mut self, value: u8, now: Instant) {
        self.settings.speed = Speed::from(value);
        self.cadence.retune(self.settings.speed, now);
        self.updates.push(Update::Speed(self.settings.speed));
    }
    pub fn fit(&mut self) {
        let transform = Transform::fit(&self.extent(), &self.settings.viewport);
        self.scene.focus(transform);
        self.updates.push(Update::Fit(transform));
    }
    /// Zeroes progress and clears every accumulated visual.
    /// Flights still in the air are dropped without landing.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.cadence.disarm();
        self.animator.abandon();
        self.stacks.clear();
        self.scene.deactivate();
        self.readout = Readout::idle(self.dataset.len());
        self.tally = Tally::default();
        self.updates.push(Update::Reset);
        self.updates.push(Update::State(State::Idle));
        self.updates.push(Update::Readout(self.readout));
    }
    pub fn inspect(&mut self, id: crate::NodeId) {
        let update = match self.model.describe(id, &self.meta) {
            Some(text) => Update::Inspect(text),
            None => Update::Notice(format!("no node {}", id)),
        };
        self.updates.push(update);
    }
    pub fn status(&mut self) {
        self.updates.push(Update::State(self.controller.state()));
        self.updates.push(Update::Speed(self.settings.speed));
        self.updates.push(Update::Readout(self.readout));
        self.updates.push(Update::Notice(format!(
            "{} in flight, {} deposited, {}",
            self.animator.in_flight(),
            self.stacks.total(),
            self.tally
        )));
    }
}

// clocks
impl Session {
    /// When the next playback tick is due, if running.
    pub fn deadline(&self) -> Option<Instant> {
        self.cadence.deadline()
    }
    /// Fires the periodic tick if its deadline has passed.
    pub fn timer(&mut self, now: Instant) {
        if !self.cadence.due(now) {
            return;
        }
        let mut next = None;
        self.transition(|ctrl| next = ctrl.tick());
        if let Some(index) = next {
            self.process(index, now);
        }
        match self.controller.state().is_running() {
            true => self.cadence.arm(now),
            false => self.cadence.disarm(),
        }
    }
    /// Advances flights and deposits those that arrived.
    pub fn frame(&mut self, now: Instant) {
        let stacks = &mut self.stacks;
        let updates = &mut self.updates;
        self.animator
            .frame(now, |landing| Self::land(stacks, updates, landing));
    }
    pub fn drain(&mut self) -> Vec<Update> {
        std::mem::take(&mut self.updates)
    }
}

// accessors
impl Session {
    pub fn model(&self) -> &Model {
        &self.model
    }
    pub fn meta(&self) -> &Meta {
        &self.meta
    }
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
    pub fn stacks(&self) -> &Stacks {
        &self.stacks
    }
    pub fn animator(&self) -> &Animator {
        &self.animator
    }
    pub fn readout(&self) -> Readout {
        self.readout
    }
    pub fn tally(&self) -> Tally {
        self.tally
    }
    pub fn state(&self) -> State {
        self.controller.state()
    }
    pub fn index(&self) -> usize {
        self.controller.index()
    }
    pub fn total(&self) -> usize {
        self.controller.total()
    }
    pub fn speed(&self) -> Speed {
        self.settings.speed
    }
    /// Whether any marker is still travelling.
    pub fn busy(&self) -> bool {
        self.animator.in_flight() > 0
    }
    /// No tick is scheduled and no marker is in the air, so nothing
    /// changes until the next command.
    pub fn settled(&self) -> bool {
        self.deadline().is_none() && !self.busy()
    }
    /// Position of every deposited marker.
    pub fn deposits(&self) -> Vec<(Point, Marker)> {
        self.stacks
            .iter()
            .filter_map(|(leaf, markers)| self.layout.point(leaf).map(|p| (p, markers)))
            .flat_map(|(p, markers)| {
                markers
                    .iter()
                    .enumerate()
                    .map(move |(i, m)| (self.settings.grid.place(p, i), *m))
            })
            .collect()
    }
}

impl Session {
    /// Runs one tick's worth of work for the sample at `index`.
    fn process(&mut self, index: usize, now: Instant) {
        let Some(sample) = self.dataset.get(index) else {
            return;
        };
        let truth = sample.number(self.meta.target());
        let total = self.dataset.len();
        match Predictor::new(&self.model, &self.meta).predict(sample) {
            Ok(prediction) => {
                let error = truth.map(|t| prediction.error(t));
                log::debug!(
                    "[session] sample {} -> leaf {} via {}",
                    index + 1,
                    prediction.leaf,
                    prediction.path
                );
                match error {
                    Some(e) => self.tally.record(e),
                    None => log::warn!("sample {} has no numeric {}", index + 1, self.meta.target()),
                }
                self.readout = Readout {
                    index: index + 1,
                    total,
                    truth,
                    predicted: Some(prediction.value),
                };
                let points = self.layout.trace(&prediction.path);
                let marker = Marker {
                    sample: index,
                    error,
                };
                self.scene.activate(prediction.path);
                self.updates.push(Update::Readout(self.readout));
                let stacks = &mut self.stacks;
                let updates = &mut self.updates;
                self.animator.animate(&points, prediction.leaf, marker, now, |landing| {
                    Self::land(stacks, updates, landing)
                });
            }
            Err(reason) => {
                log::warn!("sample {} failed: {}", index + 1, reason);
                self.tally.fail();
                self.scene.deactivate();
                self.readout = Readout {
                    index: index + 1,
                    total,
                    truth,
                    predicted: None,
                };
                self.updates.push(Update::Failed {
                    index: index + 1,
                    reason,
                });
                self.updates.push(Update::Readout(self.readout));
            }
        }
        if self.controller.state() == State::Finished {
            log::info!("playback finished: {}", self.tally);
            self.updates.push(Update::Finished(self.tally));
        }
    }
    fn land(stacks: &mut Stacks, updates: &mut Vec<Update>, landing: Landing) {
        let slot = stacks.deposit(landing.leaf, landing.marker);
        updates.push(Update::Landed {
            leaf: landing.leaf,
            slot,
        });
    }
    /// Applies a controller mutation and reports a state change.
    fn transition<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Controller),
    {
        let before = self.controller.state();
        f(&mut self.controller);
        let after = self.controller.state();
        if before != after {
            log::debug!("[session] {} -> {}", before, after);
            self.updates.push(Update::State(after));
        }
    }
    /// Tree plus every deposited marker.
    fn extent(&self) -> Bounds {
        let nodes = self.layout.bounds().grow(NODE_RADIUS);
        match self.stacks.is_empty() {
            true => nodes,
            false => nodes.union(&Bounds::enclosing(self.deposits().into_iter().map(|(p, _)| p))),
        }
    }
}
