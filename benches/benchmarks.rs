criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        loading_deep_model,
        routing_random_sample,
        laying_out_deep_tree,
        fitting_view_to_tree,
        interpolating_flight,
        rendering_scene,
}

const DEPTH: usize = 12;

/// Complete binary tree in heap order: node `i` has children `2i+1` and `2i+2`.
fn complete() -> Model {
    let splits = (1 << DEPTH) - 1;
    let nodes = (0..splits)
        .map(|i| TreeNode::split(i, i % 4, 5.0, 2 * i + 1, 2 * i + 2))
        .chain((splits..2 * splits + 1).map(|i| TreeNode::leaf(i, i as f64)))
        .collect::<Vec<_>>();
    Model::new(0, nodes).expect("complete tree")
}

fn meta() -> Meta {
    Meta::new((0..4).map(|i| format!("feat{}", i)).collect(), "target")
}

fn loading_deep_model(c: &mut criterion::Criterion) {
    c.bench_function("validate a depth-12 Model", |b| b.iter(|| complete()));
}

fn routing_random_sample(c: &mut criterion::Criterion) {
    let model = complete();
    let meta = meta();
    let predictor = Predictor::new(&model, &meta);
    c.bench_function("route a random Sample to its leaf", |b| {
        b.iter(|| predictor.predict(&Sample::random()))
    });
}

fn laying_out_deep_tree(c: &mut criterion::Criterion) {
    let model = complete();
    c.bench_function("lay out a depth-12 Hierarchy", |b| {
        b.iter(|| Layout::new(&Hierarchy::from(&model), Spacing::default()))
    });
}

fn fitting_view_to_tree(c: &mut criterion::Criterion) {
    let layout = Layout::from(&complete());
    c.bench_function("fit a Transform to Layout bounds", |b| {
        b.iter(|| Transform::fit(&layout.bounds(), &Viewport::default()))
    });
}

fn interpolating_flight(c: &mut criterion::Criterion) {
    let model = complete();
    let meta = meta();
    let layout = Layout::from(&model);
    let prediction = Predictor::new(&model, &meta)
        .predict(&Sample::random())
        .expect("routable sample");
    let now = Instant::now();
    let flight = Flight::new(
        &layout.trace(&prediction.path),
        prediction.leaf,
        Marker::default(),
        MARKER_VELOCITY,
        now,
    );
    c.bench_function("interpolate a Flight position", |b| {
        b.iter(|| flight.position_at(now + flight.duration() / 2))
    });
}

fn rendering_scene(c: &mut criterion::Criterion) {
    let data = std::iter::once(String::from("feat0,feat1,feat2,feat3,target"))
        .chain((0..64).map(|i| format!("{},{},{},{},{}", i % 10, i % 7, i % 3, i % 9, i)))
        .collect::<Vec<_>>()
        .join("\n");
    let mut session = Session::new(
        complete(),
        meta(),
        Dataset::parse(&data).expect("csv"),
        Settings::default(),
    )
    .expect("session");
    let now = Instant::now();
    (0..64).for_each(|_| session.step(now));
    session.frame(now + std::time::Duration::from_secs(60));
    c.bench_function("render a Session with 64 deposits", |b| {
        b.iter(|| Svg::draw(&session, now))
    });
}

use std::time::Instant;
use treeplay::Arbitrary;
use treeplay::MARKER_VELOCITY;
use treeplay::animation::Flight;
use treeplay::animation::Marker;
use treeplay::data::Dataset;
use treeplay::data::Sample;
use treeplay::layout::Layout;
use treeplay::layout::Spacing;
use treeplay::layout::Transform;
use treeplay::layout::Viewport;
use treeplay::predict::Predictor;
use treeplay::render::Svg;
use treeplay::session::Session;
use treeplay::session::Settings;
use treeplay::tree::Hierarchy;
use treeplay::tree::Meta;
use treeplay::tree::Model;
use treeplay::tree::TreeNode;
