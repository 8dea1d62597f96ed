use crate::MARKER_RADIUS;
use crate::NODE_RADIUS;
use crate::session::Session;
use crate::tree::Kind;
use std::fmt::Write;
use std::time::Instant;

const STYLE: &str = "\
.link{stroke:#bbb;stroke-width:1.5}\
.link.active{stroke:#e4572e;stroke-width:3}\
.node circle{fill:#fff;stroke:#555;stroke-width:1.5}\
.node.leaf circle{fill:#eef}\
.node.active circle{stroke:#e4572e;stroke-width:3}\
.node text{font:11px sans-serif;fill:#333}\
.deposit.over{fill:#d1495b}\
.deposit.under{fill:#00798c}\
.deposit.unknown{fill:#999}\
.marker{fill:#e4572e}\
.readout{font:13px monospace;fill:#111}";

/// SVG snapshot of a session's scene.
///
/// Element ids are derived from node ids (`node-{id}`, `link-{p}-{c}`),
/// so they are the same in every snapshot of the same model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Svg(String);

impl Svg {
    pub fn draw(session: &Session, now: Instant) -> Self {
        let mut out = String::new();
        Self::write(session, now, &mut out).expect("string write");
        Self(out)
    }
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        std::fs::write(path, self.0.as_bytes())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Svg {
    fn write(session: &Session, now: Instant, out: &mut String) -> std::fmt::Result {
        let viewport = session.settings().viewport;
        let layout = session.layout();
        let scene = session.scene();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = viewport.width,
            h = viewport.height
        )?;
        writeln!(out, "<style>{}</style>", STYLE)?;
        writeln!(out, r#"<g id="viewport" transform="{}">"#, scene.transform())?;
        writeln!(out, r#"<g class="links">"#)?;
        for link in layout.links() {
            let (Some(a), Some(b)) = (layout.point(link.parent), layout.point(link.child)) else {
                continue;
            };
            writeln!(
                out,
                r#"<line id="{}" class="link{}" x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
                link,
                if scene.is_active_link(link) { " active" } else { "" },
                a.x,
                a.y,
                b.x,
                b.y
            )?;
        }
        writeln!(out, "</g>")?;
        writeln!(out, r#"<g class="nodes">"#)?;
        for node in session.model().nodes() {
            let Some(p) = layout.point(node.id()) else {
                continue;
            };
            let (kind, label) = match node.kind() {
                Kind::Leaf(value) => ("leaf", format!("{:.3} (n={})", value, session.stacks().count(node.id()))),
                Kind::Split(split) => (
                    "split",
                    format!(
                        "{} \u{2264} {:.3}",
                        session.meta().feature(split.feature).unwrap_or("?"),
                        split.threshold
                    ),
                ),
            };
            writeln!(
                out,
                r#"<g id="node-{}" class="node {}{}" transform="translate({:.1},{:.1})"><circle r="{}"/><text dx="{}" dy="4">{}</text></g>"#,
                node.id(),
                kind,
                if scene.is_active(node.id()) { " active" } else { "" },
                p.x,
                p.y,
                NODE_RADIUS,
                NODE_RADIUS + 4.0,
                escape(&label)
            )?;
        }
        writeln!(out, "</g>")?;
        writeln!(out, r#"<g class="stacks">"#)?;
        for (p, marker) in session.deposits() {
            let class = match marker.error {
                Some(e) if e > 0.0 => "over",
                Some(_) => "under",
                None => "unknown",
            };
            writeln!(
                out,
                r#"<circle class="deposit {}" data-sample="{}" cx="{:.1}" cy="{:.1}" r="{}"/>"#,
                class, marker.sample, p.x, p.y, MARKER_RADIUS
            )?;
        }
        writeln!(out, "</g>")?;
        writeln!(out, r#"<g class="markers">"#)?;
        for p in session.animator().positions(now) {
            writeln!(
                out,
                r#"<circle class="marker" cx="{:.1}" cy="{:.1}" r="{}"/>"#,
                p.x, p.y, MARKER_RADIUS
            )?;
        }
        writeln!(out, "</g>")?;
        writeln!(out, "</g>")?;
        writeln!(
            out,
            r#"<text class="readout" x="12" y="20">{} [{}]</text>"#,
            escape(&session.readout().to_string()),
            session.state()
        )?;
        writeln!(out, "</svg>")
    }
}

impl std::fmt::Display for Svg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => String::from("&amp;"),
            '<' => String::from("&lt;"),
            '>' => String::from("&gt;"),
            '"' => String::from("&quot;"),
            c => c.to_string(),
        })
        .collect()
}
