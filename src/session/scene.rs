use crate::NodeId;
use crate::layout::Transform;
use crate::predict::Link;
use crate::predict::Path;

/// Highlight and camera state of the drawing.
/// At most one path is active; activating another replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    active: Option<Path>,
    transform: Transform,
}

impl Scene {
    pub fn activate(&mut self, path: Path) {
        self.active = Some(path);
    }
    pub fn deactivate(&mut self) {
        self.active = None;
    }
    pub fn active(&self) -> Option<&Path> {
        self.active.as_ref()
    }
    pub fn is_active(&self, id: NodeId) -> bool {
        self.active.as_ref().is_some_and(|p| p.contains(id))
    }
    pub fn is_active_link(&self, link: &Link) -> bool {
        self.active.as_ref().is_some_and(|p| p.contains_link(link))
    }
    pub fn transform(&self) -> Transform {
        self.transform
    }
    pub fn focus(&mut self, transform: Transform) {
        self.transform = transform;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_replaces_previous_path() {
        let mut scene = Scene::default();
        scene.activate(Path::try_from(vec![0, 1]).unwrap());
        scene.activate(Path::try_from(vec![0, 2]).unwrap());
        assert!(scene.is_active(2));
        assert!(!scene.is_active(1));
        assert!(scene.is_active_link(&Link::from((0, 2))));
        assert!(!scene.is_active_link(&Link::from((0, 1))));
        scene.deactivate();
        assert!(!scene.is_active(0));
    }
}
