use crate::polyline::Polyline;

/// Ordered set of renderable objects composed for a single frame's render.
/// Objects have no identity beyond list membership and live for the whole
/// process.
#[derive(Debug, Default)]
pub struct Scene {
    lines: Vec<Polyline>,
}

impl Scene {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn add(&mut self, line: Polyline) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Polyline] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [Polyline] {
        &mut self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
