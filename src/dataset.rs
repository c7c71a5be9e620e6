/// Paired samples extracted from a workbook.
///
/// The sequences only grow through [`Dataset::push`], so they always have
/// the same length.
#[derive(Debug, Default)]
pub struct Dataset {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Dataset {
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
