use super::Cell;

/// A frame of cells, stored row-major.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn position(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    fn coordinates(&self, position: usize) -> (u16, u16) {
        let width = usize::from(self.width.max(1));
        ((position % width) as u16, (position / width) as u16)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.position(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.position(x, y).map(|i| &mut self.cells[i])
    }

    /// Write `cell` at `(x, y)`; writes outside the frame are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    /// Cells that differ from the same position in `previous`.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| {
                let (x, y) = self.coordinates(i);
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Characters of row `y` with trailing blanks removed.
    pub fn line(&self, y: u16) -> String {
        let Some(start) = self.position(0, y) else {
            return String::new();
        };
        let row = &self.cells[start..start + usize::from(self.width)];
        let text: String = row
            .iter()
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect();
        text.trim_end().to_string()
    }
}
