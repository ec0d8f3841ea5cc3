// Active pointer bookkeeping for the viewer gestures
use kurbo::{Point, Vec2};

/// One active pointer: where it is now and where the current drag started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRecord {
    pub id: i32,
    pub last: Point,
    pub press: Point,
}

impl PointerRecord {
    pub fn new(id: i32, pos: Point) -> Self {
        Self {
            id,
            last: pos,
            press: pos,
        }
    }

    pub fn moved_to(self, pos: Point) -> Self {
        Self { last: pos, ..self }
    }

    /// Restarts the drag from the current position.
    pub fn restamped(self) -> Self {
        Self {
            press: self.last,
            ..self
        }
    }

    pub fn drag_offset(&self) -> Vec2 {
        self.last - self.press
    }
}

/// Pointers in press order, keyed by pointer id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerSet {
    records: Vec<PointerRecord>,
}

impl PointerSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: i32) -> Option<&PointerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// A repeated id replaces the old record in place and keeps its order.
    pub fn insert(&mut self, record: PointerRecord) {
        match self.records.iter().position(|r| r.id == record.id) {
            Some(i) => self.records[i] = record,
            None => self.records.push(record),
        }
    }

    /// Returns `false` for ids that are not being tracked.
    pub fn update_position(&mut self, id: i32, pos: Point) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(i) => {
                self.records[i] = self.records[i].moved_to(pos);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i32) -> Option<PointerRecord> {
        let i = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(i))
    }

    pub fn first(&self) -> Option<&PointerRecord> {
        self.records.first()
    }

    /// The two pointers of a pinch; `None` unless exactly two are active.
    pub fn pair(&self) -> Option<(PointerRecord, PointerRecord)> {
        match self.records.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn restamp_all(&mut self) {
        for r in &mut self.records {
            *r = r.restamped();
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
