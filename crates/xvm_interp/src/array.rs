//! Growable slot array backing the `array` value kind.

use crate::values::{clone_value, Value};

/// Starting slot count for every array.
pub const ARRAY_INITIAL_CAPACITY: usize = 64;

/// A growable array of values.
///
/// The buffer is a fixed set of slots (all reachable by index) that doubles
/// whenever a write lands past the end. The logical size is the number of
/// non-nil slots and is maintained on every write rather than recomputed by
/// scanning.
#[derive(Debug)]
pub struct VmArray {
    data: Vec<Value>,
    len: usize,
}

impl Default for VmArray {
    fn default() -> Self {
        VmArray::new()
    }
}

impl VmArray {
    pub fn new() -> Self {
        let mut data = Vec::new();
        data.resize_with(ARRAY_INITIAL_CAPACITY, || Value::Nil);
        VmArray { data, len: 0 }
    }

    /// Number of addressable slots.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Logical size: the number of slots holding a non-nil value.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The slot at `index`, or `None` past the current capacity.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.data.get(index)
    }

    /// Writes `value` into `index`, doubling the buffer until the slot
    /// exists. The previous occupant is dropped.
    pub fn set(&mut self, index: usize, value: Value) {
        while index >= self.data.len() {
            let grown = self.data.len() * 2;
            self.data.resize_with(grown, || Value::Nil);
        }

        let slot = &mut self.data[index];
        match (slot.is_nil(), value.is_nil()) {
            (true, false) => self.len += 1,
            (false, true) => self.len -= 1,
            _ => {}
        }
        *slot = value;
    }

    /// Deep copy; open closure upvalues inside elements are closed against
    /// `stack`.
    pub fn clone_with(&self, stack: &[Value]) -> VmArray {
        VmArray {
            data: self.data.iter().map(|v| clone_value(stack, v)).collect(),
            len: self.len,
        }
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.data.iter_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tracks_logical_size_on_write() {
        let mut arr = VmArray::new();
        assert_eq!(arr.len(), 0);

        arr.set(0, Value::Int(1));
        arr.set(5, Value::Int(2));
        assert_eq!(arr.len(), 2);

        // Overwriting a live slot keeps the size; nilling it shrinks it.
        arr.set(0, Value::Int(9));
        assert_eq!(arr.len(), 2);
        arr.set(0, Value::Nil);
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn doubles_past_capacity() {
        let mut arr = VmArray::new();
        assert_eq!(arr.capacity(), ARRAY_INITIAL_CAPACITY);

        arr.set(ARRAY_INITIAL_CAPACITY, Value::Bool(true));
        assert_eq!(arr.capacity(), ARRAY_INITIAL_CAPACITY * 2);
        assert!(matches!(
            arr.get(ARRAY_INITIAL_CAPACITY),
            Some(Value::Bool(true))
        ));
        assert!(arr.get(arr.capacity()).is_none());
    }

    #[test]
    fn clone_is_independent() {
        let mut arr = VmArray::new();
        arr.set(0, Value::Int(7));

        let mut copy = arr.clone_with(&[]);
        copy.set(0, Value::Int(8));

        assert!(matches!(arr.get(0), Some(Value::Int(7))));
        assert!(matches!(copy.get(0), Some(Value::Int(8))));
    }
}
