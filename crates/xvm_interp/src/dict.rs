//! Open-addressed hash table backing the `dict` value kind.

use crate::string::str_hash;
use crate::values::{clone_value, Value};

/// Starting bucket count for every dictionary.
pub const DICT_INITIAL_CAPACITY: usize = 64;

/// Load factor (in percent) above which the table doubles.
const DICT_MAX_LOAD_PERCENT: usize = 70;

#[derive(Debug)]
struct Slot {
    key: Option<Box<str>>,
    value: Value,
}

impl Slot {
    fn empty() -> Self {
        Slot {
            key: None,
            value: Value::Nil,
        }
    }
}

/// String-keyed hash table with FNV-1a hashing and linear probing.
///
/// There is no delete operation in the instruction set, so probe chains never
/// contain tombstones. The table doubles once occupancy crosses
/// [`DICT_MAX_LOAD_PERCENT`], keeping probes short under collisions.
#[derive(Debug)]
pub struct VmDict {
    slots: Vec<Slot>,
    len: usize,
}

impl Default for VmDict {
    fn default() -> Self {
        VmDict::new()
    }
}

impl VmDict {
    pub fn new() -> Self {
        VmDict::with_capacity(DICT_INITIAL_CAPACITY)
    }

    fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, Slot::empty);
        VmDict { slots, len: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of key-value pairs currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn bucket(&self, key: &str) -> usize {
        str_hash(key) as usize % self.slots.len()
    }

    /// Index of the slot holding `key`, or of the first empty slot in its
    /// probe chain.
    fn probe(&self, key: &str) -> usize {
        let mut index = self.bucket(key);
        loop {
            match &self.slots[index].key {
                Some(existing) if existing.as_ref() == key => return index,
                None => return index,
                Some(_) => index = (index + 1) % self.slots.len(),
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        let slot = &self.slots[self.probe(key)];
        slot.key.as_ref().map(|_| &slot.value)
    }

    /// Inserts or overwrites `key`. Grows first when the write would push the
    /// table past its load limit.
    pub fn set(&mut self, key: &str, value: Value) {
        if (self.len + 1) * 100 > self.slots.len() * DICT_MAX_LOAD_PERCENT {
            self.grow();
        }

        let index = self.probe(key);
        let slot = &mut self.slots[index];
        if slot.key.is_none() {
            slot.key = Some(key.into());
            self.len += 1;
        }
        slot.value = value;
    }

    fn grow(&mut self) {
        let doubled = self.slots.len() * 2;
        let old = std::mem::replace(self, VmDict::with_capacity(doubled));
        for slot in old.slots {
            if let Some(key) = slot.key {
                self.set(&key, slot.value);
            }
        }
    }

    /// The value of the `n`-th occupied slot in table order. Used by the
    /// dictionary iteration opcode.
    pub fn nth_value(&self, n: usize) -> Option<&Value> {
        self.slots
            .iter()
            .filter(|slot| slot.key.is_some())
            .nth(n)
            .map(|slot| &slot.value)
    }

    /// Deep copy; open closure upvalues inside values are closed against
    /// `stack`.
    pub fn clone_with(&self, stack: &[Value]) -> VmDict {
        VmDict {
            slots: self
                .slots
                .iter()
                .map(|slot| Slot {
                    key: slot.key.clone(),
                    value: clone_value(stack, &slot.value),
                })
                .collect(),
            len: self.len,
        }
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.slots
            .iter_mut()
            .filter(|slot| slot.key.is_some())
            .map(|slot| &mut slot.value)
    }
}
