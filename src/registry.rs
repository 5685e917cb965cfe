//! Instruction registry.
//!
//! The registry is the accumulation point of the scan phase: every
//! successfully parsed line is appended, insertion order preserved. Order
//! matters — the comparator's final tie-break is reverse insertion order,
//! which is what gives later configuration sources override priority.
//!
//! Two logical states: **Empty** (post-construction or post-[`flush`]) and
//! **Populated**. Resolution is a pure read and never changes state.
//!
//! No hidden global instance: construct one, pass it by reference.
//!
//! [`flush`]: Registry::flush

use crate::Instruction;

/// Ordered collection of all parsed instructions from one configuration scan.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Instruction>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Append an instruction at the end. Never rejects a well-formed
    /// instruction; duplicates and overlapping scopes are resolved later by
    /// the comparator, not here.
    pub fn append(&mut self, instruction: Instruction) {
        self.entries.push(instruction);
    }

    /// Clear all entries. Idempotent; call before a fresh configuration scan
    /// so no stale instruction survives into the next one.
    pub fn flush(&mut self) {
        self.entries.clear();
    }

    /// Read-only view of all entries, iteration order = insertion order.
    pub fn all(&self) -> &[Instruction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction(line: &str) -> Instruction {
        Instruction::from_line(line).unwrap()
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut registry = Registry::new();
        registry.append(instruction("a support mailto:a@x"));
        registry.append(instruction("b support mailto:b@x"));
        registry.append(instruction("a support mailto:a@x"));

        let scopes: Vec<&str> = registry.all().iter().map(|i| i.scope()).collect();
        assert_eq!(scopes, ["a", "b", "a"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn duplicates_are_permitted() {
        let mut registry = Registry::new();
        registry.append(instruction("pkg include crash-log /var/log/c.log"));
        registry.append(instruction("pkg include crash-log /var/log/c.log"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn flush_is_idempotent() {
        let mut registry = Registry::new();
        registry.append(instruction("* support mailto:x@y"));

        registry.flush();
        registry.flush();

        assert!(registry.is_empty());
        assert_eq!(registry.all(), Registry::new().all());
    }
}
