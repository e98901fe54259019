use std::cell::OnceCell;
use std::fmt;

/// A value computed once and cached inside its owning struct.
///
/// The slot is bound to an attribute name and starts empty. The first
/// [`Self::get_or_compute`] invokes the computation with the owning instance
/// and stores the result; every later access returns the stored value without
/// recomputation. Each instance carries its own slot, nothing is shared
/// between instances.
///
/// Not `Sync`: first access from multiple threads on the same slot is not
/// supported and the owning code must add its own synchronization if it ever
/// becomes multi-threaded.
pub struct Memoized<T> {
    name: &'static str,
    slot: OnceCell<T>,
}

impl<T> Memoized<T> {
    /// Returns an empty slot bound to the given attribute name.
    pub fn new(name: &'static str) -> Self {
        Self { name, slot: OnceCell::new() }
    }

    /// Name of the attribute this slot is bound to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the cached value, computing and storing it on first access.
    ///
    /// The computation receives the owning instance as its sole argument. If
    /// it reaches this slot again recursively, the value stored first wins.
    pub fn get_or_compute<O>(&self, owner: &O, compute: impl FnOnce(&O) -> T) -> &T {
        if let Some(value) = self.slot.get() {
            return value;
        }

        let value = compute(owner);
        self.slot.get_or_init(|| value)
    }

    /// Fallible variant of [`Self::get_or_compute`].
    ///
    /// A computation error is propagated verbatim and leaves the slot empty,
    /// so a later access runs the computation again.
    pub fn get_or_try_compute<O, E>(&self, owner: &O, compute: impl FnOnce(&O) -> Result<T, E>) -> Result<&T, E> {
        if let Some(value) = self.slot.get() {
            return Ok(value);
        }

        let value = compute(owner)?;
        Ok(self.slot.get_or_init(|| value))
    }

    /// Returns the cached value without computing it.
    pub fn peek(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Overwrites the slot unconditionally and returns the previous value.
    /// Whichever write happens last is what subsequent reads see.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let previous = self.slot.take();
        let _ = self.slot.set(value);
        previous
    }

    /// Clears the slot so the next access recomputes.
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memoized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => write!(f, "Memoized({}: {:?})", self.name, value),
            None => write!(f, "Memoized({}: <not computed>)", self.name),
        }
    }
}
