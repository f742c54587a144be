//! Byte footprint of result containers.
//!
//! A footprint counts the container header plus the heap storage it owns,
//! sized by capacity rather than length. Owned heap data of elements
//! (for example the bytes behind a `String`) is included.

use std::collections::HashMap;
use std::mem::size_of;

pub trait Footprint {
    /// Bytes held by the value itself, excluding the inline header.
    fn heap_bytes(&self) -> usize {
        0
    }

    fn footprint(&self) -> usize
    where
        Self: Sized,
    {
        size_of::<Self>() + self.heap_bytes()
    }
}

macro_rules! inline_footprint {
    ($($ty:ty),*) => {
        $(impl Footprint for $ty {})*
    };
}

inline_footprint!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, bool, char);

impl Footprint for String {
    fn heap_bytes(&self) -> usize {
        self.capacity()
    }
}

impl<T: Footprint> Footprint for Vec<T> {
    fn heap_bytes(&self) -> usize {
        self.capacity() * size_of::<T>() + self.iter().map(Footprint::heap_bytes).sum::<usize>()
    }
}

impl<K: Footprint, V: Footprint, S> Footprint for HashMap<K, V, S> {
    fn heap_bytes(&self) -> usize {
        // One control byte per bucket alongside each (K, V) slot.
        let table = self.capacity() * (size_of::<(K, V)>() + 1);
        let owned: usize = self
            .iter()
            .map(|(k, v)| k.heap_bytes() + v.heap_bytes())
            .sum();
        table + owned
    }
}
