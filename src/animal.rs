//! Abstraction: callers only see the `Animal` capability, never the concrete type.

use crate::console::Console;
use std::io::{self, Write};
use tracing::trace;

pub trait Animal {
    fn species(&self) -> &'static str;

    /// The line this animal emits, if it makes any sound at all.
    fn sound(&self) -> Option<&'static str> {
        None
    }
}

/// An animal with no particular species and no sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericAnimal;

impl Animal for GenericAnimal {
    fn species(&self) -> &'static str {
        "animal"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Animal for Dog {
    fn species(&self) -> &'static str {
        "dog"
    }

    fn sound(&self) -> Option<&'static str> {
        Some("Woof! Woof!")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Animal for Cat {
    fn species(&self) -> &'static str {
        "cat"
    }

    fn sound(&self) -> Option<&'static str> {
        Some("Meow! Meow!")
    }
}

/// Writes the animal's sound line. Silent animals write nothing.
pub fn make_sound<W: Write>(animal: &dyn Animal, console: &mut Console<W>) -> io::Result<()> {
    trace!(species = animal.species(), "make_sound");
    match animal.sound() {
        Some(line) => console.line(line),
        None => Ok(()),
    }
}
