//! Encapsulation: a `Person` whose name is only reachable through methods.

use crate::console::Console;
use std::io::{self, Write};
use tracing::trace;

/// Which greeting to produce. Stands in for three overloads of one method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting<'a> {
    Plain,
    Custom(&'a str),
    WithAge(i32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn greeting(&self, kind: Greeting<'_>) -> String {
        match kind {
            Greeting::Plain => format!("Hello, my name is {}", self.name),
            Greeting::Custom(phrase) => format!("{}, my name is {}", phrase, self.name),
            Greeting::WithAge(age) => {
                format!("Hello, my name is {} and I am {} years old.", self.name, age)
            }
        }
    }

    pub fn greet(&self) -> String {
        self.greeting(Greeting::Plain)
    }

    pub fn greet_with(&self, phrase: &str) -> String {
        self.greeting(Greeting::Custom(phrase))
    }

    pub fn greet_with_age(&self, age: i32) -> String {
        self.greeting(Greeting::WithAge(age))
    }

    pub fn say<W: Write>(&self, kind: Greeting<'_>, console: &mut Console<W>) -> io::Result<()> {
        trace!(?kind, name = %self.name, "greeting");
        console.line(self.greeting(kind))
    }
}
