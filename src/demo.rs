//! The fixed demo script: one instance of every type, exercised section by
//! section in the order encapsulation, abstraction, inheritance, polymorphism.

use crate::animal::{self, Animal, Cat, Dog};
use crate::config::DemoConfig;
use crate::console::Console;
use crate::error::Result;
use crate::person::{Greeting, Person};
use crate::shape::Shape;
use crate::vehicle::{Car, Drivable};
use std::io::Write;
use tracing::debug;

pub const TITLE: &str = "=== ZOO MANAGEMENT SYSTEM (OOP DEMO) ===";
pub const ABSTRACTION: &str = "--- Abstraction Example ---";
pub const INHERITANCE: &str = "--- Inheritance Example ---";
pub const POLYMORPHISM: &str = "--- Polymorphism Example ---";
pub const OVERRIDING: &str = "Example(Method Overriding - Run - time Polymorphism):";
pub const OVERLOADING: &str = "Example(Method Overloading - Compile - time Polymorphism):";
pub const END: &str = "=== END OF DEMO ===";

pub struct Demo<'a, W: Write> {
    config: &'a DemoConfig,
    console: Console<W>,
}

impl<'a, W: Write> Demo<'a, W> {
    pub fn new(config: &'a DemoConfig, out: W) -> Self {
        Self {
            config,
            console: Console::new(out).with_color(config.color),
        }
    }

    /// Runs every section and hands back the writer.
    pub fn run(mut self) -> Result<W> {
        self.console.header(TITLE)?;
        self.console.blank()?;

        let person = self.encapsulation()?;
        self.abstraction()?;
        self.inheritance()?;
        self.polymorphism(&person)?;

        self.console.blank()?;
        self.console.header(END)?;
        self.console.flush()?;
        Ok(self.console.into_inner())
    }

    fn section(&mut self, title: &str) -> Result<()> {
        debug!(section = title, "entering section");
        self.console.blank()?;
        self.console.header(title)?;
        Ok(())
    }

    fn encapsulation(&mut self) -> Result<Person> {
        debug!("encapsulation");
        let mut person = Person::new();
        person.set_name(self.config.person_name.as_str());
        person.say(Greeting::Plain, &mut self.console)?;
        Ok(person)
    }

    fn abstraction(&mut self) -> Result<()> {
        self.section(ABSTRACTION)?;
        let dog: Box<dyn Animal> = Box::new(Dog);
        let cat: Box<dyn Animal> = Box::new(Cat);
        animal::make_sound(dog.as_ref(), &mut self.console)?;
        animal::make_sound(cat.as_ref(), &mut self.console)?;
        Ok(())
    }

    fn inheritance(&mut self) -> Result<()> {
        self.section(INHERITANCE)?;
        let spec = &self.config.car;
        let car = Car::new(spec.make.as_str(), spec.model.as_str(), spec.doors);
        debug!(doors = car.doors(), "car built");
        self.console.line(car.start())?;
        self.console.line(car.honk())?;
        Ok(())
    }

    fn polymorphism(&mut self, person: &Person) -> Result<()> {
        self.section(POLYMORPHISM)?;

        self.console.blank()?;
        self.console.line(OVERRIDING)?;
        for shape in Shape::ALL {
            self.console.line(shape.draw())?;
        }

        self.console.blank()?;
        self.console.line(OVERLOADING)?;
        let greetings = [
            Greeting::Plain,
            Greeting::Custom(self.config.custom_greeting.as_str()),
            Greeting::WithAge(self.config.age),
        ];
        for greeting in greetings {
            person.say(greeting, &mut self.console)?;
        }
        Ok(())
    }
}

/// Runs the demo into `out`.
pub fn run<W: Write>(config: &DemoConfig, out: W) -> Result<W> {
    Demo::new(config, out).run()
}

/// Runs the demo into memory and returns the text.
pub fn render(config: &DemoConfig) -> Result<String> {
    let bytes = run(config, Vec::new())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
