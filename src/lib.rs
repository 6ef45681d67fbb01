//! A zoo, a garage and a sketchbook: the four classic object-oriented ideas
//! (encapsulation, abstraction, inheritance, polymorphism) written with
//! structs, traits, composition and enums.
//!
//! Run the demo with:
//! ```bash
//! cargo run --bin zoo_demo
//! ```

pub mod animal;
pub mod config;
pub mod console;
pub mod demo;
pub mod error;
pub mod logging;
pub mod person;
pub mod shape;
pub mod vehicle;

pub use animal::{Animal, Cat, Dog, GenericAnimal};
pub use config::{CarConfig, DemoConfig};
pub use console::Console;
pub use error::{DemoError, Result};
pub use person::{Greeting, Person};
pub use shape::Shape;
pub use vehicle::{Car, Drivable, Vehicle};
