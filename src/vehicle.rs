//! Inheritance, the Rust way: `Car` holds a `Vehicle` and shares its
//! behaviour through the `Drivable` trait's default method.

use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vehicle {
    make: String,
    model: String,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = make.into();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }
}

pub trait Drivable {
    fn as_vehicle(&self) -> &Vehicle;

    fn start(&self) -> String {
        let vehicle = self.as_vehicle();
        trace!(make = vehicle.make(), model = vehicle.model(), "start");
        format!("The {} {} is starting.", vehicle.make(), vehicle.model())
    }
}

impl Drivable for Vehicle {
    fn as_vehicle(&self) -> &Vehicle {
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    vehicle: Vehicle,
    doors: i32,
}

impl Car {
    pub const HONK: &'static str = "Car is honking!";

    pub fn new(make: impl Into<String>, model: impl Into<String>, doors: i32) -> Self {
        Self {
            vehicle: Vehicle::new(make, model),
            doors,
        }
    }

    pub fn doors(&self) -> i32 {
        self.doors
    }

    pub fn set_doors(&mut self, doors: i32) {
        self.doors = doors;
    }

    /// Mutable access to the shared vehicle part (make and model).
    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn honk(&self) -> &'static str {
        Self::HONK
    }
}

impl Drivable for Car {
    fn as_vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_start_reports_make_and_model() {
        let vehicle = Vehicle::new("Honda", "Civic");
        assert_eq!(vehicle.start(), "The Honda Civic is starting.");
    }

    #[test]
    fn test_car_shares_vehicle_start() {
        let car = Car::new("Toyota", "Corolla", 4);
        assert_eq!(car.start(), "The Toyota Corolla is starting.");
        assert_eq!(car.start(), car.as_vehicle().start());
    }

    #[test]
    fn test_start_is_verbatim() {
        let car = Car::new("  odd  ", "", 2);
        assert_eq!(car.start(), format!("The {} {} is starting.", "  odd  ", ""));
        assert_eq!(car.start(), "The   odd    is starting.");
    }

    #[test]
    fn test_honk_is_fixed() {
        let mut car = Car::new("Toyota", "Corolla", 4);
        assert_eq!(car.honk(), "Car is honking!");
        car.set_doors(2);
        car.vehicle_mut().set_make("Ford");
        assert_eq!(car.honk(), "Car is honking!");
    }

    #[test]
    fn test_setters() {
        let mut car = Car::default();
        car.vehicle_mut().set_make("Mazda");
        car.vehicle_mut().set_model("MX-5");
        car.set_doors(-3);
        assert_eq!(car.as_vehicle().make(), "Mazda");
        assert_eq!(car.as_vehicle().model(), "MX-5");
        assert_eq!(car.doors(), -3);
        assert_eq!(car.start(), "The Mazda MX-5 is starting.");
    }

    #[test]
    fn test_dynamic_dispatch_over_drivable() {
        let fleet: Vec<Box<dyn Drivable>> = vec![
            Box::new(Vehicle::new("Generic", "Cart")),
            Box::new(Car::new("Toyota", "Corolla", 4)),
        ];
        let lines: Vec<String> = fleet.iter().map(|d| d.start()).collect();
        assert_eq!(
            lines,
            vec!["The Generic Cart is starting.", "The Toyota Corolla is starting."]
        );
    }
}
