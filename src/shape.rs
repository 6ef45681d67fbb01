//! Run-time polymorphism with a tagged enum instead of a class hierarchy.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Generic,
    Circle,
    Rectangle,
}

impl Shape {
    /// Every variant, in the order the demo draws them.
    pub const ALL: [Shape; 3] = [Shape::Generic, Shape::Circle, Shape::Rectangle];

    pub fn draw(self) -> &'static str {
        match self {
            Shape::Generic => "Drawing a shape.",
            Shape::Circle => "Drawing a circle.",
            Shape::Rectangle => "Drawing a rectangle.",
        }
    }
}
