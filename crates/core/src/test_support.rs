//! Hand-written enumerations shared by unit tests.

use crate::Enumeration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priority {
    value: i32,
    name: &'static str,
}

impl Priority {
    pub const HIGH: Self = Self {
        value: 10,
        name: "High",
    };
    pub const LOW: Self = Self {
        value: 1,
        name: "Low",
    };
    pub const URGENT: Self = Self {
        value: -5,
        name: "Urgent",
    };
}

impl Enumeration for Priority {
    const TYPE_NAME: &'static str = "Priority";
    const MEMBERS: &'static [Self] = &[Self::HIGH, Self::LOW, Self::URGENT];

    fn value(&self) -> i32 {
        self.value
    }

    fn display_name(&self) -> &'static str {
        self.name
    }
}

/// Shares value 1 with `Priority::LOW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
}

impl Enumeration for Color {
    const TYPE_NAME: &'static str = "Color";
    const MEMBERS: &'static [Self] = &[Self::Red, Self::Blue];

    fn value(&self) -> i32 {
        match self {
            Self::Red => 1,
            Self::Blue => 2,
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
        }
    }
}

/// Repeats value 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    value: i32,
    name: &'static str,
}

impl Shade {
    pub const LIGHT: Self = Self {
        value: 1,
        name: "Light",
    };
    pub const PALE: Self = Self {
        value: 1,
        name: "Pale",
    };
    pub const DARK: Self = Self {
        value: 2,
        name: "Dark",
    };
}

impl Enumeration for Shade {
    const TYPE_NAME: &'static str = "Shade";
    const MEMBERS: &'static [Self] = &[Self::LIGHT, Self::PALE, Self::DARK];

    fn value(&self) -> i32 {
        self.value
    }

    fn display_name(&self) -> &'static str {
        self.name
    }
}

/// Repeats the display name "Same".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    First,
    Second,
}

impl Enumeration for Echo {
    const TYPE_NAME: &'static str = "Echo";
    const MEMBERS: &'static [Self] = &[Self::First, Self::Second];

    fn value(&self) -> i32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    fn display_name(&self) -> &'static str {
        "Same"
    }
}

/// A distinct type that claims the name "Priority".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impostor {
    Only,
}

impl Enumeration for Impostor {
    const TYPE_NAME: &'static str = "Priority";
    const MEMBERS: &'static [Self] = &[Self::Only];

    fn value(&self) -> i32 {
        0
    }

    fn display_name(&self) -> &'static str {
        "Only"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Empty {}

impl Enumeration for Empty {
    const TYPE_NAME: &'static str = "Empty";
    const MEMBERS: &'static [Self] = &[];

    fn value(&self) -> i32 {
        match *self {}
    }

    fn display_name(&self) -> &'static str {
        match *self {}
    }
}
