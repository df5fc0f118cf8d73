/// The fixed penalty taxonomy aggregated at depth 2 of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Fines,
    Arrests,
    Charges,
}

impl Outcome {
    /// Leaf emission order within a category node.
    pub const ALL: [Outcome; 3] = [Outcome::Fines, Outcome::Arrests, Outcome::Charges];

    pub fn name(self) -> &'static str {
        match self {
            Outcome::Fines => "Fines",
            Outcome::Arrests => "Arrests",
            Outcome::Charges => "Charges",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Fines" => Some(Outcome::Fines),
            "Arrests" => Some(Outcome::Arrests),
            "Charges" => Some(Outcome::Charges),
            _ => None,
        }
    }
}
