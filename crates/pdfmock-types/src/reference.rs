use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Indirect object reference: object number plus generation number.
///
/// Two `Ref`s with the same pair are the same reference, wherever they were
/// created. Lookups key on the value, never on identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ref {
    num: u32,
    generation: u16,
}

impl Ref {
    /// Create a reference to object `num` at `generation`.
    pub const fn new(num: u32, generation: u16) -> Self {
        Self { num, generation }
    }

    /// The object number.
    pub fn num(&self) -> u32 {
        self.num
    }

    /// The generation number.
    pub fn generation(&self) -> u16 {
        self.generation
    }

    /// Canonical key form: `12R` for generation 0, `12R3` otherwise.
    pub fn to_key(&self) -> String {
        if self.generation == 0 {
            format!("{}R", self.num)
        } else {
            format!("{}R{}", self.num, self.generation)
        }
    }

    /// Parse either the key form (`12R`, `12R3`) or the PDF
    /// syntax form (`12 3 R`).
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let invalid = || TypeError::InvalidRef(s.to_string());
        let trimmed = s.trim();

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() == 3 {
            if parts[2] != "R" {
                return Err(invalid());
            }
            let num = parts[0].parse().map_err(|_| invalid())?;
            let generation = parts[1].parse().map_err(|_| invalid())?;
            return Ok(Self::new(num, generation));
        }

        let (num, generation) = trimmed.split_once('R').ok_or_else(invalid)?;
        let num = num.parse().map_err(|_| invalid())?;
        let generation = if generation.is_empty() {
            0
        } else {
            generation.parse().map_err(|_| invalid())?
        };
        Ok(Self::new(num, generation))
    }
}

impl fmt::Debug for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ref({} {} R)", self.num, self.generation)
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_key())
    }
}

impl FromStr for Ref {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(u32, u16)> for Ref {
    fn from((num, generation): (u32, u16)) -> Self {
        Self::new(num, generation)
    }
}

impl Serialize for Ref {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_key())
    }
}

impl<'de> Deserialize<'de> for Ref {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
