//! Bayer / Flamsteed designations such as `"61 Cyg"`, `"alf CMa"` or `"1 alf Crv"`.
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static DESIGNATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<flamsteed>\d{1,3})\s+)?(?:(?P<bayer>[a-z]{2,3}\d{0,2})\s+)?(?P<constellation>[A-Z][A-Za-z]{2})$",
    )
    .expect("designation regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    pub flamsteed: Option<u32>,
    /// Abbreviated Greek letter, with its superscript index when present (`"alf2"`)
    pub bayer: Option<String>,
    /// IAU three-letter constellation abbreviation
    pub constellation: String,
}

impl Designation {
    /// Parse a designation, surrounding whitespace ignored.
    ///
    /// Return
    /// ----------
    /// * `None` if the text is not `[flamsteed] [bayer] constellation`.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = DESIGNATION.captures(text.trim())?;
        Some(Designation {
            flamsteed: caps
                .name("flamsteed")
                .and_then(|m| m.as_str().parse().ok()),
            bayer: caps.name("bayer").map(|m| m.as_str().to_string()),
            constellation: caps["constellation"].to_string(),
        })
    }
}

impl std::fmt::Display for Designation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(flamsteed) = self.flamsteed {
            write!(f, "{flamsteed} ")?;
        }
        if let Some(bayer) = &self.bayer {
            write!(f, "{bayer} ")?;
        }
        write!(f, "{}", self.constellation)
    }
}
