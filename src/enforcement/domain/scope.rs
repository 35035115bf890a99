use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A dependency's intended usage phase.
///
/// Enforcement uses the scope purely as a pruning and dispatch predicate:
/// test/provided subtrees may be pruned, system-scope nodes resolve through
/// the project's declared dependency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::Test => "test",
            Scope::System => "system",
            Scope::Import => "import",
        }
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compile" => Ok(Scope::Compile),
            "provided" => Ok(Scope::Provided),
            "runtime" => Ok(Scope::Runtime),
            "test" => Ok(Scope::Test),
            "system" => Ok(Scope::System),
            "import" => Ok(Scope::Import),
            _ => Err(format!("Unknown dependency scope: {}", s)),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
