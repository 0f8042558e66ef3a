use crate::directory::CountryRecord;
use std::fmt;

/// Input to the resolver: free text or an already resolved country.
///
/// Text covers codes and names alike; the resolver decides how to interpret
/// it. A record skips directory lookups entirely.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Query {
    Text(String),
    Record(CountryRecord),
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Text(text) => f.write_str(text),
            Query::Record(record) => write!(f, "{} ({})", record.display_name(), record.alpha_3),
        }
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Query::Text(value.to_string())
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Query::Text(value)
    }
}

impl From<&String> for Query {
    fn from(value: &String) -> Self {
        Query::Text(value.clone())
    }
}

impl From<CountryRecord> for Query {
    fn from(value: CountryRecord) -> Self {
        Query::Record(value)
    }
}

impl From<&CountryRecord> for Query {
    fn from(value: &CountryRecord) -> Self {
        Query::Record(value.clone())
    }
}
