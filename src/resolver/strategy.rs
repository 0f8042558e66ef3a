//! Individual resolution strategies.
//!
//! Each strategy maps its input to at most one country through the directory,
//! then joins on alpha-3 against the capital table. Calling a strategy
//! directly surfaces the specific failure (`InvalidFormat`, `CountryNotFound`,
//! `CapitalNotFound`); the resolver chain hides it.

use crate::capitals::CapitalTable;
use crate::directory::{CountryDirectory, CountryRecord, NameField};
use crate::resolver::error::ResolveError;
use log::debug;

/// Named strategy, in the order the resolver chain tries them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    IsoCode,
    Name,
    Record,
    FuzzyName,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::IsoCode => "iso_code",
            Strategy::Name => "name",
            Strategy::Record => "record",
            Strategy::FuzzyName => "fuzzy_name",
        }
    }
}

/// Resolve a numeric, alpha-2, or alpha-3 code, picked by the query's shape.
///
/// All-digit input is numeric; otherwise two characters mean alpha-2 and
/// three mean alpha-3. Anything else is `InvalidFormat`.
pub fn by_iso_code<D>(
    directory: &D,
    capitals: &CapitalTable,
    code: &str,
) -> Result<String, ResolveError>
where
    D: CountryDirectory + ?Sized,
{
    if is_all_digits(code) {
        return by_numeric(directory, capitals, code);
    }
    match code.chars().count() {
        2 => by_alpha2(directory, capitals, code),
        3 => by_alpha3(directory, capitals, code),
        _ => Err(ResolveError::invalid_format(code)),
    }
}

pub fn by_alpha2<D>(
    directory: &D,
    capitals: &CapitalTable,
    code: &str,
) -> Result<String, ResolveError>
where
    D: CountryDirectory + ?Sized,
{
    if code.chars().count() != 2 {
        return Err(ResolveError::invalid_format(code));
    }
    capital_of(capitals, directory.find_by_alpha2(code), code)
}

pub fn by_alpha3<D>(
    directory: &D,
    capitals: &CapitalTable,
    code: &str,
) -> Result<String, ResolveError>
where
    D: CountryDirectory + ?Sized,
{
    if code.chars().count() != 3 {
        return Err(ResolveError::invalid_format(code));
    }
    capital_of(capitals, directory.find_by_alpha3(code), code)
}

/// Numeric codes shorter than three digits are zero-padded ("4" → "004").
pub fn by_numeric<D>(
    directory: &D,
    capitals: &CapitalTable,
    code: &str,
) -> Result<String, ResolveError>
where
    D: CountryDirectory + ?Sized,
{
    if !is_all_digits(code) {
        return Err(ResolveError::invalid_format(code));
    }
    let padded = format!("{code:0>3}");
    capital_of(capitals, directory.find_by_numeric(&padded), &padded)
}

/// Match formal, then common, then official name; first hit wins.
pub fn by_name<D>(
    directory: &D,
    capitals: &CapitalTable,
    name: &str,
) -> Result<String, ResolveError>
where
    D: CountryDirectory + ?Sized,
{
    let record = NameField::ALL.into_iter().find_map(|field| {
        let hit = directory.find_by_name(field, name);
        if hit.is_none() {
            debug!("no country with {} '{name}'", field.as_str());
        }
        hit
    });
    capital_of(capitals, record, name)
}

/// Use an already resolved country; only the capital join can fail.
pub fn by_record(capitals: &CapitalTable, record: &CountryRecord) -> Result<String, ResolveError> {
    capital_of(capitals, Some(record), &record.alpha_3)
}

/// Take the best-ranked fuzzy match.
pub fn by_fuzzy_name<D>(
    directory: &D,
    capitals: &CapitalTable,
    name: &str,
) -> Result<String, ResolveError>
where
    D: CountryDirectory + ?Sized,
{
    let best = directory.fuzzy_search(name).into_iter().next();
    capital_of(capitals, best, name)
}

fn capital_of(
    capitals: &CapitalTable,
    record: Option<&CountryRecord>,
    query: &str,
) -> Result<String, ResolveError> {
    let record = record.ok_or_else(|| ResolveError::country_not_found(query))?;
    capitals
        .get(&record.alpha_3)
        .map(str::to_string)
        .ok_or_else(|| ResolveError::CapitalNotFound {
            alpha_3: record.alpha_3.clone(),
        })
}

fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
