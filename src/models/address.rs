//! Mailing address model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::text::{deserialize_normalized, normalize_text};

/// A single mailing address (street, city, province, postal code).
///
/// Every field is trimmed on write and whitespace-only input is stored as
/// absent, both at construction and through the setters.
///
/// # Example
///
/// ```
/// use payroll_model::models::Address;
///
/// let address = Address::new(Some("123 Main St"), Some("Saskatoon"), Some("SK"), Some("S7J 4M3"));
/// assert_eq!(address.display_address(), "123 Main St, Saskatoon, SK S7J 4M3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "deserialize_normalized")]
    street: Option<String>,
    #[serde(default, deserialize_with = "deserialize_normalized")]
    city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_normalized")]
    province: Option<String>,
    #[serde(default, deserialize_with = "deserialize_normalized")]
    postal_code: Option<String>,
}

impl Address {
    /// Creates an address, normalizing each field.
    pub fn new(
        street: Option<&str>,
        city: Option<&str>,
        province: Option<&str>,
        postal_code: Option<&str>,
    ) -> Self {
        Self {
            street: normalize_text(street),
            city: normalize_text(city),
            province: normalize_text(province),
            postal_code: normalize_text(postal_code),
        }
    }

    /// Returns the street line, if set.
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    /// Sets the street line. Trimmed; blanks become absent.
    pub fn set_street(&mut self, street: Option<&str>) {
        self.street = normalize_text(street);
    }

    /// Returns the city, if set.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Sets the city. Trimmed; blanks become absent.
    pub fn set_city(&mut self, city: Option<&str>) {
        self.city = normalize_text(city);
    }

    /// Returns the province or state, if set.
    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    /// Sets the province or state. Trimmed; blanks become absent.
    pub fn set_province(&mut self, province: Option<&str>) {
        self.province = normalize_text(province);
    }

    /// Returns the postal or ZIP code, if set.
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// Sets the postal or ZIP code. Trimmed; blanks become absent.
    pub fn set_postal_code(&mut self, postal_code: Option<&str>) {
        self.postal_code = normalize_text(postal_code);
    }

    /// Builds a single-line address: `"Street, City, Province PostalCode"`.
    ///
    /// Street, city and province are joined with `", "`; the postal code
    /// follows after a single space. Missing parts are skipped without
    /// leaving separators behind, and an address with no parts yields `""`.
    pub fn display_address(&self) -> String {
        let mut line = [&self.street, &self.city, &self.province]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        if let Some(postal_code) = &self.postal_code {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(postal_code);
        }

        line
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_address())
    }
}
