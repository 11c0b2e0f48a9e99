//! Person model: identity and contact details.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Address;
use super::text::{deserialize_normalized, normalize_text};

/// Middle-initial placeholder meaning "no initial".
///
/// `None` and `Some(NO_MIDDLE_INITIAL)` are treated the same way when
/// building a display name.
pub const NO_MIDDLE_INITIAL: char = '\0';

/// A person with basic identity and contact details.
///
/// Text fields are trimmed on write and blank input is stored as absent.
/// The birth date and phone number are kept as free text without validation.
///
/// # Example
///
/// ```
/// use payroll_model::models::Person;
///
/// let person = Person::new(Some("Patel"), Some("Jay"), Some('M'), Some("1998-05-12"), Some("306-555-1234"), None);
/// assert_eq!(person.display_name(), "Patel, Jay M");
/// assert_eq!(person.to_string(), "Patel, Jay M");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, deserialize_with = "deserialize_normalized")]
    last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_normalized")]
    first_name: Option<String>,
    #[serde(default)]
    middle_init: Option<char>,
    #[serde(default, deserialize_with = "deserialize_normalized")]
    birth_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_normalized")]
    phone_number: Option<String>,
    #[serde(default)]
    address: Option<Address>,
}

impl Person {
    /// Creates a person, normalizing the text fields.
    ///
    /// The middle initial is stored exactly as given.
    pub fn new(
        last_name: Option<&str>,
        first_name: Option<&str>,
        middle_init: Option<char>,
        birth_date: Option<&str>,
        phone_number: Option<&str>,
        address: Option<Address>,
    ) -> Self {
        Self {
            last_name: normalize_text(last_name),
            first_name: normalize_text(first_name),
            middle_init,
            birth_date: normalize_text(birth_date),
            phone_number: normalize_text(phone_number),
            address,
        }
    }

    /// Returns the last name (surname), if set.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Sets the last name. Trimmed; blanks become absent.
    pub fn set_last_name(&mut self, last_name: Option<&str>) {
        self.last_name = normalize_text(last_name);
    }

    /// Returns the first name (given name), if set.
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Sets the first name. Trimmed; blanks become absent.
    pub fn set_first_name(&mut self, first_name: Option<&str>) {
        self.first_name = normalize_text(first_name);
    }

    /// Returns the middle initial as stored.
    pub fn middle_init(&self) -> Option<char> {
        self.middle_init
    }

    /// Sets the middle initial. Stored as given.
    pub fn set_middle_init(&mut self, middle_init: Option<char>) {
        self.middle_init = middle_init;
    }

    /// Returns the birth date text, if set.
    pub fn birth_date(&self) -> Option<&str> {
        self.birth_date.as_deref()
    }

    /// Sets the birth date text. Trimmed; blanks become absent.
    pub fn set_birth_date(&mut self, birth_date: Option<&str>) {
        self.birth_date = normalize_text(birth_date);
    }

    /// Returns the phone number text, if set.
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Sets the phone number text. Trimmed; blanks become absent.
    pub fn set_phone_number(&mut self, phone_number: Option<&str>) {
        self.phone_number = normalize_text(phone_number);
    }

    /// Returns the mailing address, if set.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Returns a mutable reference to the mailing address, if set.
    pub fn address_mut(&mut self) -> Option<&mut Address> {
        self.address.as_mut()
    }

    /// Replaces the mailing address.
    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address;
    }

    /// Builds a display name of the form `"Last, First M"`.
    ///
    /// - Both names present: `"Last, First"`.
    /// - Only one present: that name alone, without a separator.
    /// - Neither present: `""`.
    ///
    /// The middle initial is appended after a space only when a first name is
    /// present and the initial is not [`NO_MIDDLE_INITIAL`].
    pub fn display_name(&self) -> String {
        let mut name = String::new();

        if let Some(last_name) = &self.last_name {
            name.push_str(last_name);
        }

        if let Some(first_name) = &self.first_name {
            if !name.is_empty() {
                name.push_str(", ");
            }
            name.push_str(first_name);

            if let Some(initial) = self.middle_init.filter(|c| *c != NO_MIDDLE_INITIAL) {
                name.push(' ');
                name.push(initial);
            }
        }

        name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_person(
        last_name: Option<&str>,
        first_name: Option<&str>,
        middle_init: Option<char>,
    ) -> Person {
        Person::new(last_name, first_name, middle_init, None, None, None)
    }

    #[test]
    fn test_display_name_with_middle() {
        let person = Person::new(
            Some("Patel"),
            Some("Jay"),
            Some('M'),
            Some("1998-05-12"),
            Some("306-555-1234"),
            None,
        );
        assert_eq!(person.display_name(), "Patel, Jay M");
    }

    #[test]
    fn test_display_name_no_middle() {
        let person = create_person(Some("Patel"), Some("Jay"), None);
        assert_eq!(person.display_name(), "Patel, Jay");
    }

    #[test]
    fn test_display_name_sentinel_middle_is_skipped() {
        let person = create_person(Some("Patel"), Some("Jay"), Some(NO_MIDDLE_INITIAL));
        assert_eq!(person.display_name(), "Patel, Jay");
        assert!(!person.display_name().contains('\0'));
    }

    #[test]
    fn test_display_name_only_last() {
        let person = create_person(Some("Patel"), None, None);
        assert_eq!(person.display_name(), "Patel");
    }

    #[test]
    fn test_display_name_only_last_ignores_middle() {
        let person = create_person(Some("Patel"), None, Some('M'));
        assert_eq!(person.display_name(), "Patel");
    }

    #[test]
    fn test_display_name_only_first() {
        let person = create_person(None, Some("Jay"), Some('M'));
        assert_eq!(person.display_name(), "Jay M");
    }

    #[test]
    fn test_display_name_none() {
        let person = create_person(None, None, Some('M'));
        assert_eq!(person.display_name(), "");
    }

    #[test]
    fn test_display_name_blank_names_count_as_absent() {
        let person = create_person(Some("   "), Some(" Jay "), None);
        assert_eq!(person.display_name(), "Jay");
    }

    #[test]
    fn test_to_string_delegates_to_display_name() {
        let person = create_person(Some("Patel"), Some("Jay"), Some('K'));
        assert_eq!(person.to_string(), person.display_name());
    }

    #[test]
    fn test_constructor_normalizes_text_fields() {
        let person = Person::new(
            Some(" Patel "),
            Some("\tJay"),
            None,
            Some(" 1998-05-12 "),
            Some("   "),
            None,
        );
        assert_eq!(person.last_name(), Some("Patel"));
        assert_eq!(person.first_name(), Some("Jay"));
        assert_eq!(person.birth_date(), Some("1998-05-12"));
        assert_eq!(person.phone_number(), None);
    }

    #[test]
    fn test_setters_normalize_text_fields() {
        let mut person = Person::default();
        person.set_last_name(Some("  Singh"));
        person.set_first_name(Some(""));
        person.set_birth_date(Some("2000-01-31 "));
        person.set_phone_number(Some(" 306-555-0000 "));
        person.set_middle_init(Some('R'));

        assert_eq!(person.last_name(), Some("Singh"));
        assert_eq!(person.first_name(), None);
        assert_eq!(person.birth_date(), Some("2000-01-31"));
        assert_eq!(person.phone_number(), Some("306-555-0000"));
        assert_eq!(person.middle_init(), Some('R'));
        assert_eq!(person.display_name(), "Singh");
    }

    #[test]
    fn test_address_is_owned_and_mutable() {
        let mut person = create_person(Some("Patel"), Some("Jay"), None);
        assert!(person.address().is_none());

        person.set_address(Some(Address::new(None, Some("Saskatoon"), Some("SK"), None)));
        if let Some(address) = person.address_mut() {
            address.set_postal_code(Some("S7J 4M3"));
        }

        assert_eq!(
            person.address().map(Address::display_address).as_deref(),
            Some("Saskatoon, SK S7J 4M3")
        );
    }

    #[test]
    fn test_deserialize_normalizes_and_defaults() {
        let json = r#"{
            "last_name": " Patel ",
            "first_name": "Jay",
            "middle_init": "M",
            "phone_number": "  "
        }"#;

        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.last_name(), Some("Patel"));
        assert_eq!(person.phone_number(), None);
        assert_eq!(person.birth_date(), None);
        assert!(person.address().is_none());
        assert_eq!(person.display_name(), "Patel, Jay M");
    }
}
