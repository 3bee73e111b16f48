use crate::error::{PhonebookError, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the six contact fields.
///
/// The declaration order is the canonical order: it is the key order on disk and
/// the order of [`Field::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Surname,
    Name,
    Patronymic,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Surname,
        Field::Name,
        Field::Patronymic,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    /// Key used for this field in the storage file.
    pub fn key(self) -> &'static str {
        match self {
            Field::Surname => "surname",
            Field::Name => "name",
            Field::Patronymic => "patronymic",
            Field::Organization => "organization",
            Field::WorkPhone => "work_phone",
            Field::PersonalPhone => "personal_phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = PhonebookError;

    /// Accepts the storage key, or the same key spelled with dashes (`work-phone`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('-', "_");
        Field::ALL
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| PhonebookError::InvalidField(s.to_string()))
    }
}

type Accessor = fn(&Contact) -> &str;

fn surname(c: &Contact) -> &str {
    &c.surname
}

fn name(c: &Contact) -> &str {
    &c.name
}

fn patronymic(c: &Contact) -> &str {
    &c.patronymic
}

fn organization(c: &Contact) -> &str {
    &c.organization
}

fn work_phone(c: &Contact) -> &str {
    &c.work_phone
}

fn personal_phone(c: &Contact) -> &str {
    &c.personal_phone
}

// Indexed by `Field as usize`; must stay aligned with `Field::ALL`.
const ACCESSORS: [(Field, Accessor); 6] = [
    (Field::Surname, surname),
    (Field::Name, name),
    (Field::Patronymic, patronymic),
    (Field::Organization, organization),
    (Field::WorkPhone, work_phone),
    (Field::PersonalPhone, personal_phone),
];

/// One entry in the directory.
///
/// A `Contact` never changes once built; editing a contact means building a new
/// one and handing it to [`crate::directory::Directory::edit_contact`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    surname: String,
    name: String,
    patronymic: String,
    organization: String,
    work_phone: String,
    personal_phone: String,
}

impl Contact {
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        patronymic: impl Into<String>,
        organization: impl Into<String>,
        work_phone: impl Into<String>,
        personal_phone: impl Into<String>,
    ) -> Self {
        Self {
            surname: surname.into(),
            name: name.into(),
            patronymic: patronymic.into(),
            organization: organization.into(),
            work_phone: work_phone.into(),
            personal_phone: personal_phone.into(),
        }
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn patronymic(&self) -> &str {
        &self.patronymic
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn work_phone(&self) -> &str {
        &self.work_phone
    }

    pub fn personal_phone(&self) -> &str {
        &self.personal_phone
    }

    /// Value of `field` for this contact.
    pub fn get(&self, field: Field) -> &str {
        let (_, accessor) = ACCESSORS[field as usize];
        accessor(self)
    }

    /// Converts to the mapping stored on disk, keys in canonical order.
    pub fn to_serializable(&self) -> Map<String, Value> {
        let mut map = Map::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            map.insert(
                field.key().to_string(),
                Value::String(self.get(field).to_string()),
            );
        }
        map
    }

    /// Builds a contact from a stored mapping. Values are taken as-is; unknown
    /// keys are ignored.
    pub fn from_serializable(map: &Map<String, Value>) -> Result<Self> {
        let mut values: [String; 6] = Default::default();
        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            let value = map
                .get(field.key())
                .ok_or_else(|| PhonebookError::MissingField(field.key().to_string()))?;
            *slot = value
                .as_str()
                .ok_or_else(|| PhonebookError::FieldType(field.key().to_string()))?
                .to_string();
        }

        let [surname, name, patronymic, organization, work_phone, personal_phone] = values;
        Ok(Self {
            surname,
            name,
            patronymic,
            organization,
            work_phone,
            personal_phone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Contact {
        Contact::new("Ivanov", "Ivan", "Ivanovich", "Acme", "123", "456")
    }

    #[test]
    fn accessor_table_follows_canonical_order() {
        for (position, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(ACCESSORS[position].0, field);
            assert_eq!(field as usize, position);
        }
    }

    #[test]
    fn get_dispatches_to_each_field() {
        let c = sample();
        assert_eq!(c.get(Field::Surname), "Ivanov");
        assert_eq!(c.get(Field::Name), "Ivan");
        assert_eq!(c.get(Field::Patronymic), "Ivanovich");
        assert_eq!(c.get(Field::Organization), "Acme");
        assert_eq!(c.get(Field::WorkPhone), "123");
        assert_eq!(c.get(Field::PersonalPhone), "456");
    }

    #[test]
    fn serializable_keys_are_ordered() {
        let map = sample().to_serializable();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "surname",
                "name",
                "patronymic",
                "organization",
                "work_phone",
                "personal_phone"
            ]
        );
    }

    #[test]
    fn from_serializable_keeps_values_verbatim() {
        let value = json!({
            "surname": "  Петров ",
            "name": "",
            "patronymic": "Sergeevich",
            "organization": "ООО Ромашка",
            "work_phone": "+7 (495) 000-00-00",
            "personal_phone": "",
            "note": "ignored"
        });
        let contact = Contact::from_serializable(value.as_object().unwrap()).unwrap();
        assert_eq!(contact.surname(), "  Петров ");
        assert_eq!(contact.name(), "");
        assert_eq!(contact.organization(), "ООО Ромашка");
    }

    #[test]
    fn from_serializable_reports_missing_field() {
        let mut map = sample().to_serializable();
        map.remove("work_phone");
        let err = Contact::from_serializable(&map).unwrap_err();
        assert!(matches!(err, PhonebookError::MissingField(ref k) if k == "work_phone"));
    }

    #[test]
    fn from_serializable_rejects_non_string_values() {
        let mut map = sample().to_serializable();
        map.insert("name".into(), json!(42));
        let err = Contact::from_serializable(&map).unwrap_err();
        assert!(matches!(err, PhonebookError::FieldType(ref k) if k == "name"));
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("surname".parse::<Field>().unwrap(), Field::Surname);
        assert_eq!("work_phone".parse::<Field>().unwrap(), Field::WorkPhone);
        assert_eq!("personal-phone".parse::<Field>().unwrap(), Field::PersonalPhone);
        assert!(matches!(
            "email".parse::<Field>(),
            Err(PhonebookError::InvalidField(_))
        ));
        // Case matters: only the storage keys are accepted.
        assert!("Surname".parse::<Field>().is_err());
    }
}
