// Storage keys and element ids of the default sign-in form profile.
pub const SAVED_FORM_KEY: &str = "saved-form";
pub const REMEMBER_CHECKBOX_ID: &str = "save_for_next_time";
pub const DEFAULT_FIELD_IDS: [&str; 5] = [
    "first_name",
    "last_name",
    "street_and_house_number",
    "plz_and_city",
    "phone_number",
];

/// Field configuration shared by the restore and persist paths.
///
/// The id list is ordered; both paths walk it in the same order so the
/// stored record and the page inputs always cover the same set.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    storage_key: String,
    checkbox_id: String,
    field_ids: Vec<String>,
}

impl FormConfig {
    pub fn new(
        storage_key: &str,
        checkbox_id: &str,
        field_ids: &[&str],
    ) -> Self {
        Self {
            storage_key: storage_key.to_string(),
            checkbox_id: checkbox_id.to_string(),
            field_ids: field_ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn checkbox_id(&self) -> &str {
        &self.checkbox_id
    }

    pub fn field_ids(&self) -> &[String] {
        &self.field_ids
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new(SAVED_FORM_KEY, REMEMBER_CHECKBOX_ID, &DEFAULT_FIELD_IDS)
    }
}
