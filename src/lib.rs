pub(crate) mod common;
mod config;
mod dom;
mod record;
mod storage;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;

pub use common::{FormStoreError, FormStoreResult};
pub use config::{
    FormConfig, DEFAULT_FIELD_IDS, REMEMBER_CHECKBOX_ID, SAVED_FORM_KEY,
};
pub use dom::{FormDom, PageDom};
pub use record::StoredForm;
pub use storage::{BrowserStorage, FormStorage, MemoryStorage};

/// Load/submit handler pair that keeps one form's values in storage.
///
/// Holds no state between calls; every operation reads the DOM and the
/// storage collaborator afresh.
#[derive(Debug, Clone)]
pub struct FormPersistence<S: FormStorage, D: FormDom> {
    config: FormConfig,
    storage: S,
    dom: D,
}

impl<S: FormStorage, D: FormDom> FormPersistence<S, D> {
    pub fn new(config: FormConfig, storage: S, dom: D) -> Self {
        Self {
            config,
            storage,
            dom,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Restores saved field values into the page.
    ///
    /// Absent or shape-rejected data restores nothing and leaves the
    /// checkbox alone. A field that is missing from the record, or was
    /// stored as an empty string, keeps its current DOM value.
    pub fn restore_on_load(&self) -> FormStoreResult<()> {
        let key = self.config.storage_key();
        let stored = match self.storage.load_content(key)? {
            Some(text) => text,
            None => {
                log::info!("no saved form under key: {}", key);
                return Ok(());
            }
        };

        let record = match StoredForm::from_json(&stored) {
            Some(record) => record,
            None => return Ok(()),
        };

        for id in self.config.field_ids() {
            match record.value(id) {
                Some(value) if !value.is_empty() => {
                    self.dom.set_input_value(id, value)?;
                }
                _ => {}
            }
        }

        // Any stored record means the user opted in last time; preselect
        // the checkbox again.
        self.dom
            .set_checkbox_checked(self.config.checkbox_id(), true)?;

        log::info!("restored saved form with {} field(s)", record.len());
        Ok(())
    }

    /// Storage side effect of one submit: saves the current field values
    /// when the remember checkbox is checked, otherwise clears the whole
    /// storage area. Never touches the default submit action.
    pub fn on_submit(&self) -> FormStoreResult<()> {
        let remember =
            self.dom.checkbox_checked(self.config.checkbox_id())?;

        if remember {
            let record = self.collect_record()?;
            self.storage.save_content(
                self.config.storage_key(),
                &record.to_json()?,
            )?;
            log::info!("saved form data for the next visit");
        } else {
            self.storage.clear_all()?;
            log::info!("remember not checked, cleared local storage");
        }
        Ok(())
    }

    fn collect_record(&self) -> FormStoreResult<StoredForm> {
        let mut record = StoredForm::new();
        for id in self.config.field_ids() {
            record.insert(id, &self.dom.input_value(id)?);
        }
        Ok(record)
    }
}

/// Wires persistence to the live page.
///
/// The hosting page's startup sequence calls this once. Saved values are
/// restored immediately; a `submit` listener on the page's first `<form>`
/// then saves or clears storage on every submission until page unload.
pub fn attach(config: FormConfig) -> FormStoreResult<()> {
    let storage = BrowserStorage::new()?;
    let dom = PageDom::new()?;

    let persistence = FormPersistence::new(config, storage, dom.clone());
    persistence.restore_on_load()?;

    let form = dom.form_element()?;
    let on_submit = Closure::wrap(Box::new(move |_event: Event| {
        if let Err(e) = persistence.on_submit() {
            log::error!("submit handler failed: {}", e);
            wasm_bindgen::throw_str(&e.to_string());
        }
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback(
        "submit",
        on_submit.as_ref().unchecked_ref(),
    )?;
    // The listener stays registered until page unload
    on_submit.forget();
    Ok(())
}
