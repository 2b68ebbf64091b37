use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement};

use crate::common::{FormStoreError, FormStoreResult};

/// Read/write access to the page elements the component touches.
pub trait FormDom {
    fn input_value(&self, id: &str) -> FormStoreResult<String>;
    fn set_input_value(&self, id: &str, value: &str) -> FormStoreResult<()>;
    fn checkbox_checked(&self, id: &str) -> FormStoreResult<bool>;
    fn set_checkbox_checked(
        &self,
        id: &str,
        checked: bool,
    ) -> FormStoreResult<()>;
}

/// `FormDom` over the live browser document.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDom {
    document: Document,
}

impl PageDom {
    pub fn new() -> FormStoreResult<Self> {
        let window = web_sys::window().ok_or(FormStoreError::NoWindow)?;
        let document =
            window.document().ok_or(FormStoreError::NoDocument)?;
        Ok(Self { document })
    }

    /// The page's first `<form>`, in `getElementsByTagName` order.
    pub fn form_element(&self) -> FormStoreResult<HtmlFormElement> {
        let forms = self.document.get_elements_by_tag_name("form");
        let element = forms.item(0).ok_or_else(|| {
            FormStoreError::ElementNotFound("form".to_string())
        })?;
        // The tag-name query guarantees the element type
        Ok(element.unchecked_into::<HtmlFormElement>())
    }

    fn input_element(&self, id: &str) -> FormStoreResult<HtmlInputElement> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| FormStoreError::ElementNotFound(id.to_string()))?;
        element
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| FormStoreError::NotAnInput(id.to_string()))
    }
}

impl FormDom for PageDom {
    fn input_value(&self, id: &str) -> FormStoreResult<String> {
        Ok(self.input_element(id)?.value())
    }

    fn set_input_value(&self, id: &str, value: &str) -> FormStoreResult<()> {
        self.input_element(id)?.set_value(value);
        Ok(())
    }

    fn checkbox_checked(&self, id: &str) -> FormStoreResult<bool> {
        Ok(self.input_element(id)?.checked())
    }

    fn set_checkbox_checked(
        &self,
        id: &str,
        checked: bool,
    ) -> FormStoreResult<()> {
        self.input_element(id)?.set_checked(checked);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn page_document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn mount_input(id: &str) -> web_sys::Element {
        let document = page_document();
        let input = document.create_element("input").unwrap();
        input.set_id(id);
        document.body().unwrap().append_child(&input).unwrap();
        input
    }

    #[wasm_bindgen_test]
    fn test_input_value_roundtrip() {
        let input = mount_input("test_dom_roundtrip");
        let dom = PageDom::new().unwrap();

        assert_eq!(dom.input_value("test_dom_roundtrip").unwrap(), "");

        dom.set_input_value("test_dom_roundtrip", "Jane").unwrap();
        assert_eq!(dom.input_value("test_dom_roundtrip").unwrap(), "Jane");

        input.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_element() {
        let dom = PageDom::new().unwrap();
        let result = dom.input_value("test_dom_no_such_id");
        assert_eq!(
            result.unwrap_err(),
            FormStoreError::ElementNotFound("test_dom_no_such_id".to_string())
        );
    }

    #[wasm_bindgen_test]
    fn test_element_that_is_not_an_input() {
        let document = page_document();
        let div = document.create_element("div").unwrap();
        div.set_id("test_dom_div");
        document.body().unwrap().append_child(&div).unwrap();

        let dom = PageDom::new().unwrap();
        let result = dom.input_value("test_dom_div");
        assert_eq!(
            result.unwrap_err(),
            FormStoreError::NotAnInput("test_dom_div".to_string())
        );

        div.remove();
    }

    #[wasm_bindgen_test]
    fn test_checkbox_state() {
        let document = page_document();
        let checkbox: HtmlInputElement = document
            .create_element("input")
            .unwrap()
            .unchecked_into();
        checkbox.set_type("checkbox");
        checkbox.set_id("test_dom_checkbox");
        document.body().unwrap().append_child(&checkbox).unwrap();

        let dom = PageDom::new().unwrap();
        assert_eq!(dom.checkbox_checked("test_dom_checkbox").unwrap(), false);

        dom.set_checkbox_checked("test_dom_checkbox", true).unwrap();
        assert_eq!(dom.checkbox_checked("test_dom_checkbox").unwrap(), true);

        dom.set_checkbox_checked("test_dom_checkbox", false).unwrap();
        assert_eq!(dom.checkbox_checked("test_dom_checkbox").unwrap(), false);

        checkbox.remove();
    }

    #[wasm_bindgen_test]
    fn test_form_element_lookup() {
        let dom = PageDom::new().unwrap();

        // The shared test page starts without a form
        assert_eq!(
            dom.form_element().unwrap_err(),
            FormStoreError::ElementNotFound("form".to_string())
        );

        let document = page_document();
        let form = document.create_element("form").unwrap();
        document.body().unwrap().append_child(&form).unwrap();

        let found = dom.form_element();
        assert!(found.is_ok(), "Failed to find the mounted form");

        form.remove();
    }
}
