use session::{CredentialStore, Result};

use crate::errors::Error;

/// `window.localStorage`, values stored as plain strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> std::result::Result<web_sys::Storage, Error> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        window.local_storage()?.ok_or(Error::NoStorage)
    }
}

impl CredentialStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::from(e).into())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::from(e).into())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| Error::from(e).into())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn it_stores_raw_strings_in_local_storage() {
        let store = BrowserStore;

        store.set("Authorization", "abc123").expect("set");
        assert_eq!(store.get("Authorization"), Ok(Some("abc123".to_owned())));

        store.remove("Authorization").expect("remove");
        assert_eq!(store.get("Authorization"), Ok(None));

        store.remove("Authorization").expect("remove again");
    }
}
