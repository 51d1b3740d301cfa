mod adapter;
mod constants;
mod launchpad;
mod logging;

pub use adapter::{BrowserConnection, BrowserWallet, JsConnection, JsWallet};
pub use launchpad::LaunchpadNamespace;
pub use logging::init_logging;

// Re-export constants functions
pub use constants::*;

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Serialize into plain JS objects (`null` for `None`, no `Map`s), the shape
/// every value handed to the page uses.
pub(crate) fn to_js_value<T: Serialize + ?Sized>(
    value: &T,
) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}
