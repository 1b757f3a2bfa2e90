//! Cookie access for the CSRF companion value.
//!
//! The refresh credential itself is an HTTP-only cookie the client never
//! sees; only its readable CSRF companion is looked up here. Requires a
//! browser environment; on the server the jar always reads empty.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Read a cookie value from `document.cookie` by name.
pub fn read(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        let document = web_sys::window()?.document()?;
        let jar = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
        value_from_jar(&jar, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Find `name` in a `k=v; k2=v2` cookie jar string.
pub(crate) fn value_from_jar(jar: &str, name: &str) -> Option<String> {
    jar.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}
