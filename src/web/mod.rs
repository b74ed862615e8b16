//! Browser backend: `web-sys` DOM host, DOM renderer and the JS API.

pub mod bindings;
pub mod host;
pub mod renderer;

pub use bindings::WasmCursorTracker;
pub use host::WebHost;
pub use renderer::DomRenderer;
