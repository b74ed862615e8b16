//! DOM render sink: ring + dot glyph and a pool of trail ghosts.
//!
//! Nodes are created once at mount and removed when the renderer drops.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::CursorConfig;
use crate::error::{dom_error, CursorError, CursorResult, OptionExt};
use crate::rendering::feed::{
    CursorFrame, RenderSink, CURSOR_CLASS, DOT_CLASS, RING_CLASS, TRAILER_CLASS, TRAIL_TRANSFORM,
};

pub struct DomRenderer {
    cursor: HtmlElement,
    trailers: Vec<HtmlElement>,
    hover_class: String,
}

impl DomRenderer {
    /// Build the cursor nodes and append them to `<body>`.
    pub fn create(document: &Document, config: &CursorConfig) -> CursorResult<Self> {
        let body = document.body().context("document has no body")?;

        let cursor = create_div(document, CURSOR_CLASS)?;
        for class in [RING_CLASS, DOT_CLASS] {
            let child = create_div(document, class)?;
            cursor.append_child(&child).map_err(|e| dom_error(&e))?;
        }
        body.append_child(&cursor).map_err(|e| dom_error(&e))?;

        let mut trailers = Vec::with_capacity(config.trail_capacity());
        for _ in 0..config.trail_capacity() {
            let trailer = create_div(document, TRAILER_CLASS)?;
            set_style(&trailer, "display", "none");
            set_style(&trailer, "transform", TRAIL_TRANSFORM);
            body.append_child(&trailer).map_err(|e| dom_error(&e))?;
            trailers.push(trailer);
        }

        Ok(Self {
            cursor,
            trailers,
            hover_class: config.hover_class.clone(),
        })
    }
}

impl RenderSink for DomRenderer {
    fn present(&mut self, frame: &CursorFrame) {
        if !frame.visible {
            set_style(&self.cursor, "display", "none");
            for trailer in &self.trailers {
                set_style(trailer, "display", "none");
            }
            return;
        }

        set_style(&self.cursor, "display", "");
        self.cursor.set_class_name(&frame.cursor_class(&self.hover_class));
        set_style(&self.cursor, "transform", &frame.cursor_transform());

        for (i, trailer) in self.trailers.iter().enumerate() {
            match frame.trail.get(i) {
                Some(mark) => {
                    set_style(trailer, "display", "");
                    set_style(trailer, "left", &mark.left_px());
                    set_style(trailer, "top", &mark.top_px());
                    set_style(trailer, "opacity", &mark.opacity.to_string());
                }
                None => set_style(trailer, "display", "none"),
            }
        }
    }
}

impl Drop for DomRenderer {
    fn drop(&mut self) {
        self.cursor.remove();
        for trailer in &self.trailers {
            trailer.remove();
        }
    }
}

fn create_div(document: &Document, class: &str) -> CursorResult<HtmlElement> {
    let element = document
        .create_element("div")
        .map_err(|e| dom_error(&e))?;
    element.set_class_name(class);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| CursorError::Dom("created div is not an HtmlElement".to_string()))
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}
