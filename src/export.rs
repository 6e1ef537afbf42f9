use js_sys::{Array, Uint8Array};
use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement,
    HtmlElement, Url,
};

/// Capture resolution relative to the on-screen size of the document.
const PDF_SCALE: i32 = 2;
const IMAGE_SCALE: i32 = 3;

/// A4 portrait, 210x297 mm expressed in PDF points.
const MM_TO_PT: f32 = 72.0 / 25.4;
const A4_WIDTH: f32 = 210.0 * MM_TO_PT;
const A4_HEIGHT: f32 = 297.0 * MM_TO_PT;

#[wasm_bindgen]
extern "C" {
    /// The capture routine supplied by the host page. Walks a live layout
    /// subtree and resolves to an `HTMLCanvasElement` bitmap of it.
    #[wasm_bindgen(js_name = html2canvas)]
    fn html2canvas(target: &HtmlElement, options: &JsValue) -> js_sys::Promise;
}

#[derive(Serialize)]
struct CaptureOptions {
    #[serde(rename = "useCORS")]
    use_cors: bool,
    background: &'static str,
    width: i32,
    height: i32,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("capture failed: {0}")]
    Capture(String),
    #[error("pixel readback failed: {0}")]
    Readback(String),
    #[error("file save failed: {0}")]
    Save(String),
}

pub fn filename(student_name: &str, extension: &str) -> String {
    format!("{}_transcript.{}", student_name, extension)
}

/// Captures the rendered document and saves it as a single-page A4 PDF with
/// the bitmap embedded full bleed. The capture stage completes before any
/// bytes are written.
pub async fn download_pdf(target: HtmlElement, filename: String) -> Result<(), ExportError> {
    let canvas = capture(&target, PDF_SCALE).await?;
    let (rgb, width, height) = read_pixels(&canvas)?;
    let bytes = a4_page_pdf(&rgb, width, height);
    save_bytes(&bytes, "application/pdf", &filename)
}

/// Captures the rendered document and saves the bitmap as a PNG.
pub async fn download_image(target: HtmlElement, filename: String) -> Result<(), ExportError> {
    let canvas = capture(&target, IMAGE_SCALE).await?;
    let href = canvas
        .to_data_url_with_type("image/png")
        .map_err(|err| ExportError::Save(js_string(&err)))?;
    save_url(&href, &filename)
}

async fn capture(target: &HtmlElement, scale: i32) -> Result<HtmlCanvasElement, ExportError> {
    let options = CaptureOptions {
        use_cors: true,
        background: "#ffffff",
        width: target.offset_width() * scale,
        height: target.offset_height() * scale,
    };
    let options =
        JsValue::from_serde(&options).map_err(|err| ExportError::Capture(err.to_string()))?;

    JsFuture::from(html2canvas(target, &options))
        .await
        .map_err(|err| ExportError::Capture(js_string(&err)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ExportError::Capture("capture routine did not return a canvas".into()))
}

fn read_pixels(canvas: &HtmlCanvasElement) -> Result<(Vec<u8>, u32, u32), ExportError> {
    let context = canvas
        .get_context("2d")
        .map_err(|err| ExportError::Readback(js_string(&err)))?
        .ok_or_else(|| ExportError::Readback("canvas has no 2d context".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ExportError::Readback("unexpected rendering context type".into()))?;

    let width = canvas.width();
    let height = canvas.height();
    let rgba = context
        .get_image_data(0.0, 0.0, f64::from(width), f64::from(height))
        .map_err(|err| ExportError::Readback(js_string(&err)))?
        .data()
        .0;

    Ok((strip_alpha(&rgba), width, height))
}

/// The capture is drawn on an opaque white background, so the alpha channel
/// carries no information and DeviceRGB samples are enough for the PDF.
fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .flat_map(|pixel| pixel[..3].iter().copied())
        .collect()
}

/// Builds a one-page PDF: A4 portrait media box, one flate-compressed image
/// XObject stretched across the whole page.
fn a4_page_pdf(rgb: &[u8], width: u32, height: u32) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let image_id = Ref::new(4);
    let content_id = Ref::new(5);
    let image_name = Name(b"Im0");

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, A4_WIDTH, A4_HEIGHT));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources().x_objects().pair(image_name, image_id);
    page.finish();

    let samples = compress_to_vec_zlib(rgb, 8);
    let mut image = pdf.image_xobject(image_id, &samples);
    image.filter(Filter::FlateDecode);
    image.width(width as i32);
    image.height(height as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    let mut content = Content::new();
    content.save_state();
    content.transform([A4_WIDTH, 0.0, 0.0, A4_HEIGHT, 0.0, 0.0]);
    content.x_object(image_name);
    content.restore_state();
    pdf.stream(content_id, &content.finish());

    pdf.finish()
}

fn save_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), ExportError> {
    let parts = Array::of1(&Uint8Array::from(bytes).into());
    let mut options = BlobPropertyBag::new();
    options.type_(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|err| ExportError::Save(js_string(&err)))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|err| ExportError::Save(js_string(&err)))?;
    let saved = save_url(&url, filename);
    let _ = Url::revoke_object_url(&url);
    saved
}

fn save_url(href: &str, filename: &str) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Save("no document".into()))?;

    let anchor = document
        .create_element("a")
        .map_err(|err| ExportError::Save(js_string(&err)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Save("could not create download link".into()))?;

    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

fn js_string(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_keeps_the_student_name_as_given() {
        assert_eq!(filename("Faiz Shahzad", "pdf"), "Faiz Shahzad_transcript.pdf");
        assert_eq!(filename("Faiz Shahzad", "png"), "Faiz Shahzad_transcript.png");
        // No sanitization is performed.
        assert_eq!(filename("a/b: c", "pdf"), "a/b: c_transcript.pdf");
    }

    #[test]
    fn alpha_channel_is_dropped_from_captured_pixels() {
        let rgba = [10, 20, 30, 255, 40, 50, 60, 255];
        assert_eq!(strip_alpha(&rgba), vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn pdf_container_holds_one_a4_page_with_an_image() {
        let rgb = vec![255u8; 2 * 2 * 3];
        let bytes = a4_page_pdf(&rgb, 2, 2);

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.windows(5).any(|window| window == b"%%EOF"));
        assert!(bytes.windows(6).any(|window| window == b"/Image"));
    }
}
